//! Page modules

pub mod blocks;
pub mod connect;

pub use blocks::BlockPage;
pub use connect::ConnectPage;
