//! Browser services

pub mod fuel;
