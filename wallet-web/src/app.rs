//! Fuel Wallet Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use lib_core::Config;

use crate::components::Navbar;
use crate::pages::{BlockPage, ConnectPage};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            return view! { <SetupError message=err.to_string()/> }.into_any();
        }
    };
    if let Err(err) = provide_wallet_context(config) {
        log::error!("Wallet setup failed: {}", err);
        return view! { <SetupError message=err.to_string()/> }.into_any();
    }

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=ConnectPage/>
                    <Route path=path!("/blocks") view=BlockPage/>
                </Routes>
            </div>
        </Router>
    }
    .into_any()
}

#[component]
fn SetupError(message: String) -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: 100vh;">
            <div class="card error" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 28px; font-weight: 700;">"Configuration error"</h1>
                <p>{message}</p>
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #cccccc; margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
