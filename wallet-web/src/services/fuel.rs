//! Fuel Wallet Integration via wasm-bindgen
//!
//! Binds the `window.fuel` object the Fuel Wallet extension injects, and exposes
//! it to the connector as a [`WalletProvider`].

use async_trait::async_trait;
use lib_core::{ProviderError, Wallet};
use lib_fuel::{
    ChainConfig, EventHandler, ListenerId, ProviderEvent, ProviderEventKind, ProviderSlot,
    WalletProvider,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Document event the extension dispatches once `window.fuel` exists.
pub const FUEL_LOADED_EVENT: &str = "FuelLoaded";

// ============================================================================
// WINDOW.FUEL BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function getInjectedFuel() {
    if (typeof window === 'undefined' || !window.fuel) {
        return null;
    }
    return window.fuel;
}

export async function fuelConnect(fuel) {
    const accepted = await fuel.connect();
    if (accepted === false) {
        throw new Error('Connection request was rejected');
    }
}

export async function fuelDisconnect(fuel) {
    await fuel.disconnect();
}

export async function fuelCurrentAccount(fuel) {
    const account = await fuel.currentAccount();
    return String(account);
}

export async function fuelGetWallet(fuel, account) {
    const wallet = await fuel.getWallet(account);
    const provider = wallet.provider && wallet.provider.url ? String(wallet.provider.url) : null;
    return { address: wallet.address.toString(), providerUrl: provider };
}

export function fuelEventName(fuel, kind) {
    if (fuel.events && fuel.events[kind]) {
        return String(fuel.events[kind]);
    }
    return kind;
}

export function fuelOn(fuel, event, callback) {
    fuel.on(event, callback);
}

export function fuelRemoveListener(fuel, event, callback) {
    fuel.removeListener(event, callback);
}
")]
extern "C" {
    /// The injected wallet object, if present.
    #[wasm_bindgen(js_name = getInjectedFuel)]
    fn get_injected_fuel() -> Option<JsValue>;

    #[wasm_bindgen(js_name = fuelConnect, catch)]
    async fn fuel_connect(fuel: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = fuelDisconnect, catch)]
    async fn fuel_disconnect(fuel: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = fuelCurrentAccount, catch)]
    async fn fuel_current_account(fuel: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = fuelGetWallet, catch)]
    async fn fuel_get_wallet(fuel: &JsValue, account: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = fuelEventName)]
    fn fuel_event_name(fuel: &JsValue, kind: &str) -> String;

    #[wasm_bindgen(js_name = fuelOn)]
    fn fuel_on(fuel: &JsValue, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(js_name = fuelRemoveListener)]
    fn fuel_remove_listener(fuel: &JsValue, event: &str, callback: &js_sys::Function);
}

/// Turn a rejected JS promise into a provider error, keeping the wallet's message.
fn js_error(err: JsValue) -> ProviderError {
    if let Some(message) = err.as_string() {
        return ProviderError::Rejected(message);
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return ProviderError::Rejected(String::from(error.message()));
    }
    ProviderError::Rejected(format!("{:?}", err))
}

fn decode_event(kind: ProviderEventKind, payload: JsValue) -> Result<ProviderEvent, ProviderError> {
    match kind {
        ProviderEventKind::CurrentAccount => payload
            .as_string()
            .map(ProviderEvent::CurrentAccount)
            .ok_or_else(|| ProviderError::Decode("Account event without an address".to_string())),
        ProviderEventKind::Network => serde_wasm_bindgen::from_value::<ChainConfig>(payload)
            .map(ProviderEvent::Network)
            .map_err(|e| ProviderError::Decode(format!("Network event: {}", e))),
    }
}

// ============================================================================
// PROVIDER
// ============================================================================

struct JsListener {
    event: String,
    callback: Closure<dyn Fn(JsValue)>,
}

/// [`WalletProvider`] backed by the injected `window.fuel` object.
pub struct JsFuelProvider {
    fuel: JsValue,
    next_id: Cell<u64>,
    // Closures stay alive while registered; removal must pass the same JS function.
    listeners: RefCell<HashMap<ListenerId, JsListener>>,
}

impl JsFuelProvider {
    pub fn new(fuel: JsValue) -> Self {
        Self {
            fuel,
            next_id: Cell::new(0),
            listeners: RefCell::new(HashMap::new()),
        }
    }

    /// Provider for the wallet injected in the current page, if any.
    pub fn injected() -> Option<Self> {
        get_injected_fuel().map(Self::new)
    }
}

#[async_trait(?Send)]
impl WalletProvider for JsFuelProvider {
    async fn connect(&self) -> Result<(), ProviderError> {
        fuel_connect(&self.fuel).await.map(|_| ()).map_err(js_error)
    }

    async fn disconnect(&self) -> Result<(), ProviderError> {
        fuel_disconnect(&self.fuel).await.map(|_| ()).map_err(js_error)
    }

    async fn current_account(&self) -> Result<String, ProviderError> {
        let account = fuel_current_account(&self.fuel).await.map_err(js_error)?;
        account
            .as_string()
            .ok_or_else(|| ProviderError::Decode("Account is not a string".to_string()))
    }

    async fn get_wallet(&self, account: &str) -> Result<Wallet, ProviderError> {
        let wallet = fuel_get_wallet(&self.fuel, account).await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(wallet)
            .map_err(|e| ProviderError::Decode(format!("Wallet: {}", e)))
    }

    fn on(&self, kind: ProviderEventKind, handler: EventHandler) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let event = fuel_event_name(&self.fuel, kind.as_str());
        let callback = Closure::<dyn Fn(JsValue)>::new(move |payload: JsValue| {
            match decode_event(kind, payload) {
                Ok(event) => handler(event),
                Err(err) => log::warn!("Dropping malformed wallet event: {}", err),
            }
        });
        fuel_on(&self.fuel, &event, callback.as_ref().unchecked_ref());

        self.listeners
            .borrow_mut()
            .insert(id, JsListener { event, callback });
        id
    }

    fn remove_listener(&self, _kind: ProviderEventKind, id: ListenerId) {
        let listener = self.listeners.borrow_mut().remove(&id);
        if let Some(listener) = listener {
            fuel_remove_listener(
                &self.fuel,
                &listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

// ============================================================================
// INJECTION DETECTION
// ============================================================================

/// Fill `slot` with the injected wallet now, or once the extension announces it.
///
/// The wallet can be injected after the app has loaded; in that case the
/// extension dispatches a one-shot `FuelLoaded` event on the document.
pub fn detect_injected_provider(slot: &ProviderSlot) {
    if let Some(provider) = JsFuelProvider::injected() {
        log::info!("Fuel wallet found on page load");
        slot.set(Rc::new(provider));
        return;
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, cannot wait for the Fuel wallet");
        return;
    };

    let slot = slot.clone();
    let on_loaded = Closure::once_into_js(move || match JsFuelProvider::injected() {
        Some(provider) => {
            log::info!("Fuel wallet injected after load");
            slot.set(Rc::new(provider));
        }
        None => log::warn!("{} fired but window.fuel is missing", FUEL_LOADED_EVENT),
    });

    if let Err(err) =
        document.add_event_listener_with_callback(FUEL_LOADED_EVENT, on_loaded.unchecked_ref())
    {
        log::error!("Failed to listen for {}: {:?}", FUEL_LOADED_EVENT, err);
    }
}
