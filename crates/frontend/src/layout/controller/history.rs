//! Интеграция с History API браузера
//!
//! После `push`/`replace` отправляется `popstate`, чтобы подписчики на смену
//! адреса (глобальный контекст) узнали о переходе так же, как о кнопке «назад».

use wasm_bindgen::JsValue;
use web_sys::{window, PopStateEvent};

use super::location::Location;

pub fn current_location() -> Location {
    window()
        .and_then(|w| w.location().href().ok())
        .map(|href| Location::from_href(&href))
        .unwrap_or_default()
}

pub fn push(location: &Location) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        log::warn!("history is not available");
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&location.to_href())) {
        log::warn!("pushState failed: {:?}", e);
        return;
    }
    notify_location_change();
}

pub fn replace(location: &Location) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        log::warn!("history is not available");
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&location.to_href())) {
        log::warn!("replaceState failed: {:?}", e);
        return;
    }
    notify_location_change();
}

pub fn notify_location_change() {
    let Some(w) = window() else {
        return;
    };
    match PopStateEvent::new("popstate") {
        Ok(event) => {
            if let Err(e) = w.dispatch_event(&event) {
                log::warn!("popstate dispatch failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("failed to create popstate event: {:?}", e),
    }
}
