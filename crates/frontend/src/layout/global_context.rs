use crate::layout::controller::history;
use crate::layout::controller::location::Location;
use crate::shared::config::AdminConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event};

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Текущий клиентский адрес, обновляется по `popstate`
    pub location: RwSignal<Location>,
    pub config: StoredValue<AdminConfig>,
}

impl AppGlobalContext {
    pub fn new(config: AdminConfig) -> Self {
        Self {
            location: RwSignal::new(Location::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn init_router_integration(&self) {
        self.location.set(history::current_location());

        let location = self.location;
        let on_popstate = Closure::wrap(Box::new(move |_event: Event| {
            let next = history::current_location();
            // Только если адрес действительно изменился
            if location.with_untracked(|current| *current != next) {
                location.set(next);
            }
        }) as Box<dyn FnMut(_)>);

        match window() {
            Some(w) => {
                if let Err(e) = w.add_event_listener_with_callback(
                    "popstate",
                    on_popstate.as_ref().unchecked_ref(),
                ) {
                    log::warn!("failed to subscribe to popstate: {:?}", e);
                }
            }
            None => log::warn!("window is not available, navigation is disabled"),
        }
        // Обработчик живёт всё время работы приложения
        on_popstate.forget();
    }

    /// Клиентский переход с новой записью в истории
    pub fn navigate(&self, location: &Location) {
        log::debug!("navigate to {}", location.to_href());
        history::push(location);
    }

    /// Переход с заменой текущей записи истории
    pub fn replace(&self, location: &Location) {
        log::debug!("replace location with {}", location.to_href());
        history::replace(location);
    }
}
