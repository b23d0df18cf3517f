pub mod domain;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::Config;

/// Логирование и перехват паник.
///
/// Корневой компонент приложения ставит сессию в контекст через
/// `system::auth::context::provide_browser_session`.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    match Config::load() {
        Ok(config) => {
            // initializes logging using the `log` crate
            _ = console_log::init_with_level(config.log_level());
            log::debug!("API: {}", config.api.base());
        }
        Err(e) => {
            _ = console_log::init_with_level(log::Level::Debug);
            log::error!("{}", e);
        }
    }
}
