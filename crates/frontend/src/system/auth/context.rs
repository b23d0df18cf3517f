use std::rc::Rc;

use leptos::prelude::*;

use super::session::Session;
use super::storage::LocalStorageTokenStore;
use crate::shared::config::{Config, ConfigError};
use crate::shared::rest_client::RestClient;

/// Положить сессию в контекст Leptos для компонентов
pub fn provide_session(session: Session) {
    provide_context(StoredValue::new_local(session));
}

/// Сессия из контекста, если провайдер установлен выше по дереву
pub fn use_session() -> Option<Session> {
    use_context::<StoredValue<Session, LocalStorage>>().map(|stored| stored.get_value())
}

/// REST-клиент поверх сессии из контекста
pub fn use_rest_client() -> Option<RestClient> {
    use_session().map(RestClient::new)
}

/// Сессия браузера: встроенная конфигурация и токен из localStorage
pub fn browser_session(config: &Config) -> Session {
    Session::new(config.api.clone(), Rc::new(LocalStorageTokenStore))
}

/// Вызывается корневым компонентом приложения
pub fn provide_browser_session() -> Result<(), ConfigError> {
    let config = Config::load()?;
    provide_session(browser_session(&config));
    Ok(())
}
