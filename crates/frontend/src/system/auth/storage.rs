use std::cell::RefCell;

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "access_token";

/// Хранилище токена доступа.
///
/// Токен выдаётся внешней системой; здесь он только хранится и читается.
pub trait TokenStore {
    fn access_token(&self) -> Option<String>;

    fn save_access_token(&self, token: &str);

    fn clear(&self);
}

/// Токен в localStorage браузера
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl TokenStore for LocalStorageTokenStore {
    fn access_token(&self) -> Option<String> {
        get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
    }

    fn save_access_token(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}

/// Токен в памяти (тесты, встраивание без браузера)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save_access_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
