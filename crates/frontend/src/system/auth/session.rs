use std::cell::RefCell;
use std::rc::Rc;

use contracts::system::auth::UserInfo;

use super::storage::TokenStore;
use crate::shared::api_error::ApiError;
use crate::shared::config::ApiConfig;

/// Сессия клиента: адрес бэкенда, хранилище токена и текущий пользователь.
///
/// Передаётся в REST-клиент и сервисы явно, глобального состояния нет.
/// Клоны делят токен и пользователя: вход через любой клон виден всем.
#[derive(Clone)]
pub struct Session {
    api: Rc<ApiConfig>,
    tokens: Rc<dyn TokenStore>,
    user: Rc<RefCell<Option<UserInfo>>>,
}

impl Session {
    pub fn new(api: ApiConfig, tokens: Rc<dyn TokenStore>) -> Self {
        Self {
            api: Rc::new(api),
            tokens,
            user: Rc::new(RefCell::new(None)),
        }
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn url(&self, path: &str) -> String {
        self.api.url(path)
    }

    pub fn access_token(&self) -> Option<String> {
        self.tokens.access_token()
    }

    /// Значение заголовка Authorization
    pub fn auth_header(&self) -> Result<String, ApiError> {
        self.access_token()
            .map(|token| format!("Bearer {}", token))
            .ok_or(ApiError::NotAuthenticated)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.user.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.borrow().as_ref().is_some_and(UserInfo::is_admin)
    }

    /// Запомнить выданный токен и пользователя
    pub fn sign_in(&self, access_token: &str, user: UserInfo) {
        self.tokens.save_access_token(access_token);
        self.user.replace(Some(user));
    }

    pub fn sign_out(&self) {
        self.tokens.clear();
        self.user.replace(None);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api", &self.api)
            .field("authenticated", &self.is_authenticated())
            .field("user", &*self.user.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryTokenStore;
    use contracts::system::auth::Role;

    fn api() -> ApiConfig {
        ApiConfig {
            base_url: Some("http://127.0.0.1:8000".into()),
            port: 8000,
            prefix: "/api".into(),
        }
    }

    fn admin() -> UserInfo {
        UserInfo {
            id: 1,
            name: "Админ".into(),
            org_name: None,
            email: None,
            role: Role::Admin,
        }
    }

    #[test]
    fn test_anonymous_session_has_no_auth_header() {
        let session = Session::new(api(), Rc::new(MemoryTokenStore::default()));
        assert_eq!(session.auth_header(), Err(ApiError::NotAuthenticated));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_sign_in_and_out() {
        let store = Rc::new(MemoryTokenStore::default());
        let session = Session::new(api(), store.clone());
        session.sign_in("abc", admin());
        assert_eq!(session.auth_header().unwrap(), "Bearer abc");
        assert!(session.is_admin());
        assert_eq!(store.access_token().as_deref(), Some("abc"));

        session.sign_out();
        assert!(!session.is_authenticated());
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_sign_in_through_clone_is_shared() {
        let session = Session::new(api(), Rc::new(MemoryTokenStore::default()));
        let from_context = session.clone();
        from_context.sign_in("abc", admin());

        assert!(session.is_admin());
        assert_eq!(session.user().map(|u| u.name), Some("Админ".to_string()));

        session.sign_out();
        assert!(!from_context.is_admin());
        assert!(!from_context.is_authenticated());
    }

    #[test]
    fn test_url_joins_prefix() {
        let session = Session::new(api(), Rc::new(MemoryTokenStore::with_token("t")));
        assert_eq!(session.url("/houses/"), "http://127.0.0.1:8000/api/houses/");
    }
}
