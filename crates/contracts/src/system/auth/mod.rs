use serde::{Deserialize, Serialize};

/// Роль пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[default]
    User,
}

/// Пользователь в ответах API (владелец заказа, текущая сессия)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_to_regular_role() {
        let user: UserInfo = serde_json::from_str(r#"{"id": 1, "name": "Иван"}"#).unwrap();
        assert!(!user.is_admin());

        let admin: UserInfo =
            serde_json::from_str(r#"{"id": 2, "name": "Админ", "role": "ADMIN"}"#).unwrap();
        assert!(admin.is_admin());
    }
}
