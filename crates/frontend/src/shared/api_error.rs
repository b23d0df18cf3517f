use serde_json::Value;
use thiserror::Error;

/// Ошибка обращения к бэкенду.
///
/// Сообщение (`Display`) показывается пользователю как уведомление.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Требуется вход в систему")]
    NotAuthenticated,

    #[error("Сессия истекла, войдите снова")]
    Unauthorized,

    #[error("Недостаточно прав для операции")]
    Forbidden,

    #[error("Запись не найдена")]
    NotFound,

    #[error("Конфликт состояния: {0}")]
    Conflict(String),

    #[error("Сервер отклонил запрос ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Сервер недоступен: {0}")]
    Network(String),

    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),

    #[error("Не удалось сформировать запрос: {0}")]
    Encode(String),
}

impl ApiError {
    /// Сопоставить неуспешный HTTP-статус с ошибкой
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            409 => ApiError::Conflict(extract_message(body)),
            _ => ApiError::Rejected {
                status,
                message: extract_message(body),
            },
        }
    }
}

/// Достать текст ошибки из тела ответа.
///
/// Бэкенд кладёт его в `detail`: строкой, объектом `{status, message}`
/// или списком ошибок валидации `[{msg, ...}]`.
fn extract_message(body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        let detail = value.get("detail").unwrap_or(&value);
        match detail {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => map
                .get("message")
                .or_else(|| map.get("status"))
                .and_then(Value::as_str)
                .map(str::to_string),
            Value::Array(items) => items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    });
    parsed.unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, r#"{"detail":{"status":"not found"}}"#), ApiError::NotFound);
    }

    #[test]
    fn test_detail_shapes() {
        assert_eq!(
            ApiError::from_status(409, r#"{"detail":"Order already cancelled"}"#),
            ApiError::Conflict("Order already cancelled".into())
        );
        assert_eq!(
            ApiError::from_status(400, r#"{"detail":{"status":"failed","message":"House not created"}}"#),
            ApiError::Rejected {
                status: 400,
                message: "House not created".into()
            }
        );
        assert_eq!(
            ApiError::from_status(422, r#"{"detail":[{"loc":["body","floors"],"msg":"Floors must be greater than 0"}]}"#),
            ApiError::Rejected {
                status: 422,
                message: "Floors must be greater than 0".into()
            }
        );
    }

    #[test]
    fn test_plain_text_body() {
        assert_eq!(
            ApiError::from_status(500, " Internal Server Error\n"),
            ApiError::Rejected {
                status: 500,
                message: "Internal Server Error".into()
            }
        );
    }
}
