//! HTTP-клиент REST-бэкенда.
//!
//! Каждый запрос несёт Bearer-токен из сессии; неуспешные статусы
//! превращаются в [`ApiError`].

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_error::ApiError;
use crate::system::auth::session::Session;

#[derive(Clone)]
pub struct RestClient {
    session: Session,
}

impl RestClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let auth_header = self.session.auth_header()?;
        Ok(builder.header("Authorization", &auth_header))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.session.url(path);
        log::debug!("GET {}", url);
        let response = self
            .authorized(Request::get(&url))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(ensure_success(response).await?).await
    }

    /// GET списка. Бэкенд отвечает 404 на пустую коллекцию, это пустой список.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        match self.get_json::<Vec<T>>(path).await {
            Err(ApiError::NotFound) => Ok(Vec::new()),
            other => other,
        }
    }

    /// GET списка с фильтрами в строке запроса
    pub async fn get_list_filtered<T, Q>(&self, path: &str, query: &Q) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let query = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
        if query.is_empty() {
            self.get_list(path).await
        } else {
            self.get_list(&format!("{}?{}", path, query)).await
        }
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.session.url(path);
        log::debug!("POST {}", url);
        self.send_json(Request::post(&url), body).await.map(|_| ())
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.session.url(path);
        log::debug!("PUT {}", url);
        self.send_json(Request::put(&url), body).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.session.url(path);
        log::debug!("DELETE {}", url);
        let response = self
            .authorized(Request::delete(&url))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await.map(|_| ())
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let response = self
            .authorized(builder)?
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_success(response).await
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    log::warn!("{} {} -> {}", status, response.url(), error);
    Err(error)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
