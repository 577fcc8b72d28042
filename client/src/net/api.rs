//! REST API client for the CRM backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable`, since
//! the API is only reachable with the browser-held token.
//!
//! DESIGN
//! ======
//! One base URL and one token-injection point (`ApiClient::authorization`).
//! A client value is cheap to clone and carries the token it was built with,
//! so views snapshot the session token once per action.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    DashboardStats, Lead, LeadPayload, LeadStatus, LeadStatusUpdate, LoginRequest, LoginResponse, Manager,
    ManagerPayload, User,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    #[cfg(feature = "hydrate")]
    fn to_gloo(self) -> gloo_net::http::Method {
        match self {
            HttpMethod::Get => gloo_net::http::Method::GET,
            HttpMethod::Post => gloo_net::http::Method::POST,
            HttpMethod::Put => gloo_net::http::Method::PUT,
            HttpMethod::Patch => gloo_net::http::Method::PATCH,
            HttpMethod::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

/// Authentication calls the session manager depends on.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;

    /// Fetch the profile that `token` belongs to.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), token: None }
    }

    /// Client pointed at the build-time API base URL.
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Authorization` header value, present only when a token is held.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_deref().filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
    }

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path);
            log::debug!("{} {url}", method.as_str());
            let mut builder = gloo_net::http::RequestBuilder::new(&url).method(method.to_gloo());
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::from_status(resp.status(), &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.request::<()>(HttpMethod::Get, path, None).await?;
        decode_body(&text)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.request(method, path, Some(body)).await.map(|_| ())
    }

    /// `GET /me` with this client's token.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport, status, or decode failures.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("/me").await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` on transport, status, or decode failures.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/employer/dashboard-stats").await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` on transport, status, or decode failures.
    pub async fn list_managers(&self) -> Result<Vec<Manager>, ApiError> {
        self.get_json("/employer/managers").await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` if the API rejects the payload or is unreachable.
    pub async fn create_manager(&self, payload: &ManagerPayload) -> Result<(), ApiError> {
        self.send_json(HttpMethod::Post, "/employer/managers", payload).await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` if the API rejects the payload or is unreachable.
    pub async fn update_manager(&self, id: &str, payload: &ManagerPayload) -> Result<(), ApiError> {
        self.send_json(HttpMethod::Put, &manager_path(id), payload).await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` if the API refuses the deletion or is unreachable.
    pub async fn delete_manager(&self, id: &str) -> Result<(), ApiError> {
        self.request::<()>(HttpMethod::Delete, &manager_path(id), None).await.map(|_| ())
    }

    /// `GET /employer/leads` narrowed by optional status and manager filters.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport, status, or decode failures.
    pub async fn list_leads(&self, status: Option<LeadStatus>, manager_id: Option<&str>) -> Result<Vec<Lead>, ApiError> {
        self.get_json(&employer_leads_query(status, manager_id)).await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` if the API rejects the payload or is unreachable.
    pub async fn create_lead(&self, payload: &LeadPayload) -> Result<(), ApiError> {
        self.send_json(HttpMethod::Post, "/employer/leads", payload).await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` if the API rejects the payload or is unreachable.
    pub async fn update_lead(&self, id: &str, payload: &LeadPayload) -> Result<(), ApiError> {
        self.send_json(HttpMethod::Put, &employer_lead_path(id), payload).await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` if the API refuses the deletion or is unreachable.
    pub async fn delete_lead(&self, id: &str) -> Result<(), ApiError> {
        self.request::<()>(HttpMethod::Delete, &employer_lead_path(id), None).await.map(|_| ())
    }

    /// Leads assigned to the current manager.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport, status, or decode failures.
    pub async fn list_assigned_leads(&self, status: Option<LeadStatus>) -> Result<Vec<Lead>, ApiError> {
        self.get_json(&assigned_leads_query(status)).await
    }

    /// # Errors
    ///
    /// Returns an `ApiError` if the API rejects the update or is unreachable.
    pub async fn update_assigned_lead(&self, id: &str, update: &LeadStatusUpdate) -> Result<(), ApiError> {
        self.send_json(HttpMethod::Patch, &assigned_lead_path(id), update).await
    }
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginRequest { email, password };
        let text = self.request(HttpMethod::Post, "/auth/login", Some(&body)).await?;
        let resp: LoginResponse = decode_body(&text)?;
        Ok(resp.token)
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        self.clone().with_token(Some(token.to_owned())).me().await
    }
}

fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn manager_path(id: &str) -> String {
    format!("/employer/managers/{}", encode_component(id))
}

fn employer_lead_path(id: &str) -> String {
    format!("/employer/leads/{}", encode_component(id))
}

fn assigned_lead_path(id: &str) -> String {
    format!("/manager/leads/{}", encode_component(id))
}

fn employer_leads_query(status: Option<LeadStatus>, manager_id: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(status) = status {
        params.push(format!("status={}", status.as_str()));
    }
    if let Some(manager_id) = manager_id.filter(|id| !id.is_empty()) {
        params.push(format!("managerId={}", encode_component(manager_id)));
    }
    with_query("/employer/leads", &params)
}

fn assigned_leads_query(status: Option<LeadStatus>) -> String {
    let params: Vec<String> = status.map(|s| format!("status={}", s.as_str())).into_iter().collect();
    with_query("/manager/leads", &params)
}

fn with_query(path: &str, params: &[String]) -> String {
    if params.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{}", params.join("&"))
    }
}

/// Everything outside the RFC 3986 unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

pub(crate) fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}
