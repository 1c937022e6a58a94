//! REST client for the expense API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, with the bearer
//! token read from the persisted slot on every request. Host-side: inert
//! stubs, since these endpoints are only meaningful in the browser.
//!
//! The [`Api`] trait is the seam between stores/guard and the network;
//! tests script it with a mock instead of spinning up a server.

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;
use crate::net::types::{
    CreateExpenseRequest, ExpenseDetail, ExpenseFilters, ExpensePage, ListView, User,
};

/// Remote API surface consumed by the stores and the router guard.
#[allow(async_fn_in_trait)]
pub trait Api {
    /// `POST /auth/login` — exchange credentials for an access token.
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;
    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
    /// `GET /users/me`.
    async fn fetch_me(&self) -> Result<User, ApiError>;
    /// `GET /expenses` with view/limit/offset and optional filters.
    async fn list_expenses(
        &self,
        view: ListView,
        filters: &ExpenseFilters,
    ) -> Result<ExpensePage, ApiError>;
    /// `GET /expenses/:id`.
    async fn fetch_expense(&self, id: u64) -> Result<ExpenseDetail, ApiError>;
    /// `POST /expenses`. The created row is not returned; callers
    /// re-fetch the list instead.
    async fn create_expense(&self, req: &CreateExpenseRequest) -> Result<(), ApiError>;
    /// `PUT /expenses/:id/approve`.
    async fn approve_expense(&self, id: u64, notes: Option<&str>) -> Result<(), ApiError>;
    /// `PUT /expenses/:id/reject`.
    async fn reject_expense(&self, id: u64, notes: Option<&str>) -> Result<(), ApiError>;
}

/// `gloo-net` implementation of [`Api`] against a configured base URL.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new("/api")
    }
}

#[cfg(feature = "csr")]
impl HttpApi {
    /// Attach `Authorization: Bearer <token>` when a token is persisted.
    fn authorize(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match crate::util::persist::token() {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    async fn read<T: serde::de::DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if resp.ok() {
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::from_status(resp.status(), &body))
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Self::authorize(gloo_net::http::Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(resp).await
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let builder = match method {
            "PUT" => gloo_net::http::Request::put(&self.url(path)),
            _ => gloo_net::http::Request::post(&self.url(path)),
        };
        let resp = Self::authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read(resp).await
    }
}

impl Api for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            use crate::net::types::{Envelope, LoginData};
            let body = serde_json::json!({ "email": email, "password": password });
            let envelope: Envelope<LoginData> =
                self.send_json("POST", "/auth/login", &body).await?;
            envelope.data.access_token.ok_or(ApiError::MissingToken)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = Self::authorize(gloo_net::http::Request::post(&self.url("/auth/logout")))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if resp.ok() {
                Ok(())
            } else {
                let body = resp.text().await.unwrap_or_default();
                Err(ApiError::from_status(resp.status(), &body))
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn fetch_me(&self) -> Result<User, ApiError> {
        #[cfg(feature = "csr")]
        {
            use crate::net::types::Envelope;
            let envelope: Envelope<User> = self.get_json("/users/me").await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn list_expenses(
        &self,
        view: ListView,
        filters: &ExpenseFilters,
    ) -> Result<ExpensePage, ApiError> {
        #[cfg(feature = "csr")]
        {
            use crate::net::types::{Expense, ListEnvelope};
            let query = filters
                .query_pairs(view)
                .into_iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            let envelope: ListEnvelope<Expense> =
                self.get_json(&format!("/expenses?{query}")).await?;
            Ok(ExpensePage { items: envelope.data, total: envelope.meta.total })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (view, filters);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn fetch_expense(&self, id: u64) -> Result<ExpenseDetail, ApiError> {
        #[cfg(feature = "csr")]
        {
            use crate::net::types::Envelope;
            let envelope: Envelope<ExpenseDetail> =
                self.get_json(&format!("/expenses/{id}")).await?;
            Ok(envelope.data)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn create_expense(&self, req: &CreateExpenseRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let _: serde_json::Value = self.send_json("POST", "/expenses", req).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = req;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn approve_expense(&self, id: u64, notes: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = serde_json::json!({ "notes": notes });
            let _: serde_json::Value =
                self.send_json("PUT", &format!("/expenses/{id}/approve"), &body).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, notes);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn reject_expense(&self, id: u64, notes: Option<&str>) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = serde_json::json!({ "notes": notes });
            let _: serde_json::Value =
                self.send_json("PUT", &format!("/expenses/{id}/reject"), &body).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, notes);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}
