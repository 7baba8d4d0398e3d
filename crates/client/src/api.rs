//! Backend REST API.
//!
//! `BackendApi` is the seam every flow talks through; `HttpBackend` is the
//! reqwest implementation. The backend owns every entity, so nothing here
//! caches or retries.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use livraria_core::{CategoryId, ProductId};
use livraria_inventory::{MovementRecord, NewMovement};
use livraria_pricing::{ApplyPriceAdjustment, CategoryPercent, PriceAdjustment};
use livraria_products::{Product, ProductRequest};

use crate::config::ClientConfig;
use crate::dashboard::DashboardOverview;
use crate::error::{ClientError, message_from_body};

#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError>;
    async fn get_product(&self, id: ProductId) -> Result<Product, ClientError>;
    async fn products_by_category(&self, category: CategoryId) -> Result<Vec<Product>, ClientError>;
    async fn create_product(&self, request: &ProductRequest) -> Result<Product, ClientError>;
    async fn update_product(
        &self,
        id: ProductId,
        request: &ProductRequest,
    ) -> Result<Product, ClientError>;
    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError>;

    async fn list_movements(&self) -> Result<Vec<MovementRecord>, ClientError>;
    async fn create_movement(&self, movement: &NewMovement) -> Result<MovementRecord, ClientError>;

    async fn price_history(&self) -> Result<Vec<PriceAdjustment>, ClientError>;
    async fn category_percents(&self) -> Result<Vec<CategoryPercent>, ClientError>;
    async fn category_percent(&self, category: CategoryId) -> Result<CategoryPercent, ClientError>;
    /// Current global adjustment, as a decimal fraction.
    async fn global_percent(&self) -> Result<f64, ClientError>;
    async fn apply_price_adjustment(
        &self,
        adjustment: &ApplyPriceAdjustment,
    ) -> Result<(), ClientError>;

    async fn dashboard_overview(&self) -> Result<DashboardOverview, ClientError>;
}

/// HTTP implementation of [`BackendApi`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            token: config.auth_token.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_url, path);
        let req = self.client.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = message_from_body(&body);
        tracing::debug!(status = status.as_u16(), %message, "backend rejected request");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.send(self.request(Method::GET, path)).await?;
        Ok(resp.json().await?)
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let resp = self.send(self.request(method, path).json(body)).await?;
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.get_json("/products").await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ClientError> {
        self.get_json(&format!("/products/{id}")).await
    }

    async fn products_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Product>, ClientError> {
        self.get_json(&format!("/products/by-category/{category}")).await
    }

    async fn create_product(&self, request: &ProductRequest) -> Result<Product, ClientError> {
        self.send_json(Method::POST, "/products", request).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        request: &ProductRequest,
    ) -> Result<Product, ClientError> {
        self.send_json(Method::PUT, &format!("/products/{id}"), request).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError> {
        self.send(self.request(Method::DELETE, &format!("/products/{id}"))).await?;
        Ok(())
    }

    async fn list_movements(&self) -> Result<Vec<MovementRecord>, ClientError> {
        self.get_json("/movements").await
    }

    async fn create_movement(&self, movement: &NewMovement) -> Result<MovementRecord, ClientError> {
        self.send_json(Method::POST, "/movements", movement).await
    }

    async fn price_history(&self) -> Result<Vec<PriceAdjustment>, ClientError> {
        self.get_json("/prices/history").await
    }

    async fn category_percents(&self) -> Result<Vec<CategoryPercent>, ClientError> {
        self.get_json("/prices/category-percent").await
    }

    async fn category_percent(&self, category: CategoryId) -> Result<CategoryPercent, ClientError> {
        self.get_json(&format!("/prices/category-percent/{category}")).await
    }

    async fn global_percent(&self) -> Result<f64, ClientError> {
        self.get_json("/prices/global-percent").await
    }

    async fn apply_price_adjustment(
        &self,
        adjustment: &ApplyPriceAdjustment,
    ) -> Result<(), ClientError> {
        self.send(self.request(Method::POST, "/prices/adjust").json(adjustment)).await?;
        Ok(())
    }

    async fn dashboard_overview(&self) -> Result<DashboardOverview, ClientError> {
        self.get_json("/dashboard/overview").await
    }
}
