use crate::domain::model::{Car, CarList, FieldValue, Style, StyleList};
use crate::domain::ports::{ConfigProvider, InventoryApi};
use crate::utils::error::{InventoryError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const CARS_PATH: &str = "/cars";
pub const CAR_PATH: &str = "/car";
pub const STYLES_PATH: &str = "/styleCar";
pub const CREATE_STYLE_PATH: &str = "/stylesCar";
pub const CSV_PATH: &str = "/csv";

/// `InventoryApi` over the backend's REST-like endpoints. Mutations are sent
/// as url-encoded form data.
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    client: Client,
    base_url: String,
}

impl HttpInventoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self::with_client(client, config.base_url()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder + Send,
    ) -> Result<Response> {
        let url = self.endpoint(path);
        tracing::debug!("Making API request: {} {}", method, url);

        let response = build(self.client.request(method.clone(), &url)).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(InventoryError::StatusError {
                method: method.to_string(),
                url,
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder + Send,
    ) -> Result<T> {
        let response = self.send(method, path, build).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn list_cars(&self) -> Result<CarList> {
        self.send_json(Method::GET, CARS_PATH, |r| r).await
    }

    async fn create_car(&self, car: &Car) -> Result<CarList> {
        self.send_json(Method::POST, CAR_PATH, |r| r.form(car)).await
    }

    async fn update_car(&self, car: &Car) -> Result<CarList> {
        self.send_json(Method::PUT, CAR_PATH, |r| r.form(car)).await
    }

    async fn delete_car(&self, id: &FieldValue) -> Result<CarList> {
        self.send_json(Method::DELETE, CAR_PATH, |r| r.form(&[("id", id)]))
            .await
    }

    async fn list_styles(&self) -> Result<StyleList> {
        self.send_json(Method::GET, STYLES_PATH, |r| r).await
    }

    async fn create_style(&self, style: &Style) -> Result<StyleList> {
        self.send_json(Method::POST, CREATE_STYLE_PATH, |r| r.form(style))
            .await
    }

    async fn request_csv_export(&self) -> Result<()> {
        self.send(Method::POST, CSV_PATH, |r| r).await?;
        Ok(())
    }
}
