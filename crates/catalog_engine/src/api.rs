use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::types::{ApiItem, ItemId, NewItemFields};

/// Brand substituted when the remote omits one.
pub const DEFAULT_BRAND: &str = "Generic";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed payload: {0}")]
    Payload(String),
    #[error("unknown item id {0}")]
    UnknownId(ItemId),
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Page size for the one-time bulk fetch.
    pub fetch_limit: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_owned(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            fetch_limit: 100,
        }
    }
}

/// The backing store, reduced to the four operations the core consumes.
/// Implementations own all transport detail.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<ApiItem>, ApiError>;
    async fn delete_item(&self, id: ItemId) -> Result<(), ApiError>;
    async fn update_title(&self, id: ItemId, title: &str) -> Result<(), ApiError>;
    async fn create_item(&self, fields: &NewItemFields) -> Result<ApiItem, ApiError>;
}

/// Item as the remote serializes it. Unknown fields are ignored; `brand`
/// may be absent or null.
#[derive(Debug, Deserialize)]
struct RawProduct {
    id: ItemId,
    title: String,
    #[serde(default)]
    brand: Option<String>,
    category: String,
    price: f64,
    rating: f64,
}

impl From<RawProduct> for ApiItem {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            brand: raw.brand.unwrap_or_else(|| DEFAULT_BRAND.to_owned()),
            category: raw.category,
            price: raw.price,
            rating: raw.rating,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductPage {
    products: Vec<RawProduct>,
}

#[derive(Debug, Serialize)]
struct CreatePayload<'a> {
    title: &'a str,
    brand: &'a str,
    category: &'a str,
    price: f64,
    rating: f64,
}

/// HTTP adapter speaking the remote catalog dialect: `GET /products`,
/// `DELETE /products/{id}`, `PATCH /products/{id}`, `POST /products/add`.
#[derive(Debug, Clone)]
pub struct ReqwestCatalogApi {
    base: Url,
    client: reqwest::Client,
    fetch_limit: u32,
}

impl ReqwestCatalogApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let normalized = if settings.base_url.ends_with('/') {
            settings.base_url.clone()
        } else {
            format!("{}/", settings.base_url)
        };
        let base =
            Url::parse(&normalized).map_err(|err| ApiError::InvalidEndpoint(err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self {
            base,
            client,
            fetch_limit: settings.fetch_limit,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::InvalidEndpoint(err.to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogApi for ReqwestCatalogApi {
    async fn fetch_all(&self) -> Result<Vec<ApiItem>, ApiError> {
        let url = self.endpoint("products")?;
        let response = self
            .client
            .get(url)
            .query(&[("limit", self.fetch_limit)])
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response.status(), None)?;

        let page: ProductPage = response.json().await.map_err(map_reqwest_error)?;
        Ok(page.products.into_iter().map(ApiItem::from).collect())
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("products/{id}"))?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response.status(), Some(id))
    }

    async fn update_title(&self, id: ItemId, title: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("products/{id}"))?;
        let response = self
            .client
            .patch(url)
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response.status(), Some(id))
    }

    async fn create_item(&self, fields: &NewItemFields) -> Result<ApiItem, ApiError> {
        let url = self.endpoint("products/add")?;
        let payload = CreatePayload {
            title: &fields.title,
            brand: &fields.brand,
            category: &fields.category,
            price: fields.price,
            rating: fields.rating,
        };
        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(response.status(), None)?;

        let created: RawProduct = response.json().await.map_err(map_reqwest_error)?;
        Ok(ApiItem::from(created))
    }
}

fn check_status(status: StatusCode, id: Option<ItemId>) -> Result<(), ApiError> {
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(ApiError::UnknownId(id));
        }
    }
    if !status.is_success() {
        return Err(ApiError::HttpStatus(status.as_u16()));
    }
    Ok(())
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    if err.is_decode() {
        return ApiError::Payload(err.to_string());
    }
    ApiError::Network(err.to_string())
}
