//! HTTP implementation of the collaborators.
//!
//! Talks to the product API the storefront is served from:
//!
//! - `GET {base}/products/{id}` → `{ "id", "title", "price", "image" }`
//! - `GET {base}/stock/{id}` → `{ "id", "amount" }`
//!
//! A `404` maps to [`ServiceError::NotFound`]; transport errors and other
//! non-success statuses map to [`ServiceError::Unavailable`]; a body that does
//! not decode maps to [`ServiceError::Malformed`].

use super::{ProductCatalog, ServiceError, StockService};
use crate::model::{Product, ProductId, StockInfo};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct ProductPayload {
    id: ProductId,
    #[serde(alias = "name")]
    title: String,
    price: f64,
    #[serde(default)]
    image: String,
}

impl From<ProductPayload> for Product {
    fn from(payload: ProductPayload) -> Self {
        Product::new(payload.id, payload.title, payload.price, payload.image)
    }
}

#[derive(Debug, Deserialize)]
struct StockPayload {
    id: ProductId,
    amount: u32,
}

impl From<StockPayload> for StockInfo {
    fn from(payload: StockPayload) -> Self {
        StockInfo::new(payload.id, payload.amount)
    }
}

/// Client for the remote product and stock API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Uses a preconfigured `reqwest::Client` (timeouts, proxies, headers).
    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id.0)
    }

    pub fn stock_url(&self, id: ProductId) -> String {
        format!("{}/stock/{}", self.base_url, id.0)
    }

    async fn fetch<T: DeserializeOwned>(&self, id: ProductId, url: &str) -> Result<T, ServiceError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ServiceError::NotFound(id));
        }
        let response = response
            .error_for_status()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl ProductCatalog for ApiClient {
    #[instrument(skip(self))]
    async fn product(&self, id: ProductId) -> Result<Product, ServiceError> {
        let payload: ProductPayload = self.fetch(id, &self.product_url(id)).await?;
        Ok(payload.into())
    }
}

#[async_trait]
impl StockService for ApiClient {
    #[instrument(skip(self))]
    async fn stock(&self, id: ProductId) -> Result<StockInfo, ServiceError> {
        let payload: StockPayload = self.fetch(id, &self.stock_url(id)).await?;
        Ok(payload.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers every connection with the same canned response; returns the base URL.
    async fn serve(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 2048];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_not_found_status_is_not_found() {
        let client = ApiClient::new(serve("404 Not Found", "{}").await);
        assert_eq!(
            client.product(ProductId(9)).await,
            Err(ServiceError::NotFound(ProductId(9)))
        );
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let client = ApiClient::new(serve("500 Internal Server Error", "{}").await);
        assert!(matches!(
            client.stock(ProductId(1)).await,
            Err(ServiceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_malformed() {
        let client = ApiClient::new(serve("200 OK", r#"{"id": 1, "amount": "lots"}"#).await);
        assert!(matches!(
            client.stock(ProductId(1)).await,
            Err(ServiceError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_successful_lookup_decodes_payload() {
        let client = ApiClient::new(serve("200 OK", r#"{"id": 1, "amount": 3}"#).await);
        assert_eq!(client.stock(ProductId(1)).await, Ok(StockInfo::new(1, 3)));
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = ApiClient::new("http://localhost:3333/");
        assert_eq!(client.product_url(ProductId(4)), "http://localhost:3333/products/4");
        assert_eq!(client.stock_url(ProductId(4)), "http://localhost:3333/stock/4");
    }

    #[test]
    fn test_product_payload_decodes_title() {
        let raw = r#"{"id": 1, "title": "Tênis de Caminhada", "price": 179.9, "image": "https://img/1.jpg"}"#;
        let product: Product = serde_json::from_str::<ProductPayload>(raw).unwrap().into();
        assert_eq!(
            product,
            Product::new(1, "Tênis de Caminhada", 179.9, "https://img/1.jpg")
        );
    }

    #[test]
    fn test_stock_payload_decodes_amount() {
        let stock: StockInfo = serde_json::from_str::<StockPayload>(r#"{"id": 2, "amount": 5}"#)
            .unwrap()
            .into();
        assert_eq!(stock, StockInfo::new(2, 5));

        // Negative stock cannot be represented
        assert!(serde_json::from_str::<StockPayload>(r#"{"id": 2, "amount": -1}"#).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        let client = ApiClient::new("http://127.0.0.1:1");
        let result = client.stock(ProductId(1)).await;
        assert!(matches!(result, Err(ServiceError::Unavailable(_))));
    }
}
