//! storeadmin-client: resource clients for the storefront REST API.
//!
//! One `StoreApi` holds the base URL and the shared `reqwest::Client`; the
//! per-entity clients it hands out are cheap clones of that transport. Every
//! operation issues exactly one request and surfaces the first failure to
//! the caller; retries, caching, and state live elsewhere.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

mod categories;
mod error;
mod orders;
mod products;

pub use categories::CategoriesClient;
pub use error::ClientError;
pub use orders::{CreateOrderRequest, OrdersClient};
pub use products::{ProductsClient, UpdateProductRequest};

#[derive(Clone)]
pub struct StoreApiBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

/// Shared transport for all resource clients. The base URL is injected at
/// construction; nothing in this crate reads process-wide state.
#[derive(Clone)]
pub struct StoreApi {
    base: Url,
    http: reqwest::Client,
}

impl StoreApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> Result<StoreApiBuilder, ClientError> {
        let base = Url::parse(base_url)?;
        Ok(StoreApiBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    pub fn categories(&self) -> CategoriesClient {
        CategoriesClient::new(self.clone())
    }

    pub fn orders(&self) -> OrdersClient {
        OrdersClient::new(self.clone())
    }

    pub fn products(&self) -> ProductsClient {
        ProductsClient::new(self.clone())
    }

    pub(crate) fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

impl StoreApiBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ClientError> {
        let header_name = HeaderName::from_bytes(key.as_ref().as_bytes())
            .map_err(|e| ClientError::Header(e.to_string()))?;
        let header_value = HeaderValue::from_str(value.as_ref())
            .map_err(|e| ClientError::Header(e.to_string()))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<StoreApi, ClientError> {
        if let Some(client) = self.client {
            return Ok(StoreApi {
                base: self.base,
                http: client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build()?;
        Ok(StoreApi {
            base: self.base,
            http,
        })
    }
}
