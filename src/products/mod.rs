//! Product management operations

mod types;

use reqwest::Client;

use crate::auth::SessionHandle;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};

pub use types::*;

/// Client for the products resource
pub struct ProductsClient {
    /// The base URL of the backend, including the `/api` prefix
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// The shared session slot
    session: SessionHandle,

    /// Client options
    options: ClientOptions,
}

impl ProductsClient {
    /// Create a new ProductsClient
    pub(crate) fn new(
        url: &str,
        client: Client,
        session: SessionHandle,
        options: ClientOptions,
    ) -> Self {
        Self {
            url: url.to_string(),
            client,
            session,
            options,
        }
    }

    fn get_url(&self, path: &str) -> String {
        format!("{}/productos{}", self.url, path)
    }

    fn prepare<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        builder
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .with_session(&self.session)
    }

    /// List all products
    pub async fn list(&self) -> Result<Vec<Product>, Error> {
        let url = self.get_url("");
        self.prepare(Fetch::get(&self.client, &url))
            .execute_api()
            .await
    }

    /// Get a single product by id
    pub async fn get(&self, id: i64) -> Result<Product, Error> {
        let url = self.get_url(&format!("/{}", id));
        self.prepare(Fetch::get(&self.client, &url))
            .execute_api()
            .await
    }

    /// List the products owned by a company
    pub async fn list_by_company(&self, nit: &str) -> Result<Vec<Product>, Error> {
        let url = self.get_url(&format!("/empresa/{}", nit));
        self.prepare(Fetch::get(&self.client, &url))
            .execute_api()
            .await
    }

    /// Create a product
    pub async fn create(&self, product: &Product) -> Result<Product, Error> {
        let url = self.get_url("");
        self.prepare(Fetch::post(&self.client, &url))
            .json(product)?
            .execute_api()
            .await
    }

    /// Update an existing product
    pub async fn update(&self, id: i64, product: &Product) -> Result<Product, Error> {
        let url = self.get_url(&format!("/{}", id));
        self.prepare(Fetch::put(&self.client, &url))
            .json(product)?
            .execute_api()
            .await
    }

    /// Delete a product by id
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let url = self.get_url(&format!("/{}", id));
        self.prepare(Fetch::delete(&self.client, &url))
            .execute_empty()
            .await
    }
}
