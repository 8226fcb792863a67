//! Company management operations

mod types;

use reqwest::Client;

use crate::auth::SessionHandle;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};

pub use types::*;

/// Client for the companies resource
pub struct CompaniesClient {
    /// The base URL of the backend, including the `/api` prefix
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// The shared session slot
    session: SessionHandle,

    /// Client options
    options: ClientOptions,
}

impl CompaniesClient {
    /// Create a new CompaniesClient
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
        format!("{}/empresas{}", self.url, path)
    }

    fn prepare<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        builder
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .with_session(&self.session)
    }

    /// List all companies
    pub async fn list(&self) -> Result<Vec<Company>, Error> {
        let url = self.get_url("");
        self.prepare(Fetch::get(&self.client, &url))
            .execute_api()
            .await
    }

    /// Get a single company by NIT
    pub async fn get(&self, nit: &str) -> Result<Company, Error> {
        let url = self.get_url(&format!("/{}", nit));
        self.prepare(Fetch::get(&self.client, &url))
            .execute_api()
            .await
    }

    /// Create a company
    pub async fn create(&self, company: &Company) -> Result<Company, Error> {
        let url = self.get_url("");
        self.prepare(Fetch::post(&self.client, &url))
            .json(company)?
            .execute_api()
            .await
    }

    /// Update an existing company
    pub async fn update(&self, nit: &str, company: &Company) -> Result<Company, Error> {
        let url = self.get_url(&format!("/{}", nit));
        self.prepare(Fetch::put(&self.client, &url))
            .json(company)?
            .execute_api()
            .await
    }

    /// Delete a company by NIT
    pub async fn delete(&self, nit: &str) -> Result<(), Error> {
        let url = self.get_url(&format!("/{}", nit));
        self.prepare(Fetch::delete(&self.client, &url))
            .execute_empty()
            .await
    }
}
