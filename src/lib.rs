//! Comercia Rust Client Library
//!
//! A Rust client library for the Comercia inventory management API, covering
//! authentication, company and product management, and inventory-report
//! emailing.

pub mod auth;
pub mod companies;
pub mod config;
pub mod error;
pub mod fetch;
pub mod inventory;
pub mod products;
pub mod response;

use reqwest::Client;

use crate::auth::{Auth, SessionHandle, SessionStore};
use crate::companies::CompaniesClient;
use crate::config::ClientOptions;
use crate::inventory::InventoryClient;
use crate::products::ProductsClient;

/// The main entry point for the Comercia Rust client
pub struct Comercia {
    /// The base URL of the backend, including the `/api` prefix
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Auth client for login, registration and session management
    pub auth: Auth,
    /// Client options
    pub options: ClientOptions,
    /// The session slot shared by every service client
    session: SessionHandle,
}

impl Comercia {
    /// Create a new Comercia client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend, including the `/api`
    ///   prefix, e.g. `http://localhost:8080/api`
    ///
    /// # Example
    ///
    /// ```
    /// use comercia_rust::Comercia;
    ///
    /// let comercia = Comercia::new("http://localhost:8080/api");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(base_url, ClientOptions::default())
    }

    /// Create a new Comercia client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use comercia_rust::{config::ClientOptions, Comercia};
    ///
    /// let options = ClientOptions::default().with_session_file(".comercia-session.json");
    /// let comercia = Comercia::new_with_options("http://localhost:8080/api", options);
    /// ```
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Self {
        let url = base_url.trim_end_matches('/').to_string();
        let http_client = Client::new();

        let store = options.session_file.clone().map(SessionStore::new);
        let session = SessionHandle::new(store, options.clear_session_on_unauthorized);

        let auth = Auth::new(&url, http_client.clone(), session.clone(), options.clone());

        Self {
            url,
            http_client,
            auth,
            options,
            session,
        }
    }

    /// Get a reference to the auth client
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Create a client for company operations
    pub fn companies(&self) -> CompaniesClient {
        CompaniesClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }

    /// Create a client for product operations
    pub fn products(&self) -> ProductsClient {
        ProductsClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }

    /// Create a client for inventory reporting
    pub fn inventory(&self) -> InventoryClient {
        InventoryClient::new(
            &self.url,
            self.http_client.clone(),
            self.session.clone(),
            self.options.clone(),
        )
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::auth::{Credentials, Session, User, UserRole};
    pub use crate::companies::Company;
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::inventory::ReportRequest;
    pub use crate::products::Product;
    pub use crate::Comercia;
}
