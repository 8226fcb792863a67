//! Inventory report emailing

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::auth::SessionHandle;
use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;

/// Default subject line used when the caller does not set one
pub const DEFAULT_SUBJECT: &str = "Inventory Report";

/// Default body text used when the caller does not set one
pub const DEFAULT_BODY: &str = "Please find attached the inventory report.";

/// Request to email an inventory report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The recipient address
    #[serde(rename = "toEmail")]
    pub to_email: String,

    /// The email subject
    pub subject: String,

    /// The email body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Restrict the report to one company; `None` covers all companies
    #[serde(rename = "empresaNit", skip_serializing_if = "Option::is_none")]
    pub company_nit: Option<String>,
}

impl ReportRequest {
    /// Create a report request for all companies with the default subject
    /// and body
    pub fn new(to_email: &str) -> Self {
        Self {
            to_email: to_email.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            body: Some(DEFAULT_BODY.to_string()),
            company_nit: None,
        }
    }

    /// Set the email subject
    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    /// Set the email body
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Restrict the report to a single company
    pub fn for_company(mut self, nit: &str) -> Self {
        self.company_nit = Some(nit.to_string());
        self
    }
}

/// Client for the inventory reporting endpoint
pub struct InventoryClient {
    /// The base URL of the backend, including the `/api` prefix
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// The shared session slot
    session: SessionHandle,

    /// Client options
    options: ClientOptions,
}

impl InventoryClient {
    /// Create a new InventoryClient
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

    /// Ask the backend to generate the report and email it. Returns the
    /// confirmation message, e.g. "Inventory report sent successfully to …".
    pub async fn send_report(&self, request: &ReportRequest) -> Result<String, Error> {
        let url = format!("{}/inventory/report/send", self.url);

        Fetch::post(&self.client, &url)
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
            .with_session(&self.session)
            .json(request)?
            .execute_api()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_fills_defaults() {
        let request = ReportRequest::new("manager@example.com");
        assert_eq!(request.subject, DEFAULT_SUBJECT);
        assert_eq!(request.body.as_deref(), Some(DEFAULT_BODY));
        assert!(request.company_nit.is_none());
    }

    #[test]
    fn serializes_with_wire_names() {
        let request = ReportRequest::new("manager@example.com")
            .with_subject("Q2 inventory")
            .for_company("900123456");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["toEmail"], "manager@example.com");
        assert_eq!(json["subject"], "Q2 inventory");
        assert_eq!(json["empresaNit"], "900123456");
    }

    #[test]
    fn omits_company_when_unfiltered() {
        let json = serde_json::to_value(ReportRequest::new("manager@example.com")).unwrap();
        assert!(json.get("empresaNit").is_none());
    }
}
