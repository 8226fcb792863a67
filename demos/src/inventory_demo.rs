//! Send an inventory report email through a running backend.
//!
//! Expects COMERCIA_URL, COMERCIA_EMAIL, COMERCIA_PASSWORD and
//! COMERCIA_REPORT_TO in the environment or a .env file.

use comercia_rust::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    let url = std::env::var("COMERCIA_URL").expect("COMERCIA_URL must be set");
    let email = std::env::var("COMERCIA_EMAIL").expect("COMERCIA_EMAIL must be set");
    let password = std::env::var("COMERCIA_PASSWORD").expect("COMERCIA_PASSWORD must be set");
    let report_to = std::env::var("COMERCIA_REPORT_TO").expect("COMERCIA_REPORT_TO must be set");

    let comercia = Comercia::new(&url);
    comercia
        .auth()
        .login(&Credentials::new(&email, &password))
        .await?;

    // full report across all companies
    let request = ReportRequest::new(&report_to);
    let message = comercia.inventory().send_report(&request).await?;
    println!("{}", message);

    // filtered report for the first company, if any
    if let Some(company) = comercia.companies().list().await?.into_iter().next() {
        let request = ReportRequest::new(&report_to)
            .with_subject(&format!("Inventory Report - {}", company.name))
            .for_company(&company.nit);
        let message = comercia.inventory().send_report(&request).await?;
        println!("{}", message);
    }

    Ok(())
}
