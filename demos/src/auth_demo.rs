//! Log in against a running backend and inspect the resulting session.
//!
//! Expects COMERCIA_URL, COMERCIA_EMAIL and COMERCIA_PASSWORD in the
//! environment or a .env file.

use comercia_rust::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();

    let url = std::env::var("COMERCIA_URL").expect("COMERCIA_URL must be set");
    let email = std::env::var("COMERCIA_EMAIL").expect("COMERCIA_EMAIL must be set");
    let password = std::env::var("COMERCIA_PASSWORD").expect("COMERCIA_PASSWORD must be set");

    let comercia = Comercia::new(&url);

    let response = comercia
        .auth()
        .login(&Credentials::new(&email, &password))
        .await?;
    println!("logged in as {} with role {}", response.email, response.role);

    if let Some(session) = comercia.auth().current_session() {
        println!("token type: {}", session.token_type);
        if let Some(expires_at) = session.expires_at {
            println!("expires at (unix): {}", expires_at);
        }
        println!("expired: {}", session.is_expired());
    }

    comercia.auth().logout()?;
    println!("session dropped");

    Ok(())
}
