//! Walk the companies and products resources: create a company, add a
//! product to it, list both, then clean up.
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
    comercia
        .auth()
        .login(&Credentials::new(&email, &password))
        .await?;

    let companies = comercia.companies();
    let products = comercia.products();

    let mut company = Company::new("900999001", "Demo Trading SAS");
    company.address = Some("Carrera 7 # 71-21, Bogotá".to_string());
    let created = companies.create(&company).await?;
    println!("created company {} ({})", created.name, created.nit);

    let mut product = Product::new("DEMO-001", "Demo Widget", 49.90, &created.nit);
    product.currency = Some("COP".to_string());
    let created_product = products.create(&product).await?;
    println!(
        "created product [{}] {}",
        created_product.id.unwrap_or_default(),
        created_product.name
    );

    println!("\nall companies:");
    for company in companies.list().await? {
        println!("  {}\t{}", company.nit, company.name);
    }

    println!("\nproducts of {}:", created.nit);
    for product in products.list_by_company(&created.nit).await? {
        println!(
            "  [{}] {} - {:.2} {}",
            product.id.unwrap_or_default(),
            product.name,
            product.price,
            product.currency.as_deref().unwrap_or("USD")
        );
    }

    // clean up the demo data
    if let Some(id) = created_product.id {
        products.delete(id).await?;
    }
    companies.delete(&created.nit).await?;
    println!("\ndemo data removed");

    Ok(())
}
