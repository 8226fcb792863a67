#![cfg(feature = "cli")]

//! Administrative CLI over the Comercia client. Sessions persist to a file
//! between invocations, so a login stays valid for subsequent commands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use comercia_rust::prelude::*;

#[derive(Parser)]
#[command(
    name = "comercia-admin",
    version,
    about = "Administrative CLI for the Comercia inventory API"
)]
struct Cli {
    /// Base URL of the backend, including the /api prefix
    #[arg(long, env = "COMERCIA_URL")]
    url: String,

    /// File holding the session between invocations
    #[arg(
        long,
        env = "COMERCIA_SESSION",
        default_value = ".comercia-session.json"
    )]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and persist the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the current session
    Whoami,
    /// Register a new user
    Register {
        username: String,
        #[arg(long)]
        email: Option<String>,
        /// ADMIN, USER or EXTERNO
        #[arg(long)]
        role: Option<String>,
    },
    /// Manage companies
    #[command(subcommand)]
    Companies(CompaniesCommand),
    /// Manage products
    #[command(subcommand)]
    Products(ProductsCommand),
    /// Send inventory reports
    #[command(subcommand)]
    Report(ReportCommand),
}

#[derive(Subcommand)]
enum CompaniesCommand {
    /// List all companies
    List,
    /// Show one company and its products
    Get { nit: String },
    /// Create a company
    Create {
        nit: String,
        name: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a company
    Delete { nit: String },
}

#[derive(Subcommand)]
enum ProductsCommand {
    /// List products, optionally for one company
    List {
        #[arg(long)]
        company: Option<String>,
    },
    /// Show one product
    Get { id: i64 },
    /// Create a product
    Create {
        code: String,
        name: String,
        price: f64,
        /// NIT of the owning company
        #[arg(long)]
        company: String,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        characteristics: Option<String>,
        #[arg(long)]
        category: Option<i64>,
    },
    /// Delete a product
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ReportCommand {
    /// Email an inventory report
    Send {
        to_email: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        body: Option<String>,
        /// Restrict the report to one company
        #[arg(long)]
        company: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let options = ClientOptions::default().with_session_file(&cli.session_file);
    let comercia = Comercia::new_with_options(&cli.url, options);
    comercia.auth().restore_session();

    match cli.command {
        Command::Login { email, password } => {
            let response = comercia
                .auth()
                .login(&Credentials::new(&email, &password))
                .await?;
            println!("logged in as {} ({})", response.email, response.role);
        }
        Command::Logout => {
            comercia.auth().logout()?;
            println!("session dropped");
        }
        Command::Whoami => match comercia.auth().current_session() {
            Some(session) => {
                let state = if session.is_expired() { "expired" } else { "valid" };
                println!("{} ({}) - session {}", session.email, session.role, state);
            }
            None => println!("not logged in"),
        },
        Command::Register {
            username,
            email,
            role,
        } => {
            let role = role.map(|r| r.parse::<UserRole>()).transpose()?;
            let user = User {
                username,
                email,
                role: role.map(|r| r.as_str().to_string()),
                ..Default::default()
            };
            let created = comercia.auth().register(&user).await?;
            println!(
                "registered {} ({})",
                created.username,
                created.role.unwrap_or_default()
            );
        }
        Command::Companies(command) => run_companies(&comercia, command).await?,
        Command::Products(command) => run_products(&comercia, command).await?,
        Command::Report(command) => run_report(&comercia, command).await?,
    }

    Ok(())
}

async fn run_companies(comercia: &Comercia, command: CompaniesCommand) -> Result<(), Error> {
    let companies = comercia.companies();

    match command {
        CompaniesCommand::List => {
            for company in companies.list().await? {
                println!(
                    "{}\t{}\t{}",
                    company.nit,
                    company.name,
                    company.address.unwrap_or_default()
                );
            }
        }
        CompaniesCommand::Get { nit } => {
            let company = companies.get(&nit).await?;
            println!("{} - {}", company.nit, company.name);
            if let Some(address) = &company.address {
                println!("address: {}", address);
            }
            if let Some(phone) = &company.phone {
                println!("phone: {}", phone);
            }
            if let Some(products) = &company.products {
                for product in products {
                    println!(
                        "  [{}] {} {} {:.2} {}",
                        product.id.unwrap_or_default(),
                        product.code,
                        product.name,
                        product.price,
                        product.currency.as_deref().unwrap_or("USD")
                    );
                }
            }
        }
        CompaniesCommand::Create {
            nit,
            name,
            address,
            phone,
        } => {
            let mut company = Company::new(&nit, &name);
            company.address = address;
            company.phone = phone;
            let created = companies.create(&company).await?;
            println!("created company {}", created.nit);
        }
        CompaniesCommand::Delete { nit } => {
            companies.delete(&nit).await?;
            println!("deleted company {}", nit);
        }
    }

    Ok(())
}

async fn run_products(comercia: &Comercia, command: ProductsCommand) -> Result<(), Error> {
    let products = comercia.products();

    match command {
        ProductsCommand::List { company } => {
            let listed = match company {
                Some(nit) => products.list_by_company(&nit).await?,
                None => products.list().await?,
            };
            for product in listed {
                println!(
                    "[{}]\t{}\t{}\t{:.2} {}\t{}",
                    product.id.unwrap_or_default(),
                    product.code,
                    product.name,
                    product.price,
                    product.currency.as_deref().unwrap_or("USD"),
                    product.company_nit.unwrap_or_default()
                );
            }
        }
        ProductsCommand::Get { id } => {
            let product = products.get(id).await?;
            println!(
                "[{}] {} - {} ({:.2} {})",
                product.id.unwrap_or_default(),
                product.code,
                product.name,
                product.price,
                product.currency.as_deref().unwrap_or("USD")
            );
            if let Some(characteristics) = &product.characteristics {
                println!("characteristics: {}", characteristics);
            }
        }
        ProductsCommand::Create {
            code,
            name,
            price,
            company,
            currency,
            characteristics,
            category,
        } => {
            let mut product = Product::new(&code, &name, price, &company);
            product.currency = currency;
            product.characteristics = characteristics;
            product.category_id = category;
            let created = products.create(&product).await?;
            println!("created product [{}] {}", created.id.unwrap_or_default(), created.code);
        }
        ProductsCommand::Delete { id } => {
            products.delete(id).await?;
            println!("deleted product [{}]", id);
        }
    }

    Ok(())
}

async fn run_report(comercia: &Comercia, command: ReportCommand) -> Result<(), Error> {
    match command {
        ReportCommand::Send {
            to_email,
            subject,
            body,
            company,
        } => {
            let mut request = ReportRequest::new(&to_email);
            if let Some(subject) = subject {
                request = request.with_subject(&subject);
            }
            if let Some(body) = body {
                request = request.with_body(&body);
            }
            if let Some(company) = company {
                request = request.for_company(&company);
            }
            let message = comercia.inventory().send_report(&request).await?;
            println!("{}", message);
        }
    }

    Ok(())
}
