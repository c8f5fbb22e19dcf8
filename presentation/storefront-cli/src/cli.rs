use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bigdecimal::{BigDecimal, Zero};
use clap::{Args, Parser, Subcommand};
use tokio::sync::Mutex;

use business::application::cart::store::CartStore;
use business::application::checkout::credentials::LocalCredentialStore;
use business::application::checkout::submit::CheckoutSubmitterImpl;
use business::domain::cart::model::CatalogProduct;
use business::domain::cart::storage::LocalStorage;
use business::domain::checkout::services::CredentialStore;
use business::domain::checkout::use_cases::submit::CheckoutSubmitter;
use business::domain::logger::Logger;
use business::domain::order::value_objects::PaymentMethod;
use business::domain::shared::value_objects::{ProductId, Role};
use local_storage::FileLocalStorage;
use logger::TracingLogger;
use order_client::client::StorefrontClient;
use order_client::order_gateway::OrderGatewayHttp;

use crate::render;
use crate::terminal_navigator::TerminalNavigator;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront cart and checkout", long_about = None)]
pub struct Cli {
    /// File holding the cart and session between runs
    #[arg(long, global = true, env = "STOREFRONT_DATA", default_value = ".storefront.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a catalog product, or one more unit if it is already in the cart
    Add(AddArgs),
    /// One more unit of a product already in the cart
    Increment(ProductArgs),
    /// One unit fewer; the line disappears at zero
    Decrement(ProductArgs),
    /// Drop a line regardless of quantity
    Remove(ProductArgs),
    /// Empty the cart
    Clear,
    /// Print the cart and its totals
    Show,
    /// Remember a session token for checkout
    Login(LoginArgs),
    /// Forget the stored session token
    Logout,
    /// Submit the cart as an order
    Checkout(CheckoutArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Catalog product identifier
    #[arg(long)]
    id: String,

    /// Product name as shown in the catalog
    #[arg(long)]
    name: String,

    /// Current catalog price
    #[arg(long)]
    price: BigDecimal,
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Catalog product identifier
    id: String,
}

#[derive(Debug, Args)]
struct LoginArgs {
    /// Bearer token issued by the login service
    #[arg(long, env = "STOREFRONT_TOKEN", hide_env_values = true)]
    token: String,

    /// Role tag returned with the token
    #[arg(long, default_value = "user")]
    role: Role,
}

#[derive(Debug, Args)]
struct CheckoutArgs {
    /// Payment method: COD, UPI or Card
    #[arg(long, default_value = "COD")]
    payment: PaymentMethod,

    /// Storefront API root
    #[arg(long, env = "STOREFRONT_API_URL", default_value = "http://127.0.0.1:8080/api")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

impl Cli {
    /// Runs one command and returns what should be printed.
    pub async fn run(self) -> Result<String, String> {
        let storage: Arc<dyn LocalStorage> = Arc::new(FileLocalStorage::open(&self.data));
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("storefront_cli"));

        match self.command {
            Commands::Add(args) => {
                if args.id.trim().is_empty() || args.name.trim().is_empty() {
                    return Err("id and name must not be empty".to_string());
                }
                if args.price < BigDecimal::zero() {
                    return Err("price must not be negative".to_string());
                }
                let mut store = CartStore::restore(storage, logger);
                store.add_or_increment(&CatalogProduct {
                    product_id: ProductId::new(args.id),
                    name: args.name,
                    price: args.price,
                });
                Ok(render::cart(&store.snapshot()))
            }
            Commands::Increment(args) => {
                let mut store = CartStore::restore(storage, logger);
                store.increment(&ProductId::new(args.id));
                Ok(render::cart(&store.snapshot()))
            }
            Commands::Decrement(args) => {
                let mut store = CartStore::restore(storage, logger);
                store.decrement(&ProductId::new(args.id));
                Ok(render::cart(&store.snapshot()))
            }
            Commands::Remove(args) => {
                let mut store = CartStore::restore(storage, logger);
                store.remove(&ProductId::new(args.id));
                Ok(render::cart(&store.snapshot()))
            }
            Commands::Clear => {
                let mut store = CartStore::restore(storage, logger);
                store.clear();
                Ok(render::cart(&store.snapshot()))
            }
            Commands::Show => {
                let credentials = LocalCredentialStore {
                    storage: storage.clone(),
                };
                let session = render::session(credentials.token().is_some(), credentials.role());
                let snapshot = CartStore::restore(storage, logger).snapshot();
                Ok(format!("{session}\n{}", render::cart(&snapshot)))
            }
            Commands::Login(args) => {
                LocalCredentialStore { storage }
                    .store(&args.token, &args.role.to_string())
                    .map_err(|error| format!("failed to store session: {error}"))?;
                Ok(format!("Logged in ({})", args.role))
            }
            Commands::Logout => {
                LocalCredentialStore { storage }
                    .forget()
                    .map_err(|error| format!("failed to forget session: {error}"))?;
                Ok("Logged out".to_string())
            }
            Commands::Checkout(args) => checkout(args, storage, logger).await,
        }
    }
}

async fn checkout(
    args: CheckoutArgs,
    storage: Arc<dyn LocalStorage>,
    logger: Arc<dyn Logger>,
) -> Result<String, String> {
    let cart = Arc::new(Mutex::new(CartStore::restore(
        storage.clone(),
        logger.clone(),
    )));
    let client = StorefrontClient::new(args.api_url, Duration::from_secs(args.timeout_secs))
        .map_err(|error| format!("failed to build HTTP client: {error}"))?;
    let gateway = Arc::new(OrderGatewayHttp::new(client));

    let submitter = CheckoutSubmitterImpl::new(
        cart,
        gateway,
        Arc::new(LocalCredentialStore { storage }),
        Arc::new(TerminalNavigator),
        logger,
    );

    submitter
        .submit(args.payment)
        .await
        .map(|confirmation| render::confirmation(&confirmation))
        .map_err(|error| render::checkout_error(&error))
}
