mod commands;
mod content;
mod output;
mod store;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "zko", about = "Order ledger with zero-knowledge verification")]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,
    /// Act as this principal instead of the configured one
    #[arg(long = "as", global = true, value_name = "PRINCIPAL")]
    principal: Option<String>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run circuit setup and install the verification key
    Init {
        /// Deterministic setup seed (defaults to the configured seed)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Place an order and archive its metadata
    Place {
        product: String,
        quantity: u64,
        total_cost: u64,
        /// Customer display name
        customer: String,
        /// Public inputs a,b,c,out (decimal or 0x hex)
        #[arg(long, value_delimiter = ',', default_value = "1,1,1,21")]
        inputs: Vec<String>,
    },
    /// Attach a content pointer to an order
    Attach { order_id: u64, pointer: String },
    /// Move an order to Completed or Rejected
    Status { order_id: u64, status: String },
    /// Prove knowledge of a root for an order's quadratic
    Prove {
        order_id: u64,
        /// Private root x with a·x² + b·x + c = out
        witness: String,
        /// Where to write the proof (defaults to the home directory)
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
    /// Verify a proof against an order and record the result
    Verify {
        order_id: u64,
        #[arg(long)]
        proof: Option<std::path::PathBuf>,
    },
    /// Show one order
    Show { order_id: u64 },
    /// List all orders
    List,
    /// Print the event journal
    Events,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set a config value
    Set { key: String, value: String },
    /// Show current config
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    output::set_json_mode(cli.json);
    let home = store::Home::open()?;
    let principal = cli.principal.as_deref();

    match cli.command {
        Cmd::Init { seed } => commands::init::run(&home, seed)?,
        Cmd::Place { product, quantity, total_cost, customer, inputs } => {
            let order = commands::place::PlaceArgs { product, quantity, total_cost, customer, inputs };
            commands::place::run(&home, principal, order).await?
        }
        Cmd::Attach { order_id, pointer } => commands::place::attach(&home, order_id, &pointer)?,
        Cmd::Status { order_id, status } => {
            commands::status::run(&home, principal, order_id, &status)?
        }
        Cmd::Prove { order_id, witness, out } => {
            commands::prove::run(&home, order_id, &witness, out)?
        }
        Cmd::Verify { order_id, proof } => commands::verify::run(&home, principal, order_id, proof)?,
        Cmd::Show { order_id } => commands::show::order(&home, order_id)?,
        Cmd::List => commands::show::list(&home)?,
        Cmd::Events => commands::show::events(&home)?,
        Cmd::Config { action } => match action {
            ConfigAction::Set { key, value } => commands::config::set(&home, &key, &value)?,
            ConfigAction::Show => commands::config::show(&home)?,
        },
    }
    Ok(())
}
