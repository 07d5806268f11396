mod aggregate;
mod charts;
mod server;
mod table;
mod view;

use std::error::Error;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::server::DashboardState;
use crate::table::Table;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Path to the roster dataset: a CSV with Team, Player and
    /// Price(LAKHS) columns. Extra columns are kept and displayed.
    #[arg(long, value_name = "FILE", default_value = "data/players.csv")]
    data: PathBuf,

    /// Address to bind the dashboard on.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to serve the dashboard on.
    #[arg(long, default_value_t = 8050)]
    port: u16,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.debug);

    // The whole table loads or the process does not serve at all.
    let table = Table::load(&args.data)?;
    info!(
        rows = table.len(),
        teams = table.teams().len(),
        data = %args.data.display(),
        "dataset loaded"
    );

    let state = DashboardState::new(table);
    let addr = SocketAddr::new(args.host, args.port);
    server::serve(state, addr).await?;
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
