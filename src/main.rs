//! Route planning HTTP server.

use clap::Parser;

use nearest_route::config::ServerConfig;
use nearest_route::{logging, server};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::parse();
    if let Err(err) = logging::init_logger(&config.log_filter) {
        eprintln!("logger already initialised: {err}");
    }
    server::run(config).await
}
