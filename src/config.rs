//! Server configuration.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nearest-route", about = "Nearest-neighbour route planning service")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "ROUTE_HOST", default_value = "0.0.0.0")]
    pub host: String,
    /// Port to listen on.
    #[arg(long, env = "ROUTE_PORT", default_value_t = 9990)]
    pub port: u16,
    /// Where imported points are persisted as JSON.
    #[arg(long, env = "ROUTE_DATA_PATH", default_value = "../frontend/public/data.json")]
    pub data_path: PathBuf,
    /// Upper bound on an uploaded CSV file, in bytes.
    #[arg(long, env = "ROUTE_MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
    /// Upper bound on a `/api/route` JSON body, in bytes.
    #[arg(long, env = "ROUTE_MAX_ROUTE_BYTES", default_value_t = 1024 * 1024)]
    pub max_route_bytes: usize,
    /// Log filter in `RUST_LOG` syntax.
    #[arg(long = "log", env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9990,
            data_path: PathBuf::from("../frontend/public/data.json"),
            max_upload_bytes: 10 * 1024 * 1024,
            max_route_bytes: 1024 * 1024,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
