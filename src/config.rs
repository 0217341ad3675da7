// config.rs
use crate::api::ApiConfig;
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Find comparable industrial properties by PIN or by address.
#[derive(Debug, Parser)]
#[command(name = "comparables-client", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    /// Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Run the web app
    Serve,
    /// List every property PIN the backend knows about
    Properties,
    /// Print the comparables for one PIN
    Lookup { pin: String },
    /// Print the comparables for a street address
    Search { address: String },
}

#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Backend serving /api/properties and /api/comparables/{pin}
    #[arg(
        long,
        global = true,
        env = "COMPARABLES_PROPERTIES_API",
        default_value = "http://127.0.0.1:5001"
    )]
    pub properties_api: Url,

    /// Backend serving /api/get_comparables
    #[arg(
        long,
        global = true,
        env = "COMPARABLES_SEARCH_API",
        default_value = "http://127.0.0.1:5000"
    )]
    pub search_api: Url,

    /// Give up on a backend call after this many seconds (default: wait forever)
    #[arg(long, global = true, env = "COMPARABLES_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl ApiArgs {
    pub fn to_config(&self) -> ApiConfig {
        ApiConfig {
            properties_api: self.properties_api.clone(),
            search_api: self.search_api.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Args)]
pub struct ServerArgs {
    #[arg(long, global = true, env = "COMPARABLES_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[arg(long, global = true, env = "COMPARABLES_MAX_WORKERS", default_value_t = 8)]
    pub max_workers: usize,
}
