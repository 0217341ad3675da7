use crate::api::{ComparablesBackend, HttpBackend};
use crate::config::{Cli, Command, ServerArgs};
use crate::router::{handle, App};
use astra::Server;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod domain;
mod errors;
mod report;
mod responses;
mod router;
mod templates;


fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    // stderr, so CLI reports on stdout stay clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // 1️⃣ Build the backend client from config
    let backend = HttpBackend::new(&cli.api.to_config())?;

    // 2️⃣ Dispatch
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&cli.server, backend)?,
        Command::Properties => {
            let properties = backend.list_properties()?;
            print!("{}", report::properties_report(&properties));
        }
        Command::Lookup { pin } => {
            let pin = pin.trim();
            let comparables = backend.comparables_for_pin(pin)?;
            print!("{}", report::pin_report(pin, &comparables));
        }
        Command::Search { address } => {
            let query = domain::search::normalize_address(&address)
                .ok_or(domain::search::BLANK_ADDRESS_ERROR)?;
            let comparables = backend.comparables_for_address(query)?;
            print!("{}", report::address_report(&comparables));
        }
    }

    Ok(())
}

fn serve(args: &ServerArgs, backend: HttpBackend) -> std::io::Result<()> {
    let app = App::new(backend);

    info!(workers = args.max_workers, "Starting server at http://{}", args.bind);
    let server = Server::bind(args.bind).max_workers(args.max_workers);

    // Serve requests, passing the app into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(%err, "request failed");
            templates::html_error_response(err)
        }
    });

    if let Err(e) = &result {
        error!("Server ended with error: {e}");
    } else {
        info!("Server shut down cleanly.");
    }
    result
}
