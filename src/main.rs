//! Main Pokémon API web application crate.
//!
//! This crate creates the Pokémon API web application, registers its endpoints and starts
//! handling HTTP connections. All the actual implementation is in the [lib crate](pokemon_api).
//!
//! For more information, see `README.md`.

use actix_web::HttpServer;
use anyhow::Context;
use env_logger::Env;
use log::info;
use pokemon_api::db::get_pool;
use pokemon_api::helpers::env::{load_optional_dotenv, optional_env_var, optional_int_env_var};
use pokemon_api::pokemon_api_app;
use pokemon_api::service_env::ServiceEnv;
use rustc_version_runtime::version;

/// Default address the HTTP server binds to (see [`get_server_address`]).
const DEFAULT_HTTP_ADDR: &str = "127.0.0.1";

/// Default HTTP port used for the Pokémon API (see [`get_http_port`]).
const DEFAULT_HTTP_PORT: u16 = 3000;

/// Main program body.
///
/// Sets up the Pokémon API app, then serves its endpoints over HTTP until the server is stopped.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_file_loaded = load_optional_dotenv()?;

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if !env_file_loaded {
        info!(".env file not found; skipped");
    }

    info!("Creating DB connection pool");
    let pool = get_pool().with_context(|| "failed to create DB connection pool")?;

    let server_address = get_server_address()?;
    let http_port = get_http_port()?;

    info!("Starting Pokémon API HTTP server");
    let server_pool = pool.clone();
    let server = HttpServer::new(move || pokemon_api_app!(server_pool))
        .bind((server_address.as_str(), http_port))
        .with_context(|| format!("failed to bind to {}:{}", server_address, http_port))?
        .run();

    info!(
        "Pokémon API started in {}! Listening on {}:{}.",
        ServiceEnv::current(),
        server_address,
        http_port
    );
    info!("Rust version used: {}", version());
    if ServiceEnv::current().is_development() {
        info!("Backtrace support: {}", get_backtrace_support());
    }

    let result = server.await;

    info!("HTTP server stopped; closing DB connection pool");
    pool.close();

    Ok(result?)
}

/// Returns the address to bind to for the Pokémon API.
///
/// By default, the server binds to `127.0.0.1`, which works locally. When deploying in production
/// (or in a Docker container), set the `HTTP_ADDR` environment variable to `0.0.0.0`.
fn get_server_address() -> anyhow::Result<String> {
    Ok(optional_env_var("HTTP_ADDR")
        .with_context(|| "failed to parse content of HTTP_ADDR environment variable")?
        .unwrap_or_else(|| DEFAULT_HTTP_ADDR.into()))
}

/// Returns the HTTP port to listen on.
///
/// Defaults to `3000`; set the `HTTP_PORT` environment variable to override.
fn get_http_port() -> anyhow::Result<u16> {
    Ok(optional_int_env_var("HTTP_PORT")
        .with_context(|| "failed to parse content of HTTP_PORT environment variable")?
        .unwrap_or(DEFAULT_HTTP_PORT))
}

/// Returns a string representing the status of [`Backtrace`](std::backtrace::Backtrace) support on this platform.
fn get_backtrace_support() -> &'static str {
    #[cfg(backtrace_support)]
    match std::backtrace::Backtrace::capture().status() {
        std::backtrace::BacktraceStatus::Captured => "supported",
        std::backtrace::BacktraceStatus::Disabled => "disabled",
        std::backtrace::BacktraceStatus::Unsupported => "unsupported",
        _ => "unknown (unrecognized enum value)",
    }

    #[cfg(not(backtrace_support))]
    "unsupported (not Nightly toolchain)"
}
