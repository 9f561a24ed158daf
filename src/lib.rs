//! Library crate of the Pokémon API.
//!
//! Implements a REST API to create, list, fetch, update and delete Pokémon records stored in a
//! Postgres database, along with its OpenAPI documentation and a static welcome page. The main
//! binary simply builds the app (see [`pokemon_api_app`]) and serves it over HTTP.
//!
//! For more information, see `README.md`.

#![cfg_attr(backtrace_support, feature(error_generic_member_access))]
#![warn(missing_docs)]

pub mod api;
pub mod db;
pub mod error;
pub mod helpers;
pub mod models;
#[allow(missing_docs)]
pub mod schema;
pub mod service_env;
pub mod services;
pub mod welcome;

use actix_web::web::ServiceConfig;
use actix_web_validator::{JsonConfig, PathConfig};
pub use error::Error;
pub use error::Result;
use log::trace;

use crate::api::errors::actix_error_handler;
use crate::db::Pool;

/// Registers everything the Pokémon API serves.
///
/// This includes the extractor configs (so that malformed requests produce our own
/// [`ErrorResponse`](api::errors::ErrorResponse)), the `/pokemon` endpoints, the OpenAPI
/// documentation and the welcome page.
///
/// # Examples
///
/// ```no_run
/// use actix_web::App;
/// use pokemon_api::configure_api;
/// use pokemon_api::db::get_pool;
///
/// # fn example() -> pokemon_api::Result<()> {
/// let pool = get_pool()?;
/// let app = App::new().configure(configure_api(&pool));
/// #
/// # Ok(())
/// # }
/// ```
pub fn configure_api(pool: &Pool) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Registering extractor configs");
        config
            .app_data(JsonConfig::default().error_handler(actix_error_handler))
            .app_data(PathConfig::default().error_handler(actix_error_handler));

        config
            .configure(api::configure(pool))
            .configure(api::doc::configure)
            .configure(welcome::configure);
    }
}

/// Creates the Pokémon API [`App`](actix_web::App), using the given database connection
/// [`Pool`](db::Pool).
///
/// The app logs every request through actix-web's [`Logger`](actix_web::middleware::Logger)
/// middleware. Written as a macro because the concrete type of an `App` cannot be named.
///
/// # Examples
///
/// ```no_run
/// use actix_web::HttpServer;
/// use pokemon_api::db::get_pool;
/// use pokemon_api::pokemon_api_app;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = get_pool()?;
/// HttpServer::new(move || pokemon_api_app!(pool))
///     .bind(("127.0.0.1", 3000))?
///     .run()
///     .await?;
/// #
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! pokemon_api_app {
    ($pool:expr) => {{
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .configure($crate::configure_api(&$pool))
    }};
}
