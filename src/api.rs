//! Types and functions used to implement the Pokémon REST API.

pub mod doc;
pub mod errors;
pub mod pokemon;

use actix_web::web;
use actix_web::web::ServiceConfig;
use log::trace;

use crate::db::Pool;

/// Registers the Pokémon API endpoints under the `/pokemon` scope.
///
/// Called automatically from [`configure_api`](crate::configure_api).
pub fn configure(pool: &Pool) -> impl FnOnce(&mut ServiceConfig) + '_ {
    |config| {
        trace!("Adding API endpoints for /pokemon");
        config.service(web::scope("/pokemon").configure(pokemon::configure(pool)));
    }
}
