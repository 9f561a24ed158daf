//! OpenAPI documentation support.
//!
//! | Endpoint                 | Content                   |
//! |--------------------------|---------------------------|
//! | `/api-docs/openapi.json` | OpenAPI document, as JSON |
//! | `/api/`                  | Swagger UI                |
//! | `/swagger-ui/`           | Swagger UI                |
//! | `/docs`                  | Redoc                     |
//! | `/redoc`                 | Redoc                     |
//! | `/rapidoc`               | RapiDoc                   |
//!
//! `/api` redirects to `/api/`.

use actix_web::web;
use actix_web::web::ServiceConfig;
use log::trace;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::api;
use crate::api::errors::ErrorResponse;
use crate::models::pokemon::{CreatePokemon, PatchPokemon, Pokemon};

/// Path where the OpenAPI document is served, as JSON.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Registers the OpenAPI document and the interactive documentation renderers.
///
/// Called automatically from [`configure_api`](crate::configure_api).
pub fn configure(config: &mut ServiceConfig) {
    trace!("Adding OpenAPI doc endpoints");

    let openapi = ApiDoc::openapi();
    config
        .service(SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_JSON_PATH, openapi.clone()))
        // Only one of the two Swagger UIs may register the OpenAPI document route.
        .service(SwaggerUi::new("/api/{_:.*}").config(Config::new([OPENAPI_JSON_PATH])))
        .service(web::redirect("/api", "/api/"))
        .service(Redoc::with_url("/docs", openapi.clone()))
        .service(Redoc::with_url("/redoc", openapi))
        .service(RapiDoc::new(OPENAPI_JSON_PATH).path("/rapidoc"));
}

/// API documentation in OpenAPI format.
///
/// Generated at compile time by the [`utoipa`] crate from the endpoint and model annotations.
/// Call [`ApiDoc::openapi`] to create an instance.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pokémon API",
        description = "CRUD REST API to manage Pokémon records and their battle stats. \
                       All endpoints accept and return JSON.",
        contact(name = "API Support", url = "https://github.com", email = "support@pokeapi.com"),
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
    ),
    servers(
        (url = "http://localhost:3000", description = "Development server"),
        (url = "https://backend-test-lake-beta.vercel.app", description = "Production server"),
    ),
    paths(
        api::pokemon::create,
        api::pokemon::find_all,
        api::pokemon::find_one,
        api::pokemon::update,
        api::pokemon::remove,
    ),
    components(
        schemas(Pokemon, CreatePokemon, PatchPokemon, ErrorResponse),
        responses(Pokemon, ErrorResponse),
    ),
    tags((name = "Pokemon", description = "All Pokémon management endpoints")),
)]
pub struct ApiDoc;
