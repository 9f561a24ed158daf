//! Static welcome page served at the root of the service.

use actix_web::http::header::ContentType;
use actix_web::web::ServiceConfig;
use actix_web::{get, HttpResponse, Responder};
use log::trace;

/// HTML content of the welcome page, embedded at compile time.
pub const WELCOME_PAGE: &str = include_str!("../static/welcome.html");

/// Registers the welcome page endpoint.
///
/// Called automatically from [`configure_api`](crate::configure_api).
pub fn configure(config: &mut ServiceConfig) {
    trace!("Adding welcome page endpoint");
    config.service(welcome);
}

/// Returns the welcome page, which describes the API and links to its documentation.
///
/// Registered as `GET /`. Can also be used as a healthcheck since it never touches the database.
#[get("/")]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(WELCOME_PAGE)
}
