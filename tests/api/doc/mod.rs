use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::Value;

use crate::init_unreachable_db_service;

#[test_log::test(actix_web::test)]
async fn test_openapi_json() {
    init_unreachable_db_service!(service);

    let req = test::TestRequest::with_uri("/api-docs/openapi.json").to_request();
    let openapi: Value = test::call_and_read_body_json(&service, req).await;

    assert_eq!("Pokémon API", openapi["info"]["title"]);
    assert!(openapi["paths"]["/pokemon"].is_object());
    assert!(openapi["paths"]["/pokemon/{id}"].is_object());
    assert!(openapi["components"]["schemas"]["Pokemon"].is_object());
}

#[test_log::test(actix_web::test)]
async fn test_renderers() {
    init_unreachable_db_service!(service);

    for uri in ["/api/", "/swagger-ui/", "/docs", "/redoc", "/rapidoc"] {
        let req = test::TestRequest::with_uri(uri).to_request();
        let result = test::call_service(&service, req).await;

        assert_eq!(StatusCode::OK, result.status(), "uri: {}", uri);
        let content_type = result
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"), "uri: {}", uri);
    }
}

#[test_log::test(actix_web::test)]
async fn test_api_redirects_to_swagger_ui() {
    init_unreachable_db_service!(service);

    let req = test::TestRequest::with_uri("/api").to_request();
    let result = test::call_service(&service, req).await;

    assert!(result.status().is_redirection());
    assert_eq!(
        Some("/api/"),
        result
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    );
}

#[test_log::test(actix_web::test)]
async fn test_welcome_page() {
    init_unreachable_db_service!(service);

    let req = test::TestRequest::with_uri("/").to_request();
    let result = test::call_service(&service, req).await;

    assert_eq!(StatusCode::OK, result.status());
    let body = test::read_body(result).await;
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("/api/"));
    assert!(body.contains("/docs"));
}
