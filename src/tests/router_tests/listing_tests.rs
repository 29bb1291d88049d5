use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, test_state};
use astra::Body;
use http::{Method, Request};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_lists_featured_and_districts() {
    let state = test_state();
    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Destacadas"));
    assert_eq!(body.matches("data-card-id=").count(), 3);
    assert!(body.contains("/propiedades?district=San+Isidro"));
    assert!(body.contains("action=\"/tasacion\""));
}

#[test]
fn listing_page_renders_first_page_with_form() {
    let state = test_state();
    let resp = handle(get("/propiedades"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("8 propiedades encontradas"));
    assert!(body.contains("data-filters"));
    assert_eq!(body.matches("data-card-id=").count(), 3);
    assert!(body.contains("data-card-id=\"lm-001\""));
    assert!(body.contains("aria-current=\"page\""));
}

#[test]
fn district_filter_narrows_results() {
    let state = test_state();
    let body = body_string(handle(get("/propiedades?district=Miraflores"), &state).unwrap());

    assert!(body.contains("2 propiedades encontradas"));
    assert!(body.contains("data-card-id=\"lm-001\""));
    assert!(body.contains("data-card-id=\"lm-002\""));
    assert!(!body.contains("data-card-id=\"lm-003\""));
    // the district select keeps the choice
    assert!(body.contains("value=\"Miraflores\" selected"));
}

#[test]
fn results_partial_has_no_layout() {
    let state = test_state();
    let body = body_string(
        handle(get("/propiedades/resultados?operation=Alquiler&sort=price_asc"), &state).unwrap(),
    );

    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("id=\"results\""));
    assert!(body.contains("3 propiedades encontradas"));
    let flat = body.find("lm-002").unwrap();
    let loft = body.find("lm-006").unwrap();
    let office = body.find("lm-004").unwrap();
    assert!(flat < loft && loft < office, "rents should be cheapest first");
}

#[test]
fn last_page_holds_the_remainder() {
    let state = test_state();
    let body = body_string(handle(get("/propiedades?page=3"), &state).unwrap());

    assert_eq!(body.matches("data-card-id=").count(), 2);
    assert!(body.contains("data-card-id=\"lm-007\""));
    assert!(body.contains("data-card-id=\"lm-008\""));
}

#[test]
fn no_matches_shows_empty_state() {
    let state = test_state();
    let body = body_string(handle(get("/propiedades?minPrice=99999999"), &state).unwrap());

    assert!(body.contains("0 propiedades encontradas"));
    assert!(body.contains("No encontramos propiedades con esos filtros."));
    assert!(!body.contains("data-pagination"));
}

#[test]
fn page_past_the_end_links_back_to_the_first() {
    let state = test_state();
    let body = body_string(handle(get("/propiedades?page=9"), &state).unwrap());

    assert!(body.contains("8 propiedades encontradas"));
    assert_eq!(body.matches("data-card-id=").count(), 0);
    assert!(!body.contains("No encontramos propiedades con esos filtros."));
    assert!(body.contains("Volver a la página 1"));
    assert!(body.contains("href=\"/propiedades?page=1\""));
}

#[test]
fn markers_cover_every_match_not_just_the_page() {
    let state = test_state();
    let resp = handle(get("/api/markers?operation=Venta"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    let markers = json["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 5);
    assert!(json["bounds"].is_object());
    assert_eq!(markers[0]["href"], "/propiedad?id=lm-001");
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state();
    let err = handle(get("/wp-admin"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
