use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        coffees::{create_coffee, delete_coffee, get_coffee, list_coffees, put_coffee},
        health::livez,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let coffee_routes = Router::new()
        .route("/coffees", get(list_coffees).post(create_coffee))
        .route(
            "/coffees/{id}",
            get(get_coffee).put(put_coffee).delete(delete_coffee),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(coffee_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
