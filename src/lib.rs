pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use domain::{gift, guest, health, party};
use state::AppState;

fn party_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(party::handler::party_list_page))
        .route(
            "/party/new",
            get(party::handler::new_party_page).post(party::handler::create_party),
        )
        .route("/party/:party_id", get(party::handler::party_detail_page))
}

fn gift_registry_routes() -> Router<AppState> {
    let registry = get(gift::handler::gift_registry_page);

    Router::new()
        .route("/party/:party_id/gifts", registry.clone())
        .route("/party/:party_id/gifts/", registry)
        .route(
            "/party/:party_id/gifts/new",
            get(gift::handler::gift_create_partial).post(gift::handler::gift_create_save_partial),
        )
        .route(
            "/party/:party_id/gifts/:gift_id",
            get(gift::handler::gift_detail_partial).delete(gift::handler::gift_delete_partial),
        )
        .route(
            "/party/:party_id/gifts/:gift_id/edit",
            get(gift::handler::gift_update_partial).put(gift::handler::gift_update_save_partial),
        )
}

fn guest_list_routes() -> Router<AppState> {
    let guest_list =
        get(guest::handler::guest_list_page).post(guest::handler::guest_create_partial);

    Router::new()
        .route("/party/:party_id/guests", guest_list.clone())
        .route("/party/:party_id/guests/", guest_list)
        .route(
            "/party/:party_id/guests/mark-attending",
            put(guest::handler::mark_guests_attending_partial),
        )
        .route(
            "/party/:party_id/guests/mark-non-attending",
            put(guest::handler::mark_guests_not_attending_partial),
        )
        .route(
            "/party/:party_id/guests/filter",
            post(guest::handler::filter_guests_partial),
        )
}

/// 전체 라우터 구성
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::handler::health_check))
        .merge(party_routes())
        .merge(gift_registry_routes())
        .merge(guest_list_routes())
        .fallback(utils::error::not_found_fallback)
        .layer(middleware::from_fn(global::middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
