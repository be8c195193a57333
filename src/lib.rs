use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use auth::TokenService;
use database::{ReportStore, UserStore};

/// Process-wide dependencies, built once at startup and injected into
/// handlers via axum state. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub reports: ReportStore,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(pool: PgPool, tokens: TokenService) -> Self {
        Self {
            users: UserStore::new(pool.clone()),
            reports: ReportStore::new(pool),
            tokens,
        }
    }
}

pub fn app(state: AppState) -> Router {
    use handlers::protected::reports;
    use handlers::public;

    // Protected API: every /reports route sits behind the bearer gate
    let protected = Router::new()
        .route(
            "/reports",
            post(reports::report_create).get(reports::report_list),
        )
        .route(
            "/reports/:id",
            get(reports::report_show)
                .put(reports::report_update)
                .delete(reports::report_delete),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::bearer_auth_middleware,
        ));

    Router::new()
        // Public utility routes
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/time", get(public::time))
        // Public auth routes
        .route("/signup", post(public::auth::signup))
        .route("/login", post(public::auth::login))
        .merge(protected)
        .with_state(state)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
