//! # lodge_api
//!
//! HTTP API library for Lodge: the admin credential endpoints, the
//! booking-platform webhooks and the public availability read.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use lodge_core::auth::AuthError;
use lodge_core::auth::bootstrap::{self, SeedOutcome};
use lodge_core::store::{AvailabilityStore, MemoryStore, PgStore, UserStore};
use sqlx::PgPool;
use tokio::sync::OnceCell;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::ApiConfig;
use crate::handlers::{auth, availability, service, webhooks};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Admin account storage.
    pub users: Arc<dyn UserStore>,
    /// Availability mirror storage.
    pub availability: Arc<dyn AvailabilityStore>,
    /// API configuration.
    pub config: ApiConfig,
    /// Set once the seed admin has been ensured.
    seeded: Arc<OnceCell<SeedOutcome>>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        availability: Arc<dyn AvailabilityStore>,
        config: ApiConfig,
    ) -> Self {
        Self {
            users,
            availability,
            config,
            seeded: Arc::new(OnceCell::new()),
        }
    }

    /// State backed by PostgreSQL.
    pub fn postgres(pool: PgPool, config: ApiConfig) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self::new(store.clone(), store, config)
    }

    /// State backed by an in-process store.
    pub fn in_memory(config: ApiConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store, config)
    }

    /// Run the seed-admin bootstrap unless a previous run succeeded.
    pub async fn ensure_seed_admin(&self) -> Result<SeedOutcome, AuthError> {
        self.seeded
            .get_or_try_init(|| {
                bootstrap::seed_admin(self.users.as_ref(), self.config.seed_admin.as_ref())
            })
            .await
            .copied()
    }
}

/// Run embedded database migrations.
///
/// Delegates to `lodge_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    lodge_core::migrate::migrate(pool).await
}

/// CORS for the website. No configured origins means any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        }))
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    // Public routes (no auth required)
    let public = Router::new()
        .route(routes::GET_ROOT, get(service::service_info))
        .route(routes::POST_AUTH_LOGIN, post(auth::login_handler))
        .route(
            routes::GET_API_AVAILABILITY,
            get(availability::blocked_dates_handler),
        )
        .route(
            routes::GET_API_AVAILABILITY_RECORDS,
            get(availability::records_handler),
        )
        .route(routes::POST_WEBHOOK_HOSTAWAY, post(webhooks::hostaway_handler))
        .route(
            routes::POST_WEBHOOK_AVAILABILITY,
            post(webhooks::booking_handler),
        );

    // Protected routes (require auth)
    let protected = Router::new()
        .route(routes::GET_AUTH_ME, get(auth::me_handler))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::seed::ensure_seed_admin,
        ))
        .layer(cors)
        .with_state(state)
}
