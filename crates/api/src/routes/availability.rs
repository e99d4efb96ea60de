use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/availability/batch",
            post(handlers::availability::batch_availability),
        )
        .route(
            "/api/availability/check",
            get(handlers::availability::check_availability),
        )
}
