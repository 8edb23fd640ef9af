//! API routes module

pub mod products;

use axum::Router;
use core_config::AppInfo;

/// Create all API routes
pub fn routes(app: AppInfo) -> Router {
    products::router().merge(axum_helpers::health_router(app))
}
