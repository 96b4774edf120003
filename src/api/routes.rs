use axum::{
    routing::get,
    Router,
    extract::{Json, State},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::api::models::ScanResult;
use crate::error::AppError;
use crate::scan::run_scan;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/scan", get(scan_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn scan_handler(State(state): State<AppState>) -> Result<Json<ScanResult>, AppError> {
    info!("Received request to /scan endpoint");
    let start_time = std::time::Instant::now();

    match run_scan(&state.config).await {
        Ok(result) => {
            info!(
                "Scan produced {} trend records in {:?}",
                result.trends.len(),
                start_time.elapsed()
            );
            Ok(Json(result))
        }
        Err(err) => {
            error!("Scan failed after {:?}: {}", start_time.elapsed(), err);
            Err(err)
        }
    }
}
