use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use caliope_core::Catalog;
use chrono::Utc;
use serde::Serialize;

#[derive(Clone)]
pub struct HealthState {
    catalog: Arc<Catalog>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState { catalog })
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(&state.catalog);
    let ready = catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "caliope-server runtime initialized".to_string(),
        },
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(catalog: &Catalog) -> HealthCheck {
    let services = catalog.services().len();
    let products = catalog.products().len();

    if services == 0 || products == 0 {
        HealthCheck {
            status: "degraded",
            detail: format!("catalog incomplete: {services} services, {products} products"),
        }
    } else {
        HealthCheck {
            status: "ready",
            detail: format!("catalog loaded: {services} services, {products} products"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use caliope_core::Catalog;

    use crate::health::{health, HealthState};

    #[tokio::test]
    async fn health_returns_ready_with_a_seeded_catalog() {
        let (status, Json(payload)) =
            health(State(HealthState { catalog: Arc::new(Catalog::seeded()) })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.catalog.status, "ready");
        assert_eq!(payload.service.status, "ready");
    }

    #[tokio::test]
    async fn health_degrades_when_the_catalog_is_empty() {
        let empty = Catalog::new(Vec::new(), Vec::new(), Vec::new());

        let (status, Json(payload)) =
            health(State(HealthState { catalog: Arc::new(empty) })).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.catalog.status, "degraded");
        assert_eq!(payload.service.status, "ready");
    }
}
