// src/routes/health.rs

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResp {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,       // API version, matches the /api/v1 prefix
    pub build: &'static str,         // crate version
}

pub async fn health() -> Json<HealthResp> {
    Json(HealthResp {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: "v1",
        build: env!("CARGO_PKG_VERSION"),
    })
}
