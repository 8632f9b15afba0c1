//! Dashboard Endpoints

use crate::models::{Alert, DashboardStats, ListEnvelope};

/// Aggregate counters; replies a bare object, not the list envelope.
pub async fn get_dashboard_stats() -> Result<DashboardStats, String> {
    super::get("/api/dashboard/stats").await
}

pub async fn get_alerts() -> Result<Vec<Alert>, String> {
    let env: ListEnvelope<Alert> = super::get("/api/dashboard/alerts").await?;
    Ok(env.data)
}
