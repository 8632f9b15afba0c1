//! Visitor Endpoints

use serde::Serialize;

use crate::models::{ExitReceipt, ListEnvelope, VisitorRecord, VisitorStats};

#[derive(Serialize)]
pub struct VisitorEntryArgs<'a> {
    pub license_plate: &'a str,
    pub space_id: u32,
}

#[derive(Serialize)]
struct VisitorExitArgs<'a> {
    license_plate: &'a str,
}

pub async fn get_visitors(limit: u32, offset: u32) -> Result<Vec<VisitorRecord>, String> {
    let env: ListEnvelope<VisitorRecord> =
        super::get(&format!("/api/visitors?limit={limit}&offset={offset}")).await?;
    Ok(env.data)
}

pub async fn get_active_visitors() -> Result<Vec<VisitorRecord>, String> {
    let env: ListEnvelope<VisitorRecord> = super::get("/api/visitors/active").await?;
    Ok(env.data)
}

/// Today's totals; replies a bare object, not the list envelope.
pub async fn get_visitor_stats() -> Result<VisitorStats, String> {
    super::get("/api/visitors/stats").await
}

pub async fn record_visitor_entry(args: &VisitorEntryArgs<'_>) -> Result<(), String> {
    super::post_discard("/api/visitors/entry", args).await
}

/// The backend computes the fee at exit time and reports it back.
pub async fn record_visitor_exit(license_plate: &str) -> Result<ExitReceipt, String> {
    super::post("/api/visitors/exit", &VisitorExitArgs { license_plate }).await
}
