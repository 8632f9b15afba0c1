//! Supervisor Endpoints

use crate::models::{ListEnvelope, Shift, Supervisor, SupervisorReport};

pub async fn get_supervisors() -> Result<Vec<Supervisor>, String> {
    let env: ListEnvelope<Supervisor> = super::get("/api/supervisors").await?;
    Ok(env.data)
}

pub async fn get_all_shifts() -> Result<Vec<Shift>, String> {
    let env: ListEnvelope<Shift> = super::get("/api/supervisors/shifts/all").await?;
    Ok(env.data)
}

pub async fn get_monthly_reports() -> Result<Vec<SupervisorReport>, String> {
    let env: ListEnvelope<SupervisorReport> =
        super::get("/api/supervisors/financial-report/current-month").await?;
    Ok(env.data)
}
