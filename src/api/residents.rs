//! Resident & Vehicle Endpoints

use serde::Serialize;

use crate::models::{ListEnvelope, Resident, Vehicle};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateResidentArgs<'a> {
    pub apartment_id: u32,
    pub name: &'a str,
    pub phone_number: &'a str,
    pub email: &'a str,
}

#[derive(Serialize)]
pub struct CreateVehicleArgs<'a> {
    pub resident_id: u32,
    pub license_plate: &'a str,
    pub vehicle_type: &'a str,
}

// ========================
// Commands
// ========================

pub async fn get_residents(limit: u32, offset: u32) -> Result<Vec<Resident>, String> {
    let env: ListEnvelope<Resident> =
        super::get(&format!("/api/residents?limit={limit}&offset={offset}")).await?;
    Ok(env.data)
}

pub async fn create_resident(args: &CreateResidentArgs<'_>) -> Result<(), String> {
    super::post_discard("/api/residents", args).await
}

pub async fn delete_resident(id: u32) -> Result<(), String> {
    super::delete(&format!("/api/residents/{id}")).await
}

pub async fn get_vehicles(limit: u32, offset: u32) -> Result<Vec<Vehicle>, String> {
    let env: ListEnvelope<Vehicle> =
        super::get(&format!("/api/vehicles?limit={limit}&offset={offset}")).await?;
    Ok(env.data)
}

pub async fn create_vehicle(args: &CreateVehicleArgs<'_>) -> Result<(), String> {
    super::post_discard("/api/vehicles", args).await
}

pub async fn delete_vehicle(id: u32) -> Result<(), String> {
    super::delete(&format!("/api/vehicles/{id}")).await
}
