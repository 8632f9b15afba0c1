//! Subscription Endpoints

use serde::Serialize;

use crate::models::{ExpiringSubscription, ListEnvelope, Subscription};

#[derive(Serialize)]
pub struct CreateSubscriptionArgs<'a> {
    pub vehicle_id: u32,
    pub resident_id: u32,
    pub subscription_type: &'a str,
    pub cost: f64,
}

#[derive(Serialize)]
struct RenewArgs<'a> {
    renewal_type: &'a str,
}

pub async fn get_subscriptions(limit: u32, offset: u32) -> Result<Vec<Subscription>, String> {
    let env: ListEnvelope<Subscription> =
        super::get(&format!("/api/subscriptions?limit={limit}&offset={offset}")).await?;
    Ok(env.data)
}

pub async fn get_expiring_subscriptions(days: u32) -> Result<Vec<ExpiringSubscription>, String> {
    let env: ListEnvelope<ExpiringSubscription> =
        super::get(&format!("/api/subscriptions/expiring?days={days}")).await?;
    Ok(env.data)
}

pub async fn create_subscription(args: &CreateSubscriptionArgs<'_>) -> Result<(), String> {
    super::post_discard("/api/subscriptions", args).await
}

/// Renew keeping the current term ("SAME" is the only renewal type the
/// dashboard offers).
pub async fn renew_subscription(id: u32) -> Result<(), String> {
    super::post_discard(
        &format!("/api/subscriptions/{id}/renew"),
        &RenewArgs { renewal_type: "SAME" },
    )
    .await
}
