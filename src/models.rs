//! Frontend Models
//!
//! Data structures matching the parking backend's JSON responses.

use serde::Deserialize;

/// Wrapper every list endpoint replies with: `{"data": [...], "count": N}`.
///
/// The api layer unwraps this and hands pages a plain `Vec`; some endpoints
/// omit `count`, so both fields tolerate absence.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resident {
    pub resident_id: u32,
    pub name: String,
    pub building_id: Option<u32>,
    pub floor: Option<i32>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: u32,
    pub license_plate: String,
    pub vehicle_type: String,
    pub resident_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subscription {
    pub subscription_id: u32,
    pub resident_name: Option<String>,
    pub license_plate: Option<String>,
    // 0/1 flags straight from the database; "quaterly" is the backend's
    // own column spelling.
    #[serde(default)]
    pub is_monthly: u8,
    #[serde(default)]
    pub is_quaterly: u8,
    #[serde(default)]
    pub is_yearly: u8,
    pub start_date: Option<String>,
    pub expiration_date: Option<String>,
    pub cost: Option<f64>,
}

impl Subscription {
    pub fn type_label(&self) -> &'static str {
        if self.is_monthly == 1 {
            "Monthly"
        } else if self.is_quaterly == 1 {
            "Quarterly"
        } else {
            "Yearly"
        }
    }
}

/// Row of the expiring-soon query; the backend resolves the type flags to
/// a string here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpiringSubscription {
    pub subscription_id: u32,
    pub resident_name: Option<String>,
    pub license_plate: Option<String>,
    pub subscription_type: Option<String>,
    pub expiration_date: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VisitorRecord {
    pub record_id: u32,
    pub license_plate: Option<String>,
    pub space_id: Option<u32>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub parking_fee: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct VisitorStats {
    #[serde(default)]
    pub total_visitors_today: u32,
    #[serde(default)]
    pub currently_parked: u32,
    #[serde(default)]
    pub total_revenue_today: f64,
}

/// Fee reported by the exit endpoint after the backend computes it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExitReceipt {
    #[serde(default)]
    pub parking_fee: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Supervisor {
    pub supervisor_id: u32,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shift {
    pub shift_id: u32,
    pub supervisor_name: Option<String>,
    pub day: Option<String>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub total_money_collected: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SupervisorReport {
    pub supervisor_report_id: Option<u32>,
    pub supervisor_name: Option<String>,
    #[serde(default)]
    pub total_shifts_made: u32,
    #[serde(default)]
    pub total_money_made: f64,
    #[serde(default)]
    pub salary: f64,
    pub month: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub active_subscriptions: u32,
    #[serde(default)]
    pub current_visitors: u32,
    #[serde(default)]
    pub today_visitor_revenue: f64,
    #[serde(default)]
    pub expiring_soon: u32,
    #[serde(default)]
    pub current_occupied_spaces: u32,
    #[serde(default)]
    pub total_available_spaces: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alert {
    pub alert_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_unwraps_data_and_count() {
        let env: ListEnvelope<Resident> = serde_json::from_str(
            r#"{"data": [{"resident_id": 1, "name": "Nguyen Van A",
                "building_id": 2, "floor": 5,
                "phone_number": "0901", "email": "a@x.vn"}],
               "count": 1}"#,
        )
        .unwrap();
        assert_eq!(env.count, Some(1));
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.data[0].name, "Nguyen Van A");
    }

    #[test]
    fn list_envelope_tolerates_missing_count() {
        let env: ListEnvelope<Alert> =
            serde_json::from_str(r#"{"data": [{"alert_type": "OVER_CAPACITY", "message": "full"}]}"#)
                .unwrap();
        assert_eq!(env.count, None);
        assert_eq!(env.data[0].alert_type, "OVER_CAPACITY");
    }

    #[test]
    fn subscription_type_label_follows_flags() {
        let mut sub: Subscription = serde_json::from_str(
            r#"{"subscription_id": 9, "resident_name": null, "license_plate": "29A-12345",
                "is_monthly": 1, "start_date": null, "expiration_date": null, "cost": 120000}"#,
        )
        .unwrap();
        assert_eq!(sub.type_label(), "Monthly");
        sub.is_monthly = 0;
        sub.is_quaterly = 1;
        assert_eq!(sub.type_label(), "Quarterly");
        sub.is_quaterly = 0;
        assert_eq!(sub.type_label(), "Yearly");
    }

    #[test]
    fn visitor_record_tolerates_sparse_rows() {
        let rec: VisitorRecord = serde_json::from_str(
            r#"{"record_id": 3, "license_plate": null, "space_id": 12,
                "arrival_time": "2026-08-24T08:00:00", "departure_time": null,
                "parking_fee": null}"#,
        )
        .unwrap();
        assert!(rec.departure_time.is_none());
        assert!(rec.parking_fee.is_none());
    }

    #[test]
    fn stats_default_missing_fields_to_zero() {
        let stats: DashboardStats = serde_json::from_str(r#"{"active_subscriptions": 4}"#).unwrap();
        assert_eq!(stats.active_subscriptions, 4);
        assert_eq!(stats.current_visitors, 0);
        assert_eq!(stats.total_available_spaces, 0);
    }
}
