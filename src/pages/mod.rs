//! Dashboard Pages
//!
//! One component per top-level route.

mod dashboard;
mod residents;
mod subscriptions;
mod visitors;
mod supervisors;

pub use dashboard::DashboardPage;
pub use residents::ResidentsPage;
pub use subscriptions::SubscriptionsPage;
pub use visitors::VisitorsPage;
pub use supervisors::SupervisorsPage;
