//! Maintenance/complaint request entity: model, enums, and status machine.

pub mod category;
pub mod model;
pub mod status;

pub use category::{MaintenanceCategory, MaintenancePriority, RequestType};
pub use model::{
    CreateMaintenanceRequest, MaintenanceRequest, MaintenanceRequestWithNames, MonthlyStat,
};
pub use status::MaintenanceStatus;
