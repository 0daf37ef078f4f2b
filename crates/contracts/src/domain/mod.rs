pub mod common;

pub mod a001_equipment;
pub mod a002_team;
pub mod a003_technician;
pub mod a004_maintenance_request;
pub mod a005_preventive_schedule;
