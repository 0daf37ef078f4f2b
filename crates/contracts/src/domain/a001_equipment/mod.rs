pub mod aggregate;

pub use aggregate::{Equipment, EquipmentDto, EquipmentId};
