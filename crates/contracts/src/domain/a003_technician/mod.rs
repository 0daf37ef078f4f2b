pub mod aggregate;

pub use aggregate::{Technician, TechnicianDto, TechnicianId, DEFAULT_SKILL_LEVEL};
