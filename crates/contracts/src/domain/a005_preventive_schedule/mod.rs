pub mod aggregate;

pub use aggregate::{PreventiveSchedule, PreventiveScheduleDto, ScheduleId, ScheduleStats};
