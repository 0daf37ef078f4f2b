mod view;
mod view_model;

pub use view::ScheduleDetails;
pub use view_model::{interval_preview, ScheduleDetailsViewModel};
