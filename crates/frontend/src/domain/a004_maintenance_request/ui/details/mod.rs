//! Admin request form: equipment, classification, routing overrides.

mod view;
mod view_model;

pub use view::RequestDetails;
pub use view_model::RequestDetailsViewModel;
