mod view;
mod view_model;

pub use view::TeamDetails;
pub use view_model::TeamDetailsViewModel;
