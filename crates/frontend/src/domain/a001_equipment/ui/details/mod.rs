//! Equipment form (MVVM: `view_model.rs` holds state and commands, `view.rs` renders).

mod view;
mod view_model;

pub use view::EquipmentDetails;
pub use view_model::EquipmentDetailsViewModel;
