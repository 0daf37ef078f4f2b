pub mod form_target;
pub mod list_state;
pub mod load_gate;
pub mod list_view_model;

pub use form_target::FormTarget;
pub use list_state::{ListState, LoadOutcome};
pub use load_gate::{LatestLoad, LoadGate, LoadTicket};
pub use list_view_model::ListViewModel;
