//! Tabs: `page` renders an open tab, `registry` maps keys to screens,
//! `tab_labels` names them.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::{TabBar, TabPage};
pub use tab_labels::tab_label_for_key;
