pub mod card_animated;
pub mod date_input;
pub mod page_header;
pub mod stat_card;
pub mod ui;

pub use date_input::DateInput;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
