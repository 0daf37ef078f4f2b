//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod dates;
pub mod envelope;

pub use aggregate_id::{parse_optional_id, AggregateId};
pub use aggregate_root::AggregateRoot;
pub use envelope::ApiEnvelope;
