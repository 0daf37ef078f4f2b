use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a server-owned record.
///
/// Ids are assigned by the backend; a form for a record that has not been
/// saved yet carries `None`.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Path segment used in resource URLs (`/equipment/{id}`)
    fn as_string(&self) -> String;

    /// Parse an id out of a tab key or select value
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id {:?}: {}", s, e))
    }
}

/// Parse an optional id from a select value; the empty string means "none".
pub fn parse_optional_id<I: AggregateId>(s: &str) -> Option<I> {
    if s.trim().is_empty() {
        None
    } else {
        I::from_string(s).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id::<i64>(""), None);
        assert_eq!(parse_optional_id::<i64>("42"), Some(42));
        assert_eq!(parse_optional_id::<i64>("x"), None);
    }
}
