use super::AggregateId;

/// Trait for every record type managed through a CRUD screen.
///
/// Carries the per-type metadata the generic list/detail code needs: the
/// REST collection the record lives under and its labels in the UI.
pub trait AggregateRoot {
    type Id: AggregateId;

    /// Server id; `None` for a record that has not been created yet
    fn id(&self) -> Option<Self::Id>;

    /// Text shown when the record is referenced elsewhere (select options, tab titles)
    fn display_name(&self) -> String;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// REST collection path without leading slash (e.g. "equipment")
    fn collection_name() -> &'static str;

    /// Singular UI label
    fn element_name() -> &'static str;

    /// Plural UI label
    fn list_name() -> &'static str;

    /// `"{collection}/{id}"` for a saved record
    fn item_path(id: Self::Id) -> String {
        format!("/{}/{}", Self::collection_name(), id.as_string())
    }

    fn list_path() -> String {
        format!("/{}", Self::collection_name())
    }
}
