//! Identity and naming capability shared by every persisted entity.

/// An entity stored in an identity-keyed table.
///
/// The generic repository only needs three things from an entity: its
/// integer identity, a way to stamp a store-assigned identity onto it, and
/// the attribute that `get_by_name` matches against. Each entity type
/// supplies the name accessor itself so lookups stay statically checked.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Integer identity of the row.
    fn id(&self) -> i64;

    /// Return a copy carrying the given identity.
    #[must_use]
    fn with_id(self, id: i64) -> Self;

    /// The name-like attribute used by `get_by_name`.
    fn name(&self) -> &str;
}
