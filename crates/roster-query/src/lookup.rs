use roster_model::Record;

/// Record at position `id` in the loaded roster.
///
/// Positions are the only member identifiers and are not stable across
/// source edits: reordering the source silently changes what an id refers to.
pub fn member_at(records: &[Record], id: i64) -> Option<&Record> {
    let index = usize::try_from(id).ok()?;
    records.get(index)
}
