use crate::record::EntityRecord;

/// Ordered subsequence of records whose name contains `query` as a
/// case-insensitive substring. Pure function of its two inputs; an empty
/// query returns the full collection unchanged in order.
pub fn filter_by_name<R: EntityRecord>(records: &[R], query: &str) -> Vec<R> {
    if query.is_empty() {
        return records.to_vec();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
