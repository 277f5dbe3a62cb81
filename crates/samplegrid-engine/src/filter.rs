use samplegrid_types::Record;

/// Case-insensitive substring match against every value of the record.
///
/// `sample_id` counts as a value. An empty query matches everything.
pub fn record_matches(record: &Record, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowered(record, &needle)
}

fn matches_lowered(record: &Record, needle: &str) -> bool {
    record
        .values()
        .any(|value| value.to_lowercase().contains(needle))
}

/// Records matching `query`, in their original relative order
pub fn filter_records<'a, I>(records: I, query: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_lowered(record, &needle))
        .collect()
}
