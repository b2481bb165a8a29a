use roster_model::{FilterField, FilterSet, MatchMode, Record};

/// Returns true when `record` satisfies every criterion in `criteria`.
///
/// Substring criteria compare Unicode-lowercased text; exact criteria compare
/// the field's display text as-is. Absent fields read as `""`.
pub fn matches(record: &Record, criteria: &FilterSet) -> bool {
    criteria
        .iter()
        .all(|(field, wanted)| field_matches(record, field, wanted))
}

fn field_matches(record: &Record, field: FilterField, wanted: &str) -> bool {
    let actual = record.text(field.column());
    match field.match_mode() {
        MatchMode::Substring => actual.to_lowercase().contains(&wanted.to_lowercase()),
        MatchMode::Exact => actual == wanted,
    }
}

/// Records satisfying `criteria`, in their original order.
pub fn filter_records(records: &[Record], criteria: &FilterSet) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

/// Result of a search over the full roster.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub members: Vec<Record>,
    pub total_count: usize,
    pub filtered_count: usize,
}

pub fn search(records: &[Record], criteria: &FilterSet) -> SearchOutcome {
    let members = filter_records(records, criteria);
    tracing::debug!(
        criteria = criteria.len(),
        total = records.len(),
        matched = members.len(),
        "Filtered roster"
    );
    SearchOutcome {
        total_count: records.len(),
        filtered_count: members.len(),
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::CellValue;

    fn member(name: &str, city: &str) -> Record {
        Record::from_iter([("Name", name), ("City", city)])
    }

    #[test]
    fn substring_match_ignores_case() {
        let criteria = FilterSet::new().with(FilterField::Name, "jo");
        assert!(matches(&member("John Doe", "Paris"), &criteria));
        assert!(matches(&member("JOANNA", "Paris"), &criteria));
        assert!(!matches(&member("Ada", "Paris"), &criteria));
    }

    #[test]
    fn exact_match_respects_case() {
        let criteria = FilterSet::new().with(FilterField::City, "Paris");
        assert!(matches(&member("Ada", "Paris"), &criteria));
        assert!(!matches(&member("Ada", "paris"), &criteria));
        assert!(!matches(&member("Ada", "Paris "), &criteria));
    }

    #[test]
    fn missing_field_reads_empty() {
        let criteria = FilterSet::new().with(FilterField::Title, "eng");
        assert!(!matches(&member("Ada", "Paris"), &criteria));

        let record = Record::from_iter([("Title", CellValue::Missing)]);
        assert!(!matches(&record, &criteria));
    }

    #[test]
    fn numeric_class_matches_display_text() {
        let record = Record::from_iter([("Class", CellValue::Number(2019.0))]);
        assert!(matches(&record, &FilterSet::new().with(FilterField::Class, "2019")));
        assert!(!matches(&record, &FilterSet::new().with(FilterField::Class, "2019.0")));
    }

    #[test]
    fn all_criteria_must_hold() {
        let criteria = FilterSet::new()
            .with(FilterField::Name, "ada")
            .with(FilterField::City, "London");
        assert!(matches(&member("Ada Lovelace", "London"), &criteria));
        assert!(!matches(&member("Ada Lovelace", "Paris"), &criteria));
    }

    #[test]
    fn search_reports_counts() {
        let records = vec![member("Ada", "London"), member("Grace", "Arlington")];
        let outcome = search(&records, &FilterSet::new().with(FilterField::City, "London"));

        assert_eq!(outcome.total_count, 2);
        assert_eq!(outcome.filtered_count, 1);
        assert_eq!(outcome.members, vec![member("Ada", "London")]);
    }
}
