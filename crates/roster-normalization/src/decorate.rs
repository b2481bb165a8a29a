use roster_model::Record;

use crate::flags::flag_for;

/// Field added to decorated records.
pub const FLAG_FIELD: &str = "flag";

/// Returns a copy of `record` with its `flag` field set from `Country`.
///
/// An existing `flag` column is overwritten. The input record is not touched,
/// so a loaded roster can be shared between concurrent requests.
pub fn decorate(record: &Record) -> Record {
    let flag = flag_for(&record.text("Country"));
    record.clone().with_field(FLAG_FIELD, flag)
}

pub fn decorate_all(records: &[Record]) -> Vec<Record> {
    records.iter().map(decorate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::CellValue;

    #[test]
    fn adds_flag_without_mutating_input() {
        let record = Record::from_iter([("Name", "Ada"), ("Country", "United Kingdom")]);
        let decorated = decorate(&record);

        assert_eq!(decorated.text(FLAG_FIELD), "🇬🇧");
        assert_eq!(decorated.text("Name"), "Ada");
        assert!(record.get(FLAG_FIELD).is_none());
    }

    #[test]
    fn missing_country_gets_default_flag() {
        let record = Record::from_iter([("Country", CellValue::Missing)]);
        assert_eq!(decorate(&record).text(FLAG_FIELD), "🌐");
        assert_eq!(decorate(&Record::new()).text(FLAG_FIELD), "🌐");
    }

    #[test]
    fn overwrites_existing_flag_column() {
        let record = Record::from_iter([("Country", "France"), ("flag", "stale")]);
        assert_eq!(decorate(&record).text(FLAG_FIELD), "🇫🇷");
    }
}
