//! In-memory homework store.
//!
//! Records live in buckets keyed by their `DD.MM.YYYY` date string, taken
//! verbatim from the record. Everything is volatile: a restart starts from
//! an empty map.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::util::parse_record_date;

/// A single homework entry. `date` is the raw `DD.MM.YYYY` string the
/// extractor produced; the store never reformats it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub subject: String,
    pub task: String,
    pub date: String,
}

/// Shared handle to the date-keyed record buckets. Clones are cheap and
/// all see the same data.
#[derive(Debug, Clone, Default)]
pub struct HomeworkStore {
    inner: Arc<RwLock<HashMap<String, Vec<HomeworkRecord>>>>,
}

impl HomeworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the bucket for its date, creating the bucket on
    /// first use. A malformed date still gets a bucket under the literal
    /// key, so the record stays reachable by exact-date lookup.
    pub fn insert(&self, record: HomeworkRecord) {
        let mut buckets = self.inner.write();
        buckets.entry(record.date.clone()).or_default().push(record);
    }

    /// Fetch records matching the given filters.
    ///
    /// - Subject only: records dated strictly after `today` (tomorrow and
    ///   later), subject compared case-insensitively. Buckets whose key
    ///   does not parse as `DD.MM.YYYY` carry no ordering and are skipped.
    /// - Date only: exact bucket-key match, every record in it, insertion
    ///   order.
    /// - Both: exact bucket key plus case-insensitive subject match.
    /// - Neither: every record in the store.
    pub fn lookup(
        &self,
        subject: Option<&str>,
        date: Option<&str>,
        today: NaiveDate,
    ) -> Vec<HomeworkRecord> {
        let buckets = self.inner.read();
        match (subject, date) {
            (Some(subject), Some(date)) => buckets
                .get(date)
                .map(|records| {
                    records
                        .iter()
                        .filter(|r| subject_matches(&r.subject, subject))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default(),
            (Some(subject), None) => {
                let mut found = Vec::new();
                for (key, records) in buckets.iter() {
                    let bucket_date = match parse_record_date(key) {
                        Some(date) => date,
                        None => continue,
                    };
                    if bucket_date <= today {
                        continue;
                    }
                    found.extend(
                        records
                            .iter()
                            .filter(|r| subject_matches(&r.subject, subject))
                            .cloned(),
                    );
                }
                found
            }
            (None, Some(date)) => buckets.get(date).cloned().unwrap_or_default(),
            (None, None) => buckets.values().flatten().cloned().collect(),
        }
    }

    /// Total number of stored records across all buckets.
    pub fn len(&self) -> usize {
        self.inner.read().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Case-insensitive subject comparison. `to_lowercase` handles Cyrillic,
/// unlike the ASCII variant.
fn subject_matches(stored: &str, wanted: &str) -> bool {
    stored.to_lowercase() == wanted.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(subject: &str, task: &str, date: &str) -> HomeworkRecord {
        HomeworkRecord {
            subject: subject.to_string(),
            task: task.to_string(),
            date: date.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    #[test]
    fn test_unfiltered_lookup_returns_every_record() {
        let store = HomeworkStore::new();
        store.insert(sample_record("Математика", "№ 431, 432", "05.03.2025"));
        store.insert(sample_record("История", "параграф 12", "06.03.2025"));
        store.insert(sample_record("Физика", "упр. 3", "07.03.2025"));

        assert_eq!(store.lookup(None, None, today()).len(), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_round_trip_by_subject_and_date() {
        let store = HomeworkStore::new();
        let record = sample_record("Математика", "упр. 10", "05.03.2025");
        store.insert(record.clone());

        let found = store.lookup(Some("математика"), Some("05.03.2025"), today());
        assert_eq!(found, vec![record]);
    }

    #[test]
    fn test_subject_only_excludes_today_includes_tomorrow() {
        let store = HomeworkStore::new();
        store.insert(sample_record("Химия", "лаб. 2", "03.03.2025"));
        store.insert(sample_record("Химия", "лаб. 3", "04.03.2025"));
        store.insert(sample_record("Химия", "лаб. 4", "05.03.2025"));

        let found = store.lookup(Some("химия"), None, today());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].task, "лаб. 4");
    }

    #[test]
    fn test_subject_only_skips_malformed_buckets() {
        let store = HomeworkStore::new();
        store.insert(sample_record("Химия", "лаб. 5", "завтра"));
        store.insert(sample_record("Химия", "лаб. 6", ""));
        store.insert(sample_record("Химия", "лаб. 7", "06.03.2025"));

        let found = store.lookup(Some("Химия"), None, today());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].task, "лаб. 7");
    }

    #[test]
    fn test_date_only_keeps_insertion_order() {
        let store = HomeworkStore::new();
        store.insert(sample_record("Математика", "№ 1", "05.03.2025"));
        store.insert(sample_record("Физика", "№ 2", "05.03.2025"));
        store.insert(sample_record("История", "№ 3", "06.03.2025"));

        let found = store.lookup(None, Some("05.03.2025"), today());
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].subject, "Математика");
        assert_eq!(found[1].subject, "Физика");
    }

    #[test]
    fn test_malformed_date_still_reachable_by_exact_string() {
        let store = HomeworkStore::new();
        store.insert(sample_record("Химия", "лаб. 5", "завтра"));

        assert_eq!(store.lookup(None, Some("завтра"), today()).len(), 1);
    }

    #[test]
    fn test_subject_match_ignores_case() {
        let store = HomeworkStore::new();
        store.insert(sample_record("Математика", "№ 431", "05.03.2025"));

        let found = store.lookup(Some("МАТЕМАТИКА"), Some("05.03.2025"), today());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_empty_store_finds_nothing() {
        let store = HomeworkStore::new();
        assert!(store.is_empty());
        assert!(store.lookup(Some("История"), None, today()).is_empty());
        assert!(store.lookup(None, Some("05.03.2025"), today()).is_empty());
        assert!(store.lookup(None, None, today()).is_empty());
    }

    #[test]
    fn test_clones_share_data() {
        let store = HomeworkStore::new();
        let handle = store.clone();
        handle.insert(sample_record("Музыка", "выучить песню", "05.03.2025"));

        assert_eq!(store.len(), 1);
    }
}
