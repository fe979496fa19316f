use crate::domain::ports::{Clock, IdGenerator, Submission, SystemClock, UuidGenerator};
use crate::domain::schema::Schema;
use crate::utils::error::{Result, SiteError};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Append-only, newest-first list of submissions of one kind.
pub struct SubmissionStore<T: Submission> {
    records: Mutex<VecDeque<T>>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl<T: Submission> SubmissionStore<T> {
    /// `seed` is expected newest-first, as stored in the fixture.
    pub fn new(seed: Vec<T>) -> Self {
        Self::with_sources(seed, Arc::new(SystemClock), Arc::new(UuidGenerator))
    }

    pub fn with_sources(seed: Vec<T>, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            records: Mutex::new(seed.into()),
            clock,
            ids,
        }
    }

    pub fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .lock()
            .map_err(|_| SiteError::StoreUnavailable { store: T::KIND })?;
        Ok(records.iter().cloned().collect())
    }

    pub fn add(&self, candidate: &Value) -> Result<T> {
        let input = T::Input::parse(candidate)?;

        let mut records = self
            .records
            .lock()
            .map_err(|_| SiteError::StoreUnavailable { store: T::KIND })?;
        // Stamped under the lock so list order always agrees with createdAt.
        let record = T::from_input(input, self.ids.next_id(), self.clock.now());
        records.push_front(record.clone());
        let total = records.len();
        drop(records);

        tracing::debug!(kind = T::KIND, id = record.id(), total, "Submission stored");
        Ok(record)
    }

    pub fn len(&self) -> Result<usize> {
        let records = self
            .records
            .lock()
            .map_err(|_| SiteError::StoreUnavailable { store: T::KIND })?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T: Submission> Default for SubmissionStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CareerSubmission, ContactSubmission};
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Default)]
    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            format!("sub-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    fn fixed_store() -> SubmissionStore<ContactSubmission> {
        SubmissionStore::with_sources(
            Vec::new(),
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap())),
            Arc::new(SequentialIds::default()),
        )
    }

    fn contact(name: &str) -> Value {
        json!({
            "fullName": name,
            "email": "ada@example.com",
            "phone": "123456",
            "message": "Interested in catering for 50 guests"
        })
    }

    #[test]
    fn test_add_assigns_id_and_timestamp() {
        let store = fixed_store();
        let record = store.add(&contact("Ada Lovelace")).unwrap();

        assert_eq!(record.id, "sub-1");
        assert_eq!(record.created_at, Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap());
        assert_eq!(record.details.full_name, "Ada Lovelace");
        assert_eq!(record.details.company, "");
    }

    #[test]
    fn test_newest_first() {
        let store = fixed_store();
        store.add(&contact("First Guest")).unwrap();
        let latest = store.add(&contact("Second Guest")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], latest);
        assert_eq!(listed[1].details.full_name, "First Guest");
    }

    #[test]
    fn test_invalid_input_leaves_store_unchanged() {
        let store = fixed_store();
        store.add(&contact("Ada Lovelace")).unwrap();

        let err = store
            .add(&json!({"fullName": "A", "email": "x", "phone": "1", "message": ""}))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let store = fixed_store();
        store.add(&contact("Ada Lovelace")).unwrap();

        let mut snapshot = store.list().unwrap();
        snapshot.clear();
        let mut again = store.list().unwrap();
        again[0].details.full_name = "Changed".to_string();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].details.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_default_ids_are_unique() {
        let store: SubmissionStore<CareerSubmission> = SubmissionStore::default();
        let payload = json!({
            "fullName": "Bea Rossi",
            "email": "bea@example.com",
            "phone": "3331234567",
            "age": "24",
            "availability": "Weekend",
            "profilePhotoDataUrl": "data:image/png;base64,AAAA"
        });

        let a = store.add(&payload).unwrap();
        let b = store.add(&payload).unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(!store.is_empty().unwrap());
    }
}
