//! Review pipeline used by the admin submission tables.
//!
//! Each table keeps a [`StatusBoard`] mapping submission ids to a pipeline
//! status, plus a status filter and a free-text query. The board is local to
//! the admin session: no endpoint stores it and it is rebuilt from scratch on
//! reload. Making statuses durable would need a real field on the submission
//! and an update endpoint.
//!
//! Any status may move to any other status of the same pipeline. There are no
//! terminal states.

use crate::domain::ports::Submission;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Label of the "show everything" filter entry.
pub const ALL_STATUSES_LABEL: &str = "Tutte";

pub trait PipelineStatus: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every status in display order. The first one is the initial status.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn initial() -> Self {
        Self::ALL[0]
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactStatus {
    New,
    Contacted,
    QuoteSent,
    Closed,
}

impl PipelineStatus for ContactStatus {
    const ALL: &'static [Self] = &[
        ContactStatus::New,
        ContactStatus::Contacted,
        ContactStatus::QuoteSent,
        ContactStatus::Closed,
    ];

    fn label(self) -> &'static str {
        match self {
            ContactStatus::New => "Nuova",
            ContactStatus::Contacted => "Contattata",
            ContactStatus::QuoteSent => "Preventivo inviato",
            ContactStatus::Closed => "Chiusa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareerStatus {
    New,
    UnderReview,
    Interview,
    Hired,
    Rejected,
}

impl PipelineStatus for CareerStatus {
    const ALL: &'static [Self] = &[
        CareerStatus::New,
        CareerStatus::UnderReview,
        CareerStatus::Interview,
        CareerStatus::Hired,
        CareerStatus::Rejected,
    ];

    fn label(self) -> &'static str {
        match self {
            CareerStatus::New => "Nuova",
            CareerStatus::UnderReview => "In valutazione",
            CareerStatus::Interview => "Colloquio",
            CareerStatus::Hired => "Assunta",
            CareerStatus::Rejected => "Scartata",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for CareerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S: PipelineStatus> StatusFilter<S> {
    /// Accepts [`ALL_STATUSES_LABEL`] or any status label of the pipeline.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == ALL_STATUSES_LABEL {
            return Some(StatusFilter::All);
        }
        S::from_label(label).map(StatusFilter::Only)
    }

    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// Case-insensitive substring match against the record's searchable fields.
/// A blank query matches everything.
pub fn matches_query<T: Submission>(record: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone)]
pub struct StatusBoard<S> {
    statuses: HashMap<String, S>,
}

impl<S: PipelineStatus> StatusBoard<S> {
    pub fn new() -> Self {
        Self {
            statuses: HashMap::new(),
        }
    }

    /// Gives newly seen submissions the initial status and keeps existing
    /// annotations untouched.
    pub fn sync<T: Submission>(&mut self, records: &[T]) {
        for record in records {
            self.statuses
                .entry(record.id().to_string())
                .or_insert_with(S::initial);
        }
    }

    pub fn set(&mut self, id: &str, status: S) {
        self.statuses.insert(id.to_string(), status);
    }

    pub fn status_of(&self, id: &str) -> S {
        self.statuses.get(id).copied().unwrap_or_else(S::initial)
    }

    /// Records passing both the status filter and the query, in list order.
    pub fn filter<'a, T: Submission>(
        &self,
        records: &'a [T],
        status: StatusFilter<S>,
        query: &str,
    ) -> Vec<&'a T> {
        records
            .iter()
            .filter(|record| status.matches(self.status_of(record.id())))
            .filter(|record| matches_query(*record, query))
            .collect()
    }

    pub fn count(&self, records: &[impl Submission], status: S) -> usize {
        records
            .iter()
            .filter(|record| self.status_of(record.id()) == status)
            .count()
    }
}

impl<S: PipelineStatus> Default for StatusBoard<S> {
    fn default() -> Self {
        Self::new()
    }
}
