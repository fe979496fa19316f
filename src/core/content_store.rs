use crate::domain::model::SiteContent;
use crate::domain::schema::Schema;
use crate::utils::error::{Result, SiteError};
use serde_json::Value;
use std::sync::RwLock;

const STORE: &str = "content";

/// Holds the single [`SiteContent`] record.
///
/// Updates are validated before the lock is taken and then swapped in whole,
/// so readers see either the old record or the new one.
#[derive(Debug)]
pub struct ContentStore {
    current: RwLock<SiteContent>,
}

impl ContentStore {
    pub fn new(initial: SiteContent) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn get(&self) -> Result<SiteContent> {
        let guard = self
            .current
            .read()
            .map_err(|_| SiteError::StoreUnavailable { store: STORE })?;
        Ok(guard.clone())
    }

    pub fn update(&self, candidate: &Value) -> Result<SiteContent> {
        let next = SiteContent::parse(candidate)?;

        let mut guard = self
            .current
            .write()
            .map_err(|_| SiteError::StoreUnavailable { store: STORE })?;
        *guard = next.clone();
        drop(guard);

        tracing::debug!(clients = next.selected_clients.len(), "Site content replaced");
        Ok(next)
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new(SiteContent::default())
    }
}
