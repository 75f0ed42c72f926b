//! Document storage
//!
//! [`DocumentStore`] is the get/put/list contract a request layer needs.
//! [`InMemoryStore`] is the transient implementation; durable stores
//! implement the same trait.

use aibom_model::Aibom;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Id and name of a stored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub name: String,
}

/// Store of documents keyed by id
pub trait DocumentStore: Send + Sync {
    /// Insert or replace a document
    fn put(&self, doc: Aibom);

    fn get(&self, id: &str) -> Option<Aibom>;

    /// Summaries in insertion order
    fn list(&self) -> Vec<DocumentSummary>;

    /// Mutate a stored document in place; false if the id is unknown
    fn update(&self, id: &str, f: &mut dyn FnMut(&mut Aibom)) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Transient in-process store
///
/// Each mutation holds the write lock for its whole duration, so updates
/// to one document never interleave.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    docs: RwLock<IndexMap<String, Aibom>>,
}

impl InMemoryStore {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn put(&self, doc: Aibom) {
        self.docs.write().insert(doc.id.clone(), doc);
    }

    fn get(&self, id: &str) -> Option<Aibom> {
        self.docs.read().get(id).cloned()
    }

    fn list(&self) -> Vec<DocumentSummary> {
        self.docs
            .read()
            .values()
            .map(|doc| DocumentSummary {
                id: doc.id.clone(),
                name: doc.name.clone(),
            })
            .collect()
    }

    fn update(&self, id: &str, f: &mut dyn FnMut(&mut Aibom)) -> bool {
        match self.docs.write().get_mut(id) {
            Some(doc) => {
                f(doc);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.docs.read().len()
    }
}
