use std::sync::Mutex;

use crate::models::Hit;

/// Append-only log of hits, safe for concurrent workers. Identical hits
/// from different workers are all kept; candidates are delivered at most
/// once so duplicates do not normally occur.
pub struct ResultLog {
    hits: Mutex<Vec<Hit>>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self {
            hits: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, hit: Hit) {
        self.hits.lock().expect("result log poisoned").push(hit);
    }

    /// Hits as observed at call time; workers may append afterwards when
    /// called mid-run.
    pub fn snapshot(&self) -> Vec<Hit> {
        self.hits.lock().expect("result log poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.hits.lock().expect("result log poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResultLog {
    fn default() -> Self {
        Self::new()
    }
}
