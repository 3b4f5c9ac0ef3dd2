use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock};

/// Identifiers of the postings a visitor bookmarked.
#[derive(Debug, Default)]
pub struct SavedJobs {
    ids: RwLock<BTreeSet<String>>,
}

impl SavedJobs {
    /// Flips membership of `id` and returns whether it is now saved.
    pub fn toggle(&self, id: &str) -> bool {
        let mut ids = self.ids.write().unwrap_or_else(PoisonError::into_inner);
        if ids.remove(id) {
            false
        } else {
            ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Saved identifiers in ascending order.
    pub fn ids(&self) -> Vec<String> {
        self.ids
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let saved = SavedJobs::default();
        assert!(saved.toggle("3"));
        assert!(saved.contains("3"));
        assert_eq!(saved.len(), 1);
        assert!(!saved.toggle("3"));
        assert!(!saved.contains("3"));
        assert!(saved.is_empty());
    }

    #[test]
    fn double_toggle_restores_original_set() {
        let saved = SavedJobs::default();
        saved.toggle("1");
        saved.toggle("5");
        let before = saved.ids();

        saved.toggle("2");
        saved.toggle("2");
        assert_eq!(saved.ids(), before);

        saved.toggle("5");
        saved.toggle("5");
        assert_eq!(saved.ids(), vec!["1", "5"]);
    }
}
