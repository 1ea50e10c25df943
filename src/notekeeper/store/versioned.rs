use super::HasId;

/// Ordered, append-oriented container for every version of one entity kind.
#[derive(Debug, Clone)]
pub struct VersionedStore<T: HasId> {
    items: Vec<T>,
}

impl<T: HasId> Default for VersionedStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: HasId> VersionedStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` to the end of the sequence.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the first element equal to `item`. Returns whether anything was removed;
    /// an absent item is not an error.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|existing| existing == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Snapshot of every stored value, oldest first.
    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Borrowing view over the stored values, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every retained value.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        key: String,
        label: &'static str,
    }

    impl HasId for Tag {
        fn id(&self) -> &str {
            &self.key
        }
    }

    fn tag(key: &str, label: &'static str) -> Tag {
        Tag {
            key: key.to_string(),
            label,
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = VersionedStore::new();
        store.add(tag("b", "first"));
        store.add(tag("a", "second"));
        store.add(tag("b", "third"));

        let labels: Vec<_> = store.get_all().iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_takes_only_first_match() {
        let mut store = VersionedStore::new();
        store.add(tag("a", "same"));
        store.add(tag("b", "other"));
        store.add(tag("a", "same"));

        assert!(store.remove(&tag("a", "same")));
        let labels: Vec<_> = store.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = VersionedStore::new();
        store.add(tag("a", "x"));

        assert!(!store.remove(&tag("z", "x")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let mut store = VersionedStore::new();
        store.add(tag("a", "old"));
        store.add(tag("a", "new"));

        assert_eq!(store.find_by_id("a").map(|t| t.label), Some("old"));
        assert!(store.find_by_id("missing").is_none());
    }

    #[test]
    fn get_all_is_detached_snapshot() {
        let mut store = VersionedStore::new();
        store.add(tag("a", "x"));
        let snapshot = store.get_all();
        store.add(tag("b", "y"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_store() {
        let mut store = VersionedStore::new();
        store.add(tag("a", "x"));
        store.clear();

        assert!(store.is_empty());
        assert!(store.last().is_none());
    }
}
