//! Ordered in-memory record collection with integer ids.
//!
//! A `Collection` is a plain `Vec` plus an id allocator. Lookups are linear
//! scans that return the first match; removal keeps the relative order of the
//! remaining records. It carries no lock of its own: the in-memory
//! repositories wrap it in a `RwLock`.

use crate::models::{IdPolicy, Image, Product};

/// A record stored in a [`Collection`]
pub trait Record: Clone {
    fn id(&self) -> i64;
}

impl Record for Product {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Record for Image {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    policy: IdPolicy,
    /// Next id under `IdPolicy::Sequential`; always greater than every id
    /// this collection has held.
    next_id: i64,
}

impl<T: Record> Collection<T> {
    pub fn new(policy: IdPolicy) -> Self {
        Self::seeded(Vec::new(), policy)
    }

    pub fn seeded(records: Vec<T>, policy: IdPolicy) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            records,
            policy,
            next_id,
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.find(|record| record.id() == id)
    }

    /// First record matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().find(|record| predicate(record))
    }

    /// Allocate an id, build the record with it and append it
    pub fn insert_with<F>(&mut self, build: F) -> &T
    where
        F: FnOnce(i64) -> T,
    {
        let id = self.allocate_id();
        let index = self.records.len();
        self.records.push(build(id));
        &self.records[index]
    }

    /// Replace the first record with `id` by `build(id)`
    pub fn replace_with<F>(&mut self, id: i64, build: F) -> Option<&T>
    where
        F: FnOnce(i64) -> T,
    {
        let index = self.position(id)?;
        self.records[index] = build(id);
        Some(&self.records[index])
    }

    /// Remove the first record with `id`, preserving the order of the rest
    pub fn remove(&mut self, id: i64) -> Option<T> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    fn allocate_id(&mut self) -> i64 {
        let id = match self.policy {
            IdPolicy::Sequential => self.next_id,
            IdPolicy::Count => self.records.len() as i64 + 1,
        };
        self.next_id = self.next_id.max(id + 1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{seed_products, NewProduct};

    fn product(name: &str) -> impl FnOnce(i64) -> Product + '_ {
        move |id| {
            Product::new(
                id,
                NewProduct {
                    name: name.to_string(),
                    description: String::new(),
                },
            )
        }
    }

    fn ids(collection: &Collection<Product>) -> Vec<i64> {
        collection.records().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_seeded_collection_appends_after_seed() {
        let mut products = Collection::seeded(seed_products(), IdPolicy::Sequential);

        assert_eq!(products.insert_with(product("a")).id, 3);
        assert_eq!(products.insert_with(product("b")).id, 4);
        assert_eq!(ids(&products), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sequential_policy_never_reuses_ids() {
        let mut products = Collection::seeded(seed_products(), IdPolicy::Sequential);

        products.remove(1).unwrap();
        assert_eq!(products.insert_with(product("a")).id, 3);
        products.remove(3).unwrap();
        assert_eq!(products.insert_with(product("b")).id, 4);
        assert_eq!(ids(&products), vec![2, 4]);
    }

    #[test]
    fn test_count_policy_uses_length_plus_one() {
        let mut products = Collection::seeded(seed_products(), IdPolicy::Count);

        assert_eq!(products.insert_with(product("a")).id, 3);
        products.remove(1).unwrap();
        // len is 2 again, so the next id collides with the surviving 3
        assert_eq!(products.insert_with(product("b")).id, 3);
        assert_eq!(ids(&products), vec![2, 3, 3]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut products = Collection::new(IdPolicy::Sequential);
        for name in ["a", "b", "c", "d"] {
            products.insert_with(product(name));
        }

        let removed = products.remove(2).unwrap();

        assert_eq!(removed.name, "b");
        let names: Vec<_> = products.records().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_replace_forces_original_id() {
        let mut products = Collection::seeded(seed_products(), IdPolicy::Sequential);

        let replaced = products.replace_with(2, product("new")).unwrap();

        assert_eq!(replaced.id, 2);
        assert_eq!(replaced.name, "new");
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_missing_id_operations_return_none() {
        let mut products = Collection::seeded(seed_products(), IdPolicy::Sequential);

        assert!(products.get(9).is_none());
        assert!(products.replace_with(9, product("x")).is_none());
        assert!(products.remove(9).is_none());
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut products = Collection::new(IdPolicy::Sequential);
        products.insert_with(product("same"));
        products.insert_with(product("same"));

        let found = products.find(|p| p.name == "same").unwrap();

        assert_eq!(found.id, 1);
        assert!(!products.is_empty());
    }
}
