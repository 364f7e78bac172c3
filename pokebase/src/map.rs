use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable, cheaply cloneable list of values indexed by key.
///
/// Iteration through [`Map::values`] keeps the order the values were given in.
#[derive(Debug)]
pub struct Map<K, V>(Arc<Inner<K, V>>);

#[derive(Debug)]
struct Inner<K, V> {
    entries: BTreeMap<K, usize>,
    values: Arc<[V]>,
}

impl<K, V> Map<K, V> {
    pub fn new(values: impl Into<Arc<[V]>>, to_key: impl Fn(&V) -> K) -> Self
    where
        K: Ord,
    {
        let values = values.into();

        Self(Arc::new(Inner {
            entries: BTreeMap::from_iter(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| (to_key(value), i)),
            ),
            values,
        }))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        Some(&self.0.values[*self.0.entries.get(key)?])
    }

    pub fn len(&self) -> usize {
        self.0.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values.is_empty()
    }

    pub fn values(&self) -> &[V] {
        &self.0.values
    }
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_insertion_order() {
        let map = Map::new(vec![30, 10, 20], |value| *value);

        assert_eq!(map.values(), &[30, 10, 20]);
        assert_eq!(map.get(&10), Some(&10));
        assert_eq!(map.get(&40), None);
    }

    #[test]
    fn clones_share_values() {
        let map = Map::new(vec!["a".to_owned()], |value| value.clone());
        let clone = map.clone();

        assert!(std::ptr::eq(map.values(), clone.values()));
    }
}
