use std::hash::Hash;

/// A wrapper around an implementation of a HashMap, defaulting to values of f64.
///
/// Top-product lists break ties by the order in which a product was first
/// sold, so the per-product accumulation must remember insertion order. We
/// therefore use indexmap::IndexMap instead of std::collections::HashMap.
/// This is an implementation detail, so it is wrapped in a newtype.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Map<K: Eq + Hash, V = f64>(indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>);

impl<K: Eq + Hash> Map<K, f64> {
    /// Add `amount` to the value stored under `key`, inserting it at zero first if absent
    pub fn accumulate(&mut self, key: K, amount: f64) {
        *self.0.entry(key).or_insert(0.0) += amount;
    }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self(indexmap::IndexMap::default())
    }
}

impl<K: Eq + Hash, V> std::ops::Deref for Map<K, V> {
    type Target = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Eq + Hash, V> std::ops::DerefMut for Map<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Eq + Hash, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(indexmap::IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_keeps_first_insertion_order() {
        let mut map = Map::<&str>::default();
        map.accumulate("b", 1.0);
        map.accumulate("a", 2.0);
        map.accumulate("b", 3.0);

        let entries = map.into_iter().collect::<Vec<_>>();
        assert_eq!(entries, vec![("b", 4.0), ("a", 2.0)]);
    }
}
