use std::hash::Hash;

use indexmap::IndexMap;

pub fn group_by<K, T, M>(items: Vec<T>, mapper: M) -> IndexMap<K, Vec<T>>
where
    K: Eq + Hash,
    M: Fn(&T) -> K,
{
    let mut grouped: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        let key = mapper(&item);
        grouped.entry(key).or_default().push(item);
    }

    grouped
}
