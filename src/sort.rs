use std::cmp::Ordering;

/// A copy of `seq` sorted by `compare`, using the standard library's
/// stable sort.
///
/// Elements that compare equal keep their input order.
pub fn sorted_by<T: Clone>(seq: &[T], compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    let mut result = seq.to_vec();
    result.sort_by(compare);
    result
}

/// A copy of `seq` sorted by the key `key` extracts, with the same
/// stability guarantee as [`sorted_by`].
pub fn sorted_by_key<T: Clone, K: Ord>(seq: &[T], key: impl FnMut(&T) -> K) -> Vec<T> {
    let mut result = seq.to_vec();
    result.sort_by_key(key);
    result
}
