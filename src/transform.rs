/// Apply `f` to every element, producing a new sequence of the same length.
///
/// An empty input produces an empty sequence, not an absent value.
pub fn map<T, R>(seq: &[T], mut f: impl FnMut(&T) -> R) -> Vec<R> {
    let mut result = Vec::with_capacity(seq.len());
    for item in seq {
        result.push(f(item));
    }
    result
}

/// Keep the elements satisfying `predicate`, in their original order.
pub fn filter<T: Clone>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut result = Vec::new();
    for item in seq {
        if predicate(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Fold the sequence left to right, starting from `initial`.
///
/// An empty input returns `initial` unchanged.
pub fn reduce<T, A>(seq: &[T], initial: A, mut combinator: impl FnMut(A, &T) -> A) -> A {
    let mut accumulator = initial;
    for item in seq {
        accumulator = combinator(accumulator, item);
    }
    accumulator
}

/// Map every element to a sub-sequence and concatenate the results in
/// element order.
///
/// Empty sub-sequences contribute nothing. The sub-sequences are
/// materialized first so the output can be allocated in one go.
pub fn flat_map<T, R>(seq: &[T], mut f: impl FnMut(&T) -> Vec<R>) -> Vec<R> {
    let mut parts = Vec::with_capacity(seq.len());
    for item in seq {
        parts.push(f(item));
    }
    let total = parts.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(total);
    for part in parts {
        result.extend(part);
    }
    result
}

/// Invoke `f` once per element, for its side effects.
pub fn for_each<T>(seq: &[T], mut f: impl FnMut(&T)) {
    for item in seq {
        f(item);
    }
}

/// Invoke `f` once per element with its position, for its side effects.
pub fn for_each_indexed<T>(seq: &[T], mut f: impl FnMut(usize, &T)) {
    for (index, item) in seq.iter().enumerate() {
        f(index, item);
    }
}
