//! Higher-order operations over slices.
//!
//! Every function makes a single pass over the input in index order and
//! invokes the caller's closure at most once per element. None of them fail:
//! "no match" is reported through the return value.

// =============================================================================
// TRANSFORMATIONS
// =============================================================================

/// Applies `f` to every element and returns the results in the same order.
///
/// The output always has the same length as `seq`.
///
/// ```rust
/// let squares = seqops::map(&[1, -2, 3], |n| n * n);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn map<T, U, F>(seq: &[T], mut f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut ret = Vec::with_capacity(seq.len());
    for item in seq {
        ret.push(f(item));
    }
    ret
}

/// Returns the elements for which `pred` returned `true`, in their original order.
///
/// No match yields an empty vector.
pub fn filter<T, P>(seq: &[T], mut pred: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut ret = Vec::new();
    for item in seq {
        if pred(item) {
            ret.push(item.clone());
        }
    }
    ret
}

// =============================================================================
// SEARCH
// =============================================================================

/// Returns a reference to the first element for which `pred` returned `true`.
///
/// Stops calling `pred` after the first match.
pub fn find_ref<T, P>(seq: &[T], mut pred: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    for item in seq {
        if pred(item) {
            return Some(item);
        }
    }
    None
}

/// Returns the first element for which `pred` returned `true`, and whether one was found.
///
/// When nothing matches the result is `(T::default(), false)`.
///
/// ```rust
/// use seqops::{find, predicate::equal_to};
///
/// let input = [99, 42, -34, 0, -23, 45, 9, 5, 7];
/// assert_eq!(find(&input, equal_to(9)), (9, true));
/// assert_eq!(find(&input, equal_to(1000)), (0, false));
/// ```
pub fn find<T, P>(seq: &[T], pred: P) -> (T, bool)
where
    T: Clone + Default,
    P: FnMut(&T) -> bool,
{
    match find_ref(seq, pred) {
        Some(item) => (item.clone(), true),
        None => (T::default(), false),
    }
}

/// Returns `true` if at least one element satisfies `pred`.
///
/// Short-circuits on the first match. Always `false` for an empty slice.
pub fn some<T, P>(seq: &[T], pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    find_ref(seq, pred).is_some()
}

/// Returns `true` if every element satisfies `pred` (vacuously `true` when empty).
///
/// `pred` is evaluated on every element, including those after the first
/// failure.
pub fn every<T, P>(seq: &[T], mut pred: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    let mut ret = true;
    for item in seq {
        if !pred(item) {
            ret = false;
        }
    }
    ret
}

// =============================================================================
// ITERATION
// =============================================================================

/// Calls `f` on every element, in order, for its side effects.
///
/// Elements are handed out by reference, never copied, so mutations made
/// through shared handles (`Rc<RefCell<_>>`, `Cell`, ...) are visible to the
/// caller.
pub fn for_each<T, F>(seq: &[T], mut f: F)
where
    F: FnMut(&T),
{
    for item in seq {
        f(item);
    }
}

/// Calls `f` on every element in place, in order.
pub fn for_each_mut<T, F>(seq: &mut [T], mut f: F)
where
    F: FnMut(&mut T),
{
    for item in seq.iter_mut() {
        f(item);
    }
}

/// Folds the slice from left to right, starting with `initial`.
///
/// `reduce(&[a, b, c], f, init)` is `f(f(f(init, a), b), c)`; an empty slice
/// returns `initial` unchanged.
///
/// ```rust
/// let total = seqops::reduce(&[10.0, 10.0, 7.0, 8.0, 10.0], |acc: f64, n| acc + n, 0.0);
/// assert_eq!(total, 45.0);
/// ```
pub fn reduce<T, U, F>(seq: &[T], mut f: F, initial: U) -> U
where
    F: FnMut(U, &T) -> U,
{
    let mut acc = initial;
    for item in seq {
        acc = f(acc, item);
    }
    acc
}
