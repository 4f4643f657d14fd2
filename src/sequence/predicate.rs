//! Predicate factories.
//!
//! Each function captures a value and returns a closure usable with
//! [`filter`](super::filter), [`find`](super::find), [`some`](super::some)
//! and [`every`](super::every).

/// Matches elements equal to `value`.
pub fn equal_to<T: PartialEq>(value: T) -> impl Fn(&T) -> bool {
    move |item| *item == value
}

/// Matches strings containing `term`.
pub fn contains<S: AsRef<str>>(term: impl Into<String>) -> impl Fn(&S) -> bool {
    let term = term.into();
    move |item| item.as_ref().contains(term.as_str())
}

/// Inverts a predicate.
pub fn negate<T, P>(pred: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |item| !pred(item)
}
