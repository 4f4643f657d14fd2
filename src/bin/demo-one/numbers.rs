//! Integer helpers passed to the sequence operations.

pub fn is_negative(n: &i64) -> bool {
    *n < 0
}

pub fn is_odd(n: &i64) -> bool {
    n % 2 != 0
}

/// Squares `n`, saturating at `i64::MAX`.
pub fn square(n: &i64) -> i64 {
    n.saturating_mul(*n)
}

pub fn find_max(prev: i64, curr: &i64) -> i64 {
    if *curr > prev {
        *curr
    } else {
        prev
    }
}

pub fn find_min(prev: i64, curr: &i64) -> i64 {
    if *curr < prev {
        *curr
    } else {
        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqops::{every, reduce, some};

    const INPUT: [i64; 9] = [99, 42, -34, 0, -23, 45, 9, 5, 7];

    #[test]
    fn test_max_min() {
        assert_eq!(reduce(&INPUT, find_max, 0), 99);
        assert_eq!(reduce(&INPUT, find_min, i64::MAX), -34);
    }

    #[test]
    fn test_is_odd_handles_negatives() {
        assert!(is_odd(&-23));
        assert!(!is_odd(&-34));
        assert!(some(&INPUT, is_odd));
    }

    #[test]
    fn test_not_all_negative() {
        assert!(!every(&INPUT, is_negative));
        assert!(every(&[-1, -2], is_negative));
    }

    #[test]
    fn test_square_saturates() {
        assert_eq!(square(&-3), 9);
        assert_eq!(square(&i64::MIN), i64::MAX);
    }
}
