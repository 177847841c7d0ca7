use std::ops::Add;

/// Returns `a + b`.
#[inline]
pub fn calculate_sum<T: Add<Output = T>>(
    a: T,
    b: T,
) -> T {
    a + b
}

/// Like [`calculate_sum`] but yields `None` instead of overflowing.
pub fn checked_sum(
    a: i64,
    b: i64,
) -> Option<i64> {
    a.checked_add(b)
}
