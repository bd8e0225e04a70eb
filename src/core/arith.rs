use crate::utils::error::{DemoError, Result};

/// Adds two 32-bit integers.
///
/// Overflow wraps around (two's complement) in every build profile, so this
/// never panics. Use [`try_add`] to detect overflow instead.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Checked addition: fails with [`DemoError::Overflow`] when the sum does not fit.
pub fn try_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or(DemoError::Overflow { a, b })
}
