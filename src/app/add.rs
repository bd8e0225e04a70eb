use crate::core::arith::{add, try_add};
use crate::utils::error::Result;

/// `demo add`: wrapping by default, checked when asked.
pub fn evaluate(a: i32, b: i32, checked: bool) -> Result<i32> {
    if checked {
        try_add(a, b)
    } else {
        Ok(add(a, b))
    }
}
