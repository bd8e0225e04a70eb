use demo::{add, try_add, DemoError};
use proptest::prelude::*;

#[test]
fn test_add_adds_two_numbers() {
    assert_eq!(add(1, 2), 3);
    assert_eq!(add(0, 0), 0);
    assert_eq!(add(10, 20), 30);
}

#[test]
fn test_overflow_policy() {
    assert_eq!(add(i32::MAX, 1), i32::MIN);
    assert!(matches!(try_add(i32::MAX, 1), Err(DemoError::Overflow { .. })));
}

proptest! {
    #[test]
    fn add_matches_reference_arithmetic(a in any::<i32>(), b in any::<i32>()) {
        let expected = i64::from(a) + i64::from(b);
        if let Ok(sum) = i32::try_from(expected) {
            prop_assert_eq!(add(a, b), sum);
            prop_assert_eq!(try_add(a, b).unwrap(), sum);
        } else {
            prop_assert!(try_add(a, b).is_err());
        }
    }

    #[test]
    fn add_is_commutative(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(add(a, b), add(b, a));
    }

    #[test]
    fn zero_is_identity(a in any::<i32>()) {
        prop_assert_eq!(add(a, 0), a);
        prop_assert_eq!(add(0, a), a);
    }

    #[test]
    fn add_is_associative(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        prop_assert_eq!(add(add(a, b), c), add(a, add(b, c)));
    }
}
