//! Null-safe equality and default value selection.

/// `value` if present, otherwise `fallback`. No coercion between the two.
pub fn nvl<T>(value: Option<T>, fallback: T) -> T {
    value.unwrap_or(fallback)
}

/// Null-safe equality over optional references.
///
/// Absent equals absent; an absent and a present value are never equal.
/// Identical references compare equal without consulting `PartialEq`.
pub fn equals<T>(first: Option<&T>, second: Option<&T>) -> bool
where
    T: PartialEq + ?Sized,
{
    match (first, second) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nvl_absent_takes_fallback() {
        assert_eq!(nvl(None, 42), 42);
        assert_eq!(nvl(None, "default"), "default");
    }

    #[test]
    fn test_nvl_present_wins() {
        assert_eq!(nvl(Some(7), 42), 7);
        assert_eq!(nvl(Some(""), "default"), "");
    }

    #[test]
    fn test_equals_both_absent() {
        assert!(equals::<i32>(None, None));
    }

    #[test]
    fn test_equals_mixed_presence_is_false() {
        let x = 1;
        assert!(!equals(None, Some(&x)));
        assert!(!equals(Some(&x), None));
    }

    #[test]
    fn test_equals_identical_reference() {
        let x = String::from("same");
        assert!(equals(Some(&x), Some(&x)));
    }

    #[test]
    fn test_equals_structurally_equal_values() {
        let a = String::from("value");
        let b = String::from("value");
        assert!(equals(Some(&a), Some(&b)));
        assert!(equals::<str>(Some("left"), Some("left")));
    }

    #[test]
    fn test_equals_different_values() {
        let a = 1;
        let b = 2;
        assert!(!equals(Some(&a), Some(&b)));
    }
}
