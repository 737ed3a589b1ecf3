// Built-in checks
//
// Each check only says whether a single scalar passes. The caller decides
// which field and rule the failure belongs to.

use crate::RuleError;

/// Number of characters in `value`, saturating at `i64::MAX`
pub fn char_len(value: &str) -> i64 {
    i64::try_from(value.chars().count()).unwrap_or(i64::MAX)
}

/// Passes iff `value` has exactly `expected` characters
pub fn length_equals(value: &str, expected: i64) -> Result<(), RuleError> {
    if char_len(value) == expected {
        Ok(())
    } else {
        Err(RuleError::FieldNotValid)
    }
}

/// Passes iff `value >= bound`
pub fn minimum(value: i64, bound: i64) -> Result<(), RuleError> {
    if value >= bound {
        Ok(())
    } else {
        Err(RuleError::FieldNotValid)
    }
}

/// Passes iff `value <= bound`
pub fn maximum(value: i64, bound: i64) -> Result<(), RuleError> {
    if value <= bound {
        Ok(())
    } else {
        Err(RuleError::FieldNotValid)
    }
}

/// Passes iff `value` equals one of `allowed`
pub fn membership<T, U>(value: &T, allowed: &[U]) -> Result<(), RuleError>
where
    T: ?Sized,
    U: PartialEq<T>,
{
    if allowed.iter().any(|candidate| candidate == value) {
        Ok(())
    } else {
        Err(RuleError::FieldNotValid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_characters() {
        assert!(length_equals("hello", 5).is_ok());
        assert!(length_equals("hell", 5).is_err());
        assert!(length_equals("hello!", 5).is_err());
        assert!(length_equals("héllo", 5).is_ok());
        assert!(length_equals("", 0).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(minimum(3, 3).is_ok());
        assert!(minimum(2, 3).is_err());
        assert!(maximum(10, 10).is_ok());
        assert!(maximum(11, 10).is_err());
        assert!(minimum(-5, -10).is_ok());
    }

    #[test]
    fn test_membership_over_strings() {
        let allowed = vec!["admin".to_string(), "user".to_string()];
        assert!(membership("admin", &allowed).is_ok());
        assert!(membership("root", &allowed).is_err());
    }

    #[test]
    fn test_membership_over_integers() {
        assert!(membership(&2i64, &[1i64, 2, 3]).is_ok());
        assert!(membership(&4i64, &[1i64, 2, 3]).is_err());

        let empty: [i64; 0] = [];
        assert_eq!(membership(&0i64, &empty), Err(RuleError::FieldNotValid));
    }
}
