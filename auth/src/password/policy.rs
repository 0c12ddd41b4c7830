use super::errors::WeakPassword;

/// Password strength policy.
///
/// Rules are evaluated in a fixed order and the first failing rule wins:
/// length, uppercase, lowercase, digit.
pub struct PasswordPolicy;

impl PasswordPolicy {
    const MIN_LENGTH: usize = 8;

    /// Create a new policy with the default rule set.
    pub fn new() -> Self {
        Self
    }

    /// Validate a candidate password against the policy.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to check
    ///
    /// # Returns
    /// Unit if the password is acceptable
    ///
    /// # Errors
    /// * `WeakPassword` - First rule the password fails
    pub fn validate(&self, password: &str) -> Result<(), WeakPassword> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(WeakPassword::TooShort {
                min: Self::MIN_LENGTH,
            });
        }

        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(WeakPassword::MissingUppercase);
        }

        if !password.chars().any(|c| c.is_lowercase()) {
            return Err(WeakPassword::MissingLowercase);
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(WeakPassword::MissingDigit);
        }

        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_password() {
        let policy = PasswordPolicy::new();
        assert_eq!(policy.validate("Valid123"), Ok(()));
    }

    #[test]
    fn test_rejects_short_password() {
        let policy = PasswordPolicy::new();
        assert_eq!(
            policy.validate("short1A"),
            Err(WeakPassword::TooShort { min: 8 })
        );
    }

    #[test]
    fn test_rejects_missing_uppercase() {
        let policy = PasswordPolicy::new();
        assert_eq!(
            policy.validate("alllowercase1"),
            Err(WeakPassword::MissingUppercase)
        );
    }

    #[test]
    fn test_rejects_missing_lowercase() {
        let policy = PasswordPolicy::new();
        assert_eq!(
            policy.validate("ALLUPPER1"),
            Err(WeakPassword::MissingLowercase)
        );
    }

    #[test]
    fn test_rejects_missing_digit() {
        let policy = PasswordPolicy::new();
        assert_eq!(
            policy.validate("NoDigitsHere"),
            Err(WeakPassword::MissingDigit)
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let policy = PasswordPolicy::new();
        // Too short and missing everything else; length is checked first
        assert_eq!(policy.validate(""), Err(WeakPassword::TooShort { min: 8 }));
    }
}
