// src/core/validator.rs
//! Password strength rules: pure, no I/O

use std::fmt;

use thiserror::Error;

use crate::enums::PasswordRule;

/// Every rule a candidate password failed, in check order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    failed: Vec<PasswordRule>,
}

impl ValidationError {
    pub fn failed_rules(&self) -> &[PasswordRule] {
        &self.failed
    }

    pub fn has_failed(&self, rule: PasswordRule) -> bool {
        self.failed.contains(&rule)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.failed.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Check `candidate` against all rules, reporting each one that fails
pub fn validate(candidate: &str) -> Result<(), ValidationError> {
    let failed: Vec<PasswordRule> = PasswordRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied_by(candidate))
        .collect();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { failed })
    }
}
