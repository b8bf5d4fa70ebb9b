// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_PASSWORD_LEN;

/// A single password strength requirement
///
/// Variants are declared in the order they are checked and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];

    /// Human-readable requirement, suitable for listing to the user
    pub fn description(self) -> &'static str {
        match self {
            // Must match MIN_PASSWORD_LEN
            PasswordRule::MinLength => "At least 8 characters long",
            PasswordRule::Uppercase => "At least one uppercase letter",
            PasswordRule::Lowercase => "At least one lowercase letter",
            PasswordRule::Digit => "At least one number",
            PasswordRule::Special => "At least one special character",
        }
    }

    /// Whether `candidate` satisfies this rule on its own
    pub fn is_satisfied_by(self, candidate: &str) -> bool {
        match self {
            PasswordRule::MinLength => candidate.chars().count() >= MIN_PASSWORD_LEN,
            PasswordRule::Uppercase => candidate.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => candidate.chars().any(|c| c.is_ascii_lowercase()),
            // Decimal 0-9 only; `½`, `²` and `Ⅻ` are not digits
            PasswordRule::Digit => candidate.chars().any(|c| c.is_ascii_digit()),
            // Anything outside A-Z, a-z, 0-9 counts, whitespace included
            PasswordRule::Special => candidate.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
