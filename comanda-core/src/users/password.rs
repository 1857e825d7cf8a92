//! Password helpers: strength meter and generator

use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::utils::validation::{MAX_PASSWORD_LEN, MIN_PASSWORD_LEN};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%&*?-_+=";

const CLASSES: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];

/// 密码强度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        }
    }
}

/// One point each for: 8+ chars, 12+ chars, mixed case, a digit, a symbol
pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let score = [
        len >= MIN_PASSWORD_LEN,
        len >= 12,
        has_lower && has_upper,
        has_digit,
        has_symbol,
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count();

    match score {
        0..=2 => PasswordStrength::Weak,
        3..=4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

/// Generate a random password of `len` characters (clamped to the allowed
/// range). Contains at least one character of every class. Draws from the
/// OS CSPRNG and shuffles with Fisher-Yates so class positions are uniform.
pub fn generate_password(len: usize) -> String {
    let len = len.clamp(MIN_PASSWORD_LEN, MAX_PASSWORD_LEN);
    let mut rng = OsRng;

    let mut chars: Vec<u8> = CLASSES
        .iter()
        .map(|class| class[rng.gen_range(0..class.len())])
        .collect();

    let pool: Vec<u8> = CLASSES.concat();
    while chars.len() < len {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    chars.shuffle(&mut rng);
    chars.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_levels() {
        assert_eq!(password_strength(""), PasswordStrength::Weak);
        assert_eq!(password_strength("abcdefgh"), PasswordStrength::Weak);
        assert_eq!(password_strength("Abcdefgh1"), PasswordStrength::Medium);
        assert_eq!(password_strength("Feijoada#2024"), PasswordStrength::Strong);
    }

    #[test]
    fn test_generated_password_covers_every_class() {
        for _ in 0..50 {
            let password = generate_password(12);
            assert_eq!(password.len(), 12);
            for class in CLASSES {
                assert!(password.bytes().any(|b| class.contains(&b)), "{password}");
            }
        }
    }

    #[test]
    fn test_generated_length_is_clamped() {
        assert_eq!(generate_password(2).len(), MIN_PASSWORD_LEN);
        assert_eq!(generate_password(1_000).len(), MAX_PASSWORD_LEN);
    }

    #[test]
    fn test_generated_passwords_differ() {
        assert_ne!(generate_password(16), generate_password(16));
    }

    #[test]
    fn test_generated_password_is_strong() {
        assert_eq!(password_strength(&generate_password(12)), PasswordStrength::Strong);
    }
}
