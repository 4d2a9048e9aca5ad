use crate::constants::{MIN_PASSWORD_LENGTH, STRONG_PASSWORD_LENGTH};
use crate::domain::validation::form_length;
use crate::entities::strength::StrengthResult;

/// Scores a password for the live strength indicator.
///
/// Six checks add one point each: at least 8 and at least 12 UTF-16 code
/// units, an ASCII lowercase letter, an ASCII uppercase letter, an ASCII
/// digit, and anything else (punctuation, symbols, non-ASCII). The empty
/// password gets [`StrengthResult::EMPTY`] so the host can hide the bar.
pub fn score(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::EMPTY;
    }

    let length = form_length(password);
    let checks = [
        length >= MIN_PASSWORD_LENGTH,
        length >= STRONG_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];

    let points = checks.iter().filter(|passed| **passed).count() as u8;
    StrengthResult::from_score(points)
}
