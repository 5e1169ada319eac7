//! Tracking token generation.

use chrono::Utc;
use sha2::{Digest, Sha256};

/// Length of a tracking token in hex characters.
pub const TOKEN_LENGTH: usize = 16;

/// Generates a tracking token candidate for `email`.
///
/// Hashes the email together with 8 random bytes and a nanosecond timestamp
/// and keeps the first [`TOKEN_LENGTH`] hex characters. Candidates are not
/// guaranteed unique; the store rejects collisions at insert time.
///
/// # Examples
///
/// ```ignore
/// let token = generate_token("a@b.com");
/// assert_eq!(token.len(), 16);
/// assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_token(email: &str) -> String {
    let salt: [u8; 8] = rand::random();
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();

    let seed = format!("{}_{}_{}", email, hex::encode(salt), nanos);
    let digest = Sha256::digest(seed.as_bytes());

    let mut token = hex::encode(digest);
    token.truncate(TOKEN_LENGTH);
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_shape() {
        let token = generate_token("a@b.com");

        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_tokens_differ_for_same_email() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_token("a@b.com")).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
