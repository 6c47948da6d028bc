//! Access token generation
//!
//! The token is the sole access key to a document's rendered pages, so it
//! is drawn from the thread-local CSPRNG. At 32 alphanumeric characters
//! (~190 bits) collisions are negligible and no uniqueness check is made
//! against existing tokens; this is an accepted risk, not an oversight.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Token length in characters.
pub const TOKEN_LENGTH: usize = 32;

/// Generate a fresh 32-character alphanumeric access token.
pub fn generate_access_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_32_alphanumeric_chars() {
        let token = generate_access_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn tokens_differ_across_calls() {
        assert_ne!(generate_access_token(), generate_access_token());
    }
}
