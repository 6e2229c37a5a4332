use rand::{distributions::Alphanumeric, Rng};

/// Creates a random alphanumeric secret, used as the JWT signing secret when
/// none is configured.
pub fn create_random_secret(secret_len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_alphanumeric_secrets_of_given_length() {
        let secret = create_random_secret(32);
        assert_eq!(secret.len(), 32);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(secret, create_random_secret(32));
        assert!(create_random_secret(0).is_empty());
    }
}
