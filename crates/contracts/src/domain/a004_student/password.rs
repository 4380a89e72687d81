use rand::Rng;

pub const PASSWORD_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#";

pub const PASSWORD_LENGTH: usize = 10;

/// Random login password from `[a-zA-Z0-9@#]`
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..PASSWORD_LENGTH)
        .map(|_| PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_password_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let password = generate_password(&mut rng);
            assert_eq!(password.len(), PASSWORD_LENGTH);
            assert!(password.bytes().all(|b| PASSWORD_CHARSET.contains(&b)));
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = generate_password(&mut StdRng::seed_from_u64(42));
        let b = generate_password(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
