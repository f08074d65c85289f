use rand::Rng;

pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Width of the `designs.code` column; no issued code is ever longer.
pub const MAX_CODE_LENGTH: usize = 24;

/// Uppercase letters and digits without the look-alikes `I`, `O`, `0` and `1`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Produces short, URL-safe design codes.
///
/// Uniqueness is only probabilistic; the store's unique index is what makes a
/// code exactly unique, and callers regenerate on collision.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    length: usize,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> String {
        (0..self.length)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }

    /// Canonical (uppercase) form of a user-supplied code, or `None` if it could
    /// never have been issued.
    ///
    /// The configured length only shapes new codes. Lookups accept any length up
    /// to the column width so codes issued under an earlier `CODE_LENGTH` resolve.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let code = raw.trim().to_ascii_uppercase();

        if !(1..=MAX_CODE_LENGTH).contains(&code.len())
            || !code.bytes().all(|b| CODE_ALPHABET.contains(&b))
        {
            return None;
        }

        Some(code)
    }
}
