// src/generators/password.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

use crate::models::{CharsetConfig, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be included")]
    NoCharacterClass,

    #[error("Password length must be between {min} and {max} characters (got {length})")]
    InvalidLength { length: usize, min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// How a random `u32` is mapped onto the pooled alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sampling {
    /// `value % pool_len`. Slightly biased when the pool size does not divide 2^32.
    #[default]
    Modulo,
    /// Redraw values above the largest multiple of `pool_len`, strictly uniform.
    Rejection,
}

pub struct PasswordGenerator {
    sampling: Sampling,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator { sampling: Sampling::default() }
    }

    pub fn with_sampling(sampling: Sampling) -> Self {
        PasswordGenerator { sampling }
    }

    pub fn generate_password(&self, length: usize, charset: &CharsetConfig) -> Result<String> {
        self.generate_with(length, charset, &mut OsRng)
    }

    /// Generate from an explicit random source. Configuration is validated
    /// before the first draw.
    pub fn generate_with<R>(&self, length: usize, charset: &CharsetConfig, rng: &mut R) -> Result<String>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if !charset.any_enabled() {
            return Err(GeneratorError::NoCharacterClass);
        }

        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(GeneratorError::InvalidLength {
                length,
                min: MIN_PASSWORD_LENGTH,
                max: MAX_PASSWORD_LENGTH,
            });
        }

        let pool = charset.pooled_alphabet();
        let pool_len = pool.len() as u32;

        let password = (0..length)
            .map(|_| pool[self.draw_index(pool_len, rng) as usize])
            .collect();

        Ok(password)
    }

    fn draw_index<R>(&self, pool_len: u32, rng: &mut R) -> u32
    where
        R: RngCore + ?Sized,
    {
        match self.sampling {
            Sampling::Modulo => rng.next_u32() % pool_len,
            Sampling::Rejection => {
                // Largest multiple of pool_len representable in u32 space
                let zone = u32::MAX - (u32::MAX % pool_len + 1) % pool_len;
                loop {
                    let value = rng.next_u32();
                    if value <= zone {
                        return value % pool_len;
                    }
                }
            }
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CharacterClass, LOWERCASE, NUMBERS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Replays a fixed sequence of u32 values and counts draws
    struct ScriptedRng {
        values: Vec<u32>,
        draws: usize,
    }

    impl ScriptedRng {
        fn new(values: Vec<u32>) -> Self {
            Self { values, draws: 0 }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.draws % self.values.len()];
            self.draws += 1;
            value
        }

        fn next_u64(&mut self) -> u64 {
            self.next_u32() as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest.iter_mut() {
                *byte = self.next_u32() as u8;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ScriptedRng {}

    fn only(class: CharacterClass) -> CharsetConfig {
        CharsetConfig {
            uppercase: class == CharacterClass::Uppercase,
            lowercase: class == CharacterClass::Lowercase,
            numbers: class == CharacterClass::Numbers,
            symbols: class == CharacterClass::Symbols,
        }
    }

    #[test]
    fn output_has_exact_length_for_every_valid_length() {
        let generator = PasswordGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        for length in MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH {
            let password = generator
                .generate_with(length, &CharsetConfig::default(), &mut rng)
                .unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn characters_come_only_from_enabled_classes() {
        let generator = PasswordGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        for class in CharacterClass::ALL {
            let config = only(class);
            for _ in 0..50 {
                let password = generator.generate_with(64, &config, &mut rng).unwrap();
                assert!(
                    password.chars().all(|c| class.alphabet().contains(c)),
                    "{:?} produced {}",
                    class,
                    password
                );
            }
        }

        let config = CharsetConfig {
            uppercase: false,
            lowercase: true,
            numbers: true,
            symbols: false,
        };
        let password = generator.generate_with(64, &config, &mut rng).unwrap();
        assert!(password.chars().all(|c| LOWERCASE.contains(c) || NUMBERS.contains(c)));
    }

    #[test]
    fn empty_charset_is_rejected_before_any_draw() {
        let generator = PasswordGenerator::new();
        let mut rng = ScriptedRng::new(vec![0]);
        let config = CharsetConfig {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };

        let result = generator.generate_with(16, &config, &mut rng);
        assert_eq!(result, Err(GeneratorError::NoCharacterClass));
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn length_outside_range_is_rejected() {
        let generator = PasswordGenerator::new();
        let mut rng = ScriptedRng::new(vec![0]);

        for length in [0, 7, 65, 1000] {
            let err = generator
                .generate_with(length, &CharsetConfig::default(), &mut rng)
                .unwrap_err();
            assert!(matches!(err, GeneratorError::InvalidLength { .. }));
        }
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn modulo_sampling_draws_once_per_character() {
        let generator = PasswordGenerator::new();
        // Numbers only: pool of 10, so 13 % 10 = 3, 20 % 10 = 0
        let mut rng = ScriptedRng::new(vec![13, 20]);
        let password = generator
            .generate_with(8, &only(CharacterClass::Numbers), &mut rng)
            .unwrap();
        assert_eq!(password, "30303030");
        assert_eq!(rng.draws, 8);
    }

    #[test]
    fn rejection_sampling_redraws_biased_values() {
        let generator = PasswordGenerator::with_sampling(Sampling::Rejection);
        // u32::MAX sits in the biased tail for a pool of 10 and must be redrawn
        let mut rng = ScriptedRng::new(vec![u32::MAX, 4]);
        let password = generator
            .generate_with(8, &only(CharacterClass::Numbers), &mut rng)
            .unwrap();
        assert_eq!(password, "44444444");
        assert_eq!(rng.draws, 16);
    }

    #[test]
    fn os_rng_generation_succeeds() {
        let password = PasswordGenerator::new()
            .generate_password(20, &CharsetConfig::default())
            .unwrap();
        assert_eq!(password.len(), 20);
    }
}
