use rand::Rng;

use crate::domain::secret::{SECRET_ALPHABET, SECRET_LENGTH};
use crate::ports::SecretGenerator;

/// Secret generator backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecretGenerator;

impl RandomSecretGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SecretGenerator for RandomSecretGenerator {
    fn generate_secret(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..SECRET_LENGTH)
            .map(|_| SECRET_ALPHABET[rng.gen_range(0..SECRET_ALPHABET.len())] as char)
            .collect()
    }
}
