use std::cell::RefCell;
use std::collections::VecDeque;

use crate::ports::SecretGenerator;

/// Secret generator returning queued values, then a constant fallback.
#[derive(Debug)]
pub struct FixedSecretGenerator {
    queued: RefCell<VecDeque<String>>,
    fallback: String,
}

impl FixedSecretGenerator {
    pub fn new<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queued: RefCell::new(secrets.into_iter().map(Into::into).collect()),
            fallback: "zzzzzzzz".to_string(),
        }
    }
}

impl SecretGenerator for FixedSecretGenerator {
    fn generate_secret(&self) -> String {
        self.queued.borrow_mut().pop_front().unwrap_or_else(|| self.fallback.clone())
    }
}
