//! Task id generation
//!
//! Ids are the first [`ID_LENGTH`] hex characters of a SHA-256 digest over
//! the title, a random nonce and an attempt counter. The generator yields up
//! to [`MAX_ATTEMPTS`] candidates; the caller rejects ones already in use.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Number of hex characters in a generated id (48 bits)
pub const ID_LENGTH: usize = 12;

/// Candidates offered before giving up
pub const MAX_ATTEMPTS: u32 = 8;

/// Produces candidate ids for a single task
#[derive(Debug)]
pub struct IdGenerator {
    title: String,
    nonce: u64,
    attempt: u32,
}

impl IdGenerator {
    /// Create a generator seeded with a fresh random nonce
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            nonce: rand::rng().random(),
            attempt: 0,
        }
    }

    /// Next candidate id, or `None` once [`MAX_ATTEMPTS`] have been handed out
    pub fn next_id(&mut self) -> Option<String> {
        if self.attempt >= MAX_ATTEMPTS {
            return None;
        }

        let mut hasher = Sha256::new();
        hasher.update(self.title.as_bytes());
        hasher.update(self.nonce.to_le_bytes());
        hasher.update(self.attempt.to_le_bytes());
        let digest = hasher.finalize();
        self.attempt += 1;

        let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        Some(hex[..ID_LENGTH].to_string())
    }
}
