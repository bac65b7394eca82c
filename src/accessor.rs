// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Accessor-name generation for embedded widget data.
//!
//! Every embed instance publishes its serialized data under a dedicated
//! global variable so that multiple buttons can coexist on one page. The
//! name is built from a fixed prefix and a short random hexadecimal token.
//! Generation never fails: when the strong randomness source is unavailable
//! the generator silently degrades to a weaker time-and-counter mix, which
//! only reduces uniqueness, not correctness.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH}
};

use ring::rand::{SecureRandom, SystemRandom};

/// Prefix of the global accessor variable read by the widget application.
pub const ACCESSOR_PREFIX: &str = "podcastData";

/// Number of random bytes backing a token; rendered as twice as many hex
/// digits.
const TOKEN_BYTES: usize = 4;

/// Source of per-embed hexadecimal tokens.
///
/// The renderer takes the generator as an injected collaborator so tests can
/// substitute a deterministic implementation.
pub trait AccessorIdGenerator: Send + Sync {
    /// Produces a fresh lowercase hexadecimal token.
    fn hex_token(&self) -> String;
}

/// Default token source backed by the operating system CSPRNG.
///
/// # Examples
///
/// ```
/// use sbtn::{AccessorIdGenerator, SystemIdGenerator};
///
/// let generator = SystemIdGenerator::new();
/// let token = generator.hex_token();
/// assert_eq!(token.len(), 8);
/// ```
#[derive(Debug)]
pub struct SystemIdGenerator {
    rng:     SystemRandom,
    counter: AtomicU64
}

impl SystemIdGenerator {
    /// Creates a generator drawing from [`SystemRandom`].
    pub fn new() -> Self {
        Self {
            rng:     SystemRandom::new(),
            counter: AtomicU64::new(0x9e37_79b9)
        }
    }

    fn weak_token(&self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos() as u64 ^ elapsed.as_secs())
            .unwrap_or(0);
        let tick = self.counter.fetch_add(0x9e37_79b9_7f4a_7c15, Ordering::Relaxed);
        let mixed = (nanos ^ tick).wrapping_mul(0xff51_afd7_ed55_8ccd);

        format!("{:08x}", (mixed >> 32) as u32)
    }
}

impl Default for SystemIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessorIdGenerator for SystemIdGenerator {
    fn hex_token(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        match self.rng.fill(&mut bytes) {
            Ok(()) => bytes.iter().map(|byte| format!("{byte:02x}")).collect(),
            Err(_) => self.weak_token()
        }
    }
}

/// Builds the global accessor name for a generated token.
///
/// # Examples
///
/// ```
/// use sbtn::accessor_name;
///
/// assert_eq!(accessor_name("00c0ffee"), "podcastData00c0ffee");
/// ```
pub fn accessor_name(token: &str) -> String {
    format!("{ACCESSOR_PREFIX}{token}")
}
