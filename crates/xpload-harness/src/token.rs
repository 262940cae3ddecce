use std::ops::RangeInclusive;

use rand::Rng;
use xpload_fetch::PayloadRequest;

use crate::error::TokenError;

/// Inclusive bounds the token fields are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRanges {
    pub tag: RangeInclusive<u64>,
    pub domain: RangeInclusive<u64>,
    pub timestamp: RangeInclusive<u64>,
}

impl Default for TokenRanges {
    fn default() -> Self {
        Self {
            tag: 17..=19,
            domain: 5..=10,
            timestamp: 300..=301,
        }
    }
}

impl TokenRanges {
    pub fn validate(&self) -> Result<(), TokenError> {
        for (name, range) in [
            ("tag", &self.tag),
            ("domain", &self.domain),
            ("timestamp", &self.timestamp),
        ] {
            if range.is_empty() {
                return Err(TokenError::EmptyRange {
                    name,
                    lo: *range.start(),
                    hi: *range.end(),
                });
            }
        }
        Ok(())
    }
}

/// A synthetic query and the payload a well-behaved catalog answers it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub timestamp: u64,
    pub tag: String,
    pub domain: String,
    pub expected_payload: String,
}

impl Token {
    /// Builds the token for the given indices using the fixture naming
    /// convention `Payload_<timestamp>_Commit_<tag>_Domain_<domain>`.
    pub fn new(timestamp: u64, tag: u64, domain: u64) -> Self {
        Self {
            timestamp,
            tag: format!("Tag_{tag}"),
            domain: format!("Domain_{domain}"),
            expected_payload: format!("Payload_{timestamp}_Commit_{tag}_Domain_{domain}"),
        }
    }

    pub fn request(&self) -> PayloadRequest {
        PayloadRequest::new(&self.tag, self.timestamp).with_domain(&self.domain)
    }
}

/// Draws a token from `rng`: timestamp first, then tag, then domain.
///
/// The result depends only on the generator state, so a seeded generator
/// replays the same sequence of tokens.
pub fn generate_token<R: Rng + ?Sized>(
    rng: &mut R,
    ranges: &TokenRanges,
) -> Result<Token, TokenError> {
    ranges.validate()?;
    let timestamp = rng.gen_range(ranges.timestamp.clone());
    let tag = rng.gen_range(ranges.tag.clone());
    let domain = rng.gen_range(ranges.domain.clone());
    Ok(Token::new(timestamp, tag, domain))
}
