use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};
use xpload_config::ResolvedConfig;
use xpload_fetch::{Fetcher, HttpClient};

use crate::clock::{Clock, SystemClock};
use crate::error::HarnessError;
use crate::partition::partition;
use crate::record::{Outcome, RunReport, VerificationRecord};
use crate::token::{Token, TokenRanges, generate_token};

pub const DEFAULT_SPAN: u64 = 100;
pub const DEFAULT_SEED: u64 = 12345;

/// Shape of one verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessParams {
    /// Total seconds the calls are spread over.
    pub span: u64,
    pub call_count: usize,
    pub seed: u64,
    /// Draw a single token and query it on every call.
    pub reuse_token: bool,
}

impl HarnessParams {
    /// `span` with one call per started ten seconds.
    pub fn new(span: u64) -> Self {
        Self {
            span,
            call_count: span.div_ceil(10) as usize,
            seed: DEFAULT_SEED,
            reuse_token: false,
        }
    }

    pub fn call_count(mut self, call_count: usize) -> Self {
        self.call_count = call_count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn reuse_token(mut self, reuse_token: bool) -> Self {
        self.reuse_token = reuse_token;
        self
    }
}

impl Default for HarnessParams {
    fn default() -> Self {
        Self::new(DEFAULT_SPAN)
    }
}

/// Paces fetches over a span and checks each against its token.
pub struct Harness<'a, C: HttpClient, K: Clock = SystemClock> {
    fetcher: &'a Fetcher<C>,
    clock: K,
    ranges: TokenRanges,
}

impl<'a, C: HttpClient> Harness<'a, C> {
    pub fn new(fetcher: &'a Fetcher<C>) -> Self {
        Self {
            fetcher,
            clock: SystemClock,
            ranges: TokenRanges::default(),
        }
    }
}

impl<'a, C: HttpClient, K: Clock> Harness<'a, C, K> {
    pub fn with_clock<K2: Clock>(self, clock: K2) -> Harness<'a, C, K2> {
        Harness {
            fetcher: self.fetcher,
            clock,
            ranges: self.ranges,
        }
    }

    pub fn with_ranges(mut self, ranges: TokenRanges) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn run(
        &self,
        params: &HarnessParams,
        cfg: &ResolvedConfig,
    ) -> Result<RunReport, HarnessError> {
        self.run_with(params, cfg, |_| {})
    }

    /// Runs the plan, handing each record to `on_record` as soon as it is
    /// complete.
    ///
    /// Mismatches never stop the run. Only an unusable plan or token
    /// ranges are errors, and both are detected before the first call.
    pub fn run_with<F>(
        &self,
        params: &HarnessParams,
        cfg: &ResolvedConfig,
        mut on_record: F,
    ) -> Result<RunReport, HarnessError>
    where
        F: FnMut(&VerificationRecord),
    {
        self.ranges.validate()?;

        let mut rng = StdRng::seed_from_u64(params.seed);
        let plan = partition(params.span, params.call_count, &mut rng)?;
        let sum = plan.sum();
        if sum != params.span {
            return Err(HarnessError::Coverage {
                span: params.span,
                sum,
            });
        }
        info!(
            span = params.span,
            calls = plan.len(),
            seed = params.seed,
            reuse_token = params.reuse_token,
            "starting verification run"
        );

        let mut records = Vec::with_capacity(plan.len());
        let mut current: Option<Token> = None;
        for wait in plan {
            self.clock.sleep(Duration::from_secs(wait));

            let token = match current.take() {
                Some(token) if params.reuse_token => token,
                _ => generate_token(&mut rng, &self.ranges)?,
            };
            let record = self.verify(&token, wait, cfg);
            on_record(&record);
            records.push(record);
            current = Some(token);
        }

        let report = RunReport { records };
        info!(
            calls = report.records.len(),
            failures = report.failures(),
            "verification run finished"
        );
        Ok(report)
    }

    fn verify(&self, token: &Token, wait: u64, cfg: &ResolvedConfig) -> VerificationRecord {
        let started_at = self.clock.now();
        let start = Instant::now();
        let result = self.fetcher.fetch(&token.request(), cfg);
        let elapsed = start.elapsed();

        let expected = cfg.payload_path(&token.expected_payload);
        let outcome = Outcome::classify(&result, &expected);
        match outcome {
            Outcome::Ok => debug!(tag = %token.tag, path = %expected, "verified"),
            Outcome::SizeMismatch => warn!(
                tag = %token.tag,
                domain = %token.domain,
                timestamp = token.timestamp,
                count = result.paths.len(),
                "expected a single payload"
            ),
            Outcome::PathMismatch => warn!(
                tag = %token.tag,
                domain = %token.domain,
                timestamp = token.timestamp,
                expected = %expected,
                got = result.single_path().unwrap_or_default(),
                "payload path mismatch"
            ),
        }

        let path = if outcome.is_ok() {
            expected
        } else {
            String::new()
        };
        VerificationRecord {
            started_at,
            elapsed,
            wait,
            byte_count: result.byte_count,
            response_code: result.response_code,
            path,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = HarnessParams::default();
        assert_eq!(params.span, 100);
        assert_eq!(params.call_count, 10);
        assert_eq!(params.seed, 12345);
        assert!(!params.reuse_token);
    }

    #[test]
    fn call_count_rounds_up() {
        assert_eq!(HarnessParams::new(1).call_count, 1);
        assert_eq!(HarnessParams::new(10).call_count, 1);
        assert_eq!(HarnessParams::new(11).call_count, 2);
        assert_eq!(HarnessParams::new(0).call_count, 0);
    }
}
