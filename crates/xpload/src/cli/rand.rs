use std::io::Write;

use anyhow::Result;
use clap::Parser;
use xpload_config::ResolvedConfig;
use xpload_fetch::HttpClient;
use xpload_harness::{
    Clock, DEFAULT_SEED, DEFAULT_SPAN, Harness, HarnessParams, RecordWriter, RunReport,
};

/// Spreads randomized catalog queries over a time span and checks every
/// answer against the payload it should name.
#[derive(Clone, Debug, Parser)]
#[command(name = "xpload-rand", version = env!("CARGO_PKG_VERSION"), long_about = None)]
pub struct RandArgs {
    /// Seconds the calls are spread over
    #[arg(default_value_t = DEFAULT_SPAN)]
    pub span: u64,
    /// Number of calls [default: one per started ten seconds]
    pub call_count: Option<usize>,
    /// Seed for waits and queries
    #[arg(default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    /// Non-zero queries the same token on every call
    #[arg(default_value_t = 0)]
    pub reuse_token: i64,
}

impl RandArgs {
    pub fn params(&self) -> HarnessParams {
        let params = HarnessParams::new(self.span)
            .seed(self.seed)
            .reuse_token(self.reuse_token != 0);
        match self.call_count {
            Some(n) => params.call_count(n),
            None => params,
        }
    }

    /// Runs the harness, writing one line per call at `cfg.verbosity`.
    pub fn run<C: HttpClient, K: Clock>(
        &self,
        harness: &Harness<'_, C, K>,
        cfg: &ResolvedConfig,
        out: impl Write,
    ) -> Result<RunReport> {
        let mut writer = RecordWriter::new(out, cfg.verbosity);
        writer.header()?;

        let mut write_error = None;
        let report = harness.run_with(&self.params(), cfg, |record| {
            if write_error.is_none() {
                write_error = writer.write(record).err();
            }
        })?;

        if let Some(e) = write_error {
            return Err(e.into());
        }
        writer.flush()?;
        Ok(report)
    }
}
