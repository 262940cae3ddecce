use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use xpload::cli::Exit;
use xpload::cli::rand::RandArgs;
use xpload::logging;
use xpload_config::ResolvedConfig;
use xpload_fetch::Fetcher;
use xpload_harness::Harness;

fn main() -> ExitCode {
    let args = RandArgs::parse();

    let cfg = match ResolvedConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            return Exit::Config.into();
        }
    };
    logging::init(cfg.verbosity);

    let fetcher = match Fetcher::reqwest() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("Error: {e}");
            return Exit::Failure.into();
        }
    };

    match args.run(&Harness::new(&fetcher), &cfg, io::stdout().lock()) {
        Ok(report) if report.is_success() => Exit::Success.into(),
        Ok(report) => {
            error!(
                failures = report.failures(),
                calls = report.records.len(),
                "verification failed"
            );
            Exit::Failure.into()
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            Exit::Failure.into()
        }
    }
}
