use std::io;
use std::process::ExitCode;

use clap::Parser;
use xpload::cli::Exit;
use xpload::cli::app::App;
use xpload::logging;
use xpload_config::ProfileSource;
use xpload_fetch::Fetcher;

fn main() -> ExitCode {
    let app = App::parse();

    let db = match ProfileSource::from_env().load(&app.config) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error: {e}");
            return Exit::Config.into();
        }
    };
    logging::init(db.verbosity);

    let result = Fetcher::reqwest()
        .map_err(anyhow::Error::from)
        .and_then(|fetcher| app.run(&db, &fetcher, &mut io::stdout().lock()));

    match result {
        Ok(exit) => exit.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            Exit::Failure.into()
        }
    }
}
