use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use xpload_config::DbConfig;
use xpload_fetch::{Fetcher, HttpClient};

use crate::cli::Exit;
use crate::cli::config::{self, ConfigArg};
use crate::cli::fetch::{self, FetchArg};
use crate::cli::show::{self, ShowArg};

#[derive(Clone, Debug, Parser)]
#[command(name = "xpload", version = env!("CARGO_PKG_VERSION"), about = "Query payload entries in the conditions catalog", long_about = None, propagate_version = true)]
pub struct App {
    /// Profile name, or a path to a profile file
    #[arg(short, long, default_value = "")]
    pub config: String,
    /// Dump responses as JSON instead of pretty printing them
    #[arg(short, long)]
    pub dump: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "cfg", name = "config", about = "Print the profile or one of its fields")]
    Config(ConfigArg),
    #[command(alias = "s", name = "show", about = "List catalog entries")]
    Show(ShowArg),
    #[command(alias = "f", name = "fetch", about = "Fetch payload files for a tag")]
    Fetch(FetchArg),
}

impl App {
    pub fn run<C: HttpClient>(
        &self,
        db: &DbConfig,
        fetcher: &Fetcher<C>,
        out: &mut impl Write,
    ) -> Result<Exit> {
        match &self.cmd {
            Commands::Config(arg) => config::config(arg, db, out),
            Commands::Show(arg) => show::show(arg, fetcher, &db.resolve()?, self.dump, out),
            Commands::Fetch(arg) => fetch::fetch(arg, fetcher, &db.resolve()?, self.dump, out),
        }
    }
}
