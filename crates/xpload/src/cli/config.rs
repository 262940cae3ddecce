use std::io::Write;

use anyhow::Result;
use clap::Args;
use xpload_config::DbConfig;

use crate::cli::{Exit, non_empty};

#[derive(Args, Clone, Debug)]
pub struct ConfigArg {
    /// Path to a field, e.g. `path 0`
    #[arg(value_parser = non_empty)]
    pub field: Vec<String>,
}

pub fn config(arg: &ConfigArg, db: &DbConfig, out: &mut impl Write) -> Result<Exit> {
    let value = db.field(&arg.field);
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(Exit::Success)
}
