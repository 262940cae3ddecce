use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use tabled::Tabled;
use xpload_config::ResolvedConfig;
use xpload_fetch::{CatalogEntry, Component, Fetcher, HttpClient};

use crate::cli::Exit;
use crate::cli::table::Formatter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    Tags,
    Domains,
}

impl From<Listing> for Component {
    fn from(listing: Listing) -> Self {
        match listing {
            Listing::Tags => Component::Tags,
            Listing::Domains => Component::Domains,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct ShowArg {
    /// Which entries to list
    pub component: Listing,
    /// Only the entry with this id
    #[arg(long)]
    pub id: Option<i64>,
}

#[derive(Tabled)]
struct EntryRow {
    name: String,
    id: i64,
}

impl From<CatalogEntry> for EntryRow {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            name: entry.name.unwrap_or_default(),
            id: entry.id,
        }
    }
}

pub fn show<C: HttpClient>(
    arg: &ShowArg,
    fetcher: &Fetcher<C>,
    cfg: &ResolvedConfig,
    dump: bool,
    out: &mut impl Write,
) -> Result<Exit> {
    let entries = fetcher.list_entries(arg.component.into(), arg.id, cfg);

    if dump {
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else if !entries.is_empty() {
        let rows = entries.into_iter().map(EntryRow::from);
        let table = Formatter { hide_columns: true }.build(rows);
        writeln!(out, "{table}")?;
    }
    Ok(Exit::Success)
}
