use std::io::Write;

use anyhow::Result;
use clap::Args;
use tracing::warn;
use xpload_config::ResolvedConfig;
use xpload_fetch::{Fetcher, HttpClient, PayloadRequest, locate_payload};

use crate::cli::{Exit, non_empty};

#[derive(Args, Clone, Debug)]
pub struct FetchArg {
    /// Tag of the payload file
    #[arg(value_parser = non_empty)]
    pub tag: String,
    /// Domain of the payload file
    #[arg(short, long, value_parser = non_empty)]
    pub domain: Option<String>,
    /// Validity timestamp the payload must cover
    #[arg(short, long, default_value_t = i64::MAX as u64)]
    pub start: u64,
}

impl FetchArg {
    pub fn request(&self) -> PayloadRequest {
        let request = PayloadRequest::new(&self.tag, self.start);
        match &self.domain {
            Some(domain) => request.with_domain(domain),
            None => request,
        }
    }
}

/// Prints the payload files the catalog points at that exist under one
/// of the storage prefixes, or the raw records with `dump`.
pub fn fetch<C: HttpClient>(
    arg: &FetchArg,
    fetcher: &Fetcher<C>,
    cfg: &ResolvedConfig,
    dump: bool,
    out: &mut impl Write,
) -> Result<Exit> {
    let records = match fetcher.try_records(&arg.request(), cfg) {
        Ok(response) => response.records,
        Err(e) => {
            warn!(tag = %arg.tag, start = arg.start, error = %e, "catalog query failed");
            Vec::new()
        }
    };

    if dump {
        writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(Exit::Success);
    }

    let paths: Vec<_> = records
        .iter()
        .flat_map(|record| &record.payload_iov)
        .filter_map(|iov| locate_payload(&iov.payload_url, cfg.storage_prefixes.as_slice()))
        .collect();
    if paths.is_empty() {
        eprintln!("Error: no payload file was found in any prefix");
        return Ok(Exit::NoPayload);
    }
    for path in paths {
        writeln!(out, "{}", path.display())?;
    }
    Ok(Exit::Success)
}
