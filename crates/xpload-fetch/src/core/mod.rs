//! Pure transformations for catalog queries.
//!
//! Nothing here performs I/O: URLs are built, response bodies decoded
//! and payload paths resolved from values alone.

mod decode;
mod status;
mod url;

pub use decode::{decode_entries, decode_records, retain_domain, resolve_paths};
pub use status::is_http_error;
pub use url::{catalog_url, entries_url};
