//! I/O for catalog queries: the HTTP client seam, the blocking
//! [`Fetcher`] and local payload lookup.

mod fetcher;
mod http;
mod locate;

pub use fetcher::Fetcher;
pub use http::{BoxStream, HttpClient, HttpResponse};
pub use locate::locate_payload;

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
