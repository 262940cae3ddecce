use futures_util::StreamExt;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};
use url::Url;
use xpload_config::ResolvedConfig;

use crate::core::{
    catalog_url, decode_entries, decode_records, entries_url, is_http_error, resolve_paths,
    retain_domain,
};
use crate::data::{
    CatalogEntry, CatalogResponse, Component, FetchOptions, FetchResult, PayloadRequest,
};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Blocking catalog client.
///
/// Each call performs exactly one GET on a private current-thread
/// runtime and never retries. Calls must not be made from inside an
/// async context.
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
    runtime: Runtime,
}

/// What one GET observed before it finished or broke off.
struct Transfer {
    status: Option<u16>,
    body: Vec<u8>,
    error: Option<String>,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;

        Ok(Self {
            client,
            options: FetchOptions::default(),
            runtime,
        })
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// The underlying client, e.g. to inspect a test double after a call.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Resolves `request` to local payload paths.
    ///
    /// Failures are logged and absorbed into an empty result that keeps
    /// the transfer metrics; [`Fetcher::try_fetch`] returns them instead.
    pub fn fetch(&self, request: &PayloadRequest, cfg: &ResolvedConfig) -> FetchResult {
        match self.try_fetch(request, cfg) {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    tag = %request.tag,
                    valid_since = request.valid_since,
                    error = %e,
                    "fetch failed"
                );
                e.degraded()
            }
        }
    }

    pub fn try_fetch(&self, request: &PayloadRequest, cfg: &ResolvedConfig) -> Result<FetchResult> {
        let response = self.try_records(request, cfg)?;
        let paths = resolve_paths(&response.records, &cfg.storage_root);

        if paths.len() != 1 {
            warn!(
                tag = %request.tag,
                domain = request.domain().unwrap_or_default(),
                valid_since = request.valid_since,
                count = paths.len(),
                "expected a single payload record"
            );
        }

        Ok(FetchResult {
            paths,
            byte_count: response.byte_count,
            response_code: response.response_code,
        })
    }

    /// The decoded catalog records for `request`, narrowed to its domain.
    pub fn try_records(
        &self,
        request: &PayloadRequest,
        cfg: &ResolvedConfig,
    ) -> Result<CatalogResponse> {
        let url = catalog_url(
            &cfg.catalog_base_url,
            request,
            self.options.domain_param.as_deref(),
        )?;
        let (status, body) = self.get(&url)?;
        let records = decode_records(&body).map_err(|source| FetchError::Parse {
            status,
            byte_count: body.len() as u64,
            source,
        })?;

        Ok(CatalogResponse {
            records: retain_domain(records, request.domain()),
            byte_count: body.len() as u64,
            response_code: status,
        })
    }

    /// Lists a catalog collection, or one entry of it when `id` is given.
    pub fn list_entries(
        &self,
        component: Component,
        id: Option<i64>,
        cfg: &ResolvedConfig,
    ) -> Vec<CatalogEntry> {
        let listed = entries_url(&cfg.catalog_base_url, component, id).and_then(|url| {
            let (status, body) = self.get(&url)?;
            decode_entries(&body).map_err(|source| FetchError::Parse {
                status,
                byte_count: body.len() as u64,
                source,
            })
        });

        listed.unwrap_or_else(|e| {
            warn!(%component, ?id, error = %e, "invalid catalog listing");
            Vec::new()
        })
    }

    /// One GET; error statuses and transport failures become `Err`.
    fn get(&self, url: &Url) -> Result<(u16, Vec<u8>)> {
        debug!(%url, "GET");
        let transfer = self.runtime.block_on(self.transfer(url.as_str()));
        let byte_count = transfer.body.len() as u64;
        debug!(%url, status = ?transfer.status, byte_count, "transfer finished");

        if let Some(message) = transfer.error {
            return Err(FetchError::Transport { byte_count, message });
        }
        let Some(status) = transfer.status else {
            return Err(FetchError::Transport {
                byte_count,
                message: "no response".to_string(),
            });
        };
        if is_http_error(status) {
            return Err(FetchError::Http { status, byte_count });
        }
        Ok((status, transfer.body))
    }

    async fn transfer(&self, url: &str) -> Transfer {
        let headers = self.options.request_headers();
        let response = match self.client.get(url, &headers).await {
            Ok(response) => response,
            Err(e) => {
                return Transfer {
                    status: None,
                    body: Vec::new(),
                    error: Some(e.to_string()),
                };
            }
        };

        let status = response.status;
        let mut stream = response.body;
        let mut body = Vec::new();
        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(bytes) => body.extend_from_slice(&bytes),
                Err(e) => {
                    return Transfer {
                        status: Some(status),
                        body,
                        error: Some(e.to_string()),
                    };
                }
            }
        }

        Transfer {
            status: Some(status),
            body,
            error: None,
        }
    }
}

#[cfg(feature = "reqwest")]
impl Fetcher<crate::effects::http::ReqwestClient> {
    /// A fetcher backed by [`ReqwestClient`](crate::ReqwestClient).
    pub fn reqwest() -> Result<Self> {
        let client = crate::effects::http::ReqwestClient::new()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Self::new(client)
    }
}
