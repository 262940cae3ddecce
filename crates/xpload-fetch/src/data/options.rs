/// User agent sent with every catalog request.
pub const DEFAULT_USER_AGENT: &str = concat!("xpload/", env!("CARGO_PKG_VERSION"));

/// Configuration for catalog requests.
///
/// # Examples
///
/// ```
/// use xpload_fetch::FetchOptions;
///
/// let options = FetchOptions::default()
///     .domain_param("payloadType")
///     .header("Accept", "application/json");
/// assert_eq!(options.domain_param.as_deref(), Some("payloadType"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,

    /// Query parameter carrying the request domain.
    ///
    /// `None` keeps the domain out of the query string; records are then
    /// narrowed to the domain client-side by their `payload_type`.
    ///
    /// Default: None
    pub domain_param: Option<String>,

    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            domain_param: None,
            headers: Vec::new(),
        }
    }
}

impl FetchOptions {
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn domain_param(mut self, name: impl Into<String>) -> Self {
        self.domain_param = Some(name.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// All headers for a request, user agent first.
    pub fn request_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        headers.push(("User-Agent".to_string(), self.user_agent.clone()));
        headers.extend(self.headers.iter().cloned());
        headers
    }
}
