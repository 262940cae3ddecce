/// One catalog query: a tag, an optional domain and a validity timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PayloadRequest {
    pub tag: String,
    domain: Option<String>,
    pub valid_since: u64,
}

impl PayloadRequest {
    pub fn new(tag: impl Into<String>, valid_since: u64) -> Self {
        Self {
            tag: tag.into(),
            domain: None,
            valid_since,
        }
    }

    /// Restricts the query to `domain`. An empty string means no domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        self.domain = (!domain.is_empty()).then_some(domain);
        self
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

/// Outcome of a single fetch.
///
/// Failures are reported as an empty `paths` list; `byte_count` and
/// `response_code` still describe what the transfer saw. A
/// `response_code` of 0 means no HTTP response was received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    pub paths: Vec<String>,
    pub byte_count: u64,
    pub response_code: u16,
}

impl FetchResult {
    pub fn empty(byte_count: u64, response_code: u16) -> Self {
        Self {
            paths: Vec::new(),
            byte_count,
            response_code,
        }
    }

    /// The resolved path when exactly one record matched.
    pub fn single_path(&self) -> Option<&str> {
        match self.paths.as_slice() {
            [path] => Some(path),
            _ => None,
        }
    }
}
