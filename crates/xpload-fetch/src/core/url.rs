use url::Url;

use crate::data::{Component, PayloadRequest};
use crate::error::{FetchError, Result};

/// Builds the `payloadiovs` query URL for `request`.
///
/// The domain is only sent when `domain_param` names the query
/// parameter to carry it.
///
/// # Examples
///
/// ```
/// use xpload_fetch::PayloadRequest;
/// use xpload_fetch::core::catalog_url;
///
/// let request = PayloadRequest::new("Tag_17", 300);
/// let url = catalog_url("http://localhost:8080/api", &request, None).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "http://localhost:8080/api/payloadiovs/?gtName=Tag_17&majorIOV=0&minorIOV=300"
/// );
/// ```
pub fn catalog_url(base: &str, request: &PayloadRequest, domain_param: Option<&str>) -> Result<Url> {
    let mut url = parse_base(base, "payloadiovs/")?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("gtName", &request.tag)
            .append_pair("majorIOV", "0")
            .append_pair("minorIOV", &request.valid_since.to_string());
        if let (Some(param), Some(domain)) = (domain_param, request.domain()) {
            query.append_pair(param, domain);
        }
    }
    Ok(url)
}

/// URL of a listable collection, or of one entry in it.
pub fn entries_url(base: &str, component: Component, id: Option<i64>) -> Result<Url> {
    let path = match id {
        Some(id) => format!("{}/{id}", component.endpoint()),
        None => component.endpoint().to_string(),
    };
    parse_base(base, &path)
}

fn parse_base(base: &str, path: &str) -> Result<Url> {
    let raw = format!("{}/{path}", base.trim_end_matches('/'));
    Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))
}
