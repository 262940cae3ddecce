/// Returns `true` if the HTTP status code is an error response (4xx or 5xx).
///
/// # Examples
///
/// ```
/// use xpload_fetch::core::is_http_error;
///
/// assert!(is_http_error(404));
/// assert!(is_http_error(503));
/// assert!(!is_http_error(200));
/// assert!(!is_http_error(304));
/// ```
pub fn is_http_error(status: u16) -> bool {
    status >= 400
}
