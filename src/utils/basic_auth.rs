//! HTTP Basic-Auth header encoding.

use base64::Engine as _;

/// Computes the `Authorization` header value a viewer must present:
/// `"Basic " + base64(username + ":" + password)`.
///
/// # Examples
///
/// ```
/// use static_website::utils::basic_auth::authorization_header;
///
/// assert_eq!(authorization_header("a", "b"), "Basic YTpi");
/// ```
pub fn authorization_header(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(credentials)
    )
}
