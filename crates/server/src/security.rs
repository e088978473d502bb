//! HTTPS enforcement headers, added to every response when TLS is on.

use axum::extract::Request;
use axum::http::header::{
    CONTENT_SECURITY_POLICY, STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

/// One year, subdomains included.
pub const HSTS: &str = "max-age=31536000; includeSubDomains";

/// Same-origin content plus Google Fonts; no plugins, no framing.
pub const CSP: &str = "default-src 'self' https://fonts.googleapis.com https://fonts.gstatic.com; \
script-src 'self' https://apis.google.com; \
style-src 'self' https://fonts.googleapis.com; \
img-src 'self' data:; \
object-src 'none'; \
frame-ancestors 'none'; \
base-uri 'self'";

/// Middleware that sets the HTTPS headers unless a handler already did.
pub async fn https_headers(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers
        .entry(STRICT_TRANSPORT_SECURITY)
        .or_insert(HeaderValue::from_static(HSTS));
    headers
        .entry(CONTENT_SECURITY_POLICY)
        .or_insert(HeaderValue::from_static(CSP));
    headers
        .entry(X_CONTENT_TYPE_OPTIONS)
        .or_insert(HeaderValue::from_static("nosniff"));
    headers
        .entry(X_FRAME_OPTIONS)
        .or_insert(HeaderValue::from_static("DENY"));
    response
}
