use crate::constants::header;
use http::{HeaderMap, Method};

/// Fetch Metadata inputs of a single request.
///
/// Absent headers are represented as empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub site: &'a str,
    pub mode: &'a str,
    pub method: &'a str,
}

impl<'a> RequestContext<'a> {
    pub fn new(site: &'a str, mode: &'a str, method: &'a str) -> Self {
        Self { site, mode, method }
    }

    /// Reads the context out of a request's method and headers.
    ///
    /// A header that is missing or not valid visible ASCII reads as `""`,
    /// which the policy treats as "no Fetch Metadata sent".
    pub fn from_parts(method: &'a Method, headers: &'a HeaderMap) -> Self {
        Self {
            site: header_value(headers, header::SEC_FETCH_SITE),
            mode: header_value(headers, header::SEC_FETCH_MODE),
            method: method.as_str(),
        }
    }

    pub fn from_request<B>(request: &'a http::Request<B>) -> Self {
        Self::from_parts(request.method(), request.headers())
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
