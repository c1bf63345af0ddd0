use crate::context::RequestContext;
use http::{HeaderMap, Method, Request, Uri};

/// Read-only view of a request that the policy would have rejected.
///
/// Borrows from the request; loggers that keep anything must copy it.
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap,
}

impl<'a> RequestView<'a> {
    pub fn from_request<B>(request: &'a Request<B>) -> Self {
        Self {
            method: request.method(),
            uri: request.uri(),
            headers: request.headers(),
        }
    }

    pub fn method(&self) -> &'a Method {
        self.method
    }

    pub fn uri(&self) -> &'a Uri {
        self.uri
    }

    pub fn headers(&self) -> &'a HeaderMap {
        self.headers
    }

    pub fn context(&self) -> RequestContext<'a> {
        RequestContext::from_parts(self.method, self.headers)
    }
}

/// Sink for requests that log-only mode lets through despite a deny decision.
pub trait RequestLogger: Send + Sync {
    /// Called once for every request that would have been rejected.
    fn log_request(&self, request: &RequestView<'_>);
}

impl<F> RequestLogger for F
where
    F: Fn(&RequestView<'_>) + Send + Sync,
{
    fn log_request(&self, request: &RequestView<'_>) {
        self(request)
    }
}

/// Emits a `WARN` event per would-be rejection through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl RequestLogger for TracingLogger {
    fn log_request(&self, request: &RequestView<'_>) {
        let context = request.context();
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            site = context.site,
            mode = context.mode,
            "cross-site request would be rejected by fetch metadata policy"
        );
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl RequestLogger for NoopLogger {
    fn log_request(&self, _request: &RequestView<'_>) {}
}

#[cfg(test)]
#[path = "logger_test.rs"]
mod logger_test;
