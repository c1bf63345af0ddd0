use crate::logger::{RequestLogger, RequestView};
use crate::policy;
use http::Request;
use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Wraps `inner` so that requests the policy would deny are reported to
/// `logger` and then served as usual.
///
/// Responses are never altered. Use this to try the policy against live
/// traffic before switching to [`protect`](crate::protect).
pub fn protect_log_only<S, L>(inner: S, logger: L) -> ProtectLogOnly<S, L>
where
    L: RequestLogger,
{
    ProtectLogOnly::new(inner, Arc::new(logger))
}

/// [`Layer`] form of [`protect_log_only`].
pub struct ProtectLogOnlyLayer<L> {
    logger: Arc<L>,
}

impl<L> ProtectLogOnlyLayer<L>
where
    L: RequestLogger,
{
    pub fn new(logger: L) -> Self {
        Self {
            logger: Arc::new(logger),
        }
    }

    pub fn from_shared(logger: Arc<L>) -> Self {
        Self { logger }
    }
}

impl<L> Clone for ProtectLogOnlyLayer<L> {
    fn clone(&self) -> Self {
        Self {
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<L> fmt::Debug for ProtectLogOnlyLayer<L>
where
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtectLogOnlyLayer")
            .field("logger", &self.logger)
            .finish()
    }
}

impl<S, L> Layer<S> for ProtectLogOnlyLayer<L> {
    type Service = ProtectLogOnly<S, L>;

    fn layer(&self, inner: S) -> Self::Service {
        ProtectLogOnly::new(inner, Arc::clone(&self.logger))
    }
}

/// Log-only Fetch Metadata middleware.
pub struct ProtectLogOnly<S, L> {
    inner: S,
    logger: Arc<L>,
}

impl<S, L> ProtectLogOnly<S, L> {
    pub fn new(inner: S, logger: Arc<L>) -> Self {
        Self { inner, logger }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }
}

impl<S, L> Clone for ProtectLogOnly<S, L>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<S, L> fmt::Debug for ProtectLogOnly<S, L>
where
    S: fmt::Debug,
    L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtectLogOnly")
            .field("inner", &self.inner)
            .field("logger", &self.logger)
            .finish()
    }
}

impl<S, L, ReqBody> Service<Request<ReqBody>> for ProtectLogOnly<S, L>
where
    S: Service<Request<ReqBody>>,
    L: RequestLogger,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let view = RequestView::from_request(&request);
        if policy::evaluate(&view.context()).is_denied() {
            self.logger.log_request(&view);
        }

        self.inner.call(request)
    }
}

#[cfg(test)]
#[path = "log_only_test.rs"]
mod log_only_test;
