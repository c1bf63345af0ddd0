use crate::constants::{DENIAL_CONTENT_TYPE, DENIAL_MESSAGE};
use crate::context::RequestContext;
use crate::policy;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Request, Response, StatusCode};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Wraps `inner` so that requests denied by the policy never reach it.
///
/// Denied requests get `403 Forbidden` with a short plain-text body.
/// Everything else is passed to `inner` untouched.
pub fn protect<S>(inner: S) -> Protect<S> {
    Protect::new(inner)
}

/// [`Layer`] form of [`protect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtectLayer;

impl ProtectLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for ProtectLayer {
    type Service = Protect<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Protect::new(inner)
    }
}

/// Enforcing Fetch Metadata middleware.
#[derive(Debug, Clone)]
pub struct Protect<S> {
    inner: S,
}

impl<S> Protect<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for Protect<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: From<&'static str> + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let decision = policy::evaluate(&RequestContext::from_request(&request));
        if decision.is_denied() {
            return Box::pin(async move { Ok(forbidden_response()) });
        }

        Box::pin(self.inner.call(request))
    }
}

/// The response sent in place of a denied request.
pub fn forbidden_response<B>() -> Response<B>
where
    B: From<&'static str>,
{
    let mut response = Response::new(B::from(DENIAL_MESSAGE));
    *response.status_mut() = StatusCode::FORBIDDEN;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(DENIAL_CONTENT_TYPE));
    response
}

#[cfg(test)]
#[path = "protect_test.rs"]
mod protect_test;
