use axum::body::Body;
use axum::http::Request;
use secfetch_rs::constants::header;

/// One row of the shared decision table.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub site: &'static str,
    pub mode: &'static str,
    pub method: &'static str,
    pub allowed: bool,
}

const fn check(
    name: &'static str,
    site: &'static str,
    mode: &'static str,
    method: &'static str,
    allowed: bool,
) -> Check {
    Check {
        name,
        site,
        mode,
        method,
        allowed,
    }
}

pub const CHECKS: &[Check] = &[
    check("no headers", "", "", "POST", true),
    check("ua initiated", "none", "", "GET", true),
    check("same site", "same-site", "websocket", "HEAD", true),
    check("same origin", "same-origin", "unrecognized", "POST", true),
    check("cross origin navigate", "cross-site", "navigate", "GET", true),
    check("cross origin missing mode", "cross-site", "", "OPTIONS", false),
    check("cross origin nested navigate", "cross-site", "nested-navigate", "GET", false),
    check("cross origin head navigate", "cross-site", "navigate", "HEAD", false),
    check("cross origin form submission", "cross-site", "navigate", "POST", false),
    check("cross origin no cors", "cross-site", "no-cors", "GET", false),
    check("cross origin cors", "cross-site", "cors", "POST", false),
];

pub struct RequestBuilder {
    method: String,
    path: String,
    site: Option<String>,
    mode: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: "GET".into(),
            path: "/".into(),
            site: None,
            mode: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn from_check(check: &Check) -> Self {
        Self::new()
            .method(check.method)
            .site(check.site)
            .mode(check.mode)
    }

    pub fn build(self) -> Request<Body> {
        let RequestBuilder {
            method,
            path,
            site,
            mode,
        } = self;

        let mut builder = Request::builder().method(method.as_str()).uri(path);
        if let Some(site) = site {
            builder = builder.header(header::SEC_FETCH_SITE, site);
        }
        if let Some(mode) = mode {
            builder = builder.header(header::SEC_FETCH_MODE, mode);
        }

        let body = if method == "POST" {
            Body::from("body")
        } else {
            Body::empty()
        };
        builder.body(body).expect("valid test request")
    }
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
