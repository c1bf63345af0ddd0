pub mod header {
    pub const SEC_FETCH_SITE: &str = "sec-fetch-site";
    pub const SEC_FETCH_MODE: &str = "sec-fetch-mode";
}

/// Values a browser sends in `Sec-Fetch-Site`.
pub mod site {
    pub const NONE: &str = "none";
    pub const SAME_SITE: &str = "same-site";
    pub const SAME_ORIGIN: &str = "same-origin";
    pub const CROSS_SITE: &str = "cross-site";
}

/// Values a browser sends in `Sec-Fetch-Mode`.
pub mod mode {
    pub const NAVIGATE: &str = "navigate";
    pub const CORS: &str = "cors";
    pub const NO_CORS: &str = "no-cors";
    pub const SAME_ORIGIN: &str = "same-origin";
    pub const WEBSOCKET: &str = "websocket";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Body written by the enforcing wrapper when a request is rejected.
pub const DENIAL_MESSAGE: &str = "Invalid resource access\n";

pub const DENIAL_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
