use std::fmt;

/// Which rule let a request through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowReason {
    /// The browser sent no `Sec-Fetch-Site` header.
    MissingMetadata,
    /// `Sec-Fetch-Site: none`, the user agent started the request itself.
    UserInitiated,
    SameSite,
    SameOrigin,
    /// Top-level cross-site navigation using `GET`.
    CrossSiteNavigation,
}

impl AllowReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllowReason::MissingMetadata => "missing-metadata",
            AllowReason::UserInitiated => "user-initiated",
            AllowReason::SameSite => "same-site",
            AllowReason::SameOrigin => "same-origin",
            AllowReason::CrossSiteNavigation => "cross-site-navigation",
        }
    }
}

impl fmt::Display for AllowReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one request against the Fetch Metadata policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow(AllowReason),
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow(_))
    }

    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    pub fn reason(&self) -> Option<AllowReason> {
        match self {
            Decision::Allow(reason) => Some(*reason),
            Decision::Deny => None,
        }
    }
}

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;
