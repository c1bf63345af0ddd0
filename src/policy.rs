use crate::constants::{method, mode, site};
use crate::context::RequestContext;
use crate::decision::{AllowReason, Decision};

/// Classifies a request by its Fetch Metadata.
///
/// Rules, first match wins:
/// 1. no `Sec-Fetch-Site`, or `none`, `same-site`, `same-origin`: allow;
/// 2. any other site with `Sec-Fetch-Mode: navigate` and method `GET`: allow;
/// 3. everything else: deny.
///
/// Values are compared exactly. A missing header is an empty string, so clients
/// that send no metadata at all are let through.
pub fn evaluate(request: &RequestContext<'_>) -> Decision {
    match request.site {
        "" => return Decision::Allow(AllowReason::MissingMetadata),
        site::NONE => return Decision::Allow(AllowReason::UserInitiated),
        site::SAME_SITE => return Decision::Allow(AllowReason::SameSite),
        site::SAME_ORIGIN => return Decision::Allow(AllowReason::SameOrigin),
        _ => {}
    }

    // HEAD is not treated as GET here.
    if request.mode == mode::NAVIGATE && request.method == method::GET {
        return Decision::Allow(AllowReason::CrossSiteNavigation);
    }

    Decision::Deny
}

/// Boolean form of [`evaluate`].
pub fn allowed(site: &str, mode: &str, method: &str) -> bool {
    evaluate(&RequestContext::new(site, mode, method)).is_allowed()
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
