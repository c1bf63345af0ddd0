//! Rejects cross-site requests using the Fetch Metadata headers browsers attach
//! to every request (`Sec-Fetch-Site`, `Sec-Fetch-Mode`).
//!
//! Same-site traffic, user-initiated requests and top-level `GET` navigations
//! pass. Other cross-site requests are treated as potential CSRF or
//! cross-origin inclusion and rejected. Requests without Fetch Metadata are
//! allowed so older clients keep working.
//!
//! Protect the whole service rather than single handlers:
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/account", post(update_account))
//!     .layer(ProtectLayer::new());
//! ```
//!
//! [`ProtectLogOnlyLayer`] reports would-be rejections to a [`RequestLogger`]
//! without changing any response, which helps validating the policy before
//! enforcing it.
//!
//! There is no exemption list. Routes that must answer cross-site requests,
//! such as CORS APIs, are registered outside the protected subtree:
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/protected", get(private_data))
//!     .layer(ProtectLayer::new())
//!     .route("/unprotected", get(public_data));
//! ```
//!
//! The wrappers take no configuration. [`Enforcement`] is only a convenience
//! for host code that reads the enforce/log-only choice from its own settings
//! and picks the matching layer.

pub mod constants;
mod context;
mod decision;
mod enforcement;
mod log_only;
mod logger;
mod policy;
mod protect;

pub use context::RequestContext;
pub use decision::{AllowReason, Decision};
pub use enforcement::{Enforcement, EnforcementError};
pub use log_only::{ProtectLogOnly, ProtectLogOnlyLayer, protect_log_only};
pub use logger::{NoopLogger, RequestLogger, RequestView, TracingLogger};
pub use policy::{allowed, evaluate};
pub use protect::{Protect, ProtectLayer, forbidden_response, protect};
