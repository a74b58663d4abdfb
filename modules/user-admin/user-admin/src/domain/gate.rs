//! Management access gate.

use std::collections::BTreeSet;

use url::Url;
use user_admin_sdk::CallerContext;

/// Role claim that grants management access on its own.
const ADMIN_ROLE: &str = "admin";

/// Immutable set of front-end origins trusted to call management
/// operations without authentication.
///
/// Members are normalized to ASCII origin form (`scheme://host[:port]`)
/// at construction, so lookups compare equal regardless of trailing
/// slashes, paths, or default ports in the configured values. Entries
/// that do not parse to a real origin are dropped.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(BTreeSet<String>);

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            origins
                .into_iter()
                .filter_map(|origin| parse_origin(origin.as_ref()))
                .collect(),
        )
    }

    /// `true` when `origin` (already in ASCII origin form) is trusted.
    #[must_use]
    pub fn contains(&self, origin: &str) -> bool {
        self.0.contains(origin)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Single decision point for management access.
///
/// A pure function of the caller context and the configured origin set;
/// the service turns a `false` into `PermissionDenied` with no detail
/// about which rule failed.
#[derive(Debug, Clone)]
pub struct AccessGate {
    allowed_origins: AllowedOrigins,
}

impl AccessGate {
    #[must_use]
    pub fn new(allowed_origins: AllowedOrigins) -> Self {
        Self { allowed_origins }
    }

    /// Ordered, short-circuiting decision:
    ///
    /// 1. an authenticated `admin` role claim allows, regardless of
    ///    origin;
    /// 2. otherwise the request origin (`Origin` header, falling back to
    ///    `Referer` when no `Origin` was sent) is derived and matched
    ///    against the allowed set. Unparseable or opaque values derive
    ///    no origin and match nothing.
    ///
    /// The predicate is total: malformed input can only produce `false`.
    #[must_use]
    pub fn can_manage(&self, ctx: &CallerContext) -> bool {
        if ctx.role_claim() == Some(ADMIN_ROLE) {
            return true;
        }

        match ctx.origin_or_referer().and_then(parse_origin) {
            Some(origin) => self.allowed_origins.contains(&origin),
            None => false,
        }
    }
}

/// Reduces a raw `Origin`/`Referer` header value to ASCII origin form
/// (`scheme://host[:port]`, default ports elided). Returns `None` for
/// values that do not parse to a non-opaque origin.
fn parse_origin(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let origin = url.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}
