//! Per-request caller context.

/// Identity claims attached to a request by the upstream authentication
/// layer after token verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClaims {
    /// Identity-provider subject id of the caller.
    pub subject: String,
    /// Role claim carried by the caller's verified token, if any.
    pub role: Option<String>,
}

/// `CallerContext` carries the identity and transport metadata for one
/// operation invocation.
///
/// It is an explicit value passed into every operation, never ambient
/// state. The role claim is only readable through
/// [`role_claim`](Self::role_claim), which yields `None` for
/// unauthenticated callers no matter what the transport supplied.
#[derive(Debug, Clone, Default)]
pub struct CallerContext {
    auth: Option<AuthClaims>,
    origin: Option<String>,
    referer: Option<String>,
}

impl CallerContext {
    /// Context for a caller without verified identity claims.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a caller with verified identity claims.
    #[must_use]
    pub fn authenticated(subject: impl Into<String>, role: Option<String>) -> Self {
        Self {
            auth: Some(AuthClaims {
                subject: subject.into(),
                role,
            }),
            origin: None,
            referer: None,
        }
    }

    /// Attaches the raw `Origin` header value.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Attaches the raw `Referer` header value.
    #[must_use]
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    /// `true` when the caller presented verified identity claims.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Subject id of the authenticated caller, if any.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.auth.as_ref().map(|a| a.subject.as_str())
    }

    /// Role claim of the authenticated caller.
    ///
    /// Always `None` for unauthenticated callers, by construction.
    #[must_use]
    pub fn role_claim(&self) -> Option<&str> {
        self.auth.as_ref().and_then(|a| a.role.as_deref())
    }

    /// Raw origin metadata: the `Origin` header value when present,
    /// otherwise the `Referer` header value.
    #[must_use]
    pub fn origin_or_referer(&self) -> Option<&str> {
        self.origin.as_deref().or(self.referer.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_claims() {
        let ctx = CallerContext::anonymous();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.subject(), None);
        assert_eq!(ctx.role_claim(), None);
    }

    #[test]
    fn authenticated_exposes_subject_and_role() {
        let ctx = CallerContext::authenticated("u-1", Some("admin".to_owned()));
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.subject(), Some("u-1"));
        assert_eq!(ctx.role_claim(), Some("admin"));
    }

    #[test]
    fn authenticated_without_role_has_no_claim() {
        let ctx = CallerContext::authenticated("u-1", None);
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.role_claim(), None);
    }

    #[test]
    fn origin_is_preferred_over_referer() {
        let ctx = CallerContext::anonymous()
            .with_origin("https://a.example.com")
            .with_referer("https://b.example.com/page");
        assert_eq!(ctx.origin_or_referer(), Some("https://a.example.com"));
    }

    #[test]
    fn referer_is_used_when_origin_absent() {
        let ctx = CallerContext::anonymous().with_referer("https://b.example.com/page");
        assert_eq!(ctx.origin_or_referer(), Some("https://b.example.com/page"));
    }

    #[test]
    fn no_headers_yields_no_origin() {
        assert_eq!(CallerContext::anonymous().origin_or_referer(), None);
    }
}
