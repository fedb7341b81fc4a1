//! Syntactic format checks for email addresses, URIs and IP literals.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::contract::{argument, check, render};
use crate::error::GuardResult;
use crate::param::Param;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Base used to resolve relative references.
static RELATIVE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://relative.invalid/").expect("base URL is valid"));

/// Which URI forms a URI check accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UriKind {
    /// A URI with a scheme, e.g. `https://example.com/path`.
    Absolute,
    /// A relative reference, e.g. `../images/logo.png`.
    Relative,
    /// Either of the above.
    #[default]
    Either,
}

impl UriKind {
    fn describe(self) -> &'static str {
        match self {
            UriKind::Absolute => "absolute URI",
            UriKind::Relative => "relative URI",
            UriKind::Either => "URI",
        }
    }
}

/// Returns true if `s` has the shape of an email address.
///
/// The domain may be a single label, so `user@localhost` is accepted. No
/// dot is required after the `@`.
pub fn is_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Returns true if `s` is a URI of the requested kind.
///
/// Absolute URIs must parse with a scheme and, for schemes that need one, a
/// host. Relative references must fail to parse on their own, resolve against
/// a base, and contain no whitespace.
pub fn is_uri(s: &str, kind: UriKind) -> bool {
    match kind {
        UriKind::Absolute => is_absolute_uri(s),
        UriKind::Relative => is_relative_uri(s),
        UriKind::Either => is_absolute_uri(s) || is_relative_uri(s),
    }
}

fn is_absolute_uri(s: &str) -> bool {
    Url::parse(s).is_ok()
}

fn is_relative_uri(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    matches!(Url::parse(s), Err(url::ParseError::RelativeUrlWithoutBase))
        && RELATIVE_BASE.join(s).is_ok()
}

/// Returns true if `s` is a dotted-quad IPv4 literal.
pub fn is_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// Returns true if `s` is an IPv6 literal.
pub fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

/// Checks that a string has a well-known syntactic format.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// assert!("user@example.com".ensure_email("email").is_ok());
/// assert!("https://example.com/path".ensure_uri(UriKind::Absolute, "endpoint").is_ok());
/// assert!("192.168.1.1".ensure_ipv4("addr").is_ok());
/// assert!("::1".ensure_ipv6("addr").is_ok());
///
/// assert!("not-an-email".ensure_email("email").is_err());
/// ```
pub trait FormatGuards: AsRef<str> + Sized {
    /// Requires an email address.
    fn ensure_email<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| is_email(value.as_ref()), |value, name| {
            argument(
                name,
                "email",
                format!("{name} must be a valid email address"),
                "email address",
                render(value.as_ref()),
            )
        })
    }

    /// Requires anything but an email address.
    fn ensure_not_email<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| !is_email(value.as_ref()), |value, name| {
            argument(
                name,
                "not_email",
                format!("{name} must not be an email address"),
                "not an email address",
                render(value.as_ref()),
            )
        })
    }

    /// Requires a URI of the given kind.
    fn ensure_uri<'p>(self, kind: UriKind, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| is_uri(value.as_ref(), kind),
            |value, name| {
                argument(
                    name,
                    "uri",
                    format!("{name} must be a valid {}", kind.describe()),
                    kind.describe(),
                    render(value.as_ref()),
                )
            },
        )
    }

    /// Requires anything but a URI of the given kind.
    fn ensure_not_uri<'p>(self, kind: UriKind, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| !is_uri(value.as_ref(), kind),
            |value, name| {
                argument(
                    name,
                    "not_uri",
                    format!("{name} must not be a valid {}", kind.describe()),
                    format!("not a valid {}", kind.describe()),
                    render(value.as_ref()),
                )
            },
        )
    }

    /// Requires an IPv4 literal.
    fn ensure_ipv4<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| is_ipv4(value.as_ref()), |value, name| {
            argument(
                name,
                "ipv4",
                format!("{name} must be a valid IPv4 address"),
                "IPv4 address",
                render(value.as_ref()),
            )
        })
    }

    /// Requires anything but an IPv4 literal.
    fn ensure_not_ipv4<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| !is_ipv4(value.as_ref()), |value, name| {
            argument(
                name,
                "not_ipv4",
                format!("{name} must not be an IPv4 address"),
                "not an IPv4 address",
                render(value.as_ref()),
            )
        })
    }

    /// Requires an IPv6 literal.
    fn ensure_ipv6<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| is_ipv6(value.as_ref()), |value, name| {
            argument(
                name,
                "ipv6",
                format!("{name} must be a valid IPv6 address"),
                "IPv6 address",
                render(value.as_ref()),
            )
        })
    }

    /// Requires anything but an IPv6 literal.
    fn ensure_not_ipv6<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| !is_ipv6(value.as_ref()), |value, name| {
            argument(
                name,
                "not_ipv6",
                format!("{name} must not be an IPv6 address"),
                "not an IPv6 address",
                render(value.as_ref()),
            )
        })
    }
}

impl<T: AsRef<str>> FormatGuards for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@sub.example.org"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("user@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user @example.com"));
    }

    #[test]
    fn test_email_single_label_domain() {
        assert!(is_email("user@localhost"));
        assert!(is_email("a@b"));
        assert!(!is_email("user@-localhost"));
        assert!(!is_email("user@localhost."));
    }

    #[test]
    fn test_absolute_uri() {
        assert!(is_uri("https://example.com/path", UriKind::Absolute));
        assert!(is_uri("mailto:user@example.com", UriKind::Absolute));
        assert!(!is_uri("http://", UriKind::Absolute));
        assert!(!is_uri("/relative/path", UriKind::Absolute));
    }

    #[test]
    fn test_relative_uri() {
        assert!(is_uri("/relative/path", UriKind::Relative));
        assert!(is_uri("../up?x=1#frag", UriKind::Relative));
        assert!(!is_uri("https://example.com", UriKind::Relative));
        assert!(!is_uri("has space", UriKind::Relative));
    }

    #[test]
    fn test_either_uri() {
        assert!(is_uri("https://example.com", UriKind::Either));
        assert!(is_uri("docs/index.html", UriKind::Either));
        assert!(!is_uri("http://", UriKind::Either));
    }

    #[test]
    fn test_ip_literals() {
        assert!(is_ipv4("192.168.1.1"));
        assert!(!is_ipv4("999.999.999.999"));
        assert!(!is_ipv4("12345"));
        assert!(!is_ipv4("::1"));

        assert!(is_ipv6("::1"));
        assert!(is_ipv6("2001:db8::8a2e:370:7334"));
        assert!(!is_ipv6("12345"));
        assert!(!is_ipv6("192.168.1.1"));
    }

    #[test]
    fn test_uri_message_names_kind() {
        let err = "http://".ensure_uri(UriKind::Absolute, "endpoint").unwrap_err();
        assert!(err
            .to_string()
            .contains("endpoint must be a valid absolute URI"));
    }
}
