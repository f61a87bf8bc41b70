//! Cache-Control directives.
//!
//! RFC 9111 section 5.2.

use std::fmt;

use crate::header::FieldValue;
use crate::{cmp_lower_case, split_unquoted, unquote};

/// Largest delta-seconds value, larger values are clamped to this.
///
/// RFC 9111 section 1.2.2.
pub const MAX_DELTA_SECONDS: u64 = 2147483648;

/// Parsed `Cache-Control` header.
///
/// All directives known to RFC 9111 (and the `immutable` and `stale-*`
/// extensions) are represented as fields, unknown directives are ignored.
/// Numeric values are in seconds.
///
/// # Examples
///
/// ```
/// use http_semantics::CacheControl;
///
/// let cache_control = CacheControl::parse("public, max-age=3600, must-revalidate");
/// assert!(cache_control.public);
/// assert_eq!(cache_control.max_age, Some(3600));
/// assert!(cache_control.must_revalidate);
/// assert_eq!(cache_control.to_string(), "max-age=3600, must-revalidate, public");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CacheControl {
    /// `no-cache`, RFC 9111 section 5.2.1.4 and 5.2.2.4.
    pub no_cache: bool,
    /// `no-store`, RFC 9111 section 5.2.1.5 and 5.2.2.5.
    pub no_store: bool,
    /// `no-transform`, RFC 9111 section 5.2.1.6 and 5.2.2.6.
    pub no_transform: bool,
    /// `only-if-cached`, RFC 9111 section 5.2.1.7.
    pub only_if_cached: bool,
    /// `public`, RFC 9111 section 5.2.2.9.
    pub public: bool,
    /// `private`, RFC 9111 section 5.2.2.7.
    pub private: bool,
    /// `must-revalidate`, RFC 9111 section 5.2.2.2.
    pub must_revalidate: bool,
    /// `proxy-revalidate`, RFC 9111 section 5.2.2.8.
    pub proxy_revalidate: bool,
    /// `immutable`, RFC 8246.
    pub immutable: bool,
    /// `max-age`, RFC 9111 section 5.2.1.1 and 5.2.2.1.
    pub max_age: Option<u64>,
    /// `max-stale`, RFC 9111 section 5.2.1.2.
    pub max_stale: Option<MaxStale>,
    /// `min-fresh`, RFC 9111 section 5.2.1.3.
    pub min_fresh: Option<u64>,
    /// `s-maxage`, RFC 9111 section 5.2.2.10.
    pub s_maxage: Option<u64>,
    /// `stale-while-revalidate`, RFC 5861.
    pub stale_while_revalidate: Option<u64>,
    /// `stale-if-error`, RFC 5861.
    pub stale_if_error: Option<u64>,
}

/// Value of the `max-stale` directive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MaxStale {
    /// Accept a response that is stale by at most this many seconds.
    Seconds(u64),
    /// `max-stale` without a value, accept a stale response of any age.
    Any,
}

impl CacheControl {
    /// Parse a `Cache-Control` header.
    ///
    /// Directive names are case-insensitive. Unknown directives are ignored,
    /// as are numeric directives with a missing or invalid value. If a
    /// directive is present multiple times the last one is used.
    ///
    /// Use [`Headers::combined`] to parse a header split over multiple lines.
    ///
    /// [`Headers::combined`]: crate::Headers::combined
    pub fn parse(header: &str) -> CacheControl {
        let mut cache_control = CacheControl::default();
        for directive in split_unquoted(header, b',') {
            let directive = directive.trim();
            if directive.is_empty() {
                continue;
            }
            let (name, value) = match directive.split_once('=') {
                Some((name, value)) => (name.trim(), Some(value.trim())),
                None => (directive, None),
            };
            cache_control.apply(name, value);
        }
        cache_control
    }

    fn apply(&mut self, name: &str, value: Option<&str>) {
        // NOTE: arguments to boolean directives, e.g. the field names of
        // `no-cache="Set-Cookie"`, are ignored.
        let flag = match name.len() {
            6 if cmp_lower_case("public", name) => &mut self.public,
            7 if cmp_lower_case("private", name) => &mut self.private,
            8 if cmp_lower_case("no-cache", name) => &mut self.no_cache,
            8 if cmp_lower_case("no-store", name) => &mut self.no_store,
            9 if cmp_lower_case("immutable", name) => &mut self.immutable,
            12 if cmp_lower_case("no-transform", name) => &mut self.no_transform,
            14 if cmp_lower_case("only-if-cached", name) => &mut self.only_if_cached,
            15 if cmp_lower_case("must-revalidate", name) => &mut self.must_revalidate,
            16 if cmp_lower_case("proxy-revalidate", name) => &mut self.proxy_revalidate,
            _ => return self.apply_numeric(name, value),
        };
        *flag = true;
    }

    fn apply_numeric(&mut self, name: &str, value: Option<&str>) {
        if cmp_lower_case("max-stale", name) {
            self.max_stale = match value {
                None => Some(MaxStale::Any),
                Some(value) => match parse_delta_seconds(value) {
                    Some(seconds) => Some(MaxStale::Seconds(seconds)),
                    None => {
                        log::debug!("skipping Cache-Control directive with invalid value: {name}={value}");
                        return;
                    }
                },
            };
            return;
        }

        let field = if cmp_lower_case("max-age", name) {
            &mut self.max_age
        } else if cmp_lower_case("min-fresh", name) {
            &mut self.min_fresh
        } else if cmp_lower_case("s-maxage", name) {
            &mut self.s_maxage
        } else if cmp_lower_case("stale-while-revalidate", name) {
            &mut self.stale_while_revalidate
        } else if cmp_lower_case("stale-if-error", name) {
            &mut self.stale_if_error
        } else {
            log::trace!("ignoring unknown Cache-Control directive: {name}");
            return;
        };
        match value.and_then(parse_delta_seconds) {
            Some(seconds) => *field = Some(seconds),
            None => log::debug!("skipping Cache-Control directive with invalid value: {name}={value:?}"),
        }
    }

    /// Returns `true` if no directives are set.
    pub fn is_empty(&self) -> bool {
        *self == CacheControl::default()
    }

    /// Returns the formatted directives as header field value.
    pub fn to_field_value(&self) -> FieldValue {
        FieldValue::unchecked(self.to_string())
    }
}

/// Parse delta-seconds, RFC 9111 section 1.2.2, clamping it to
/// [`MAX_DELTA_SECONDS`].
fn parse_delta_seconds(value: &str) -> Option<u64> {
    // Quoted values are not allowed, but used in practice.
    let value = unquote(value)?;
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Only digits, so it can only fail on overflow.
    let seconds = value.parse::<u64>().unwrap_or(MAX_DELTA_SECONDS);
    Some(seconds.min(MAX_DELTA_SECONDS))
}

/// Formats the directives that are set in a fixed order, not the order in
/// which they were parsed.
impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut write = |f: &mut fmt::Formatter<'_>, name: &str, seconds: Option<u64>| -> fmt::Result {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            f.write_str(name)?;
            if let Some(seconds) = seconds {
                f.write_str("=")?;
                f.write_str(itoa::Buffer::new().format(seconds))?;
            }
            Ok(())
        };

        let numeric = [
            ("max-age", self.max_age),
            ("s-maxage", self.s_maxage),
            ("min-fresh", self.min_fresh),
        ];
        for (name, value) in numeric {
            if let Some(seconds) = value {
                write(f, name, Some(seconds))?;
            }
        }
        match self.max_stale {
            Some(MaxStale::Seconds(seconds)) => write(f, "max-stale", Some(seconds))?,
            Some(MaxStale::Any) => write(f, "max-stale", None)?,
            None => {}
        }
        let flags = [
            ("no-cache", self.no_cache),
            ("no-store", self.no_store),
            ("no-transform", self.no_transform),
            ("only-if-cached", self.only_if_cached),
            ("must-revalidate", self.must_revalidate),
            ("proxy-revalidate", self.proxy_revalidate),
            ("public", self.public),
            ("private", self.private),
            ("immutable", self.immutable),
        ];
        for (name, set) in flags {
            if set {
                write(f, name, None)?;
            }
        }
        let extensions = [
            ("stale-while-revalidate", self.stale_while_revalidate),
            ("stale-if-error", self.stale_if_error),
        ];
        for (name, value) in extensions {
            if let Some(seconds) = value {
                write(f, name, Some(seconds))?;
            }
        }
        Ok(())
    }
}
