//! Typed values for HTTP semantics (RFC 9110 and RFC 9111).
//!
//! This crate does no I/O, it only parses, compares and formats the values
//! found in HTTP messages. The main types are:
//!  * [`Headers`], a case-insensitive, ordered multimap of header fields,
//!    holding [`FieldValue`]s that can't be used for header injection.
//!  * [`MediaType`] and the content negotiation functions in [`negotiation`]
//!    ([`negotiation::select_one`] and [`negotiation::select_all`]).
//!  * [`EntityTag`] and [`Precondition`], used to evaluate conditional
//!    requests.
//!  * [`CacheControl`], the directives of the `Cache-Control` header.
//!
//! Besides these the crate has some supporting types: [`Method`],
//! [`StatusCode`], the [`Request`] and [`Response`] envelopes and
//! [`BasicCredentials`].
//!
//! # Examples
//!
//! Selecting a representation based on the `Accept` header.
//!
//! ```
//! use http_semantics::negotiation::select_one;
//! use http_semantics::MediaType;
//!
//! let available = [MediaType::APPLICATION_JSON, MediaType::APPLICATION_XML];
//! let accept = "application/xml;q=0.9, application/json";
//! assert_eq!(select_one(&available, accept), Some(&MediaType::APPLICATION_JSON));
//! ```

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    missing_debug_implementations,
    missing_docs,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    variant_size_differences
)]

pub mod auth;
pub mod cache_control;
pub mod conditional;
pub mod entity_tag;
pub mod header;
pub mod media_type;
pub mod message;
pub mod method;
pub mod negotiation;
pub mod quality;
mod status_code;

#[doc(no_inline)]
pub use auth::BasicCredentials;
#[doc(no_inline)]
pub use cache_control::CacheControl;
#[doc(no_inline)]
pub use conditional::Precondition;
#[doc(no_inline)]
pub use entity_tag::EntityTag;
#[doc(no_inline)]
pub use header::{FieldValue, HeaderField, HeaderName, Headers};
#[doc(no_inline)]
pub use media_type::MediaType;
#[doc(no_inline)]
pub use message::{Request, Response};
#[doc(no_inline)]
pub use method::Method;
#[doc(no_inline)]
pub use quality::QualityValue;
pub use status_code::StatusCode;

/// Returns `true` if `lower_case` and `right` are a case-insensitive match.
///
/// # Notes
///
/// `lower_case` must be lower case!
const fn cmp_lower_case(lower_case: &str, right: &str) -> bool {
    debug_assert!(is_lower_case(lower_case));

    let left = lower_case.as_bytes();
    let right = right.as_bytes();
    let len = left.len();
    if len != right.len() {
        return false;
    }

    let mut i = 0;
    while i < len {
        if left[i] != right[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns `true` if `value` is all ASCII lowercase.
const fn is_lower_case(value: &str) -> bool {
    let value = value.as_bytes();
    let mut i = 0;
    while i < value.len() {
        // NOTE: allows `-` because it's used in header names and directives.
        if !matches!(value[i], b'0'..=b'9' | b'a'..=b'z' | b'-') {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns `true` if `b` is a `tchar`, the characters allowed in a token.
///
/// RFC 9110 section 5.6.2.
const fn is_tchar(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' |
        b'^' | b'_' | b'`' | b'|' | b'~' | b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z'
    )
}

/// Returns `true` if `value` is a non-empty token.
fn is_token(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(is_tchar)
}

/// Splits `value` on `separator`, ignoring separators inside quoted strings.
///
/// Backslash escapes inside quoted strings are skipped over, but not removed.
/// The returned parts are not trimmed.
fn split_unquoted(value: &str, separator: u8) -> impl Iterator<Item = &str> {
    let mut rest = Some(value);
    std::iter::from_fn(move || {
        let value = rest?;
        let bytes = value.as_bytes();
        let mut quoted = false;
        let mut escaped = false;
        for (i, b) in bytes.iter().copied().enumerate() {
            if escaped {
                escaped = false;
            } else if quoted && b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                quoted = !quoted;
            } else if b == separator && !quoted {
                rest = Some(&value[i + 1..]);
                return Some(&value[..i]);
            }
        }
        rest = None;
        Some(value)
    })
}

/// Removes the quotes (and backslash escapes) from a quoted string.
///
/// Returns `value` unchanged if it isn't quoted, or `None` if the quoted
/// string is not terminated.
fn unquote(value: &str) -> Option<std::borrow::Cow<'_, str>> {
    use std::borrow::Cow;

    let Some(inner) = value.strip_prefix('"') else {
        return Some(Cow::Borrowed(value));
    };
    let inner = inner.strip_suffix('"')?;
    if !inner.contains('\\') {
        return Some(Cow::Borrowed(inner));
    }

    let mut unquoted = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            // A trailing backslash would have escaped the closing quote.
            unquoted.push(chars.next()?);
        } else {
            unquoted.push(c);
        }
    }
    Some(Cow::Owned(unquoted))
}
