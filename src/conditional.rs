//! Conditional requests.
//!
//! RFC 9110 section 13.
//!
//! A single [`Precondition`] is evaluated with [`Precondition::evaluate`]
//! against the current state of the target resource: its entity tag and last
//! modification time. [`evaluate_request`] evaluates all preconditions of a
//! request in the order defined in RFC 9110 section 13.2.2 and determines how
//! the request should be handled.
//!
//! # Examples
//!
//! ```
//! use http_semantics::conditional::{evaluate_request, PreconditionOutcome};
//! use http_semantics::{EntityTag, FieldValue, HeaderField, HeaderName, Headers, Method};
//!
//! let headers = Headers::from(HeaderField::new(
//!     HeaderName::IF_NONE_MATCH,
//!     FieldValue::from_static("\"v1\""),
//! ));
//! let current = EntityTag::strong("v1");
//! let outcome = evaluate_request(Method::Get, &headers, Some(&current), None);
//! assert_eq!(outcome, PreconditionOutcome::NotModified);
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use crate::entity_tag::EntityTag;
use crate::header::{HeaderName, Headers};
use crate::method::Method;
use crate::status_code::StatusCode;

/// A conditional request header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Precondition {
    /// `If-Match`, RFC 9110 section 13.1.1.
    IfMatch(Vec<EntityTag>),
    /// `If-None-Match`, RFC 9110 section 13.1.2.
    IfNoneMatch(Vec<EntityTag>),
    /// `If-Modified-Since`, RFC 9110 section 13.1.3.
    IfModifiedSince(SystemTime),
    /// `If-Unmodified-Since`, RFC 9110 section 13.1.4.
    IfUnmodifiedSince(SystemTime),
    /// `If-Range`, RFC 9110 section 13.1.5.
    IfRange(IfRange),
}

/// Validator of the `If-Range` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IfRange {
    /// Entity tag validator.
    ETag(EntityTag),
    /// Last modification date validator.
    Date(SystemTime),
}

impl Precondition {
    /// Parse the precondition header `name` with `value`.
    ///
    /// Returns `None` if `name` is not a conditional request header or if
    /// `value` is malformed.
    pub fn parse(name: &HeaderName, value: &str) -> Option<Precondition> {
        let precondition = if *name == HeaderName::IF_MATCH {
            EntityTag::parse_list(value).map(Precondition::IfMatch)
        } else if *name == HeaderName::IF_NONE_MATCH {
            EntityTag::parse_list(value).map(Precondition::IfNoneMatch)
        } else if *name == HeaderName::IF_MODIFIED_SINCE {
            parse_date(value).map(Precondition::IfModifiedSince)
        } else if *name == HeaderName::IF_UNMODIFIED_SINCE {
            parse_date(value).map(Precondition::IfUnmodifiedSince)
        } else if *name == HeaderName::IF_RANGE {
            let value = value.trim();
            // Entity tags always start with `"` or `W/"`, dates never do.
            if value.starts_with('"') || value.starts_with("W/") {
                EntityTag::parse(value).map(|tag| Precondition::IfRange(IfRange::ETag(tag)))
            } else {
                parse_date(value).map(|date| Precondition::IfRange(IfRange::Date(date)))
            }
        } else {
            return None;
        };
        if precondition.is_none() {
            log::debug!("ignoring invalid conditional request header: {name}: {value:?}");
        }
        precondition
    }

    /// Collect all preconditions in `headers`.
    ///
    /// The preconditions are returned in the order in which RFC 9110 section
    /// 13.2.2 evaluates them. Malformed headers are skipped.
    pub fn from_headers(headers: &Headers) -> Vec<Precondition> {
        const NAMES: [HeaderName; 5] = [
            HeaderName::IF_MATCH,
            HeaderName::IF_UNMODIFIED_SINCE,
            HeaderName::IF_NONE_MATCH,
            HeaderName::IF_MODIFIED_SINCE,
            HeaderName::IF_RANGE,
        ];
        NAMES
            .iter()
            .filter_map(|name| {
                // If-Match and If-None-Match are lists, which may be split
                // over multiple lines.
                let value = headers.combined(name)?;
                Precondition::parse(name, &value)
            })
            .collect()
    }

    /// Returns the name of the header this precondition is parsed from.
    pub const fn header_name(&self) -> HeaderName {
        match self {
            Precondition::IfMatch(_) => HeaderName::IF_MATCH,
            Precondition::IfNoneMatch(_) => HeaderName::IF_NONE_MATCH,
            Precondition::IfModifiedSince(_) => HeaderName::IF_MODIFIED_SINCE,
            Precondition::IfUnmodifiedSince(_) => HeaderName::IF_UNMODIFIED_SINCE,
            Precondition::IfRange(_) => HeaderName::IF_RANGE,
        }
    }

    /// Evaluate the precondition against the current state of the resource.
    ///
    /// `current_etag` is the entity tag of the selected representation, if
    /// any, and `last_modified` its last modification time, if known. Dates
    /// are compared with a precision of one second, the resolution of HTTP
    /// dates.
    ///
    /// Returns `true` if the condition holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_semantics::{EntityTag, Precondition};
    ///
    /// let precondition = Precondition::IfNoneMatch(vec![EntityTag::ANY]);
    /// assert!(!precondition.evaluate(Some(&EntityTag::strong("x")), None));
    /// assert!(precondition.evaluate(None, None));
    /// ```
    pub fn evaluate(
        &self,
        current_etag: Option<&EntityTag>,
        last_modified: Option<SystemTime>,
    ) -> bool {
        match self {
            Precondition::IfMatch(tags) => match current_etag {
                None => false,
                Some(current) => tags
                    .iter()
                    .any(|tag| tag.is_any() || tag.strong_compare(current)),
            },
            Precondition::IfNoneMatch(tags) => match current_etag {
                None => true,
                Some(_) if tags.iter().any(EntityTag::is_any) => false,
                Some(current) => !tags.iter().any(|tag| tag.weak_compare(current)),
            },
            Precondition::IfModifiedSince(date) => match last_modified {
                None => true,
                Some(last_modified) => unix_seconds(last_modified) > unix_seconds(*date),
            },
            Precondition::IfUnmodifiedSince(date) => match last_modified {
                None => true,
                Some(last_modified) => unix_seconds(last_modified) <= unix_seconds(*date),
            },
            Precondition::IfRange(IfRange::ETag(tag)) => match current_etag {
                None => false,
                Some(current) => !tag.is_any() && tag.strong_compare(current),
            },
            Precondition::IfRange(IfRange::Date(date)) => match last_modified {
                None => false,
                Some(last_modified) => unix_seconds(last_modified) <= unix_seconds(*date),
            },
        }
    }
}

fn parse_date(value: &str) -> Option<SystemTime> {
    httpdate::parse_http_date(value.trim()).ok()
}

/// Returns the number of whole seconds since the Unix epoch, rounding down.
fn unix_seconds(time: SystemTime) -> i128 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i128::from(elapsed.as_secs()),
        Err(err) => {
            let before = err.duration();
            let partial = i128::from(before.subsec_nanos() != 0);
            -(i128::from(before.as_secs()) + partial)
        }
    }
}

/// Result of [`evaluate_request`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PreconditionOutcome {
    /// All preconditions hold (or there are none), perform the request as
    /// usual.
    Proceed,
    /// Respond with 304 (Not Modified).
    NotModified,
    /// Respond with 412 (Precondition Failed).
    PreconditionFailed,
    /// Perform the request, but ignore the `Range` header and respond with the
    /// complete representation.
    IgnoreRange,
}

impl PreconditionOutcome {
    /// Returns the status code to respond with, if the request should not be
    /// performed.
    pub const fn status_code(self) -> Option<StatusCode> {
        match self {
            PreconditionOutcome::Proceed | PreconditionOutcome::IgnoreRange => None,
            PreconditionOutcome::NotModified => Some(StatusCode::NOT_MODIFIED),
            PreconditionOutcome::PreconditionFailed => Some(StatusCode::PRECONDITION_FAILED),
        }
    }
}

/// Evaluate the preconditions in `headers` for a request with `method`.
///
/// Follows RFC 9110 section 13.2.2:
/// 1. If-Match, if false respond with 412.
/// 2. If-Unmodified-Since, only without If-Match, if false respond with 412.
/// 3. If-None-Match, if false respond with 304 for GET and HEAD requests,
///    412 otherwise.
/// 4. If-Modified-Since, only for GET and HEAD requests without
///    If-None-Match, if false respond with 304.
/// 5. If-Range, only for GET requests with a Range header, if false ignore the
///    Range header.
///
/// Headers that can't be parsed are ignored.
pub fn evaluate_request(
    method: Method,
    headers: &Headers,
    current_etag: Option<&EntityTag>,
    last_modified: Option<SystemTime>,
) -> PreconditionOutcome {
    let preconditions = Precondition::from_headers(headers);
    let find = |name: HeaderName| preconditions.iter().find(|p| p.header_name() == name);
    let holds = |precondition: &Precondition| precondition.evaluate(current_etag, last_modified);
    let is_get_or_head = matches!(method, Method::Get | Method::Head);

    if let Some(if_match) = find(HeaderName::IF_MATCH) {
        if !holds(if_match) {
            return PreconditionOutcome::PreconditionFailed;
        }
    } else if let Some(if_unmodified_since) = find(HeaderName::IF_UNMODIFIED_SINCE) {
        if !holds(if_unmodified_since) {
            return PreconditionOutcome::PreconditionFailed;
        }
    }

    if let Some(if_none_match) = find(HeaderName::IF_NONE_MATCH) {
        if !holds(if_none_match) {
            return if is_get_or_head {
                PreconditionOutcome::NotModified
            } else {
                PreconditionOutcome::PreconditionFailed
            };
        }
    } else if is_get_or_head {
        if let Some(if_modified_since) = find(HeaderName::IF_MODIFIED_SINCE) {
            if !holds(if_modified_since) {
                return PreconditionOutcome::NotModified;
            }
        }
    }

    if method == Method::Get && headers.contains(&HeaderName::RANGE) {
        if let Some(if_range) = find(HeaderName::IF_RANGE) {
            if !holds(if_range) {
                return PreconditionOutcome::IgnoreRange;
            }
        }
    }

    PreconditionOutcome::Proceed
}
