//! Media type related types.
//!
//! RFC 9110 section 8.3.1.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::header::FieldValue;
use crate::{is_tchar, is_token, split_unquoted, unquote};

/// Media type, e.g. `text/html; charset=utf-8`.
///
/// The type, subtype and parameter names are stored in lowercase. Parameters
/// are metadata: two media types are equal (and hash the same) if their type
/// and subtype are equal, regardless of their parameters.
#[derive(Clone)]
pub struct MediaType {
    type_: Cow<'static, str>,
    subtype: Cow<'static, str>,
    /// Sorted by name, so formatting is deterministic.
    params: BTreeMap<String, String>,
}

/// How specific a media type (range) is.
///
/// Ordered from least to most specific.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specificity {
    /// `*/*`.
    Any,
    /// `type/*`.
    AnySubtype,
    /// `type/subtype`.
    Exact,
}

macro_rules! known_media_types {
    ($(
        $(#[$meta: meta])* ( $const_name: ident, $type_: expr, $subtype: expr ) $(,)?
    )+) => {
        $(
            $( #[$meta] )*
            pub const $const_name: MediaType = MediaType::from_static($type_, $subtype);
        )+
    }
}

impl MediaType {
    known_media_types!(
        #[doc = "`*/*`, matches all media types."]
        (ANY, "*", "*"),
        #[doc = "`application/json`."]
        (APPLICATION_JSON, "application", "json"),
        #[doc = "`application/octet-stream`."]
        (APPLICATION_OCTET_STREAM, "application", "octet-stream"),
        #[doc = "`application/problem+json`, RFC 9457."]
        (APPLICATION_PROBLEM_JSON, "application", "problem+json"),
        #[doc = "`application/x-www-form-urlencoded`."]
        (APPLICATION_WWW_FORM_URLENCODED, "application", "x-www-form-urlencoded"),
        #[doc = "`application/xml`."]
        (APPLICATION_XML, "application", "xml"),
        #[doc = "`image/png`."]
        (IMAGE_PNG, "image", "png"),
        #[doc = "`multipart/form-data`."]
        (MULTIPART_FORM_DATA, "multipart", "form-data"),
        #[doc = "`text/css`."]
        (TEXT_CSS, "text", "css"),
        #[doc = "`text/csv`."]
        (TEXT_CSV, "text", "csv"),
        #[doc = "`text/html`."]
        (TEXT_HTML, "text", "html"),
        #[doc = "`text/javascript`."]
        (TEXT_JAVASCRIPT, "text", "javascript"),
        #[doc = "`text/plain`."]
        (TEXT_PLAIN, "text", "plain"),
    );

    /// Create a new `MediaType` without parameters.
    ///
    /// # Panics
    ///
    /// Panics if `type_` or `subtype` are empty or not lowercase.
    pub const fn from_static(type_: &'static str, subtype: &'static str) -> MediaType {
        assert!(is_lower_case_token(type_), "media type not a lowercase token");
        assert!(is_lower_case_token(subtype), "media subtype not a lowercase token");
        MediaType {
            type_: Cow::Borrowed(type_),
            subtype: Cow::Borrowed(subtype),
            params: BTreeMap::new(),
        }
    }

    /// Parse a media type.
    ///
    /// Accepts `type "/" subtype *( OWS ";" OWS parameter )`, the type and
    /// subtype are lowercased, as are the parameter names. Quoted parameter
    /// values are unquoted. Returns `None` if there is no `/`, or the type or
    /// subtype is not a token.
    ///
    /// Parameters without a `=`, with a name that is not a token or with an
    /// unterminated quoted value are ignored. If a parameter is given multiple times the last one is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_semantics::MediaType;
    ///
    /// let media_type = MediaType::parse("Text/HTML; Charset=\"utf-8\"").unwrap();
    /// assert_eq!(media_type, MediaType::TEXT_HTML);
    /// assert_eq!(media_type.param("charset"), Some("utf-8"));
    /// assert!(MediaType::parse("text").is_none());
    /// ```
    pub fn parse(value: &str) -> Option<MediaType> {
        let mut parts = split_unquoted(value, b';');
        let essence = parts.next()?.trim();
        let (type_, subtype) = essence.split_once('/')?;
        let (type_, subtype) = (type_.trim(), subtype.trim());
        if !is_token(type_) || !is_token(subtype) {
            return None;
        }

        let mut params = BTreeMap::new();
        for param in parts {
            let Some((name, value)) = param.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if !is_token(name) {
                log::trace!("ignoring media type parameter with invalid name: {name:?}");
                continue;
            }
            let Some(value) = unquote(value.trim()) else {
                log::trace!("ignoring media type parameter with unterminated quoted value: {name}");
                continue;
            };
            let _ = params.insert(name.to_ascii_lowercase(), value.into_owned());
        }

        Some(MediaType {
            type_: Cow::Owned(type_.to_ascii_lowercase()),
            subtype: Cow::Owned(subtype.to_ascii_lowercase()),
            params,
        })
    }

    /// Returns the type, e.g. `text` in `text/html`.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Returns the subtype, e.g. `html` in `text/html`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Returns the value of the parameter `name`, if any.
    ///
    /// `name` is compared case-insensitively.
    pub fn param(&self, name: &str) -> Option<&str> {
        match self.params.get(name) {
            Some(value) => Some(value.as_str()),
            None => self
                .params
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str()),
        }
    }

    /// Returns all parameters, sorted by name.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Set parameter `name` to `value`.
    pub fn with_param<N, V>(mut self, name: N, value: V) -> MediaType
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut name = name.into();
        name.make_ascii_lowercase();
        let _ = self.params.insert(name, value.into());
        self
    }

    /// Returns the media type without parameters.
    pub fn without_params(&self) -> MediaType {
        MediaType {
            type_: self.type_.clone(),
            subtype: self.subtype.clone(),
            params: BTreeMap::new(),
        }
    }

    /// Returns `true` if the type or subtype is a wildcard (`*`).
    pub fn is_wildcard(&self) -> bool {
        self.specificity() != Specificity::Exact
    }

    /// Returns how specific this media type (range) is.
    ///
    /// `*/subtype` is not valid, but if parsed it's considered as specific as
    /// `*/*`.
    pub fn specificity(&self) -> Specificity {
        match (&*self.type_, &*self.subtype) {
            ("*", _) => Specificity::Any,
            (_, "*") => Specificity::AnySubtype,
            (_, _) => Specificity::Exact,
        }
    }

    /// Returns `true` if `self` matches the media range `pattern`.
    ///
    /// `*/*` matches everything, `type/*` matches all subtypes of `type`, all
    /// other patterns need the type and subtype to be equal. Parameters are
    /// ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_semantics::MediaType;
    ///
    /// let text_star = MediaType::parse("text/*").unwrap();
    /// assert!(MediaType::TEXT_HTML.matches(&text_star));
    /// assert!(MediaType::TEXT_HTML.matches(&MediaType::ANY));
    /// assert!(!MediaType::APPLICATION_JSON.matches(&text_star));
    /// ```
    pub fn matches(&self, pattern: &MediaType) -> bool {
        match pattern.specificity() {
            Specificity::Any => true,
            Specificity::AnySubtype => self.type_ == pattern.type_,
            Specificity::Exact => self == pattern,
        }
    }

    /// Returns the formatted media type as header field value.
    ///
    /// CR and LF can only be introduced by [`MediaType::with_param`], they're
    /// removed from the formatted value.
    pub fn to_field_value(&self) -> FieldValue {
        let mut value = self.to_string();
        if value.contains(['\r', '\n']) {
            value.retain(|c| !matches!(c, '\r' | '\n'));
        }
        FieldValue::unchecked(value)
    }
}

/// Returns `true` if `value` is a non-empty token without uppercase letters.
const fn is_lower_case_token(value: &str) -> bool {
    let value = value.as_bytes();
    if value.is_empty() {
        return false;
    }
    let mut i = 0;
    while i < value.len() {
        if !is_tchar(value[i]) || value[i].is_ascii_uppercase() {
            return false;
        }
        i += 1;
    }
    true
}

impl AsRef<MediaType> for MediaType {
    fn as_ref(&self) -> &MediaType {
        self
    }
}

impl Eq for MediaType {}

impl PartialEq for MediaType {
    fn eq(&self, other: &MediaType) -> bool {
        self.type_ == other.type_ && self.subtype == other.subtype
    }
}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_.hash(state);
        self.subtype.hash(state);
    }
}

/// Formats `type/subtype`, followed by `; name=value` for each parameter
/// sorted by name. Values that are not tokens are quoted.
impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        for (name, value) in &self.params {
            write!(f, "; {name}=")?;
            if is_token(value) {
                f.write_str(value)?;
            } else {
                f.write_str("\"")?;
                for c in value.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("\"")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MediaType(\"{self}\")")
    }
}
