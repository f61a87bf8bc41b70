//! Header related types.
//!
//! This module has four main types:
//!  * [`Headers`] is an ordered multimap of header fields,
//!  * [`HeaderField`] is a single header field,
//!  * [`HeaderName`] is the name of a header field, and finally
//!  * [`FieldValue`] is a header field value that can safely be written.
//!
//! A list of registered headers is available as constants on [`HeaderName`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::time::SystemTime;
use std::{fmt, slice, str, vec};

use httpdate::parse_http_date;

/// Header field value.
///
/// A `FieldValue` never contains a carriage return (`\r`) or line feed (`\n`),
/// which would allow a value to inject additional header fields (or a body)
/// into a message.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldValue {
    inner: Cow<'static, str>,
}

impl FieldValue {
    /// Create a new `FieldValue`, validating that `value` does not contain CR
    /// or LF characters.
    pub fn validate<V>(value: V) -> Result<FieldValue, InvalidFieldValue>
    where
        V: Into<Cow<'static, str>>,
    {
        let value = value.into();
        let reason = if value.contains('\r') {
            FieldValueError::ContainsCr
        } else if value.contains('\n') {
            FieldValueError::ContainsLf
        } else {
            return Ok(FieldValue { inner: value });
        };
        log::debug!("rejecting header field value: {reason}");
        Err(InvalidFieldValue {
            value: value.into_owned(),
            reason,
        })
    }

    /// Create a new `FieldValue` without validating it.
    ///
    /// # Notes
    ///
    /// This trusts the caller to ensure `value` does not contain CR or LF
    /// characters. It is meant for values known to be safe, such as the output
    /// of the formatting functions in this crate. For any value coming from
    /// outside the program use [`FieldValue::validate`].
    pub fn unchecked<V>(value: V) -> FieldValue
    where
        V: Into<Cow<'static, str>>,
    {
        FieldValue {
            inner: value.into(),
        }
    }

    /// Create a new `FieldValue` from a static string.
    ///
    /// # Panics
    ///
    /// Panics if `value` contains CR or LF.
    pub const fn from_static(value: &'static str) -> FieldValue {
        let bytes = value.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                bytes[i] != b'\r' && bytes[i] != b'\n',
                "header field value contains CR or LF"
            );
            i += 1;
        }
        FieldValue {
            inner: Cow::Borrowed(value),
        }
    }

    /// Returns the value as string.
    pub fn as_str(&self) -> &str {
        self.inner.as_ref()
    }

    /// Parse the value using `T`'s [`FromHeaderValue`] implementation.
    pub fn parse<'a, T>(&'a self) -> Result<T, T::Err>
    where
        T: FromHeaderValue<'a>,
    {
        T::from_bytes(self.as_str().as_bytes())
    }
}

impl AsRef<str> for FieldValue {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for FieldValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&'_ str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a value was rejected by [`FieldValue::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldValueError {
    /// Value contains a carriage return (`\r`).
    ContainsCr,
    /// Value contains a line feed (`\n`).
    ContainsLf,
}

impl fmt::Display for FieldValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldValueError::ContainsCr => "contains CR",
            FieldValueError::ContainsLf => "contains LF",
        })
    }
}

/// Error returned by [`FieldValue::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidFieldValue {
    /// The rejected value.
    pub value: String,
    /// Why it was rejected.
    pub reason: FieldValueError,
}

impl fmt::Display for InvalidFieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid header field value {:?}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidFieldValue {}

/// HTTP header field name.
///
/// Names are compared and hashed case-insensitively, but keep the casing they
/// were created with for display.
#[derive(Clone)]
pub struct HeaderName {
    inner: Cow<'static, str>,
}

/// Macro to create the [`HeaderName`] constants and the table of standard
/// names.
macro_rules! known_headers {
    ($(
        $(#[$meta: meta])* ( $const_name: ident, $http_name: expr ) $(,)?
    )+) => {
        $(
            $( #[$meta] )*
            pub const $const_name: HeaderName = HeaderName::from_static($http_name);
        )+

        /// All names defined as constants.
        const STANDARD: &'static [&'static str] = &[
            $( $http_name ),+
        ];
    }
}

impl HeaderName {
    // NOTE: when adding here also add to the
    // `functional::header::standard_names` test.
    known_headers!(
        #[doc = "Accept.\n\nRFC 9110 section 12.5.1."]
        (ACCEPT, "Accept"),
        #[doc = "Accept-Charset.\n\nRFC 9110 section 12.5.2."]
        (ACCEPT_CHARSET, "Accept-Charset"),
        #[doc = "Accept-Encoding.\n\nRFC 9110 section 12.5.3."]
        (ACCEPT_ENCODING, "Accept-Encoding"),
        #[doc = "Accept-Language.\n\nRFC 9110 section 12.5.4."]
        (ACCEPT_LANGUAGE, "Accept-Language"),
        #[doc = "Accept-Ranges.\n\nRFC 9110 section 14.3."]
        (ACCEPT_RANGES, "Accept-Ranges"),
        #[doc = "Age.\n\nRFC 9111 section 5.1."]
        (AGE, "Age"),
        #[doc = "Allow.\n\nRFC 9110 section 10.2.1."]
        (ALLOW, "Allow"),
        #[doc = "Authorization.\n\nRFC 9110 section 11.6.2."]
        (AUTHORIZATION, "Authorization"),
        #[doc = "Cache-Control.\n\nRFC 9111 section 5.2."]
        (CACHE_CONTROL, "Cache-Control"),
        #[doc = "Connection.\n\nRFC 9110 section 7.6.1."]
        (CONNECTION, "Connection"),
        #[doc = "Content-Encoding.\n\nRFC 9110 section 8.4."]
        (CONTENT_ENCODING, "Content-Encoding"),
        #[doc = "Content-Language.\n\nRFC 9110 section 8.5."]
        (CONTENT_LANGUAGE, "Content-Language"),
        #[doc = "Content-Length.\n\nRFC 9110 section 8.6."]
        (CONTENT_LENGTH, "Content-Length"),
        #[doc = "Content-Location.\n\nRFC 9110 section 8.7."]
        (CONTENT_LOCATION, "Content-Location"),
        #[doc = "Content-Range.\n\nRFC 9110 section 14.4."]
        (CONTENT_RANGE, "Content-Range"),
        #[doc = "Content-Type.\n\nRFC 9110 section 8.3."]
        (CONTENT_TYPE, "Content-Type"),
        #[doc = "Date.\n\nRFC 9110 section 6.6.1."]
        (DATE, "Date"),
        #[doc = "ETag.\n\nRFC 9110 section 8.8.3."]
        (ETAG, "ETag"),
        #[doc = "Expect.\n\nRFC 9110 section 10.1.1."]
        (EXPECT, "Expect"),
        #[doc = "Expires.\n\nRFC 9111 section 5.3."]
        (EXPIRES, "Expires"),
        #[doc = "From.\n\nRFC 9110 section 10.1.2."]
        (FROM, "From"),
        #[doc = "Host.\n\nRFC 9110 section 7.2."]
        (HOST, "Host"),
        #[doc = "If-Match.\n\nRFC 9110 section 13.1.1."]
        (IF_MATCH, "If-Match"),
        #[doc = "If-Modified-Since.\n\nRFC 9110 section 13.1.3."]
        (IF_MODIFIED_SINCE, "If-Modified-Since"),
        #[doc = "If-None-Match.\n\nRFC 9110 section 13.1.2."]
        (IF_NONE_MATCH, "If-None-Match"),
        #[doc = "If-Range.\n\nRFC 9110 section 13.1.5."]
        (IF_RANGE, "If-Range"),
        #[doc = "If-Unmodified-Since.\n\nRFC 9110 section 13.1.4."]
        (IF_UNMODIFIED_SINCE, "If-Unmodified-Since"),
        #[doc = "Last-Modified.\n\nRFC 9110 section 8.8.2."]
        (LAST_MODIFIED, "Last-Modified"),
        #[doc = "Location.\n\nRFC 9110 section 10.2.2."]
        (LOCATION, "Location"),
        #[doc = "Max-Forwards.\n\nRFC 9110 section 7.6.2."]
        (MAX_FORWARDS, "Max-Forwards"),
        #[doc = "Proxy-Authenticate.\n\nRFC 9110 section 11.7.1."]
        (PROXY_AUTHENTICATE, "Proxy-Authenticate"),
        #[doc = "Proxy-Authorization.\n\nRFC 9110 section 11.7.2."]
        (PROXY_AUTHORIZATION, "Proxy-Authorization"),
        #[doc = "Range.\n\nRFC 9110 section 14.2."]
        (RANGE, "Range"),
        #[doc = "Referer.\n\nRFC 9110 section 10.1.3."]
        (REFERER, "Referer"),
        #[doc = "Retry-After.\n\nRFC 9110 section 10.2.3."]
        (RETRY_AFTER, "Retry-After"),
        #[doc = "Server.\n\nRFC 9110 section 10.2.4."]
        (SERVER, "Server"),
        #[doc = "TE.\n\nRFC 9110 section 10.1.4."]
        (TE, "TE"),
        #[doc = "Trailer.\n\nRFC 9110 section 6.6.2."]
        (TRAILER, "Trailer"),
        #[doc = "Upgrade.\n\nRFC 9110 section 7.8."]
        (UPGRADE, "Upgrade"),
        #[doc = "User-Agent.\n\nRFC 9110 section 10.1.5."]
        (USER_AGENT, "User-Agent"),
        #[doc = "Vary.\n\nRFC 9110 section 12.5.5."]
        (VARY, "Vary"),
        #[doc = "Via.\n\nRFC 9110 section 7.6.3."]
        (VIA, "Via"),
        #[doc = "WWW-Authenticate.\n\nRFC 9110 section 11.6.1."]
        (WWW_AUTHENTICATE, "WWW-Authenticate"),
    );

    /// Create a new `HeaderName` from a static string.
    pub const fn from_static(name: &'static str) -> HeaderName {
        HeaderName {
            inner: Cow::Borrowed(name),
        }
    }

    /// Returns the name with its original casing.
    pub fn as_str(&self) -> &str {
        self.inner.as_ref()
    }

    /// Returns `true` if this is one of the names defined as constant on
    /// `HeaderName`, compared case-insensitively.
    pub fn is_standard(&self) -> bool {
        let name = self.as_str();
        HeaderName::STANDARD
            .iter()
            .any(|standard| standard.eq_ignore_ascii_case(name))
    }

    /// Returns the lowercase version of the name, used as key in [`Headers`].
    fn key(&self) -> Cow<'_, str> {
        let name = self.as_str();
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(name.to_ascii_lowercase())
        } else {
            Cow::Borrowed(name)
        }
    }
}

impl From<String> for HeaderName {
    fn from(name: String) -> HeaderName {
        HeaderName {
            inner: Cow::Owned(name),
        }
    }
}

impl From<&'static str> for HeaderName {
    fn from(name: &'static str) -> HeaderName {
        HeaderName::from_static(name)
    }
}

impl AsRef<str> for HeaderName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Eq for HeaderName {}

impl PartialEq for HeaderName {
    fn eq(&self, other: &HeaderName) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl PartialEq<str> for HeaderName {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&'_ str> for HeaderName {
    fn eq(&self, other: &&str) -> bool {
        self.eq(*other)
    }
}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.as_str().bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        // Same terminator as `str`'s `Hash` implementation.
        state.write_u8(0xff);
    }
}

impl fmt::Debug for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP header field, a name and value pair.
///
/// RFC 9110 section 5.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderField {
    name: HeaderName,
    value: FieldValue,
}

impl HeaderField {
    /// Create a new `HeaderField`.
    pub const fn new(name: HeaderName, value: FieldValue) -> HeaderField {
        HeaderField { name, value }
    }

    /// Returns the name of the field.
    pub const fn name(&self) -> &HeaderName {
        &self.name
    }

    /// Returns the value of the field.
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Returns the name and value.
    pub fn into_parts(self) -> (HeaderName, FieldValue) {
        (self.name, self.value)
    }
}

/// Ordered, case-insensitive multimap of header fields.
///
/// Names are kept in the order they were first added, the values of a single
/// name in the order they were appended. Iterating yields every value as a
/// separate field in that (name, value) order, which is the order in which
/// the fields would be written.
///
/// [`Headers::len`] returns the number of distinct names.
#[derive(Clone, Default)]
pub struct Headers {
    /// Distinct names, in first-seen order and casing.
    names: Vec<HeaderName>,
    /// Lowercase name -> values.
    values: HashMap<String, Vec<FieldValue>>,
}

impl Headers {
    /// Create an empty list of headers.
    pub fn new() -> Headers {
        Headers::default()
    }

    /// Returns the number of distinct header names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns the total number of values, i.e. the number of fields.
    pub fn len_values(&self) -> usize {
        self.values.values().map(Vec::len).sum()
    }

    /// Returns `true` if this is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Clear the headers.
    pub fn clear(&mut self) {
        self.names.clear();
        self.values.clear();
    }

    /// Append a `field`.
    ///
    /// If a field with the same name (case-insensitively) already exists the
    /// value is added after the existing values, otherwise the name is added
    /// after all existing names.
    pub fn append(&mut self, field: HeaderField) {
        let (name, value) = field.into_parts();
        let key = name.key();
        if let Some(values) = self.values.get_mut(key.as_ref()) {
            values.push(value);
            return;
        }
        let key = key.into_owned();
        self.names.push(name);
        let _ = self.values.insert(key, vec![value]);
    }

    /// Insert `field`, removing all existing values with the same name.
    ///
    /// If the name was already present it keeps its position.
    pub fn insert(&mut self, field: HeaderField) {
        let (name, value) = field.into_parts();
        let key = name.key();
        if let Some(values) = self.values.get_mut(key.as_ref()) {
            values.clear();
            values.push(value);
            return;
        }
        let key = key.into_owned();
        self.names.push(name);
        let _ = self.values.insert(key, vec![value]);
    }

    /// Remove all values with `name`.
    ///
    /// Does nothing if `name` is not present.
    pub fn remove_all(&mut self, name: &HeaderName) {
        if self.values.remove(name.key().as_ref()).is_some() {
            self.names.retain(|n| n != name);
        }
    }

    /// Returns all values for `name`, if any.
    pub fn lookup(&self, name: &HeaderName) -> Option<&[FieldValue]> {
        self.values.get(name.key().as_ref()).map(Vec::as_slice)
    }

    /// Returns `true` if a field with `name` is present.
    pub fn contains(&self, name: &HeaderName) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns the first value for `name`, if any.
    pub fn first(&self, name: &HeaderName) -> Option<&FieldValue> {
        self.lookup(name).and_then(<[FieldValue]>::first)
    }

    /// Returns all values for `name`, empty if `name` is not present.
    pub fn values(&self, name: &HeaderName) -> &[FieldValue] {
        self.lookup(name).unwrap_or(&[])
    }

    /// Returns all values for `name` combined into a single value, separated
    /// by a comma.
    ///
    /// This is only valid for fields defined as a list, see RFC 9110 section
    /// 5.3.
    pub fn combined(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        match self.lookup(name)? {
            [] => None,
            [value] => Some(Cow::Borrowed(value.as_str())),
            values => {
                let values: Vec<&str> = values.iter().map(FieldValue::as_str).collect();
                Some(Cow::Owned(values.join(", ")))
            }
        }
    }

    /// Get the first value of `name` parsed as `T`, if any.
    ///
    /// This returns `Ok(None)` if there is no header with `name` and `Err(..)`
    /// in case [`FromHeaderValue`] for `T` returns an error.
    pub fn get_value<'a, T>(&'a self, name: &HeaderName) -> Result<Option<T>, T::Err>
    where
        T: FromHeaderValue<'a>,
    {
        match self.first(name) {
            Some(value) => value.parse().map(Some),
            None => Ok(None),
        }
    }

    /// Returns an iterator over all fields as borrowed name and value pairs.
    ///
    /// See [`Headers::fields`] to iterate over [`HeaderField`]s.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            headers: self,
            names: self.names.iter(),
            current: None,
        }
    }

    /// Returns an iterator over all fields as [`HeaderField`]s, in the same
    /// order as [`Headers::iter`].
    pub fn fields(&self) -> Fields<'_> {
        Fields { iter: self.iter() }
    }

    /// Returns an iterator over all distinct names, in insertion order.
    pub fn names(&self) -> Names<'_> {
        Names {
            names: self.names.iter(),
        }
    }
}

impl PartialEq for Headers {
    fn eq(&self, other: &Headers) -> bool {
        // Order of the names is not part of the identity.
        self.values == other.values
    }
}

impl Eq for Headers {}

impl From<HeaderField> for Headers {
    fn from(field: HeaderField) -> Headers {
        let mut headers = Headers::new();
        headers.append(field);
        headers
    }
}

impl<const N: usize> From<[HeaderField; N]> for Headers {
    fn from(fields: [HeaderField; N]) -> Headers {
        fields.into_iter().collect()
    }
}

impl FromIterator<HeaderField> for Headers {
    fn from_iter<I>(iter: I) -> Headers
    where
        I: IntoIterator<Item = HeaderField>,
    {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

impl Extend<HeaderField> for Headers {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = HeaderField>,
    {
        for field in iter {
            self.append(field);
        }
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a HeaderName, &'a FieldValue);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Headers {
    type Item = HeaderField;

    type IntoIter = IntoIter;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut fields = Vec::with_capacity(self.len_values());
        for name in self.names {
            let values = self.values.remove(name.key().as_ref()).unwrap_or_default();
            for value in values {
                fields.push(HeaderField::new(name.clone(), value));
            }
        }
        IntoIter {
            fields: fields.into_iter(),
        }
    }
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator for [`Headers`], see [`Headers::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    headers: &'a Headers,
    names: slice::Iter<'a, HeaderName>,
    current: Option<(&'a HeaderName, slice::Iter<'a, FieldValue>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a FieldValue);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((name, values)) = &mut self.current {
                if let Some(value) = values.next() {
                    return Some((*name, value));
                }
            }
            let name = self.names.next()?;
            let values = self.headers.values(name);
            self.current = Some((name, values.iter()));
        }
    }
}

impl<'a> FusedIterator for Iter<'a> {}

/// Iterator for [`Headers`]'s fields, see [`Headers::fields`].
#[derive(Debug)]
pub struct Fields<'a> {
    iter: Iter<'a>,
}

impl<'a> Iterator for Fields<'a> {
    type Item = HeaderField;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(name, value)| HeaderField::new(name.clone(), value.clone()))
    }
}

impl<'a> FusedIterator for Fields<'a> {}

/// Iterator for [`Headers`]'s names, see [`Headers::names`].
#[derive(Debug)]
pub struct Names<'a> {
    names: slice::Iter<'a, HeaderName>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a HeaderName;

    fn next(&mut self) -> Option<Self::Item> {
        self.names.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl<'a> ExactSizeIterator for Names<'a> {}

impl<'a> FusedIterator for Names<'a> {}

/// Owned iterator for [`Headers`].
#[derive(Debug)]
pub struct IntoIter {
    fields: vec::IntoIter<HeaderField>,
}

impl Iterator for IntoIter {
    type Item = HeaderField;

    fn next(&mut self) -> Option<Self::Item> {
        self.fields.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.fields.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

/// Analogous trait to [`FromStr`].
///
/// The main use case for this trait is [`FieldValue::parse`] and
/// [`Headers::get_value`].
///
/// [`FromStr`]: std::str::FromStr
pub trait FromHeaderValue<'a>: Sized {
    /// Error returned by parsing the bytes.
    type Err;

    /// Parse the `value`.
    fn from_bytes(value: &'a [u8]) -> Result<Self, Self::Err>;
}

/// Error returned by the [`FromHeaderValue`] implementation for numbers, e.g.
/// `usize`.
#[derive(Debug)]
pub struct ParseIntError;

impl fmt::Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid integer")
    }
}

impl std::error::Error for ParseIntError {}

macro_rules! int_impl {
    ($( $ty: ty ),+) => {
        $(
        impl FromHeaderValue<'_> for $ty {
            type Err = ParseIntError;

            fn from_bytes(src: &[u8]) -> Result<Self, Self::Err> {
                if src.is_empty() {
                    return Err(ParseIntError);
                }

                let zero: $ty = 0;
                src.iter().try_fold(zero, |value, b| {
                    if !b.is_ascii_digit() {
                        return Err(ParseIntError);
                    }
                    value
                        .checked_mul(10)
                        .and_then(|value| value.checked_add(<$ty>::from(b - b'0')))
                        .ok_or(ParseIntError)
                })
            }
        }
        )+
    };
}

int_impl!(u8, u16, u32, u64, usize);

impl<'a> FromHeaderValue<'a> for &'a str {
    type Err = str::Utf8Error;

    fn from_bytes(value: &'a [u8]) -> Result<Self, Self::Err> {
        str::from_utf8(value)
    }
}

/// Error returned by the [`FromHeaderValue`] implementation for [`SystemTime`].
#[derive(Debug)]
pub struct ParseTimeError;

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid time")
    }
}

impl std::error::Error for ParseTimeError {}

/// Parses the value following RFC 9110 section 5.6.7, accepting the
/// IMF-fixdate, RFC 850 and asctime formats.
impl FromHeaderValue<'_> for SystemTime {
    type Err = ParseTimeError;

    fn from_bytes(value: &[u8]) -> Result<Self, Self::Err> {
        let value = str::from_utf8(value).map_err(|_| ParseTimeError)?;
        parse_http_date(value).map_err(|_| ParseTimeError)
    }
}

/// Format `time` as IMF-fixdate, e.g. for the `Last-Modified` header.
pub fn format_date(time: SystemTime) -> FieldValue {
    FieldValue::unchecked(httpdate::fmt_http_date(time))
}
