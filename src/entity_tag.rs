//! Entity tags.
//!
//! RFC 9110 section 8.8.3.

use std::borrow::Cow;
use std::fmt;

use crate::header::FieldValue;

/// Entity tag, an opaque validator of a representation.
///
/// Two entity tags are equal if both their value and weakness are equal, use
/// [`EntityTag::strong_compare`] and [`EntityTag::weak_compare`] to compare
/// tags as validators.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EntityTag {
    value: Cow<'static, str>,
    weak: bool,
    /// `*`, only used in `If-Match` and `If-None-Match`.
    any: bool,
}

impl EntityTag {
    /// The `*` wildcard, matching any current entity tag in the `If-Match`
    /// and `If-None-Match` headers.
    ///
    /// This is not a valid entity tag for use in the `ETag` header.
    pub const ANY: EntityTag = EntityTag {
        value: Cow::Borrowed("*"),
        weak: false,
        any: true,
    };

    /// Create a new strong entity tag.
    ///
    /// # Notes
    ///
    /// `value` MUST only contain `etagc` characters, i.e. no double quotes,
    /// spaces or control characters. This is checked in debug builds only,
    /// use [`EntityTag::parse`] for values that are not known to be valid.
    pub fn strong<V>(value: V) -> EntityTag
    where
        V: Into<Cow<'static, str>>,
    {
        EntityTag::new(value.into(), false)
    }

    /// Create a new weak entity tag.
    ///
    /// See [`EntityTag::strong`] for the requirements of `value`.
    pub fn weak<V>(value: V) -> EntityTag
    where
        V: Into<Cow<'static, str>>,
    {
        EntityTag::new(value.into(), true)
    }

    fn new(value: Cow<'static, str>, weak: bool) -> EntityTag {
        debug_assert!(is_opaque_tag(&value), "entity tag contains invalid characters");
        EntityTag {
            value,
            weak,
            any: false,
        }
    }

    /// Parse an entity tag.
    ///
    /// Accepts exactly `"value"` (strong) or `W/"value"` (weak), returns `None`
    /// for anything else, including `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_semantics::EntityTag;
    ///
    /// let tag = EntityTag::parse("W/\"abc\"").unwrap();
    /// assert!(tag.is_weak());
    /// assert_eq!(tag.value(), "abc");
    /// assert!(EntityTag::parse("abc").is_none());
    /// ```
    pub fn parse(value: &str) -> Option<EntityTag> {
        let (weak, opaque) = match value.strip_prefix("W/") {
            Some(opaque) => (true, opaque),
            None => (false, value),
        };
        let tag = opaque.strip_prefix('"')?.strip_suffix('"')?;
        if !is_opaque_tag(tag) {
            return None;
        }
        Some(EntityTag {
            value: Cow::Owned(tag.to_owned()),
            weak,
            any: false,
        })
    }

    /// Parse a list of entity tags, as used in the `If-Match` and
    /// `If-None-Match` headers.
    ///
    /// A value of `*` returns [`EntityTag::ANY`]. Malformed tags in the list
    /// are skipped, if no valid tags remain this returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use http_semantics::EntityTag;
    ///
    /// let tags = EntityTag::parse_list("\"a\", W/\"b\"").unwrap();
    /// assert_eq!(tags, [EntityTag::strong("a"), EntityTag::weak("b")]);
    /// assert_eq!(EntityTag::parse_list("*").unwrap(), [EntityTag::ANY]);
    /// ```
    pub fn parse_list(value: &str) -> Option<Vec<EntityTag>> {
        let value = value.trim();
        if value == "*" {
            return Some(vec![EntityTag::ANY]);
        }

        let tags: Vec<EntityTag> = split_list(value)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .filter_map(|tag| {
                let parsed = EntityTag::parse(tag);
                if parsed.is_none() {
                    log::debug!("skipping invalid entity tag: {tag:?}");
                }
                parsed
            })
            .collect();
        (!tags.is_empty()).then_some(tags)
    }

    /// Returns the opaque value, without quotes.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if this is a weak validator.
    pub const fn is_weak(&self) -> bool {
        self.weak
    }

    /// Returns `true` if this is the `*` wildcard.
    pub const fn is_any(&self) -> bool {
        self.any
    }

    /// Strong comparison, RFC 9110 section 8.8.3.2.
    ///
    /// Returns `true` if neither tag is weak and the values are equal.
    pub fn strong_compare(&self, other: &EntityTag) -> bool {
        !self.weak && !other.weak && self.value == other.value
    }

    /// Weak comparison, RFC 9110 section 8.8.3.2.
    ///
    /// Returns `true` if the values are equal, regardless of either tag being
    /// weak.
    pub fn weak_compare(&self, other: &EntityTag) -> bool {
        self.value == other.value
    }

    /// Returns the formatted entity tag as header field value.
    ///
    /// CR and LF in a tag created with [`EntityTag::strong`] or
    /// [`EntityTag::weak`] are removed.
    pub fn to_field_value(&self) -> FieldValue {
        let mut value = self.to_string();
        if value.contains(['\r', '\n']) {
            log::debug!("removing CR/LF from entity tag: {value:?}");
            value.retain(|c| !matches!(c, '\r' | '\n'));
        }
        FieldValue::unchecked(value)
    }
}

/// Returns `true` if `value` only contains `etagc` characters.
fn is_opaque_tag(value: &str) -> bool {
    // etagc = %x21 / %x23-7E / obs-text
    value
        .bytes()
        .all(|b| b == 0x21 || (0x23..=0x7E).contains(&b) || b >= 0x80)
}

/// Splits a list of entity tags on the commas outside of the quotes.
///
/// Entity tags may contain commas and backslashes, but not quotes, so unlike
/// quoted strings there are no escapes to consider.
fn split_list(value: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(value);
    std::iter::from_fn(move || {
        let value = rest?;
        let mut quoted = false;
        for (i, b) in value.bytes().enumerate() {
            match b {
                b'"' => quoted = !quoted,
                b',' if !quoted => {
                    rest = Some(&value[i + 1..]);
                    return Some(&value[..i]);
                }
                _ => {}
            }
        }
        rest = None;
        Some(value)
    })
}

/// Formats the entity tag as `"value"` or `W/"value"`.
impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.any {
            f.write_str("*")
        } else if self.weak {
            write!(f, "W/\"{}\"", self.value)
        } else {
            write!(f, "\"{}\"", self.value)
        }
    }
}

impl fmt::Debug for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityTag({self})")
    }
}
