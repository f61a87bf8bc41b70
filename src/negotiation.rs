//! Proactive content negotiation based on the `Accept` header.
//!
//! RFC 9110 section 12.5.1.
//!
//! # Tie breaking
//!
//! Preferences are ordered by quality, then by specificity (`type/subtype`
//! before `type/*` before `*/*`). Preferences with equal quality and
//! specificity keep the order in which they appear in the header, all sorting
//! in this module is stable.
//!
//! [`select_one`] and [`select_all`] break ties differently:
//! * [`select_one`] walks the preferences in order and, for each, the
//!   available representations in order. The first match wins, so the client's
//!   order decides between equally weighted representations.
//! * [`select_all`] weights each available representation with the best
//!   matching preference and sorts on that weight. Representations with equal
//!   weight keep the order of `available`, so the server's order decides.

use std::cmp::Ordering;

use crate::media_type::MediaType;
use crate::quality::QualityValue;
use crate::{cmp_lower_case, split_unquoted, unquote};

/// A single media range from an `Accept` header with its weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaTypePreference {
    pattern: MediaType,
    quality: QualityValue,
}

impl MediaTypePreference {
    /// Create a new preference.
    pub const fn new(pattern: MediaType, quality: QualityValue) -> MediaTypePreference {
        MediaTypePreference { pattern, quality }
    }

    /// Returns the media range, which may contain wildcards.
    pub const fn pattern(&self) -> &MediaType {
        &self.pattern
    }

    /// Returns the quality.
    pub const fn quality(&self) -> QualityValue {
        self.quality
    }

    /// Returns `true` if `media_type` matches this preference's pattern.
    pub fn matches(&self, media_type: &MediaType) -> bool {
        media_type.matches(&self.pattern)
    }

    /// Order in which preferences should be considered, highest quality and
    /// most specific first.
    fn precedence(&self, other: &MediaTypePreference) -> Ordering {
        other.quality.cmp(&self.quality).then_with(|| {
            other
                .pattern
                .specificity()
                .cmp(&self.pattern.specificity())
        })
    }
}

/// Parse the preferences of an `Accept` header.
///
/// The header is split on `,`, each element into `;` separated parts. The
/// first part must be a valid media type, otherwise the element is dropped.
/// The `q` parameter of an element is used as its quality, if it's missing or
/// can't be parsed the quality is 1. Other parameters are kept on the media
/// type.
///
/// The returned preferences are sorted, see the [module documentation] for the
/// order.
///
/// [module documentation]: crate::negotiation
///
/// # Examples
///
/// ```
/// use http_semantics::negotiation::parse_preferences;
///
/// let preferences = parse_preferences("text/*;q=0.5, text/html, */*;q=0.1");
/// let patterns: Vec<String> = preferences.iter().map(|p| p.pattern().to_string()).collect();
/// assert_eq!(patterns, ["text/html", "text/*", "*/*"]);
/// ```
pub fn parse_preferences(header: &str) -> Vec<MediaTypePreference> {
    let mut preferences: Vec<MediaTypePreference> = split_unquoted(header, b',')
        .filter_map(parse_preference)
        .collect();
    preferences.sort_by(MediaTypePreference::precedence);
    preferences
}

fn parse_preference(element: &str) -> Option<MediaTypePreference> {
    if element.trim().is_empty() {
        // Empty list elements are allowed, RFC 9110 section 5.6.1.
        return None;
    }

    let mut parts = split_unquoted(element, b';');
    let Some(mut pattern) = parts.next().and_then(MediaType::parse) else {
        log::debug!("discarding invalid media range in Accept header: {element:?}");
        return None;
    };

    let mut quality = QualityValue::DEFAULT;
    for part in parts {
        let Some((name, value)) = part.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if cmp_lower_case("q", name) {
            quality = QualityValue::parse(value).unwrap_or_else(|| {
                log::trace!("invalid quality in Accept header, using default: {value:?}");
                QualityValue::DEFAULT
            });
            // Parameters after the weight are accept extensions, not media
            // type parameters.
            break;
        }
        match unquote(value.trim()) {
            Some(value) if !name.is_empty() => {
                pattern = pattern.with_param(name, value.into_owned());
            }
            _ => log::trace!("ignoring invalid media range parameter in Accept header: {part:?}"),
        }
    }

    Some(MediaTypePreference::new(pattern, quality))
}

/// Select the best representation from `available` for the `Accept` `header`.
///
/// For each preference, in the order of [`parse_preferences`], `available` is
/// scanned in order and the first representation matching the preference is
/// returned. Returns `None` if no preference matches any representation.
///
/// # Notes
///
/// A preference with quality zero still selects a matching representation
/// if no preference with a higher quality matches. Use [`select_all`] to
/// exclude representations the client marked as not acceptable.
///
/// # Examples
///
/// ```
/// use http_semantics::negotiation::select_one;
/// use http_semantics::MediaType;
///
/// let available = [MediaType::APPLICATION_JSON, MediaType::APPLICATION_XML];
/// let header = "application/xml;q=0.9, application/json;q=1.0";
/// assert_eq!(select_one(&available, header), Some(&MediaType::APPLICATION_JSON));
/// ```
pub fn select_one<'a, T>(available: &'a [T], header: &str) -> Option<&'a T>
where
    T: AsRef<MediaType>,
{
    parse_preferences(header).iter().find_map(|preference| {
        available
            .iter()
            .find(|candidate| preference.matches(candidate.as_ref()))
    })
}

/// Select all acceptable representations from `available` for the `Accept`
/// `header`, most preferred first.
///
/// Each representation is weighted with the highest quality of all
/// preferences that match it. Representations that no preference matches, or
/// with a weight of zero, are excluded. The remaining representations are
/// sorted by weight, keeping the order of `available` for equal weights.
///
/// # Examples
///
/// ```
/// use http_semantics::negotiation::select_all;
/// use http_semantics::MediaType;
///
/// let available = [MediaType::APPLICATION_JSON, MediaType::TEXT_HTML];
/// let header = "application/json;q=1.0, text/html;q=0";
/// assert_eq!(select_all(&available, header), [&MediaType::APPLICATION_JSON]);
/// ```
pub fn select_all<'a, T>(available: &'a [T], header: &str) -> Vec<&'a T>
where
    T: AsRef<MediaType>,
{
    let preferences = parse_preferences(header);
    let mut weighted: Vec<(&'a T, QualityValue)> = available
        .iter()
        .filter_map(|candidate| {
            let quality = preferences
                .iter()
                .filter(|preference| preference.matches(candidate.as_ref()))
                .map(MediaTypePreference::quality)
                .max()?;
            (!quality.is_zero()).then_some((candidate, quality))
        })
        .collect();
    // NOTE: `sort_by` is stable, keeping the order of `available`.
    weighted.sort_by(|(_, left), (_, right)| right.cmp(left));
    weighted.into_iter().map(|(candidate, _)| candidate).collect()
}
