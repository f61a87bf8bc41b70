//! HTTP authentication.
//!
//! Only the "Basic" scheme, RFC 7617, is supported.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::cmp_lower_case;
use crate::header::FieldValue;

/// Credentials of the "Basic" authentication scheme.
///
/// # Notes
///
/// The [`fmt::Debug`] implementation doesn't print the password.
///
/// # Examples
///
/// ```
/// use http_semantics::BasicCredentials;
///
/// let credentials = BasicCredentials::new("Aladdin", "open sesame");
/// let value = credentials.to_field_value();
/// assert_eq!(value, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
/// assert_eq!(BasicCredentials::parse(value.as_str()), Some(credentials));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    /// User-id, can't contain a colon.
    pub user_id: String,
    /// Password, may contain colons.
    pub password: String,
}

impl BasicCredentials {
    /// Create new credentials.
    ///
    /// # Notes
    ///
    /// `user_id` MUST NOT contain a colon, it can't be parsed back otherwise.
    pub fn new<U, P>(user_id: U, password: P) -> BasicCredentials
    where
        U: Into<String>,
        P: Into<String>,
    {
        BasicCredentials {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    /// Parse the value of an `Authorization` header.
    ///
    /// The scheme name is case-insensitive. Returns `None` if the scheme is
    /// not "Basic", the credentials are not valid base64 or UTF-8, or don't
    /// contain a colon.
    pub fn parse(value: &str) -> Option<BasicCredentials> {
        let (scheme, token) = value.trim().split_once(' ')?;
        if !cmp_lower_case("basic", scheme) {
            return None;
        }
        let decoded = match STANDARD.decode(token.trim()) {
            Ok(decoded) => decoded,
            Err(err) => {
                log::debug!("invalid base64 in Basic credentials: {err}");
                return None;
            }
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            log::debug!("Basic credentials are not valid UTF-8");
            return None;
        };
        let (user_id, password) = decoded.split_once(':')?;
        Some(BasicCredentials::new(user_id, password))
    }

    /// Returns the credentials as value for the `Authorization` header,
    /// `Basic <base64(user-id:password)>`.
    pub fn to_field_value(&self) -> FieldValue {
        let mut value = String::from("Basic ");
        STANDARD.encode_string(format!("{}:{}", self.user_id, self.password), &mut value);
        // Base64 never contains CR or LF.
        FieldValue::unchecked(value)
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .finish()
    }
}
