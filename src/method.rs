//! Module with HTTP method related types.

use std::fmt;
use std::str::FromStr;

/// HTTP method.
///
/// RFC 9110 section 9.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method.
    ///
    /// RFC 9110 section 9.3.1.
    Get,
    /// HEAD method.
    ///
    /// RFC 9110 section 9.3.2.
    Head,
    /// POST method.
    ///
    /// RFC 9110 section 9.3.3.
    Post,
    /// PUT method.
    ///
    /// RFC 9110 section 9.3.4.
    Put,
    /// DELETE method.
    ///
    /// RFC 9110 section 9.3.5.
    Delete,
    /// CONNECT method.
    ///
    /// RFC 9110 section 9.3.6.
    Connect,
    /// OPTIONS method.
    ///
    /// RFC 9110 section 9.3.7.
    Options,
    /// TRACE method.
    ///
    /// RFC 9110 section 9.3.8.
    Trace,
    /// PATCH method.
    ///
    /// RFC 5789.
    Patch,
}

impl Method {
    /// Returns `true` if the method is safe.
    ///
    /// RFC 9110 section 9.2.1.
    pub const fn is_safe(self) -> bool {
        use Method::*;
        matches!(self, Get | Head | Options | Trace)
    }

    /// Returns `true` if the method is idempotent.
    ///
    /// RFC 9110 section 9.2.2.
    pub const fn is_idempotent(self) -> bool {
        matches!(self, Method::Put | Method::Delete) || self.is_safe()
    }

    /// Returns `true` if responses to the method are cacheable.
    ///
    /// POST responses are only cacheable with explicit freshness information,
    /// which isn't considered here.
    ///
    /// RFC 9110 section 9.2.3.
    pub const fn is_cacheable(self) -> bool {
        matches!(self, Method::Get | Method::Head)
    }

    /// Returns the method as string.
    pub const fn as_str(self) -> &'static str {
        use Method::*;
        match self {
            Options => "OPTIONS",
            Get => "GET",
            Post => "POST",
            Put => "PUT",
            Delete => "DELETE",
            Head => "HEAD",
            Trace => "TRACE",
            Connect => "CONNECT",
            Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the [`FromStr`] implementation for [`Method`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownMethod;

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown method")
    }
}

impl std::error::Error for UnknownMethod {}

/// The method token is case-sensitive, `get` is not the same method as `GET`.
impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(method: &str) -> Result<Self, Self::Err> {
        match method {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "CONNECT" => Ok(Method::Connect),
            "OPTIONS" => Ok(Method::Options),
            "TRACE" => Ok(Method::Trace),
            "PATCH" => Ok(Method::Patch),
            _ => Err(UnknownMethod),
        }
    }
}
