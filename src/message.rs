//! Request and response envelopes.
//!
//! These types only hold the message semantics, how a message is framed on
//! the wire is up to the transport.

use std::fmt;

use crate::header::Headers;
use crate::method::Method;
use crate::status_code::StatusCode;

/// Form of the request target.
///
/// RFC 9112 section 3.2.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RequestTarget {
    /// Absolute path with an optional query, e.g. `/where?q=now`.
    Origin(String),
    /// Absolute URI, e.g. `http://www.example.org/pub/WWW/`, used for
    /// requests to proxies.
    Absolute(String),
    /// Host and port, e.g. `www.example.com:80`, only used with CONNECT.
    Authority(String),
    /// `*`, only used with OPTIONS to target the server as a whole.
    Asterisk,
}

impl RequestTarget {
    /// Parse a raw request target, determining its form.
    ///
    /// Returns `None` if `target` is empty, contains whitespace or control
    /// characters, or doesn't match any of the forms.
    pub fn parse(target: &str) -> Option<RequestTarget> {
        if target.is_empty() || target.bytes().any(|b| b <= b' ' || b == 0x7F) {
            return None;
        }

        if target == "*" {
            Some(RequestTarget::Asterisk)
        } else if target.starts_with('/') {
            Some(RequestTarget::Origin(target.to_owned()))
        } else if is_absolute_uri(target) {
            Some(RequestTarget::Absolute(target.to_owned()))
        } else if is_authority(target) {
            Some(RequestTarget::Authority(target.to_owned()))
        } else {
            log::debug!("invalid request target: {target:?}");
            None
        }
    }

    /// Returns the target as string.
    pub fn as_str(&self) -> &str {
        match self {
            RequestTarget::Origin(target)
            | RequestTarget::Absolute(target)
            | RequestTarget::Authority(target) => target,
            RequestTarget::Asterisk => "*",
        }
    }
}

/// `scheme ":" hier-part`, the scheme must start with a letter.
fn is_absolute_uri(target: &str) -> bool {
    let Some((scheme, rest)) = target.split_once(':') else {
        return false;
    };
    let mut bytes = scheme.bytes();
    matches!(bytes.next(), Some(b) if b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        && !rest.is_empty()
        // Distinguish from authority-form, `host:port`.
        && !rest.bytes().all(|b| b.is_ascii_digit())
}

/// `uri-host ":" port`.
fn is_authority(target: &str) -> bool {
    match target.rsplit_once(':') {
        Some((host, port)) => {
            !host.is_empty()
                && !host.contains('/')
                && !port.is_empty()
                && port.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`Request::new`] if the request target's form is not
/// allowed for the method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidTarget {
    /// Method of the request.
    pub method: Method,
    /// The rejected target.
    pub target: RequestTarget,
}

impl fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request target '{}' not allowed for {} request",
            self.target, self.method
        )
    }
}

impl std::error::Error for InvalidTarget {}

/// HTTP request.
pub struct Request<B> {
    method: Method,
    target: RequestTarget,
    headers: Headers,
    body: B,
}

impl<B> Request<B> {
    /// Create a new request.
    ///
    /// Returns an error if the form of `target` doesn't fit `method`:
    /// authority-form is only allowed (and required) for CONNECT and
    /// asterisk-form only for OPTIONS.
    pub fn new(
        method: Method,
        target: RequestTarget,
        headers: Headers,
        body: B,
    ) -> Result<Request<B>, InvalidTarget> {
        let valid = match (&target, method) {
            (RequestTarget::Authority(_), method) => method == Method::Connect,
            (_, Method::Connect) => false,
            (RequestTarget::Asterisk, method) => method == Method::Options,
            (RequestTarget::Origin(_) | RequestTarget::Absolute(_), _) => true,
        };
        if valid {
            Ok(Request {
                method,
                target,
                headers,
                body,
            })
        } else {
            Err(InvalidTarget { method, target })
        }
    }

    /// Returns the HTTP method of this request.
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Returns the request target.
    pub const fn target(&self) -> &RequestTarget {
        &self.target
    }

    /// Returns the headers.
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns mutable access to the headers.
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Returns a reference to the body.
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Returns a mutable reference to the body.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Returns the body of the request.
    pub fn into_body(self) -> B {
        self.body
    }
}

impl<B> fmt::Debug for Request<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("target", &self.target)
            .field("headers", &self.headers)
            .finish()
    }
}

/// HTTP response.
pub struct Response<B> {
    status: StatusCode,
    headers: Headers,
    body: B,
}

impl<B> Response<B> {
    /// Create a new HTTP response.
    pub const fn new(status: StatusCode, headers: Headers, body: B) -> Response<B> {
        Response {
            status,
            headers,
            body,
        }
    }

    /// Returns the response code.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the headers.
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns mutable access to the headers.
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Returns a reference to the body.
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Returns a mutable reference to the body.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    /// Returns the body of the response.
    pub fn into_body(self) -> B {
        self.body
    }
}

impl<B> fmt::Debug for Response<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish()
    }
}
