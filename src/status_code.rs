use std::fmt;

/// Response Status Code.
///
/// A complete list can be found at the HTTP Status Code Registry:
/// <http://www.iana.org/assignments/http-status-codes>.
///
/// RFC 9110 section 15.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusCode(pub u16);

/// Defines the status code constants and [`StatusCode::reason_phrase`] from a
/// single table.
macro_rules! status_codes {
    ($(
        $(#[$meta: meta])* ( $const_name: ident, $code: literal, $reason: literal ) $(,)?
    )+) => {
        impl StatusCode {
            $(
                #[doc = $reason]
                #[doc = ""]
                $( #[$meta] )*
                pub const $const_name: StatusCode = StatusCode($code);
            )+

            /// Returns the reason phrase for well known status codes.
            pub const fn reason_phrase(self) -> Option<&'static str> {
                match self.0 {
                    $( $code => Some($reason), )+
                    _ => None,
                }
            }
        }
    }
}

status_codes!(
    #[doc = "RFC 9110 section 15.2.1."]
    (CONTINUE, 100, "Continue"),
    #[doc = "RFC 9110 section 15.2.2."]
    (SWITCHING_PROTOCOLS, 101, "Switching Protocols"),
    #[doc = "RFC 8297."]
    (EARLY_HINTS, 103, "Early Hints"),

    #[doc = "RFC 9110 section 15.3.1."]
    (OK, 200, "OK"),
    #[doc = "RFC 9110 section 15.3.2."]
    (CREATED, 201, "Created"),
    #[doc = "RFC 9110 section 15.3.3."]
    (ACCEPTED, 202, "Accepted"),
    #[doc = "RFC 9110 section 15.3.4."]
    (NON_AUTHORITATIVE_INFORMATION, 203, "Non-Authoritative Information"),
    #[doc = "RFC 9110 section 15.3.5."]
    (NO_CONTENT, 204, "No Content"),
    #[doc = "RFC 9110 section 15.3.6."]
    (RESET_CONTENT, 205, "Reset Content"),
    #[doc = "RFC 9110 section 15.3.7."]
    (PARTIAL_CONTENT, 206, "Partial Content"),
    #[doc = "RFC 4918."]
    (MULTI_STATUS, 207, "Multi-Status"),
    #[doc = "RFC 5842."]
    (ALREADY_REPORTED, 208, "Already Reported"),
    #[doc = "RFC 3229."]
    (IM_USED, 226, "IM Used"),

    #[doc = "RFC 9110 section 15.4.1."]
    (MULTIPLE_CHOICES, 300, "Multiple Choices"),
    #[doc = "RFC 9110 section 15.4.2."]
    (MOVED_PERMANENTLY, 301, "Moved Permanently"),
    #[doc = "RFC 9110 section 15.4.3."]
    (FOUND, 302, "Found"),
    #[doc = "RFC 9110 section 15.4.4."]
    (SEE_OTHER, 303, "See Other"),
    #[doc = "RFC 9110 section 15.4.5."]
    (NOT_MODIFIED, 304, "Not Modified"),
    #[doc = "RFC 9110 section 15.4.6, deprecated."]
    (USE_PROXY, 305, "Use Proxy"),
    // NOTE: 306 is unused, RFC 9110 section 15.4.7.
    #[doc = "RFC 9110 section 15.4.8."]
    (TEMPORARY_REDIRECT, 307, "Temporary Redirect"),
    #[doc = "RFC 9110 section 15.4.9."]
    (PERMANENT_REDIRECT, 308, "Permanent Redirect"),

    #[doc = "RFC 9110 section 15.5.1."]
    (BAD_REQUEST, 400, "Bad Request"),
    #[doc = "RFC 9110 section 15.5.2."]
    (UNAUTHORIZED, 401, "Unauthorized"),
    #[doc = "RFC 9110 section 15.5.3."]
    (PAYMENT_REQUIRED, 402, "Payment Required"),
    #[doc = "RFC 9110 section 15.5.4."]
    (FORBIDDEN, 403, "Forbidden"),
    #[doc = "RFC 9110 section 15.5.5."]
    (NOT_FOUND, 404, "Not Found"),
    #[doc = "RFC 9110 section 15.5.6."]
    (METHOD_NOT_ALLOWED, 405, "Method Not Allowed"),
    #[doc = "RFC 9110 section 15.5.7."]
    (NOT_ACCEPTABLE, 406, "Not Acceptable"),
    #[doc = "RFC 9110 section 15.5.8."]
    (PROXY_AUTHENTICATION_REQUIRED, 407, "Proxy Authentication Required"),
    #[doc = "RFC 9110 section 15.5.9."]
    (REQUEST_TIMEOUT, 408, "Request Timeout"),
    #[doc = "RFC 9110 section 15.5.10."]
    (CONFLICT, 409, "Conflict"),
    #[doc = "RFC 9110 section 15.5.11."]
    (GONE, 410, "Gone"),
    #[doc = "RFC 9110 section 15.5.12."]
    (LENGTH_REQUIRED, 411, "Length Required"),
    #[doc = "RFC 9110 section 15.5.13."]
    (PRECONDITION_FAILED, 412, "Precondition Failed"),
    #[doc = "RFC 9110 section 15.5.14."]
    (CONTENT_TOO_LARGE, 413, "Content Too Large"),
    #[doc = "RFC 9110 section 15.5.15."]
    (URI_TOO_LONG, 414, "URI Too Long"),
    #[doc = "RFC 9110 section 15.5.16."]
    (UNSUPPORTED_MEDIA_TYPE, 415, "Unsupported Media Type"),
    #[doc = "RFC 9110 section 15.5.17."]
    (RANGE_NOT_SATISFIABLE, 416, "Range Not Satisfiable"),
    #[doc = "RFC 9110 section 15.5.18."]
    (EXPECTATION_FAILED, 417, "Expectation Failed"),
    // NOTE: 418 is unused, RFC 9110 section 15.5.19.
    #[doc = "RFC 9110 section 15.5.20."]
    (MISDIRECTED_REQUEST, 421, "Misdirected Request"),
    #[doc = "RFC 9110 section 15.5.21."]
    (UNPROCESSABLE_CONTENT, 422, "Unprocessable Content"),
    #[doc = "RFC 4918."]
    (LOCKED, 423, "Locked"),
    #[doc = "RFC 4918."]
    (FAILED_DEPENDENCY, 424, "Failed Dependency"),
    #[doc = "RFC 8470."]
    (TOO_EARLY, 425, "Too Early"),
    #[doc = "RFC 9110 section 15.5.22."]
    (UPGRADE_REQUIRED, 426, "Upgrade Required"),
    #[doc = "RFC 6585."]
    (PRECONDITION_REQUIRED, 428, "Precondition Required"),
    #[doc = "RFC 6585."]
    (TOO_MANY_REQUESTS, 429, "Too Many Requests"),
    #[doc = "RFC 6585."]
    (REQUEST_HEADER_FIELDS_TOO_LARGE, 431, "Request Header Fields Too Large"),
    #[doc = "RFC 7725."]
    (UNAVAILABLE_FOR_LEGAL_REASONS, 451, "Unavailable For Legal Reasons"),

    #[doc = "RFC 9110 section 15.6.1."]
    (INTERNAL_SERVER_ERROR, 500, "Internal Server Error"),
    #[doc = "RFC 9110 section 15.6.2."]
    (NOT_IMPLEMENTED, 501, "Not Implemented"),
    #[doc = "RFC 9110 section 15.6.3."]
    (BAD_GATEWAY, 502, "Bad Gateway"),
    #[doc = "RFC 9110 section 15.6.4."]
    (SERVICE_UNAVAILABLE, 503, "Service Unavailable"),
    #[doc = "RFC 9110 section 15.6.5."]
    (GATEWAY_TIMEOUT, 504, "Gateway Timeout"),
    #[doc = "RFC 9110 section 15.6.6."]
    (HTTP_VERSION_NOT_SUPPORTED, 505, "HTTP Version Not Supported"),
    #[doc = "RFC 2295."]
    (VARIANT_ALSO_NEGOTIATES, 506, "Variant Also Negotiates"),
    #[doc = "RFC 4918."]
    (INSUFFICIENT_STORAGE, 507, "Insufficient Storage"),
    #[doc = "RFC 5842."]
    (LOOP_DETECTED, 508, "Loop Detected"),
    #[doc = "RFC 6585."]
    (NETWORK_AUTHENTICATION_REQUIRED, 511, "Network Authentication Required"),
);

impl StatusCode {
    /// Returns `true` if the status code is in 1xx range.
    pub const fn is_informational(self) -> bool {
        self.0 >= 100 && self.0 <= 199
    }

    /// Returns `true` if the status code is in 2xx range.
    pub const fn is_successful(self) -> bool {
        self.0 >= 200 && self.0 <= 299
    }

    /// Returns `true` if the status code is in 3xx range.
    pub const fn is_redirect(self) -> bool {
        self.0 >= 300 && self.0 <= 399
    }

    /// Returns `true` if the status code is in 4xx range.
    pub const fn is_client_error(self) -> bool {
        self.0 >= 400 && self.0 <= 499
    }

    /// Returns `true` if the status code is in 5xx range.
    pub const fn is_server_error(self) -> bool {
        self.0 >= 500 && self.0 <= 599
    }

    /// Returns `true` if the response MUST NOT include content.
    ///
    /// This is the case for 1xx, 204 (No Content) and 304 (Not Modified)
    /// responses, RFC 9110 section 6.4.1.
    pub const fn forbids_content(self) -> bool {
        self.is_informational() || self.0 == 204 || self.0 == 304
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}
