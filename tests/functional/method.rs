use http_semantics::method::UnknownMethod;
use http_semantics::Method::{self, *};

use crate::assert_size;

const ALL: [Method; 9] = [Get, Head, Post, Put, Delete, Connect, Options, Trace, Patch];

#[test]
fn size() {
    assert_size::<Method>(1);
}

#[test]
fn is_safe() {
    let safe = &[Get, Head, Options, Trace];
    for method in ALL {
        assert_eq!(method.is_safe(), safe.contains(&method), "{method}");
    }
}

#[test]
fn is_idempotent() {
    let idempotent = &[Get, Head, Put, Delete, Options, Trace];
    for method in ALL {
        assert_eq!(method.is_idempotent(), idempotent.contains(&method), "{method}");
    }
}

#[test]
fn is_cacheable() {
    let cacheable = &[Get, Head];
    for method in ALL {
        assert_eq!(method.is_cacheable(), cacheable.contains(&method), "{method}");
    }
}

#[test]
fn from_str() {
    let tests = &[
        (Get, "GET"),
        (Head, "HEAD"),
        (Post, "POST"),
        (Put, "PUT"),
        (Delete, "DELETE"),
        (Connect, "CONNECT"),
        (Options, "OPTIONS"),
        (Trace, "TRACE"),
        (Patch, "PATCH"),
    ];
    for (expected, input) in tests {
        let got: Method = input.parse().unwrap();
        assert_eq!(got, *expected);
        // Must be case-sensitive.
        assert_eq!(input.to_lowercase().parse::<Method>(), Err(UnknownMethod));
    }
}

#[test]
fn from_str_unknown() {
    let tests = &["", "Get", "GETS", "PROPFIND", " GET"];
    for input in tests {
        assert_eq!(input.parse::<Method>(), Err(UnknownMethod), "{input:?}");
    }
    assert_eq!(UnknownMethod.to_string(), "unknown method");
}

#[test]
fn fmt_display() {
    for method in ALL {
        assert_eq!(method.to_string(), method.as_str());
        assert_eq!(method.as_str().parse::<Method>().unwrap(), method);
    }
}
