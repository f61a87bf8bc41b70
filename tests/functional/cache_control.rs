use http_semantics::cache_control::{MaxStale, MAX_DELTA_SECONDS};
use http_semantics::CacheControl;

#[test]
fn parse() {
    let cache_control = CacheControl::parse("public, max-age=3600, must-revalidate");
    assert_eq!(
        cache_control,
        CacheControl {
            public: true,
            max_age: Some(3600),
            must_revalidate: true,
            ..CacheControl::default()
        }
    );
}

#[test]
fn parse_all_directives() {
    let cache_control = CacheControl::parse(
        "no-cache, no-store, no-transform, only-if-cached, public, private, \
         must-revalidate, proxy-revalidate, immutable, max-age=1, max-stale=2, \
         min-fresh=3, s-maxage=4, stale-while-revalidate=5, stale-if-error=6",
    );
    let expected = CacheControl {
        no_cache: true,
        no_store: true,
        no_transform: true,
        only_if_cached: true,
        public: true,
        private: true,
        must_revalidate: true,
        proxy_revalidate: true,
        immutable: true,
        max_age: Some(1),
        max_stale: Some(MaxStale::Seconds(2)),
        min_fresh: Some(3),
        s_maxage: Some(4),
        stale_while_revalidate: Some(5),
        stale_if_error: Some(6),
    };
    assert_eq!(cache_control, expected);
}

#[test]
fn parse_is_case_insensitive() {
    let cache_control = CacheControl::parse("No-Cache, MAX-AGE=60, S-MaxAge=30");
    assert!(cache_control.no_cache);
    assert_eq!(cache_control.max_age, Some(60));
    assert_eq!(cache_control.s_maxage, Some(30));
}

#[test]
fn parse_max_stale() {
    assert_eq!(CacheControl::parse("max-stale").max_stale, Some(MaxStale::Any));
    assert_eq!(
        CacheControl::parse("max-stale=120").max_stale,
        Some(MaxStale::Seconds(120))
    );
    assert_eq!(CacheControl::parse("max-stale=abc").max_stale, None);
    assert_eq!(CacheControl::parse("").max_stale, None);
}

#[test]
fn parse_invalid_values_are_skipped() {
    crate::init_logger();
    let cache_control = CacheControl::parse("max-age=abc, no-store, min-fresh, s-maxage=-1, max-age=10");
    assert_eq!(cache_control.max_age, Some(10));
    assert_eq!(cache_control.min_fresh, None);
    assert_eq!(cache_control.s_maxage, None);
    assert!(cache_control.no_store);

    let cache_control = CacheControl::parse("max-age=1.5");
    assert!(cache_control.is_empty());
}

#[test]
fn parse_unknown_directives_are_ignored() {
    let cache_control = CacheControl::parse("foo, bar=\"baz, qux\", no-store, community=\"UCI\"");
    assert_eq!(
        cache_control,
        CacheControl {
            no_store: true,
            ..CacheControl::default()
        }
    );
}

#[test]
fn parse_quoted_values() {
    let cache_control = CacheControl::parse("max-age=\"60\"");
    assert_eq!(cache_control.max_age, Some(60));
}

#[test]
fn parse_field_name_arguments() {
    let cache_control = CacheControl::parse("private=\"Set-Cookie, Authorization\", no-cache=\"Set-Cookie\", max-age=5");
    assert!(cache_control.private);
    assert!(cache_control.no_cache);
    assert_eq!(cache_control.max_age, Some(5));
}

#[test]
fn parse_clamps_large_values() {
    let cache_control = CacheControl::parse("max-age=99999999999999999999, s-maxage=2147483649");
    assert_eq!(cache_control.max_age, Some(MAX_DELTA_SECONDS));
    assert_eq!(cache_control.s_maxage, Some(MAX_DELTA_SECONDS));
}

#[test]
fn parse_whitespace_and_empty_elements() {
    let cache_control = CacheControl::parse(" ,  no-cache ,, max-age = 5 ,");
    assert!(cache_control.no_cache);
    assert_eq!(cache_control.max_age, Some(5));
}

#[test]
fn fmt_display() {
    let tests = &[
        (CacheControl::default(), ""),
        (
            CacheControl {
                no_store: true,
                ..CacheControl::default()
            },
            "no-store",
        ),
        (
            CacheControl {
                public: true,
                max_age: Some(3600),
                must_revalidate: true,
                ..CacheControl::default()
            },
            "max-age=3600, must-revalidate, public",
        ),
        (
            CacheControl {
                max_stale: Some(MaxStale::Any),
                stale_if_error: Some(60),
                ..CacheControl::default()
            },
            "max-stale, stale-if-error=60",
        ),
        (
            CacheControl {
                max_stale: Some(MaxStale::Seconds(0)),
                ..CacheControl::default()
            },
            "max-stale=0",
        ),
    ];
    for (cache_control, expected) in tests {
        assert_eq!(cache_control.to_string(), *expected);
        assert_eq!(cache_control.to_field_value(), *expected);
    }
}

#[test]
fn format_parse_round_trip() {
    let tests = &[
        "public, max-age=3600, must-revalidate",
        "no-cache, no-store",
        "max-stale, min-fresh=10, only-if-cached",
        "private, s-maxage=0, immutable, stale-while-revalidate=30, proxy-revalidate",
    ];
    for input in tests {
        let cache_control = CacheControl::parse(input);
        let formatted = cache_control.to_string();
        assert_eq!(CacheControl::parse(&formatted), cache_control, "input: {input}");
    }
}

#[test]
fn is_empty() {
    assert!(CacheControl::default().is_empty());
    assert!(CacheControl::parse("unknown").is_empty());
    assert!(!CacheControl::parse("max-age=0").is_empty());
}
