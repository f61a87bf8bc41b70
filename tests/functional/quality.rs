use http_semantics::QualityValue;

use crate::assert_size;

#[test]
fn size() {
    assert_size::<QualityValue>(8);
}

#[test]
fn new_clamps() {
    let tests = &[
        (0.0, 0.0),
        (0.5, 0.5),
        (1.0, 1.0),
        (-0.0, 0.0),
        (-1.0, 0.0),
        (1.5, 1.0),
        (f64::INFINITY, 1.0),
        (f64::NEG_INFINITY, 0.0),
        (f64::NAN, 1.0),
    ];
    for (input, expected) in tests {
        assert_eq!(QualityValue::new(*input).get(), *expected, "input: {input}");
    }
    assert_eq!(QualityValue::new(-0.0), QualityValue::MIN);
}

#[test]
fn parse() {
    let tests = &[
        ("0", 0.0),
        ("1", 1.0),
        ("0.5", 0.5),
        (" 0.8 ", 0.8),
        ("1.000", 1.0),
        ("2", 1.0),
        ("-3", 0.0),
        ("1e-1", 0.1),
    ];
    for (input, expected) in tests {
        let quality = QualityValue::parse(input).unwrap();
        assert_eq!(quality.get(), *expected, "input: {input:?}");
    }
}

#[test]
fn parse_invalid() {
    let tests = &["", "abc", "0,5", "NaN", "q=1"];
    for input in tests {
        assert!(QualityValue::parse(input).is_none(), "input: {input:?}");
    }
}

#[test]
fn default() {
    assert_eq!(QualityValue::default(), QualityValue::MAX);
    assert_eq!(QualityValue::DEFAULT.get(), 1.0);
}

#[test]
fn ordering() {
    let mut qualities = vec![
        QualityValue::new(0.5),
        QualityValue::MAX,
        QualityValue::MIN,
        QualityValue::new(0.001),
    ];
    qualities.sort();
    let values: Vec<f64> = qualities.iter().map(|q| q.get()).collect();
    assert_eq!(values, [0.0, 0.001, 0.5, 1.0]);
    assert!(QualityValue::MIN.is_zero());
    assert!(!QualityValue::new(0.001).is_zero());
}

#[test]
fn fmt_display() {
    let tests = &[
        (0.0, "0"),
        (1.0, "1"),
        (0.5, "0.5"),
        (0.125, "0.125"),
        (0.1, "0.1"),
        (0.001, "0.001"),
        (0.12345, "0.123"),
        (0.9999, "1"),
        (0.0001, "0"),
    ];
    for (input, expected) in tests {
        assert_eq!(QualityValue::new(*input).to_string(), *expected, "input: {input}");
    }
}
