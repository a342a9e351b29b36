use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

const SAMPLES: &[&str] = &[
    "",
    "abc",
    "42",
    "The quick brown fox jumps over the lazy dog",
    "héllo wörld",
    "日本語テキスト",
    "emoji 🦀 crab",
    "line\nbreak\ttab",
];

#[test]
fn test_example_scenarios() {
    let converter = Converter::new();
    let mut rng = StdRng::seed_from_u64(0);

    let hex = Input::from_arg("abc".into(), Method::Hex).unwrap();
    assert_eq!(converter.hex(&hex).unwrap(), "616263");

    let number = Input::from_arg("42".into(), Method::Hex).unwrap();
    assert_eq!(converter.hex(&number).unwrap(), "0x2a");

    let text = Input::text("abc");
    assert_eq!(converter.base64(&text).unwrap(), "YWJj");
    assert_eq!(
        converter.md5(&text).unwrap(),
        "900150983cd24fb0d6963f7d28e17f72"
    );

    let random = converter.convert(Method::Random, &text, &mut rng).unwrap();
    assert!(["616263", "YWJj", "900150983cd24fb0d6963f7d28e17f72"].contains(&random.value()));
}

#[test]
fn test_hex_integers() {
    let converter = Converter::new();
    let cases: &[(i128, &str)] = &[
        (0, "0x0"),
        (1, "0x1"),
        (255, "0xff"),
        (4096, "0x1000"),
        (-1, "-0x1"),
        (-255, "-0xff"),
        (i128::MAX, "0x7fffffffffffffffffffffffffffffff"),
        (i128::MIN, "-0x80000000000000000000000000000000"),
    ];
    for (value, expected) in cases {
        assert_eq!(converter.hex(&Input::from(*value)).unwrap(), *expected);
    }
}

#[test]
fn test_hex_integers_beyond_i128() {
    let converter = Converter::new();

    let two_pow_127 = Input::from_arg("170141183460469231731687303715884105728".into(), Method::Hex)
        .unwrap();
    assert_eq!(
        converter.hex(&two_pow_127).unwrap(),
        "0x80000000000000000000000000000000"
    );

    let two_pow_200 = Input::from(BigInt::from(1u8) << 200u32);
    assert_eq!(
        converter.hex(&two_pow_200).unwrap(),
        format!("0x1{}", "0".repeat(50))
    );

    let negative = Input::from_arg(format!("-{}", "1".repeat(40)).into(), Method::Hex).unwrap();
    let hex = converter.hex(&negative).unwrap();
    assert!(hex.starts_with("-0x"));
    assert_eq!(BigInt::parse_bytes(hex[3..].as_bytes(), 16).unwrap().to_string(), "1".repeat(40));
}

#[test]
fn test_hex_text_is_lowercase_utf8_bytes() {
    let converter = Converter::new();
    for sample in SAMPLES {
        let hex = converter.hex(&Input::text(*sample)).unwrap();
        assert_eq!(hex.len(), sample.len() * 2);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hex::decode(&hex).unwrap(), sample.as_bytes());
    }
    assert_eq!(converter.hex(&Input::text("é")).unwrap(), "c3a9");
}

#[test]
fn test_base64_decodes_back_to_input() {
    let converter = Converter::new();
    for sample in SAMPLES {
        let encoded = converter.base64(&Input::text(*sample)).unwrap();
        let decoded = STANDARD.decode(&encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), *sample);
    }
}

#[test]
fn test_base64_pads_output() {
    let converter = Converter::new();
    assert_eq!(converter.base64(&Input::text("a")).unwrap(), "YQ==");
    assert_eq!(converter.base64(&Input::text("ab")).unwrap(), "YWI=");
    assert_eq!(converter.base64(&Input::text("")).unwrap(), "");
}

#[test]
fn test_md5_shape_and_determinism() {
    let converter = Converter::new();
    for sample in SAMPLES {
        let input = Input::text(*sample);
        let first = converter.md5(&input).unwrap();
        let second = converter.md5(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
    assert_eq!(
        converter.md5(&Input::text("")).unwrap(),
        "d41d8cd98f00b204e9800998ecf8427e"
    );
}

#[test]
fn test_integer_input_is_a_type_error() {
    let converter = Converter::new();
    let mut rng = StdRng::seed_from_u64(7);
    let number = Input::from(42i128);

    let err = converter.base64(&number).unwrap_err();
    assert_eq!(
        err,
        ConvertError::Type {
            method: Method::Base64,
            found: InputKind::Integer
        }
    );
    assert!(err.is_type_error());

    assert!(converter.md5(&number).unwrap_err().is_type_error());

    let err = converter.random_choice(&number, &mut rng).unwrap_err();
    assert_eq!(
        err,
        ConvertError::Type {
            method: Method::Random,
            found: InputKind::Integer
        }
    );
    assert_eq!(
        err.to_string(),
        "random conversion requires text input, got integer"
    );
}

#[test]
fn test_random_choice_stays_within_the_three_methods() {
    let converter = Converter::new();
    let mut rng = StdRng::seed_from_u64(42);

    for sample in SAMPLES {
        let input = Input::text(*sample);
        let candidates = [
            (Method::Hex, converter.hex(&input).unwrap()),
            (Method::Base64, converter.base64(&input).unwrap()),
            (Method::Md5, converter.md5(&input).unwrap()),
        ];

        for _ in 0..20 {
            let conversion = converter.random_choice(&input, &mut rng).unwrap();
            assert_ne!(conversion.method(), Method::Random);
            assert!(candidates
                .iter()
                .any(|(method, value)| *method == conversion.method() && value == conversion.value()));
        }
    }
}

#[test]
fn test_random_choice_is_reproducible_under_a_seed() {
    let converter = Converter::new();
    let input = Input::text("masked value");

    let run = |seed: u64| -> Vec<Method> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..32)
            .map(|_| converter.random_choice(&input, &mut rng).unwrap().method())
            .collect()
    };

    assert_eq!(run(1234), run(1234));
}

#[test]
fn test_random_choice_is_roughly_uniform() {
    let converter = Converter::new();
    let input = Input::text("abc");
    let mut rng = StdRng::seed_from_u64(99);
    let draws = 3000;

    let mut counts: HashMap<Method, usize> = HashMap::new();
    for _ in 0..draws {
        let conversion = converter.random_choice(&input, &mut rng).unwrap();
        *counts.entry(conversion.method()).or_default() += 1;
    }

    assert_eq!(counts.len(), 3);
    // ~1000 each expected
    for (method, count) in counts {
        assert!((800..=1200).contains(&count), "{method} picked {count} times");
    }
}

#[test]
fn test_convert_dispatches_concrete_methods() {
    let converter = Converter::new();
    let mut rng = StdRng::seed_from_u64(0);
    let input = Input::text("abc");

    let hex = converter.convert(Method::Hex, &input, &mut rng).unwrap();
    assert_eq!(hex.method(), Method::Hex);
    assert_eq!(hex.to_string(), "616263");

    let b64 = converter.convert(Method::Base64, &input, &mut rng).unwrap();
    assert_eq!(b64.into_value(), "YWJj");

    let err = converter
        .convert(Method::Md5, &Input::from(3i128), &mut rng)
        .unwrap_err();
    assert!(err.is_type_error());
}
