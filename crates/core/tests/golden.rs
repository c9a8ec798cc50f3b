//! Golden fixtures: one raw input and its expected canonical props per catalog kind.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use sitegen_core::{ComponentKind, normalize};

fn fixture_path(tag: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{tag}.json"))
}

fn load(tag: &str) -> (Value, Value) {
    let path = fixture_path(tag);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("missing fixture {}: {}", path.display(), err));
    let fixture: Value = serde_json::from_str(&source)
        .unwrap_or_else(|err| panic!("invalid fixture {}: {}", path.display(), err));
    assert_eq!(fixture["type"], tag, "fixture type mismatch in {}", path.display());
    (fixture["input"].clone(), fixture["expected"].clone())
}

#[test]
fn every_kind_has_a_fixture() {
    for kind in ComponentKind::ALL {
        assert!(
            fixture_path(kind.as_str()).exists(),
            "no fixture for {}",
            kind
        );
    }
}

#[test]
fn fixtures_match_expected_output() {
    let mut failures = Vec::new();
    for kind in ComponentKind::ALL {
        let (input, expected) = load(kind.as_str());
        let actual = normalize(kind.as_str(), &input).to_value();
        if actual != expected {
            failures.push(format!(
                "{}:\n  expected {}\n  actual   {}",
                kind, expected, actual
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn expected_outputs_are_fixed_points() {
    for kind in ComponentKind::ALL {
        let (_, expected) = load(kind.as_str());
        assert_eq!(
            normalize(kind.as_str(), &expected).to_value(),
            expected,
            "re-normalizing {} changed it",
            kind
        );
    }
}
