//! Version string grammar tables

use vercompat_core::format::parse_id;
use vercompat_core::*;

#[test]
fn test_accepted_strings() {
    let table = [
        ("6.0.0-alpha1", 6_000_001),
        ("6.0.0-alpha2", 6_000_002),
        ("6.0.0-beta1", 6_000_026),
        ("6.0.0-rc2", 6_000_052),
        ("6.7.3", 6_070_399),
        ("7.0.2", 7_000_299),
        ("5.0.0-alpha5", 5_000_005),
        ("5.0.0-beta1", 5_000_026),
        ("2.4.6", 2_040_699),
        ("2.0.0-beta2", 2_000_002),
        ("1.7.0.RC1", 1_070_051),
        ("1.0.0.Beta1", 1_000_001),
        ("2.0.0-SNAPSHOT", 2_000_099),
        ("4.9.9-SNAPSHOT", 4_090_999),
        ("0.90.0", 900_099),
    ];
    for (input, id) in table {
        assert_eq!(parse_id(input).unwrap(), id, "{input}");
        assert_eq!(Version::parse(input).unwrap().id(), id, "{input}");
    }
}

#[test]
fn test_rejected_strings() {
    let table = [
        "7.0.0-beta1",
        "7.0.0-rc1",
        "1.2.3.4.5",
        "1.2",
        "abc",
        "6.0.0-delta1",
        "5.0.0-SNAPSHOT",
        "6.-1.0",
    ];
    for input in table {
        let err = Version::parse(input).unwrap_err();
        assert!(err.is_input_error(), "{input}");
        assert!(err.to_string().contains(&format!("[{input}]")), "{input}: {err}");
    }
}

#[test]
fn test_empty_string_is_current() {
    assert_eq!(Version::parse("").unwrap(), CURRENT);
}

#[test]
fn test_every_declared_version_round_trips() {
    for version in VersionRegistry::global() {
        let rendered = version.to_string();
        let parsed = Version::parse(&rendered).unwrap();
        assert_eq!(parsed.id(), version.id(), "{rendered}");
        assert_eq!(parsed.companion(), version.companion(), "{rendered}");
    }
}

#[test]
fn test_legacy_rendering() {
    assert_eq!(Version::from_id(1_070_051).to_string(), "1.7.0.RC1");
    assert_eq!(Version::from_id(1_000_001).to_string(), "1.0.0.Beta1");
    assert_eq!(Version::from_id(2_000_002).to_string(), "2.0.0-beta2");
}

#[test]
fn test_build_kind_names() {
    assert_eq!(V_6_0_0_ALPHA1.build_kind(), BuildKind::Alpha(1));
    assert_eq!(V_6_0_0_BETA2.build_kind(), BuildKind::Beta(2));
    assert_eq!(V_6_0_0_RC1.build_kind(), BuildKind::ReleaseCandidate(1));
    assert_eq!(V_6_0_0.build_kind(), BuildKind::Release);
    assert!(V_6_0_0_ALPHA2.is_alpha());
    assert!(V_6_0_0_BETA1.is_beta());
    assert!(V_6_0_0_RC2.is_rc());
    assert!(CURRENT.is_release());
}

#[test]
fn test_serde_uses_the_string_form() {
    let json = serde_json::to_string(&vec![V_6_0_0_RC1, V_7_0_0]).unwrap();
    assert_eq!(json, r#"["6.0.0-rc1","7.0.0"]"#);
    let back: Vec<Version> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![V_6_0_0_RC1, V_7_0_0]);

    let yaml = serde_yaml::to_string(&CompanionVersion::LATEST).unwrap();
    assert_eq!(yaml.trim(), "8.0.0");
}
