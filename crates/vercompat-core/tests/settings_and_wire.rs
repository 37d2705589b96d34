//! Settings lookup and wire encoding end to end

use bytes::{Buf, BytesMut};
use vercompat_core::settings::INDEX_UUID_NA_VALUE;
use vercompat_core::wire::read_version_with;
use vercompat_core::*;

const SETTINGS_YAML: &str = r#"
index.version.created: "6070299"
index.uuid: "Q3hFv1UdTnSF7n3n1OuFlw"
index.number_of_shards: "5"
"#;

#[test]
fn test_index_created_from_yaml() {
    let settings: IndexSettings = serde_yaml::from_str(SETTINGS_YAML).unwrap();
    let created = index_created(&settings).unwrap();
    assert_eq!(created, V_6_7_2);
    assert_eq!(created.companion(), V_6_7_2.companion());
    assert_eq!(settings.get("index.number_of_shards"), Some("5"));
}

#[test]
fn test_index_created_undeclared_id() {
    let settings: IndexSettings =
        serde_json::from_str(r#"{"index.version.created": "6080099"}"#).unwrap();
    let created = index_created(&settings).unwrap();
    assert_eq!(created.to_string(), "6.8.0");
    assert_eq!(created.companion(), V_6_7_3.companion());
}

#[test]
fn test_missing_version_reports_placeholder_uuid() {
    let settings = IndexSettings::new();
    assert_eq!(settings.version(SETTING_VERSION_CREATED).unwrap(), V_EMPTY);
    let err = index_created(&settings).unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(
        err.to_string(),
        format!(
            "[{SETTING_VERSION_CREATED}] is not present in the index settings for index with UUID [{INDEX_UUID_NA_VALUE}]"
        )
    );
}

#[test]
fn test_settings_collected_from_pairs() {
    let settings: IndexSettings = [
        (SETTING_VERSION_CREATED.to_string(), CURRENT.id().to_string()),
        (SETTING_INDEX_UUID.to_string(), "abc".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(index_created(&settings).unwrap(), CURRENT);
    assert_eq!(settings.index_uuid(), "abc");
}

#[test]
fn test_stream_of_versions() {
    let mut buf = BytesMut::new();
    for version in VersionRegistry::global() {
        write_version(version, &mut buf);
    }
    let mut bytes = buf.freeze();
    let mut decoded = Vec::new();
    while bytes.has_remaining() {
        decoded.push(read_version(&mut bytes).unwrap());
    }
    assert_eq!(decoded, VersionRegistry::global().versions());
}

#[test]
fn test_wire_against_custom_registry() {
    let registry = VersionRegistry::new([V_7_0_0]).unwrap();
    let mut buf = BytesMut::new();
    write_version(&V_6_7_0, &mut buf);
    let decoded = read_version_with(&registry, &mut buf.freeze()).unwrap();
    assert_eq!(decoded.id(), V_6_7_0.id());
    // older than the only declaration, so one companion major down
    assert_eq!(decoded.companion(), CompanionVersion::from_bits(7, 0, 0));
}
