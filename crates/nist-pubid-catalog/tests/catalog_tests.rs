//! Catalog report integration tests

use nist_pubid::{LegacyCodes, LegacyRule};
use nist_pubid_catalog::{Catalog, CatalogEntry, CatalogError, PubidConfig, StatusRow};
use rstest::rstest;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new("NIST.SP.260-14", "Standard Reference Materials").with_id("NIST SP 260-14"),
        CatalogEntry::new("NIST.IR.8379", "Benchmark Datasets").with_id("NISTIR 8379"),
        CatalogEntry::new("NBS.CIRC.e", "Circular"),
        CatalogEntry::new("NBS.LCIRC.897", "Letter  Circular\n897"),
    ])
}

fn dois(entries: Vec<&CatalogEntry>) -> Vec<&str> {
    entries.into_iter().map(|entry| entry.doi.as_str()).collect()
}

#[test]
fn test_comply_with_pubid() {
    let catalog = sample();
    assert_eq!(dois(catalog.comply_with_pubid()), vec!["NIST.SP.260-14"]);
}

#[test]
fn test_different_with_pubid() {
    let catalog = sample();
    assert_eq!(
        dois(catalog.different_with_pubid()),
        vec!["NIST.IR.8379", "NBS.CIRC.e", "NBS.LCIRC.897"]
    );
}

#[test]
fn test_parse_fail_with_pubid() {
    let catalog = sample();
    assert_eq!(dois(catalog.parse_fail_with_pubid()), vec!["NBS.CIRC.e"]);
}

#[test]
fn test_status_rows() {
    let rows: Vec<StatusRow> = sample().status().collect();
    assert_eq!(rows.len(), 4);

    assert_eq!(rows[2].final_pub_id, "parse error");
    assert_eq!(rows[2].mr, "parse_error");

    assert_eq!(rows[3].doi, "NBS.LCIRC.897");
    assert_eq!(rows[3].title, "Letter Circular 897");
    assert_eq!(rows[3].final_pub_id, "NBS LC 897");
    assert_eq!(rows[3].mr, "NBS.LC.897");
}

#[rstest]
#[case("https://doi.org/10.6028/NIST.SP.800-53r5", "NIST.SP.800-53r5")]
#[case("10.6028/NIST.SP.800-53r5", "NIST.SP.800-53r5")]
#[case("NIST.SP.800-53r5", "NIST.SP.800-53r5")]
fn test_doi_prefix_stripped(#[case] doi: &str, #[case] expected: &str) {
    let catalog = Catalog::new(vec![CatalogEntry::new(doi, "")]);
    assert_eq!(catalog.entries()[0].doi, expected);
}

#[test]
fn test_custom_legacy_table() {
    let legacy = LegacyCodes::from_rules(vec![LegacyRule {
        from: "NISTIR".to_string(),
        to: "NIST IR".to_string(),
    }])
    .unwrap();
    let catalog = Catalog::new(vec![CatalogEntry::new("NISTIR.8379", "")])
        .with_legacy_codes(legacy);
    let rows: Vec<StatusRow> = catalog.status().collect();
    assert_eq!(rows[0].final_pub_id, "NIST IR 8379");

    let bare = Catalog::new(vec![CatalogEntry::new("NISTIR.8379", "")])
        .with_legacy_codes(LegacyCodes::empty());
    assert_eq!(bare.parse_fail_with_pubid().len(), 1);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "NIST SP 260-14", "doi": "NIST.SP.260-14", "title": "SRM"}},
            {{"doi": "NIST.IR.8379", "title": "Benchmarks"}}
        ]"#
    )
    .unwrap();

    let catalog = Catalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[1].printed_id(), "NIST.IR.8379");
    assert_eq!(catalog.comply_with_pubid().len(), 1);
}

#[test]
fn test_load_errors() {
    assert!(matches!(
        Catalog::from_json_str("{not json"),
        Err(CatalogError::Parse(_))
    ));
    assert!(matches!(
        Catalog::from_path("/nonexistent/catalog.json"),
        Err(CatalogError::Io(_))
    ));
}

#[test]
fn test_config_extends_legacy_codes() {
    let mut codes = NamedTempFile::new().unwrap();
    write!(codes, "[[rule]]\nfrom = \"SPECPUB\"\nto = \"SP\"\n").unwrap();

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        "default_style = \"long\"\nlegacy_codes = {:?}\n",
        codes.path().display().to_string()
    )
    .unwrap();

    let config = PubidConfig::load(Some(config_file.path())).unwrap();
    let legacy = config.legacy_table().unwrap();
    assert_eq!(legacy.len(), LegacyCodes::builtin().len() + 1);
    assert_eq!(legacy.rewrite("NIST SPECPUB 1"), "NIST SP 1");
}
