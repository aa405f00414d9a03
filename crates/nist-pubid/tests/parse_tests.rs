//! Parsing integration tests
//!
//! Real catalog spellings, legacy tokens and the DOI suffix form.

use nist_pubid::{parse, LegacyCodes, LegacyRule, ParseError, Parser, Series, Stage, Style};
use rstest::rstest;

// === Canonical short form ===

#[rstest]
#[case("NIST SP 800-53r5", "NIST SP 800-53r5")]
#[case("NIST.SP.800-53r5", "NIST SP 800-53r5")]
#[case("NISTIR 8379", "NIST IR 8379")]
#[case("NBS.LCIRC.897", "NBS LC 897")]
#[case("NIST.SP.800-160v1", "NIST SP 800-160v1")]
#[case("NIST SP 800-53 Rev. 4", "NIST SP 800-53r4")]
#[case("NIST.GCR.17-917-45", "NIST GCR 17-917-45")]
#[case("NBS.CIRC.12e2revjune", "NBS CIRC 12e2rjune")]
#[case("NBS.HB.67suppJune1967", "NBS HB 67supJune1967")]
#[case("NBS.HB.105-1r1990", "NBS HB 105-1r1990")]
#[case("FIPS PUB 140-2", "NIST FIPS 140-2")]
#[case("NIST.FIPS.PUB.140-2", "NIST FIPS 140-2")]
#[case("NIST SP 800-57pt1r4", "NIST SP 800-57pt1r4")]
#[case("NIST SP 800-123 v2 pt3 ver1.0", "NIST SP 800-123v2pt3ver1.0")]
#[case("  NIST SP 800-53  ", "NIST SP 800-53")]
fn test_short_form(#[case] input: &str, #[case] expected: &str) {
    let id = parse(input).unwrap();
    assert_eq!(id.render(Style::Short), expected);
}

// === Legacy codes ===

#[test]
fn test_nistir_equals_nist_ir() {
    let legacy = parse("NISTIR 8379").unwrap();
    let current = parse("NIST IR 8379").unwrap();
    assert_eq!(legacy, current);
    assert_eq!(legacy.render(Style::Long), "NIST IR 8379");
}

#[test]
fn test_letter_circular_rewrite() {
    let id = parse("NBS.LCIRC.897").unwrap();
    assert_eq!(id.serie, Series::NbsLc);
    assert_eq!(id.render(Style::Long), "NBS LC 897");
    assert_eq!(id.render(Style::Mr), "NBS.LC.897");
}

#[test]
fn test_custom_legacy_table() {
    let legacy = LegacyCodes::from_rules(vec![LegacyRule {
        from: "SPECPUB".to_string(),
        to: "SP".to_string(),
    }])
    .unwrap();
    let id = Parser::new(&legacy).parse("NIST SPECPUB 800-53").unwrap();
    assert_eq!(id.serie, Series::NistSp);

    // The bundled table is not consulted by a custom parser
    assert!(Parser::new(&LegacyCodes::empty()).parse("NISTIR 8379").is_err());
}

// === Machine-readable fixed points ===

#[rstest]
#[case("NIST.SP.800-133r2")]
#[case("NIST.SP.800-160v1")]
#[case("NIST.SP.IPD.800-53r5")]
#[case("NIST.SP.800-53r4.u3-2015")]
#[case("NIST.SP.800-38A.add-1")]
#[case("NIST.IR.8115.spa")]
#[case("NBS.CIRC.25sup")]
fn test_mr_is_fixed_point(#[case] input: &str) {
    let id = parse(input).unwrap();
    assert_eq!(id.render(Style::Mr), input);
}

// === Long and abbreviated forms parse back ===

#[rstest]
#[case("NIST SP 800-57pt1r4")]
#[case("NIST SP 800-160v1")]
#[case("NBS CIRC 12e2revjune")]
#[case("NIST SP(IPD) 800-53r5")]
#[case("NIST SP 800-53r4/Upd3-2015")]
#[case("NIST SP 800-123 ver1.0")]
#[case("NIST HB 135sec3")]
#[case("NIST IR 8115(spa)")]
fn test_long_and_abbrev_reparse(#[case] input: &str) {
    let id = parse(input).unwrap();
    for style in [Style::Long, Style::Abbrev] {
        let rendered = id.render(style);
        assert_eq!(parse(&rendered).unwrap(), id, "{}", rendered);
    }
}

// === Fields ===

#[test]
fn test_volume_and_part_suffix() {
    let id = parse("NIST SP 1011-v1-pt2").unwrap();
    assert_eq!(id.volume.as_deref(), Some("1"));
    assert_eq!(id.part.as_deref(), Some("2"));
    assert_eq!(id.code, "1011");
}

#[rstest]
#[case("NIST GCR 17-917-45", "17-917-45")]
#[case("NIST GCR 17-917r1", "17-917-1")]
#[case("NIST GCR 17-917, Revision 1", "17-917-1")]
fn test_gcr_revision_folds_into_number(#[case] input: &str, #[case] code: &str) {
    let id = parse(input).unwrap();
    assert_eq!(id.code, code);
    assert_eq!(id.revision, None);
}

#[test]
fn test_hyphenated_series_fallback() {
    let id = parse("NBS CRPL-4").unwrap();
    assert_eq!(id.serie, Series::NbsCrpl);
    assert_eq!(id.code, "4");
    assert_eq!(id.render(Style::Short), "NBS CRPL 4");
}

#[test]
fn test_parenthesized_translation_outside_dotted_list() {
    let id = parse("NIST IR 8115(deu)").unwrap();
    assert_eq!(id.translation.as_deref(), Some("deu"));
    assert_eq!(id.render(Style::Short), "NIST IR 8115(deu)");
    assert_eq!(parse(&id.render(Style::Short)).unwrap(), id);
    assert!(parse("NIST SP(XYZ) 800-53").is_err());
}

#[test]
fn test_circular_month_revision() {
    let id = parse("NBS.CIRC.12e2revjune").unwrap();
    assert_eq!(id.code, "12");
    assert_eq!(id.edition.as_deref(), Some("2"));
    assert_eq!(id.revision.as_deref(), Some("june"));
}

#[test]
fn test_handbook_dated_supplement() {
    let id = parse("NBS.HB.67suppJune1967").unwrap();
    assert_eq!(id.code, "67");
    assert_eq!(id.supplement.as_deref(), Some("June1967"));
}

#[test]
fn test_leading_zeros_preserved() {
    let id = parse("NIST SP 800-53r05").unwrap();
    assert_eq!(id.revision.as_deref(), Some("05"));
}

#[test]
fn test_update_without_number() {
    let id = parse("NIST SP 800-53r4/Upd-2015").unwrap();
    assert_eq!(id.update_number.as_deref(), Some("1"));
    assert_eq!(id.update_year.as_deref(), Some("2015"));
    assert_eq!(id.render(Style::Short), "NIST SP 800-53r4/Upd1-2015");
}

#[rstest]
#[case("NIST SP(IPD) 800-53r5")]
#[case("NIST SP (Initial Public Draft) 800-53, Revision 5")]
#[case("NIST.SP.IPD.800-53r5")]
fn test_stage_spellings(#[case] input: &str) {
    let id = parse(input).unwrap();
    assert_eq!(id.stage, Some(Stage::InitialPublicDraft));
    assert_eq!(id.revision.as_deref(), Some("5"));
}

#[rstest]
#[case("Addendum to NIST SP 800-38A")]
#[case("NIST SP 800-38Ar1 Add.")]
#[case("NIST.SP.800-38A.add-1")]
fn test_addendum_drops_revision(#[case] input: &str) {
    let id = parse(input).unwrap();
    assert!(id.addendum);
    assert_eq!(id.revision, None);
    assert_eq!(id.code, "800-38A");
}

// === Failures ===

#[test]
fn test_circular_without_number_fails() {
    let err = parse("NBS CIRC e").unwrap_err();
    assert!(matches!(err, ParseError::InvalidDocumentNumber { .. }));
    assert_eq!(err.input(), Some("NBS CIRC e"));
}

#[rstest]
#[case("")]
#[case("IEEE 802.11")]
#[case("NIST XYZ 12")]
fn test_unknown_series(#[case] input: &str) {
    let err = parse(input).unwrap_err();
    assert!(matches!(err, ParseError::UnknownSeries { .. }));
    assert!(err.trace().is_some());
}

#[test]
fn test_error_names_original_input() {
    let err = parse("NBS.LCIRC.89a").unwrap_err();
    assert_eq!(err.input(), Some("NBS.LCIRC.89a"));
    let message = err.to_string();
    assert!(message.contains("NBS.LCIRC.89a"));
    assert!(message.contains("\ncause: "));
}
