use std::path::PathBuf;

use rxsales_core::record::SALES_CATEGORY;
use rxsales_core::{CategoryDefaults, FeatureValue, LabelMapping, PartialRecord, ReferenceSchema};
use rxsales_recon::{align_to_schema, reconcile, ReconError};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_artifacts() -> (LabelMapping, ReferenceSchema) {
    let dir = fixtures_dir();
    let labels = std::fs::read_to_string(dir.join("label_encoder.json")).unwrap();
    let schema = std::fs::read_to_string(dir.join("data_columns.json")).unwrap();
    (
        serde_json::from_str(&labels).unwrap(),
        serde_json::from_str(&schema).unwrap(),
    )
}

fn record(product: &str, year: i32, month: &str) -> PartialRecord {
    PartialRecord::with_defaults(product, year, month, &CategoryDefaults::default())
}

// -------------------------------------------------------------------------
// Feature row shape
// -------------------------------------------------------------------------

#[test]
fn paracetamol_march_2023() {
    let (labels, schema) = load_artifacts();
    let row = reconcile(&record("Paracetamol", 2023, "march"), &labels, &schema).unwrap();

    assert_eq!(row.columns(), schema.columns());
    assert_eq!(
        row.to_dense(),
        vec![
            3.0,    // Product Name
            2023.0, // Year
            3.0,    // Month
            1.0,    // Day
            2.0,    // DayOfWeek (Wednesday)
            0.0, 1.0, 0.0, // Sales Category high/low/medium
            1.0, 0.0, // Reason Flu Season/Promotion
            0.0, 1.0, // Medicine Type Syrup/Tablet
            0.0, 1.0, // Medicine Category Pain Relief/Vitemins
        ]
    );
}

#[test]
fn month_case_and_abbreviation_agree() {
    let (labels, schema) = load_artifacts();
    let full = reconcile(&record("Ibuprofen", 2024, "February"), &labels, &schema).unwrap();
    let abbr = reconcile(&record("Ibuprofen", 2024, "FEB"), &labels, &schema).unwrap();
    let num = reconcile(&record("Ibuprofen", 2024, "2"), &labels, &schema).unwrap();
    assert_eq!(full, abbr);
    assert_eq!(full, num);
    // 2024-02-01 was a Thursday
    assert_eq!(full.get("DayOfWeek"), Some(FeatureValue::Int(3)));
}

#[test]
fn overridden_default_moves_indicator() {
    let (labels, schema) = load_artifacts();
    let rec = record("Amoxicillin", 2023, "july").with_category(SALES_CATEGORY, "high");
    let row = reconcile(&rec, &labels, &schema).unwrap();
    assert_eq!(row.get("Sales Category_high"), Some(FeatureValue::Bool(true)));
    assert_eq!(row.get("Sales Category_low"), Some(FeatureValue::ZERO));
}

#[test]
fn unseen_category_value_is_zero_everywhere() {
    let (labels, schema) = load_artifacts();
    let rec = record("Amoxicillin", 2023, "july").with_category(SALES_CATEGORY, "extreme");
    let row = reconcile(&rec, &labels, &schema).unwrap();
    assert_eq!(row.len(), schema.len());
    for col in ["Sales Category_high", "Sales Category_low", "Sales Category_medium"] {
        assert!(!row.get(col).unwrap().is_set(), "{col} should be zero");
    }
}

#[test]
fn reconciliation_is_idempotent() {
    let (labels, schema) = load_artifacts();
    let row = reconcile(&record("Cetirizine", 2022, "december"), &labels, &schema).unwrap();
    let again = align_to_schema(row.iter(), &schema);
    assert_eq!(again, row);
    assert_eq!(align_to_schema(again.iter(), &schema), row);
}

// -------------------------------------------------------------------------
// Errors
// -------------------------------------------------------------------------

#[test]
fn unknown_product_is_rejected() {
    let (labels, schema) = load_artifacts();
    let err = reconcile(&record("Aspirin", 2023, "march"), &labels, &schema).unwrap_err();
    assert!(matches!(err, ReconError::UnknownCategory { ref value, .. } if value == "Aspirin"));
}

#[test]
fn product_lookup_is_case_sensitive() {
    let (labels, schema) = load_artifacts();
    let err = reconcile(&record("paracetamol", 2023, "march"), &labels, &schema).unwrap_err();
    assert!(matches!(err, ReconError::UnknownCategory { .. }));
}

#[test]
fn invalid_month_is_rejected() {
    let (labels, schema) = load_artifacts();
    let err = reconcile(&record("Paracetamol", 2023, "invalidmonth"), &labels, &schema).unwrap_err();
    assert_eq!(
        err,
        ReconError::InvalidDate { year: 2023, month: "invalidmonth".into() }
    );
    assert_eq!(err.to_string(), "invalid date: year 2023, month 'invalidmonth'");
}
