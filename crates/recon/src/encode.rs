//! Categorical encodings: label codes and one-hot indicator columns.

use rxsales_core::{FeatureValue, LabelMapping};

use crate::error::ReconError;

/// Integer code for `value` under `mapping`. Unseen values are an error: a
/// category the model never saw has no learned signal to fall back on.
pub fn encode_label(mapping: &LabelMapping, field: &str, value: &str) -> Result<i64, ReconError> {
    mapping.encode(value).ok_or_else(|| ReconError::UnknownCategory {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Column name for an indicator: `<field>_<value>`.
pub fn indicator_column(field: &str, value: &str) -> String {
    format!("{field}_{value}")
}

/// One `true` indicator per categorical field. Only the record's own values
/// produce columns; the rest of the vocabulary comes from the schema.
pub fn expand_indicators(categories: &[(String, String)]) -> Vec<(String, FeatureValue)> {
    categories
        .iter()
        .map(|(field, value)| (indicator_column(field, value), FeatureValue::Bool(true)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label_names_field_and_value() {
        let mapping = LabelMapping::new(vec!["Ibuprofen".into()]).unwrap();
        assert_eq!(encode_label(&mapping, "Product Name", "Ibuprofen"), Ok(0));
        let err = encode_label(&mapping, "Product Name", "Aspirin").unwrap_err();
        assert_eq!(err.to_string(), "unknown Product Name 'Aspirin': not present in the label mapping");
    }

    #[test]
    fn indicator_names_keep_spaces() {
        assert_eq!(
            indicator_column("Medicine Category", "Vitemins & Supplements"),
            "Medicine Category_Vitemins & Supplements"
        );
    }

    #[test]
    fn expands_one_column_per_field() {
        let cats = vec![
            ("Sales Category".to_string(), "low".to_string()),
            ("Reason".to_string(), "Flu Season".to_string()),
        ];
        let cols = expand_indicators(&cats);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0], ("Sales Category_low".to_string(), FeatureValue::Bool(true)));
        assert_eq!(cols[1].0, "Reason_Flu Season");
    }
}
