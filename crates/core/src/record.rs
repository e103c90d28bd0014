use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field names (as they appear in the training data)
// ---------------------------------------------------------------------------

pub const PRODUCT_NAME: &str = "Product Name";
pub const YEAR: &str = "Year";
pub const MONTH: &str = "Month";
pub const DAY: &str = "Day";
pub const DAY_OF_WEEK: &str = "DayOfWeek";
pub const SALES_CATEGORY: &str = "Sales Category";
pub const REASON: &str = "Reason";
pub const MEDICINE_TYPE: &str = "Medicine Type";
pub const MEDICINE_CATEGORY: &str = "Medicine Category";

// ---------------------------------------------------------------------------
// Category defaults
// ---------------------------------------------------------------------------

/// Values for the categorical fields a simplified prediction does not ask for.
///
/// The training schema expects these fields, so every record carries them.
/// `"Vitemins & Supplements"` is spelled the way the training data spells it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryDefaults {
    pub sales_category: String,
    pub reason: String,
    pub medicine_type: String,
    pub medicine_category: String,
}

impl Default for CategoryDefaults {
    fn default() -> Self {
        Self {
            sales_category: "low".into(),
            reason: "Flu Season".into(),
            medicine_type: "Tablet".into(),
            medicine_category: "Vitemins & Supplements".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Partial record
// ---------------------------------------------------------------------------

/// What the caller supplies: product, year, month, and the categorical fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRecord {
    pub product_name: String,
    pub year: i32,
    /// Lower-cased month as given (`"march"`, `"mar"`, `"3"`).
    pub month: String,
    /// Remaining categorical fields in insertion order: (field, value).
    pub categories: Vec<(String, String)>,
}

impl PartialRecord {
    pub fn new(product_name: impl Into<String>, year: i32, month: &str) -> Self {
        Self {
            product_name: product_name.into(),
            year,
            month: month.trim().to_lowercase(),
            categories: Vec::new(),
        }
    }

    /// Record with every categorical field taken from `defaults`.
    pub fn with_defaults(
        product_name: impl Into<String>,
        year: i32,
        month: &str,
        defaults: &CategoryDefaults,
    ) -> Self {
        Self::new(product_name, year, month)
            .with_category(SALES_CATEGORY, &defaults.sales_category)
            .with_category(REASON, &defaults.reason)
            .with_category(MEDICINE_TYPE, &defaults.medicine_type)
            .with_category(MEDICINE_CATEGORY, &defaults.medicine_category)
    }

    /// Set a categorical field, replacing any previous value for it.
    pub fn with_category(mut self, field: &str, value: &str) -> Self {
        match self.categories.iter_mut().find(|(f, _)| f == field) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.categories.push((field.to_string(), value.to_string())),
        }
        self
    }

    pub fn category(&self, field: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_is_lowercased() {
        let rec = PartialRecord::new("Paracetamol", 2023, " March ");
        assert_eq!(rec.month, "march");
    }

    #[test]
    fn defaults_fill_all_categories() {
        let rec = PartialRecord::with_defaults("Paracetamol", 2023, "march", &CategoryDefaults::default());
        assert_eq!(rec.categories.len(), 4);
        assert_eq!(rec.category(SALES_CATEGORY), Some("low"));
        assert_eq!(rec.category(REASON), Some("Flu Season"));
        assert_eq!(rec.category(MEDICINE_TYPE), Some("Tablet"));
        assert_eq!(rec.category(MEDICINE_CATEGORY), Some("Vitemins & Supplements"));
    }

    #[test]
    fn with_category_replaces_existing_value() {
        let rec = PartialRecord::with_defaults("Paracetamol", 2023, "march", &CategoryDefaults::default())
            .with_category(SALES_CATEGORY, "high");
        assert_eq!(rec.categories.len(), 4);
        assert_eq!(rec.category(SALES_CATEGORY), Some("high"));
    }

    #[test]
    fn defaults_deserialize_partially() {
        let d: CategoryDefaults = serde_json::from_str(r#"{"reason": "Promotion"}"#).unwrap();
        assert_eq!(d.reason, "Promotion");
        assert_eq!(d.sales_category, "low");
    }
}
