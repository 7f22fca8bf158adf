// Classification output types.
//
// Confidence is kept numeric in Rust but serialized as a two-decimal string
// ("0.70"), which is the shape downstream consumers of the cached results
// already read. Deserialization accepts either a string or a number.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A relative confidence in [0, 1], rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Self {
        Self((value.clamp(0.0, 1.0) * 100.0).round() / 100.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self::new(value)),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Self::new)
                .map_err(|e| serde::de::Error::custom(format!("invalid confidence {text:?}: {e}"))),
        }
    }
}

/// The best-matching sub-category of an assigned category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryAssignment {
    pub category_id: String,
    pub category_name: String,
}

/// One ranked category in a classification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAssignment {
    pub category_id: String,
    pub category_name: String,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<SubcategoryAssignment>,
}

/// Ordered categories, highest confidence first. Always 2 or 3 entries when
/// produced by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResult {
    pub categories: Vec<CategoryAssignment>,
}

impl ClassificationResult {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryAssignment> {
        self.categories.iter()
    }

    pub fn first(&self) -> Option<&CategoryAssignment> {
        self.categories.first()
    }

    /// Category codes in rank order.
    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.category_id.as_str()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_formats_two_decimals() {
        assert_eq!(Confidence::new(0.7).to_string(), "0.70");
        assert_eq!(Confidence::new(1.0).to_string(), "1.00");
        assert_eq!(Confidence::new(0.8333).to_string(), "0.83");
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
    }

    #[test]
    fn test_serializes_as_string() {
        let result = ClassificationResult {
            categories: vec![CategoryAssignment {
                category_id: "IAB17".to_string(),
                category_name: "Sports".to_string(),
                confidence: Confidence::new(1.0),
                subcategory: None,
            }],
        };
        let json = result.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"categoryId":"IAB17","categoryName":"Sports","confidence":"1.00"}]"#
        );
    }

    #[test]
    fn test_deserializes_string_or_number() {
        let parsed: ClassificationResult = serde_json::from_str(
            r#"[{"categoryId":"IAB12","categoryName":"News","confidence":"0.70"},
                {"categoryId":"IAB19","categoryName":"Technology & Computing","confidence":0.6}]"#,
        )
        .unwrap();
        assert_eq!(parsed.categories[0].confidence, Confidence::new(0.7));
        assert_eq!(parsed.categories[1].confidence.to_string(), "0.60");
        assert_eq!(parsed.ids(), vec!["IAB12", "IAB19"]);
    }
}
