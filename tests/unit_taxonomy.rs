// Unit tests for the taxonomy store: built-in table shape, JSON assets, and
// validation failures.

use iabtag::taxonomy::{Category, Subcategory, Taxonomy};

fn category(code: &str, keywords: &[&str]) -> Category {
    Category {
        code: code.to_string(),
        name: format!("Category {code}"),
        subcategories: Vec::new(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

// ============================================================
// Built-in table
// ============================================================

#[test]
fn builtin_has_all_boosted_categories() {
    let taxonomy = Taxonomy::builtin();
    for code in [
        "IAB1", "IAB3", "IAB5", "IAB7", "IAB9", "IAB11", "IAB12", "IAB13", "IAB17", "IAB19",
        "IAB20",
    ] {
        assert!(taxonomy.get(code).is_some(), "missing {code}");
    }
}

#[test]
fn builtin_names_match_fallbacks() {
    let taxonomy = Taxonomy::builtin();
    assert_eq!(taxonomy.get("IAB12").unwrap().name, "News");
    assert_eq!(
        taxonomy.get("IAB19").unwrap().name,
        "Technology & Computing"
    );
}

#[test]
fn builtin_keywords_are_lowercase() {
    for category in Taxonomy::builtin().categories() {
        for keyword in &category.keywords {
            assert_eq!(keyword, &keyword.to_lowercase(), "{} keyword", category.code);
        }
    }
}

#[test]
fn default_is_builtin() {
    assert_eq!(Taxonomy::default(), Taxonomy::builtin());
}

// ============================================================
// JSON assets
// ============================================================

#[test]
fn json_asset_round_trips() {
    let builtin = Taxonomy::builtin();
    let json = builtin.to_json().unwrap();
    let parsed = Taxonomy::from_json(&json).unwrap();
    assert_eq!(parsed, builtin);
}

#[test]
fn json_asset_orders_codes_numerically() {
    let json = r#"{
        "IAB10": {"name": "Home & Garden", "keywords": ["garden"]},
        "IAB2": {
            "name": "Automotive",
            "subcategories": {"IAB2-10": "Electric Vehicle", "IAB2-2": "Auto Repair", "IAB2-1": "Auto Parts"},
            "keywords": ["Car", " Vehicle "]
        }
    }"#;
    let taxonomy = Taxonomy::from_json(json).unwrap();
    let codes: Vec<&str> = taxonomy.categories().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["IAB2", "IAB10"]);

    let auto = taxonomy.get("IAB2").unwrap();
    assert_eq!(auto.keywords, vec!["car", "vehicle"]);
    let sub_codes: Vec<&str> = auto.subcategories.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(sub_codes, vec!["IAB2-1", "IAB2-2", "IAB2-10"]);
}

#[test]
fn json_asset_rejects_malformed_input() {
    assert!(Taxonomy::from_json("not json").is_err());
    assert!(Taxonomy::from_json(r#"{"IAB1": {"name": "Arts"}}"#).is_err());
    assert!(Taxonomy::from_json("{}").is_err());
}

#[test]
fn load_reports_missing_file() {
    let err = Taxonomy::load(std::path::Path::new("/nonexistent/taxonomy.json")).unwrap_err();
    assert!(format!("{err:#}").contains("taxonomy"));
}

// ============================================================
// Validation
// ============================================================

#[test]
fn rejects_duplicate_codes() {
    let result = Taxonomy::new(vec![category("IAB1", &["art"]), category("IAB1", &["film"])]);
    assert!(result.is_err());
}

#[test]
fn rejects_empty_keyword_list() {
    assert!(Taxonomy::new(vec![category("IAB1", &[])]).is_err());
}

#[test]
fn rejects_blank_keyword() {
    assert!(Taxonomy::new(vec![category("IAB1", &["art", "  "])]).is_err());
}

#[test]
fn rejects_empty_table_and_blank_names() {
    assert!(Taxonomy::new(Vec::new()).is_err());

    let mut nameless = category("IAB1", &["art"]);
    nameless.name = " ".to_string();
    assert!(Taxonomy::new(vec![nameless]).is_err());
}

#[test]
fn accepts_minimal_custom_table() {
    let mut sports = category("S1", &["cricket"]);
    sports.subcategories.push(Subcategory {
        code: "S1-1".to_string(),
        name: "Test Cricket".to_string(),
    });
    let taxonomy = Taxonomy::new(vec![sports, category("N1", &["news"])]).unwrap();
    assert_eq!(taxonomy.len(), 2);
}
