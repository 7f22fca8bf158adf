// Taxonomy store — the fixed table of IAB content categories.
//
// The built-in table ships with the binary. A JSON asset with the same shape
// can replace it at startup (IABTAG_TAXONOMY_PATH) so keyword lists can be
// tuned without a rebuild. Every constructor validates: a malformed table is a
// configuration error and should stop the process before any text is scored.

mod builtin;

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Category code for News, the catch-all fallback.
pub const NEWS_CODE: &str = "IAB12";
/// Category code for Technology & Computing, the secondary fallback.
pub const TECHNOLOGY_CODE: &str = "IAB19";

/// A single taxonomy category with its trigger keywords.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, e.g. "IAB17"
    pub code: String,
    /// Display name, e.g. "Sports"
    pub name: String,
    /// Sub-categories in numbering order
    pub subcategories: Vec<Subcategory>,
    /// Lowercase trigger words and phrases
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub code: String,
    pub name: String,
}

/// The complete category table.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

/// On-disk shape of one category in a JSON taxonomy asset.
#[derive(Debug, Serialize, Deserialize)]
struct CategoryAsset {
    name: String,
    #[serde(default)]
    subcategories: BTreeMap<String, String>,
    keywords: Vec<String>,
}

impl Taxonomy {
    /// The built-in 23-category IAB table.
    pub fn builtin() -> Self {
        let categories = builtin::CATEGORIES
            .iter()
            .map(|def| Category {
                code: def.code.to_string(),
                name: def.name.to_string(),
                subcategories: def
                    .subcategories
                    .iter()
                    .enumerate()
                    .map(|(i, name)| Subcategory {
                        code: format!("{}-{}", def.code, i + 1),
                        name: name.to_string(),
                    })
                    .collect(),
                keywords: def.keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        Self { categories }
    }

    /// Build a taxonomy from an explicit category list, validating it.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let taxonomy = Self { categories };
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Parse a JSON taxonomy asset: an object mapping category code to
    /// `{ "name", "subcategories": { code: name }, "keywords": [...] }`.
    ///
    /// Keywords are lowercased. Categories and sub-categories are ordered by
    /// the number at the end of their code, so "IAB2" sorts before "IAB10".
    pub fn from_json(json: &str) -> Result<Self> {
        let assets: BTreeMap<String, CategoryAsset> =
            serde_json::from_str(json).context("Failed to parse taxonomy JSON")?;

        let mut categories: Vec<Category> = assets
            .into_iter()
            .map(|(code, asset)| {
                let mut subcategories: Vec<Subcategory> = asset
                    .subcategories
                    .into_iter()
                    .map(|(code, name)| Subcategory { code, name })
                    .collect();
                subcategories.sort_by(|a, b| code_order(&a.code).cmp(&code_order(&b.code)));

                Category {
                    code,
                    name: asset.name,
                    subcategories,
                    keywords: asset
                        .keywords
                        .iter()
                        .map(|k| k.trim().to_lowercase())
                        .collect(),
                }
            })
            .collect();
        categories.sort_by(|a, b| code_order(&a.code).cmp(&code_order(&b.code)));

        Self::new(categories)
    }

    /// Load a JSON taxonomy asset from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read taxonomy file {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid taxonomy file {}", path.display()))
    }

    /// Serialize to the JSON asset format accepted by `from_json`.
    pub fn to_json(&self) -> Result<String> {
        let assets: BTreeMap<&str, CategoryAsset> = self
            .categories
            .iter()
            .map(|c| {
                (
                    c.code.as_str(),
                    CategoryAsset {
                        name: c.name.clone(),
                        subcategories: c
                            .subcategories
                            .iter()
                            .map(|s| (s.code.clone(), s.name.clone()))
                            .collect(),
                        keywords: c.keywords.clone(),
                    },
                )
            })
            .collect();
        Ok(serde_json::to_string_pretty(&assets)?)
    }

    /// Categories in table order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.code == code)
    }

    /// Reject tables that would produce unscoreable or ambiguous categories.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            anyhow::bail!("Taxonomy has no categories");
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.code.trim().is_empty() {
                anyhow::bail!("Taxonomy contains a category with an empty code");
            }
            if !seen.insert(category.code.as_str()) {
                anyhow::bail!("Duplicate category code in taxonomy: {}", category.code);
            }
            if category.name.trim().is_empty() {
                anyhow::bail!("Category {} has an empty name", category.code);
            }
            if category.keywords.is_empty() {
                anyhow::bail!(
                    "Category {} has no keywords and could never be matched",
                    category.code
                );
            }
            if let Some(blank) = category.keywords.iter().find(|k| k.trim().is_empty()) {
                anyhow::bail!(
                    "Category {} has a blank keyword ({:?})",
                    category.code,
                    blank
                );
            }
        }

        Ok(())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Sort key for codes like "IAB7" or "IAB17-12": the text before the trailing
/// number, then the number itself.
fn code_order(code: &str) -> (&str, u64) {
    let digits = code.chars().rev().take_while(|c| c.is_ascii_digit()).count();
    let (prefix, number) = code.split_at(code.len() - digits);
    (prefix, number.parse().unwrap_or(0))
}
