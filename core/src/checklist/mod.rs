use crate::assets::{AssetRole, AssetSpec};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const CHECKLIST_VERSION_V1: &str = "site_checklist_v1";

/// Categories run in declaration order of this enum; checklists must list them ascending.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    FILE_STRUCTURE,
    MARKUP_CONTENT,
    STYLESHEET_CONTENT,
    SCRIPT_CONTENT,
    MARKUP_VALIDATION,
    RESPONSIVE_DESIGN,
    ACCESSIBILITY,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FILE_STRUCTURE => "FILE_STRUCTURE",
            Category::MARKUP_CONTENT => "MARKUP_CONTENT",
            Category::STYLESHEET_CONTENT => "STYLESHEET_CONTENT",
            Category::SCRIPT_CONTENT => "SCRIPT_CONTENT",
            Category::MARKUP_VALIDATION => "MARKUP_VALIDATION",
            Category::RESPONSIVE_DESIGN => "RESPONSIVE_DESIGN",
            Category::ACCESSIBILITY => "ACCESSIBILITY",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Category::FILE_STRUCTURE => "📁 Testing File Structure...",
            Category::MARKUP_CONTENT => "📄 Testing HTML Content...",
            Category::STYLESHEET_CONTENT => "🎨 Testing CSS File...",
            Category::SCRIPT_CONTENT => "⚡ Testing JavaScript File...",
            Category::MARKUP_VALIDATION => "✅ Testing HTML Validation...",
            Category::RESPONSIVE_DESIGN => "📱 Testing Responsive Design Elements...",
            Category::ACCESSIBILITY => "♿ Testing Accessibility Features...",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    pub checklist_version: String,
    pub assets: Vec<AssetSpec>,
    pub categories: Vec<ChecklistCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistCategory {
    pub category: Category,
    /// Assets that must be readable before any check in this category runs.
    #[serde(default)]
    pub requires: Vec<String>,
    /// Description of the single failing result emitted when `requires` is not met.
    #[serde(default)]
    pub unavailable_description: String,
    pub checks: Vec<ChecklistCheck>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistCheck {
    pub check_id: String,
    pub description: String,
    pub predicate: Predicate,
}

/// One boolean rule over the surface text of an asset. No markup is parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    AssetExists {
        asset: String,
    },
    /// Absence yields a warning note, never a failure.
    RecommendedExists {
        asset: String,
    },
    StartsWith {
        asset: String,
        prefix: String,
        #[serde(default)]
        ignore_case: bool,
    },
    Contains {
        asset: String,
        needle: String,
        #[serde(default)]
        ignore_case: bool,
    },
    ContainsAll {
        asset: String,
        needles: Vec<String>,
        #[serde(default)]
        ignore_case: bool,
    },
    ContainsAny {
        asset: String,
        needles: Vec<String>,
        #[serde(default)]
        ignore_case: bool,
    },
    NotBlank {
        asset: String,
    },
    Matches {
        asset: String,
        pattern: String,
    },
    TagBalance {
        asset: String,
    },
    ImagesHaveAlt {
        asset: String,
    },
    LinksDescriptive {
        asset: String,
    },
}

impl Predicate {
    pub fn asset(&self) -> &str {
        match self {
            Predicate::AssetExists { asset }
            | Predicate::RecommendedExists { asset }
            | Predicate::StartsWith { asset, .. }
            | Predicate::Contains { asset, .. }
            | Predicate::ContainsAll { asset, .. }
            | Predicate::ContainsAny { asset, .. }
            | Predicate::NotBlank { asset }
            | Predicate::Matches { asset, .. }
            | Predicate::TagBalance { asset }
            | Predicate::ImagesHaveAlt { asset }
            | Predicate::LinksDescriptive { asset } => asset,
        }
    }

    /// Existence predicates inspect the load state, not the content.
    pub fn is_existence(&self) -> bool {
        matches!(
            self,
            Predicate::AssetExists { .. } | Predicate::RecommendedExists { .. }
        )
    }
}

impl Checklist {
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let checklist: Checklist = serde_json::from_str(json)?;
        checklist.validate()?;
        Ok(checklist)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let mut asset_names: BTreeSet<&str> = BTreeSet::new();
        for a in &self.assets {
            if !asset_names.insert(a.name.as_str()) {
                return invalid(format!("duplicate asset name {}", a.name));
            }
        }

        let mut check_ids: BTreeSet<&str> = BTreeSet::new();
        let mut prev: Option<Category> = None;
        for cat in &self.categories {
            if let Some(p) = prev {
                if cat.category <= p {
                    return invalid(format!(
                        "category {} out of order or repeated",
                        cat.category.as_str()
                    ));
                }
            }
            prev = Some(cat.category);

            for r in &cat.requires {
                match self.assets.iter().find(|a| &a.name == r) {
                    None => {
                        return invalid(format!(
                            "category {} requires undeclared asset {}",
                            cat.category.as_str(),
                            r
                        ))
                    }
                    // recommended assets are never read
                    Some(a) if a.role == AssetRole::RECOMMENDED => {
                        return invalid(format!(
                            "category {} requires recommended asset {}",
                            cat.category.as_str(),
                            r
                        ))
                    }
                    Some(_) => {}
                }
            }
            if !cat.requires.is_empty() && cat.unavailable_description.trim().is_empty() {
                return invalid(format!(
                    "category {} requires assets but has no unavailable_description",
                    cat.category.as_str()
                ));
            }

            for c in &cat.checks {
                if !check_ids.insert(c.check_id.as_str()) {
                    return invalid(format!("duplicate check_id {}", c.check_id));
                }
                let asset = c.predicate.asset();
                let spec = match self.assets.iter().find(|a| a.name == asset) {
                    Some(s) => s,
                    None => {
                        return invalid(format!(
                            "{} references undeclared asset {}",
                            c.check_id, asset
                        ))
                    }
                };
                if let Predicate::RecommendedExists { .. } = c.predicate {
                    if spec.role != AssetRole::RECOMMENDED {
                        return invalid(format!(
                            "{} checks {} as recommended but it is declared {:?}",
                            c.check_id, asset, spec.role
                        ));
                    }
                }
                if !c.predicate.is_existence() && !cat.requires.iter().any(|r| r == asset) {
                    return invalid(format!(
                        "{} reads {} which category {} does not require",
                        c.check_id,
                        asset,
                        cat.category.as_str()
                    ));
                }
                match &c.predicate {
                    Predicate::ContainsAll { needles, .. } | Predicate::ContainsAny { needles, .. }
                        if needles.is_empty() =>
                    {
                        return invalid(format!("{} has no needles", c.check_id));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

fn invalid(msg: String) -> CoreResult<()> {
    Err(CoreError::InvalidChecklist(msg))
}

/// The embedded default checklist for a single-page site.
pub fn checklist_v1() -> CoreResult<Checklist> {
    let json = include_str!("checklist_v1.json");
    let checklist = Checklist::from_json_str(json)?;
    if checklist.checklist_version != CHECKLIST_VERSION_V1 {
        return Err(CoreError::InvalidChecklist(format!(
            "embedded checklist is not {}",
            CHECKLIST_VERSION_V1
        )));
    }
    Ok(checklist)
}
