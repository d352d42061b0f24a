use serde::{Deserialize, Serialize};

use crate::resume::document::{str_field, ResumeDocument};
use crate::resume::schema::SectionKey;

/// One structural gap found in a normalized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureWarning {
    pub path: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureReport {
    pub passed: bool,
    pub warnings: Vec<StructureWarning>,
}

/// Checks that the fields downstream renderers lean on are populated.
///
/// Warnings only; normalization has already made the document schema-valid,
/// this reports what the parse step most likely failed to pick up:
/// - `basics.name` / `basics.headline` blank
/// - no experience items
/// - experience items without `company` or `position`
/// - skill items without `name`
pub fn check_structure(doc: &ResumeDocument) -> StructureReport {
    let mut warnings = Vec::new();

    for field in ["name", "headline"] {
        if doc.basic_str(field).map_or(true, |v| v.trim().is_empty()) {
            warnings.push(StructureWarning {
                path: format!("basics.{field}"),
                message: format!("Missing basics.{field}"),
            });
        }
    }

    let experience = doc.items(SectionKey::Experience);
    if experience.is_empty() {
        warnings.push(StructureWarning {
            path: "sections.experience.items".to_string(),
            message: "No experience items found".to_string(),
        });
    }
    for (index, item) in experience.iter().enumerate() {
        for field in ["company", "position"] {
            if str_field(item, field).trim().is_empty() {
                warnings.push(StructureWarning {
                    path: format!("sections.experience.items[{index}].{field}"),
                    message: format!("Experience item {index} missing {field}"),
                });
            }
        }
    }

    for (index, item) in doc.items(SectionKey::Skills).iter().enumerate() {
        if str_field(item, "name").trim().is_empty() {
            warnings.push(StructureWarning {
                path: format!("sections.skills.items[{index}].name"),
                message: format!("Skill item {index} missing name"),
            });
        }
    }

    StructureReport {
        passed: warnings.is_empty(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::normalize;
    use serde_json::json;

    #[test]
    fn test_complete_document_passes() {
        let doc = normalize(&json!({
            "basics": { "name": "Ada", "headline": "Engineer" },
            "sections": {
                "experience": { "items": [{ "company": "Acme", "position": "Lead" }] },
                "skills": { "items": [{ "name": "Rust" }] }
            }
        }))
        .unwrap();

        let report = check_structure(&doc);
        assert!(report.passed, "{:?}", report.warnings);
    }

    #[test]
    fn test_empty_document_reports_basics_and_experience() {
        let report = check_structure(&normalize(&json!({})).unwrap());
        assert!(!report.passed);
        let paths: Vec<&str> = report.warnings.iter().map(|w| w.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["basics.name", "basics.headline", "sections.experience.items"]
        );
    }

    #[test]
    fn test_item_level_gaps_are_indexed() {
        let doc = normalize(&json!({
            "basics": { "name": "Ada", "headline": "Engineer" },
            "sections": {
                "experience": { "items": [
                    { "company": "Acme", "position": "Lead" },
                    { "company": "  " }
                ]},
                "skills": { "items": [{ "keywords": ["rust"] }] }
            }
        }))
        .unwrap();

        let messages: Vec<String> = check_structure(&doc)
            .warnings
            .into_iter()
            .map(|w| w.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Experience item 1 missing company",
                "Experience item 1 missing position",
                "Skill item 0 missing name",
            ]
        );
    }

    #[test]
    fn test_null_name_is_reported() {
        let doc = normalize(&json!({ "basics": { "name": null, "headline": "Engineer" } })).unwrap();
        let report = check_structure(&doc);
        assert_eq!(report.warnings[0].path, "basics.name");
    }
}
