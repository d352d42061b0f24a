//! Canonical resume template and the fixed set of section keys.
//!
//! `default_template()` builds a fresh value on every call, so callers can
//! mutate what they get back without affecting anyone else.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The fixed, enumerable set of sections every document carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Summary,
    Experience,
    Skills,
    Projects,
    Education,
    Awards,
    Certifications,
    Profiles,
    Interests,
    Languages,
    Volunteer,
    References,
    Publications,
    Custom,
}

impl SectionKey {
    pub const ALL: [SectionKey; 14] = [
        SectionKey::Summary,
        SectionKey::Experience,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Education,
        SectionKey::Awards,
        SectionKey::Certifications,
        SectionKey::Profiles,
        SectionKey::Interests,
        SectionKey::Languages,
        SectionKey::Volunteer,
        SectionKey::References,
        SectionKey::Publications,
        SectionKey::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Education => "education",
            SectionKey::Awards => "awards",
            SectionKey::Certifications => "certifications",
            SectionKey::Profiles => "profiles",
            SectionKey::Interests => "interests",
            SectionKey::Languages => "languages",
            SectionKey::Volunteer => "volunteer",
            SectionKey::References => "references",
            SectionKey::Publications => "publications",
            SectionKey::Custom => "custom",
        }
    }

    /// Human-readable section title used in the default section shell.
    pub fn display_name(self) -> &'static str {
        match self {
            SectionKey::Summary => "Summary",
            SectionKey::Experience => "Experience",
            SectionKey::Skills => "Skills",
            SectionKey::Projects => "Projects",
            SectionKey::Education => "Education",
            SectionKey::Awards => "Awards",
            SectionKey::Certifications => "Certifications",
            SectionKey::Profiles => "Profiles",
            SectionKey::Interests => "Interests",
            SectionKey::Languages => "Languages",
            SectionKey::Volunteer => "Volunteering",
            SectionKey::References => "References",
            SectionKey::Publications => "Publications",
            SectionKey::Custom => "Custom",
        }
    }

    /// Prefix for generated item ids, e.g. `award-3f2a…`.
    pub fn item_prefix(self) -> &'static str {
        match self {
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Skills => "skill",
            SectionKey::Projects => "project",
            SectionKey::Education => "education",
            SectionKey::Awards => "award",
            SectionKey::Certifications => "certification",
            SectionKey::Profiles => "profile",
            SectionKey::Interests => "interest",
            SectionKey::Languages => "language",
            SectionKey::Volunteer => "volunteer",
            SectionKey::References => "reference",
            SectionKey::Publications => "publication",
            SectionKey::Custom => "custom",
        }
    }

    /// `true` for sections that own an `items` list.
    pub fn has_items(self) -> bool {
        !matches!(self, SectionKey::Summary | SectionKey::Custom)
    }
}

/// A `{label, href}` link pair. Bare-string URLs never survive normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub href: String,
}

impl Link {
    pub fn from_href(href: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            href: href.into(),
        }
    }

    pub fn to_value(&self) -> Value {
        json!({ "label": self.label, "href": self.href })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Default template
// ────────────────────────────────────────────────────────────────────────────

/// Default shell for a single section.
pub fn default_section(key: SectionKey) -> Value {
    match key {
        SectionKey::Summary => json!({
            "id": "summary",
            "name": key.display_name(),
            "columns": 1,
            "visible": true,
            "content": "",
        }),
        SectionKey::Custom => Value::Object(Map::new()),
        _ => json!({
            "id": key.as_str(),
            "name": key.display_name(),
            "columns": 1,
            "visible": true,
            "items": [],
        }),
    }
}

/// Default `sections` object with all fourteen keys present.
pub fn default_sections() -> Map<String, Value> {
    SectionKey::ALL
        .into_iter()
        .map(|key| (key.as_str().to_string(), default_section(key)))
        .collect()
}

pub fn default_basics() -> Value {
    json!({
        "name": "",
        "headline": "",
        "email": "",
        "phone": "",
        "location": "",
        "url": Link::default().to_value(),
        "customFields": [],
        "picture": {
            "url": "",
            "size": 64,
            "aspectRatio": 1,
            "borderRadius": 0,
            "effects": {
                "hidden": false,
                "border": false,
                "grayscale": false
            }
        }
    })
}

pub fn default_metadata() -> Value {
    json!({
        "css": { "value": "", "visible": false },
        "page": {
            "margin": 18,
            "format": "a4",
            "options": { "breakLine": true, "pageNumbers": true }
        },
        "notes": "",
        "theme": {
            "background": "#ffffff",
            "text": "#000000",
            "primary": "#dc2626"
        },
        "layout": [[
            ["summary", "experience", "projects", "skills", "awards", "certifications", "education"],
            ["interests", "publications", "volunteer", "profiles", "references", "languages"]
        ]],
        "template": "rhyhorn",
        "typography": {
            "font": {
                "family": "IBM Plex Serif",
                "subset": "latin",
                "variants": ["regular", "italic", "600"],
                "size": 14
            },
            "lineHeight": 1.5,
            "hideIcons": true,
            "underlineLinks": true
        }
    })
}

/// A fresh, independent copy of the canonical resume template.
pub fn default_template() -> Map<String, Value> {
    let mut template = Map::new();
    template.insert("basics".to_string(), default_basics());
    template.insert("metadata".to_string(), default_metadata());
    template.insert("sections".to_string(), Value::Object(default_sections()));
    template
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_all_sections() {
        let template = default_template();
        let sections = template["sections"].as_object().unwrap();
        assert_eq!(sections.len(), 14);
        for key in SectionKey::ALL {
            assert!(sections.contains_key(key.as_str()), "missing {}", key.as_str());
        }
        assert_eq!(sections["summary"]["content"], "");
        assert_eq!(sections["experience"]["items"], json!([]));
        assert!(sections["custom"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_template_copies_are_independent() {
        let mut first = default_template();
        first
            .get_mut("basics")
            .and_then(Value::as_object_mut)
            .unwrap()
            .insert("name".to_string(), json!("Changed"));

        let second = default_template();
        assert_eq!(second["basics"]["name"], "");
    }

    #[test]
    fn test_basics_url_is_link_pair() {
        let basics = default_basics();
        assert_eq!(basics["url"], json!({ "label": "", "href": "" }));
    }

    #[test]
    fn test_only_summary_and_custom_lack_items() {
        let without_items: Vec<_> = SectionKey::ALL
            .into_iter()
            .filter(|k| !k.has_items())
            .collect();
        assert_eq!(without_items, vec![SectionKey::Summary, SectionKey::Custom]);
    }
}
