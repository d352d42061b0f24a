//! Normalizer: turns any resume-like JSON object into a `ResumeDocument`.
//!
//! Steps:
//! 1. Start from a fresh default template.
//! 2. Shallow-merge `basics` and `metadata` over the defaults (input wins).
//! 3. `sections`, when supplied, replaces the default sections wholesale.
//! 4. Repair pass: every fixed section key exists with a valid shell, every
//!    item has an `id`, a boolean `visible` and a `{label, href}` url.
//!    `awards`, `profiles` and `projects` items are rebuilt field-by-field.
//!
//! Malformed pieces are defaulted, never reported. The only failure is an
//! input that is not a JSON object at all.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::resume::document::ResumeDocument;
use crate::resume::schema::{default_section, default_template, Link, SectionKey};
use crate::resume::ResumeError;

/// Field lists kept by the explicit-rebuild sections. Anything else on
/// those items is dropped.
const AWARD_FIELDS: &[&str] = &["title", "awarder", "date", "summary"];
const PROFILE_FIELDS: &[&str] = &["network", "username", "icon"];
const PROJECT_FIELDS: &[&str] = &["name", "description", "date", "summary"];

/// Normalizes `raw` into a schema-valid document. `raw` is never mutated.
pub fn normalize(raw: &Value) -> Result<ResumeDocument, ResumeError> {
    let raw = raw.as_object().ok_or(ResumeError::NotAnObject {
        found: json_kind(raw),
    })?;

    let mut doc = default_template();

    merge_shallow(&mut doc, "basics", raw.get("basics"));
    merge_shallow(&mut doc, "metadata", raw.get("metadata"));

    if let Some(Value::Object(sections)) = raw.get("sections") {
        doc.insert("sections".to_string(), Value::Object(sections.clone()));
    }

    // Unknown top-level keys ride along untouched.
    for (key, value) in raw {
        if !doc.contains_key(key) {
            doc.insert(key.clone(), value.clone());
        }
    }

    repair_basics(&mut doc);
    repair_sections(&mut doc);

    Ok(ResumeDocument::from_repaired(doc))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn merge_shallow(doc: &mut Map<String, Value>, key: &str, overlay: Option<&Value>) {
    let Some(Value::Object(overlay)) = overlay else {
        return;
    };
    if let Some(Value::Object(target)) = doc.get_mut(key) {
        for (field, value) in overlay {
            target.insert(field.clone(), value.clone());
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Repair pass
// ────────────────────────────────────────────────────────────────────────────

fn repair_basics(doc: &mut Map<String, Value>) {
    let Some(Value::Object(basics)) = doc.get_mut("basics") else {
        return;
    };
    let url = normalize_url(basics.get("url"));
    basics.insert("url".to_string(), url);
    if !basics.get("customFields").is_some_and(Value::is_array) {
        basics.insert("customFields".to_string(), Value::Array(vec![]));
    }
}

fn repair_sections(doc: &mut Map<String, Value>) {
    let mut supplied = match doc.remove("sections") {
        Some(Value::Object(sections)) => sections,
        _ => Map::new(),
    };

    let mut repaired = Map::new();
    for key in SectionKey::ALL {
        let section = supplied.remove(key.as_str());
        repaired.insert(key.as_str().to_string(), repair_section(key, section));
    }

    // Anything left over is a section the schema does not know about. Park it
    // under `custom` so the key set stays fixed without losing data.
    if let Some(Value::Object(custom)) = repaired.get_mut(SectionKey::Custom.as_str()) {
        for (key, value) in supplied {
            custom.entry(key).or_insert(value);
        }
    }

    doc.insert("sections".to_string(), Value::Object(repaired));
}

fn repair_section(key: SectionKey, section: Option<Value>) -> Value {
    match key {
        SectionKey::Summary => repair_summary(section),
        SectionKey::Custom => match section {
            Some(custom @ Value::Object(_)) => custom,
            _ => default_section(key),
        },
        _ => repair_list_section(key, section),
    }
}

fn repair_summary(section: Option<Value>) -> Value {
    let mut shell = default_section(SectionKey::Summary);
    match section {
        Some(Value::Object(mut map)) => {
            if !map.get("content").is_some_and(Value::is_string) {
                map.insert("content".to_string(), Value::String(String::new()));
            }
            backfill_shell(SectionKey::Summary, &mut map);
            Value::Object(map)
        }
        Some(Value::String(content)) => {
            shell["content"] = Value::String(content);
            shell
        }
        _ => shell,
    }
}

fn repair_list_section(key: SectionKey, section: Option<Value>) -> Value {
    let (mut map, items) = match section {
        Some(Value::Object(mut map)) => {
            let items = match map.remove("items") {
                Some(Value::Array(items)) => items,
                _ => vec![],
            };
            backfill_shell(key, &mut map);
            (map, items)
        }
        // A bare list where a section object belongs is read as its items.
        Some(Value::Array(items)) => (shell_map(key), items),
        _ => (shell_map(key), vec![]),
    };

    let items = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(item) => Some(Value::Object(repair_item(key, item))),
            _ => None,
        })
        .collect();
    map.insert("items".to_string(), Value::Array(items));

    Value::Object(map)
}

/// Fills shell keys (`id`, `name`, `columns`, `visible`) the section lacks.
fn backfill_shell(key: SectionKey, map: &mut Map<String, Value>) {
    for (field, value) in shell_map(key) {
        if field != "items" && field != "content" {
            map.entry(field).or_insert(value);
        }
    }
}

fn shell_map(key: SectionKey) -> Map<String, Value> {
    match default_section(key) {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn repair_item(key: SectionKey, item: Map<String, Value>) -> Map<String, Value> {
    match key {
        SectionKey::Awards => rebuild_item(key, &item, AWARD_FIELDS, false),
        SectionKey::Profiles => rebuild_item(key, &item, PROFILE_FIELDS, false),
        SectionKey::Projects => rebuild_item(key, &item, PROJECT_FIELDS, true),
        _ => patch_item(key, item),
    }
}

/// Rebuilds an item from scratch, keeping only the named fields.
fn rebuild_item(
    key: SectionKey,
    item: &Map<String, Value>,
    fields: &[&str],
    with_keywords: bool,
) -> Map<String, Value> {
    let mut rebuilt = Map::new();
    rebuilt.insert("id".to_string(), item_id(key, item.get("id")));
    rebuilt.insert("visible".to_string(), item_visible(item.get("visible")));
    for field in fields {
        rebuilt.insert(field.to_string(), text_or_empty(item.get(*field)));
    }
    if with_keywords {
        let keywords = match item.get("keywords") {
            Some(Value::Array(keywords)) => Value::Array(keywords.clone()),
            _ => Value::Array(vec![]),
        };
        rebuilt.insert("keywords".to_string(), keywords);
    }
    rebuilt.insert("url".to_string(), normalize_url(item.get("url")));
    rebuilt
}

/// Repairs the common fields in place and leaves everything else as supplied.
fn patch_item(key: SectionKey, mut item: Map<String, Value>) -> Map<String, Value> {
    let id = item_id(key, item.get("id"));
    let visible = item_visible(item.get("visible"));
    let url = normalize_url(item.get("url"));
    item.insert("id".to_string(), id);
    item.insert("visible".to_string(), visible);
    item.insert("url".to_string(), url);
    item
}

// ────────────────────────────────────────────────────────────────────────────
// Field-level rules
// ────────────────────────────────────────────────────────────────────────────

/// String url → `{label: "", href}`; anything that is neither a string nor
/// an object → empty pair. Objects keep every key they carry, only a missing
/// or non-string `label`/`href` is filled with `""`.
pub fn normalize_url(url: Option<&Value>) -> Value {
    match url {
        Some(Value::String(href)) => Link::from_href(href.clone()).to_value(),
        Some(Value::Object(obj)) => {
            let mut obj = obj.clone();
            for field in ["label", "href"] {
                if !obj.get(field).is_some_and(Value::is_string) {
                    obj.insert(field.to_string(), Value::String(String::new()));
                }
            }
            Value::Object(obj)
        }
        _ => Link::default().to_value(),
    }
}

fn item_id(key: SectionKey, id: Option<&Value>) -> Value {
    match id {
        Some(Value::String(id)) if !id.trim().is_empty() => Value::String(id.clone()),
        Some(Value::Number(n)) => Value::String(n.to_string()),
        _ => Value::String(format!("{}-{}", key.item_prefix(), Uuid::new_v4().simple())),
    }
}

fn item_visible(visible: Option<&Value>) -> Value {
    Value::Bool(!matches!(visible, Some(Value::Bool(false))))
}

fn text_or_empty(value: Option<&Value>) -> Value {
    match value {
        Some(Value::String(s)) => Value::String(s.clone()),
        Some(Value::Number(n)) => Value::String(n.to_string()),
        Some(Value::Bool(b)) => Value::String(b.to_string()),
        _ => Value::String(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_items(doc: &ResumeDocument) -> Vec<&Value> {
        SectionKey::ALL
            .into_iter()
            .flat_map(|key| doc.items(key).iter())
            .collect()
    }

    #[test]
    fn test_rejects_non_object_input() {
        assert_eq!(
            normalize(&json!("resume text")),
            Err(ResumeError::NotAnObject { found: "string" })
        );
        assert_eq!(
            normalize(&json!([])),
            Err(ResumeError::NotAnObject { found: "array" })
        );
        assert_eq!(
            normalize(&Value::Null),
            Err(ResumeError::NotAnObject { found: "null" })
        );
    }

    #[test]
    fn test_empty_object_yields_full_template() {
        let doc = normalize(&json!({})).unwrap();
        assert_eq!(doc.sections().len(), 14);
        assert_eq!(doc.basic_str("name"), Some(""));
        assert_eq!(doc.clone().into_value()["metadata"]["template"], "rhyhorn");
        assert_eq!(doc.summary_content(), "");
    }

    #[test]
    fn test_basics_merge_keeps_defaults_for_missing_fields() {
        let doc = normalize(&json!({
            "basics": { "name": "Ada Lovelace", "headline": "Engineer", "nickname": "Ada" }
        }))
        .unwrap();

        assert_eq!(doc.basic_str("name"), Some("Ada Lovelace"));
        assert_eq!(doc.basic_str("email"), Some(""));
        assert_eq!(doc.basic_str("nickname"), Some("Ada"));
        assert_eq!(doc.basics()["picture"]["size"], 64);
    }

    #[test]
    fn test_metadata_merge_is_shallow() {
        let doc = normalize(&json!({
            "metadata": { "theme": { "primary": "#000000" } }
        }))
        .unwrap();

        // The supplied theme replaces the default theme object entirely.
        let value = doc.into_value();
        let metadata = &value["metadata"];
        assert_eq!(metadata["theme"], json!({ "primary": "#000000" }));
        assert_eq!(metadata["page"]["margin"], 18);
    }

    #[test]
    fn test_basics_string_url_is_wrapped() {
        let doc = normalize(&json!({ "basics": { "url": "https://ada.dev" } })).unwrap();
        assert_eq!(
            doc.basics()["url"],
            json!({ "label": "", "href": "https://ada.dev" })
        );
    }

    #[test]
    fn test_supplied_sections_replace_defaults_then_get_backfilled() {
        let doc = normalize(&json!({
            "sections": {
                "experience": { "name": "Work", "items": [{ "company": "Acme" }] }
            }
        }))
        .unwrap();

        assert_eq!(doc.sections().len(), 14);
        assert_eq!(doc.section(SectionKey::Experience)["name"], "Work");
        // Shell keys the supplied object lacked are filled, supplied ones win.
        assert_eq!(doc.section(SectionKey::Experience)["columns"], 1);
        assert_eq!(doc.section(SectionKey::Experience)["id"], "experience");
        assert_eq!(doc.section(SectionKey::Education)["items"], json!([]));
        assert_eq!(doc.summary_content(), "");
    }

    #[test]
    fn test_every_item_gets_id_visible_and_url_pair() {
        let doc = normalize(&json!({
            "sections": {
                "experience": { "items": [
                    { "company": "Acme", "url": "https://acme.io" },
                    { "id": "", "visible": false, "company": "Initech" }
                ]},
                "education": { "items": [{ "institution": "MIT", "url": { "label": "MIT", "href": "https://mit.edu" } }] },
                "awards": { "items": [{ "title": "Best Paper" }] },
                "profiles": { "items": [{ "network": "GitHub", "url": "https://github.com/ada" }] },
                "projects": { "items": [{ "name": "Engine", "visible": "yes" }] }
            }
        }))
        .unwrap();

        let items = all_items(&doc);
        assert_eq!(items.len(), 6);
        for item in items {
            let id = item["id"].as_str().unwrap();
            assert!(!id.is_empty());
            assert!(item["visible"].is_boolean());
            let url = item["url"].as_object().unwrap();
            assert!(url["label"].is_string());
            assert!(url["href"].is_string());
        }

        let experience = doc.items(SectionKey::Experience);
        assert_eq!(experience[0]["url"], json!({ "label": "", "href": "https://acme.io" }));
        assert_eq!(experience[1]["visible"], false);
        assert!(experience[1]["id"].as_str().unwrap().starts_with("experience-"));
        assert_eq!(doc.items(SectionKey::Projects)[0]["visible"], true);
        assert_eq!(
            doc.items(SectionKey::Education)[0]["url"],
            json!({ "label": "MIT", "href": "https://mit.edu" })
        );
    }

    #[test]
    fn test_generated_ids_are_unique_within_a_section() {
        let doc = normalize(&json!({
            "sections": { "awards": { "items": [{ "title": "A" }, { "title": "B" }] } }
        }))
        .unwrap();

        let awards = doc.items(SectionKey::Awards);
        assert!(awards[0]["id"].as_str().unwrap().starts_with("award-"));
        assert_ne!(awards[0]["id"], awards[1]["id"]);
    }

    #[test]
    fn test_rebuilt_sections_keep_only_named_fields() {
        let doc = normalize(&json!({
            "sections": {
                "projects": { "items": [{
                    "id": "p1", "name": "Engine", "keywords": ["rust"], "secret": "drop me"
                }]},
                "awards": { "items": [{ "id": "a1", "title": "Gold", "year": 2020 }] }
            }
        }))
        .unwrap();

        assert_eq!(
            doc.items(SectionKey::Projects)[0],
            json!({
                "id": "p1", "visible": true, "name": "Engine", "description": "",
                "date": "", "summary": "", "keywords": ["rust"],
                "url": { "label": "", "href": "" }
            })
        );
        assert!(doc.items(SectionKey::Awards)[0].get("year").is_none());
    }

    #[test]
    fn test_patched_sections_keep_unknown_fields() {
        let doc = normalize(&json!({
            "sections": {
                "skills": { "items": [{ "id": "s1", "name": "Rust", "keywords": ["tokio"], "level": 4 }] }
            }
        }))
        .unwrap();

        let skill = &doc.items(SectionKey::Skills)[0];
        assert_eq!(skill["level"], 4);
        assert_eq!(skill["keywords"], json!(["tokio"]));
    }

    #[test]
    fn test_numeric_fields_become_text_in_rebuilt_items() {
        let doc = normalize(&json!({
            "sections": { "awards": { "items": [{ "id": 7, "title": "Gold", "date": 2021 }] } }
        }))
        .unwrap();

        let award = &doc.items(SectionKey::Awards)[0];
        assert_eq!(award["id"], "7");
        assert_eq!(award["date"], "2021");
    }

    #[test]
    fn test_malformed_section_shapes_are_repaired() {
        let doc = normalize(&json!({
            "sections": {
                "summary": "<p>Builder of things</p>",
                "skills": [{ "name": "Rust" }],
                "education": { "items": "none" },
                "languages": 42,
                "interests": { "items": ["reading", { "name": "chess" }] }
            }
        }))
        .unwrap();

        assert_eq!(doc.summary_content(), "<p>Builder of things</p>");
        assert_eq!(doc.items(SectionKey::Skills).len(), 1);
        assert_eq!(doc.section(SectionKey::Skills)["name"], "Skills");
        assert!(doc.items(SectionKey::Education).is_empty());
        assert_eq!(doc.section(SectionKey::Languages)["id"], "languages");
        assert_eq!(doc.items(SectionKey::Interests).len(), 1);
    }

    #[test]
    fn test_unknown_sections_are_parked_under_custom() {
        let doc = normalize(&json!({
            "sections": {
                "hobbies": { "items": [{ "name": "Chess" }] },
                "custom": { "talks": { "items": [] } }
            }
        }))
        .unwrap();

        assert_eq!(doc.sections().len(), 14);
        assert!(doc.sections().get("hobbies").is_none());
        let custom = doc.section(SectionKey::Custom);
        assert_eq!(custom["hobbies"]["items"][0]["name"], "Chess");
        assert!(custom.contains_key("talks"));
    }

    #[test]
    fn test_missing_custom_becomes_empty_mapping() {
        let doc = normalize(&json!({ "sections": { "custom": null } })).unwrap();
        assert!(doc.section(SectionKey::Custom).is_empty());
    }

    #[test]
    fn test_unknown_top_level_keys_pass_through() {
        let doc = normalize(&json!({ "version": 3 })).unwrap();
        assert_eq!(doc.into_value()["version"], 3);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let raw = json!({
            "basics": { "url": "https://ada.dev" },
            "sections": { "experience": { "items": [{ "company": "Acme" }] } }
        });
        let before = raw.clone();
        normalize(&raw).unwrap();
        assert_eq!(raw, before);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = json!({
            "basics": { "name": "Ada", "headline": "Engineer", "url": "https://ada.dev" },
            "metadata": { "template": "azurill" },
            "sections": {
                "summary": { "content": "<p>Hi</p>" },
                "experience": { "items": [{ "company": "Acme", "url": "https://acme.io" }] },
                "awards": { "items": [{ "title": "Gold" }] },
                "profiles": { "items": [{ "network": "GitHub" }] },
                "projects": { "items": [{ "name": "Engine", "keywords": ["rust"] }] },
                "talks": { "items": [] }
            }
        });

        let once = normalize(&raw).unwrap();
        let twice = normalize(&once.clone().into_value()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_url_rules() {
        assert_eq!(
            normalize_url(Some(&json!("https://x"))),
            json!({ "label": "", "href": "https://x" })
        );
        assert_eq!(normalize_url(None), json!({ "label": "", "href": "" }));
        assert_eq!(
            normalize_url(Some(&json!({ "href": "https://y" }))),
            json!({ "label": "", "href": "https://y" })
        );
        assert_eq!(
            normalize_url(Some(&json!({ "label": "Site", "href": "https://z", "icon": "web" }))),
            json!({ "label": "Site", "href": "https://z", "icon": "web" })
        );
        assert_eq!(normalize_url(Some(&json!(12))), json!({ "label": "", "href": "" }));
    }
}
