//! Format Converter: maps a `ResumeDocument` onto the flattened export schema
//! consumed by the external HTML/PDF formatter service.
//!
//! Pure and infallible on a normalized document. Dates are split into
//! `startDate`/`endDate` for ranged sections; `url` pairs are unwrapped to
//! their href; `metadata` and `customFields` have no counterpart and are dropped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resume::document::{str_field, url_href, ResumeDocument};
use crate::resume::schema::SectionKey;
use crate::resume::text::{extract_bullets_with, split_date_range, strip_markup, BulletFallback};

// ────────────────────────────────────────────────────────────────────────────
// Export schema
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub basics: ExportBasics,
    pub work: Vec<ExportWork>,
    pub volunteer: Vec<ExportVolunteer>,
    pub education: Vec<ExportEducation>,
    pub awards: Vec<ExportAward>,
    pub certificates: Vec<ExportCertificate>,
    pub publications: Vec<ExportPublication>,
    pub skills: Vec<ExportSkill>,
    pub languages: Vec<ExportLanguage>,
    pub interests: Vec<ExportInterest>,
    pub references: Vec<ExportReference>,
    pub projects: Vec<ExportProject>,
    /// Always emitted, always empty for now.
    pub meta: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBasics {
    pub name: String,
    pub label: String,
    pub email: String,
    pub phone: String,
    pub url: String,
    pub summary: String,
    pub location: ExportLocation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLocation {
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub country_code: String,
    pub region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportWork {
    pub company: String,
    pub position: String,
    pub website: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportVolunteer {
    pub organization: String,
    pub position: String,
    pub website: String,
    pub start_date: String,
    pub end_date: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEducation {
    pub institution: String,
    pub area: String,
    pub study_type: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAward {
    pub title: String,
    pub date: String,
    pub awarder: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCertificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPublication {
    pub name: String,
    pub publisher: String,
    pub release_date: String,
    pub website: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSkill {
    pub name: String,
    pub level: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLanguage {
    pub language: String,
    pub fluency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportInterest {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReference {
    pub name: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportProject {
    pub name: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Conversion
// ────────────────────────────────────────────────────────────────────────────

/// Highlights come from list-item markup first, then one per line.
const HIGHLIGHT_FALLBACK: BulletFallback = BulletFallback::SplitLines;

/// Converts a normalized document into the export schema. Never mutates `doc`.
pub fn to_export_schema(doc: &ResumeDocument) -> ExportDocument {
    ExportDocument {
        basics: export_basics(doc),
        work: map_items(doc, SectionKey::Experience, |item| {
            let (start_date, end_date) = split_date_range(str_field(item, "date"));
            let summary = str_field(item, "summary");
            ExportWork {
                company: text(item, "company"),
                position: text(item, "position"),
                website: url_href(item),
                start_date,
                end_date,
                summary: strip_markup(summary),
                highlights: extract_bullets_with(summary, HIGHLIGHT_FALLBACK),
            }
        }),
        volunteer: map_items(doc, SectionKey::Volunteer, |item| {
            let (start_date, end_date) = split_date_range(str_field(item, "date"));
            let summary = str_field(item, "summary");
            let organization = match str_field(item, "organization") {
                "" => text(item, "name"),
                org => org.to_string(),
            };
            ExportVolunteer {
                organization,
                position: text(item, "position"),
                website: url_href(item),
                start_date,
                end_date,
                summary: strip_markup(summary),
                highlights: extract_bullets_with(summary, HIGHLIGHT_FALLBACK),
            }
        }),
        education: map_items(doc, SectionKey::Education, |item| {
            let (start_date, end_date) = split_date_range(str_field(item, "date"));
            ExportEducation {
                institution: text(item, "institution"),
                area: text(item, "area"),
                study_type: text(item, "studyType"),
                start_date,
                end_date,
                gpa: text(item, "score"),
                courses: vec![],
            }
        }),
        awards: map_items(doc, SectionKey::Awards, |item| ExportAward {
            title: text(item, "title"),
            date: text(item, "date"),
            awarder: text(item, "awarder"),
            summary: strip_markup(str_field(item, "summary")),
        }),
        certificates: map_items(doc, SectionKey::Certifications, |item| ExportCertificate {
            name: text(item, "name"),
            issuer: text(item, "issuer"),
            date: text(item, "date"),
            url: url_href(item),
        }),
        publications: map_items(doc, SectionKey::Publications, |item| ExportPublication {
            name: text(item, "name"),
            publisher: text(item, "publisher"),
            release_date: text(item, "date"),
            website: url_href(item),
            summary: strip_markup(str_field(item, "summary")),
        }),
        skills: map_items(doc, SectionKey::Skills, |item| ExportSkill {
            name: text(item, "name"),
            level: strip_markup(str_field(item, "description")),
            keywords: string_list(item, "keywords"),
        }),
        languages: map_items(doc, SectionKey::Languages, |item| ExportLanguage {
            language: text(item, "name"),
            fluency: strip_markup(str_field(item, "description")),
        }),
        interests: map_items(doc, SectionKey::Interests, |item| ExportInterest {
            name: text(item, "name"),
            keywords: string_list(item, "keywords"),
        }),
        references: map_items(doc, SectionKey::References, |item| ExportReference {
            name: text(item, "name"),
            reference: strip_markup(str_field(item, "summary")),
        }),
        projects: map_items(doc, SectionKey::Projects, |item| {
            let (start_date, end_date) = split_date_range(str_field(item, "date"));
            ExportProject {
                name: text(item, "name"),
                description: strip_markup(str_field(item, "description")),
                highlights: extract_bullets_with(str_field(item, "summary"), HIGHLIGHT_FALLBACK),
                start_date,
                end_date,
                url: url_href(item),
            }
        }),
        meta: Map::new(),
    }
}

fn export_basics(doc: &ResumeDocument) -> ExportBasics {
    let basics = doc.basics();
    let field = |name: &str| {
        basics
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };

    let summary = match doc.basic_str("summary") {
        Some(summary) if !summary.trim().is_empty() => summary,
        _ => doc.summary_content(),
    };
    let url = basics
        .get("url")
        .and_then(|url| url.get("href"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    ExportBasics {
        name: field("name"),
        label: field("headline"),
        email: field("email"),
        phone: field("phone"),
        url,
        summary: strip_markup(summary),
        location: ExportLocation {
            city: field("location"),
            ..ExportLocation::default()
        },
    }
}

fn map_items<T>(doc: &ResumeDocument, key: SectionKey, f: impl Fn(&Value) -> T) -> Vec<T> {
    doc.items(key).iter().map(f).collect()
}

fn text(item: &Value, field: &str) -> String {
    str_field(item, field).to_string()
}

fn string_list(item: &Value, field: &str) -> Vec<String> {
    item.get(field)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
