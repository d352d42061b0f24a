//! Document Renderer: turns a `ResumeDocument` into an ordered list of styled
//! blocks. Deterministic and pure: no I/O, no clock, no randomness.
//!
//! Block order is fixed: header (name, contact line), then SUMMARY, EXPERIENCE,
//! PROJECTS (only when it has items), SKILLS, EDUCATION. Serialization lives
//! in `docx` and `html`.

pub mod docx;
pub mod html;

use serde::Serialize;
use serde_json::Value;

use crate::resume::document::{str_field, ResumeDocument};
use crate::resume::schema::SectionKey;
use crate::resume::text::{extract_bullets, strip_markup};
use crate::resume::ResumeError;

const FILENAME_PREFIX: &str = "ATS_Resume_";
const MAX_HEADLINE_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Block model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Bold,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Italic,
        }
    }
}

/// One styled block of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Candidate name, already uppercased.
    Title { text: String },
    Contact { text: String },
    /// Bold section heading with a rule beneath it.
    SectionTitle { text: String },
    /// Left-aligned spans plus optional text pushed to the right tab stop.
    Line { spans: Vec<Span>, aside: Option<String> },
    Bullet { text: String },
    Spacer,
}

impl Block {
    fn line(spans: Vec<Span>, aside: Option<String>) -> Self {
        Block::Line { spans, aside }
    }
}

/// Sections rendered after the header, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderSection {
    Summary,
    Experience,
    Projects,
    Skills,
    Education,
}

const RENDER_ORDER: [RenderSection; 5] = [
    RenderSection::Summary,
    RenderSection::Experience,
    RenderSection::Projects,
    RenderSection::Skills,
    RenderSection::Education,
];

impl RenderSection {
    fn title(self) -> &'static str {
        match self {
            RenderSection::Summary => "PROFESSIONAL SUMMARY",
            RenderSection::Experience => "EXPERIENCE",
            RenderSection::Projects => "PROJECTS",
            RenderSection::Skills => "SKILLS",
            RenderSection::Education => "EDUCATION",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders the document. Fails before producing any block when
/// `basics.name` or `basics.headline` is missing.
pub fn render(doc: &ResumeDocument) -> Result<Vec<Block>, ResumeError> {
    let name = required_basic(doc, BasicField::Name)?;
    required_basic(doc, BasicField::Headline)?;

    let mut blocks = vec![
        Block::Title {
            text: name.to_uppercase(),
        },
        Block::Contact {
            text: contact_line(doc),
        },
    ];

    for section in RENDER_ORDER {
        let body = match section {
            RenderSection::Summary => render_summary(doc),
            RenderSection::Experience => render_experience(doc),
            RenderSection::Projects => {
                if doc.items(SectionKey::Projects).is_empty() {
                    continue;
                }
                render_projects(doc)
            }
            RenderSection::Skills => render_skills(doc),
            RenderSection::Education => render_education(doc),
        };
        blocks.push(Block::SectionTitle {
            text: section.title().to_string(),
        });
        blocks.extend(body);
    }

    Ok(blocks)
}

/// `ATS_Resume_<headline>.<ext>`, every non-alphanumeric character of the
/// headline replaced by `_` and the headline cut to 50 characters.
pub fn output_filename(doc: &ResumeDocument, extension: &str) -> Result<String, ResumeError> {
    let headline = required_basic(doc, BasicField::Headline)?;
    Ok(format!(
        "{FILENAME_PREFIX}{}.{extension}",
        sanitize_headline(headline)
    ))
}

pub fn sanitize_headline(headline: &str) -> String {
    headline
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_HEADLINE_CHARS)
        .collect()
}

fn required_basic<'a>(doc: &'a ResumeDocument, field: BasicField) -> Result<&'a str, ResumeError> {
    let (key, path) = match field {
        BasicField::Name => ("name", "basics.name"),
        BasicField::Headline => ("headline", "basics.headline"),
    };
    match doc.basic_str(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ResumeError::RequiredFieldMissing { field: path }),
    }
}

#[derive(Clone, Copy)]
enum BasicField {
    Name,
    Headline,
}

fn contact_line(doc: &ResumeDocument) -> String {
    let mut parts: Vec<String> = ["email", "phone", "location"]
        .into_iter()
        .filter_map(|field| doc.basic_str(field))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if let Some(url) = doc.basics().get("url") {
        let label = url.get("label").and_then(Value::as_str).unwrap_or("");
        let href = url.get("href").and_then(Value::as_str).unwrap_or("");
        let shown = if label.trim().is_empty() { href } else { label };
        if !shown.trim().is_empty() {
            parts.push(shown.trim().to_string());
        }
    }

    parts.join(" | ")
}

fn render_summary(doc: &ResumeDocument) -> Vec<Block> {
    let summary = match doc.basic_str("summary") {
        Some(summary) if !summary.trim().is_empty() => summary,
        _ => doc.summary_content(),
    };
    let text = strip_markup(summary);
    if text.is_empty() {
        return vec![];
    }
    vec![Block::line(vec![Span::plain(text)], None)]
}

fn render_experience(doc: &ResumeDocument) -> Vec<Block> {
    doc.items(SectionKey::Experience)
        .iter()
        .flat_map(|item| {
            let mut blocks = vec![
                Block::line(
                    vec![Span::bold(str_field(item, "company"))],
                    aside(str_field(item, "location")),
                ),
                Block::line(
                    vec![Span::italic(str_field(item, "position"))],
                    aside(str_field(item, "date")),
                ),
            ];
            blocks.extend(bullets(str_field(item, "summary")));
            blocks.push(Block::Spacer);
            blocks
        })
        .collect()
}

fn render_projects(doc: &ResumeDocument) -> Vec<Block> {
    doc.items(SectionKey::Projects)
        .iter()
        .flat_map(|item| {
            let mut blocks = vec![Block::line(
                vec![Span::bold(str_field(item, "name"))],
                aside(str_field(item, "date")),
            )];
            let description = strip_markup(str_field(item, "description"));
            if !description.is_empty() {
                blocks.push(Block::line(vec![Span::italic(description)], None));
            }
            blocks.extend(bullets(str_field(item, "summary")));
            blocks.push(Block::Spacer);
            blocks
        })
        .collect()
}

fn render_skills(doc: &ResumeDocument) -> Vec<Block> {
    let mut blocks: Vec<Block> = doc
        .items(SectionKey::Skills)
        .iter()
        .map(|item| {
            let keywords: Vec<&str> = item
                .get("keywords")
                .and_then(Value::as_array)
                .map(|k| k.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            Block::line(
                vec![
                    Span::bold(format!("{}: ", str_field(item, "name"))),
                    Span::plain(keywords.join(", ")),
                ],
                None,
            )
        })
        .collect();
    if !blocks.is_empty() {
        blocks.push(Block::Spacer);
    }
    blocks
}

fn render_education(doc: &ResumeDocument) -> Vec<Block> {
    doc.items(SectionKey::Education)
        .iter()
        .map(|item| {
            let mut spans = vec![Span::bold(str_field(item, "institution"))];
            let area = str_field(item, "area").trim();
            let study_type = str_field(item, "studyType").trim();
            let detail = match (area.is_empty(), study_type.is_empty()) {
                (false, false) => format!(", {area} ({study_type})"),
                (false, true) => format!(", {area}"),
                (true, false) => format!(" ({study_type})"),
                (true, true) => String::new(),
            };
            if !detail.is_empty() {
                spans.push(Span::plain(detail));
            }
            Block::line(spans, aside(str_field(item, "date")))
        })
        .collect()
}

fn bullets(rich_text: &str) -> impl Iterator<Item = Block> {
    extract_bullets(rich_text)
        .into_iter()
        .map(|text| Block::Bullet { text })
}

fn aside(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
