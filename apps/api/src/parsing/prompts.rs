use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, RICH_TEXT_INSTRUCTION};

pub const PARSE_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Target shape shown to the model. The normalizer fills in everything else.
const EXAMPLE_STRUCTURE: &str = r#"{
  "basics": {
    "name": "Full Name",
    "headline": "Job Title",
    "email": "email@example.com",
    "phone": "123-456-7890",
    "location": "City, State",
    "url": {"label": "website", "href": "https://website.com"}
  },
  "sections": {
    "summary": {"id": "summary", "name": "Summary", "columns": 1, "visible": true,
      "content": "<p>Professional summary text here</p>"},
    "experience": {"id": "experience", "name": "Experience", "columns": 1, "visible": true, "items": [
      {"id": "exp1", "visible": true, "company": "Company Name", "position": "Job Title",
       "location": "City, State", "date": "Month Year - Month Year",
       "summary": "<p>Job description</p><ul><li><p>Achievement 1</p></li><li><p>Achievement 2</p></li></ul>",
       "url": {"label": "", "href": ""}}
    ]},
    "skills": {"id": "skills", "name": "Skills", "columns": 1, "visible": true, "items": [
      {"id": "skill1", "visible": true, "name": "Category Name", "description": "", "level": 0,
       "keywords": ["Skill 1", "Skill 2"]}
    ]},
    "projects": {"id": "projects", "name": "Projects", "columns": 1, "visible": true, "items": [
      {"id": "proj1", "visible": true, "name": "Project Name", "description": "One-line description",
       "date": "Year", "summary": "<ul><li><p>What was built</p></li></ul>", "keywords": [],
       "url": {"label": "", "href": ""}}
    ]},
    "education": {"id": "education", "name": "Education", "columns": 1, "visible": true, "items": [
      {"id": "edu1", "visible": true, "institution": "University Name", "studyType": "Degree",
       "area": "Field of Study", "date": "Year", "score": "", "summary": "",
       "url": {"label": "", "href": ""}}
    ]},
    "awards": {"id": "awards", "name": "Awards", "columns": 1, "visible": true, "items": []},
    "certifications": {"id": "certifications", "name": "Certifications", "columns": 1, "visible": true, "items": []},
    "profiles": {"id": "profiles", "name": "Profiles", "columns": 1, "visible": true, "items": []},
    "interests": {"id": "interests", "name": "Interests", "columns": 1, "visible": true, "items": []},
    "languages": {"id": "languages", "name": "Languages", "columns": 1, "visible": true, "items": []},
    "volunteer": {"id": "volunteer", "name": "Volunteering", "columns": 1, "visible": true, "items": []},
    "references": {"id": "references", "name": "References", "columns": 1, "visible": true, "items": []},
    "publications": {"id": "publications", "name": "Publications", "columns": 1, "visible": true, "items": []}
  }
}"#;

/// Builds the user prompt for turning free-form resume text into the resume schema.
pub fn build_parse_prompt(resume_text: &str) -> String {
    format!(
        "Parse this resume into valid Reactive Resume JSON. Follow this EXACT structure:\n\n\
         {EXAMPLE_STRUCTURE}\n\n\
         Rules:\n\
         - Copy facts verbatim; do not summarize or embellish.\n\
         - Put each achievement in its own <li> inside the item's summary.\n\
         - Dates use the form \"Start - End\" (for example \"Jan 2020 - Present\").\n\
         - Leave a field as an empty string when the resume does not state it.\n\
         - {RICH_TEXT_INSTRUCTION}\n\n\
         Resume to parse:\n{resume_text}\n\n\
         Return ONLY the JSON, no explanations, no markdown."
    )
}
