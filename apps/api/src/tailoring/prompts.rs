use std::fmt::Write;

use crate::llm_client::prompts::{RICH_TEXT_INSTRUCTION, SOURCE_OF_TRUTH_INSTRUCTION};
use crate::tailoring::case_studies::CaseStudy;

const TAILOR_INSTRUCTIONS: &str = "\
You are an expert technical recruiter and ATS (Applicant Tracking System) optimization \
specialist. Rewrite the master resume below so it targets the job description.

Content rules:
1. Summary: write a 3-sentence professional summary aimed at the job's title and pain points. \
Put it in \"sections.summary.content\".
2. Headline: set \"basics.headline\" to the target role.
3. Skills: select and reorder the most relevant skill categories and keywords, using the job's terminology.
4. Experience: rewrite bullet points to mirror the job's terminology. Wrap key phrases in <strong>.
5. Projects: keep the 2-3 projects most relevant to the job. Use the case studies for detail when they match.
6. ATS: exact keyword matches from the job description must appear in skills and throughout.

Formatting rules:
- Keep the exact JSON structure of the master resume; change content, not schema.
- Keep every required field (id, visible, url).";

/// Builds the tailoring prompt. Case studies are appended only when present.
pub fn build_tailor_prompt(
    master_json: &str,
    job_description: &str,
    case_studies: &[CaseStudy],
) -> String {
    let mut prompt = format!(
        "{TAILOR_INSTRUCTIONS}\n- {RICH_TEXT_INSTRUCTION}\n\n{SOURCE_OF_TRUTH_INSTRUCTION}\n\n\
         ---\n\nJOB DESCRIPTION:\n{job_description}\n\n---\n\n\
         MASTER RESUME (JSON):\n{master_json}\n"
    );

    if !case_studies.is_empty() {
        prompt.push_str("\nCASE STUDIES AVAILABLE FOR REFERENCE:\n");
        for study in case_studies {
            let _ = write!(
                prompt,
                "\n**{}**\n- Domain: {}\n- Challenge: {}\n- Outcome: {}\n- Keywords: {}\n- Metrics: {}\n",
                study.title,
                study.domain,
                study.challenge,
                study.outcome,
                study.keywords.join(", "),
                study.metrics.join(", ")
            );
        }
        prompt.push_str(
            "\nUse these case studies for specific details and metrics when relevant to the job.\n",
        );
    }

    prompt.push_str("\n---\n\nReturn ONLY the tailored resume JSON. No explanations, no markdown.");
    prompt
}
