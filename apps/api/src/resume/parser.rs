//! Résumé parse pipeline: tokenize → scan → ratio, plus contact fields.

use tracing::debug;

use crate::extract::{extract_emails, extract_name, extract_phones};
use crate::matching::{compute_skill_match, scan, tokenize, PhraseTrie};
use crate::models::resume::ParsedResume;

/// Parses `text` against a vocabulary built from `required_skills`.
pub fn parse_resume(text: &str, required_skills: &[String]) -> ParsedResume {
    let trie = PhraseTrie::build(required_skills);
    parse_resume_with(text, &trie, required_skills)
}

/// Parses `text` with a prebuilt trie.
///
/// `trie` must have been built from `required_skills`; the ratio is computed
/// against the list, the matches come from the trie.
pub fn parse_resume_with(
    text: &str,
    trie: &PhraseTrie,
    required_skills: &[String],
) -> ParsedResume {
    let tokens = tokenize(text);
    let skills_found = scan(&tokens, trie);
    let skill_match = compute_skill_match(&skills_found, required_skills);

    debug!(
        tokens = tokens.len(),
        vocabulary = trie.len(),
        found = skills_found.len(),
        percent = skill_match.percent,
        "Scanned resume"
    );

    ParsedResume {
        name: extract_name(text),
        emails: extract_emails(text),
        phones: extract_phones(text),
        skills_found,
        skill_match,
    }
}

/// Plain-text rendering used by the terminal command.
pub fn render_text(resume: &ParsedResume) -> String {
    let skills: Vec<&str> = resume.skills_found.iter().map(String::as_str).collect();
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\nSkills Found: {}\nSkill Match %: {:.2}%\n",
        resume.name.as_deref().unwrap_or("Name not found"),
        resume.emails.join(", "),
        resume.phones.join(", "),
        skills.join(", "),
        resume.skill_match.percent,
    )
}
