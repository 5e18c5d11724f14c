// Résumé text sources and contact field extraction.
// Nothing here touches the phrase matcher.

pub mod fields;
pub mod pdf;

pub use fields::{extract_emails, extract_name, extract_phones};
