use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::{MatchSet, SkillMatch};

/// Everything pulled out of one résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    /// Vocabulary phrases found in the text, lowercased.
    pub skills_found: MatchSet,
    pub skill_match: SkillMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSource {
    Text,
    Pdf,
}

/// HTTP response envelope around a `ParsedResume`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub scanned_at: DateTime<Utc>,
    pub source: ScanSource,
    pub resume: ParsedResume,
}

impl ScanReport {
    pub fn new(source: ScanSource, resume: ParsedResume) -> Self {
        Self {
            scan_id: Uuid::new_v4(),
            scanned_at: Utc::now(),
            source,
            resume,
        }
    }
}
