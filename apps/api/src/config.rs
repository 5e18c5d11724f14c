use std::path::Path;

use anyhow::{Context, Result};

/// Vocabulary used when neither `SKILLS_FILE` nor `REQUIRED_SKILLS` is set.
pub const DEFAULT_REQUIRED_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "SQL",
    "Machine Learning",
    "Data Structures",
];

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Default vocabulary, original casing preserved for display.
    pub required_skills: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required_skills = match var("SKILLS_FILE") {
            Some(path) => load_skills_file(Path::new(&path))?,
            None => var("REQUIRED_SKILLS")
                .map(|list| parse_skill_list(&list))
                .unwrap_or_else(default_skills),
        };

        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            required_skills,
            max_upload_bytes: var("MAX_UPLOAD_BYTES")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}

pub fn default_skills() -> Vec<String> {
    DEFAULT_REQUIRED_SKILLS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Comma-separated list; blank items are dropped.
fn parse_skill_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One skill per line; blank lines and `#` comments are skipped.
fn load_skills_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read SKILLS_FILE '{}'", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
