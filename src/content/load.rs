use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::records::PortfolioContent;

const EMBEDDED_CONTENT: &str = include_str!("../../assets/portfolio.json");

pub fn parse_content(raw: &str) -> Result<PortfolioContent> {
    let content: PortfolioContent =
        serde_json::from_str(raw).context("invalid portfolio content JSON")?;

    if content.owner.name.trim().is_empty() {
        return Err(anyhow!("portfolio content has an empty owner name"));
    }

    for skill in &content.skills.technical {
        if !(0..=100).contains(&skill.level) {
            log::warn!(
                "skill {:?} has level {} outside 0..=100; it will be clamped",
                skill.name,
                skill.level
            );
        }
    }

    Ok(content)
}

pub fn load_content(path: Option<&Path>) -> Result<PortfolioContent> {
    let Some(path) = path else {
        log::debug!("using embedded portfolio content");
        return parse_content(EMBEDDED_CONTENT).context("embedded portfolio content is broken");
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read content file {}", path.display()))?;
    let content =
        parse_content(&raw).with_context(|| format!("failed to parse {}", path.display()))?;
    log::info!(
        "loaded {} experiences, {} projects, {} skills from {}",
        content.experiences.len(),
        content.projects.len(),
        content.skills.technical.len(),
        path.display()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Accent;

    const MINIMAL: &str = r#"{
        "owner": { "name": "Ada", "headline": "Engineer" },
        "skills": { "technical": [
            { "name": "Rust", "level": 140, "category": "Engineering" },
            { "name": "Go", "level": -5, "category": "Engineering" }
        ] },
        "contact": { "email": "a@b.c", "linkedin": "l", "github": "g", "location": "here" }
    }"#;

    #[test]
    fn embedded_content_parses() {
        let content = load_content(None).expect("embedded content");
        assert_eq!(content.skills.technical.len(), 6);
        assert_eq!(content.skills.technical[3].name, "React/Next.js");
        assert_eq!(content.skills.technical[3].level, 92);
        assert_eq!(content.experiences[1].accent, Accent::Blue);
        assert_eq!(content.featured_projects().count(), 2);
    }

    #[test]
    fn out_of_range_levels_are_kept_not_rejected() {
        let content = parse_content(MINIMAL).expect("minimal content");
        let levels = content
            .skills
            .technical
            .iter()
            .map(|skill| skill.level)
            .collect::<Vec<_>>();
        assert_eq!(levels, vec![140, -5]);
        assert!(content.experiences.is_empty());
        assert!(content.skills.ai_stack.is_empty());
    }

    #[test]
    fn malformed_json_reports_context() {
        let error = parse_content("{ not json").expect_err("must fail");
        assert!(format!("{error:#}").contains("invalid portfolio content JSON"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = load_content(Some(Path::new("/definitely/missing/portfolio.json")))
            .expect_err("must fail");
        assert!(format!("{error:#}").contains("/definitely/missing/portfolio.json"));
    }
}
