//! Content asset loading.
//!
//! The content TOML is embedded in the binary; parsing and validation
//! happen once before the UI starts. Any failure here is an authoring
//! error, reported and fatal.

use folio_types::{Content, ContentError};

#[derive(Debug, thiserror::Error)]
pub enum ContentLoadError {
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid content: {0}")]
    Invalid(#[from] ContentError),
}

/// Parse and validate a content TOML document.
pub fn load_content(raw: &str) -> Result<Content, ContentLoadError> {
    let content: Content = toml::from_str(raw)?;
    content.validate()?;
    tracing::debug!(
        projects = content.projects.len(),
        skill_categories = content.skill_categories.len(),
        "content loaded"
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[profile]
name = "Name"
badge = "BADGE"
tagline = "tagline"
bio = "bio"
email = "a@b.c"
whatsapp = "+1"
terminal_title = "t.py"
terminal_code = "print('hi')"

[[projects]]
id = "one"
title = "One"
description = "First project."
tags = ["tag"]
links = [{ label = "GitHub", url = "https://github.com/x/one" }]
"#;

    #[test]
    fn minimal_content_loads() {
        let content = load_content(MINIMAL).expect("minimal content loads");
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.projects[0].id, "one");
    }

    #[test]
    fn linkless_project_is_rejected() {
        let raw = MINIMAL.replace(
            "links = [{ label = \"GitHub\", url = \"https://github.com/x/one\" }]",
            "links = []",
        );
        let err = load_content(&raw).expect_err("no links must fail validation");
        assert!(matches!(err, ContentLoadError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = load_content("profile = ").expect_err("broken toml");
        assert!(matches!(err, ContentLoadError::Parse(_)));
    }
}
