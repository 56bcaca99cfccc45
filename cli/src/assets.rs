//! Embedded content.
//!
//! All portfolio copy ships inside the binary; there is no runtime content
//! directory to misplace.

/// The portfolio content, validated by the engine at startup.
#[must_use]
pub fn content() -> &'static str {
    include_str!("../assets/content.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses_and_validates() {
        let content = folio_engine::load_content(content()).expect("embedded content is valid");
        assert!(!content.projects.is_empty());
        assert!(!content.skill_categories.is_empty());
        assert!(!content.profile.socials.is_empty());
        assert!(!content.profile.features.is_empty());
        assert!(!content.about.research.is_empty());
        assert!(!content.about.research_intro.is_empty());
    }
}
