//! Portfolio content model.
//!
//! Deserialized once from the embedded TOML asset at startup and treated as
//! immutable for the process lifetime. Authoring mistakes (duplicate project
//! ids, a project with no links) are caught by [`Content::validate`] before
//! the UI starts; nothing here is a runtime error to recover from.

use serde::Deserialize;
use std::collections::HashSet;

/// A labeled outbound URL (repository, demo, dataset, ...).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A single portfolio project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Unique across all projects; used as the card title slug.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Longer copy shown in the detail overlay. Falls back to `description`.
    pub full_description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// At least one entry; enforced by [`Content::validate`].
    pub links: Vec<Link>,
    pub tech_stack: Option<Vec<String>>,
}

impl Project {
    /// Detail-overlay body text.
    #[must_use]
    pub fn detail_text(&self) -> &str {
        self.full_description.as_deref().unwrap_or(&self.description)
    }
}

/// One entry in a skill category grid.
#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Remote logo URL from the original site; the terminal renders a
    /// monogram instead but keeps the reference in content.
    pub logo: Option<String>,
    /// Display-inversion flag for light-on-dark logos.
    #[serde(default)]
    pub invert: bool,
}

impl Skill {
    /// Single-character monogram used where the logo image cannot be shown.
    #[must_use]
    pub fn monogram(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub details: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub title: String,
    pub description: String,
}

/// One research focus cell in the about view.
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchArea {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AboutInfo {
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Lead-in line above the research cells.
    #[serde(default)]
    pub research_intro: String,
    #[serde(default)]
    pub research: Vec<ResearchArea>,
}

/// Which service a social link points at; selects the footer glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Huggingface,
    Resume,
    Email,
    Whatsapp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub url: String,
}

/// Identity block for the hero view and chrome.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub badge: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub whatsapp: String,
    /// Short capability labels decorating the hero below the buttons.
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Code sample revealed by the hero typewriter.
    pub terminal_title: String,
    pub terminal_code: String,
}

/// The whole read-only content set.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub about: AboutInfo,
}

/// Content-authoring errors surfaced at startup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate project id: {id}")]
    DuplicateProjectId { id: String },
    #[error("project {id} has no links")]
    MissingLinks { id: String },
    #[error("project {id} has an empty title")]
    EmptyTitle { id: String },
}

impl Content {
    /// Check the content invariants: project ids unique, every project has
    /// at least one link and a title.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProjectId {
                    id: project.id.clone(),
                });
            }
            if project.links.is_empty() {
                return Err(ContentError::MissingLinks {
                    id: project.id.clone(),
                });
            }
            if project.title.trim().is_empty() {
                return Err(ContentError::EmptyTitle {
                    id: project.id.clone(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, links: Vec<Link>) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::from("desc"),
            full_description: None,
            tags: Vec::new(),
            links,
            tech_stack: None,
        }
    }

    fn link() -> Link {
        Link {
            label: String::from("GitHub"),
            url: String::from("https://github.com/example/example"),
        }
    }

    fn content_with(projects: Vec<Project>) -> Content {
        Content {
            profile: Profile {
                name: String::from("Name"),
                badge: String::from("BADGE"),
                tagline: String::from("tagline"),
                bio: String::from("bio"),
                email: String::from("a@b.c"),
                whatsapp: String::from("+1"),
                features: Vec::new(),
                socials: Vec::new(),
                terminal_title: String::from("t.py"),
                terminal_code: String::from("print()"),
            },
            projects,
            skill_categories: Vec::new(),
            about: AboutInfo::default(),
        }
    }

    #[test]
    fn valid_content_passes() {
        let content = content_with(vec![project("a", vec![link()]), project("b", vec![link()])]);
        assert!(content.validate().is_ok());
    }

    #[test]
    fn duplicate_id_rejected() {
        let content = content_with(vec![project("a", vec![link()]), project("a", vec![link()])]);
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateProjectId {
                id: String::from("a")
            })
        );
    }

    #[test]
    fn missing_links_rejected() {
        let content = content_with(vec![project("a", Vec::new())]);
        assert_eq!(
            content.validate(),
            Err(ContentError::MissingLinks {
                id: String::from("a")
            })
        );
    }

    #[test]
    fn detail_text_falls_back_to_description() {
        let mut p = project("a", vec![link()]);
        assert_eq!(p.detail_text(), "desc");
        p.full_description = Some(String::from("long"));
        assert_eq!(p.detail_text(), "long");
    }

    #[test]
    fn monogram_takes_first_char() {
        let skill = Skill {
            name: String::from("PyTorch"),
            logo: None,
            invert: false,
        };
        assert_eq!(skill.monogram(), 'P');
    }
}
