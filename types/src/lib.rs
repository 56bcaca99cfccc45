//! Core domain types for Folio.
//!
//! Pure data: the portfolio content model, geometry used by the pointer
//! primitives, and UI state types shared between the engine (state
//! ownership) and the tui (rendering/input). No IO, no async, no ratatui
//! dependency.

mod content;
mod geometry;
pub mod ui;

pub use content::{
    AboutInfo, Content, ContentError, Education, Experience, Link, Profile, Project, ResearchArea,
    Skill, SkillCategory, SocialKind, SocialLink,
};
pub use geometry::{Bounds, Vec2};
