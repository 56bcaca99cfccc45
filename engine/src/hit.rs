//! Per-frame hit map for pointer routing.
//!
//! The renderer records the screen region of every interactive element as
//! it draws; the next frame's mouse events are resolved against that map.
//! Regions later in the list are drawn on top and win the hit test.

use folio_types::{Bounds, Vec2};
use folio_types::ui::Page;

use crate::pages::FormFocus;

/// An interactive element on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    /// Logo block; navigates home.
    Logo,
    /// A desktop nav button.
    Nav(Page),
    /// The compact-menu toggle.
    MenuToggle,
    /// An entry inside the open compact menu.
    MenuItem(Page),
    /// A hero action button (index into the hero button row).
    HeroButton(usize),
    /// A project card (index into the project list).
    ProjectCard(usize),
    /// A skill cell, `(category, skill)`.
    SkillCell(usize, usize),
    /// A social button on the contact page.
    Social(usize),
    /// A contact-form field.
    FormField(FormFocus),
    /// The contact-form submit button.
    Submit,
    /// The detail overlay's close affordance.
    OverlayClose,
    /// The detail overlay's body. Inert, but keeps clicks inside the
    /// overlay from reaching the backdrop-close path.
    OverlayBody,
}

/// Interactive regions recorded while drawing one frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(HitTarget, Bounds)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, target: HitTarget, bounds: Bounds) {
        self.regions.push((target, bounds));
    }

    /// Topmost region containing `point`.
    #[must_use]
    pub fn hit(&self, point: Vec2) -> Option<(HitTarget, Bounds)> {
        self.regions
            .iter()
            .rev()
            .find(|(_, bounds)| bounds.contains(point))
            .copied()
    }

    /// Region recorded for `target` this frame, if any.
    #[must_use]
    pub fn bounds_of(&self, target: HitTarget) -> Option<Bounds> {
        self.regions
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, b)| *b)
    }
}
