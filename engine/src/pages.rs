//! Per-page transient state.
//!
//! Each page owns exactly the animation state it needs. Navigation replaces
//! the whole value, which both restarts entry animations and guarantees the
//! old page's timers stop (they are dropped).

use std::time::Duration;

use folio_types::Content;
use folio_types::ui::Page;

use crate::anim::{
    CursorBlink, Magnetic, OverlayEffect, Spotlight, TextReveal, Tilt, Typewriter,
    normalized_progress,
};

/// Delay before the hero tagline reveal starts.
const TAGLINE_DELAY: Duration = Duration::from_millis(500);

/// Stagger between list items entering on the about/projects/skills pages.
const ITEM_STAGGER: Duration = Duration::from_millis(100);
const ITEM_DURATION: Duration = Duration::from_millis(300);

/// Open animation for the project detail overlay.
const OVERLAY_POP: Duration = Duration::from_millis(200);

/// Which contact-form element has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Message,
    Submit,
}

impl FormFocus {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Email,
            FormFocus::Email => FormFocus::Message,
            FormFocus::Message => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Submit,
            FormFocus::Email => FormFocus::Name,
            FormFocus::Message => FormFocus::Email,
            FormFocus::Submit => FormFocus::Message,
        }
    }
}

/// Hero view state: reveals, the typewriter terminal, action buttons.
#[derive(Debug)]
pub struct HomeState {
    pub badge: TextReveal,
    pub tagline: TextReveal,
    pub typewriter: Typewriter,
    pub blink: CursorBlink,
    /// One magnet per hero action button.
    pub buttons: Vec<Magnetic>,
}

impl HomeState {
    fn new(content: &Content) -> Self {
        Self {
            badge: TextReveal::new(&content.profile.badge),
            tagline: TextReveal::with_delay(&content.profile.tagline, TAGLINE_DELAY),
            typewriter: Typewriter::new(content.profile.terminal_code.clone()),
            blink: CursorBlink::new(),
            buttons: vec![Magnetic::new(), Magnetic::new()],
        }
    }

    fn advance(&mut self, delta: Duration, reduced_motion: bool) {
        if reduced_motion {
            self.badge.finish();
            self.tagline.finish();
            self.typewriter.finish();
        } else {
            self.badge.advance(delta);
            self.tagline.advance(delta);
            self.typewriter.advance(delta);
        }
        self.blink.advance(delta);
        for button in &mut self.buttons {
            button.advance(delta, reduced_motion);
        }
    }
}

/// Staggered-entry timing shared by the list pages.
#[derive(Debug, Default)]
pub struct EntryStagger {
    elapsed: Duration,
}

impl EntryStagger {
    fn advance(&mut self, delta: Duration, reduced_motion: bool) {
        if reduced_motion {
            // Far enough that every realistic item count reads as complete.
            self.elapsed = Duration::from_secs(60);
        } else {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    /// Entry progress of the `index`-th item.
    #[must_use]
    pub fn item_progress(&self, index: usize) -> f32 {
        let start = ITEM_STAGGER * index as u32;
        normalized_progress(self.elapsed.saturating_sub(start), ITEM_DURATION)
    }
}

#[derive(Debug, Default)]
pub struct AboutState {
    pub entry: EntryStagger,
}

/// The open project detail overlay.
#[derive(Debug)]
pub struct ProjectOverlay {
    pub index: usize,
    pub effect: OverlayEffect,
}

#[derive(Debug)]
pub struct ProjectsState {
    pub entry: EntryStagger,
    /// Keyboard cursor over the card grid.
    pub selected: usize,
    /// Card under the pointer, if any.
    pub hovered: Option<usize>,
    pub tilt: Tilt,
    pub spotlight: Spotlight,
    pub overlay: Option<ProjectOverlay>,
}

impl ProjectsState {
    fn new() -> Self {
        Self {
            entry: EntryStagger::default(),
            selected: 0,
            hovered: None,
            tilt: Tilt::new(),
            spotlight: Spotlight::new(),
            overlay: None,
        }
    }

    pub fn open(&mut self, index: usize) {
        self.overlay = Some(ProjectOverlay {
            index,
            effect: OverlayEffect::pop_scale(OVERLAY_POP),
        });
    }

    pub fn close(&mut self) {
        self.overlay = None;
    }

    pub fn select_next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }
}

#[derive(Debug, Default)]
pub struct SkillsState {
    pub entry: EntryStagger,
    /// `(category, skill)` under the pointer.
    pub hovered: Option<(usize, usize)>,
}

#[derive(Debug)]
pub struct ContactState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormFocus,
    /// One magnet per social button.
    pub socials: Vec<Magnetic>,
}

impl ContactState {
    fn new(content: &Content) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: FormFocus::default(),
            socials: content
                .profile
                .socials
                .iter()
                .map(|_| Magnetic::new())
                .collect(),
        }
    }

    pub fn field_mut(&mut self, focus: FormFocus) -> Option<&mut String> {
        match focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Message => Some(&mut self.message),
            FormFocus::Submit => None,
        }
    }

    /// Submit is intentionally inert: the original form never transmits
    /// anywhere, and neither does this one.
    pub fn submit(&self) {
        tracing::debug!(
            name_len = self.name.len(),
            message_len = self.message.len(),
            "contact form submitted; transmission is deliberately a no-op"
        );
    }
}

/// State for whichever page is active.
#[derive(Debug)]
pub enum PageState {
    Home(HomeState),
    About(AboutState),
    Projects(ProjectsState),
    Skills(SkillsState),
    Contact(ContactState),
}

impl PageState {
    #[must_use]
    pub fn for_page(page: Page, content: &Content) -> Self {
        match page {
            Page::Home => PageState::Home(HomeState::new(content)),
            Page::About => PageState::About(AboutState::default()),
            Page::Projects => PageState::Projects(ProjectsState::new()),
            Page::Skills => PageState::Skills(SkillsState::default()),
            Page::Contact => PageState::Contact(ContactState::new(content)),
        }
    }

    pub fn advance(&mut self, delta: Duration, reduced_motion: bool) {
        match self {
            PageState::Home(home) => home.advance(delta, reduced_motion),
            PageState::About(about) => about.entry.advance(delta, reduced_motion),
            PageState::Projects(projects) => {
                projects.entry.advance(delta, reduced_motion);
                projects.tilt.advance(delta, reduced_motion);
                projects.spotlight.advance(delta, reduced_motion);
                if let Some(overlay) = &mut projects.overlay {
                    overlay.effect.advance(delta);
                }
            }
            PageState::Skills(skills) => skills.entry.advance(delta, reduced_motion),
            PageState::Contact(contact) => {
                for social in &mut contact.socials {
                    social.advance(delta, reduced_motion);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_focus_cycles() {
        let mut focus = FormFocus::Name;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Name);
        assert_eq!(FormFocus::Name.prev(), FormFocus::Submit);
    }

    #[test]
    fn entry_stagger_orders_items() {
        let mut entry = EntryStagger::default();
        entry.advance(Duration::from_millis(250), false);
        assert!(entry.item_progress(0) > entry.item_progress(1));
        assert!(entry.item_progress(1) > entry.item_progress(2));
    }

    #[test]
    fn reduced_motion_completes_entry() {
        let mut entry = EntryStagger::default();
        entry.advance(Duration::from_millis(1), true);
        assert!((entry.item_progress(50) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut projects = ProjectsState::new();
        projects.select_prev(3);
        assert_eq!(projects.selected, 2);
        projects.select_next(3);
        assert_eq!(projects.selected, 0);
        projects.select_next(0); // empty list: no-op, no panic
        assert_eq!(projects.selected, 0);
    }

    #[test]
    fn overlay_open_close() {
        let mut projects = ProjectsState::new();
        projects.open(2);
        assert_eq!(projects.overlay.as_ref().map(|o| o.index), Some(2));
        projects.close();
        assert!(projects.overlay.is_none());
    }
}
