//! Application state machine for Folio.
//!
//! Owns the page router, per-page transient state, the pointer hit map,
//! and the ambient background. The tui layer renders this state and feeds
//! events back through the methods below; nothing here depends on ratatui.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

pub mod anim;
mod background;
mod config;
mod content;
mod hit;
mod pages;

pub use background::{Background, Depth, Voxel};
pub use config::{AppConfig, ConfigError, FolioConfig};
pub use content::{ContentLoadError, load_content};
pub use hit::{HitMap, HitTarget};
pub use pages::{
    AboutState, ContactState, EntryStagger, FormFocus, HomeState, PageState, ProjectOverlay,
    ProjectsState, SkillsState,
};

// Re-export the domain types the tui consumes through us.
pub use folio_types::ui::{Page, ScrollState, UiOptions};
pub use folio_types::{Bounds, Content, Link, Profile, Project, Skill, SkillCategory, Vec2};

/// Full-cycle period of the cosmetic pulse (status dots, badges).
const PULSE_PERIOD: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Content(#[from] ContentLoadError),
}

/// The application state.
pub struct App {
    content: Content,
    ui_options: UiOptions,

    page: Page,
    page_state: PageState,
    page_effect: Option<anim::PageEffect>,
    menu_open: bool,

    scroll: ScrollState,
    scroll_max: u16,

    pointer: Option<Vec2>,
    hits: HitMap,
    background: Background,

    elapsed: Duration,
    last_frame: Instant,
    quit: bool,
}

impl App {
    /// Parse the embedded content, load optional user config, and start on
    /// the home page.
    pub fn new(content_raw: &str) -> Result<Self, AppError> {
        let ui_options = match FolioConfig::load() {
            Ok(Some(config)) => config.ui_options(),
            Ok(None) => UiOptions::default(),
            Err(err) => {
                tracing::warn!(path = %err.path().display(), "ignoring unreadable config: {err}");
                UiOptions::default()
            }
        };

        let content = load_content(content_raw)?;
        let page = Page::default();
        let page_state = PageState::for_page(page, &content);

        Ok(Self {
            content,
            ui_options,
            page,
            page_state,
            page_effect: Some(anim::PageEffect::enter()),
            menu_open: false,
            scroll: ScrollState::default(),
            scroll_max: 0,
            pointer: None,
            hits: HitMap::default(),
            background: Background::new(0, 0),
            elapsed: Duration::ZERO,
            last_frame: Instant::now(),
            quit: false,
        })
    }

    // ------------------------------------------------------------------
    // Frame tick
    // ------------------------------------------------------------------

    /// Advance all live animation state by the time since the last frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.elapsed = self.elapsed.saturating_add(delta);

        let reduced = self.ui_options.reduced_motion;
        self.page_state.advance(delta, reduced);
        self.background.advance(delta, reduced);

        if let Some(effect) = &mut self.page_effect {
            effect.advance(delta);
            if effect.is_finished() || reduced {
                self.page_effect = None;
            }
        }
    }

    /// Phase of the cosmetic pulse in `[0, 1]`. Constant under reduced
    /// motion.
    #[must_use]
    pub fn pulse(&self) -> f32 {
        if self.ui_options.reduced_motion {
            return 1.0;
        }
        let phase = self.elapsed.as_secs_f32() / PULSE_PERIOD.as_secs_f32();
        0.5 + 0.5 * (phase * TAU).sin()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// The single navigation entry point. Recreates the target page's
    /// state, restarts the enter transition, resets scroll, and closes the
    /// compact menu.
    pub fn navigate(&mut self, page: Page) {
        self.menu_open = false;
        if page == self.page {
            return;
        }
        tracing::debug!(from = ?self.page, to = ?page, "navigate");
        self.page = page;
        self.page_state = PageState::for_page(page, &self.content);
        self.page_effect = Some(anim::PageEffect::enter());
        self.scroll.to_top();
        self.scroll_max = 0;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Route pointer motion to whatever is under it; everything else
    /// returns toward rest.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let point = Vec2::new(f32::from(column), f32::from(row));
        self.pointer = Some(point);

        let hit = self.hits.hit(point);
        let hovered_hero = match hit {
            Some((HitTarget::HeroButton(i), _)) => Some(i),
            _ => None,
        };
        let hovered_card = match hit {
            Some((HitTarget::ProjectCard(i), _)) => Some(i),
            _ => None,
        };
        let hovered_social = match hit {
            Some((HitTarget::Social(i), _)) => Some(i),
            _ => None,
        };
        let bounds = hit.map(|(_, b)| b);

        match &mut self.page_state {
            PageState::Home(home) => {
                for (i, button) in home.buttons.iter_mut().enumerate() {
                    if hovered_hero == Some(i) {
                        if let Some(bounds) = bounds {
                            button.pointer_moved(bounds, point);
                        }
                    } else {
                        button.pointer_left();
                    }
                }
            }
            PageState::Projects(projects) => {
                if projects.overlay.is_none() {
                    if let (Some(index), Some(bounds)) = (hovered_card, bounds) {
                        projects.hovered = Some(index);
                        projects.tilt.pointer_moved(bounds, point);
                        projects.spotlight.pointer_moved(bounds, point);
                    } else if projects.hovered.take().is_some() {
                        projects.tilt.pointer_left();
                        projects.spotlight.pointer_left();
                    }
                }
            }
            PageState::Contact(contact) => {
                for (i, social) in contact.socials.iter_mut().enumerate() {
                    if hovered_social == Some(i) {
                        if let Some(bounds) = bounds {
                            social.pointer_moved(bounds, point);
                        }
                    } else {
                        social.pointer_left();
                    }
                }
            }
            PageState::Skills(skills) => {
                skills.hovered = match hit {
                    Some((HitTarget::SkillCell(category, skill), _)) => Some((category, skill)),
                    _ => None,
                };
            }
            PageState::About(_) => {}
        }
    }

    /// Pointer left the terminal window entirely.
    pub fn pointer_gone(&mut self) {
        self.pointer = None;
        match &mut self.page_state {
            PageState::Home(home) => {
                for button in &mut home.buttons {
                    button.pointer_left();
                }
            }
            PageState::Projects(projects) => {
                projects.hovered = None;
                projects.tilt.pointer_left();
                projects.spotlight.pointer_left();
            }
            PageState::Contact(contact) => {
                for social in &mut contact.socials {
                    social.pointer_left();
                }
            }
            PageState::About(_) | PageState::Skills(_) => {}
        }
    }

    /// Primary button pressed.
    pub fn pointer_pressed(&mut self, column: u16, row: u16) {
        let point = Vec2::new(f32::from(column), f32::from(row));
        let hit = self.hits.hit(point).map(|(target, _)| target);

        match hit {
            Some(HitTarget::Logo) => self.navigate(Page::Home),
            Some(HitTarget::Nav(page) | HitTarget::MenuItem(page)) => self.navigate(page),
            Some(HitTarget::MenuToggle) => self.toggle_menu(),
            Some(HitTarget::HeroButton(index)) => {
                // View Projects / Get in Touch, in row order.
                let target = if index == 0 { Page::Projects } else { Page::Contact };
                self.navigate(target);
            }
            Some(HitTarget::ProjectCard(index)) => {
                if let PageState::Projects(projects) = &mut self.page_state {
                    // With an overlay up, the card is behind the backdrop;
                    // the press dismisses rather than re-opens.
                    if projects.overlay.is_some() {
                        projects.close();
                    } else {
                        projects.selected = index;
                        projects.tilt.set_pressed(true);
                        projects.open(index);
                    }
                }
            }
            Some(HitTarget::FormField(focus)) => {
                if let PageState::Contact(contact) = &mut self.page_state {
                    contact.focus = focus;
                }
            }
            Some(HitTarget::Submit) => {
                if let PageState::Contact(contact) = &mut self.page_state {
                    contact.focus = FormFocus::Submit;
                    contact.submit();
                }
            }
            Some(HitTarget::OverlayClose) => {
                if let PageState::Projects(projects) = &mut self.page_state {
                    projects.close();
                }
            }
            Some(
                HitTarget::Social(_) | HitTarget::SkillCell(..) | HitTarget::OverlayBody,
            ) => {
                // Outbound links render as text; a press has nothing to open.
            }
            None => {
                // A click on the backdrop closes whatever floats on top.
                if self.menu_open {
                    self.menu_open = false;
                } else if let PageState::Projects(projects) = &mut self.page_state {
                    projects.close();
                }
            }
        }
    }

    pub fn pointer_released(&mut self) {
        if let PageState::Projects(projects) = &mut self.page_state {
            projects.tilt.set_pressed(false);
        }
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll.scroll_up(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll.scroll_down(lines, self.scroll_max);
    }

    /// Called by the renderer once it knows the page's content height.
    pub fn set_scroll_max(&mut self, max: u16) {
        self.scroll_max = max;
        self.scroll.clamp_to(max);
    }

    #[must_use]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    #[must_use]
    pub fn scroll_max(&self) -> u16 {
        self.scroll_max
    }

    // ------------------------------------------------------------------
    // Accessors for the renderer
    // ------------------------------------------------------------------

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn page_state(&self) -> &PageState {
        &self.page_state
    }

    #[must_use]
    pub fn page_state_mut(&mut self) -> &mut PageState {
        &mut self.page_state
    }

    #[must_use]
    pub fn page_effect(&self) -> Option<&anim::PageEffect> {
        self.page_effect.as_ref()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// The hit map the renderer fills while drawing.
    #[must_use]
    pub fn hits_mut(&mut self) -> &mut HitMap {
        &mut self.hits
    }

    #[must_use]
    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn resize_background(&mut self, width: u16, height: u16) {
        self.background.resize(width, height);
    }

    /// Split the app into the disjoint borrows one frame of rendering
    /// needs: read-only state plus the mutable hit map the views fill
    /// as they lay out interactive regions.
    pub fn render_parts(&mut self) -> RenderParts<'_> {
        let pulse = self.pulse();
        self.hits.clear();
        RenderParts {
            content: &self.content,
            options: self.ui_options,
            page: self.page,
            page_state: &self.page_state,
            page_effect: self.page_effect.as_ref(),
            menu_open: self.menu_open,
            pulse,
            scroll: self.scroll,
            pointer: self.pointer,
            background: &self.background,
            hits: &mut self.hits,
        }
    }
}

/// One frame's worth of renderer input, borrowed from [`App`].
pub struct RenderParts<'a> {
    pub content: &'a Content,
    pub options: UiOptions,
    pub page: Page,
    pub page_state: &'a PageState,
    pub page_effect: Option<&'a anim::PageEffect>,
    pub menu_open: bool,
    pub pulse: f32,
    pub scroll: ScrollState,
    pub pointer: Option<Vec2>,
    pub background: &'a Background,
    pub hits: &'a mut HitMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = include_str!("../../cli/assets/content.toml");

    fn app() -> App {
        App::new(CONTENT).expect("embedded content is valid")
    }

    #[test]
    fn starts_on_home() {
        let app = app();
        assert_eq!(app.page(), Page::Home);
        assert!(matches!(app.page_state(), PageState::Home(_)));
    }

    #[test]
    fn navigation_activates_exactly_one_page() {
        let mut app = app();
        for page in Page::ALL {
            app.navigate(page);
            assert_eq!(app.page(), page);
            let state_matches = matches!(
                (page, app.page_state()),
                (Page::Home, PageState::Home(_))
                    | (Page::About, PageState::About(_))
                    | (Page::Projects, PageState::Projects(_))
                    | (Page::Skills, PageState::Skills(_))
                    | (Page::Contact, PageState::Contact(_))
            );
            assert!(state_matches, "state must follow the active page");
        }
    }

    #[test]
    fn navigate_closes_menu_and_resets_scroll() {
        let mut app = app();
        app.toggle_menu();
        app.set_scroll_max(20);
        app.scroll_down(10);
        app.navigate(Page::Skills);
        assert!(!app.menu_open());
        assert_eq!(app.scroll().offset(), 0);
    }

    #[test]
    fn navigate_to_active_page_only_closes_menu() {
        let mut app = app();
        app.navigate(Page::About);
        app.toggle_menu();
        app.navigate(Page::About);
        assert!(!app.menu_open());
        assert_eq!(app.page(), Page::About);
    }

    #[test]
    fn click_on_nav_region_navigates() {
        let mut app = app();
        app.hits_mut()
            .record(HitTarget::Nav(Page::Contact), Bounds::new(0.0, 0.0, 10.0, 3.0));
        app.pointer_pressed(5, 1);
        assert_eq!(app.page(), Page::Contact);
    }

    #[test]
    fn card_click_opens_overlay_backdrop_click_closes() {
        let mut app = app();
        app.navigate(Page::Projects);
        app.hits_mut()
            .record(HitTarget::ProjectCard(1), Bounds::new(0.0, 0.0, 20.0, 8.0));
        app.pointer_pressed(3, 3);
        let PageState::Projects(projects) = app.page_state() else {
            panic!("projects page expected");
        };
        assert_eq!(projects.overlay.as_ref().map(|o| o.index), Some(1));
        assert_eq!(projects.selected, 1);

        app.hits_mut().clear();
        app.pointer_pressed(40, 20);
        let PageState::Projects(projects) = app.page_state() else {
            panic!("projects page expected");
        };
        assert!(projects.overlay.is_none());
    }

    #[test]
    fn card_click_behind_an_open_overlay_closes_it() {
        let mut app = app();
        app.navigate(Page::Projects);
        app.hits_mut()
            .record(HitTarget::ProjectCard(0), Bounds::new(0.0, 0.0, 20.0, 8.0));
        app.hits_mut()
            .record(HitTarget::ProjectCard(1), Bounds::new(0.0, 9.0, 20.0, 8.0));
        app.pointer_pressed(3, 3);

        // The second card is outside the overlay; pressing it dismisses
        // instead of swapping overlays.
        app.pointer_pressed(3, 12);
        let PageState::Projects(projects) = app.page_state() else {
            panic!("projects page expected");
        };
        assert!(projects.overlay.is_none());
        assert_eq!(projects.selected, 0);
    }

    #[test]
    fn form_submit_is_inert() {
        let mut app = app();
        app.navigate(Page::Contact);
        if let PageState::Contact(contact) = app.page_state_mut() {
            contact.name.push_str("Ada");
            contact.message.push_str("hello");
        }
        app.hits_mut()
            .record(HitTarget::Submit, Bounds::new(0.0, 10.0, 12.0, 3.0));
        app.pointer_pressed(2, 11);
        let PageState::Contact(contact) = app.page_state() else {
            panic!("contact page expected");
        };
        // No transmission and no state loss.
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.message, "hello");
        assert_eq!(contact.focus, FormFocus::Submit);
    }

    #[test]
    fn hero_buttons_route_to_projects_and_contact() {
        let mut app = app();
        app.hits_mut()
            .record(HitTarget::HeroButton(1), Bounds::new(0.0, 0.0, 10.0, 3.0));
        app.pointer_pressed(1, 1);
        assert_eq!(app.page(), Page::Contact);

        app.navigate(Page::Home);
        app.hits_mut()
            .record(HitTarget::HeroButton(0), Bounds::new(0.0, 0.0, 10.0, 3.0));
        app.pointer_pressed(1, 1);
        assert_eq!(app.page(), Page::Projects);
    }

    #[test]
    fn tick_advances_without_panicking_on_every_page() {
        let mut app = app();
        for page in Page::ALL {
            app.navigate(page);
            for _ in 0..5 {
                app.tick();
            }
        }
    }

    #[test]
    fn render_parts_starts_each_frame_with_an_empty_hit_map() {
        let mut app = app();
        app.hits_mut()
            .record(HitTarget::Logo, Bounds::new(0.0, 0.0, 4.0, 1.0));
        let parts = app.render_parts();
        assert!(parts.hits.hit(Vec2::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn pulse_is_constant_under_reduced_motion() {
        let mut app = app();
        app.ui_options.reduced_motion = true;
        assert!((app.pulse() - 1.0).abs() < f32::EPSILON);
    }
}
