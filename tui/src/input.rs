//! Input handling for the Folio TUI.
//!
//! A blocking reader thread pumps crossterm events into a bounded channel;
//! the frame loop drains it without blocking so rendering never stalls on
//! input.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tokio::sync::mpsc;

use folio_engine::{App, FormFocus, Page, PageState};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

const WHEEL_SCROLL_LINES: u16 = 2;
const PAGE_SCROLL_LINES: u16 = 10;

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the reader thread unblocks if it is
        // backpressured on a send.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("input read failed: {e}");
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                tracing::warn!("input poll failed: {e}");
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain this frame's events into the app. Returns `true` when the app
/// should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        handle_event(app, &ev);
        processed += 1;
    }
    Ok(app.should_quit())
}

fn handle_event(app: &mut App, ev: &Event) {
    match ev {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            handle_key(app, key);
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::FocusLost => app.pointer_gone(),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: &KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    // The contact form captures printable input before global bindings.
    if let PageState::Contact(contact) = app.page_state_mut()
        && handle_contact_key(contact, key)
    {
        return;
    }

    let project_count = app.content().projects.len();
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc => {
            if app.menu_open() {
                app.toggle_menu();
            } else if let PageState::Projects(projects) = app.page_state_mut()
                && projects.overlay.is_some()
            {
                projects.close();
            } else {
                app.request_quit();
            }
        }
        KeyCode::Tab => app.navigate(app.page().next()),
        KeyCode::BackTab => app.navigate(app.page().prev()),
        KeyCode::Char(digit @ '1'..='5') => {
            if let Some(page) = Page::from_digit(digit) {
                app.navigate(page);
            }
        }
        KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Left | KeyCode::Char('h') => {
            if let PageState::Projects(projects) = app.page_state_mut() {
                projects.select_prev(project_count);
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let PageState::Projects(projects) = app.page_state_mut() {
                projects.select_next(project_count);
            }
        }
        KeyCode::Enter => {
            if let PageState::Projects(projects) = app.page_state_mut() {
                if projects.overlay.is_some() {
                    projects.close();
                } else if project_count > 0 {
                    let index = projects.selected.min(project_count - 1);
                    projects.open(index);
                }
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL_LINES),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL_LINES),
        _ => {}
    }
}

/// Returns `true` when the key was consumed by the form.
fn handle_contact_key(contact: &mut folio_engine::ContactState, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => {
            contact.focus = contact.focus.next();
            true
        }
        KeyCode::BackTab => {
            contact.focus = contact.focus.prev();
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let focus = contact.focus;
            match contact.field_mut(focus) {
                Some(field) => {
                    field.push(c);
                    true
                }
                None => false,
            }
        }
        KeyCode::Backspace => {
            let focus = contact.focus;
            match contact.field_mut(focus) {
                Some(field) => {
                    field.pop();
                    true
                }
                None => false,
            }
        }
        KeyCode::Enter => {
            match contact.focus {
                FormFocus::Message => contact.message.push('\n'),
                FormFocus::Submit => contact.submit(),
                FormFocus::Name | FormFocus::Email => contact.focus = contact.focus.next(),
            }
            true
        }
        _ => false,
    }
}

fn handle_mouse(app: &mut App, mouse: &MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            app.pointer_moved(mouse.column, mouse.row);
        }
        MouseEventKind::Down(MouseButton::Left) => app.pointer_pressed(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.pointer_released(),
        MouseEventKind::ScrollUp => app.scroll_up(WHEEL_SCROLL_LINES),
        MouseEventKind::ScrollDown => app.scroll_down(WHEEL_SCROLL_LINES),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = include_str!("../../cli/assets/content.toml");

    fn app() -> App {
        App::new(CONTENT).expect("embedded content is valid")
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn q_requests_quit() {
        let mut app = app();
        handle_event(&mut app, &key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn digits_navigate() {
        let mut app = app();
        handle_event(&mut app, &key(KeyCode::Char('3')));
        assert_eq!(app.page(), Page::Projects);
        handle_event(&mut app, &key(KeyCode::Char('5')));
        assert_eq!(app.page(), Page::Contact);
    }

    #[test]
    fn tab_cycles_pages_outside_the_form() {
        let mut app = app();
        handle_event(&mut app, &key(KeyCode::Tab));
        assert_eq!(app.page(), Page::About);
        handle_event(&mut app, &key(KeyCode::BackTab));
        assert_eq!(app.page(), Page::Home);
    }

    #[test]
    fn typing_lands_in_the_focused_contact_field() {
        let mut app = app();
        app.navigate(Page::Contact);
        for c in ['A', 'd', 'a'] {
            handle_event(&mut app, &key(KeyCode::Char(c)));
        }
        handle_event(&mut app, &key(KeyCode::Backspace));
        let PageState::Contact(contact) = app.page_state() else {
            panic!("contact page expected");
        };
        assert_eq!(contact.name, "Ad");
        // 'q' is text here, not quit.
        handle_event(&mut app, &key(KeyCode::Char('q')));
        assert!(!app.should_quit());
    }

    #[test]
    fn tab_cycles_form_focus_on_contact() {
        let mut app = app();
        app.navigate(Page::Contact);
        handle_event(&mut app, &key(KeyCode::Tab));
        assert_eq!(app.page(), Page::Contact);
        let PageState::Contact(contact) = app.page_state() else {
            panic!("contact page expected");
        };
        assert_eq!(contact.focus, FormFocus::Email);
    }

    #[test]
    fn enter_opens_and_esc_closes_the_project_overlay() {
        let mut app = app();
        app.navigate(Page::Projects);
        handle_event(&mut app, &key(KeyCode::Enter));
        let PageState::Projects(projects) = app.page_state() else {
            panic!("projects page expected");
        };
        assert!(projects.overlay.is_some());

        handle_event(&mut app, &key(KeyCode::Esc));
        let PageState::Projects(projects) = app.page_state() else {
            panic!("projects page expected");
        };
        assert!(projects.overlay.is_none());
        assert!(!app.should_quit());

        handle_event(&mut app, &key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn wheel_scrolls_within_the_clamp() {
        let mut app = app();
        app.set_scroll_max(5);
        let scroll = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        for _ in 0..10 {
            handle_event(&mut app, &scroll);
        }
        assert_eq!(app.scroll().offset(), 5);
    }
}
