//! Terminal backend built on crossterm.

use std::{
    io::{self, Stderr, Write},
    panic,
};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor as ccursor, event as cevent, style, terminal,
};
use scopeguard::{ScopeGuard, guard};

use crate::{
    backend::RenderBackend,
    error::Result,
    event::{Event, key, mouse},
    geom::{Expanse, Point},
    style::{Color, Style},
};

/// Translate a deeplist color into a crossterm color.
fn translate_color(c: Color) -> style::Color {
    match c {
        Color::Black => style::Color::Black,
        Color::DarkGrey => style::Color::DarkGrey,
        Color::Red => style::Color::Red,
        Color::DarkRed => style::Color::DarkRed,
        Color::Green => style::Color::Green,
        Color::DarkGreen => style::Color::DarkGreen,
        Color::Yellow => style::Color::Yellow,
        Color::DarkYellow => style::Color::DarkYellow,
        Color::Blue => style::Color::Blue,
        Color::DarkBlue => style::Color::DarkBlue,
        Color::Magenta => style::Color::Magenta,
        Color::DarkMagenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::Cyan,
        Color::DarkCyan => style::Color::DarkCyan,
        Color::White => style::Color::White,
        Color::Grey => style::Color::Grey,
        Color::Rgb { r, g, b } => style::Color::Rgb { r, g, b },
        Color::AnsiValue(a) => style::Color::AnsiValue(a),
    }
}

/// Restore the terminal to cooked mode on the main screen.
fn restore_terminal(fp: &mut Stderr) -> io::Result<()> {
    fp.execute(terminal::LeaveAlternateScreen)?;
    fp.execute(cevent::DisableMouseCapture)?;
    fp.execute(ccursor::Show)?;
    terminal::disable_raw_mode()
}

/// Guard holding the terminal in raw mode on the alternate screen. The
/// terminal is restored when the session is dropped.
#[derive(Debug)]
pub struct TerminalSession {
    /// Stderr handle used for control output.
    fp: Stderr,
    /// Whether the session still owns the terminal.
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen, optionally capturing the mouse.
    pub fn start(mouse: bool) -> Result<Self> {
        let mut fp = io::stderr();
        terminal::enable_raw_mode()?;
        fp.execute(terminal::EnterAlternateScreen)?;
        if mouse {
            fp.execute(cevent::EnableMouseCapture)?;
        }
        fp.execute(ccursor::Hide)?;
        Ok(Self { fp, active: true })
    }

    /// Release the terminal.
    pub fn stop(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            restore_terminal(&mut self.fp)?;
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::error!("failed to restore terminal: {}", e);
        }
    }
}

/// Install a panic hook that restores the terminal before the previous hook
/// prints. The default hook is reinstated when the returned guard drops.
pub fn install_panic_hook() -> ScopeGuard<(), impl FnOnce(())> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |pi| {
        drop(restore_terminal(&mut io::stderr()));
        previous(pi);
    }));
    guard((), |()| {
        drop(panic::take_hook());
    })
}

/// Crossterm-backed render backend.
#[derive(Debug)]
pub struct CrosstermRender {
    /// Stderr handle used for rendering output.
    fp: Stderr,
}

impl Default for CrosstermRender {
    fn default() -> Self {
        Self { fp: io::stderr() }
    }
}

impl RenderBackend for CrosstermRender {
    fn style(&mut self, s: &Style) -> Result<()> {
        // Reset first so attributes from the previous run never leak.
        self.fp.queue(style::SetAttribute(style::Attribute::Reset))?;
        self.fp
            .queue(style::SetForegroundColor(translate_color(s.fg)))?;
        self.fp
            .queue(style::SetBackgroundColor(translate_color(s.bg)))?;
        if s.attrs.bold {
            self.fp.queue(style::SetAttribute(style::Attribute::Bold))?;
        }
        if s.attrs.dim {
            self.fp.queue(style::SetAttribute(style::Attribute::Dim))?;
        }
        if s.attrs.italic {
            self.fp
                .queue(style::SetAttribute(style::Attribute::Italic))?;
        }
        if s.attrs.underline {
            self.fp
                .queue(style::SetAttribute(style::Attribute::Underlined))?;
        }
        Ok(())
    }

    fn text(&mut self, loc: Point, txt: &str) -> Result<()> {
        self.fp.queue(ccursor::MoveTo(loc.x as u16, loc.y as u16))?;
        self.fp.queue(style::Print(txt))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.fp.flush()?;
        Ok(())
    }
}

/// The current terminal size.
pub fn terminal_size() -> Result<Expanse> {
    let (w, h) = terminal::size()?;
    Ok(Expanse::new(w.into(), h.into()))
}

/// Block until the next terminal event we understand arrives.
pub fn read_event() -> Result<Event> {
    loop {
        if let Some(e) = translate_event(cevent::read()?) {
            return Ok(e);
        }
    }
}

/// Translate crossterm key modifiers into deeplist modifiers.
fn translate_key_modifiers(mods: cevent::KeyModifiers) -> key::Mods {
    key::Mods {
        shift: mods.contains(cevent::KeyModifiers::SHIFT),
        ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
        alt: mods.contains(cevent::KeyModifiers::ALT),
    }
}

/// Translate a crossterm mouse button into a deeplist button.
fn translate_button(b: cevent::MouseButton) -> mouse::Button {
    match b {
        cevent::MouseButton::Left => mouse::Button::Left,
        cevent::MouseButton::Right => mouse::Button::Right,
        cevent::MouseButton::Middle => mouse::Button::Middle,
    }
}

/// Translate a crossterm key code.
fn translate_key_code(code: cevent::KeyCode) -> key::KeyCode {
    match code {
        cevent::KeyCode::Backspace => key::KeyCode::Backspace,
        cevent::KeyCode::Enter => key::KeyCode::Enter,
        cevent::KeyCode::Left => key::KeyCode::Left,
        cevent::KeyCode::Right => key::KeyCode::Right,
        cevent::KeyCode::Up => key::KeyCode::Up,
        cevent::KeyCode::Down => key::KeyCode::Down,
        cevent::KeyCode::Home => key::KeyCode::Home,
        cevent::KeyCode::End => key::KeyCode::End,
        cevent::KeyCode::PageUp => key::KeyCode::PageUp,
        cevent::KeyCode::PageDown => key::KeyCode::PageDown,
        cevent::KeyCode::Tab => key::KeyCode::Tab,
        cevent::KeyCode::BackTab => key::KeyCode::BackTab,
        cevent::KeyCode::Delete => key::KeyCode::Delete,
        cevent::KeyCode::Insert => key::KeyCode::Insert,
        cevent::KeyCode::F(x) => key::KeyCode::F(x),
        cevent::KeyCode::Char(c) => key::KeyCode::Char(c),
        cevent::KeyCode::Esc => key::KeyCode::Esc,
        _ => key::KeyCode::Null,
    }
}

/// Translate a crossterm event into a deeplist event. Key releases and paste
/// events have no meaning for a list and are dropped.
fn translate_event(e: cevent::Event) -> Option<Event> {
    match e {
        cevent::Event::Key(k) => {
            if k.kind == cevent::KeyEventKind::Release {
                return None;
            }
            Some(Event::Key(key::Key {
                mods: translate_key_modifiers(k.modifiers),
                key: translate_key_code(k.code),
            }))
        }
        cevent::Event::Mouse(m) => {
            let mut button = mouse::Button::None;
            let action = match m.kind {
                cevent::MouseEventKind::Down(b) => {
                    button = translate_button(b);
                    mouse::Action::Down
                }
                cevent::MouseEventKind::Up(b) => {
                    button = translate_button(b);
                    mouse::Action::Up
                }
                cevent::MouseEventKind::Drag(b) => {
                    button = translate_button(b);
                    mouse::Action::Drag
                }
                cevent::MouseEventKind::Moved => mouse::Action::Moved,
                cevent::MouseEventKind::ScrollDown => mouse::Action::ScrollDown,
                cevent::MouseEventKind::ScrollUp => mouse::Action::ScrollUp,
                cevent::MouseEventKind::ScrollLeft => mouse::Action::ScrollLeft,
                cevent::MouseEventKind::ScrollRight => mouse::Action::ScrollRight,
            };
            Some(Event::Mouse(mouse::MouseEvent {
                button,
                action,
                location: Point {
                    x: m.column.into(),
                    y: m.row.into(),
                },
                modifiers: translate_key_modifiers(m.modifiers),
            }))
        }
        cevent::Event::Resize(x, y) => Some(Event::Resize(Expanse::new(x.into(), y.into()))),
        cevent::Event::FocusGained => Some(Event::FocusGained),
        cevent::Event::FocusLost => Some(Event::FocusLost),
        cevent::Event::Paste(_) => None,
    }
}
