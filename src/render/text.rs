//! Plain-text renderer.
//!
//! # Layout
//!
//! ```text
//! == Work ==                              (main face heading)
//! 2025-2026  Freelancing                  (panel lines)
//! ...
//! [Intro] *Work* [Education] ...          (menu, active entry starred)
//! < ○ ● ○ ○ ○ ○ >  Work                   (navigation dots + label)
//!
//! -- Project #2 / Technologies --         (only while the modal is open)
//! React | Node.js | MongoDB | Stripe
//! ```
//!
//! When [`RenderConfig::clear_screen`] is set each frame starts with an
//! ANSI clear-screen sequence so the terminal shows only the latest state.

use crate::catalog::ProjectCatalog;
use crate::config::RenderConfig;
use crate::content::{panel, project_face_lines, project_face_title};
use crate::face::Face;
use crate::navigation::NavigationState;
use crate::traits::RenderEvent;
use log::{debug, info};
use std::io::{self, Write};
use std::sync::mpsc;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws [`NavigationState`] frames as text.
pub struct TextRenderer<W: Write, C: ProjectCatalog> {
    out: W,
    catalog: C,
    config: RenderConfig,
    scroll_locked: bool,
}

impl<W: Write, C: ProjectCatalog> TextRenderer<W, C> {
    pub fn new(out: W, catalog: C, config: RenderConfig) -> Self {
        Self {
            out,
            catalog,
            config,
            scroll_locked: false,
        }
    }

    /// Whether the last [`RenderEvent::ScrollLock`] locked page scrolling.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Consume the renderer and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Apply one event.
    pub fn apply(&mut self, event: RenderEvent) -> io::Result<()> {
        match event {
            RenderEvent::Frame(state) => self.draw(&state),
            RenderEvent::ScrollLock(locked) => {
                debug!("scroll lock {}", locked);
                self.scroll_locked = locked;
                Ok(())
            }
        }
    }

    /// Draw events until the sender side of `rx` is dropped.
    pub fn run(&mut self, rx: mpsc::Receiver<RenderEvent>) -> io::Result<()> {
        for event in rx {
            self.apply(event)?;
        }
        info!("render channel closed");
        Ok(())
    }

    /// Draw a full frame.
    pub fn draw(&mut self, state: &NavigationState) -> io::Result<()> {
        if self.config.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }

        let face = panel(state.active_face);
        writeln!(self.out, "== {} ==", face.heading)?;
        for line in face.lines {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", menu_line(state.active_face))?;

        // The arrows and dots are hidden while the modal covers the page.
        if !state.is_modal_open() {
            writeln!(self.out, "< {} >  {}", dots(state.active_face), face.label)?;
        }

        if let Some(project) = state.open_project.and_then(|id| self.catalog.get(id)) {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "-- {} / {} --",
                project.title,
                project_face_title(state.project_face)
            )?;
            for line in project_face_lines(project, state.project_face) {
                writeln!(self.out, "{}", line)?;
            }
            writeln!(self.out, "{}  [x] close", dots(state.project_face))?;
        }

        self.out.flush()
    }
}

/// Menu entries with the active one starred.
fn menu_line(active: Face) -> String {
    Face::ORDER
        .iter()
        .map(|f| {
            let label = panel(*f).menu_label;
            if *f == active {
                format!("*{}*", label)
            } else {
                format!("[{}]", label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One dot per face, the active one filled.
fn dots(active: Face) -> String {
    Face::ORDER
        .iter()
        .map(|f| if *f == active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProjectId, StaticCatalog};

    fn plain() -> RenderConfig {
        RenderConfig {
            clear_screen: false,
        }
    }

    fn render(state: NavigationState) -> String {
        let mut r = TextRenderer::new(Vec::new(), StaticCatalog, plain());
        r.draw(&state).unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn dots_mark_active_face() {
        assert_eq!(dots(Face::Front), "● ○ ○ ○ ○ ○");
        assert_eq!(dots(Face::Bottom), "○ ○ ○ ○ ○ ●");
    }

    #[test]
    fn menu_stars_active_entry() {
        let line = menu_line(Face::Right);
        assert!(line.starts_with("[Intro] *Work* [Education]"), "{line}");
    }

    #[test]
    fn draws_main_face_without_modal() {
        let out = render(NavigationState {
            active_face: Face::Back,
            ..NavigationState::default()
        });
        assert!(out.starts_with("== Education =="), "{out}");
        assert!(out.contains("42 Abu Dhabi"));
        assert!(out.contains("< ○ ○ ● ○ ○ ○ >  Education"));
        assert!(!out.contains("--"));
    }

    #[test]
    fn draws_project_panel_when_open() {
        let out = render(NavigationState {
            active_face: Face::Top,
            open_project: Some(ProjectId(3)),
            project_face: Face::Right,
        });
        assert!(out.contains("-- Project #3 / Technologies --"), "{out}");
        assert!(out.contains("Next.js | TypeScript | Prisma | PostgreSQL"));
        assert!(!out.contains("<"), "main arrows hidden while modal open");
    }

    #[test]
    fn unknown_project_draws_no_panel() {
        let out = render(NavigationState {
            open_project: Some(ProjectId(99)),
            ..NavigationState::default()
        });
        assert!(!out.contains("-- "), "{out}");
    }

    #[test]
    fn clear_screen_prefixes_frame() {
        let mut r = TextRenderer::new(
            Vec::new(),
            StaticCatalog,
            RenderConfig { clear_screen: true },
        );
        r.draw(&NavigationState::default()).unwrap();
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.starts_with(CLEAR_SCREEN));
    }

    #[test]
    fn run_drains_channel() {
        let (tx, rx) = mpsc::channel();
        tx.send(RenderEvent::ScrollLock(true)).unwrap();
        tx.send(RenderEvent::Frame(NavigationState::default())).unwrap();
        drop(tx);
        let mut r = TextRenderer::new(Vec::new(), StaticCatalog, plain());
        r.run(rx).unwrap();
        assert!(r.scroll_locked());
        let out = String::from_utf8(r.into_inner()).unwrap();
        assert!(out.contains("== Hi, I'm Sandy"));
    }
}
