// Panel shell - terminal lifecycle, input handling, and the draw loop
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::application::export_trigger::ExportTrigger;
use crate::application::fetch_controller::FetchController;
use crate::presentation::render;

/// Actionable input recognized by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInput {
    Quit,
    Refresh,
    Export,
    None,
}

/// The dashboard panel: owns the terminal and the fetch controller, and
/// drives the draw/input loop.
pub struct Panel {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    controller: FetchController,
    export: ExportTrigger,
    tick_rate: Duration,
}

impl Panel {
    pub fn new(
        controller: FetchController,
        export: ExportTrigger,
        tick_rate: Duration,
    ) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            controller,
            export,
            tick_rate,
        })
    }

    /// Restore terminal to normal state.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// One automatic fetch on entry, then draw and handle input until quit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.controller.refresh();

        loop {
            self.controller.poll_outcomes();

            let state = self.controller.state().clone();
            self.terminal
                .draw(|frame| render::render_panel(frame, &state))?;

            match poll_input(self.tick_rate)? {
                PanelInput::Quit => break,
                PanelInput::Refresh => {
                    // The refresh control is non-actionable while a fetch
                    // is outstanding.
                    if !self.controller.state().is_loading() {
                        self.controller.refresh();
                    }
                }
                PanelInput::Export => {
                    if let Err(error) = self.export.open() {
                        tracing::warn!("csv export failed to launch: {error:#}");
                    }
                }
                PanelInput::None => {}
            }
        }

        Ok(())
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Poll for one input event, waiting at most `timeout`.
fn poll_input(timeout: Duration) -> io::Result<PanelInput> {
    if !event::poll(timeout)? {
        return Ok(PanelInput::None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(translate_key(key)),
        _ => Ok(PanelInput::None),
    }
}

fn translate_key(key: KeyEvent) -> PanelInput {
    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return PanelInput::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => PanelInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => PanelInput::Refresh,
        KeyCode::Char('e') | KeyCode::Char('E') => PanelInput::Export,
        _ => PanelInput::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_key_q_quits() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(translate_key(key), PanelInput::Quit);
    }

    #[test]
    fn test_translate_key_esc_quits() {
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(translate_key(key), PanelInput::Quit);
    }

    #[test]
    fn test_translate_key_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate_key(key), PanelInput::Quit);
    }

    #[test]
    fn test_translate_key_r_refreshes() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(translate_key(key), PanelInput::Refresh);
    }

    #[test]
    fn test_translate_key_e_exports() {
        let key = KeyEvent::new(KeyCode::Char('E'), KeyModifiers::NONE);
        assert_eq!(translate_key(key), PanelInput::Export);
    }

    #[test]
    fn test_translate_key_unknown_is_none() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(translate_key(key), PanelInput::None);
    }
}
