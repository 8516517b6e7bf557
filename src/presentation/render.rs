// Panel layout - title, error banner, chart, table, footer
use crate::domain::panel_state::PanelState;
use crate::presentation::{chart_view, table_view};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render_panel(frame: &mut Frame, state: &PanelState) {
    // The banner row collapses to zero height while there is no error, so
    // the chart and table reclaim the space.
    let banner_height = if state.error().is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(banner_height),
            Constraint::Percentage(55),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    if let Some(message) = state.error() {
        render_error_banner(frame, chunks[1], message);
    }
    chart_view::render(frame, chunks[2], state.data());
    table_view::render(frame, chunks[3], state.data());
    render_footer(frame, chunks[4], state.is_loading());
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " Housing Data Analysis Dashboard ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

/// Error banner over the data. The previously fetched dataset stays visible
/// beneath it; a successful refresh dismisses it.
fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Error"),
        );
    frame.render_widget(banner, area);
}

fn render_footer(frame: &mut Frame, area: Rect, loading: bool) {
    // Dim the refresh hint while a fetch is outstanding.
    let refresh_style = if loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(" [r]efresh ", refresh_style),
        Span::styled(" [e]xport csv  [q]uit ", Style::default().fg(Color::Gray)),
    ];
    if loading {
        spans.push(Span::styled(
            " Loading… ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
