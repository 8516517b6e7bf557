// Table view - row-per-record binding for the dataset
use crate::domain::analysis::DataPoint;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table};

/// Draw the dataset as a Month / Region / Increase % table in record order,
/// the increase always with two decimals. An empty dataset draws the header
/// with no body rows.
pub fn render(frame: &mut Frame, area: Rect, data: &[DataPoint]) {
    let rows: Vec<Row> = data
        .iter()
        .enumerate()
        .map(|(index, point)| {
            Row::new(vec![
                point.month.clone(),
                point.region.clone(),
                point.increase_display(),
            ])
            .style(row_style(index))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ],
    )
    .header(
        Row::new(vec!["Month", "Region", "Increase %"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title("Raw Data"));

    frame.render_widget(table, area);
}

/// Alternating row background, cosmetic only.
fn row_style(index: usize) -> Style {
    if index % 2 == 0 {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_banding_alternates_by_index() {
        assert_ne!(row_style(0), row_style(1));
        assert_eq!(row_style(0), row_style(2));
        assert_eq!(row_style(1), row_style(3));
    }

    #[test]
    fn test_even_rows_carry_the_band() {
        assert_eq!(row_style(0).bg, Some(Color::DarkGray));
        assert_eq!(row_style(1).bg, None);
    }
}
