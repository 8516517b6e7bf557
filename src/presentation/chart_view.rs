// Chart view - line-chart binding for the dataset
use crate::domain::analysis::DataPoint;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};

/// Draw the dataset as a single continuous line in record order.
///
/// X is the record index (months labelled from the data), Y is the increase
/// percentage auto-scaled to the data range. Records are not grouped by
/// region; one line crosses all of them. An empty dataset draws the frame
/// and axes with no line.
pub fn render(frame: &mut Frame, area: Rect, data: &[DataPoint]) {
    let points = series_points(data);
    let datasets = if points.is_empty() {
        Vec::new()
    } else {
        vec![
            Dataset::default()
                .name("Increase %")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&points),
        ]
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Monthly Increase by Region"),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds(data.len()))
                .labels(month_labels(data)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds(data))
                .labels(y_labels(data)),
        );

    frame.render_widget(chart, area);
}

/// Record index on X, increase on Y, in dataset order.
fn series_points(data: &[DataPoint]) -> Vec<(f64, f64)> {
    data.iter()
        .enumerate()
        .map(|(index, point)| (index as f64, point.increase))
        .collect()
}

fn x_bounds(len: usize) -> [f64; 2] {
    if len < 2 {
        return [0.0, 1.0];
    }
    [0.0, (len - 1) as f64]
}

/// Y range of the data with 10% padding; degenerate ranges are widened so
/// the axis never collapses.
fn y_bounds(data: &[DataPoint]) -> [f64; 2] {
    let mut values = data.iter().map(|p| p.increase);
    let Some(first) = values.next() else {
        return [0.0, 1.0];
    };
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if (max - min).abs() < f64::EPSILON {
        return [min - 1.0, max + 1.0];
    }
    let pad = (max - min) * 0.1;
    [min - pad, max + pad]
}

/// First, middle, and last month labels, matching the X bounds.
fn month_labels(data: &[DataPoint]) -> Vec<String> {
    match data.len() {
        0 => Vec::new(),
        1 => vec![data[0].month.clone()],
        2 => vec![data[0].month.clone(), data[1].month.clone()],
        n => vec![
            data[0].month.clone(),
            data[n / 2].month.clone(),
            data[n - 1].month.clone(),
        ],
    }
}

fn y_labels(data: &[DataPoint]) -> Vec<String> {
    let [lo, hi] = y_bounds(data);
    let mid = (lo + hi) / 2.0;
    vec![
        format!("{lo:.2}"),
        format!("{mid:.2}"),
        format!("{hi:.2}"),
    ]
}
