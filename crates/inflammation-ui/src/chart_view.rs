//! Line-chart view of a [`GraphData`].
//!
//! Renders a title header, one bordered [`ratatui::widgets::Chart`] per series
//! stacked vertically (x = day index, y = value) and a key-hint footer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use inflammation_core::formatting::{decimals_for_span, format_day_count, format_number};
use inflammation_core::graph::{GraphData, Series};

use crate::themes::Theme;

/// Y-axis bounds covering every finite value in `values`.
///
/// A flat series is padded so the chart keeps a non-zero height; a series
/// with no finite values gets `[0, 1]`.
pub fn axis_bounds(values: &[f64]) -> [f64; 2] {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return [0.0, 1.0];
    }
    if max - min <= f64::EPSILON * max.abs().max(1.0) {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        return [min - pad, max + pad];
    }
    [min, max]
}

/// Render `graph` into `area`.
///
/// `hint` is shown in the footer, e.g. the keys that dismiss the view.
pub fn render_graph(frame: &mut Frame, area: Rect, graph: &GraphData, hint: &str, theme: &Theme) {
    if graph.is_empty() {
        render_no_data(frame, area, theme);
        return;
    }

    let [header_area, charts_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let header = vec![
        Line::from(Span::styled(graph.title.clone(), theme.header)),
        Line::from(Span::styled(
            "─".repeat(header_area.width as usize),
            theme.separator,
        )),
    ];
    frame.render_widget(Paragraph::new(header), header_area);

    let count = graph.len() as u32;
    let chunks = Layout::vertical(
        (0..count)
            .map(|_| Constraint::Ratio(1, count))
            .collect::<Vec<_>>(),
    )
    .split(charts_area);

    for (i, (series, chunk)) in graph.series().iter().zip(chunks.iter()).enumerate() {
        render_series(frame, *chunk, series, i, theme);
    }

    frame.render_widget(Paragraph::new(Span::styled(hint, theme.dim)), footer_area);
}

/// Render a centred placeholder when there is nothing to plot.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let para = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No data to display", theme.warning)),
        Line::from(Span::styled("Press q to quit", theme.dim)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.chart_border),
    )
    .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(para, area);
}

fn render_series(frame: &mut Frame, area: Rect, series: &Series, index: usize, theme: &Theme) {
    let points: Vec<(f64, f64)> = series
        .points()
        .into_iter()
        .filter(|(_, y)| y.is_finite())
        .collect();

    let [y_min, y_max] = axis_bounds(&series.values);
    let decimals = decimals_for_span(y_max - y_min);
    let last_day = series.values.len().saturating_sub(1).max(1);

    let dataset = Dataset::default()
        .name(series.name.clone())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(theme.series_style(index))
        .data(&points);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", series.name), theme.chart_title),
        Span::styled(
            format!("({}) ", format_day_count(series.values.len())),
            theme.label,
        ),
    ]);

    let x_labels = vec![
        Span::styled("0", theme.axis_label),
        Span::styled(format!("{}", last_day / 2), theme.axis_label),
        Span::styled(format!("{}", last_day), theme.axis_label),
    ];
    let y_labels = vec![
        Span::styled(format_number(y_min, decimals), theme.axis_label),
        Span::styled(format_number((y_min + y_max) / 2.0, decimals), theme.axis_label),
        Span::styled(format_number(y_max, decimals), theme.axis_label),
    ];

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.chart_border)
                .title(title),
        )
        .x_axis(
            Axis::default()
                .title(Span::styled("day", theme.axis_label))
                .style(theme.axis)
                .bounds([0.0, last_day as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.axis)
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
