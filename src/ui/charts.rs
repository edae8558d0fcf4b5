//! Chart panels - full-series line charts plus the territory split.
//!
//! Each line chart draws both parties over the whole series with a vertical
//! marker at the displayed year, mirroring the timeline scrubber. The
//! territory panel shows the displayed year's split as two bars, since the
//! shares always sum to 100.

use crate::app::App;
use crate::data::{Pair, Series, YearRecord};
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame,
};

/// Draw the four chart panels.
pub fn draw_charts(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let Some(series) = app.provider.active() else {
        let message = if app.provider.is_loading() {
            "Loading historical dataset..."
        } else {
            "No dataset loaded"
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(colors.gray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let year = app.current_year();
    draw_series_chart(f, top[0], "Population", series, year, colors, |r| {
        r.population
    });
    draw_series_chart(f, top[1], "Casualties", series, year, colors, |r| {
        r.casualties
    });
    draw_territory(f, bottom[0], series, year, colors);
    draw_series_chart(f, bottom[1], "Prisoners", series, year, colors, |r| {
        r.prisoners
    });
}

fn draw_series_chart(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    series: &Series,
    current_year: i32,
    colors: &ThemeColors,
    field: impl Fn(&YearRecord) -> Pair,
) {
    let party_a: Vec<(f64, f64)> = series
        .iter()
        .map(|r| (r.year as f64, field(r).party_a))
        .collect();
    let party_b: Vec<(f64, f64)> = series
        .iter()
        .map(|r| (r.year as f64, field(r).party_b))
        .collect();

    let (mut x_min, mut x_max) = match (series.min_year(), series.max_year()) {
        (Some(min), Some(max)) => (min as f64, max as f64),
        _ => return,
    };
    if x_min == x_max {
        x_min -= 1.0;
        x_max += 1.0;
    }

    let y_peak = party_a
        .iter()
        .chain(party_b.iter())
        .map(|&(_, y)| y)
        .fold(0.0_f64, f64::max);
    let y_max = if y_peak > 0.0 { y_peak * 1.1 } else { 1.0 };

    let readout = match series.get(current_year) {
        Some(record) => {
            let pair = field(record);
            format!(
                " {title} — {current_year}: A {} | B {} ",
                format_axis_label(pair.party_a),
                format_axis_label(pair.party_b)
            )
        }
        None => format!(" {title} — no data for {current_year} "),
    };

    let marker_line = [(current_year as f64, 0.0), (current_year as f64, y_max)];
    let in_range = (x_min..=x_max).contains(&(current_year as f64));

    let mut datasets = vec![
        Dataset::default()
            .name("Party A")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.green))
            .data(&party_a),
        Dataset::default()
            .name("Party B")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.blue))
            .data(&party_b),
    ];
    if in_range {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.yellow))
                .data(&marker_line),
        );
    }

    let x_axis = Axis::default()
        .style(Style::default().fg(colors.gray))
        .bounds([x_min, x_max])
        .labels(vec![
            format!("{x_min:.0}"),
            format!("{:.0}", (x_min + x_max) / 2.0),
            format!("{x_max:.0}"),
        ]);

    let y_axis = Axis::default()
        .style(Style::default().fg(colors.gray))
        .bounds([0.0, y_max])
        .labels(vec![
            "0".to_string(),
            format_axis_label(y_max / 2.0),
            format_axis_label(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .title(readout)
                .title_style(Style::default().fg(colors.yellow)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn draw_territory(
    f: &mut Frame<'_>,
    area: Rect,
    series: &Series,
    current_year: i32,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .title(format!(" Territory — {current_year} "))
        .title_style(Style::default().fg(colors.yellow));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(record) = series.get(current_year) else {
        let paragraph = Paragraph::new(format!("No data for {current_year}"))
            .style(Style::default().fg(colors.gray))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
        return;
    };

    if inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (row, label, share, fg) in [
        (chunks[0], "Party A", record.territory.party_a, colors.green),
        (chunks[1], "Party B", record.territory.party_b, colors.blue),
    ] {
        let gauge = Gauge::default()
            .ratio((share / 100.0).clamp(0.0, 1.0))
            .label(format!("{label} {share:.0}%"))
            .gauge_style(Style::default().fg(fg).bg(colors.bg1));
        f.render_widget(gauge, row);
    }
}
