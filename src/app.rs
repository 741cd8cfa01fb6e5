use std::io::{self, Write};
use std::path::Path;

use chrono::{NaiveDate, TimeZone};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block, Paragraph, Row, Table, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::darksky::ForecastSource;
use crate::error::Error;
use crate::report::{DayReport, LAST_HOUR};
use crate::weather::Units;

const DATE_BOX_WIDTH: u16 = 16;
const COLUMN_SPACING: u16 = 2;

/// Knobs a single run accepts on top of the configuration file.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Number of complete days to render before stopping.
    pub days: usize,
    /// Overrides the configured unit system.
    pub units: Option<Units>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            days: 2,
            units: None,
        }
    }
}

/// Loads the configuration, fetches the forecast and renders one table per local day.
///
/// A day is rendered when its 23:00 sample arrives, so a partial last day is dropped.
/// Returns the number of days rendered.
pub fn run<S, Tz, W>(
    config_path: &Path,
    source: &S,
    tz: Tz,
    options: Options,
    out: &mut W,
) -> Result<usize, Error>
where
    S: ForecastSource + ?Sized,
    Tz: TimeZone,
    W: Write,
{
    let config = Config::from_file(config_path)?;
    log::debug!("loaded configuration from {}", config_path.display());
    let units = options.units.unwrap_or(config.units);

    let forecast = source.fetch(&config, units)?;

    let mut report = DayReport::new(tz, units);
    let mut shown_days = 0;
    if options.days == 0 {
        return Ok(shown_days);
    }
    for sample in &forecast.hourly.data {
        let Some(hour) = report.add_sample(sample) else {
            log::warn!("skipping sample with invalid timestamp {}", sample.time);
            continue;
        };
        if hour != LAST_HOUR {
            continue;
        }

        if let Err(err) = render_day(&report, out) {
            log::warn!("failed to write report: {err}");
        }
        report.reset();
        shown_days += 1;
        if shown_days == options.days {
            break;
        }
    }
    if !report.is_empty() {
        log::info!("dropping {} samples of an incomplete day", report.len());
    }
    Ok(shown_days)
}

/// Writes the boxed date header, the hourly table and two blank lines.
pub fn render_day<Tz: TimeZone, W: Write>(report: &DayReport<Tz>, out: &mut W) -> io::Result<()> {
    if let Some(date) = report.date() {
        write_buffer(&date_box(date), out)?;
    }
    write_buffer(&hour_table(report), out)?;
    write!(out, "\n\n")?;
    out.flush()
}

fn date_box(date: NaiveDate) -> Buffer {
    let area = Rect::new(0, 0, DATE_BOX_WIDTH, 3);
    let mut buf = Buffer::empty(area);
    Paragraph::new(format!(" {}", date.format("%Y-%m-%-d")))
        .block(Block::bordered())
        .render(area, &mut buf);
    buf
}

fn hour_table<Tz: TimeZone>(report: &DayReport<Tz>) -> Buffer {
    let rows = report.rows();
    let widths: Vec<u16> = (0..rows[0].len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].width() as u16)
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = Row::new(rows[0].clone());
    let rule = Row::new(widths.iter().map(|&width| "─".repeat(width as usize)));
    let body = std::iter::once(rule).chain(rows[1..].iter().map(|row| Row::new(row.clone())));

    let width = widths.iter().sum::<u16>() + COLUMN_SPACING * (widths.len() as u16 - 1);
    let area = Rect::new(0, 0, width, rows.len() as u16 + 1);
    let mut buf = Buffer::empty(area);
    Table::new(body, widths.iter().map(|&width| Constraint::Length(width)))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .render(area, &mut buf);
    buf
}

/// Dumps a buffer as plain text, one line per buffer row.
fn write_buffer<W: Write>(buf: &Buffer, out: &mut W) -> io::Result<()> {
    let area = buf.area;
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut hidden = 0;
        for x in area.left()..area.right() {
            // cells covered by a wide glyph are blanked by ratatui
            if hidden > 0 {
                hidden -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            hidden = symbol.width().saturating_sub(1);
            line.push_str(symbol);
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
