use super::layout::{Grid, GridLayout};
use crate::model::WeekdayTotals;
use console::style;
use std::io::{self, Write};

/// Highest band; every count at or above it shares the brightest colour.
pub const MAX_BAND: u8 = 9;

/// 256-colour palette for bands 1..=9, dark to bright.
const FOREGROUND: [u8; MAX_BAND as usize] = [22, 28, 34, 40, 46, 82, 118, 154, 191];
/// Background palette for bands 1..=9, drawn under black text.
const BACKGROUND: [u8; MAX_BAND as usize] = [191, 154, 118, 82, 46, 40, 34, 28, 22];

const DAY_LABELS: [&str; 7] = ["Mon", "", "Wed", "", "Fri", "", "Sun"];

/// Intensity band for a commit count: 0 for none, clamped to `MAX_BAND`.
pub fn band(count: u32) -> u8 {
    count.min(MAX_BAND as u32) as u8
}

/// Coloured glyph for a cell. Counts of zero render as an uncoloured `-`.
pub fn colorize(count: u32, background: bool) -> String {
    let band = band(count);
    if band == 0 {
        return "-".to_string();
    }

    let idx = (band - 1) as usize;
    let glyph = style(band.to_string()).force_styling(true);
    if background {
        glyph.black().on_color256(BACKGROUND[idx]).to_string()
    } else {
        glyph.color256(FOREGROUND[idx]).to_string()
    }
}

/// Month header line. A label is four characters wide, so it takes the
/// space of two cells and the following column is skipped.
pub fn month_header(layout: &GridLayout) -> String {
    let mut line = String::from("    ");
    let mut week = 0;
    while week < layout.week_count {
        match layout.month_labels.get(&week) {
            Some(label) => {
                line.push_str(&format!("{label:>4}"));
                week += 2;
            }
            None => {
                line.push_str("  ");
                week += 1;
            }
        }
    }
    line
}

pub fn render_heatmap<W: Write>(
    out: &mut W,
    layout: &GridLayout,
    grid: &Grid,
    totals: &WeekdayTotals,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", month_header(layout))?;

    for (row, cells) in grid.rows().enumerate() {
        let label = DAY_LABELS[row];
        write!(out, "{label:>4} ")?;
        for cell in cells {
            match cell {
                Some(count) => write!(out, "{} ", colorize(*count, false))?,
                None => write!(out, "  ")?,
            }
        }
        writeln!(out, "   {:>2} {label}", totals.row(row))?;
    }

    out.flush()
}
