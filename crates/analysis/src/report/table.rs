//! Console table rendering.
//!
//! Produces a bordered grid with columns `Timestamp, Event, User, IP,
//! Port, Log`. Whether a row is highlighted is a per-row style decision,
//! not a separate code path; coloring is controlled by an explicit
//! [`TableStyle`] context instead of process-wide terminal state.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, Color as CellColor, ContentArrangement, Table};

use logsift_core::types::{Color, LogRecord};

use super::timestamp_order;

/// Styling context for table rendering.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle {
    /// Apply the per-pattern highlight color to non-normal rows.
    pub color_enabled: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

fn cell_color(color: Color) -> CellColor {
    match color {
        Color::Red => CellColor::Red,
        Color::Magenta => CellColor::Magenta,
        Color::Yellow => CellColor::Yellow,
        Color::White => CellColor::White,
        Color::Green => CellColor::Green,
        Color::Blue => CellColor::Blue,
        Color::Cyan => CellColor::Cyan,
    }
}

/// Renders the console view of the given records.
///
/// Records are sorted by timestamp (absent last, stable). Rows with a
/// normal/info severity appear only when `show_all` is true and render
/// unstyled; all other rows always appear and are highlighted in the
/// pattern's color when the style enables it. An empty selection yields
/// an empty table, not an error.
pub fn render_table(records: &[LogRecord], show_all: bool, style: &TableStyle) -> Table {
    let mut sorted: Vec<&LogRecord> = records.iter().collect();
    sorted.sort_by(|a, b| timestamp_order(a, b));

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["Timestamp", "Event", "User", "IP", "Port", "Log"]);

    for record in sorted {
        let highlighted = !record.severity.is_normal();
        if !highlighted && !show_all {
            continue;
        }

        let cells = [
            record.formatted_timestamp(),
            record.event.clone(),
            record.user.clone(),
            record.ip.clone(),
            record.port.clone(),
            record.log.clone(),
        ];

        let row: Vec<Cell> = cells
            .into_iter()
            .map(|text| {
                let cell = Cell::new(text);
                if highlighted && style.color_enabled {
                    cell.fg(cell_color(record.color))
                } else {
                    cell
                }
            })
            .collect();

        table.add_row(row);
    }

    table
}
