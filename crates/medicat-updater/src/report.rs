//! HTML status table of the distribution's torrents.
//!
//! Mail clients ignore stylesheets, so every table, header and data cell carries the same inline
//! style.

use html_escape::encode_text;
use medicat_torrent_types::Torrent;

use crate::size::format_size;

/// Inline style applied to the table and to every cell.
pub const CELL_STYLE: &str = "padding: 3px; border: 1px solid black; border-collapse: collapse;";

const HEADERS: [&str; 7] = [
    "Name",
    "Size",
    "State",
    "Ratio",
    "Amount Uploaded",
    "Seeds",
    "Leechs",
];

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    /// Torrent name.
    pub name: String,
    /// Size, e.g. `21.0GiB`.
    pub size: String,
    /// Client state, e.g. `stalledUP`.
    pub state: String,
    /// Share ratio.
    pub ratio: String,
    /// Uploaded amount, e.g. `3.2TiB`.
    pub uploaded: String,
    /// Seeds in the swarm.
    pub seeds: String,
    /// Connected leechers with the swarm total, e.g. `2 (14 total)`.
    pub leechs: String,
}

impl From<&Torrent> for StatusRow {
    fn from(torrent: &Torrent) -> Self {
        Self {
            name: torrent.name.clone(),
            size: format_size(torrent.size as f64),
            state: torrent.state.clone(),
            ratio: torrent.ratio.to_string(),
            uploaded: format_size(torrent.uploaded as f64),
            seeds: torrent.num_complete.to_string(),
            leechs: format!(
                "{} ({} total)",
                torrent.num_leechs, torrent.num_incomplete
            ),
        }
    }
}

impl StatusRow {
    fn cells(&self) -> [&str; 7] {
        [
            self.name.as_str(),
            self.size.as_str(),
            self.state.as_str(),
            self.ratio.as_str(),
            self.uploaded.as_str(),
            self.seeds.as_str(),
            self.leechs.as_str(),
        ]
    }
}

/// Rows for all torrents whose name contains `distribution` (ignoring case), sorted by name.
pub fn status_rows(torrents: &[Torrent], distribution: &str) -> Vec<StatusRow> {
    let mut matching: Vec<&Torrent> = torrents
        .iter()
        .filter(|torrent| torrent.name_contains_ignore_case(distribution))
        .collect();
    matching.sort_by(|a, b| a.name.cmp(&b.name));
    matching.into_iter().map(StatusRow::from).collect()
}

/// Renders rows as a styled HTML table. Cell contents are escaped.
pub fn render_status_table(rows: &[StatusRow]) -> String {
    let mut html = format!("<table style=\"{CELL_STYLE}\">\n<thead>\n<tr>");
    for header in HEADERS {
        html.push_str(&format!("<th style=\"{CELL_STYLE}\">{header}</th>"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        for cell in row.cells() {
            html.push_str(&format!(
                "<td style=\"{CELL_STYLE}\">{}</td>",
                encode_text(cell)
            ));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Status table for the torrents of `distribution`.
pub fn status_table(torrents: &[Torrent], distribution: &str) -> String {
    render_status_table(&status_rows(torrents, distribution))
}
