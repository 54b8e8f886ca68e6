use lazy_static::lazy_static;
use regex::Regex;
use timetable_parser::RawRow;

lazy_static! {
    // Column separator patterns
    static ref COLUMN_SEPARATOR: Regex = Regex::new(r"(\s{2,}|\t+)+").unwrap();

    // Row patterns
    static ref HORIZONTAL_RULE: Regex = Regex::new(r"^[-=+|\s]{3,}$").unwrap();
}

#[derive(Debug, Clone)]
pub struct TableRegion {
    pub rows: Vec<RawRow>,
    pub start_line: usize,
    pub end_line: usize,
}

/// Finds tables in the extracted text of a single page.
///
/// A table is a run of lines that each split into at least `min_cols`
/// cells. A blank line or a line of prose ends the run; rule lines are
/// skipped. Pipe-delimited lines keep their empty cells as absent. Other
/// lines are aligned to the columns of the first line in the run, so a
/// blank cell stays in place and a cell with a wide gap inside it stays
/// whole.
pub struct TableDetector {
    min_rows: usize,
    min_cols: usize,
}

impl Default for TableDetector {
    fn default() -> Self {
        Self {
            min_rows: 2,
            min_cols: 2,
        }
    }
}

impl TableDetector {
    pub fn new(min_rows: usize, min_cols: usize) -> Self {
        Self { min_rows, min_cols }
    }

    pub fn detect_tables(&self, text: &str) -> Vec<TableRegion> {
        let lines: Vec<&str> = text.lines().collect();
        let mut tables = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            if let Some(table) = self.extract_table_at(&lines, i) {
                i = table.end_line + 1;
                tables.push(table);
            } else {
                i += 1;
            }
        }

        tables
    }

    fn extract_table_at(&self, lines: &[&str], start: usize) -> Option<TableRegion> {
        let mut run: Vec<&str> = Vec::new();
        let mut end_line = start;

        for (idx, line) in lines.iter().enumerate().skip(start) {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                break;
            }
            if HORIZONTAL_RULE.is_match(trimmed) {
                continue;
            }

            if self.is_row(trimmed) {
                run.push(line.trim_end());
                end_line = idx;
            } else {
                break;
            }
        }

        if run.len() >= self.min_rows {
            Some(TableRegion {
                rows: align_rows(&run),
                start_line: start,
                end_line,
            })
        } else {
            None
        }
    }

    fn is_row(&self, line: &str) -> bool {
        if line.contains('|') {
            let cells = pipe_cells(line);
            cells.len() >= self.min_cols && cells.iter().any(Option::is_some)
        } else {
            tokens(line).len() >= self.min_cols
        }
    }
}

/// Split a pipe-delimited line, dropping the outer pipes.
fn pipe_cells(line: &str) -> RawRow {
    let line = line.trim();
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(to_cell).collect()
}

/// Non-blank pieces of a whitespace-aligned line with their starting
/// character column.
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut found = Vec::new();
    let mut from = 0;
    for separator in COLUMN_SEPARATOR.find_iter(line) {
        push_token(&mut found, line, from, separator.start());
        from = separator.end();
    }
    push_token(&mut found, line, from, line.len());
    found
}

fn push_token<'a>(found: &mut Vec<(usize, &'a str)>, line: &'a str, from: usize, to: usize) {
    let piece = &line[from..to];
    let text = piece.trim_start();
    let offset = from + (piece.len() - text.len());
    let text = text.trim_end();
    if !text.is_empty() {
        found.push((line[..offset].chars().count(), text));
    }
}

/// Turn a run of lines into positional rows.
///
/// Column starts come from the first whitespace-aligned line. Each piece of
/// a later line goes to the last column starting at or before it; pieces
/// landing in the same column are joined with a single space.
fn align_rows(run: &[&str]) -> Vec<RawRow> {
    let columns: Vec<usize> = run
        .iter()
        .find(|line| !line.contains('|'))
        .map(|line| tokens(line).into_iter().map(|(column, _)| column).collect())
        .unwrap_or_default();

    run.iter()
        .map(|line| {
            if line.contains('|') {
                return pipe_cells(line);
            }
            let mut row: RawRow = vec![None; columns.len()];
            for (column, text) in tokens(line) {
                let slot = columns
                    .iter()
                    .rposition(|&start| start <= column)
                    .unwrap_or(0);
                row[slot] = Some(match row[slot].take() {
                    Some(existing) => format!("{existing} {text}"),
                    None => text.to_string(),
                });
            }
            row
        })
        .collect()
}

fn to_cell(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
