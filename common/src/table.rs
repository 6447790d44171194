//! Plain-text rendering of a [`ResultTable`].

use crate::ResultTable;

const HEADERS: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders `table` as an ASCII bordered table with the title in the top border.
pub fn render_table(table: &ResultTable) -> String {
    let rows: Vec<[String; 4]> = table
        .rows()
        .map(|(keyword, stats)| {
            [
                keyword.to_string(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats.average_salary.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| width(header));
    for row in &rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(width(cell));
        }
    }

    let separator = border(&widths);
    let mut out = String::new();
    out.push_str(&titled_border(&separator, table.title()));
    out.push('\n');
    out.push_str(&line(&HEADERS, &widths));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&line(row, &widths));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize; 4]) -> String {
    let mut out = String::from("+");
    for column_width in widths {
        out.push_str(&"-".repeat(column_width + 2));
        out.push('+');
    }
    out
}

/// Overwrites the start of the top border with the title when it fits.
fn titled_border(separator: &str, title: &str) -> String {
    let border_len = width(separator);
    let title_len = width(title);
    if title.is_empty() || title_len + 2 > border_len {
        return separator.to_string();
    }

    let mut out = String::from("+");
    out.push_str(title);
    out.extend(separator.chars().skip(title_len + 1));
    out
}

fn line<S: AsRef<str>>(cells: &[S; 4], widths: &[usize; 4]) -> String {
    let mut out = String::from("|");
    for (cell, column_width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(column_width - width(cell)));
        out.push_str(" |");
    }
    out
}
