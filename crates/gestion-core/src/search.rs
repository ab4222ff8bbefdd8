//! Live table search.
//!
//! A row is visible when its concatenated cell text contains the query as a
//! case-insensitive substring. The empty query matches every row. Matching is
//! recomputed synchronously on every keystroke; there is no debounce.

/// Concatenated text content of a row, the way it reads on screen.
pub fn row_text<S: AsRef<str>>(cells: &[S]) -> String {
    let mut text = String::new();
    for cell in cells {
        text.push_str(cell.as_ref());
    }
    text
}

/// Whether a row stays visible under the given query.
pub fn row_matches<S: AsRef<str>>(query: &str, cells: &[S]) -> bool {
    if query.is_empty() {
        return true;
    }
    row_text(cells)
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Visibility of every row under the given query, in row order.
pub fn visible_rows<S: AsRef<str>>(query: &str, rows: &[Vec<S>]) -> Vec<bool> {
    rows.iter().map(|row| row_matches(query, row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn empty_query_shows_all_rows() {
        let rows = vec![row(&["Lavandina", "Ayudín"]), row(&["Detergente", "Magistral"])];
        assert_eq!(visible_rows("", &rows), vec![true, true]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let cells = row(&["García", "Lavandina", "$ 1.200,00"]);
        assert!(row_matches("garcía", &cells));
        assert!(row_matches("LAVAN", &cells));
        assert!(!row_matches("detergente", &cells));
    }

    #[test]
    fn match_spans_cell_boundaries() {
        // the row reads as one run of text, exactly as rendered
        let cells = row(&["García", "Lavandina"]);
        assert!(row_matches("garcíalavandina", &cells));
    }

    #[test]
    fn substring_anywhere_in_the_row() {
        let cells = row(&["12/3/2026", "Pérez", "Detergente"]);
        assert!(row_matches("érez", &cells));
        assert!(row_matches("3/20", &cells));
    }
}
