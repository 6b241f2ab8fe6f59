/// Pipe-delimited table row.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// Splits `line` into trimmed cells if it contains a pipe.
    ///
    /// The empty cell produced by a leading or trailing pipe is dropped;
    /// empty cells between pipes are kept.
    pub fn cells(line: &str) -> Option<Vec<String>> {
        if !line.contains(Self::PIPE) {
            return None;
        }
        let line = line.trim();
        let mut parts: Vec<&str> = line.split(Self::PIPE).collect();
        if line.starts_with(Self::PIPE) {
            parts.remove(0);
        }
        if line.ends_with(Self::PIPE) {
            parts.pop();
        }
        Some(parts.into_iter().map(|c| c.trim().to_string()).collect())
    }

    /// True for markdown alignment rows such as `|---|:---:|`.
    pub fn is_alignment_row(cells: &[String]) -> bool {
        !cells.is_empty()
            && cells.iter().all(|c| {
                !c.is_empty() && c.contains('-') && c.chars().all(|ch| ch == '-' || ch == ':')
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_pipes_are_dropped() {
        assert_eq!(
            TableRow::cells("| a | b |"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn no_outer_pipes() {
        assert_eq!(
            TableRow::cells("Phase | Sites"),
            Some(vec!["Phase".to_string(), "Sites".to_string()])
        );
    }

    #[test]
    fn inner_empty_cells_are_kept() {
        assert_eq!(
            TableRow::cells("|a||c|"),
            Some(vec!["a".to_string(), String::new(), "c".to_string()])
        );
    }

    #[test]
    fn lone_pipe_has_no_cells() {
        assert_eq!(TableRow::cells("|"), Some(vec![]));
    }

    #[test]
    fn no_pipe_is_not_a_row() {
        assert_eq!(TableRow::cells("plain"), None);
    }

    #[test]
    fn alignment_rows() {
        let cells = TableRow::cells("|---|:---:|--:|").unwrap();
        assert!(TableRow::is_alignment_row(&cells));
        let cells = TableRow::cells("| a | --- |").unwrap();
        assert!(!TableRow::is_alignment_row(&cells));
        assert!(!TableRow::is_alignment_row(&[]));
    }
}
