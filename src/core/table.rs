//! Text rendering of the ledger as a fixed-width grid.
//!
//! Used by the bot to refresh the on-screen table after every mutation. Widths are
//! measured in characters so accented descriptions line up.

use crate::core::ledger::{COLUMNS, Ledger};

/// Renders the header and the most recent `max_rows` records.
///
/// Earlier records that do not fit are summarised in a trailing note.
#[must_use]
pub fn render_ledger(ledger: &Ledger, max_rows: usize) -> String {
    let skipped = ledger.len().saturating_sub(max_rows);
    let rows: Vec<[String; 5]> = ledger.iter().skip(skipped).map(|r| r.cells()).collect();

    let mut widths = COLUMNS.map(|name| name.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &COLUMNS, &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &separator, &widths);

    if ledger.is_empty() {
        out.push_str("(no records)\n");
        return out;
    }

    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    if skipped > 0 {
        out.push_str(&format!("... {skipped} earlier record(s) not shown\n"));
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_ledger;

    #[test]
    fn test_render_empty_ledger() {
        let rendered = render_ledger(&Ledger::new(), 10);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Descrição | Quantidade | Movimento | Data | Setor");
        assert_eq!(lines[2], "(no records)");
    }

    #[test]
    fn test_render_aligns_columns() {
        let rendered = render_ledger(&sample_ledger(), 10);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2 + sample_ledger().len());
        assert_eq!(
            lines[0],
            "Descrição   | Quantidade | Movimento | Data                | Setor"
        );
        assert_eq!(
            lines[2],
            "Paracetamol | 50         | Entrada   | 2024-05-01 08:00:00 | Farmácia"
        );
        let header_bars: Vec<usize> = lines[0].match_indices('|').map(|(i, _)| i).collect();
        assert_eq!(header_bars.len(), 4);
    }

    #[test]
    fn test_render_limits_to_most_recent_rows() {
        let rendered = render_ledger(&sample_ledger(), 2);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2 + 2 + 1);
        assert!(lines[2].starts_with("paracetamol"));
        assert!(lines[3].starts_with("Dipirona"));
        assert_eq!(lines[4], "... 2 earlier record(s) not shown");
    }
}
