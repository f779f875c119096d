//! Terminal rendering of a conformation as a node-link diagram.

use console::style;
use hp_core::Polarity;
use hp_lattice::{Pos, Sequence};

/// Draws the conformation on a doubled canvas: residues sit at even
/// coordinates (hydrophobic green, polar red), chain bonds at the
/// midpoints between them.
pub fn render(sequence: &Sequence, positions: &[Pos]) -> String {
    if positions.is_empty() {
        return String::new();
    }
    let min_x = positions.iter().map(|cell| cell.x).min().unwrap_or(0);
    let max_x = positions.iter().map(|cell| cell.x).max().unwrap_or(0);
    let min_y = positions.iter().map(|cell| cell.y).min().unwrap_or(0);
    let max_y = positions.iter().map(|cell| cell.y).max().unwrap_or(0);

    let rows = ((max_x - min_x) * 2 + 1) as usize;
    let cols = ((max_y - min_y) * 2 + 1) as usize;
    let mut canvas = vec![vec![" ".to_string(); cols]; rows];

    for (index, &cell) in positions.iter().enumerate() {
        let row = ((cell.x - min_x) * 2) as usize;
        let col = ((cell.y - min_y) * 2) as usize;
        canvas[row][col] = match sequence.polarity(index) {
            Polarity::Hydrophobic => style("H").green().bold().to_string(),
            Polarity::Polar => style("P").red().bold().to_string(),
        };
    }
    for window in positions.windows(2) {
        let (a, b) = (window[0], window[1]);
        let row = (a.x + b.x - 2 * min_x) as usize;
        let col = (a.y + b.y - 2 * min_y) as usize;
        canvas[row][col] = if a.x == b.x { "-" } else { "|" }.to_string();
    }

    let mut out = String::new();
    for row in canvas {
        out.push_str(row.join("").trim_end());
        out.push('\n');
    }
    out
}
