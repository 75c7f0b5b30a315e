use std::fmt::Write as FmtWrite;

use crate::stats::Composition;

/// Formats the end-of-run summary printed to the console.
pub fn render_report(filename: &str, stats: &Composition) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Sequence saved to file {}", filename);
    let _ = writeln!(output, "Sequence statistics:");
    for (nuc, pct) in stats.percentages() {
        let _ = writeln!(output, "{}: {:.1}%", nuc.as_char(), pct);
    }
    let _ = writeln!(output, "%CG: {:.1}", stats.cg_percent());
    let _ = writeln!(output, "CG/AT ratio: {:.2}", stats.cg_at_ratio());
    output
}
