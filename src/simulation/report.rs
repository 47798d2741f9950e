//! Results reporting - CSV persistence and a console summary.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serializer;

use crate::common::Result;
use crate::simulation::RunResult;

/// Serialize an `f64` with exactly two decimals.
pub(crate) fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}

/// Write results to `path` as CSV with the standard header.
///
/// # Errors
/// Returns `Error::Csv` (wrapping I/O failures) if the file cannot be written.
pub fn write_csv<P: AsRef<Path>>(path: P, results: &[RunResult]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read results previously written by [`write_csv`].
///
/// # Errors
/// Returns `Error::Csv` if the file is missing or malformed.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RunResult>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut results = Vec::new();
    for row in reader.deserialize() {
        results.push(row?);
    }
    Ok(results)
}

/// Render a per-pattern comparison table followed by the best performers.
pub fn render_summary(results: &[RunResult]) -> String {
    let rule = "=".repeat(70);
    let thin = "-".repeat(70);
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "CACHE ALGORITHM PERFORMANCE COMPARISON");
    let _ = writeln!(out, "{}", rule);

    // Patterns in first-seen order.
    let mut patterns: Vec<&str> = Vec::new();
    for r in results {
        if !patterns.contains(&r.distribution.as_str()) {
            patterns.push(&r.distribution);
        }
    }

    for pattern in patterns {
        let _ = writeln!(out, "\n{} Access Pattern:", pattern);
        let _ = writeln!(out, "{}", thin);
        let _ = writeln!(
            out,
            "{:<12} {:<15} {:<15} {:<10} {:<10}",
            "Algorithm", "Hit Rate", "Avg Time", "Hits", "Misses"
        );
        let _ = writeln!(out, "{}", thin);
        for r in results.iter().filter(|r| r.distribution == pattern) {
            let _ = writeln!(
                out,
                "{:<12} {:<15} {:<15} {:<10} {:<10}",
                r.policy,
                format!("{:.2}%", r.hit_rate_pct),
                format!("{:.2}ms", r.avg_time_ms),
                r.hits,
                r.misses
            );
        }
    }

    let best_hit = results
        .iter()
        .max_by(|a, b| a.hit_rate_pct.total_cmp(&b.hit_rate_pct));
    let fastest = results
        .iter()
        .min_by(|a, b| a.avg_time_ms.total_cmp(&b.avg_time_ms));

    if let (Some(best_hit), Some(fastest)) = (best_hit, fastest) {
        let _ = writeln!(out, "\n{}", rule);
        let _ = writeln!(out, "BEST PERFORMERS");
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(
            out,
            "Best Hit Rate: {} on {} pattern ({:.2}%)",
            best_hit.policy, best_hit.distribution, best_hit.hit_rate_pct
        );
        let _ = writeln!(
            out,
            "Fastest Avg Time: {} on {} pattern ({:.2}ms)",
            fastest.policy, fastest.distribution, fastest.avg_time_ms
        );
    }
    let _ = writeln!(out, "{}", rule);

    out
}
