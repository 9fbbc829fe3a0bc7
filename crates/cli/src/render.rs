//! Terminal rendering for aggregate results.

use colored::Colorize;

const BAR_WIDTH: usize = 50;

/// Two-column table with right-aligned counts
pub fn table(headers: (&str, &str), rows: &[(String, usize)]) {
    let key_width = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(headers.0.len()))
        .max()
        .unwrap_or(0);

    println!(
        "{:<kw$}  {:>10}",
        headers.0.bold(),
        headers.1.bold(),
        kw = key_width
    );
    for (key, count) in rows {
        println!("{:<kw$}  {:>10}", key, count, kw = key_width);
    }
}

/// Horizontal bar chart scaled to the largest count
pub fn bar_chart(rows: &[(String, usize)]) {
    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);

    for (key, count) in rows {
        let len = (count * BAR_WIDTH).div_ceil(max);
        println!(
            "{:>kw$} {} {}",
            key,
            "█".repeat(len).cyan(),
            count,
            kw = key_width
        );
    }
}

pub fn warn_empty(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}
