//! Generation display formatting
//!
//! Formats backup generations for terminal output.

use chrono::{DateTime, Utc};

use crate::backup::GenerationInfo;

/// Format a list of generations as a table
pub fn format_generation_list(infos: &[GenerationInfo], now: DateTime<Utc>) -> String {
    if infos.is_empty() {
        return "No backup generations found.".to_string();
    }

    let path_width = infos
        .iter()
        .map(|info| info.path.display().to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<path_width$}  {:<20}  {:>6}  {}\n",
        "Gen",
        "Path",
        "Modified",
        "Age",
        "Status",
        path_width = path_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<path_width$}  {:-<20}  {:->6}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        path_width = path_width,
    ));

    for info in infos {
        let (modified, age) = match info.modified {
            Some(at) => (
                at.format("%Y-%m-%d %H:%M:%S").to_string(),
                format_age(now.signed_duration_since(at)),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        let status = if info.beyond_limit { "beyond limit" } else { "" };

        output.push_str(&format!(
            "{:>3}  {:<path_width$}  {:<20}  {:>6}  {}\n",
            info.index,
            info.path.display(),
            modified,
            age,
            status,
            path_width = path_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} generation(s)", infos.len()));
    output
}

/// Format a duration as a short human-readable age
pub fn format_age(duration: chrono::Duration) -> String {
    let seconds = duration.num_seconds();
    if seconds < 60 {
        return format!("{}s", seconds.max(0));
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    format!("{}d", hours / 24)
}
