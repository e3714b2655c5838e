//! Built-in sample statistics shown before any import.

use super::types::StatsRow;

const SAMPLE: [(&str, &str, i64, &str); 10] = [
    ("2023-10-20", "Casa Campione A", 45, "185s"),
    ("2023-10-21", "Casa Campione B", 60, "210s"),
    ("2023-10-22", "Showroom Principale", 75, "240s"),
    ("2023-10-23", "Casa Campione A", 55, "190s"),
    ("2023-10-24", "Casa Campione B", 80, "220s"),
    ("2023-10-25", "Showroom Principale", 95, "260s"),
    ("2023-10-26", "Casa Campione A", 65, "200s"),
    ("2023-10-27", "Showroom Principale", 110, "280s"),
    ("2023-10-28", "Casa Campione B", 90, "230s"),
    ("2023-10-29", "Casa Campione A", 70, "205s"),
];

/// Sample rows, oldest first
pub fn sample_rows() -> Vec<StatsRow> {
    SAMPLE
        .iter()
        .map(|&(date, name, uv, avg_time)| StatsRow::new(date, name, uv, avg_time))
        .collect()
}
