// Output formatting utilities for CLI commands.
// Provides unified formatting for the supported output formats (table, JSON).

use anyhow::{Result, anyhow};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Parse output format from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow!("Unknown format: '{}'. Valid formats: table, json", s)),
        }
    }
}

/// Format data as JSON string.
pub fn format_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(|e| anyhow!("JSON serialization failed: {}", e))
}

/// Format rows as an aligned table.
pub fn format_table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn test_format_json() {
        #[derive(Serialize)]
        struct Row {
            name: &'static str,
        }
        let out = format_json(&vec![Row { name: "ext4" }]).unwrap();
        assert!(out.contains("ext4"));
    }
}
