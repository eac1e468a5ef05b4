use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A value with its own column layout in table mode.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Render a serializable response. Table mode shows objects as key/value
/// rows.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(key_value_table(&serde_json::to_value(value)?)),
    }
}

/// Render a list. Table mode uses the row type's own columns.
pub fn render_rows<T: Serialize + Tabular>(
    items: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&items, format);
    }
    if items.is_empty() {
        return Ok(String::from("(no rows)"));
    }
    let rows = items.iter().map(Tabular::row).collect::<Vec<_>>();
    Ok(table::render_table(T::headers(), &rows, table_options()))
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn output_rows<T: Serialize + Tabular>(items: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_rows(items, format)?);
    Ok(())
}

fn key_value_table(value: &Value) -> String {
    let rows = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| vec![key.clone(), cell(value)])
            .collect::<Vec<_>>(),
        other => vec![vec![String::from("value"), cell(other)]],
    };
    table::render_table(&["key", "value"], &rows, table_options())
}

/// Flatten a JSON value into one cell. String lists join with commas.
pub fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{Tabular, cell, render, render_rows};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Stats {
        total: u32,
        fresh: bool,
    }

    impl Tabular for Stats {
        fn headers() -> &'static [&'static str] {
            &["total", "fresh"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.total.to_string(), self.fresh.to_string()]
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Stats { total: 6, fresh: true }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["total"], 6);
    }

    #[test]
    fn raw_render_is_single_line() {
        let out = render(&Stats { total: 6, fresh: true }, OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_table_is_key_value() {
        let out = render(&Stats { total: 6, fresh: true }, OutputFormat::Table).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("total"));
    }

    #[test]
    fn rows_use_their_own_columns() {
        let out = render_rows(&[Stats { total: 6, fresh: false }], OutputFormat::Table).unwrap();
        assert!(out.starts_with("total"));
        assert!(out.contains("false"));

        let json = render_rows(&[Stats { total: 6, fresh: false }], OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('['));
    }

    #[test]
    fn empty_rows_render_placeholder() {
        let rows: [Stats; 0] = [];
        assert_eq!(render_rows(&rows, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[test]
    fn string_lists_join() {
        assert_eq!(cell(&json!(["Rust", "Python"])), "Rust, Python");
        assert_eq!(cell(&json!(null)), "-");
        assert_eq!(cell(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
