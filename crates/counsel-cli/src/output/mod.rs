use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a one-line notification on stderr, keeping stdout parseable.
pub fn notice(message: &str, flags: &GlobalFlags) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_rows(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["field", "value"], &rows, table_options()))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

/// One row per array item; columns are the union of the item keys.
fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    let mut headers = Vec::<&str>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(&key.as_str()) {
            headers.push(key.as_str());
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &rows, table_options())
}

/// Flatten a JSON value into one table cell.
///
/// Missing references (`null`) show as `-`; lists of labels are comma-joined.
fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(|item| !item.is_object()) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{render, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Firm {
        id: u32,
        name: &'static str,
        bar_number: Option<&'static str>,
    }

    fn smith() -> Firm {
        Firm {
            id: 1,
            name: "Smith & Associates Law Firm",
            bar_number: None,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&smith(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["name"], "Smith & Associates Law Firm");
        assert_eq!(parsed["barNumber"], serde_json::Value::Null);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&smith(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.starts_with("{\"id\":1"));
    }

    #[test]
    fn record_renders_as_field_value_table() {
        let out = render(&smith(), OutputFormat::Table).expect("table render should work");
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("field"));
        assert!(
            out.lines()
                .any(|line| line.starts_with("barNumber") && line.trim_end().ends_with('-'))
        );
    }

    #[test]
    fn list_renders_one_row_per_record() {
        let firms = vec![
            smith(),
            Firm {
                id: 2,
                name: "Johnson Legal Group",
                bar_number: Some("CA-1"),
            },
        ];
        let out = render(&firms, OutputFormat::Table).expect("table render should work");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        let header: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(header, ["barNumber", "id", "name"]);
        assert!(lines[3].starts_with("CA-1"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let out = render(&Vec::<u32>::new(), OutputFormat::Table).unwrap();
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn label_lists_are_comma_joined() {
        assert_eq!(
            value_to_cell(&json!(["Personal Injury", "Criminal Defense"])),
            "Personal Injury, Criminal Defense"
        );
        assert_eq!(value_to_cell(&json!([{"a": 1}])), "[{\"a\":1}]");
    }
}
