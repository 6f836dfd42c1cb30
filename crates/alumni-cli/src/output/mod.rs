use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;
use crate::views::AlumniListView;

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

/// Render the alumni directory. Tables get one row per card plus a count line.
pub fn render_alumni(view: &AlumniListView, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(view, format);
    }
    if let Some(empty) = view.empty {
        return Ok(empty.to_string());
    }
    let items = serde_json::to_value(&view.cards)?;
    let Value::Array(items) = items else {
        anyhow::bail!("alumni cards did not serialize to an array");
    };
    let table = render_array_table(&items);
    Ok(format!(
        "{table}\n\n{} of {} alumni",
        view.cards.len(),
        view.total
    ))
}

fn table_options() -> table::TableOptions {
    table::TableOptions {
        max_width: ui::prefs().term_width,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use alumni_core::avatar::AvatarStyle;
    use alumni_core::entities::Profile;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Banner {
        message: &'static str,
        total: u32,
    }

    fn banner() -> Banner {
        Banner {
            message: "Logged in successfully!",
            total: 2,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&banner(), OutputFormat::Json).expect("json render should work");
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["message"], "Logged in successfully!");
        assert_eq!(parsed["total"], 2);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&banner(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["total"], 2);
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&banner(), OutputFormat::Table).expect("table render should work");
        let lines = out.lines().collect::<Vec<_>>();
        assert!(lines[0].contains("key"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(out.contains("Logged in successfully!"));
    }

    #[test]
    fn empty_alumni_table_is_the_empty_state() {
        let view = AlumniListView::project(&[], &AvatarStyle::default(), 50);
        let out = render_alumni(&view, OutputFormat::Table).expect("render");
        assert_eq!(out, "No alumni profiles found yet.");
    }

    #[test]
    fn alumni_table_has_one_row_per_card() {
        let ada = Profile {
            owner_id: "1".into(),
            name: "Ada Lovelace".into(),
            graduation_year: "1833".into(),
            ..Profile::default()
        };
        let grace = Profile {
            owner_id: "2".into(),
            name: "Grace Hopper".into(),
            ..Profile::default()
        };
        let view = AlumniListView::project(&[&ada, &grace], &AvatarStyle::default(), 50);
        let out = render_alumni(&view, OutputFormat::Table).expect("render");

        assert!(out.lines().next().is_some_and(|h| h.contains("name")));
        assert!(out.contains("Ada Lovelace"));
        assert!(out.contains("Grace Hopper"));
        assert!(out.ends_with("2 of 2 alumni"));
    }

    #[test]
    fn alumni_json_keeps_the_view_shape() {
        let view = AlumniListView::project(&[], &AvatarStyle::default(), 50);
        let out = render_alumni(&view, OutputFormat::Raw).expect("render");
        let parsed: Value = serde_json::from_str(&out).expect("json");
        assert_eq!(parsed["empty"], "No alumni profiles found yet.");
        assert_eq!(parsed["total"], 0);
    }
}
