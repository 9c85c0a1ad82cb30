use anyhow::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Json,
    JsonLines,
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Writes one compact JSON document per line.
pub fn write_json_lines<T: Serialize, W: Write>(out: &mut W, rows: &[T]) -> Result<()> {
    for row in rows {
        serde_json::to_writer(&mut *out, row)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn print_rows<T: Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::JsonLines => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_json_lines(&mut lock, rows)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_lines_one_row_per_line() {
        let rows = vec![json!({"sub_id": "1"}), json!({"sub_id": "2"})];
        let mut buf = Vec::new();
        write_json_lines(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"sub_id\":\"1\"}\n{\"sub_id\":\"2\"}\n");
    }

    #[test]
    fn json_lines_empty_input_writes_nothing() {
        let rows: Vec<serde_json::Value> = Vec::new();
        let mut buf = Vec::new();
        write_json_lines(&mut buf, &rows).unwrap();
        assert!(buf.is_empty());
    }
}
