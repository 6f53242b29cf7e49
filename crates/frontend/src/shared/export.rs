/// Универсальный модуль для экспорта данных в CSV формат
///
/// Tables are read back from the live DOM so the file matches exactly what
/// the operator sees, including badge-rendered cells; chart series are
/// exported from their in-memory payloads.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Every field is quoted; embedded quotes are doubled.
pub fn csv_quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Assemble the CSV text from a header row plus data rows.
pub fn csv_content(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| csv_quote(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|cell| csv_quote(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Header text without the sort indicator glyph the list views append.
pub fn strip_sort_indicator(text: &str) -> String {
    text.trim_end_matches(|c| matches!(c, '▲' | '▼' | '⇅' | ' '))
        .trim()
        .to_string()
}

/// Visible text of a cell; badge cells contribute the badge text only.
fn cell_text(cell: &web_sys::Element) -> String {
    if let Ok(Some(badge)) = cell.query_selector(".badge") {
        return badge.text_content().unwrap_or_default().trim().to_string();
    }
    cell.text_content().unwrap_or_default().trim().to_string()
}

/// Rebuild header + rows from a rendered table.
fn read_table(table_id: &str) -> Result<(Vec<String>, Vec<Vec<String>>), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document object")?;
    let table = document
        .get_element_by_id(table_id)
        .ok_or_else(|| format!("Table '{}' not found", table_id))?;

    let header_cells = table
        .query_selector_all("thead th")
        .map_err(|_| "Failed to query table headers")?;
    let mut headers = Vec::new();
    for i in 0..header_cells.length() {
        if let Some(th) = header_cells
            .get(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        {
            headers.push(strip_sort_indicator(
                &th.text_content().unwrap_or_default(),
            ));
        }
    }

    let body_rows = table
        .query_selector_all("tbody tr")
        .map_err(|_| "Failed to query table rows")?;
    let mut rows = Vec::new();
    for i in 0..body_rows.length() {
        let Some(tr) = body_rows
            .get(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Ok(cells) = tr.query_selector_all("td") else {
            continue;
        };
        let mut row = Vec::new();
        for j in 0..cells.length() {
            if let Some(td) = cells
                .get(j)
                .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
            {
                row.push(cell_text(&td));
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok((headers, rows))
}

/// Export a rendered table to `{table_type}-report.csv`.
pub fn export_table(table_id: &str, table_type: &str) -> Result<(), String> {
    let (headers, rows) = read_table(table_id)?;
    if rows.is_empty() {
        return Err("No data to export".to_string());
    }
    download_csv(
        &csv_content(&headers, &rows),
        &format!("{}-report.csv", table_type),
    )
}

/// Export in-memory rows under an explicit file name.
pub fn export_rows(headers: &[&str], rows: &[Vec<String>], file_name: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("No data to export".to_string());
    }
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    download_csv(&csv_content(&headers, rows), file_name)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Same-origin download via an object URL and a synthetic anchor click.
fn download_csv(content: &str, file_name: &str) -> Result<(), String> {
    let blob = create_csv_blob(content)?;

    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_quoted() {
        let content = csv_content(
            &["Date".to_string(), "Type".to_string()],
            &[vec!["2026-03-01".to_string(), "IN".to_string()]],
        );
        assert_eq!(content, "\"Date\",\"Type\"\n\"2026-03-01\",\"IN\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(csv_quote("2\" bolt"), "\"2\"\" bolt\"");
        assert_eq!(csv_quote("plain"), "\"plain\"");
    }

    #[test]
    fn commas_and_newlines_stay_inside_the_quotes() {
        let content = csv_content(
            &["Description".to_string()],
            &[vec!["bolt, hex\nM6".to_string()]],
        );
        assert_eq!(content, "\"Description\"\n\"bolt, hex\nM6\"");
    }

    #[test]
    fn sort_indicator_is_stripped_from_headers() {
        assert_eq!(strip_sort_indicator("Quantity ▲"), "Quantity");
        assert_eq!(strip_sort_indicator("Quantity ▼"), "Quantity");
        assert_eq!(strip_sort_indicator("Part Number ⇅"), "Part Number");
        assert_eq!(strip_sort_indicator("Actions"), "Actions");
    }
}
