//! HTML table export adapter.
//!
//! Renders the ranked result as a standalone `<table>` fragment suitable for
//! embedding in an email body or a results page.

use crate::domain::topsis::RankedResult;
use crate::ports::{ExportError, ExportFormat, ResultExporter};

const TABLE_STYLE: &str =
    "border-collapse: collapse; font-family: Arial, sans-serif; width: 100%;";
const HEAD_ROW_STYLE: &str = "background-color: #4f46e5; color: white;";
const HEAD_CELL_STYLE: &str = "padding: 10px; text-align: left;";
const CELL_STYLE: &str = "padding: 8px; border: 1px solid #e5e7eb;";
const EVEN_ROW_BG: &str = "#f9fafb";
const ODD_ROW_BG: &str = "#ffffff";

/// HTML table exporter.
///
/// Cell text is escaped. With inline styles enabled (the default) rows
/// alternate background colour and the rank cell is bold.
#[derive(Debug, Clone)]
pub struct HtmlTableExporter {
    inline_styles: bool,
}

impl HtmlTableExporter {
    /// Create an exporter with inline styling.
    pub fn new() -> Self {
        Self {
            inline_styles: true,
        }
    }

    /// Emit bare markup without `style` attributes.
    pub fn without_inline_styles(mut self) -> Self {
        self.inline_styles = false;
        self
    }

    fn style(&self, css: &str) -> String {
        if self.inline_styles {
            format!(" style=\"{}\"", css)
        } else {
            String::new()
        }
    }
}

impl Default for HtmlTableExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultExporter for HtmlTableExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Html
    }

    fn render(&self, result: &RankedResult) -> Result<String, ExportError> {
        let mut html = if self.inline_styles {
            format!(
                "<table border=\"1\" cellpadding=\"8\" cellspacing=\"0\"{}>",
                self.style(TABLE_STYLE)
            )
        } else {
            "<table>".to_string()
        };

        html.push_str(&format!("<thead><tr{}>", self.style(HEAD_ROW_STYLE)));
        for header in result.header_row() {
            html.push_str(&format!(
                "<th{}>{}</th>",
                self.style(HEAD_CELL_STYLE),
                html_escape(header)
            ));
        }
        html.push_str("</tr></thead><tbody>");

        let cell_style = self.style(CELL_STYLE);
        for (index, row) in result.rows.iter().enumerate() {
            let bg = if index % 2 == 0 { EVEN_ROW_BG } else { ODD_ROW_BG };
            html.push_str(&format!(
                "<tr{}>",
                self.style(&format!("background-color: {};", bg))
            ));

            for cell in &row.cells {
                html.push_str(&format!("<td{}>{}</td>", cell_style, html_escape(cell)));
            }
            html.push_str(&format!(
                "<td{}>{}</td>",
                cell_style,
                html_escape(&row.score_display)
            ));
            html.push_str(&format!(
                "<td{}>{}</td>",
                self.style(&format!("{} font-weight: bold;", CELL_STYLE)),
                row.rank
            ));
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        Ok(html)
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{validate_and_rank, RawTable};

    fn sample_result() -> RankedResult {
        validate_and_rank(
            &RawTable::from_rows(vec![
                vec!["Name", "C1", "C2"],
                vec!["A", "1", "1"],
                vec!["B", "3", "3"],
            ]),
            "1,1",
            "+,+",
        )
        .unwrap()
    }

    #[test]
    fn bare_markup_has_header_and_rows() {
        let html = HtmlTableExporter::new()
            .without_inline_styles()
            .render(&sample_result())
            .unwrap();

        assert_eq!(
            html,
            "<table><thead><tr><th>Name</th><th>C1</th><th>C2</th>\
             <th>Topsis Score</th><th>Rank</th></tr></thead><tbody>\
             <tr><td>A</td><td>1</td><td>1</td><td>0.0000</td><td>2</td></tr>\
             <tr><td>B</td><td>3</td><td>3</td><td>1.0000</td><td>1</td></tr>\
             </tbody></table>"
        );
    }

    #[test]
    fn styled_rows_alternate_background() {
        let html = HtmlTableExporter::new().render(&sample_result()).unwrap();
        assert!(html.contains("background-color: #4f46e5"));
        assert!(html.contains("<tr style=\"background-color: #f9fafb;\">"));
        assert!(html.contains("<tr style=\"background-color: #ffffff;\">"));
        assert!(html.contains("font-weight: bold;\">1</td>"));
    }

    #[test]
    fn cells_are_escaped() {
        let result = validate_and_rank(
            &RawTable::from_rows(vec![
                vec!["<Name>", "C1", "C2"],
                vec!["R&D", "1", "2"],
            ]),
            "1,1",
            "+,+",
        )
        .unwrap();

        let html = HtmlTableExporter::new()
            .without_inline_styles()
            .render(&result)
            .unwrap();
        assert!(html.contains("<th>&lt;Name&gt;</th>"));
        assert!(html.contains("<td>R&amp;D</td>"));
    }

    #[test]
    fn export_names_the_download() {
        let doc = HtmlTableExporter::new().export(&sample_result()).unwrap();
        assert_eq!(doc.filename, "topsis_results.html");
        assert_eq!(doc.content_type, "text/html; charset=utf-8");
    }

    #[test]
    fn html_escape_escapes_special_chars() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    }
}
