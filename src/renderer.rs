use std::io;
use std::io::Write;

use crate::classifier::{classify_line, LineKind};
use crate::converter::{self, Conversion};
use crate::options::RenderOptions;
use crate::report::ConversionStatistics;

const DEFAULT_TITLE: &str = "Document";

pub trait Renderer {
    fn new(options: RenderOptions) -> Self;
    /// Write the HTML for `lines` to `output`, one line per `\n`.
    fn format(&self, lines: &[String], output: &mut dyn Write) -> io::Result<ConversionStatistics>;
}

pub struct HtmlRenderer {
    options: RenderOptions,
}

impl Renderer for HtmlRenderer {
    fn new(options: RenderOptions) -> Self {
        HtmlRenderer { options }
    }

    fn format(&self, lines: &[String], output: &mut dyn Write) -> io::Result<ConversionStatistics> {
        let rendered = self.render(lines);
        for line in &rendered.lines {
            writeln!(output, "{}", line)?;
        }
        Ok(rendered.statistics)
    }
}

impl HtmlRenderer {
    /// Convert `lines` and apply the document wrapper if enabled.
    pub fn render<S: AsRef<str>>(&self, lines: &[S]) -> Conversion {
        let mut conversion = converter::convert(lines);
        if self.options.standalone {
            let title = self.document_title(lines);
            conversion.lines = self.wrap_document(&title, conversion.lines);
            conversion.statistics.output_lines = conversion.lines.len();
        }
        conversion
    }

    fn document_title<S: AsRef<str>>(&self, lines: &[S]) -> String {
        if let Some(title) = &self.options.title {
            return title.clone();
        }
        lines
            .iter()
            .find_map(|line| match classify_line(line.as_ref()) {
                LineKind::Heading { content, .. } => Some(content.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    fn wrap_document(&self, title: &str, body: Vec<String>) -> Vec<String> {
        let mut document = vec![
            "<!DOCTYPE html>".to_string(),
            format!(
                "<html lang=\"{}\">",
                html_escape::encode_double_quoted_attribute(&self.options.lang)
            ),
            "<head>".to_string(),
            "<meta charset=\"utf-8\">".to_string(),
            format!("<title>{}</title>", html_escape::encode_text(title)),
            "</head>".to_string(),
            "<body>".to_string(),
        ];
        document.extend(body);
        document.push("</body>".to_string());
        document.push("</html>".to_string());
        document
    }
}
