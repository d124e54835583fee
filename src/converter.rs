//! Block-level conversion
//!
//! A single forward scan over the input. At most one block (a paragraph being
//! accumulated, or a list) is open at any time; it is closed as soon as a line
//! of a different kind arrives, and at end of input.

use std::mem;

use crate::classifier::{classify_line, LineKind};
use crate::inline;
use crate::report::ConversionStatistics;

const LINE_BREAK: &str = "<br/>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `* item`, rendered as `<ol>`
    Ordered,
    /// `- item`, rendered as `<ul>`
    Unordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "<ol>",
            ListKind::Unordered => "<ul>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>",
            ListKind::Unordered => "</ul>",
        }
    }

    fn feature(self) -> &'static str {
        match self {
            ListKind::Ordered => "ordered_list",
            ListKind::Unordered => "unordered_list",
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
enum BlockState {
    #[default]
    Idle,
    /// Raw lines awaiting the inline pass
    InParagraph(Vec<String>),
    InList(ListKind),
}

/// Output of one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub lines: Vec<String>,
    pub statistics: ConversionStatistics,
}

#[derive(Debug, Default)]
struct LineTransformer {
    state: BlockState,
    output: Vec<String>,
    statistics: ConversionStatistics,
}

impl LineTransformer {
    fn feed(&mut self, line: &str) {
        self.statistics.total_lines += 1;
        let kind = classify_line(line);
        log::trace!("line {}: {:?}", self.statistics.total_lines, kind);

        match kind {
            LineKind::Blank => self.close_block(),
            LineKind::OrderedItem(content) => self.list_item(ListKind::Ordered, content),
            LineKind::UnorderedItem(content) => self.list_item(ListKind::Unordered, content),
            LineKind::Heading { level, content } => {
                self.close_block();
                self.statistics.increment_feature("heading");
                self.output.push(format!(
                    "<h{level}>{}</h{level}>",
                    inline::transform(content)
                ));
            }
            LineKind::PlainText(text) => match &mut self.state {
                BlockState::InParagraph(buffer) => buffer.push(text.to_string()),
                _ => {
                    self.close_block();
                    log::debug!("open paragraph");
                    self.state = BlockState::InParagraph(vec![text.to_string()]);
                }
            },
        }
    }

    fn list_item(&mut self, kind: ListKind, content: &str) {
        if self.state != BlockState::InList(kind) {
            self.close_block();
            log::debug!("open {}", kind.feature());
            self.statistics.increment_feature(kind.feature());
            self.output.push(kind.open_tag().to_string());
            self.state = BlockState::InList(kind);
        }
        self.statistics.increment_feature("list_item");
        self.output.push(format!("<li>{}</li>", inline::transform(content)));
    }

    fn close_block(&mut self) {
        match mem::take(&mut self.state) {
            BlockState::Idle => {}
            BlockState::InParagraph(buffer) => {
                log::debug!("flush paragraph of {} line(s)", buffer.len());
                self.statistics.increment_feature("paragraph");
                self.output.push("<p>".to_string());
                let last = buffer.len() - 1;
                for (i, text) in buffer.iter().enumerate() {
                    let mut line = inline::transform(text);
                    if i < last {
                        line.push_str(LINE_BREAK);
                    }
                    self.output.push(line);
                }
                self.output.push("</p>".to_string());
            }
            BlockState::InList(kind) => {
                log::debug!("close {}", kind.feature());
                self.output.push(kind.close_tag().to_string());
            }
        }
    }

    fn finish(mut self) -> Conversion {
        self.close_block();
        self.statistics.output_lines = self.output.len();
        Conversion {
            lines: self.output,
            statistics: self.statistics,
        }
    }
}

/// Convert Markdown lines to HTML lines, collecting statistics on the way.
///
/// Lines may still carry their terminators; trailing whitespace is ignored.
pub fn convert<I, S>(lines: I) -> Conversion
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut transformer = LineTransformer::default();
    for line in lines {
        transformer.feed(line.as_ref());
    }
    transformer.finish()
}

/// Convert Markdown lines to HTML lines.
pub fn convert_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    convert(lines).lines
}

/// Convert a whole Markdown document held in memory.
pub fn convert_str(text: &str) -> Vec<String> {
    convert_lines(text.lines())
}
