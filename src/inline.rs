//! Inline substitutions
//!
//! Text inside headings, list items and paragraph lines goes through a fixed
//! sequence of passes. Each pass is a plain `&str -> String` function and sees
//! the output of the previous one.

use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("emphasis pattern is valid"));
static DIGEST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").expect("digest pattern is valid"));
static STRIP_C: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\((.+?)\)\)").expect("strip pattern is valid"));

/// A single named substitution.
#[derive(Clone, Copy)]
pub struct InlinePass {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

impl std::fmt::Debug for InlinePass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlinePass").field("name", &self.name).finish()
    }
}

/// Passes in application order.
pub const PIPELINE: [InlinePass; 4] = [
    InlinePass {
        name: "bold",
        apply: bold,
    },
    InlinePass {
        name: "emphasis",
        apply: emphasis,
    },
    InlinePass {
        name: "digest",
        apply: digest,
    },
    InlinePass {
        name: "strip_c",
        apply: strip_c,
    },
];

/// Run every pass of [`PIPELINE`] over `text`.
pub fn transform(text: &str) -> String {
    PIPELINE
        .iter()
        .fold(text.to_string(), |acc, pass| (pass.apply)(&acc))
}

/// `**x**` becomes `<b>x</b>`.
pub fn bold(text: &str) -> String {
    BOLD.replace_all(text, "<b>${1}</b>").into_owned()
}

/// `__x__` becomes `<em>x</em>`.
pub fn emphasis(text: &str) -> String {
    EMPHASIS.replace_all(text, "<em>${1}</em>").into_owned()
}

/// `[[x]]` becomes the lowercase hex MD5 of `x`.
pub fn digest(text: &str) -> String {
    DIGEST
        .replace_all(text, |caps: &Captures| md5_hex(&caps[1]))
        .into_owned()
}

/// `((x))` becomes `x` with every `c` and `C` removed.
pub fn strip_c(text: &str) -> String {
    STRIP_C
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .chars()
                .filter(|c| !c.eq_ignore_ascii_case(&'c'))
                .collect::<String>()
        })
        .into_owned()
}

fn md5_hex(content: &str) -> String {
    format!("{:x}", Md5::digest(content.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order() {
        let names: Vec<_> = PIPELINE.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["bold", "emphasis", "digest", "strip_c"]);
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(bold("**a** and **b**"), "<b>a</b> and <b>b</b>");
        assert_eq!(bold("**unterminated"), "**unterminated");
        assert_eq!(bold("****"), "****");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(emphasis("__a__ __b__"), "<em>a</em> <em>b</em>");
        assert_eq!(emphasis("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_bold_then_emphasis() {
        assert_eq!(transform("**a** __b__"), "<b>a</b> <em>b</em>");
        assert_eq!(transform("**__both__**"), "<b><em>both</em></b>");
    }

    #[test]
    fn test_digest() {
        assert_eq!(digest("[[abc]]"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(
            digest("id: [[Hello]]!"),
            "id: 8b1a9953c4611296a827abf8c47804d7!"
        );
        assert_eq!(digest("[[]]"), "[[]]");
    }

    #[test]
    fn test_digest_sees_bold_output() {
        // the bold pass runs first, so the digest covers the tags
        assert_eq!(transform("[[**x**]]"), md5_hex("<b>x</b>"));
    }

    #[test]
    fn test_strip_c() {
        assert_eq!(strip_c("((Cacao))"), "aao");
        assert_eq!(strip_c("cc ((Chicago)) cc"), "cc hiago cc");
        assert_eq!(strip_c("((no match)"), "((no match)");
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(transform("((abc)) then ((cde))"), "ab then de");
    }

    #[test]
    fn test_plain_text_is_fixed_point() {
        let text = "nothing special here (really) [ok] _x_ *y*";
        let once = transform(text);
        assert_eq!(once, text);
        assert_eq!(transform(&once), once);
    }
}
