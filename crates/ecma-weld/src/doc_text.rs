//! Doc comment body formatting
//!
//! Host descriptions are free-form text with a small BBCode-like markup.
//! They become the body lines of a `/** ... */` block: every non-blank line
//! trimmed, indented and ended with two spaces so markdown keeps the line
//! break, then the inline markup rewritten to markdown.

/// Indent used for class-level doc comment bodies
pub const CLASS_DOC_INDENT: &str = "\t ";

/// Indent used for member-level doc comment bodies
pub const MEMBER_DOC_INDENT: &str = "\t\t ";

/// Default body indent
pub const DEFAULT_DOC_INDENT: &str = "\t";

/// Host markup to markdown
const MARKUP_REPLACEMENTS: &[(&str, &str)] = &[
    ("[codeblock]", "```gdscript"),
    ("[/codeblock]", "```"),
    ("[code]", "`"),
    ("[/code]", "`"),
];

/// Format `source` as doc comment body lines under `indent`
pub fn format_doc_text(source: &str, indent: &str) -> String {
    let mut out = String::new();

    for line in source.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        out.push_str(indent);
        out.push_str(line);
        out.push_str("  \n");
    }

    MARKUP_REPLACEMENTS
        .iter()
        .fold(out, |text, (tag, replacement)| text.replace(tag, replacement))
}

/// Format a class's brief and full descriptions
///
/// The full description is empty when it renders the same as the brief one.
pub fn format_class_descriptions(brief: &str, full: &str) -> (String, String) {
    let brief = format_doc_text(brief, CLASS_DOC_INDENT);
    let full = format_doc_text(full, CLASS_DOC_INDENT);
    if full == brief {
        (brief, String::new())
    } else {
        (brief, full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lines_trimmed_and_indented() {
        assert_eq!(
            format_doc_text("  First line.  \n\tSecond line.", "\t "),
            "\t First line.  \n\t Second line.  \n"
        );
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(format_doc_text("a\n\n   \n\tb\n", "\t"), "\ta  \n\tb  \n");
        assert_eq!(format_doc_text("", "\t"), "");
        assert_eq!(format_doc_text(" \n \n", "\t"), "");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(
            format_doc_text("Call [code]queue_free()[/code] later.", DEFAULT_DOC_INDENT),
            "\tCall `queue_free()` later.  \n"
        );
    }

    #[test]
    fn test_codeblock_at_line_start() {
        let source = "Example:\n[codeblock]\nvar a = 1\n[/codeblock]";
        assert_eq!(
            format_doc_text(source, MEMBER_DOC_INDENT),
            "\t\t Example:  \n\t\t ```gdscript  \n\t\t var a = 1  \n\t\t ```  \n"
        );
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        assert_eq!(format_doc_text("a\r\nb\r\n", "\t"), "\ta  \n\tb  \n");
    }

    #[test]
    fn test_identical_descriptions_suppressed() {
        let (brief, full) = format_class_descriptions("Base class.", "  Base class.\n");
        assert_eq!(brief, "\t Base class.  \n");
        assert_eq!(full, "");
    }

    #[test]
    fn test_distinct_descriptions_kept() {
        let (brief, full) = format_class_descriptions("Short.", "Long text.");
        assert_eq!(brief, "\t Short.  \n");
        assert_eq!(full, "\t Long text.  \n");
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(format_class_descriptions("", ""), (String::new(), String::new()));
    }
}
