//! Splitting and classifying IE32 source lines

/// What a line of (comment-stripped) IE32 code contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Label,
    Directive,
    Instruction,
}

/// One raw source line broken into indentation, code and trailing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub indent: &'a str,
    pub code: &'a str,
    /// Comment text without the leading `;`, empty if the line has none
    pub comment: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let body = raw.trim_start_matches([' ', '\t']);
        let indent = &raw[..raw.len() - body.len()];
        let (code, comment) = split_comment(raw.trim());
        Self {
            indent,
            code,
            comment,
        }
    }

    pub fn kind(&self) -> LineKind {
        classify_line(self.code)
    }
}

/// Split a line into code and comment.
///
/// The comment starts at the first `;` outside a `'...'` or `"..."` span.
/// The returned comment does not include the `;`.
pub fn split_comment(line: &str) -> (&str, &str) {
    let mut quote: Option<u8> = None;

    for (i, ch) in line.bytes().enumerate() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            b'"' | b'\'' => quote = Some(ch),
            b';' => return (line[..i].trim_end(), line[i + 1..].trim_start()),
            _ => {}
        }
    }

    (line, "")
}

/// Classify the code portion of a line (after comment removal).
pub fn classify_line(code: &str) -> LineKind {
    let trimmed = code.trim();
    let Some(first) = trimmed.split_whitespace().next() else {
        return LineKind::Empty;
    };

    // A label may be followed by more text on the same line
    if trimmed.ends_with(':') || first.ends_with(':') {
        LineKind::Label
    } else if first.starts_with('.') {
        LineKind::Directive
    } else {
        LineKind::Instruction
    }
}
