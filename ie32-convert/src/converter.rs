//! Line-by-line conversion session

use crate::directive::Directive;
use crate::error::ConvertError;
use crate::lower::Lowerer;
use crate::source::{LineKind, SourceLine};
use ie64_codegen::{emit_instructions, AsmInst, Size};
use ie_common::{Diagnostic, ErrorReporter, SourceLocation};
use log::{debug, trace, warn};

/// Banner placed at the top of converted files
pub const HEADER: &str = "; Converted from IE32 by ie32to64";

/// Configuration fixed for the lifetime of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterOptions {
    pub size: Size,
    pub emit_header: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            size: Size::Long,
            emit_header: true,
        }
    }
}

/// Converts one IE32 source file to IE64.
///
/// Conversion never fails as a whole. Instructions that cannot be converted
/// are replaced by an `; ERROR:` annotation followed by the source code,
/// and counted; the caller reads the count afterwards to decide pass/fail.
pub struct Converter {
    options: ConverterOptions,
    lowerer: Lowerer,
    reporter: ErrorReporter,
    filename: String,
    line_number: u32,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        Self {
            options,
            lowerer: Lowerer::new(options.size),
            reporter: ErrorReporter::new(),
            filename: "<input>".to_string(),
            line_number: 0,
        }
    }

    /// Name used in diagnostics
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn error_count(&self) -> usize {
        self.reporter.error_count()
    }

    pub fn warning_count(&self) -> usize {
        self.reporter.warning_count()
    }

    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    /// Convert a whole file's contents, returning the newline-joined result.
    pub fn convert_source(&mut self, input: &str) -> String {
        debug!(
            "converting {} (size {}, header {})",
            self.filename, self.options.size, self.options.emit_header
        );
        self.line_number = 0;

        let mut output = Vec::new();
        if self.options.emit_header {
            output.push(HEADER.to_string());
            output.push(String::new());
        }

        for line in input.split('\n') {
            output.extend(self.convert_line(line));
        }

        debug!("finished {}: {}", self.filename, self.reporter.summary());
        output.join("\n")
    }

    /// Convert one raw source line into one or more output lines.
    pub fn convert_line(&mut self, raw: &str) -> Vec<String> {
        self.line_number += 1;

        // Blank and comment-only lines are kept verbatim
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            return vec![raw.to_string()];
        }

        let line = SourceLine::parse(raw);
        let comment = if line.comment.is_empty() {
            String::new()
        } else {
            format!("    ; {}", line.comment)
        };

        let kind = line.kind();
        trace!("line {}: {:?} {:?}", self.line_number, kind, line.code);

        let mut lines = match kind {
            LineKind::Empty => vec![String::new()],
            LineKind::Label => vec![format!("{}{}", line.indent, line.code)],
            LineKind::Directive => vec![format!("{}{}", line.indent, self.convert_directive(line.code))],
            LineKind::Instruction => match self.lowerer.lower(line.code) {
                Ok(insts) => {
                    if insts.len() > 1 {
                        debug!(
                            "line {}: {:?} expanded to {} instructions",
                            self.line_number,
                            line.code,
                            insts.len()
                        );
                    }
                    emit_instructions(line.indent, &insts)
                }
                Err(err) => self.report_error(line.indent, line.code, err),
            },
        };

        // The comment goes on the first line of the expansion
        if let Some(first) = lines.first_mut() {
            first.push_str(&comment);
        }
        lines
    }

    fn convert_directive(&mut self, code: &str) -> String {
        let directive = Directive::parse(code);
        if !directive.is_known() {
            warn!("{}:{}: unknown directive: {}", self.filename, self.line_number, code);
            self.reporter.warning(Diagnostic::warning(
                format!("unknown directive: {}", code),
                self.location(),
            ));
        }
        directive.to_string()
    }

    /// Count the error and produce its two-line annotation.
    fn report_error(&mut self, indent: &str, code: &str, err: ConvertError) -> Vec<String> {
        warn!("{}:{}: {}", self.filename, self.line_number, err);
        self.reporter
            .error(Diagnostic::error(err.to_string(), self.location()).with_note(code.to_string()));

        emit_instructions(
            indent,
            &[
                AsmInst::Comment(format!("ERROR: {}", err)),
                AsmInst::Comment(code.to_string()),
            ],
        )
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::new(&self.filename, self.line_number)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterOptions::default())
    }
}
