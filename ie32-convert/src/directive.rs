//! IE32 assembler directives and their IE64 spellings

use std::fmt;

/// Directives that only change keyword: (IE32, IE64)
const RENAMES: &[(&str, &str)] = &[
    (".org", "org"),
    (".word", "dc.l"),
    (".byte", "dc.b"),
    (".space", "ds.b"),
    (".ascii", "dc.b"),
    (".incbin", "incbin"),
];

/// The standard IE32 include and its IE64 replacement
const STANDARD_INCLUDE: (&str, &str) = ("\"ie32.inc\"", "\"ie64.inc\"");

/// A parsed IE32 directive line.
///
/// Arguments are carried as text; nothing is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    Rename { keyword: &'static str, args: &'a str },
    /// `.equ NAME VALUE`; IE64 puts the name first
    Equ { name: &'a str, value: &'a str },
    Include(&'a str),
    /// Unrecognized directive; holds the whole code text
    Unknown(&'a str),
}

impl<'a> Directive<'a> {
    /// Parse a directive from comment-stripped code starting with `.`.
    ///
    /// Keywords match case-insensitively. A recognized keyword without
    /// arguments is treated as unknown.
    pub fn parse(code: &'a str) -> Self {
        let code = code.trim();
        let keyword = code.split_whitespace().next().unwrap_or("");
        let args = code[keyword.len()..].trim();
        let lower = keyword.to_lowercase();

        if args.is_empty() {
            return Directive::Unknown(code);
        }

        if let Some(&(_, ie64)) = RENAMES.iter().find(|(ie32, _)| *ie32 == lower) {
            return Directive::Rename { keyword: ie64, args };
        }

        match lower.as_str() {
            ".equ" => {
                let name = args.split_whitespace().next().unwrap_or(args);
                let value = args[name.len()..].trim();
                Directive::Equ { name, value }
            }
            ".include" => Directive::Include(args),
            _ => Directive::Unknown(code),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Directive::Unknown(_))
    }
}

impl fmt::Display for Directive<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Rename { keyword, args } => write!(f, "{} {}", keyword, args),
            Directive::Equ { name, value } if value.is_empty() => write!(f, "{} equ", name),
            Directive::Equ { name, value } => write!(f, "{} equ {}", name, value),
            Directive::Include(file) => {
                let file = if *file == STANDARD_INCLUDE.0 {
                    STANDARD_INCLUDE.1
                } else {
                    *file
                };
                write!(f, "include {}", file)
            }
            Directive::Unknown(code) => write!(f, "; WARNING: unknown directive: {}", code),
        }
    }
}
