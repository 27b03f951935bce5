use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No line of the source described a valid entry.
    Empty { skipped_lines: usize },
    /// Line does not have exactly a color and a tag.
    Malformed(String),
    InvalidColor(String),
    InvalidLabel(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { skipped_lines } => {
                write!(f, "palette has no valid entries ({skipped_lines} lines skipped)")
            }
            Self::Malformed(s) => write!(f, "expected 'RRGGBB TAG', got '{s}'"),
            Self::InvalidColor(s) => write!(f, "invalid palette color '{s}'"),
            Self::InvalidLabel(s) => write!(f, "invalid palette label '{s}'"),
        }
    }
}

impl std::error::Error for PaletteError {}
