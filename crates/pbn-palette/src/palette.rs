use core::fmt;

use pbn_core::Color;

use crate::PaletteError;

/// What gets printed inside a region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Number(u32),
    Name(String),
}

impl Label {
    /// Accepts `[A-Za-z0-9_]+`. All-digit tags that fit a `u32` become numbers.
    pub fn parse(tag: &str) -> Result<Self, PaletteError> {
        if tag.is_empty() || !tag.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(PaletteError::InvalidLabel(tag.to_owned()));
        }

        // Leading zeros would not survive a round trip through u32.
        let numeric = tag.bytes().all(|b| b.is_ascii_digit()) && (tag == "0" || !tag.starts_with('0'));
        if numeric && let Ok(n) = tag.parse::<u32>() {
            return Ok(Self::Number(n));
        }

        Ok(Self::Name(tag.to_owned()))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: Color,
    pub label: Label,
}

impl PaletteEntry {
    /// Parses one `RRGGBB TAG` line.
    pub fn parse(line: &str) -> Result<Self, PaletteError> {
        let mut fields = line.split_whitespace();
        let (Some(hex), Some(tag), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(PaletteError::Malformed(line.trim().to_owned()));
        };

        let color = Color::from_hex(hex).ok_or_else(|| PaletteError::InvalidColor(hex.to_owned()))?;
        let label = Label::parse(tag)?;

        Ok(Self { color, label })
    }
}

/// Ordered color-to-label table with exact RGB lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Builds a palette; a repeated color keeps its first entry.
    pub fn from_entries(entries: impl IntoIterator<Item = PaletteEntry>) -> Self {
        let mut palette = Self::default();
        for entry in entries {
            palette.insert(entry);
        }
        palette
    }

    /// Parses one entry per line: six hex digits (optionally `#`-prefixed),
    /// whitespace, then the tag. Blank lines are ignored, malformed lines
    /// are skipped with a warning.
    pub fn parse(src: &str) -> Result<Self, PaletteError> {
        let mut palette = Self::default();
        let mut skipped = 0usize;

        for (lineno, line) in src.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match PaletteEntry::parse(line) {
                Ok(entry) => palette.insert(entry),
                Err(err) => {
                    skipped += 1;
                    tracing::warn!(line = lineno + 1, %err, "skipping palette line");
                }
            }
        }

        if palette.is_empty() {
            return Err(PaletteError::Empty {
                skipped_lines: skipped,
            });
        }

        tracing::debug!(entries = palette.len(), skipped, "palette parsed");
        Ok(palette)
    }

    pub fn lookup(&self, color: Color) -> Option<&Label> {
        self.entries
            .iter()
            .find(|e| e.color == color)
            .map(|e| &e.label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }

    fn insert(&mut self, entry: PaletteEntry) {
        if let Some(existing) = self.lookup(entry.color) {
            tracing::warn!(
                color = %entry.color,
                kept = %existing,
                dropped = %entry.label,
                "duplicate palette color"
            );
            return;
        }
        if let Label::Number(n) = entry.label
            && let Some(other) = self.iter().find(|e| e.label == entry.label)
        {
            tracing::warn!(
                number = n,
                color = %entry.color,
                other = %other.color,
                "palette number reused for another color"
            );
        }
        self.entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use pbn_core::Color;

    use super::{Label, Palette, PaletteEntry};
    use crate::PaletteError;

    #[test]
    fn labels_parse_as_numbers_or_names() {
        assert_eq!(Label::parse("12"), Ok(Label::Number(12)));
        assert_eq!(Label::parse("0"), Ok(Label::Number(0)));
        assert_eq!(Label::parse("007"), Ok(Label::Name("007".into())));
        assert_eq!(Label::parse("sky_blue"), Ok(Label::Name("sky_blue".into())));
        assert_eq!(
            Label::parse("99999999999"),
            Ok(Label::Name("99999999999".into()))
        );
        assert!(Label::parse("").is_err());
        assert!(Label::parse("a-b").is_err());

        assert_eq!(Label::parse("007").expect("valid").to_string(), "007");
        assert_eq!(Label::Number(4).to_string(), "4");
    }

    #[test]
    fn entry_line_format() {
        let e = PaletteEntry::parse("ff8000\t3").expect("valid line");
        assert_eq!(e.color, Color::new(255, 128, 0));
        assert_eq!(e.label, Label::Number(3));

        let e = PaletteEntry::parse("#0000FF  blue ").expect("valid line");
        assert_eq!(e.color, Color::new(0, 0, 255));
        assert_eq!(e.label, Label::Name("blue".into()));

        assert_eq!(
            PaletteEntry::parse("zz0000 red"),
            Err(PaletteError::InvalidColor("zz0000".into()))
        );
        assert_eq!(
            PaletteEntry::parse("ff0000"),
            Err(PaletteError::Malformed("ff0000".into()))
        );
        assert!(PaletteEntry::parse("ff0000 red extra").is_err());
    }

    #[test]
    fn parse_skips_bad_lines_and_keeps_first_duplicate() {
        let src = "ff0000 1\n\nnot a line\n00ff00 2\nff0000 9\n0000ff 3\n";
        let palette = Palette::parse(src).expect("valid palette");

        assert_eq!(palette.len(), 3);
        assert_eq!(
            palette.lookup(Color::new(255, 0, 0)),
            Some(&Label::Number(1))
        );
        assert_eq!(
            palette.lookup(Color::new(0, 0, 255)),
            Some(&Label::Number(3))
        );
        assert_eq!(palette.lookup(Color::new(1, 2, 3)), None);

        let order: Vec<_> = palette.iter().map(|e| e.label.to_string()).collect();
        assert_eq!(order, ["1", "2", "3"]);
    }

    #[test]
    fn palette_without_entries_is_an_error() {
        assert_eq!(
            Palette::parse("\n  \nbogus\n"),
            Err(PaletteError::Empty { skipped_lines: 1 })
        );
        assert_eq!(
            Palette::parse(""),
            Err(PaletteError::Empty { skipped_lines: 0 })
        );
    }

    #[test]
    fn repeated_number_on_another_color_is_kept() {
        let palette = Palette::parse("ff0000 4\n00ff00 4\n").expect("valid palette");

        assert_eq!(palette.len(), 2);
        assert_eq!(
            palette.lookup(Color::new(0, 255, 0)),
            Some(&Label::Number(4))
        );
    }

    #[test]
    fn lookup_is_exact() {
        let palette = Palette::from_entries([PaletteEntry {
            color: Color::new(10, 20, 30),
            label: Label::Name("slate".into()),
        }]);

        assert!(palette.lookup(Color::new(10, 20, 30)).is_some());
        assert!(palette.lookup(Color::new(10, 20, 31)).is_none());
    }
}
