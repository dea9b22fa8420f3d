//! FIGlet: Parser for `flf2a` block fonts.
//!
//! ```text
//! flf2a$ 6 5 16 15 2        <- signature+hardblank, height, baseline,
//! comment line 1               max length, old layout, comment lines
//! comment line 2
//!  $@                       <- ' ' row 1 (end mark '@')
//!  $@
//!  ...
//!  $@@                      <- last row of a character ends with '@@'
//! ```
//!
//! Characters 32..=126 follow in order, `height` lines each. Code-tagged
//! characters after them are ignored.

use super::layout::BlockFont;
use crate::error::{ConfigError, Error};
use std::path::Path;

const SIGNATURE: &str = "flf2a";
const FIRST_CHAR: u32 = 32;
const LAST_CHAR: u32 = 126;

/// A parsed FIGlet font.
#[derive(Clone, PartialEq, Eq)]
pub struct FigletFont {
    height: usize,
    baseline: usize,
    /// `glyphs[ch - 32][row]`, end marks stripped and hardblanks turned into spaces.
    glyphs: Vec<Vec<String>>,
}

impl FigletFont {
    /// Parse a font from the contents of a `.flf` file.
    ///
    /// Characters missing at the end of a truncated file render as empty
    /// fragments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the header is malformed.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let mut lines = source.lines().map(|l| l.trim_end_matches('\r'));
        let header = lines
            .next()
            .ok_or_else(|| ConfigError::Parse("empty font file".into()))?;
        let (hardblank, fields) = parse_header(header)?;

        let height = fields[0];
        let baseline = fields[1];
        let comment_lines = fields[4];
        if height == 0 {
            return Err(ConfigError::Parse("font height must be at least 1".into()));
        }

        let mut lines = lines.skip(comment_lines);
        let mut glyphs = Vec::with_capacity((LAST_CHAR - FIRST_CHAR + 1) as usize);
        'chars: for _ in FIRST_CHAR..=LAST_CHAR {
            let mut rows = Vec::with_capacity(height);
            for _ in 0..height {
                let Some(line) = lines.next() else {
                    break 'chars;
                };
                rows.push(strip_row(line, hardblank));
            }
            glyphs.push(rows);
        }

        log::debug!(
            "parsed figlet font: height {height}, {} characters",
            glyphs.len()
        );
        Ok(Self {
            height,
            baseline,
            glyphs,
        })
    }

    /// Read and parse a `.flf` file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let source = std::fs::read_to_string(path)?;
        Ok(Self::parse(&source)?)
    }

    /// Rows from the top of a character to its baseline.
    #[inline]
    pub const fn baseline(&self) -> usize {
        self.baseline
    }

    /// Number of characters the font defines.
    #[inline]
    pub fn char_count(&self) -> usize {
        self.glyphs.len()
    }
}

impl BlockFont for FigletFont {
    fn height(&self) -> usize {
        self.height
    }

    fn fragment(&self, ch: char, row: usize) -> &str {
        let Some(index) = (ch as u32).checked_sub(FIRST_CHAR) else {
            return "";
        };
        self.glyphs
            .get(index as usize)
            .and_then(|rows| rows.get(row))
            .map_or("", String::as_str)
    }
}

impl std::fmt::Debug for FigletFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FigletFont")
            .field("height", &self.height)
            .field("baseline", &self.baseline)
            .field("chars", &self.glyphs.len())
            .finish()
    }
}

/// Split the header into the hardblank and its first five numeric fields.
fn parse_header(header: &str) -> Result<(char, [usize; 5]), ConfigError> {
    let rest = header
        .strip_prefix(SIGNATURE)
        .ok_or_else(|| ConfigError::Parse(format!("missing {SIGNATURE} signature")))?;
    let mut chars = rest.chars();
    let hardblank = chars
        .next()
        .ok_or_else(|| ConfigError::Parse("missing hardblank".into()))?;

    let mut fields = [0usize; 5];
    let mut tokens = chars.as_str().split_whitespace();
    for (i, field) in fields.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| ConfigError::Parse(format!("header has {i} of 5 fields")))?;
        // Old layout may legitimately be -1.
        *field = if i == 3 {
            usize::try_from(token.parse::<i64>().map_err(|e| ConfigError::Parse(e.to_string()))?)
                .unwrap_or(0)
        } else {
            token
                .parse()
                .map_err(|e| ConfigError::Parse(format!("header field {token:?}: {e}")))?
        };
    }
    Ok((hardblank, fields))
}

/// Strip one or two trailing end marks and render hardblanks as spaces.
fn strip_row(line: &str, hardblank: char) -> String {
    let mut body = line;
    if let Some(mark) = body.chars().last() {
        for _ in 0..2 {
            match body.strip_suffix(mark) {
                Some(rest) => body = rest,
                None => break,
            }
        }
    }
    body.replace(hardblank, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font_source() -> String {
        // Height 2, one comment line, space and '!' defined, rest missing.
        let mut s = String::from("flf2a$ 2 1 8 -1 1\nsample font\n");
        s.push_str("$$@\n$$@@\n");
        s.push_str("|$@\n. @@\n");
        s
    }

    #[test]
    fn test_parse_header_fields() {
        let font = FigletFont::parse(&font_source()).unwrap();
        assert_eq!(font.height(), 2);
        assert_eq!(font.baseline(), 1);
        assert_eq!(font.char_count(), 2);
    }

    #[test]
    fn test_fragments_strip_end_marks_and_hardblanks() {
        let font = FigletFont::parse(&font_source()).unwrap();
        assert_eq!(font.fragment(' ', 0), "  ");
        assert_eq!(font.fragment(' ', 1), "  ");
        assert_eq!(font.fragment('!', 0), "| ");
        assert_eq!(font.fragment('!', 1), ". ");
    }

    #[test]
    fn test_missing_characters_are_empty() {
        let font = FigletFont::parse(&font_source()).unwrap();
        assert_eq!(font.fragment('A', 0), "");
        assert_eq!(font.fragment('\u{7}', 0), "");
        assert_eq!(font.fragment('!', 5), "");
    }

    #[test]
    fn test_width_uses_full_fragments() {
        let font = FigletFont::parse(&font_source()).unwrap();
        assert_eq!(font.width("! !"), 6);
    }

    #[test]
    fn test_parse_rejects_bad_headers() {
        assert!(matches!(FigletFont::parse(""), Err(ConfigError::Parse(_))));
        assert!(matches!(
            FigletFont::parse("tlf2a$ 1 1 1 0 0\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            FigletFont::parse("flf2a$ 1 1\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            FigletFont::parse("flf2a$ 0 0 1 0 0\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            FigletFont::parse("flf2a$ x 0 1 0 0\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_strip_row() {
        assert_eq!(strip_row("ab@@", '$'), "ab");
        assert_eq!(strip_row("ab@", '$'), "ab");
        assert_eq!(strip_row("a$b#", '$'), "a b");
        assert_eq!(strip_row("", '$'), "");
    }

    #[test]
    fn test_from_file_missing() {
        let err = FigletFont::from_file("/definitely/not/here.flf").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
