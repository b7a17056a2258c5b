// Segmentation of text into alternating letter-or-digit runs and separator
// runs. Zero-copy: every segment borrows from the source text, and
// concatenating the segments in order reproduces the source exactly.

/// Returns true for characters that belong to a token.
///
/// Pinned to [`char::is_alphanumeric`]: Unicode letter-or-digit over scalar
/// values, with no locale or grapheme-cluster awareness. Everything else is
/// separator material.
pub fn is_token_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// A maximal run of letter-or-digit characters within a larger text.
///
/// `start`/`end` are the half-open byte span `[start, end)` of the run in the
/// source text; `text` is the matching slice. Conversion rules count length
/// in Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Token length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One alternating piece of a segmented text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Maximal letter-or-digit run, subject to conversion.
    Token(Token<'a>),
    /// Maximal run of everything else, preserved verbatim.
    Separator(&'a str),
}

impl<'a> Segment<'a> {
    /// The underlying slice of the source text.
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Token(token) => token.text,
            Segment::Separator(sep) => sep,
        }
    }

    /// True when this segment is a token run.
    pub fn is_token(&self) -> bool {
        matches!(self, Segment::Token(_))
    }
}

/// Iterator over the alternating token/separator runs of a text.
///
/// Yielded segments cover the whole input with nothing dropped or reordered;
/// two consecutive segments never share a class.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

/// Segment `text` into maximal token and separator runs.
///
/// ```
/// use n7m::numeronym::{segments, Segment};
///
/// let mut runs = segments("AI 2026");
/// assert!(matches!(runs.next(), Some(Segment::Token(t)) if t.text == "AI"));
/// assert!(matches!(runs.next(), Some(Segment::Separator(" "))));
/// assert!(matches!(runs.next(), Some(Segment::Token(t)) if t.text == "2026"));
/// assert!(runs.next().is_none());
/// ```
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let in_token = is_token_char(first);

        // The run ends at the first character whose class flips, or at the
        // end of the remaining input.
        let run_len = chars
            .find(|&(_, c)| is_token_char(c) != in_token)
            .map_or(rest.len(), |(idx, _)| idx);

        let start = self.pos;
        let end = start + run_len;
        self.pos = end;

        let piece = &self.text[start..end];
        Some(if in_token {
            Segment::Token(Token {
                text: piece,
                start,
                end,
            })
        } else {
            Segment::Separator(piece)
        })
    }
}
