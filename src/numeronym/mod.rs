// Numeronym conversion: abbreviate letter-or-digit runs by replacing their
// interior with its count, leaving everything between the runs untouched.

pub mod tokenizer;
pub mod variants;

// Re-export core types
pub use tokenizer::{is_token_char, segments, Segment, Segments, Token};
pub use variants::all_numeronyms;

/// Convert a single token to its numeronym form.
///
/// Tokens of three or fewer characters come back unchanged; longer tokens
/// collapse to first character + decimal count of the hidden interior + last
/// character. Lengths are counted in Unicode scalar values (see
/// [`is_token_char`] for the classification this crate pins).
///
/// ```
/// use n7m::numeronym::token_to_numeronym;
///
/// assert_eq!(token_to_numeronym("internationalization"), "i18n");
/// assert_eq!(token_to_numeronym("cat"), "cat");
/// assert_eq!(token_to_numeronym("abcd"), "a2d");
/// ```
pub fn token_to_numeronym(token: &str) -> String {
    let mut result = String::with_capacity(token.len());
    push_token_numeronym(token, &mut result);
    result
}

/// Convert every token in `text`, copying every separator through verbatim.
///
/// Re-concatenating the converted tokens and untouched separators in order is
/// exactly what this returns, so the output keeps the input's shape: same
/// separator runs, same token ordering, only token content shrinks.
///
/// ```
/// use n7m::numeronym::text_to_numeronym;
///
/// assert_eq!(
///     text_to_numeronym("internationalization and localization"),
///     "i18n and l10n"
/// );
/// ```
pub fn text_to_numeronym(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    text_to_numeronym_into(text, &mut result);
    result
}

/// Convert text into the supplied buffer to avoid allocation.
/// Enables buffer reuse when converting many texts in a loop.
pub fn text_to_numeronym_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for segment in segments(text) {
        match segment {
            Segment::Token(token) => push_token_numeronym(token.text, buffer),
            Segment::Separator(sep) => buffer.push_str(sep),
        }
    }
}

// Append form shared by the owned and buffer-reuse entry points; whole-text
// conversion stays at one output allocation this way.
fn push_token_numeronym(token: &str, out: &mut String) {
    let char_len = token.chars().count();
    if char_len <= 3 {
        out.push_str(token);
        return;
    }

    // char_len >= 4 guarantees a first and a last character
    let mut chars = token.chars();
    if let (Some(first), Some(last)) = (chars.next(), chars.next_back()) {
        out.push(first);
        out.push_str(&(char_len - 2).to_string());
        out.push(last);
    }
}
