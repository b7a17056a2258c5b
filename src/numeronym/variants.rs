// Exhaustive enumeration of every abbreviation a single token admits.

/// Enumerate every numeronym variant of `token`.
///
/// A variant keeps a non-empty prefix and a non-empty suffix and replaces the
/// interior with its length: for each kept-prefix length `p` (`1 ≤ p ≤ n−2`)
/// and kept-suffix start `s` (`p+1 ≤ s ≤ n−1`, both counted in chars), the
/// variant is the prefix, the decimal digits of `s − p`, then the suffix.
/// The hidden interior is never empty under these bounds.
///
/// Variants come back ordered by prefix length ascending, then suffix start
/// ascending; callers may rely on that ordering. Distinct `(p, s)` choices
/// that happen to render the same string are all kept, so the result can
/// contain duplicates. Tokens shorter than three characters admit no variant
/// and produce an empty vector; a token of length `n ≥ 3` produces exactly
/// `(n−1)(n−2)/2` entries.
///
/// ```
/// use n7m::numeronym::all_numeronyms;
///
/// assert_eq!(all_numeronyms("abcd"), ["a1cd", "a2d", "ab1d"]);
/// assert!(all_numeronyms("localization").contains(&"l10n".to_string()));
/// ```
pub fn all_numeronyms(token: &str) -> Vec<String> {
    // Byte offset of every char boundary, so prefix/suffix slicing stays on
    // char boundaries while p and s count scalar values.
    let boundaries: Vec<usize> = token
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(token.len()))
        .collect();
    let n = boundaries.len() - 1;

    if n < 3 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity((n - 1) * (n - 2) / 2);
    for p in 1..=n - 2 {
        for s in p + 1..=n - 1 {
            let hidden = s - p;
            let mut variant = String::with_capacity(token.len());
            variant.push_str(&token[..boundaries[p]]);
            variant.push_str(&hidden.to_string());
            variant.push_str(&token[boundaries[s]..]);
            result.push(variant);
        }
    }
    result
}
