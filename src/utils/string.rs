//! String manipulation utilities for TextF
//!
//! This module provides the core string helper functions: reversal,
//! palindrome detection, ellipsis truncation, word splitting, title-casing,
//! and vowel counting. Every function is a single pass over its input and
//! keeps no state between calls.

/// Reverse a string character by character
///
/// Reversal is per `char` (Unicode scalar value), not per grapheme cluster,
/// so combining marks may end up separated from their base character.
/// `None` propagates through unchanged.
///
/// # Arguments
/// * `input` - String to reverse, or `None`
///
/// # Example
/// ```rust,ignore
/// let reversed = reverse(Some("hello"));
/// assert_eq!(reversed.as_deref(), Some("olleh"));
/// assert_eq!(reverse(None), None);
/// ```
pub fn reverse(input: Option<&str>) -> Option<String> {
    input.map(|s| s.chars().rev().collect())
}

/// Check whether a string reads the same forwards and backwards
///
/// The text is lower-cased and every whitespace character is removed before
/// comparison; runs of whitespace collapse to nothing, not to a space.
/// Punctuation is NOT stripped, so `"racecar!"` is not a palindrome while
/// `"Race car"` is. Returns `false` for `None` and for the empty string.
///
/// Whitespace-only input cleans down to the empty string, which equals its
/// own reversal and therefore reads as a palindrome.
///
/// # Arguments
/// * `text` - Text to check, or `None`
///
/// # Example
/// ```rust,ignore
/// assert!(is_palindrome(Some("Race car")));
/// assert!(!is_palindrome(Some("hello")));
/// assert!(!is_palindrome(None));
/// ```
pub fn is_palindrome(text: Option<&str>) -> bool {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return false,
    };

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let reversed: String = cleaned.chars().rev().collect();

    log::trace!(
        "palindrome check over {} cleaned chars",
        cleaned.chars().count()
    );

    cleaned == reversed
}

/// Truncate a string to a maximum character count with ellipsis
///
/// If `input` has more than `max_length` characters, returns the first
/// `max_length` characters followed by `"..."`; otherwise returns the input
/// unchanged. The ellipsis is appended beyond the limit, so a truncated
/// result holds up to `max_length + 3` characters. A `max_length` of zero
/// on non-empty input yields just `"..."`.
///
/// # Arguments
/// * `input` - String to truncate
/// * `max_length` - Maximum number of characters to keep
///
/// # Example
/// ```rust,ignore
/// assert_eq!(truncate("hello", 10), "hello");
/// assert_eq!(truncate("hello world", 5), "hello...");
/// ```
pub fn truncate(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        return input.to_string();
    }

    log::trace!("truncating input to {} chars", max_length);

    let head: String = input.chars().take(max_length).collect();
    format!("{}...", head)
}

/// Split text into words on runs of whitespace
///
/// Runs of one-or-more whitespace characters act as a single separator;
/// leading and trailing runs contribute no tokens. Returned tokens are
/// non-empty and keep their original left-to-right order. `None` yields an
/// empty vector.
///
/// # Arguments
/// * `text` - Text to split, or `None`
///
/// # Example
/// ```rust,ignore
/// let words = split_into_words(Some("  a  b "));
/// assert_eq!(words, vec!["a", "b"]);
/// assert!(split_into_words(None).is_empty());
/// ```
pub fn split_into_words(text: Option<&str>) -> Vec<String> {
    match text {
        Some(t) => t.split_whitespace().map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Capitalize the first letter of each space-separated word
///
/// Splits on the single literal space character only — tabs and newlines
/// are not word boundaries here, unlike [`split_into_words`]. Each word's
/// first character is uppercased and the remainder lowercased, then the
/// words are rejoined with single spaces; runs of spaces in the input
/// therefore never reach the output. `None` and the empty string pass
/// through unchanged.
///
/// # Arguments
/// * `input` - String to capitalize, or `None`
///
/// # Example
/// ```rust,ignore
/// let title = capitalize_words(Some("hello world"));
/// assert_eq!(title.as_deref(), Some("Hello World"));
/// assert_eq!(capitalize_words(None), None);
/// ```
pub fn capitalize_words(input: Option<&str>) -> Option<String> {
    let input = input?;
    if input.is_empty() {
        return Some(String::new());
    }

    let result = input
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<String>>()
        .join(" ");

    Some(result)
}

/// Count the ASCII vowels in a string
///
/// Counts characters that are one of `a`, `e`, `i`, `o`, `u` in either
/// case. Accented vowels and non-Latin scripts never match.
///
/// # Arguments
/// * `text` - Text to scan
///
/// # Example
/// ```rust,ignore
/// assert_eq!(count_vowels("Hello World"), 3);
/// assert_eq!(count_vowels(""), 0);
/// ```
pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}
