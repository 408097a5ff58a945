// ABOUTME: Boundary-aware keyword matching against lowercased food names
// ABOUTME: Shared by the pH reference table and the liquid serving rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Keyword Matching
//!
//! Both inputs are expected lowercased. Two strictness levels:
//!
//! - [`contains_keyword`]: an occurrence must touch a word boundary on at
//!   least one side. "strawberry" matches `berry` and "applesauce" matches
//!   `apple`, while "steamed" does not match `tea` and "chocolate" does not
//!   match `cola`.
//! - [`contains_word`]: an occurrence must be a whole word, optionally
//!   followed by a plural `s` or `es`. "watermelon" does not match `water`.
//!
//! A keyword with an interior space also matches the name with whitespace
//! removed, so "hotchocolate" matches `hot chocolate`.

/// Keyword occurs at a word start or a word end
#[must_use]
pub fn contains_keyword(name: &str, keyword: &str) -> bool {
    occurrences(name, keyword)
        .any(|(start, end)| starts_word(name, start) || ends_word(&name[end..]))
        || contains_compact(name, keyword)
}

/// Keyword occurs as a whole word or its plural
#[must_use]
pub fn contains_word(name: &str, keyword: &str) -> bool {
    occurrences(name, keyword).any(|(start, end)| {
        let rest = &name[end..];
        starts_word(name, start)
            && (ends_word(rest)
                || rest
                    .strip_prefix("es")
                    .or_else(|| rest.strip_prefix('s'))
                    .is_some_and(ends_word))
    }) || contains_compact(name, keyword)
}

fn occurrences<'a>(name: &'a str, keyword: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
    name.match_indices(keyword)
        .filter(|(_, found)| !found.is_empty())
        .map(|(start, found)| (start, start + found.len()))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn starts_word(name: &str, start: usize) -> bool {
    !matches!(name[..start].chars().next_back(), Some(c) if is_word_char(c))
}

fn ends_word(rest: &str) -> bool {
    !matches!(rest.chars().next(), Some(c) if is_word_char(c))
}

fn contains_compact(name: &str, keyword: &str) -> bool {
    let keyword = keyword.trim();
    if !keyword.contains(char::is_whitespace) {
        return false;
    }
    compact(name).contains(&compact(keyword))
}

fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_needs_one_boundary() {
        assert!(contains_keyword("iced green tea", "tea"));
        assert!(contains_keyword("strawberry jam", "berry"));
        assert!(contains_keyword("applesauce", "apple"));
        assert!(!contains_keyword("steamed rice", "tea"));
        assert!(!contains_keyword("milk chocolate", "cola"));
        assert!(!contains_keyword("veggie burger", "egg"));
    }

    #[test]
    fn test_word_needs_both_boundaries() {
        assert!(contains_word("sparkling water", "water"));
        assert!(contains_word("fresh juices", "juice"));
        assert!(contains_word("two peaches", "peach"));
        assert!(!contains_word("watermelon", "water"));
        assert!(!contains_word("beef steak", "tea"));
        assert!(!contains_word("eggplant", "egg"));
    }

    #[test]
    fn test_multi_word_keyword_matches_compact_name() {
        assert!(contains_keyword("hotchocolate", "hot chocolate"));
        assert!(contains_word("nitro coldbrew", "cold brew"));
        assert!(!contains_word("cold", "cold brew"));
        assert!(!contains_keyword("hot dog", "hot chocolate"));
    }
}
