//! Whole-word phrase matching over lowercase text.
//!
//! A plain substring search finds "no" inside "snow" and "lowers" inside
//! "flowers". Every indicator and variable-name lookup in the extractor goes
//! through these helpers instead.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte offsets of every whole-word occurrence of `phrase` in `text`.
pub fn word_matches<'a>(text: &'a str, phrase: &'a str) -> impl Iterator<Item = usize> + 'a {
    text.match_indices(phrase).filter_map(move |(start, matched)| {
        if phrase.is_empty() {
            return None;
        }
        let end = start + matched.len();
        let open = text[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let close = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
        (open && close).then_some(start)
    })
}

pub fn contains_word(text: &str, phrase: &str) -> bool {
    word_matches(text, phrase).next().is_some()
}

/// First phrase of `phrases` (in list order) that occurs in `text`.
pub fn first_present<'p>(text: &str, phrases: &[&'p str]) -> Option<&'p str> {
    phrases.iter().copied().find(|p| contains_word(text, p))
}

pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    first_present(text, phrases).is_some()
}
