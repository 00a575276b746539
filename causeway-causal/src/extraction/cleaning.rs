//! Candidate variable names and kinds.

use causeway_core::models::VariableKind;

use super::intensity::is_qualifier;
use super::phrase::contains_any;

const LEADING_FUNCTION_WORDS: &[&str] = &["when ", "if ", "the "];
const CLAUSE_BOUNDARIES: &[char] = &[',', '.', ':', ';'];

const BINARY_CONTEXT: &[&str] = &[
    "yes", "no", "true", "false", "present", "absent", "exists", "occurs",
];
const CONTINUOUS_NAMES: &[&str] = &[
    "amount",
    "level",
    "rate",
    "degree",
    "temperature",
    "pressure",
    "speed",
    "cost",
    "price",
];
const CATEGORICAL_NAMES: &[&str] = &["type", "kind", "category", "class", "color", "status"];

/// Reduce one side of a split sentence to a variable name.
///
/// Strips leading "when"/"if"/"the", truncates at the first clause boundary,
/// and drops qualifier words ("strongly", "may") at either end. Returns an
/// empty string when fewer than `min_len` characters remain.
pub fn clean_variable_name(text: &str, min_len: usize) -> String {
    let mut name = text.trim();
    for prefix in LEADING_FUNCTION_WORDS {
        name = name.strip_prefix(prefix).unwrap_or(name).trim_start();
    }

    // A boundary in the first position is not a clause end.
    if let Some(idx) = name
        .char_indices()
        .skip(1)
        .find(|(_, c)| CLAUSE_BOUNDARIES.contains(c))
        .map(|(i, _)| i)
    {
        name = &name[..idx];
    }

    let mut words: Vec<&str> = name.split_whitespace().collect();
    while words.first().is_some_and(|w| is_qualifier(w)) {
        words.remove(0);
    }
    while words.last().is_some_and(|w| is_qualifier(w)) {
        words.pop();
    }

    let cleaned = words.join(" ");
    if cleaned.chars().count() < min_len {
        return String::new();
    }
    cleaned
}

/// Infer the value domain of `name` seen in the sentence `context`.
///
/// Binary wording anywhere in the sentence wins; otherwise the name itself
/// decides, defaulting to continuous.
pub fn infer_variable_kind(name: &str, context: &str) -> VariableKind {
    let context = context.to_lowercase();
    let name = name.to_lowercase();

    if contains_any(&context, BINARY_CONTEXT) {
        VariableKind::Binary
    } else if CONTINUOUS_NAMES.iter().any(|w| name.contains(w)) {
        VariableKind::Continuous
    } else if CATEGORICAL_NAMES.iter().any(|w| name.contains(w)) {
        VariableKind::Categorical
    } else {
        VariableKind::Continuous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_function_words() {
        assert_eq!(clean_variable_name("when temperature rises", 3), "temperature rises");
        assert_eq!(clean_variable_name("if the pressure increases", 3), "pressure increases");
        assert_eq!(clean_variable_name("  the soil  ", 3), "soil");
    }

    #[test]
    fn truncates_at_first_clause_boundary() {
        assert_eq!(clean_variable_name("temperature, humidity", 3), "temperature");
        assert_eq!(clean_variable_name(" crop yield. later", 3), "crop yield");
        assert_eq!(clean_variable_name("rain; then mud", 3), "rain");
    }

    #[test]
    fn drops_qualifiers_at_the_edges() {
        assert_eq!(clean_variable_name("exercise strongly ", 3), "exercise");
        assert_eq!(clean_variable_name("coffee may ", 3), "coffee");
    }

    #[test]
    fn too_short_names_are_rejected() {
        assert_eq!(clean_variable_name("ab", 3), "");
        assert_eq!(clean_variable_name("   ", 3), "");
        assert_eq!(clean_variable_name("ab", 2), "ab");
    }

    #[test]
    fn kind_inference() {
        assert_eq!(
            infer_variable_kind("infection", "no infection occurs without exposure"),
            VariableKind::Binary
        );
        assert_eq!(
            infer_variable_kind("interest rate", "interest rate lowers spending"),
            VariableKind::Continuous
        );
        assert_eq!(
            infer_variable_kind("soil type", "soil type affects drainage"),
            VariableKind::Categorical
        );
        assert_eq!(
            infer_variable_kind("exercise", "exercise boosts mood"),
            VariableKind::Continuous
        );
    }

    #[test]
    fn binary_context_needs_a_whole_word() {
        // "snow" and "know" contain "no" but are not binary wording.
        assert_eq!(
            infer_variable_kind("snow cover", "snow cover raises albedo"),
            VariableKind::Continuous
        );
    }
}
