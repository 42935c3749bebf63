use crate::text::normalize::{lowercase_words, normalize};

/// Whether a resolved control label and a supplied field name refer to the
/// same field.
///
/// Loose, symmetric containment: equal normalized forms, either normalized
/// form containing the other, or every word of one side appearing among
/// the words of the other. Over-matches on ambiguous labels; callers take
/// the first field that matches.
pub fn matches(label_text: &str, field_name: &str) -> bool {
    let label = normalize(label_text);
    let field = normalize(field_name);

    if label.is_empty() || field.is_empty() {
        return false;
    }

    if label == field || label.contains(&field) || field.contains(&label) {
        return true;
    }

    let label_words = lowercase_words(label_text);
    let field_words = lowercase_words(field_name);

    field_words.iter().all(|w| label_words.contains(w))
        || label_words.iter().all(|w| field_words.contains(w))
}
