/// Prefix namespacing all field names derived from labels.
const FIELD_NAME_PREFIX: &str = "draggable-number";

/// Derives the stable `name`/`id` for an input from its label: lower-cased,
/// whitespace joined with `-`, namespaced. `"My input"` becomes
/// `"draggable-number-my-input"`.
pub fn field_name(label: &str) -> String {
    let lowered = label.to_lowercase();
    let slug = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    format!("{}-{}", FIELD_NAME_PREFIX, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_label_words() {
        assert_eq!(field_name("My input"), "draggable-number-my-input");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(field_name("  Scale   factor "), "draggable-number-scale-factor");
    }

    #[test]
    fn single_word_labels_keep_the_prefix() {
        assert_eq!(field_name("Volume"), "draggable-number-volume");
    }
}
