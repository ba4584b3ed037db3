//! English inflection for identifiers.
//!
//! Only the last word of a compound identifier is inflected (`user_categories` ->
//! `user_category`, `UserAccounts` -> `UserAccount`), and the casing of the
//! replaced part follows the original. Noun rules come from `pluralizer`.

/// Convert a (possibly compound) identifier to its singular form.
///
/// # Examples
/// ```
/// use gqlforge_naming::singularize;
///
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("UserAccounts"), "UserAccount");
/// assert_eq!(singularize("statuses"), "status");
/// assert_eq!(singularize("status"), "status");
/// assert_eq!(singularize("People"), "Person");
/// ```
pub fn singularize(name: &str) -> String {
    let (head, word) = split_last_word(name);
    if word.is_empty() {
        return name.to_string();
    }
    format!("{}{}", head, singularize_word(word))
}

/// Convert a (possibly compound) identifier to its plural form.
///
/// # Examples
/// ```
/// use gqlforge_naming::pluralize;
///
/// assert_eq!(pluralize("inquiry"), "inquiries");
/// assert_eq!(pluralize("comment"), "comments");
/// assert_eq!(pluralize("Category"), "Categories");
/// assert_eq!(pluralize("box"), "boxes");
/// ```
pub fn pluralize(name: &str) -> String {
    let (head, word) = split_last_word(name);
    if word.is_empty() {
        return name.to_string();
    }
    format!("{}{}", head, pluralize_word(word))
}

fn singularize_word(word: &str) -> String {
    pluralizer::pluralize(word, 1, false)
}

fn pluralize_word(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// Split an identifier into everything before its last word and the last word.
///
/// Word boundaries are separators (`_`, `-`, space, `.`) and lower-to-upper case
/// transitions, so this works for snake, kebab, camel and pascal identifiers.
fn split_last_word(name: &str) -> (&str, &str) {
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (idx, ch) in name.char_indices() {
        if matches!(ch, '_' | '-' | ' ' | '.') {
            start = idx + ch.len_utf8();
        } else if ch.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            start = idx;
        }
        prev = Some(ch);
    }
    name.split_at(start)
}
