//! Initials badge for a participant identifier.

const SEPARATORS: [char; 3] = ['_', '.', '-'];

/// One or two uppercase letters identifying a participant.
///
/// The domain of an email address is not part of the person's name, so each
/// whitespace-separated word is cut at its `@` before `_`, `.` and `-` are
/// treated as word breaks. One remaining word yields its first letter, two or
/// more yield the first letters of the first two. Empty input yields `""`.
pub fn initials(text: &str) -> String {
    let tokens: Vec<&str> = text
        .split_whitespace()
        .map(|word| word.split('@').next().unwrap_or_default())
        .flat_map(|local| local.split(SEPARATORS))
        .filter(|token| !token.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => String::new(),
        [only] => first_upper(only),
        [first, second, ..] => first_upper(first) + &first_upper(second),
    }
}

fn first_upper(token: &str) -> String {
    token
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
