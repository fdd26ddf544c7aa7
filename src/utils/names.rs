//! Identifier derivation from user-supplied names

/// Upper-case the first character of `s`, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// File-name form of a name: lower-cased verbatim, no sanitizing
pub fn slug(name: &str) -> String {
    name.to_lowercase()
}

/// Class-like controller identifier, e.g. `user` -> `UserController`
pub fn controller_class(name: &str) -> String {
    format!("{}Controller", capitalize(name))
}
