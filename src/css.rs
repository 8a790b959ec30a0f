/// Expands a CSS generic family keyword into an ordered list of concrete
/// family names to try, first-available-wins. Concrete family names that
/// aren't one of the five recognized generics pass through unchanged by
/// [`expand_family`]'s caller.
pub fn generic_expansion(generic: &str) -> Option<&'static [&'static str]> {
    match generic {
        "serif" => Some(&["Times New Roman", "Times", "Liberation Serif", "DejaVu Serif", "Noto Serif"]),
        "sans-serif" => {
            Some(&["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans", "Noto Sans"])
        }
        "monospace" => Some(&[
            "Courier New",
            "Consolas",
            "Liberation Mono",
            "DejaVu Sans Mono",
            "Menlo",
        ]),
        "cursive" => Some(&["Comic Sans MS", "Apple Chancery"]),
        "fantasy" => Some(&["Papyrus", "Impact"]),
        _ => None,
    }
}

/// Expands a full font-family stack, replacing each generic keyword with
/// its concrete preference list in place and leaving concrete names alone.
pub fn expand_stack(stack: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(stack.len());
    for family in stack {
        match generic_expansion(family.to_ascii_lowercase().as_str()) {
            Some(preferences) => expanded.extend(preferences.iter().map(|s| s.to_string())),
            None => expanded.push(family.clone()),
        }
    }
    expanded
}
