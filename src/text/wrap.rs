/// Break `text` into lines no wider than `max_width` using greedy word packing.
///
/// Runs of whitespace always collapse to single spaces, so a message that fits comes back as one
/// whitespace-normalized line. Otherwise a new line starts whenever the next word would overflow,
/// and a word wider than `max_width` on its own occupies a line unsplit.
pub fn wrap_greedy(text: &str, max_width: f32, mut measure: impl FnMut(&str) -> f32) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let normalized = words.join(" ");
    if measure(&normalized) <= max_width {
        return vec![normalized];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if current.is_empty() || measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
