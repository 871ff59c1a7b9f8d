const LEVEL_PREFIX: &str = " (level-";

/// Canonical form of a possibly decorated character name: host markup spans
/// and non-breaking spaces removed, surrounding whitespace trimmed, and a
/// single trailing " (level-<digits>)" suffix dropped. Idempotent.
pub fn normalize(raw: &str) -> String {
    let stripped = strip_markup(raw);
    let despaced = stripped.replace('\u{00a0}', " ");
    let trimmed = despaced.trim();
    strip_level_suffix(trimmed).to_owned()
}

fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => out.push(ch),
        }
    }
    out
}

fn strip_level_suffix(name: &str) -> &str {
    // Only a match at the very end of the name counts, so the last
    // occurrence of the prefix is the only candidate.
    let Some(idx) = name.rfind(LEVEL_PREFIX) else {
        return name;
    };
    let tail = &name[idx + LEVEL_PREFIX.len()..];
    match tail.strip_suffix(')') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            &name[..idx]
        }
        _ => name,
    }
}
