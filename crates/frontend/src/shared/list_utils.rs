//! Text helpers for search results
use leptos::prelude::*;

/// Split `text` into `(segment, is_match)` parts around case-insensitive
/// occurrences of `query`
pub fn highlight_segments(text: &str, query: &str) -> Vec<(String, bool)> {
    let query = query.trim();
    if query.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    // Lowercasing can change byte lengths outside ASCII; fall back to no highlight
    if text_lower.len() != text.len() || query_lower.len() != query.len() {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&query_lower) {
        let start = last_pos + pos;
        let end = start + query_lower.len();
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    if parts.is_empty() {
        parts.push((String::new(), false));
    }
    parts
}

/// Render `text` with the matches of `query` in bold
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts = highlight_segments(text, query)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <strong>{segment}</strong> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();
    view! { <>{parts}</> }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_case_insensitive() {
        let parts = highlight_segments("Ana Anaya", "ana");
        assert_eq!(
            parts,
            vec![
                ("Ana".to_string(), true),
                (" ".to_string(), false),
                ("Ana".to_string(), true),
                ("ya".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_no_query_or_no_match() {
        assert_eq!(highlight_segments("Quilmes", ""), vec![("Quilmes".to_string(), false)]);
        assert_eq!(highlight_segments("Quilmes", "xyz"), vec![("Quilmes".to_string(), false)]);
    }
}
