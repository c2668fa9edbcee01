//! Fixed-size text slicing for the chunked responder.

/// Split text into contiguous slices of at most `max_chars` characters.
///
/// Slices preserve order and exact content; a slice may end mid-word.
/// Concatenating the returned slices reconstructs the input exactly.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    assert!(max_chars > 0, "chunk size must be positive");

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }
    chunks
}
