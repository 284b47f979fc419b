use std::str::SplitWhitespace;

pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Lazy iterator over fixed-size word groups of a text.
///
/// Cloning yields an independent iterator from the same position, so the
/// sequence can be replayed without re-splitting the input.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    words: SplitWhitespace<'a>,
    size: usize,
}

/// Split `text` into groups of `size` whitespace-delimited words, each
/// re-joined with single spaces. The last group holds the remainder.
///
/// A `size` of zero is treated as one.
pub fn chunks(text: &str, size: usize) -> Chunks<'_> {
    Chunks {
        words: text.split_whitespace(),
        size: size.max(1),
    }
}

impl Iterator for Chunks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let group: Vec<&str> = self.words.by_ref().take(self.size).collect();
        if group.is_empty() { None } else { Some(group.join(" ")) }
    }
}
