// Segment enumerators: the leaf iterators that cut a single word into the
// pieces candidates are assembled from.
//
// All three enumerators are lazy and restartable: calling the constructor
// again yields a fresh sequence with fresh local state. Words are expected
// to be already trimmed and lowercased by the caller; the enumerators work
// on any UTF-8 string and slice only at character boundaries.

use hashbrown::HashSet;

/// All non-empty prefixes of `word`, shortest first, ending with the whole
/// word. Empty input yields an empty sequence.
pub fn prefixes(word: &str) -> impl Iterator<Item = &str> {
    word.char_indices()
        .map(move |(i, c)| &word[..i + c.len_utf8()])
}

/// All non-empty suffixes of `word`, longest first (the whole word), ending
/// with the final character. Empty input yields an empty sequence.
pub fn suffixes(word: &str) -> impl Iterator<Item = &str> {
    word.char_indices().map(move |(i, _)| &word[i..])
}

/// The word with its first and last characters removed.
///
/// Words shorter than two characters have no interior and map to `""`.
/// This is the body that the middle-role word contributes substrings from.
pub fn interior(word: &str) -> &str {
    let mut chars = word.char_indices();
    let Some((_, first)) = chars.next() else {
        return "";
    };
    match word.char_indices().next_back() {
        Some((last_start, _)) if last_start >= first.len_utf8() => {
            &word[first.len_utf8()..last_start]
        }
        _ => "",
    }
}

/// Iterator over the distinct substrings of a word: the empty string first,
/// then every distinct non-empty substring in first-occurrence order of the
/// (start ascending, then end ascending) scan.
///
/// The dedup set is local to one iterator instance; a repeated substring
/// value is emitted only at its first position.
pub struct DistinctSubstrings<'a> {
    word: &'a str,
    /// Byte offsets of character boundaries, including `word.len()`.
    bounds: Vec<usize>,
    start: usize,
    end: usize,
    seen: HashSet<&'a str>,
    yielded_empty: bool,
}

/// Enumerate the distinct substrings of `word` (see [`DistinctSubstrings`]).
///
/// The unconditional leading empty string is what lets a middle word with no
/// interior still take part in assembly.
pub fn distinct_substrings(word: &str) -> DistinctSubstrings<'_> {
    let mut bounds: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
    bounds.push(word.len());
    DistinctSubstrings {
        word,
        bounds,
        start: 0,
        end: 1,
        seen: HashSet::new(),
        yielded_empty: false,
    }
}

impl<'a> Iterator for DistinctSubstrings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if !self.yielded_empty {
            self.yielded_empty = true;
            return Some("");
        }
        let nchars = self.bounds.len() - 1;
        while self.start < nchars {
            if self.end > nchars {
                self.start += 1;
                self.end = self.start + 1;
                continue;
            }
            let sub = &self.word[self.bounds[self.start]..self.bounds[self.end]];
            self.end += 1;
            if self.seen.insert(sub) {
                return Some(sub);
            }
        }
        None
    }
}
