// Search driver: enumerate every way to pick three input words and assign
// them to the prefix/middle/suffix roles, assemble candidates through one
// shared seen-set, and keep the candidates the dictionary knows.

use crate::candidates::{CandidateSet, assemble};
use crate::dictionary::Dictionary;

/// The six ways to assign a word triple to the (prefix, middle, suffix)
/// roles, in standard permutation order.
const ROLE_ASSIGNMENTS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Generate the full deduplicated candidate stream for the given input
/// words, in first-generation order.
///
/// Triples are chosen as index combinations in lexicographic order, so two
/// equal words at different positions are distinct participants. The
/// seen-set spans the entire run: a candidate value reachable through
/// several role assignments is emitted only the first time.
///
/// Fewer than three input words produce an empty stream.
pub fn generate_candidates<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut out = CandidateSet::new();
    let n = words.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let triple = [words[i].as_ref(), words[j].as_ref(), words[k].as_ref()];
                for roles in &ROLE_ASSIGNMENTS {
                    assemble(triple[roles[0]], triple[roles[1]], triple[roles[2]], &mut out);
                }
            }
        }
    }
    out.into_emitted()
}

/// Find every dictionary word that can be spliced from the input words.
///
/// Input words must already be trimmed and lowercased by the caller; no
/// normalization happens here. The result keeps the candidate stream's
/// first-generation order and is duplicate-free by construction. An empty
/// result means nothing qualified; it is not an error.
pub fn find_valid_words<S: AsRef<str>>(words: &[S], dictionary: &Dictionary) -> Vec<String> {
    generate_candidates(words)
        .into_iter()
        .filter(|candidate| dictionary.contains(candidate))
        .collect()
}
