// wordsplice-find: discover dictionary words spliced from the given words.
//
// Takes three or more words as arguments and prints every valid spliced
// word, one per line, in generation order.
//
// Usage:
//   wordsplice-find [-d WORD_LIST] WORD WORD WORD [WORD...]
//
// Options:
//   -d, --dictionary PATH   Word list file (one word per line)
//   -h, --help              Print help

use wordsplice_core::dictionary::normalize;
use wordsplice_core::find_valid_words;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordsplice_cli::take_dictionary_arg(&args);

    if wordsplice_cli::wants_help(&args) {
        println!("wordsplice-find: discover dictionary words spliced from the given words.");
        println!();
        println!("Usage: wordsplice-find [-d WORD_LIST] WORD WORD WORD [WORD...]");
        println!();
        println!("Every valid word assembled from a prefix of one input word, an");
        println!("interior substring of a second and a suffix of a third is printed");
        println!("on its own line, in discovery order.");
        println!();
        println!("Options:");
        println!("  -d, --dictionary PATH   Word list file (one word per line)");
        println!("  -h, --help              Print this help");
        return;
    }

    if args.len() < 3 {
        wordsplice_cli::fatal("at least three words are required");
    }

    let dictionary = wordsplice_cli::load_dictionary(dict_path.as_deref())
        .unwrap_or_else(|e| wordsplice_cli::fatal(&e));

    let words: Vec<String> = args.iter().map(|w| normalize(w)).collect();
    let found = find_valid_words(&words, &dictionary);

    if found.is_empty() {
        eprintln!("no words found");
        std::process::exit(1);
    }
    for word in found {
        println!("{word}");
    }
}
