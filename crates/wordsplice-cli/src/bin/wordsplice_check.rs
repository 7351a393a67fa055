// wordsplice-check: check words from stdin against the dictionary.
//
// Reads words from stdin (one per line) and reports whether each is in the
// dictionary:
//   C: word    (known)
//   W: word    (unknown)
//
// Usage:
//   wordsplice-check [-d WORD_LIST]

use std::io::{self, BufRead, Write};

use wordsplice_core::dictionary::normalize;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordsplice_cli::take_dictionary_arg(&args);

    if wordsplice_cli::wants_help(&args) {
        println!("wordsplice-check: check words from stdin against the dictionary.");
        println!();
        println!("Usage: wordsplice-check [-d WORD_LIST]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (known)");
        println!("  W: word    (unknown)");
        println!();
        println!("Options:");
        println!("  -d, --dictionary PATH   Word list file (one word per line)");
        println!("  -h, --help              Print this help");
        return;
    }

    let dictionary = wordsplice_cli::load_dictionary(dict_path.as_deref())
        .unwrap_or_else(|e| wordsplice_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = normalize(&line);
        if word.is_empty() {
            continue;
        }

        if dictionary.contains(&word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
        }
    }
}
