// wordsplice-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use wordsplice_core::{Dictionary, DictionaryError};

/// Word list file name looked for in the standard locations.
const WORD_LIST: &str = "words.txt";

/// Locate a word list and build the dictionary from it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `WORDSPLICE_DICT` environment variable
/// 3. `~/.wordsplice/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `words.txt` in the current working directory
pub fn load_dictionary(dict_path: Option<&str>) -> Result<Dictionary, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            return Dictionary::from_path(path).map_err(|e: DictionaryError| e.to_string());
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of word list files to try, in priority order.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var("WORDSPLICE_DICT") {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".wordsplice").join(WORD_LIST));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORD_LIST));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Strip a `--dictionary PATH` / `--dictionary=PATH` / `-d PATH` option out
/// of the argument list.
///
/// Returns `(dict_path, remaining_args)`.
pub fn take_dictionary_arg(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dictionary=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dictionary" || arg == "-d" {
            match iter.next() {
                Some(val) => dict_path = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn take_dictionary_arg_long_form() {
        let (dict, rest) = take_dictionary_arg(&args(&["--dictionary", "/tmp/w.txt", "cat"]));
        assert_eq!(dict.as_deref(), Some("/tmp/w.txt"));
        assert_eq!(rest, args(&["cat"]));
    }

    #[test]
    fn take_dictionary_arg_equals_form() {
        let (dict, rest) = take_dictionary_arg(&args(&["cat", "--dictionary=/tmp/w.txt"]));
        assert_eq!(dict.as_deref(), Some("/tmp/w.txt"));
        assert_eq!(rest, args(&["cat"]));
    }

    #[test]
    fn take_dictionary_arg_short_form() {
        let (dict, rest) = take_dictionary_arg(&args(&["-d", "w.txt", "a", "b"]));
        assert_eq!(dict.as_deref(), Some("w.txt"));
        assert_eq!(rest, args(&["a", "b"]));
    }

    #[test]
    fn take_dictionary_arg_absent() {
        let (dict, rest) = take_dictionary_arg(&args(&["cat", "dog"]));
        assert!(dict.is_none());
        assert_eq!(rest, args(&["cat", "dog"]));
    }

    #[test]
    fn wants_help_flags() {
        assert!(wants_help(&args(&["-h"])));
        assert!(wants_help(&args(&["cat", "--help"])));
        assert!(!wants_help(&args(&["cat"])));
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/tmp/explicit.txt"));
        assert_eq!(paths[0], PathBuf::from("/tmp/explicit.txt"));
    }
}
