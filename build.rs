//! Build script that embeds the word lists
//!
//! Turns `data/*.txt` (one word per line) into `const` slices under `OUT_DIR`.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Words that can be drawn as the secret answer",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "Every word accepted as a guess (answers included)",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");

    for (input, output, const_name, doc) in LISTS {
        embed_word_list(input, &Path::new(&out_dir).join(output), const_name, doc);
        println!("cargo:rerun-if-changed={input}");
    }
}

fn embed_word_list(input_path: &str, output_path: &Path, const_name: &str, doc: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if let Some(bad) = words
        .iter()
        .find(|w| !w.bytes().all(|b| b.is_ascii_lowercase()))
    {
        panic!("{input_path}: '{bad}' is not a lower-case ASCII word");
    }

    let mut source = String::new();
    source.push_str("// Generated by build.rs, do not edit\n\n");
    source.push_str(&format!("/// {doc}\n"));
    source.push_str(&format!("pub const {const_name}: &[&str] = &[\n"));
    for word in &words {
        source.push_str(&format!("    \"{word}\",\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!("/// Number of words in [`{const_name}`]\n"));
    source.push_str(&format!(
        "pub const {const_name}_COUNT: usize = {};\n",
        words.len()
    ));

    let mut file = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));
    file.write_all(source.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
