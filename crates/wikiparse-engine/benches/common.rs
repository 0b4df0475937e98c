// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_wikitext(size: usize) -> String {
    let base = "==English==\n===Noun===\n{{en-noun|cats}}\n# A small [[domesticated]] [[carnivore#English|carnivore]].\n#: ''The '''cat''' sat on the [[mat]].'' <!-- quote -->\n# [http://example.com/ A website] about {{l|en|cats}}.\n\n[[Category:English nouns]]\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_list(size: usize) -> String {
    let base = "* [[one]]\n** two\n*# three\n*#: four\n";
    base.repeat(size)
}
