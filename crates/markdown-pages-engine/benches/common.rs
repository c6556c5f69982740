// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** *styled* `content` and a [link](https://example.com).\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n> Quoted\n> text\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_long_paragraph(words: usize) -> String {
    let mut content = String::new();
    for i in 0..words {
        match i % 10 {
            3 => content.push_str("**bold** "),
            6 => content.push_str("*italic* "),
            9 => content.push_str("![img](pic.png) "),
            _ => content.push_str("word "),
        }
    }
    content
}
