//! Highlight a Go file (or a built-in snippet) as a standalone HTML page.

use std::process::ExitCode;

use goprint::{Options, Source, render};

const SNIPPET: &str = "package main\n\nimport \"fmt\"\n\n/* Say hello.\n   Twice. */\nfunc main() {\n\tfor i := 0; i < 2; i++ {\n\t\tfmt.Println(`hello,\nworld`)\n\t}\n}\n";

const STYLE: &str = "\
.keyword { color: #a626a4; }
.builtin { color: #0184bc; }
.literal { color: #50a14f; }
.comment { color: #a0a1a7; font-style: italic; }
.invalid { background: #fdd; }
.line { color: #bbb; user-select: none; }";

fn main() -> ExitCode {
    let source = match std::env::args().nth(1) {
        Some(path) => match Source::read(&path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Source::new("snippet.go", SNIPPET.as_bytes()),
    };

    match render(&source, Options::default()) {
        Ok(body) => {
            println!("<!DOCTYPE html>");
            println!("<title>{}</title>", goprint::escape_html(source.name()));
            println!("<style>{STYLE}</style>");
            println!(r#"<pre><code class="go">{body}</code></pre>"#);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
