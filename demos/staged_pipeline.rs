//! Run the lexer and formatter on separate threads and print each line
//! with its span classes as it arrives.

use goprint::{Source, StagedPipeline};

fn main() -> Result<(), goprint::Error> {
    let source = Source::new(
        "demo.go",
        b"package demo\n\n// Sum adds.\nfunc Sum(xs ...int) (n int) {\n\tfor _, x := range xs {\n\t\tn += x\n\t}\n\treturn\n}\n",
    );

    let mut pipeline = StagedPipeline::spawn(source, 0)?;
    for (index, line) in pipeline.by_ref().enumerate() {
        let classes: Vec<String> = line
            .iter()
            .filter_map(|span| span.class().map(|class| format!("{}={class}", span.text)))
            .collect();
        let text = line.to_string();
        println!("{:3} | {text:<40} | {}", index + 1, classes.join(", "));
    }
    pipeline.join()
}
