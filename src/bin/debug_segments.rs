use jpmark_rs::{get_script, Pipeline};

fn main() {
    let input = "<p class=\"ZHTW\">\n第一段：先整句念\nどんなところがまじめだと思うのかみんなに聞いてみたいな。\n 私がまじめだと思うのはメンモのヒナタくん!\n講稿\n</p>";
    println!("Input: {}", input);

    let pipeline = Pipeline::default();
    let content = input
        .trim_start_matches("<p class=\"ZHTW\">")
        .trim_end_matches("</p>");
    let spans = pipeline.segment(content);

    println!("\nSpans:");
    for (i, span) in spans.iter().enumerate() {
        let foreign = pipeline.tagger().classifier().is_foreign(&span.text);
        let scripts: Vec<&str> = span
            .text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| get_script(c).as_str())
            .collect();
        println!(
            "  {}: {:?} - foreign: {}, first script: {:?}",
            i,
            span.text,
            foreign,
            scripts.first()
        );
    }

    match pipeline.tag_document(input) {
        Ok(tagged) => println!("\nTagged:\n{}", tagged),
        Err(e) => eprintln!("Error: {}", e),
    }

    match pipeline.process(input) {
        Ok(merged) => println!("\nMerged:\n{}", merged),
        Err(e) => eprintln!("Error: {}", e),
    }
}
