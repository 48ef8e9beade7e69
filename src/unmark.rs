use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Strip markdown down to the prose a reader would actually read. Text and
/// inline code survive, block boundaries become newlines, and image alt text
/// is dropped since it is not prose.
pub fn unmark(markdown: &str) -> String {
    let mut out = String::new();
    let mut image_depth: usize = 0;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::Start(tag) => {
                if is_block(&tag) {
                    break_line(&mut out);
                }
            }
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
            Event::Text(text) | Event::Code(text) if image_depth == 0 => {
                out.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if image_depth == 0 => out.push('\n'),
            Event::Rule => break_line(&mut out),
            _ => {}
        }
    }

    out
}

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn is_block(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::CodeBlock(_)
            | Tag::HtmlBlock
            | Tag::List(_)
            | Tag::Item
            | Tag::FootnoteDefinition(_)
            | Tag::Table(_)
            | Tag::TableHead
            | Tag::TableRow
    )
}
