//! Turns an answer string into display markup.
//!
//! The answer is parsed into a small block tree first (paragraphs, bullet
//! lists, spacers, bold/italic spans) and the HTML writer escapes every text
//! node on the way out, so markup characters in the answer itself can never
//! introduce structure.

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    List(Vec<Vec<Inline>>),
    Spacer,
}

/// Parses answer text into blocks. Line rules: a blank line closes any open
/// bullet list and emits a spacer; a `-`, `*`, or `•` marker followed by
/// whitespace starts or continues a list; anything else is a paragraph.
pub fn parse_blocks(answer: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list_items: Vec<Vec<Inline>> = Vec::new();

    for line in answer.lines() {
        let line = line.trim();
        if line.is_empty() {
            flush_list(&mut blocks, &mut list_items);
            blocks.push(Block::Spacer);
        } else if let Some(item) = bullet_text(line) {
            list_items.push(parse_inline(item));
        } else {
            flush_list(&mut blocks, &mut list_items);
            blocks.push(Block::Paragraph(parse_inline(line)));
        }
    }
    flush_list(&mut blocks, &mut list_items);

    blocks
}

fn flush_list(blocks: &mut Vec<Block>, list_items: &mut Vec<Vec<Inline>>) {
    if !list_items.is_empty() {
        blocks.push(Block::List(std::mem::take(list_items)));
    }
}

fn bullet_text(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    if !matches!(chars.next()?, '-' | '*' | '•') {
        return None;
    }
    let rest = chars.as_str();
    if rest.chars().next()?.is_whitespace() {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Splits a line into text, bold, and italic spans. Double-asterisk pairs
/// are resolved before single ones; unpaired markers stay literal text.
fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some((before, inner, after)) = find_delimited(rest, "**") {
        push_italic_spans(&mut spans, before);
        spans.push(Inline::Bold(inner.to_string()));
        rest = after;
    }
    push_italic_spans(&mut spans, rest);
    spans
}

fn push_italic_spans(spans: &mut Vec<Inline>, text: &str) {
    let mut rest = text;
    while let Some((before, inner, after)) = find_delimited(rest, "*") {
        if !before.is_empty() {
            spans.push(Inline::Text(before.to_string()));
        }
        spans.push(Inline::Italic(inner.to_string()));
        rest = after;
    }
    if !rest.is_empty() {
        spans.push(Inline::Text(rest.to_string()));
    }
}

/// Finds the first non-empty `delim`-delimited span, returning the text
/// before it, the span content, and the text after it.
fn find_delimited<'a>(text: &'a str, delim: &str) -> Option<(&'a str, &'a str, &'a str)> {
    let start = text.find(delim)?;
    let inner_start = start + delim.len();
    let inner_len = text[inner_start..].find(delim)?;
    if inner_len == 0 {
        return None;
    }
    Some((
        &text[..start],
        &text[inner_start..inner_start + inner_len],
        &text[inner_start + inner_len + delim.len()..],
    ))
}

/// Renders an answer to HTML. Pure: the same input always produces the same
/// markup.
pub fn render_html(answer: &str) -> String {
    let mut html = String::new();
    for block in parse_blocks(answer) {
        match block {
            Block::Paragraph(spans) => {
                html.push_str("<p>");
                write_inline(&mut html, &spans);
                html.push_str("</p>");
            }
            Block::List(items) => {
                html.push_str("<ul>");
                for item in items {
                    html.push_str("<li>");
                    write_inline(&mut html, &item);
                    html.push_str("</li>");
                }
                html.push_str("</ul>");
            }
            Block::Spacer => html.push_str("<div class=\"spacer\"></div>"),
        }
    }
    html
}

fn write_inline(out: &mut String, spans: &[Inline]) {
    for span in spans {
        match span {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Bold(text) => {
                out.push_str("<strong>");
                out.push_str(&escape_html(text));
                out.push_str("</strong>");
            }
            Inline::Italic(text) => {
                out.push_str("<em>");
                out.push_str(&escape_html(text));
                out.push_str("</em>");
            }
        }
    }
}

/// Escapes the five HTML-sensitive characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
