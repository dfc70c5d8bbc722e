//! HTML for the site pages. Every dynamic string is escaped on its way in;
//! only the answer formatter emits markup, and it escapes its own text nodes.

use claire_client::{escape_html, render_html, AnswerEntry};

#[derive(Debug, Default)]
pub struct HomeView {
    pub url: String,
    pub questions_text: String,
    pub entries: Vec<AnswerEntry>,
    pub flash: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct AnswersView {
    pub documents_text: String,
    pub questions_text: String,
    pub entries: Vec<AnswerEntry>,
    pub raw: Option<String>,
    pub error: Option<String>,
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 0 auto; max-width: 900px; padding: 20px; color: #222; }}
nav a {{ margin-right: 16px; }}
label {{ display: block; margin-bottom: 6px; font-weight: 600; }}
input, textarea {{ width: 100%; margin-bottom: 12px; padding: 8px; box-sizing: border-box; }}
button {{ padding: 8px 18px; }}
.flash {{ color: seagreen; margin-bottom: 12px; }}
.error {{ color: crimson; margin-bottom: 12px; }}
.entry {{ margin-bottom: 12px; padding: 10px; border: 1px solid #ddd; }}
.entry .question {{ font-weight: 600; }}
.spacer {{ height: 12px; }}
pre {{ white-space: pre-wrap; background: #f6f6f6; padding: 10px; }}
.steps {{ display: flex; gap: 16px; }}
.step {{ flex: 1; border: 1px solid #eee; padding: 12px; }}
</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/answers">Answer Fetcher</a><a href="/about">About Us</a></nav>
{body}
<script>
document.addEventListener('submit', function (event) {{
  var button = event.target.querySelector('button[type=submit]');
  if (button) {{
    button.disabled = true;
    button.textContent = button.dataset.busy || 'Working...';
  }}
}});
</script>
</body>
</html>"#
    )
}

fn banner_html(flash: &Option<String>, error: &Option<String>) -> String {
    let mut html = String::new();
    if let Some(message) = flash {
        html.push_str(&format!(r#"<div class="flash">{}</div>"#, escape_html(message)));
    }
    if let Some(message) = error {
        html.push_str(&format!(r#"<div class="error">{}</div>"#, escape_html(message)));
    }
    html
}

fn entries_html(entries: &[AnswerEntry]) -> String {
    let mut html = String::new();
    for entry in entries {
        html.push_str(&format!(
            r#"<div class="entry"><div class="question">Q: {}</div><div class="answer">{}</div></div>"#,
            escape_html(&entry.question),
            render_html(&entry.answer)
        ));
    }
    html
}

pub fn home_page(view: &HomeView) -> String {
    let results = if view.entries.is_empty() {
        String::new()
    } else {
        format!("<section><h2>Your Answers</h2>{}</section>", entries_html(&view.entries))
    };

    let body = format!(
        r#"<div class="hero">
<h1>Document Q&amp;A with CLAIRE</h1>
<p>Get accurate answers from your documents instantly.</p>
</div>
{banners}
<h2>Submit Your Query</h2>
<form method="post" action="/run">
<label for="document-url">Document URL</label>
<input id="document-url" name="url" type="text" placeholder="https://example.com/document.pdf" value="{url}">
<label for="questions">Your Questions</label>
<textarea id="questions" name="questions" rows="4" placeholder="Enter your questions, one per line">{questions}</textarea>
<button type="submit" data-busy="Processing...">Get Answers</button>
</form>
{results}
<section>
<h2>How It Works</h2>
<div class="steps">
<div class="step"><h3>1. Upload Document</h3><p>Provide the URL of your document or file</p></div>
<div class="step"><h3>2. Ask Questions</h3><p>Enter your questions about the document</p></div>
<div class="step"><h3>3. Get Answers</h3><p>Receive accurate responses instantly</p></div>
</div>
</section>"#,
        banners = banner_html(&view.flash, &view.error),
        url = escape_html(&view.url),
        questions = escape_html(&view.questions_text),
        results = results,
    );

    page_shell("CLAIRE - Document Q&A", &body)
}

pub fn answers_page(view: &AnswersView) -> String {
    let mut results = String::new();
    if let Some(raw) = &view.raw {
        results.push_str("<section><h3>Results</h3>");
        results.push_str("<strong>Normalized Answers</strong>");
        if view.entries.is_empty() {
            results.push_str("<div>No answers found in response.</div>");
        } else {
            results.push_str(&entries_html(&view.entries));
        }
        results.push_str(&format!(
            r#"<details><summary>Raw response</summary><pre>{}</pre></details>"#,
            escape_html(raw)
        ));
        results.push_str("</section>");
    }

    let body = format!(
        r#"<h2>Answer Fetcher</h2>
{banners}
<form method="post" action="/answers/run">
<label for="documents">Documents</label>
<textarea id="documents" name="documents" rows="8" placeholder="Paste document(s) here. Use a JSON array, or separate multiple documents with --- on its own line.">{documents}</textarea>
<label for="questions">Questions (one per line)</label>
<textarea id="questions" name="questions" rows="4" placeholder="Enter one question per line">{questions}</textarea>
<button type="submit" data-busy="Fetching answers...">Get Answers</button>
</form>
{results}"#,
        banners = banner_html(&None, &view.error),
        documents = escape_html(&view.documents_text),
        questions = escape_html(&view.questions_text),
        results = results,
    );

    page_shell("CLAIRE - Answer Fetcher", &body)
}

pub fn about_page() -> String {
    let body = r#"<h1>About CLAIRE</h1>
<p>CLAIRE makes document analysis simple: submit a document and your
questions, and get contextually relevant answers in seconds.</p>
<section>
<h2>Why CLAIRE?</h2>
<div class="steps">
<div class="step"><h3>Instant Processing</h3><p>Answers within seconds, not hours</p></div>
<div class="step"><h3>High Accuracy</h3><p>Precise, contextually relevant answers</p></div>
<div class="step"><h3>Multi-Format Support</h3><p>Works with PDFs, Word documents and more</p></div>
</div>
</section>"#;

    page_shell("CLAIRE - About Us", body)
}
