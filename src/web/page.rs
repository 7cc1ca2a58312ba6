//! HTML for the landing page and the case converter page.
use crate::casing::{self, RenderedCase};

const STYLE: &str = include_str!("./style.css");
const SCRIPT: &str = include_str!("./case.js");

pub fn landing() -> String {
    layout(
        "Yui",
        r#"<main class="landing">
  <article>
    <h1>Yui</h1>
    <h2>&gt; A bespoke kit of tools, each built to solve one small problem <em>very well</em>.</h2>
  </article>
</main>"#,
    )
}

/// Renders the converter page with `input` already applied.
pub fn case_converter(input: &str) -> String {
    let body = format!(
        r#"<main class="converter">
  <div>
    <h1>Case Converter</h1>
    <form id="converter" method="get" action="/app/case">
      <input id="input" name="input" type="text" placeholder="Enter a string..." autocomplete="off" value="{value}">
    </form>
    {list}
  </div>
</main>
<script>{script}</script>"#,
        value = html_escape(input),
        list = case_list(&casing::render(input)),
        script = SCRIPT,
    );

    layout("Case Converter", &body)
}

/// Renders only the list of casings.
pub fn case_list(outputs: &[RenderedCase]) -> String {
    let mut html = String::from(r#"<ul id="casings">"#);

    for item in outputs {
        html += &format!(
            r#"<li><label>{name}</label><span>{output}</span></li>"#,
            name = html_escape(item.name),
            output = html_escape(&item.output),
        );
    }

    html += "</ul>";
    html
}

pub fn not_found() -> String {
    layout(
        "Not Found",
        r#"<main class="landing">
  <article>
    <h1>404</h1>
    <h2>Nothing here. Try the <a href="/app/case">case converter</a>.</h2>
  </article>
</main>"#,
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = html_escape(title),
        style = STYLE,
        body = body,
    )
}

fn html_escape(text: &str) -> String {
    let mut buf = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => buf += "&amp;",
            '<' => buf += "&lt;",
            '>' => buf += "&gt;",
            '"' => buf += "&quot;",
            '\'' => buf += "&#39;",
            _ => buf.push(c),
        }
    }

    buf
}
