use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders Markdown to HTML, showing raw HTML blocks as plain text.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all()).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[component]
pub fn Markdown(content: String) -> Element {
    let rendered = render_markdown(&content);

    rsx!(div {
        class: "prose max-w-none",
        dangerous_inner_html: "{rendered}"
    })
}
