use std::fmt::Write;

use crate::render::{Block, SpanStyle};

const STYLE: &str = "body{font-family:Calibri,Arial,sans-serif;max-width:8in;margin:0.5in auto;font-size:10.5pt}\
h1{text-align:center;font-size:16pt;margin:0}\
.contact{text-align:center;margin:4px 0 12px}\
h2{font-size:12pt;border-bottom:1px solid #000;margin:12px 0 4px}\
.line{display:flex;justify-content:space-between;margin:0}\
ul{margin:2px 0 0 18px;padding:0}";

/// Local preview of the rendered blocks. Consecutive bullets share one `<ul>`.
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    let _ = write!(out, "<style>{STYLE}</style></head><body>\n");

    let mut in_list = false;
    for block in blocks {
        let is_bullet = matches!(block, Block::Bullet { .. });
        if in_list && !is_bullet {
            out.push_str("</ul>\n");
            in_list = false;
        }

        match block {
            Block::Title { text } => {
                let _ = writeln!(out, "<h1>{}</h1>", escape(text));
            }
            Block::Contact { text } => {
                let _ = writeln!(out, "<p class=\"contact\">{}</p>", escape(text));
            }
            Block::SectionTitle { text } => {
                let _ = writeln!(out, "<h2>{}</h2>", escape(text));
            }
            Block::Line { spans, aside } => {
                out.push_str("<p class=\"line\"><span>");
                for span in spans {
                    let text = escape(&span.text);
                    let _ = match span.style {
                        SpanStyle::Plain => write!(out, "{text}"),
                        SpanStyle::Bold => write!(out, "<strong>{text}</strong>"),
                        SpanStyle::Italic => write!(out, "<em>{text}</em>"),
                    };
                }
                out.push_str("</span>");
                if let Some(aside) = aside {
                    let _ = write!(out, "<span>{}</span>", escape(aside));
                }
                out.push_str("</p>\n");
            }
            Block::Bullet { text } => {
                if !in_list {
                    out.push_str("<ul>\n");
                    in_list = true;
                }
                let _ = writeln!(out, "<li>{}</li>", escape(text));
            }
            Block::Spacer => out.push_str("<br>\n"),
        }
    }
    if in_list {
        out.push_str("</ul>\n");
    }

    out.push_str("</body></html>\n");
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
