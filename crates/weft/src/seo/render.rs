use super::HeadTag;

impl HeadTag {
    /// Serialize as a single HTML element.
    pub fn to_html(&self) -> String {
        match self {
            HeadTag::Title(title) => format!("<title>{}</title>", escape(title)),
            HeadTag::MetaName { name, content } => {
                format!(r#"<meta name="{}" content="{}">"#, escape(name), escape(content))
            }
            HeadTag::MetaProperty { property, content } => format!(
                r#"<meta property="{}" content="{}">"#,
                escape(property),
                escape(content)
            ),
            HeadTag::Link {
                rel,
                href,
                href_lang: Some(href_lang),
            } => format!(
                r#"<link rel="{}" hreflang="{}" href="{}">"#,
                escape(rel),
                escape(href_lang),
                escape(href)
            ),
            HeadTag::Link {
                rel,
                href,
                href_lang: None,
            } => format!(r#"<link rel="{}" href="{}">"#, escape(rel), escape(href)),
            // Only the closing-tag sequence needs neutralizing inside a script.
            HeadTag::JsonLd(json) => format!(
                r#"<script type="application/ld+json" data-jsonld="1">{}</script>"#,
                json.replace("</", "<\\/")
            ),
        }
    }
}

/// Render head elements one per line.
pub fn render_head(tags: &[HeadTag]) -> String {
    tags.iter()
        .map(HeadTag::to_html)
        .collect::<Vec<_>>()
        .join("\n")
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
