use std::collections::BTreeMap;

use serde::Serialize;

/// A generic renderable element.
///
/// Serializes untagged: nodes as `{"tag", "attrs", "children"}` objects and
/// text as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Element {
    Node {
        tag: String,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        attrs: BTreeMap<String, String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<Element>,
    },
    Text(String),
}

impl Element {
    pub const VOID_TAGS: [&'static str; 3] = ["br", "hr", "img"];

    pub fn node(tag: impl Into<String>) -> Self {
        Element::Node {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Element::Text(text.into())
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        if let Element::Node { attrs, .. } = &mut self {
            attrs.insert(key.to_string(), value.into());
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<Element>) -> Self {
        if let Element::Node { children, .. } = &mut self {
            children.extend(new_children);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Element::Node { tag, .. } => Some(tag),
            Element::Text(_) => None,
        }
    }

    /// Serializes to HTML with text and attribute values escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Element::Text(t) => out.push_str(&html_escape::encode_text(t)),
            Element::Node {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (k, v) in attrs {
                    out.push(' ');
                    out.push_str(k);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(v));
                    out.push('"');
                }
                if Self::VOID_TAGS.contains(&tag.as_str()) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for c in children {
                    c.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_escapes_text_and_attributes() {
        let el = Element::node("a")
            .with_attr("href", "/x?a=1&b=\"2\"")
            .with_children(vec![Element::text("<tag> & more")]);
        assert_eq!(
            el.to_html(),
            r#"<a href="/x?a=1&amp;b=&quot;2&quot;">&lt;tag&gt; &amp; more</a>"#
        );
    }

    #[test]
    fn void_tags_self_close() {
        let el = Element::node("p").with_children(vec![
            Element::text("a"),
            Element::node("br"),
            Element::text("b"),
        ]);
        assert_eq!(el.to_html(), "<p>a<br />b</p>");
    }

    #[test]
    fn serializes_untagged() {
        let el = Element::node("em").with_children(vec![Element::text("x")]);
        let json = serde_json::to_string(&el).unwrap();
        assert_eq!(json, r#"{"tag":"em","children":["x"]}"#);
    }
}
