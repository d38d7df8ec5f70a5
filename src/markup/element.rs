//! Minimal HTML node tree: just enough to build the page fragments and
//! serialize them with proper escaping.

/// Tags that never take children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "input", "hr", "img", "meta", "link"];

const INDENT: &str = "  ";

// ── Escaping ─────────────────────────────────────────────────────────────────

/// Escape text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value (always double-quoted).
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

// ── Tree ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    /// Serialize starting at `depth` levels of indentation.
    ///
    /// Elements holding only text stay on one line; anything else puts each
    /// child on its own line.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write(&mut out, depth);
        out
    }

    fn write(&self, out: &mut String, depth: usize) {
        let pad = INDENT.repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {name}=\"{}\"", escape_attr(value)));
        }
        out.push('>');
        if self.is_void() {
            out.push('\n');
            return;
        }
        let inline = self.children.iter().all(|c| matches!(c, Node::Text(_)));
        if inline {
            for child in &self.children {
                if let Node::Text(t) = child {
                    out.push_str(&escape_text(t));
                }
            }
        } else {
            out.push('\n');
            for child in &self.children {
                match child {
                    Node::Element(e) => e.write(out, depth + 1),
                    Node::Text(t) => {
                        out.push_str(&INDENT.repeat(depth + 1));
                        out.push_str(&escape_text(t));
                        out.push('\n');
                    }
                }
            }
            out.push_str(&pad);
        }
        out.push_str(&format!("</{}>\n", self.tag));
    }
}

/// Serialize a list of sibling elements.
pub fn render_all(elements: &[Element], depth: usize) -> String {
    elements.iter().map(|e| e.render(depth)).collect()
}
