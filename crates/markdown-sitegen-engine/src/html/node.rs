/// Element attributes, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`. An existing attribute keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A node of the HTML output tree.
///
/// Each node owns its children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Raw text rendered with no wrapping tag.
    Text(String),
    Element {
        tag: String,
        attributes: Attributes,
        children: Vec<HtmlNode>,
    },
}

impl HtmlNode {
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Text(value.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children,
        }
    }

    /// An element whose only child is a raw text node.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::element(tag, vec![Self::text(value)])
    }

    /// Adds an attribute. Has no effect on text nodes.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let HtmlNode::Element { attributes, .. } = &mut self {
            attributes.insert(name, value);
        }
        self
    }

    /// The element tag; `None` for raw text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Text(_) => None,
            HtmlNode::Element { tag, .. } => Some(tag),
        }
    }

    /// The literal text; `None` for elements.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Text(value) => Some(value),
            HtmlNode::Element { .. } => None,
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Text(_) => &[],
            HtmlNode::Element { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Text(_) => None,
            HtmlNode::Element { attributes, .. } => Some(attributes),
        }
    }

    /// Concatenated raw text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            HtmlNode::Text(value) => out.push_str(value),
            HtmlNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
