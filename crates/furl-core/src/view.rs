use crate::host::NodeRef;
use crate::modifier::Modifier;

#[derive(Clone, Debug)]
pub enum ViewKind {
    /// Outer clipping container of a widget.
    Container,
    /// Measurable content subtree, bound to its host handle once mounted.
    Content { node: Option<NodeRef> },
    /// Plain box.
    Box,
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn child(mut self, child: View) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<View>) -> Self {
        self.children = children;
        self
    }
}
