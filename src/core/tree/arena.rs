//! Arena storage for document trees

use indexmap::IndexMap;

use super::kind::{ElementKind, QName};
use super::walk::Descendants;

/// Stable index of a node inside its [`XmlTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    name: QName,
    kind: ElementKind,
    attrs: IndexMap<QName, String>,
    children: Vec<NodeId>,
    text: Option<String>,
}

/// Immutable, arena-indexed element tree
#[derive(Debug, Clone)]
pub struct XmlTree {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl XmlTree {
    /// Root element
    pub fn root(&self) -> Node<'_> {
        self.node(self.root)
    }

    /// Look up a node by id
    ///
    /// Panics if the id belongs to a different tree and is out of range.
    pub fn node(&self, id: NodeId) -> Node<'_> {
        assert!(id.index() < self.nodes.len(), "node id out of range");
        Node { tree: self, id }
    }

    /// Number of elements in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// Borrowed handle to one element of an [`XmlTree`]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a XmlTree,
    id: NodeId,
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name().to_string())
            .finish()
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl<'a> Node<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &'a QName {
        &self.tree.data(self.id).name
    }

    pub fn local_name(&self) -> &'a str {
        &self.name().local
    }

    pub fn kind(&self) -> ElementKind {
        self.tree.data(self.id).kind
    }

    pub fn is(&self, kind: ElementKind) -> bool {
        self.kind() == kind
    }

    /// Direct text content (concatenation of the element's own text nodes)
    pub fn text(&self) -> Option<&'a str> {
        self.tree.data(self.id).text.as_deref()
    }

    /// Children in document order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = Node<'a>> + Clone + 'a {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    /// Attributes as `(namespace, local name, value)` in document order
    pub fn attributes(
        &self,
    ) -> impl Iterator<Item = (Option<&'a str>, &'a str, &'a str)> + Clone + 'a {
        self.tree
            .data(self.id)
            .attrs
            .iter()
            .map(|(name, value)| (name.namespace(), name.local.as_str(), value.as_str()))
    }

    /// Attribute value by qualified name
    pub fn attr(&self, namespace: &str, local: &str) -> Option<&'a str> {
        self.attributes()
            .find(|(ns, name, _)| *ns == Some(namespace) && *name == local)
            .map(|(_, _, value)| value)
    }

    /// First attribute with the given local name, in any namespace
    pub fn attr_local(&self, local: &str) -> Option<&'a str> {
        self.attributes()
            .find(|(_, name, _)| *name == local)
            .map(|(_, _, value)| value)
    }

    /// First direct child of the given kind
    pub fn child(&self, kind: ElementKind) -> Option<Node<'a>> {
        self.children().find(|c| c.is(kind))
    }

    /// First direct child with the given local name, in any namespace
    pub fn child_by_local(&self, local: &str) -> Option<Node<'a>> {
        self.children().find(|c| c.local_name() == local)
    }

    /// Pre-order traversal starting with this node
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants::new(*self)
    }

    /// First strict descendant of the given kind, in document order
    pub fn find(&self, kind: ElementKind) -> Option<Node<'a>> {
        self.descendants().skip(1).find(|n| n.is(kind))
    }

    /// All strict descendants of the given kind, in document order
    pub fn find_all(&self, kind: ElementKind) -> impl Iterator<Item = Node<'a>> + 'a {
        self.descendants().skip(1).filter(move |n| n.is(kind))
    }
}

/// Incremental construction of an [`XmlTree`]
///
/// ```
/// use wordlax::core::tree::{ElementKind, QName, TreeBuilder};
///
/// let mut builder = TreeBuilder::new(QName::w("p"));
/// let run = builder.child(builder.root(), QName::w("r"));
/// let text = builder.child(run, QName::w("t"));
/// builder.push_text(text, "Hello");
/// let tree = builder.finish();
///
/// let t = tree.root().find(ElementKind::Text).unwrap();
/// assert_eq!(t.text(), Some("Hello"));
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
}

impl TreeBuilder {
    /// Start a tree with the given root element
    pub fn new(root: QName) -> Self {
        let mut builder = TreeBuilder { nodes: Vec::new() };
        builder.push_node(root);
        builder
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child element to `parent`
    pub fn child(&mut self, parent: NodeId, name: QName) -> NodeId {
        let id = self.push_node(name);
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Set (or replace) an attribute
    pub fn attr(&mut self, node: NodeId, name: QName, value: impl Into<String>) {
        self.nodes[node.index()].attrs.insert(name, value.into());
    }

    /// Append direct text to an element
    pub fn push_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.index()]
            .text
            .get_or_insert_with(String::new)
            .push_str(text);
    }

    pub fn finish(self) -> XmlTree {
        XmlTree {
            nodes: self.nodes,
            root: NodeId(0),
        }
    }

    fn push_node(&mut self, name: QName) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let kind = ElementKind::classify(name.namespace(), &name.local);
        self.nodes.push(NodeData {
            name,
            kind,
            attrs: IndexMap::new(),
            children: Vec::new(),
            text: None,
        });
        id
    }
}
