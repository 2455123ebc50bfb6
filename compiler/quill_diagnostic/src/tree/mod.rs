//! Diagnostics attached to syntax trees, and collecting them.
//!
//! Parsers and analyzers attach [`DiagnosticMessage`]s to the node they
//! concern instead of reporting them on the spot. Once the tree is built,
//! [`check_and_report_parse_diagnostics`] walks it and hands every attached
//! message to a reporter.
//!
//! # Ordering
//!
//! Collection is depth-first: each node's children are visited in document
//! order, and the node's own diagnostics follow those of its children. Earlier
//! source positions therefore tend to come first, but the order follows tree
//! structure, not raw offsets.
//!
//! ```text
//! root [A]
//! ├── child1 [B]
//! └── child2 []
//!
//! collected: [B, A]
//! ```

mod list;

pub use list::DiagnosticList;

use im::Vector;
use quill_span::SourceLocation;

use crate::{DiagnosticMessage, DiagnosticReporter, ReportError};

/// A node in a syntax or AST tree that can carry diagnostics.
///
/// Different node kinds are represented as variants of one type (see
/// [`SyntaxNode`]'s kind tag) rather than separate types.
pub trait AstNode: Sized {
    fn location(&self) -> &SourceLocation;

    /// Owned children, in document order.
    fn children(&self) -> &[Self];

    /// Diagnostics attached to this node.
    fn diagnostics(&self) -> &DiagnosticList;

    /// Attach a diagnostic. Safe to call concurrently on a shared node.
    fn add_diagnostic(&self, message: DiagnosticMessage) {
        self.diagnostics().add(message);
    }

    /// Attach several diagnostics in one update.
    fn add_diagnostics(&self, messages: impl IntoIterator<Item = DiagnosticMessage>) {
        self.diagnostics().add_all(messages);
    }

    /// Dispatch to `visitor`.
    fn accept<V: AstVisitor<Self> + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit(self)
    }
}

/// A visitor producing an aggregate value over a tree.
pub trait AstVisitor<N: AstNode> {
    type Output;

    /// Aggregate of a node with nothing to contribute (e.g. a leaf's
    /// children).
    fn default_output(&self) -> Self::Output;

    /// Fold the result of one more child into the running aggregate.
    fn aggregate(&mut self, aggregate: Self::Output, next: Self::Output) -> Self::Output;

    /// Visit a node. Defaults to [`walk_children`].
    fn visit(&mut self, node: &N) -> Self::Output {
        walk_children(self, node)
    }
}

/// Visit every child of `node` in order and aggregate the results.
pub fn walk_children<N, V>(visitor: &mut V, node: &N) -> V::Output
where
    N: AstNode,
    V: AstVisitor<N> + ?Sized,
{
    let mut aggregate = visitor.default_output();
    for child in node.children() {
        let next = child.accept(visitor);
        aggregate = visitor.aggregate(aggregate, next);
    }
    aggregate
}

/// Collects every diagnostic in a tree: children first, then the node's own.
#[derive(Copy, Clone, Debug, Default)]
pub struct DiagnosticCollector;

impl<N: AstNode> AstVisitor<N> for DiagnosticCollector {
    type Output = Vector<DiagnosticMessage>;

    fn default_output(&self) -> Self::Output {
        Vector::new()
    }

    fn aggregate(&mut self, mut aggregate: Self::Output, next: Self::Output) -> Self::Output {
        aggregate.append(next);
        aggregate
    }

    fn visit(&mut self, node: &N) -> Self::Output {
        let mut collected = walk_children(self, node);
        collected.append(node.diagnostics().snapshot());
        collected
    }
}

/// All diagnostics attached anywhere under `node`, in collection order.
pub fn collect_diagnostics<N: AstNode>(node: &N) -> Vector<DiagnosticMessage> {
    node.accept(&mut DiagnosticCollector)
}

/// Report every diagnostic in the tree rooted at `node`.
///
/// An absent node has no diagnostics. Returns whether any diagnostics were
/// found. Only errors raised by `reporter` are propagated; reporting stops
/// at the first one.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_and_report_parse_diagnostics<N, R>(
    reporter: &mut R,
    node: Option<&N>,
) -> Result<bool, ReportError>
where
    N: AstNode,
    R: DiagnosticReporter + ?Sized,
{
    let Some(node) = node else {
        tracing::trace!("no tree to check");
        return Ok(false);
    };

    let diagnostics = collect_diagnostics(node);
    tracing::debug!(count = diagnostics.len(), "collected tree diagnostics");

    let found = !diagnostics.is_empty();
    for message in diagnostics {
        reporter.report(message)?;
    }
    Ok(found)
}

/// A generic tree node tagged with a kind.
///
/// ```text
/// let tree = SyntaxNode::new(Kind::Module, loc)
///     .with_child(SyntaxNode::new(Kind::Function, f_loc))
///     .with_child(SyntaxNode::new(Kind::Function, g_loc));
/// ```
#[derive(Clone, Debug)]
pub struct SyntaxNode<K> {
    kind: K,
    location: SourceLocation,
    children: Vec<SyntaxNode<K>>,
    diagnostics: DiagnosticList,
}

impl<K> SyntaxNode<K> {
    pub fn new(kind: K, location: SourceLocation) -> Self {
        SyntaxNode {
            kind,
            location,
            children: Vec::new(),
            diagnostics: DiagnosticList::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: SyntaxNode<K>) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntaxNode<K>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: SyntaxNode<K>) {
        self.children.push(child);
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }
}

impl<K> AstNode for SyntaxNode<K> {
    fn location(&self) -> &SourceLocation {
        &self.location
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn diagnostics(&self) -> &DiagnosticList {
        &self.diagnostics
    }
}
