// rgen-syntax/src/ast.rs

use std::fmt;

/// Inclusive repeat bounds of a [`Node::Repetition`].
///
/// `max == None` is an unbounded upper bound (`*`, `+`, `{n,}`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: u32,
    pub max: Option<u32>,
}

impl Bounds {
    /// `+`
    pub const ONE_OR_MORE: Bounds = Bounds { min: 1, max: None };
    /// `*`
    pub const ZERO_OR_MORE: Bounds = Bounds { min: 0, max: None };
    /// `?`
    pub const ZERO_OR_ONE: Bounds = Bounds {
        min: 0,
        max: Some(1),
    };

    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn exactly(n: u32) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }
}

impl fmt::Display for Bounds {
    /// Renders as `min to max`, with `∞` for an unbounded maximum.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{} to {}", self.min, max),
            None => write!(f, "{} to ∞", self.min),
        }
    }
}

/// A parsed pattern.
///
/// A finished tree never contains an empty `Concatenation` and never a
/// single-child one: the parser collapses those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Matches exactly one character.
    Literal(char),

    /// Matches either child. `a|b|c` nests to the right:
    /// `Alternation([a, Alternation([b, c])])`.
    Alternation(Box<[Node; 2]>),

    /// Sequential composition of the children.
    Concatenation(Vec<Node>),

    /// `child` repeated between `bounds.min` and `bounds.max` times.
    Repetition { child: Box<Node>, bounds: Bounds },
}

/// Variant tag of a [`Node`], for read-only consumers such as printers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Literal,
    Alternation,
    Concatenation,
    Repetition,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Literal => "Literal",
            NodeKind::Alternation => "Alternation",
            NodeKind::Concatenation => "Concatenation",
            NodeKind::Repetition => "Repetition",
        })
    }
}

impl Node {
    pub fn alternation(left: Node, right: Node) -> Node {
        Node::Alternation(Box::new([left, right]))
    }

    pub fn concatenation(children: Vec<Node>) -> Node {
        Node::Concatenation(children)
    }

    pub fn repetition(child: Node, bounds: Bounds) -> Node {
        Node::Repetition {
            child: Box::new(child),
            bounds,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Literal(_) => NodeKind::Literal,
            Node::Alternation(_) => NodeKind::Alternation,
            Node::Concatenation(_) => NodeKind::Concatenation,
            Node::Repetition { .. } => NodeKind::Repetition,
        }
    }

    /// The character of a `Literal`.
    pub fn literal(&self) -> Option<char> {
        match self {
            Node::Literal(c) => Some(*c),
            _ => None,
        }
    }

    /// Ordered children: none for a literal, two for an alternation,
    /// one for a repetition.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Literal(_) => &[],
            Node::Alternation(pair) => &pair[..],
            Node::Concatenation(children) => children,
            Node::Repetition { child, .. } => std::slice::from_ref(child.as_ref()),
        }
    }

    /// Repeat bounds of a `Repetition`.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Node::Repetition { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    /// Number of nodes in the tree, this one included.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(Node::size).sum::<usize>()
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}

/// Byte span in the original pattern string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize, // inclusive
    pub end: usize,   // exclusive
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn join(a: Span, b: Span) -> Span {
        Span {
            start: a.start.min(b.start),
            end: a.end.max(b.end),
        }
    }
}
