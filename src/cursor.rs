use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

type Source<'code, S> = Rc<RefCell<Box<dyn Iterator<Item = S> + 'code>>>;

/// Immutable position over a single-pass sequence of symbols
///
/// A cursor holds the symbol at its position and a memo cell for its successor.
/// Advancing the same cursor twice returns the same successor instance, so any
/// number of parsers can branch from one position while the underlying source is
/// read exactly once per symbol. Cloning a cursor is cheap and shares the chain.
///
/// Cursors belong to the thread that created them. Any iterator works as a
/// source, including ones over `Rc` symbols or capturing `Cell`s.
pub struct Cursor<'code, S> {
    node: Rc<Node<'code, S>>,
}

struct Node<'code, S> {
    current: Option<S>,
    position: usize,
    next: OnceCell<Cursor<'code, S>>,
    source: Source<'code, S>,
}

impl<'code, S> Cursor<'code, S> {
    /// Wrap a symbol source, reading its first symbol
    pub fn new<I>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'code,
    {
        let source: Source<'code, S> = Rc::new(RefCell::new(Box::new(input.into_iter())));
        Self::pull(source, 0)
    }

    fn pull(source: Source<'code, S>, position: usize) -> Self {
        let current = source.borrow_mut().next();
        if current.is_some() {
            trace!(position, "pulled symbol from source");
        } else {
            trace!(position, "source exhausted");
        }

        Cursor {
            node: Rc::new(Node {
                current,
                position,
                next: OnceCell::new(),
                source,
            }),
        }
    }

    /// The symbol at this position, or `None` once the source is exhausted
    pub fn current(&self) -> Option<&S> {
        self.node.current.as_ref()
    }

    /// Owned copy of the symbol at this position
    pub fn value(&self) -> Option<S>
    where
        S: Clone,
    {
        self.node.current.clone()
    }

    /// The cursor one symbol later, or `None` if this cursor is exhausted
    ///
    /// The successor is computed on first call and memoized; every later call
    /// returns the identical instance.
    pub fn advance(&self) -> Option<Self> {
        self.node.current.as_ref()?;
        let next = self.node.next.get_or_init(|| {
            Self::pull(Rc::clone(&self.node.source), self.node.position + 1)
        });
        Some(next.clone())
    }

    /// Check if no symbol remains at this position
    pub fn is_exhausted(&self) -> bool {
        self.node.current.is_none()
    }

    /// Number of symbols consumed before this position
    pub fn position(&self) -> usize {
        self.node.position
    }

    /// Identity comparison: true iff both cursors are the same position instance
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.node, &b.node)
    }
}

impl<S> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        Cursor {
            node: Rc::clone(&self.node),
        }
    }
}

/// Cursors compare by identity. Two cursors from the same chain at the same
/// position are always the same instance, so this matches positional equality
/// within one input.
impl<S> PartialEq for Cursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        Cursor::ptr_eq(self, other)
    }
}

impl<S> Eq for Cursor<'_, S> {}

impl<S: fmt::Debug> fmt::Debug for Cursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.node.position)
            .field("current", &self.node.current)
            .finish()
    }
}

// Unlink the successor chain iteratively so dropping a long input does not
// recurse once per symbol.
impl<S> Drop for Node<'_, S> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(cursor) = next {
            match Rc::try_unwrap(cursor.node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}
