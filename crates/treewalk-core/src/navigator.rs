//! Depth-first navigator over a [`Value`] tree.
//!
//! The navigator owns no data and keeps no state between calls; one
//! `navigate` call is a pure function of the tree and the visitor. Callback
//! order is pre-order with paired enter/exit events:
//!
//! 1. `Null` root: `visit_null`.
//! 2. Array: `start_array`, then per slot in sequence order either
//!    `visit_null_array_member` followed by a nested `visit_null`, or
//!    `visit_array_member` followed by the element's own traversal, then
//!    `end_array`. The first slot is first even when it is null.
//! 3. Object: `start_object`, then per member in insertion order
//!    `visit_object_member` followed by the member's traversal, then
//!    `end_object`. Null-valued members are skipped without any callback and
//!    do not consume the `is_first` flag.
//! 4. Primitive: `visit_primitive`.
//!
//! Recursion depth follows container nesting and is bounded by
//! [`Navigator::max_depth`]. Exceeding it fails with
//! [`NavigateError::DepthExceeded`] instead of exhausting the stack.

use tracing::{debug, trace};

use crate::error::NavigateError;
use crate::value::{Members, Value};
use crate::visitor::Visitor;

/// Nesting limit used by [`Navigator::new`] and [`navigate`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Stateless depth-first traversal, configured only by its nesting limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    max_depth: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// A navigator that allows at most `max_depth` nested containers.
    /// With `0`, only a bare primitive or null root can be navigated.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Walks `root`, reporting each step to `visitor`.
    ///
    /// Stops at the first callback that returns `Err`; no further sibling,
    /// child, or `end_*` callbacks are made after it.
    pub fn navigate<V>(&self, root: &Value, visitor: &mut V) -> Result<(), NavigateError<V::Error>>
    where
        V: Visitor + ?Sized,
    {
        self.walk(root, 0, visitor)
    }

    fn walk<V>(
        &self,
        value: &Value,
        depth: usize,
        visitor: &mut V,
    ) -> Result<(), NavigateError<V::Error>>
    where
        V: Visitor + ?Sized,
    {
        match value {
            Value::Null => visitor.visit_null().map_err(NavigateError::Visitor),
            Value::Primitive(p) => visitor.visit_primitive(p).map_err(NavigateError::Visitor),
            Value::Array(elements) => {
                self.enter(depth)?;
                self.walk_array(elements, depth + 1, visitor)
            }
            Value::Object(members) => {
                self.enter(depth)?;
                self.walk_object(members, depth + 1, visitor)
            }
        }
    }

    fn walk_array<V>(
        &self,
        elements: &[Value],
        depth: usize,
        visitor: &mut V,
    ) -> Result<(), NavigateError<V::Error>>
    where
        V: Visitor + ?Sized,
    {
        trace!(depth, len = elements.len(), "entering array");
        visitor.start_array(elements).map_err(NavigateError::Visitor)?;
        let mut is_first = true;
        for element in elements {
            if element.is_null() {
                visitor
                    .visit_null_array_member(elements, is_first)
                    .map_err(NavigateError::Visitor)?;
            } else {
                visitor
                    .visit_array_member(elements, element, is_first)
                    .map_err(NavigateError::Visitor)?;
            }
            // A null slot re-enters here too, so the same visit_null handler
            // serves both root and in-array nulls.
            self.walk(element, depth, visitor)?;
            is_first = false;
        }
        visitor.end_array(elements).map_err(NavigateError::Visitor)
    }

    fn walk_object<V>(
        &self,
        members: &Members,
        depth: usize,
        visitor: &mut V,
    ) -> Result<(), NavigateError<V::Error>>
    where
        V: Visitor + ?Sized,
    {
        trace!(depth, len = members.len(), "entering object");
        visitor.start_object(members).map_err(NavigateError::Visitor)?;
        let mut is_first = true;
        for (key, value) in members.iter() {
            if value.is_null() {
                continue;
            }
            visitor
                .visit_object_member(members, key, value, is_first)
                .map_err(NavigateError::Visitor)?;
            self.walk(value, depth, visitor)?;
            is_first = false;
        }
        visitor.end_object(members).map_err(NavigateError::Visitor)
    }

    /// Checks that one more container fits under the limit, given `depth`
    /// containers already open.
    fn enter<E>(&self, depth: usize) -> Result<(), NavigateError<E>> {
        if depth >= self.max_depth {
            debug!(limit = self.max_depth, "nesting limit reached, aborting traversal");
            return Err(NavigateError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

/// Walks `root` with a default [`Navigator`].
pub fn navigate<V>(root: &Value, visitor: &mut V) -> Result<(), NavigateError<V::Error>>
where
    V: Visitor + ?Sized,
{
    Navigator::new().navigate(root, visitor)
}
