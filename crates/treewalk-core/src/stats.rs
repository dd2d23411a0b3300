//! Shape statistics gathered by walking a tree.

use std::convert::Infallible;

use serde::Serialize;

use crate::error::Result;
use crate::navigator::Navigator;
use crate::value::{Members, Primitive, Value};
use crate::visitor::Visitor;

/// Counts of what a traversal reported.
///
/// `nulls` counts `visit_null` callbacks, so it covers a null root and null
/// array slots. Null object members never reach a visitor and are counted
/// separately in `skipped_null_members`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub objects: usize,
    pub arrays: usize,
    pub primitives: usize,
    pub nulls: usize,
    pub skipped_null_members: usize,
    pub max_depth: usize,
    #[serde(skip)]
    depth: usize,
}

impl TreeStats {
    pub fn collect(root: &Value, navigator: &Navigator) -> Result<TreeStats> {
        let mut stats = TreeStats::default();
        navigator.navigate(root, &mut stats)?;
        Ok(stats)
    }

    fn enter(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }
}

impl Visitor for TreeStats {
    type Error = Infallible;

    fn visit_null(&mut self) -> std::result::Result<(), Infallible> {
        self.nulls += 1;
        Ok(())
    }

    fn start_object(&mut self, object: &Members) -> std::result::Result<(), Infallible> {
        self.objects += 1;
        self.skipped_null_members += object.iter().filter(|(_, v)| v.is_null()).count();
        self.enter();
        Ok(())
    }

    fn end_object(&mut self, _object: &Members) -> std::result::Result<(), Infallible> {
        self.depth -= 1;
        Ok(())
    }

    fn start_array(&mut self, _array: &[Value]) -> std::result::Result<(), Infallible> {
        self.arrays += 1;
        self.enter();
        Ok(())
    }

    fn end_array(&mut self, _array: &[Value]) -> std::result::Result<(), Infallible> {
        self.depth -= 1;
        Ok(())
    }

    fn visit_primitive(&mut self, _value: &Primitive) -> std::result::Result<(), Infallible> {
        self.primitives += 1;
        Ok(())
    }
}
