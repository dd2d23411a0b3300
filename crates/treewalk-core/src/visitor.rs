//! Visitor trait consumed by the [`Navigator`](crate::Navigator).
//!
//! Renderers and analyses implement [`Visitor`] and override only the
//! callbacks they care about; every method defaults to `Ok(())`.
//!
//! # Callback contract
//!
//! - `visit_object_member` fires only for members whose value is not `Null`.
//!   Null members produce no callback at all and do not consume `is_first`.
//! - `visit_null_array_member` fires for every `Null` element of an array and
//!   is always followed by a nested `visit_null`.
//! - `is_first` is true for exactly one member callback per container: the
//!   first non-null member of an object, or the first slot of an array.
//!
//! Returning `Err` from any callback stops the traversal at that point; the
//! error is handed back from `navigate` as
//! [`NavigateError::Visitor`](crate::NavigateError::Visitor).
//!
//! # Example
//!
//! ```
//! use treewalk_core::{navigate, Primitive, Value, Visitor};
//!
//! /// Collects every primitive in document order.
//! struct Leaves(Vec<String>);
//!
//! impl Visitor for Leaves {
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_primitive(&mut self, value: &Primitive) -> Result<(), Self::Error> {
//!         self.0.push(value.to_string());
//!         Ok(())
//!     }
//! }
//!
//! let doc = Value::from_json_str(r#"{"a":1,"b":[true,"x"]}"#).unwrap();
//! let mut leaves = Leaves(Vec::new());
//! navigate(&doc, &mut leaves).unwrap();
//! assert_eq!(leaves.0, vec!["1", "true", "x"]);
//! ```

use crate::value::{Members, Primitive, Value};

/// Callbacks invoked by the navigator during a depth-first walk.
pub trait Visitor {
    /// Error type a callback uses to abort the traversal.
    type Error;

    /// A `Null` reached as the root, or re-entered after a null array slot.
    fn visit_null(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn start_object(&mut self, _object: &Members) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the navigator descends into `value`.
    fn visit_object_member(
        &mut self,
        _parent: &Members,
        _key: &str,
        _value: &Value,
        _is_first: bool,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_object(&mut self, _object: &Members) -> Result<(), Self::Error> {
        Ok(())
    }

    fn start_array(&mut self, _array: &[Value]) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the navigator descends into a non-null `element`.
    fn visit_array_member(
        &mut self,
        _parent: &[Value],
        _element: &Value,
        _is_first: bool,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_null_array_member(
        &mut self,
        _parent: &[Value],
        _is_first: bool,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_array(&mut self, _array: &[Value]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_primitive(&mut self, _value: &Primitive) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    type Error = V::Error;

    fn visit_null(&mut self) -> Result<(), Self::Error> {
        (**self).visit_null()
    }

    fn start_object(&mut self, object: &Members) -> Result<(), Self::Error> {
        (**self).start_object(object)
    }

    fn visit_object_member(
        &mut self,
        parent: &Members,
        key: &str,
        value: &Value,
        is_first: bool,
    ) -> Result<(), Self::Error> {
        (**self).visit_object_member(parent, key, value, is_first)
    }

    fn end_object(&mut self, object: &Members) -> Result<(), Self::Error> {
        (**self).end_object(object)
    }

    fn start_array(&mut self, array: &[Value]) -> Result<(), Self::Error> {
        (**self).start_array(array)
    }

    fn visit_array_member(
        &mut self,
        parent: &[Value],
        element: &Value,
        is_first: bool,
    ) -> Result<(), Self::Error> {
        (**self).visit_array_member(parent, element, is_first)
    }

    fn visit_null_array_member(
        &mut self,
        parent: &[Value],
        is_first: bool,
    ) -> Result<(), Self::Error> {
        (**self).visit_null_array_member(parent, is_first)
    }

    fn end_array(&mut self, array: &[Value]) -> Result<(), Self::Error> {
        (**self).end_array(array)
    }

    fn visit_primitive(&mut self, value: &Primitive) -> Result<(), Self::Error> {
        (**self).visit_primitive(value)
    }
}
