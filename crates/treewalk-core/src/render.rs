//! JSON renderers built purely as [`Visitor`] implementations.
//!
//! Neither writer knows anything about tree shape beyond the callbacks it
//! receives: separators are placed from `is_first`, and null object members
//! never appear because the navigator never reports them. Null array slots
//! print `null` through the nested `visit_null` callback.
//!
//! ```
//! use treewalk_core::{to_compact_string, to_pretty_string, Value};
//!
//! let doc = Value::from_json_str(r#"{"a":1,"b":null,"c":[2,null]}"#).unwrap();
//! assert_eq!(to_compact_string(&doc).unwrap(), r#"{"a":1,"c":[2,null]}"#);
//! assert_eq!(
//!     to_pretty_string(&doc).unwrap(),
//!     "{\n  \"a\": 1,\n  \"c\": [\n    2,\n    null\n  ]\n}"
//! );
//! ```

use std::io::{self, Write};

use crate::error::Result;
use crate::navigator::Navigator;
use crate::value::{Members, Primitive, Value};
use crate::visitor::Visitor;

/// Output layout for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// No whitespace between tokens.
    #[default]
    Compact,
    /// One member per line, indented by `indent` spaces per level.
    Pretty { indent: usize },
}

/// Renders `value` as JSON text in the requested layout.
pub fn render(value: &Value, format: Format, navigator: &Navigator) -> Result<String> {
    let buf = match format {
        Format::Compact => {
            let mut writer = CompactWriter::new(Vec::new());
            navigator.navigate(value, &mut writer)?;
            writer.into_inner()
        }
        Format::Pretty { indent } => {
            let mut writer = PrettyWriter::new(Vec::new()).with_indent(indent);
            navigator.navigate(value, &mut writer)?;
            writer.into_inner()
        }
    };
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

pub fn to_compact_string(value: &Value) -> Result<String> {
    render(value, Format::Compact, &Navigator::new())
}

pub fn to_pretty_string(value: &Value) -> Result<String> {
    render(
        value,
        Format::Pretty {
            indent: PrettyWriter::<Vec<u8>>::DEFAULT_INDENT,
        },
        &Navigator::new(),
    )
}

fn write_primitive<W: Write>(out: &mut W, value: &Primitive) -> io::Result<()> {
    match value {
        Primitive::Bool(b) => write!(out, "{b}"),
        Primitive::Number(n) => write!(out, "{n}"),
        Primitive::String(s) => write_escaped(out, s),
    }
}

fn write_escaped<W: Write>(out: &mut W, s: &str) -> io::Result<()> {
    serde_json::to_writer(out, s).map_err(io::Error::from)
}

/// Writes JSON with no insignificant whitespace.
#[derive(Debug)]
pub struct CompactWriter<W> {
    out: W,
}

impl<W: Write> CompactWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self, is_first: bool) -> io::Result<()> {
        if is_first {
            Ok(())
        } else {
            self.out.write_all(b",")
        }
    }
}

impl<W: Write> Visitor for CompactWriter<W> {
    type Error = io::Error;

    fn visit_null(&mut self) -> io::Result<()> {
        self.out.write_all(b"null")
    }

    fn start_object(&mut self, _object: &Members) -> io::Result<()> {
        self.out.write_all(b"{")
    }

    fn visit_object_member(
        &mut self,
        _parent: &Members,
        key: &str,
        _value: &Value,
        is_first: bool,
    ) -> io::Result<()> {
        self.separator(is_first)?;
        write_escaped(&mut self.out, key)?;
        self.out.write_all(b":")
    }

    fn end_object(&mut self, _object: &Members) -> io::Result<()> {
        self.out.write_all(b"}")
    }

    fn start_array(&mut self, _array: &[Value]) -> io::Result<()> {
        self.out.write_all(b"[")
    }

    fn visit_array_member(
        &mut self,
        _parent: &[Value],
        _element: &Value,
        is_first: bool,
    ) -> io::Result<()> {
        self.separator(is_first)
    }

    fn visit_null_array_member(&mut self, _parent: &[Value], is_first: bool) -> io::Result<()> {
        self.separator(is_first)
    }

    fn end_array(&mut self, _array: &[Value]) -> io::Result<()> {
        self.out.write_all(b"]")
    }

    fn visit_primitive(&mut self, value: &Primitive) -> io::Result<()> {
        write_primitive(&mut self.out, value)
    }
}

/// Writes indented JSON, one member or element per line.
///
/// Containers with nothing to print, including objects whose members are all
/// null, collapse to `{}` or `[]`.
#[derive(Debug)]
pub struct PrettyWriter<W> {
    out: W,
    indent: usize,
    // One entry per open container: whether it has printed a member yet.
    levels: Vec<bool>,
}

impl<W: Write> PrettyWriter<W> {
    pub const DEFAULT_INDENT: usize = 2;

    pub fn new(out: W) -> Self {
        Self {
            out,
            indent: Self::DEFAULT_INDENT,
            levels: Vec::new(),
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn newline(&mut self) -> io::Result<()> {
        let width = self.levels.len() * self.indent;
        write!(self.out, "\n{:width$}", "")
    }

    fn begin_member(&mut self, is_first: bool) -> io::Result<()> {
        if !is_first {
            self.out.write_all(b",")?;
        }
        if let Some(has_members) = self.levels.last_mut() {
            *has_members = true;
        }
        self.newline()
    }

    fn open(&mut self, token: &[u8]) -> io::Result<()> {
        self.out.write_all(token)?;
        self.levels.push(false);
        Ok(())
    }

    fn close(&mut self, token: &[u8]) -> io::Result<()> {
        if self.levels.pop().unwrap_or(false) {
            self.newline()?;
        }
        self.out.write_all(token)
    }
}

impl<W: Write> Visitor for PrettyWriter<W> {
    type Error = io::Error;

    fn visit_null(&mut self) -> io::Result<()> {
        self.out.write_all(b"null")
    }

    fn start_object(&mut self, _object: &Members) -> io::Result<()> {
        self.open(b"{")
    }

    fn visit_object_member(
        &mut self,
        _parent: &Members,
        key: &str,
        _value: &Value,
        is_first: bool,
    ) -> io::Result<()> {
        self.begin_member(is_first)?;
        write_escaped(&mut self.out, key)?;
        self.out.write_all(b": ")
    }

    fn end_object(&mut self, _object: &Members) -> io::Result<()> {
        self.close(b"}")
    }

    fn start_array(&mut self, _array: &[Value]) -> io::Result<()> {
        self.open(b"[")
    }

    fn visit_array_member(
        &mut self,
        _parent: &[Value],
        _element: &Value,
        is_first: bool,
    ) -> io::Result<()> {
        self.begin_member(is_first)
    }

    fn visit_null_array_member(&mut self, _parent: &[Value], is_first: bool) -> io::Result<()> {
        self.begin_member(is_first)
    }

    fn end_array(&mut self, _array: &[Value]) -> io::Result<()> {
        self.close(b"]")
    }

    fn visit_primitive(&mut self, value: &Primitive) -> io::Result<()> {
        write_primitive(&mut self.out, value)
    }
}
