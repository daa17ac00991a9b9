//! Entry points that accept either strings or bytes.

use std::any::Any;

use crate::error::SliceError;
use crate::slicer::Slicer;

mod private {
    pub trait Sealed {}

    impl Sealed for str {}
    impl Sealed for [u8] {}
}

/// A sequence that a [`Slicer`] can cut: `str` or `[u8]`. Owned and boxed
/// forms (`String`, `Vec<u8>`, `Box<str>`) reach these impls through deref.
pub trait Sliceable: private::Sealed {
    fn slice_by<'a>(&'a self, slicer: &Slicer) -> Result<&'a Self, SliceError>;
}

impl Sliceable for str {
    fn slice_by<'a>(&'a self, slicer: &Slicer) -> Result<&'a Self, SliceError> {
        slicer.slice_str(self)
    }
}

impl Sliceable for [u8] {
    fn slice_by<'a>(&'a self, slicer: &Slicer) -> Result<&'a Self, SliceError> {
        slicer.slice_bytes(self)
    }
}

/// A string or byte input whose type is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Input<'a> {
    /// Recognizes the string and byte types behind a type-erased value.
    pub fn from_any(value: &'a dyn Any) -> Result<Self, SliceError> {
        Self::from_any_named(value, "unknown")
    }

    /// Like [`Input::from_any`], naming the type as `type_name` if it is not
    /// recognized.
    pub fn from_any_named(value: &'a dyn Any, type_name: &str) -> Result<Self, SliceError> {
        if let Some(s) = value.downcast_ref::<String>() {
            return Ok(Input::Str(s));
        }
        if let Some(s) = value.downcast_ref::<&'static str>() {
            return Ok(Input::Str(s));
        }
        if let Some(s) = value.downcast_ref::<Box<str>>() {
            return Ok(Input::Str(s));
        }
        if let Some(b) = value.downcast_ref::<Vec<u8>>() {
            return Ok(Input::Bytes(b));
        }
        if let Some(b) = value.downcast_ref::<&'static [u8]>() {
            return Ok(Input::Bytes(b));
        }
        if let Some(b) = value.downcast_ref::<Box<[u8]>>() {
            return Ok(Input::Bytes(b));
        }
        Err(SliceError::UnsupportedType {
            type_name: type_name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Input::Str(s) => s.as_bytes(),
            Input::Bytes(b) => b,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Str(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Str(s)
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(b: &'a [u8]) -> Self {
        Input::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        Input::Bytes(b)
    }
}

/// The result of slicing an [`Input`]; same variant as the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output<'a> {
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Output<'a> {
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Output::Str(s) => s.as_bytes(),
            Output::Bytes(b) => b,
        }
    }
}

impl Slicer {
    /// Slices any [`Sliceable`] value.
    pub fn slice<'a, T: Sliceable + ?Sized>(&self, input: &'a T) -> Result<&'a T, SliceError> {
        input.slice_by(self)
    }

    /// Slices a string or byte input chosen at runtime.
    pub fn slice_input<'a>(&self, input: Input<'a>) -> Result<Output<'a>, SliceError> {
        match input {
            Input::Str(s) => self.slice_str(s).map(Output::Str),
            Input::Bytes(b) => self.slice_bytes(b).map(Output::Bytes),
        }
    }
}
