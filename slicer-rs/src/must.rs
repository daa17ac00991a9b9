//! Panicking variants of the slicing API, for call sites that have already
//! checked their inputs.

use crate::input::{Input, Output, Sliceable};
use crate::slicer::Slicer;

impl Slicer {
    /// # Panics
    ///
    /// Panics if more than two indices are given.
    pub fn must_new(strict: bool, indices: &[isize]) -> Self {
        Self::new(strict, indices).unwrap_or_else(|err| panic!("{}", err))
    }

    /// # Panics
    ///
    /// Panics if [`Slicer::slice_bytes`] fails.
    pub fn must_slice_bytes<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        self.slice_bytes(input).unwrap_or_else(|err| panic!("{}", err))
    }

    /// # Panics
    ///
    /// Panics if [`Slicer::slice_str`] fails.
    pub fn must_slice_str<'a>(&self, input: &'a str) -> &'a str {
        self.slice_str(input).unwrap_or_else(|err| panic!("{}", err))
    }

    /// # Panics
    ///
    /// Panics if [`Slicer::slice`] fails.
    pub fn must_slice<'a, T: Sliceable + ?Sized>(&self, input: &'a T) -> &'a T {
        self.slice(input).unwrap_or_else(|err| panic!("{}", err))
    }

    /// # Panics
    ///
    /// Panics if [`Slicer::slice_input`] fails.
    pub fn must_slice_input<'a>(&self, input: Input<'a>) -> Output<'a> {
        self.slice_input(input).unwrap_or_else(|err| panic!("{}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_the_slice_on_success() {
        let slicer = Slicer::must_new(true, &[0, 5]);
        assert_eq!(slicer.must_slice_str("Hello World"), "Hello");
        assert_eq!(slicer.must_slice_bytes(b"Hello World"), b"Hello");
        assert_eq!(slicer.must_slice("Hello World"), "Hello");
        assert_eq!(
            slicer.must_slice_input(Input::Str("Hello World")),
            Output::Str("Hello")
        );
    }

    #[test]
    #[should_panic(expected = "invalid number of indices 3")]
    fn panics_on_invalid_spec() {
        Slicer::must_new(false, &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "must be greater than or equal to zero")]
    fn panics_on_strict_violation() {
        Slicer::must_new(true, &[-100]).must_slice_str("Hello World");
    }

    #[test]
    #[should_panic(expected = "must be before end index")]
    fn panics_on_invalid_range() {
        Slicer::must_new(false, &[5, 2]).must_slice_bytes(b"Hello World");
    }
}
