//! Index resolution and slicing.
//!
//! A [`Slicer`] holds zero, one or two indices. Negative indices count back
//! from the end of the input, like Python's `seq[start:end]`. In strict mode an
//! index outside the input is an error; in loose mode it is clamped, or the
//! result is empty.

use std::fmt;
use std::ops::Range;

use crate::error::{describe, SliceError};

/// How indices that fall outside the input are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Out-of-range indices are errors.
    Strict,
    /// Out-of-range indices are clamped or produce an empty result.
    #[default]
    Loose,
}

impl From<bool> for Mode {
    fn from(strict: bool) -> Self {
        if strict {
            Mode::Strict
        } else {
            Mode::Loose
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bounds {
    Whole,
    From(isize),
    Range(isize, isize),
}

/// Slices inputs by a fixed set of indices. Cheap to copy and safe to share
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slicer {
    bounds: Bounds,
    mode: Mode,
}

impl Slicer {
    /// Creates a slicer for `indices`, which may hold a start index, a start
    /// and an end index, or nothing at all (identity).
    ///
    /// Fails with [`SliceError::InvalidSpec`] when more than two indices are
    /// given. Index values are only checked once an input is sliced.
    pub fn new(strict: bool, indices: &[isize]) -> Result<Self, SliceError> {
        let bounds = match *indices {
            [] => Bounds::Whole,
            [start] => Bounds::From(start),
            [start, end] => Bounds::Range(start, end),
            _ => {
                return Err(SliceError::InvalidSpec {
                    count: indices.len(),
                })
            }
        };
        Ok(Self {
            bounds,
            mode: Mode::from(strict),
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn strict(&self) -> bool {
        self.mode == Mode::Strict
    }

    /// The indices as given at construction.
    pub fn indices(&self) -> Vec<isize> {
        match self.bounds {
            Bounds::Whole => vec![],
            Bounds::From(start) => vec![start],
            Bounds::Range(start, end) => vec![start, end],
        }
    }

    /// Resolves the indices against `input` and returns the range to keep.
    ///
    /// An empty result is returned as `len..len`. All slicing entry points go
    /// through here, so this is where the strict and loose rules live.
    pub fn range(&self, input: &[u8]) -> Result<Range<usize>, SliceError> {
        let len = input.len();
        // Slice lengths never exceed isize::MAX.
        let signed_len = len as isize;
        let empty = len..len;

        match (self.mode, self.bounds) {
            (_, Bounds::Whole) => Ok(0..len),

            (Mode::Strict, Bounds::From(start)) => {
                let resolved = resolve(start, signed_len);
                if resolved < 0 {
                    return Err(SliceError::NegativeStart { start, resolved });
                }
                if resolved > signed_len - 1 {
                    return Err(SliceError::StartPastEnd {
                        start,
                        resolved,
                        len,
                        input: describe(input),
                    });
                }
                Ok(resolved as usize..len)
            }

            (Mode::Loose, Bounds::From(start)) => {
                let resolved = resolve(start, signed_len).max(0);
                if resolved > signed_len - 1 {
                    return Ok(empty);
                }
                Ok(resolved as usize..len)
            }

            (Mode::Strict, Bounds::Range(start, end)) => {
                let resolved_start = resolve(start, signed_len);
                let resolved_end = resolve(end, signed_len);
                if resolved_end < resolved_start {
                    return Err(SliceError::InvalidRange {
                        start,
                        resolved_start,
                        end,
                        resolved_end,
                    });
                }
                if resolved_start < 0 {
                    return Err(SliceError::NegativeStart {
                        start,
                        resolved: resolved_start,
                    });
                }
                if resolved_end > signed_len {
                    return Err(SliceError::EndPastLength {
                        end,
                        resolved: resolved_end,
                        len,
                        input: describe(input),
                    });
                }
                Ok(resolved_start as usize..resolved_end as usize)
            }

            (Mode::Loose, Bounds::Range(start, end)) => {
                let resolved_start = resolve(start, signed_len);
                let resolved_end = resolve(end, signed_len);
                // Ordering is checked before clamping, so [5:-100] is an
                // error rather than an empty result.
                if resolved_end < resolved_start {
                    return Err(SliceError::InvalidRange {
                        start,
                        resolved_start,
                        end,
                        resolved_end,
                    });
                }
                if resolved_start > signed_len || resolved_end < 0 {
                    return Ok(empty);
                }
                let start = resolved_start.max(0) as usize;
                let end = resolved_end.min(signed_len) as usize;
                Ok(start..end)
            }
        }
    }

    /// Returns the part of `input` selected by the indices.
    pub fn slice_bytes<'a>(&self, input: &'a [u8]) -> Result<&'a [u8], SliceError> {
        let range = self.range(input)?;
        Ok(&input[range])
    }

    /// Returns the part of `input` selected by the indices, which are byte
    /// offsets. Fails with [`SliceError::NotCharBoundary`] when either end of
    /// the range falls inside a multi-byte character.
    pub fn slice_str<'a>(&self, input: &'a str) -> Result<&'a str, SliceError> {
        let range = self.range(input.as_bytes())?;
        for index in [range.start, range.end] {
            if !input.is_char_boundary(index) {
                return Err(SliceError::NotCharBoundary {
                    index,
                    input: input.to_string(),
                });
            }
        }
        Ok(&input[range])
    }
}

/// Formats the indices the way they are written on the command line.
impl fmt::Display for Slicer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            Bounds::Whole => write!(f, ":"),
            Bounds::From(start) => write!(f, "{}", start),
            Bounds::Range(start, end) => write!(f, "{}:{}", start, end),
        }
    }
}

fn resolve(index: isize, len: isize) -> isize {
    if index < 0 {
        len + index
    } else {
        index
    }
}
