use std::fmt;

/// Values processed by the demo run
pub const DEFAULT_VALUES: [i32; 5] = [1, 2, 3, 4, 5];

/// An ordered, fixed list of integers.
///
/// The backing storage is a boxed slice, so once constructed the sequence can
/// neither grow, shrink, nor be mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Box<[i32]>,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into().into_boxed_slice(),
        }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.values.iter()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(DEFAULT_VALUES)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}
