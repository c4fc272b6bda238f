use std::fmt;

/// Renders `[ e0 e1 ... en ] `, for diagnostics only.
#[derive(Clone, Copy, Debug)]
pub struct SequenceDisplay<'a, T>(&'a [T]);

pub fn display_sequence<T: fmt::Display>(data: &[T]) -> SequenceDisplay<'_, T> {
    SequenceDisplay(data)
}

impl<T: fmt::Display> fmt::Display for SequenceDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for value in self.0 {
            write!(f, "{value} ")?;
        }
        f.write_str("] ")
    }
}
