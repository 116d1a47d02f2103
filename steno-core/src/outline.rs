use crate::Stroke;
use std::fmt;

/// A non-empty ordered sequence of strokes, used as a dictionary key.
///
/// Outlines are pure value types: `prepend` and `concat` always return a new outline rather than
/// mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outline(Vec<Stroke>);

impl Outline {
    pub fn single(stroke: Stroke) -> Self {
        Self(vec![stroke])
    }

    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        debug_assert!(!strokes.is_empty(), "an outline must contain at least one stroke");
        Self(strokes)
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new outline with `stroke` inserted at the front.
    pub fn prepend(&self, stroke: Stroke) -> Self {
        let mut strokes = Vec::with_capacity(self.0.len() + 1);
        strokes.push(stroke);
        strokes.extend_from_slice(&self.0);
        Self(strokes)
    }

    /// Returns a new outline that is `self` followed by `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let mut strokes = Vec::with_capacity(self.0.len() + other.0.len());
        strokes.extend_from_slice(&self.0);
        strokes.extend_from_slice(&other.0);
        Self(strokes)
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stroke) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", stroke)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_string_joins_with_slash() {
        let outline = Outline::from_strokes(vec![Stroke::parse("STPH"), Stroke::parse("TPH")]);
        assert_eq!(outline.to_string(), "STPH/TPH");
    }

    #[test]
    fn prepend_and_concat_are_pure() {
        let a = Outline::single(Stroke::parse("S"));
        let b = a.prepend(Stroke::parse("T"));
        assert_eq!(a.to_string(), "S");
        assert_eq!(b.to_string(), "T/S");

        let c = a.concat(&b);
        assert_eq!(c.to_string(), "S/T/S");
    }
}
