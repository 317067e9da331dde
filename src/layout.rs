//! Showcase panel placement.
//!
//! Showcase panels alternate which side the code sample sits on. The choice is
//! a function of the panel's position in the catalog and nothing else, so the
//! same catalog always lays out the same way.
//!
//! ```text
//! index 0  [ code | text ]   code-left
//! index 1  [ text | code ]   code-right
//! index 2  [ code | text ]   code-left
//! ```

use serde::Serialize;

/// Which side of the panel the code sample renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    CodeLeft,
    CodeRight,
}

impl Orientation {
    /// CSS class applied to the panel row.
    pub fn css_class(self) -> &'static str {
        match self {
            Orientation::CodeLeft => "code-left",
            Orientation::CodeRight => "code-right",
        }
    }

    pub fn is_code_left(self) -> bool {
        self == Orientation::CodeLeft
    }
}

/// Layout decision for a single showcase panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayoutSlot {
    pub orientation: Orientation,
}

/// Layout slot for the showcase at zero-based catalog position `index`.
///
/// Even positions put the code on the left, odd positions on the right.
pub fn slot_for(index: usize) -> LayoutSlot {
    let orientation = if index % 2 == 0 {
        Orientation::CodeLeft
    } else {
        Orientation::CodeRight
    };
    LayoutSlot { orientation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_indices_are_code_left() {
        for i in [0, 2, 4, 100, usize::MAX - 1] {
            assert_eq!(slot_for(i).orientation, Orientation::CodeLeft, "index {i}");
        }
    }

    #[test]
    fn odd_indices_are_code_right() {
        for i in [1, 3, 5, 101, usize::MAX] {
            assert_eq!(slot_for(i).orientation, Orientation::CodeRight, "index {i}");
        }
    }

    #[test]
    fn three_panels_alternate() {
        let orientations: Vec<_> = (0..3).map(|i| slot_for(i).orientation).collect();
        assert_eq!(
            orientations,
            vec![
                Orientation::CodeLeft,
                Orientation::CodeRight,
                Orientation::CodeLeft
            ]
        );
    }

    #[test]
    fn slot_is_stable_across_calls() {
        for i in 0..16 {
            assert_eq!(slot_for(i), slot_for(i));
        }
    }

    #[test]
    fn css_classes() {
        assert_eq!(Orientation::CodeLeft.css_class(), "code-left");
        assert_eq!(Orientation::CodeRight.css_class(), "code-right");
        assert!(Orientation::CodeLeft.is_code_left());
        assert!(!Orientation::CodeRight.is_code_left());
    }

    #[test]
    fn orientation_serializes_snake_case() {
        let json = serde_json::to_string(&slot_for(1)).unwrap();
        assert_eq!(json, r#"{"orientation":"code_right"}"#);
    }
}
