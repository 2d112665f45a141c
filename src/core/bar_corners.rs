use serde::{Deserialize, Serialize};

use crate::core::{BarBuffer, BarCornerType, BarShadowType};

/// Set of rounded rect corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RectCorners(u8);

impl RectCorners {
    pub const NONE: Self = Self(0);
    pub const TOP_LEFT: Self = Self(1);
    pub const TOP_RIGHT: Self = Self(1 << 1);
    pub const BOTTOM_LEFT: Self = Self(1 << 2);
    pub const BOTTOM_RIGHT: Self = Self(1 << 3);
    pub const TOP: Self = Self(Self::TOP_LEFT.0 | Self::TOP_RIGHT.0);
    pub const BOTTOM: Self = Self(Self::BOTTOM_LEFT.0 | Self::BOTTOM_RIGHT.0);
    pub const ALL: Self = Self(Self::TOP.0 | Self::BOTTOM.0);

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Stack-edge tags carried by one rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StackEdges {
    pub top: bool,
    pub bottom: bool,
}

impl StackEdges {
    pub const BOTH: Self = Self {
        top: true,
        bottom: true,
    };

    #[must_use]
    pub fn of_buffer_rect(buffer: &BarBuffer, index: usize) -> Self {
        Self {
            top: buffer.is_stack_top(index),
            bottom: buffer.is_stack_bottom(index),
        }
    }

    /// Tags of a highlighted bar or stack segment.
    ///
    /// Whole bars carry both tags. A segment of an entry with `stack_len`
    /// components is tagged like its buffer rect.
    #[must_use]
    pub fn of_highlight(segment: Option<usize>, stack_len: usize, inverted: bool) -> Self {
        let Some(segment) = segment else {
            return Self::BOTH;
        };
        let lower = segment == 0;
        let upper = segment + 1 == stack_len;
        if inverted {
            Self {
                top: lower,
                bottom: upper,
            }
        } else {
            Self {
                top: upper,
                bottom: lower,
            }
        }
    }
}

/// Rounded corners of a bar rect for the data set's corner style.
#[must_use]
pub fn classify_bar_corners(corner_type: BarCornerType, edges: StackEdges) -> RectCorners {
    match corner_type {
        BarCornerType::All => RectCorners::ALL,
        BarCornerType::Top if edges.top => RectCorners::TOP,
        BarCornerType::Bottom if edges.bottom => RectCorners::BOTTOM,
        _ => RectCorners::NONE,
    }
}

#[must_use]
pub fn classify_shadow_corners(shadow_type: BarShadowType) -> RectCorners {
    match shadow_type {
        BarShadowType::TopCorner => RectCorners::TOP,
        BarShadowType::BottomCorner => RectCorners::BOTTOM,
        BarShadowType::None => RectCorners::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::{RectCorners, StackEdges, classify_bar_corners, classify_shadow_corners};
    use crate::core::{BarCornerType, BarShadowType};

    #[test]
    fn all_rounds_regardless_of_tags() {
        assert_eq!(
            classify_bar_corners(BarCornerType::All, StackEdges::default()),
            RectCorners::ALL
        );
    }

    #[test]
    fn top_and_bottom_need_matching_tag() {
        let top_only = StackEdges {
            top: true,
            bottom: false,
        };
        assert_eq!(classify_bar_corners(BarCornerType::Top, top_only), RectCorners::TOP);
        assert_eq!(classify_bar_corners(BarCornerType::Bottom, top_only), RectCorners::NONE);
        assert_eq!(
            classify_bar_corners(BarCornerType::Bottom, StackEdges::BOTH),
            RectCorners::BOTTOM
        );
        assert_eq!(classify_bar_corners(BarCornerType::None, StackEdges::BOTH), RectCorners::NONE);
    }

    #[test]
    fn highlight_segment_tags_follow_inversion() {
        assert_eq!(StackEdges::of_highlight(None, 3, false), StackEdges::BOTH);
        let first = StackEdges::of_highlight(Some(0), 3, false);
        assert!(first.bottom && !first.top);
        let last_inverted = StackEdges::of_highlight(Some(2), 3, true);
        assert!(last_inverted.bottom && !last_inverted.top);
        let middle = StackEdges::of_highlight(Some(1), 3, false);
        assert_eq!(middle, StackEdges::default());
    }

    #[test]
    fn corner_sets_compose() {
        assert!(RectCorners::ALL.contains(RectCorners::TOP_LEFT));
        assert!(!RectCorners::TOP.contains(RectCorners::BOTTOM_LEFT));
        assert_eq!(RectCorners::TOP.union(RectCorners::BOTTOM), RectCorners::ALL);
        assert_eq!(classify_shadow_corners(BarShadowType::BottomCorner), RectCorners::BOTTOM);
        assert!(classify_shadow_corners(BarShadowType::None).is_empty());
    }
}
