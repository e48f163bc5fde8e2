#![forbid(unsafe_code)]

//! Widget alignment flags.
//!
//! An axis with a single anchor bit pins the widget to that edge of its
//! parent; both bits on an axis stretch it with the parent; neither bit
//! centers it. The default pins to the top-left corner.

use crate::geometry::{Coord, Size};
use bitflags::bitflags;

bitflags! {
    /// Horizontal and vertical anchoring of a widget inside its parent.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Align: u8 {
        /// Keep a fixed distance to the parent's left edge.
        const LEFT = 1 << 0;
        /// Keep a fixed distance to the parent's right edge.
        const RIGHT = 1 << 1;
        /// Keep a fixed distance to the parent's top edge.
        const TOP = 1 << 2;
        /// Keep a fixed distance to the parent's bottom edge.
        const BOTTOM = 1 << 3;

        /// Grow and shrink horizontally with the parent.
        const H_STRETCH = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Grow and shrink vertically with the parent.
        const V_STRETCH = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Grow and shrink with the parent on both axes.
        const STRETCH = Self::H_STRETCH.bits() | Self::V_STRETCH.bits();
    }
}

impl Default for Align {
    fn default() -> Self {
        Align::LEFT | Align::TOP
    }
}

impl Align {
    #[inline]
    pub fn is_h_stretch(&self) -> bool {
        self.contains(Align::H_STRETCH)
    }

    #[inline]
    pub fn is_v_stretch(&self) -> bool {
        self.contains(Align::V_STRETCH)
    }

    /// Neither horizontal bit set: centered on the x axis.
    #[inline]
    pub fn is_h_center(&self) -> bool {
        !self.intersects(Align::H_STRETCH)
    }

    /// Neither vertical bit set: centered on the y axis.
    #[inline]
    pub fn is_v_center(&self) -> bool {
        !self.intersects(Align::V_STRETCH)
    }

    /// Re-place a child coordinate after its parent resized.
    ///
    /// Dispatch per axis, stretch winning over a single anchor: stretch
    /// grows the child by the parent's delta, a right/bottom anchor shifts
    /// it by the delta, centering re-centers in the new extent, and a
    /// left/top anchor leaves it alone.
    #[must_use]
    pub fn adjust(&self, coord: Coord, old_parent: Size, new_parent: Size) -> Coord {
        let mut out = coord;
        let dw = new_parent.width - old_parent.width;
        let dh = new_parent.height - old_parent.height;

        if self.is_h_stretch() {
            out.width += dw;
        } else if self.contains(Align::RIGHT) {
            out.x += dw;
        } else if self.is_h_center() {
            out.x = (new_parent.width - out.width) / 2;
        }

        if self.is_v_stretch() {
            out.height += dh;
        } else if self.contains(Align::BOTTOM) {
            out.y += dh;
        } else if self.is_v_center() {
            out.y = (new_parent.height - out.height) / 2;
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Coord, Size};

    const OLD: Size = Size::new(100, 100);
    const NEW: Size = Size::new(140, 60);

    #[test]
    fn left_top_anchor_is_inert() {
        let c = Coord::new(10, 10, 20, 20);
        assert_eq!(Align::default().adjust(c, OLD, NEW), c);
    }

    #[test]
    fn right_anchor_follows_parent_growth() {
        let align = Align::RIGHT | Align::TOP;
        let c = Coord::new(70, 10, 20, 20);
        assert_eq!(align.adjust(c, OLD, NEW), Coord::new(110, 10, 20, 20));
    }

    #[test]
    fn bottom_anchor_follows_parent_shrink() {
        let align = Align::LEFT | Align::BOTTOM;
        let c = Coord::new(10, 70, 20, 20);
        assert_eq!(align.adjust(c, OLD, NEW), Coord::new(10, 30, 20, 20));
    }

    #[test]
    fn stretch_resizes_with_parent() {
        let c = Coord::new(10, 10, 80, 80);
        assert_eq!(Align::STRETCH.adjust(c, OLD, NEW), Coord::new(10, 10, 120, 40));
    }

    #[test]
    fn center_recenters_in_new_extent() {
        let align = Align::empty();
        let c = Coord::new(40, 40, 20, 20);
        assert_eq!(align.adjust(c, OLD, NEW), Coord::new(60, 20, 20, 20));
    }

    #[test]
    fn stretch_wins_over_anchor_bits() {
        // H_STRETCH contains RIGHT; the stretch branch must take it.
        let align = Align::H_STRETCH | Align::TOP;
        let c = Coord::new(10, 10, 80, 20);
        assert_eq!(align.adjust(c, OLD, NEW), Coord::new(10, 10, 120, 20));
    }

    #[test]
    fn default_is_top_left() {
        assert_eq!(Align::default(), Align::LEFT | Align::TOP);
    }
}
