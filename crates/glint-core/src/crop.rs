#![forbid(unsafe_code)]

//! Cropped-rectangle layout algebra.
//!
//! Every widget-shaped thing composes through a [`CroppedRectangle`]: a
//! local coordinate relative to its parent's content origin, plus the
//! clipping [`Margin`] accumulated against the parent's *visible* bounds.
//! Clipping never shrinks the stored coordinate; the original geometry
//! stays available for relayout when the parent later grows, while
//! rendering and hit-testing consult the margin-adjusted view bounds.
//!
//! # Invariants
//!
//! 1. Margin components are ≥ 0 after a recomputation pass.
//! 2. Margins resolve top-down: a node's margin is computed against its
//!    parent's already-resolved margin, so [`Hierarchy::update_view`]
//!    visits parents strictly before children.
//! 3. Cached absolute positions are valid only after an update pass.
//! 4. A rectangle whose view bounds are non-positive in either extent is
//!    fully clipped.
//!
//! # Two-phase layout
//!
//! Coordinate mutators only replace the stored coordinate. Nothing is
//! recomputed until the owner runs [`Hierarchy::update_view`], which lets
//! callers batch arbitrary mutations and pay for one pass.

use crate::align::Align;
use crate::geometry::{Coord, Margin, Point, Rect, Size};
use slab::Slab;
use tracing::trace;

/// Handle to a rectangle slot in a [`Hierarchy`].
///
/// A plain index: holding one never keeps the node alive, and a child's
/// handle to its parent is observational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(usize);

/// The parent-side geometry a child is cropped against: the parent's
/// extent and its already-resolved margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParentGeometry {
    pub size: Size,
    pub margin: Margin,
}

impl ParentGeometry {
    /// Left edge of the parent's visible interior.
    #[inline]
    pub const fn view_left(&self) -> i32 {
        self.margin.left
    }

    /// Right edge of the parent's visible interior.
    #[inline]
    pub const fn view_right(&self) -> i32 {
        self.size.width - self.margin.right
    }

    #[inline]
    pub const fn view_top(&self) -> i32 {
        self.margin.top
    }

    #[inline]
    pub const fn view_bottom(&self) -> i32 {
        self.size.height - self.margin.bottom
    }
}

/// A rectangle with alignment, visibility, and accumulated clipping state.
#[derive(Debug, Clone)]
pub struct CroppedRectangle {
    coord: Coord,
    align: Align,
    margin: Margin,
    absolute_position: Point,
    visible: bool,
    parent: Option<WidgetId>,
}

impl CroppedRectangle {
    pub fn new(coord: Coord, align: Align, parent: Option<WidgetId>) -> Self {
        Self {
            coord,
            align,
            margin: Margin::ZERO,
            absolute_position: Point::ZERO,
            visible: true,
            parent,
        }
    }

    /// Replace only the position, leaving the extent untouched.
    ///
    /// No recomputation happens here; run the owning hierarchy's update
    /// pass afterwards.
    pub fn set_position(&mut self, position: Point) {
        self.coord = self.coord.with_position(position);
    }

    /// Replace the whole coordinate.
    pub fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }

    /// Replace only the extent, leaving the position untouched.
    pub fn set_size(&mut self, size: Size) {
        self.coord = self.coord.with_size(size);
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.coord.point()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.coord.size()
    }

    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    #[inline]
    pub fn align(&self) -> Align {
        self.align
    }

    // Raw (unclipped) edges, local to the parent's content origin.

    #[inline]
    pub fn left(&self) -> i32 {
        self.coord.left()
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.coord.right()
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.coord.top()
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.coord.bottom()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.coord.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.coord.height
    }

    /// Screen-space origin, cached by the last update pass.
    #[inline]
    pub fn absolute_position(&self) -> Point {
        self.absolute_position
    }

    #[inline]
    pub fn absolute_left(&self) -> i32 {
        self.absolute_position.x
    }

    #[inline]
    pub fn absolute_top(&self) -> i32 {
        self.absolute_position.y
    }

    /// Screen-space rectangle in edge form.
    pub fn absolute_rect(&self) -> Rect {
        Rect::new(
            self.absolute_position.x,
            self.absolute_position.y,
            self.absolute_position.x + self.coord.width,
            self.absolute_position.y + self.coord.height,
        )
    }

    /// Screen-space coordinate (origin + extent).
    pub fn absolute_coord(&self) -> Coord {
        Coord::new(
            self.absolute_position.x,
            self.absolute_position.y,
            self.coord.width,
            self.coord.height,
        )
    }

    /// Whether any side is currently cropped by the parent.
    #[inline]
    pub fn is_cropped(&self) -> bool {
        self.margin.any()
    }

    #[inline]
    pub fn margin(&self) -> Margin {
        self.margin
    }

    #[inline]
    pub fn margin_left(&self) -> i32 {
        self.margin.left
    }

    #[inline]
    pub fn margin_right(&self) -> i32 {
        self.margin.right
    }

    #[inline]
    pub fn margin_top(&self) -> i32 {
        self.margin.top
    }

    #[inline]
    pub fn margin_bottom(&self) -> i32 {
        self.margin.bottom
    }

    // Visible (margin-adjusted) bounds, local to the parent's content
    // origin.

    #[inline]
    pub fn view_left(&self) -> i32 {
        self.coord.left() + self.margin.left
    }

    #[inline]
    pub fn view_right(&self) -> i32 {
        self.coord.right() - self.margin.right
    }

    #[inline]
    pub fn view_top(&self) -> i32 {
        self.coord.top() + self.margin.top
    }

    #[inline]
    pub fn view_bottom(&self) -> i32 {
        self.coord.bottom() - self.margin.bottom
    }

    #[inline]
    pub fn view_width(&self) -> i32 {
        self.coord.width - self.margin.horizontal_sum()
    }

    #[inline]
    pub fn view_height(&self) -> i32 {
        self.coord.height - self.margin.vertical_sum()
    }

    /// Hit test against the view bounds, inclusive on all four edges.
    /// The point is in the parent's content space, like the coordinate.
    pub fn check_point(&self, x: i32, y: i32) -> bool {
        !(self.view_left() > x
            || self.view_top() > y
            || self.view_right() < x
            || self.view_bottom() < y)
    }

    /// Recompute all four margin sides against the parent's view bounds.
    ///
    /// A side's margin is how far this rectangle overflows that side, or
    /// zero when it is inside. Returns whether any side overflows. Called
    /// by the update pass once the parent's own margin is resolved.
    pub fn check_margin(&mut self, parent: ParentGeometry) -> bool {
        let mut cropped = false;

        if self.left() < parent.view_left() {
            self.margin.left = parent.view_left() - self.left();
            cropped = true;
        } else {
            self.margin.left = 0;
        }

        if self.right() > parent.view_right() {
            self.margin.right = self.right() - parent.view_right();
            cropped = true;
        } else {
            self.margin.right = 0;
        }

        if self.top() < parent.view_top() {
            self.margin.top = parent.view_top() - self.top();
            cropped = true;
        } else {
            self.margin.top = 0;
        }

        if self.bottom() > parent.view_bottom() {
            self.margin.bottom = self.bottom() - parent.view_bottom();
            cropped = true;
        } else {
            self.margin.bottom = 0;
        }

        cropped
    }

    /// Whether this rectangle has zero overlap with the parent's view
    /// bounds on either axis. Strict inequalities: edges exactly touching
    /// still count as inside.
    pub fn check_outside(&self, parent: ParentGeometry) -> bool {
        self.right() < parent.view_left()
            || self.left() > parent.view_right()
            || self.bottom() < parent.view_top()
            || self.top() > parent.view_bottom()
    }

    fn parent_geometry(&self) -> ParentGeometry {
        ParentGeometry {
            size: self.coord.size(),
            margin: self.margin,
        }
    }
}

#[derive(Debug)]
struct Node {
    rect: CroppedRectangle,
    children: Vec<WidgetId>,
}

/// The hierarchy table: a slot arena of [`CroppedRectangle`]s with their
/// parent/child wiring, plus the top-down view-update pass.
#[derive(Debug, Default)]
pub struct Hierarchy {
    nodes: Slab<Node>,
    roots: Vec<WidgetId>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rectangle, optionally under a parent.
    ///
    /// # Panics
    ///
    /// Panics if `parent` refers to a removed slot.
    pub fn insert(&mut self, coord: Coord, align: Align, parent: Option<WidgetId>) -> WidgetId {
        if let Some(parent) = parent {
            assert!(
                self.nodes.contains(parent.0),
                "parent widget is not in the hierarchy"
            );
        }
        let id = WidgetId(self.nodes.insert(Node {
            rect: CroppedRectangle::new(coord, align, parent),
            children: Vec::new(),
        }));
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Remove a rectangle and its whole subtree. Stale ids are ignored.
    pub fn remove(&mut self, id: WidgetId) {
        if !self.nodes.contains(id.0) {
            return;
        }
        match self.nodes[id.0].rect.parent {
            Some(parent) => self.nodes[parent.0].children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let node = self.nodes.remove(next.0);
            pending.extend(node.children);
        }
    }

    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: WidgetId) -> Option<&CroppedRectangle> {
        self.nodes.get(id.0).map(|n| &n.rect)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut CroppedRectangle> {
        self.nodes.get_mut(id.0).map(|n| &mut n.rect)
    }

    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    pub fn children(&self, id: WidgetId) -> Option<&[WidgetId]> {
        self.nodes.get(id.0).map(|n| n.children.as_slice())
    }

    /// Two-phase position mutation; see [`CroppedRectangle::set_position`].
    ///
    /// # Panics
    ///
    /// Panics if `id` refers to a removed slot; same for the other
    /// coordinate mutators.
    pub fn set_position(&mut self, id: WidgetId, position: Point) {
        self.nodes[id.0].rect.set_position(position);
    }

    pub fn set_coord(&mut self, id: WidgetId, coord: Coord) {
        self.nodes[id.0].rect.set_coord(coord);
    }

    pub fn set_size(&mut self, id: WidgetId, size: Size) {
        self.nodes[id.0].rect.set_size(size);
    }

    /// Resize a node and re-place its direct children per their alignment.
    ///
    /// Children's coordinates are adjusted immediately (they need the old
    /// extent); margins and absolute positions still wait for
    /// [`update_view`](Self::update_view).
    pub fn resize(&mut self, id: WidgetId, size: Size) {
        let old = self.nodes[id.0].rect.size();
        self.nodes[id.0].rect.set_size(size);
        let children = self.nodes[id.0].children.clone();
        for child in children {
            let node = &mut self.nodes[child.0];
            let adjusted = node.rect.align().adjust(node.rect.coord(), old, size);
            node.rect.set_coord(adjusted);
        }
    }

    /// Recompute absolute positions and margins for the whole forest,
    /// parents strictly before children.
    ///
    /// Roots get a zero margin and their own coordinate as the absolute
    /// origin; every other node is cropped against its parent's freshly
    /// resolved view bounds.
    pub fn update_view(&mut self) {
        let mut stack: Vec<(WidgetId, Option<(Point, ParentGeometry)>)> =
            self.roots.iter().rev().map(|id| (*id, None)).collect();
        let mut visited = 0usize;

        while let Some((id, inherited)) = stack.pop() {
            let node = &mut self.nodes[id.0];
            match inherited {
                None => {
                    node.rect.absolute_position = node.rect.coord.point();
                    node.rect.margin = Margin::ZERO;
                }
                Some((origin, parent)) => {
                    node.rect.absolute_position = origin + node.rect.coord.point();
                    node.rect.check_margin(parent);
                }
            }
            visited += 1;

            let snapshot = (node.rect.absolute_position, node.rect.parent_geometry());
            for child in node.children.iter().rev() {
                stack.push((*child, Some(snapshot)));
            }
        }

        trace!(nodes = visited, "view update pass");
    }

    /// Whether the node's projection is entirely outside its parent's
    /// view, or its own view bounds have collapsed. Roots are never
    /// fully clipped.
    pub fn is_fully_clipped(&self, id: WidgetId) -> bool {
        let node = &self.nodes[id.0];
        let Some(parent) = node.rect.parent else {
            return false;
        };
        let geometry = self.nodes[parent.0].rect.parent_geometry();
        node.rect.check_outside(geometry)
            || node.rect.view_width() <= 0
            || node.rect.view_height() <= 0
    }

    /// Hit test a node against a screen-space point, using the cached
    /// absolute position from the last update pass.
    pub fn hit_test(&self, id: WidgetId, point: Point) -> bool {
        let rect = &self.nodes[id.0].rect;
        let local = point - (rect.absolute_position - rect.coord.point());
        rect.check_point(local.x, local.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_100() -> ParentGeometry {
        ParentGeometry {
            size: Size::new(100, 100),
            margin: Margin::ZERO,
        }
    }

    fn rect(coord: Coord) -> CroppedRectangle {
        CroppedRectangle::new(coord, Align::default(), None)
    }

    #[test]
    fn inside_rect_has_no_margin() {
        let mut r = rect(Coord::new(10, 10, 30, 30));
        assert!(!r.check_margin(parent_100()));
        assert!(!r.is_cropped());
        assert_eq!(r.margin(), Margin::ZERO);
    }

    #[test]
    fn margin_measures_overflow_per_side() {
        let mut r = rect(Coord::new(-10, -5, 120, 50));
        assert!(r.check_margin(parent_100()));
        assert_eq!(r.margin(), Margin::new(10, 5, 10, 0));
        assert_eq!(r.view_left(), 0);
        assert_eq!(r.view_top(), 0);
        assert_eq!(r.view_right(), 100);
        assert_eq!(r.view_bottom(), 45);
    }

    #[test]
    fn view_extent_identity_after_recompute() {
        let mut r = rect(Coord::new(-20, 40, 150, 90));
        r.check_margin(parent_100());
        assert_eq!(r.view_width(), r.width() - r.margin_left() - r.margin_right());
        assert_eq!(r.view_height(), r.height() - r.margin_top() - r.margin_bottom());
    }

    #[test]
    fn margin_respects_parent_margin() {
        // parent itself cropped 15 off its left: child must clear that too
        let parent = ParentGeometry {
            size: Size::new(100, 100),
            margin: Margin::new(15, 0, 0, 0),
        };
        let mut r = rect(Coord::new(5, 10, 30, 30));
        assert!(r.check_margin(parent));
        assert_eq!(r.margin_left(), 10);
    }

    #[test]
    fn recompute_clears_stale_margin() {
        let mut r = rect(Coord::new(-10, 0, 50, 50));
        r.check_margin(parent_100());
        assert_eq!(r.margin_left(), 10);
        r.set_position(Point::new(10, 0));
        assert!(!r.check_margin(parent_100()));
        assert_eq!(r.margin(), Margin::ZERO);
    }

    #[test]
    fn outside_requires_zero_overlap() {
        let p = parent_100();
        assert!(rect(Coord::new(-60, 0, 50, 50)).check_outside(p));
        assert!(rect(Coord::new(101, 0, 50, 50)).check_outside(p));
        assert!(rect(Coord::new(0, -60, 50, 50)).check_outside(p));
        assert!(rect(Coord::new(0, 101, 50, 50)).check_outside(p));
        assert!(!rect(Coord::new(25, 25, 50, 50)).check_outside(p));
    }

    #[test]
    fn touching_edge_is_not_outside() {
        let p = parent_100();
        // right edge lands exactly on the parent's left view edge
        assert!(!rect(Coord::new(-50, 0, 50, 50)).check_outside(p));
        // left edge exactly on the parent's right view edge
        assert!(!rect(Coord::new(100, 0, 50, 50)).check_outside(p));
        // one past either way is out
        assert!(rect(Coord::new(-51, 0, 50, 50)).check_outside(p));
        assert!(rect(Coord::new(101, 0, 50, 50)).check_outside(p));
    }

    #[test]
    fn check_point_inclusive_on_all_edges() {
        let mut r = rect(Coord::new(10, 10, 40, 40));
        r.check_margin(parent_100());
        assert!(r.check_point(10, 10));
        assert!(r.check_point(50, 50));
        assert!(r.check_point(10, 50));
        assert!(r.check_point(50, 10));
        assert!(!r.check_point(9, 10));
        assert!(!r.check_point(51, 50));
    }

    #[test]
    fn check_point_uses_view_not_raw_bounds() {
        let mut r = rect(Coord::new(-10, 0, 50, 50));
        r.check_margin(parent_100());
        // raw left is -10, visible left is 0
        assert!(!r.check_point(-5, 10));
        assert!(r.check_point(0, 10));
    }

    #[test]
    fn mutators_are_two_phase() {
        let mut r = rect(Coord::new(0, 0, 50, 50));
        r.check_margin(parent_100());
        r.set_position(Point::new(-20, 0));
        // margin is stale until the next pass
        assert_eq!(r.margin(), Margin::ZERO);
        assert_eq!(r.coord(), Coord::new(-20, 0, 50, 50));
        r.check_margin(parent_100());
        assert_eq!(r.margin_left(), 20);
    }

    #[test]
    fn set_position_preserves_size() {
        let mut r = rect(Coord::new(1, 2, 30, 40));
        r.set_position(Point::new(5, 6));
        assert_eq!(r.coord(), Coord::new(5, 6, 30, 40));
        r.set_size(Size::new(7, 8));
        assert_eq!(r.coord(), Coord::new(5, 6, 7, 8));
    }

    #[test]
    fn show_hide() {
        let mut r = rect(Coord::ZERO);
        assert!(r.is_visible());
        r.hide();
        assert!(!r.is_visible());
        r.show();
        assert!(r.is_visible());
    }

    #[test]
    fn hierarchy_absolute_positions_chain() {
        let mut h = Hierarchy::new();
        let root = h.insert(Coord::new(5, 5, 200, 200), Align::default(), None);
        let child = h.insert(Coord::new(10, 20, 100, 100), Align::default(), Some(root));
        let grand = h.insert(Coord::new(30, 40, 20, 20), Align::default(), Some(child));
        h.update_view();

        assert_eq!(h.get(root).unwrap().absolute_position(), Point::new(5, 5));
        assert_eq!(h.get(child).unwrap().absolute_position(), Point::new(15, 25));
        assert_eq!(h.get(grand).unwrap().absolute_position(), Point::new(45, 65));
        assert_eq!(
            h.get(grand).unwrap().absolute_rect(),
            Rect::new(45, 65, 65, 85)
        );
        assert_eq!(
            h.get(grand).unwrap().absolute_coord(),
            Coord::new(45, 65, 20, 20)
        );
    }

    #[test]
    fn margin_propagates_one_level_at_a_time() {
        let mut h = Hierarchy::new();
        let root = h.insert(Coord::new(0, 0, 100, 100), Align::default(), None);
        // panel pokes 30 out of the root's left edge
        let panel = h.insert(Coord::new(-30, 0, 80, 80), Align::default(), Some(root));
        // label sits at the panel's left edge: visible part starts where
        // the panel's resolved margin ends
        let label = h.insert(Coord::new(0, 0, 40, 20), Align::default(), Some(panel));
        h.update_view();

        assert_eq!(h.get(panel).unwrap().margin_left(), 30);
        assert_eq!(h.get(label).unwrap().margin_left(), 30);
        assert_eq!(h.get(label).unwrap().view_width(), 10);
    }

    #[test]
    fn update_after_parent_move_reclips_children() {
        let mut h = Hierarchy::new();
        let root = h.insert(Coord::new(0, 0, 100, 100), Align::default(), None);
        let child = h.insert(Coord::new(10, 10, 50, 50), Align::default(), Some(root));
        h.update_view();
        assert!(!h.get(child).unwrap().is_cropped());

        h.set_position(child, Point::new(80, 10));
        h.update_view();
        assert_eq!(h.get(child).unwrap().margin_right(), 30);
        assert_eq!(h.get(child).unwrap().view_width(), 20);
    }

    #[test]
    fn resize_applies_alignment_to_children() {
        let mut h = Hierarchy::new();
        let root = h.insert(Coord::new(0, 0, 100, 100), Align::default(), None);
        let pinned = h.insert(
            Coord::new(70, 10, 20, 20),
            Align::RIGHT | Align::TOP,
            Some(root),
        );
        let stretchy = h.insert(Coord::new(10, 10, 80, 80), Align::STRETCH, Some(root));
        h.resize(root, Size::new(140, 60));

        assert_eq!(h.get(pinned).unwrap().coord(), Coord::new(110, 10, 20, 20));
        assert_eq!(h.get(stretchy).unwrap().coord(), Coord::new(10, 10, 120, 40));
        assert_eq!(h.get(root).unwrap().size(), Size::new(140, 60));
    }

    #[test]
    fn fully_clipped_when_outside_or_collapsed() {
        let mut h = Hierarchy::new();
        let root = h.insert(Coord::new(0, 0, 100, 100), Align::default(), None);
        let gone = h.insert(Coord::new(-200, 0, 50, 50), Align::default(), Some(root));
        let fine = h.insert(Coord::new(10, 10, 50, 50), Align::default(), Some(root));
        h.update_view();

        assert!(h.is_fully_clipped(gone));
        assert!(!h.is_fully_clipped(fine));
        assert!(!h.is_fully_clipped(root));
    }

    #[test]
    fn remove_takes_the_subtree() {
        let mut h = Hierarchy::new();
        let root = h.insert(Coord::new(0, 0, 100, 100), Align::default(), None);
        let child = h.insert(Coord::new(0, 0, 10, 10), Align::default(), Some(root));
        let grand = h.insert(Coord::new(0, 0, 5, 5), Align::default(), Some(child));
        let other = h.insert(Coord::new(0, 0, 10, 10), Align::default(), Some(root));

        h.remove(child);
        assert!(!h.contains(child));
        assert!(!h.contains(grand));
        assert!(h.contains(root));
        assert!(h.contains(other));
        assert_eq!(h.children(root).unwrap(), &[other][..]);

        // removing again is a no-op
        h.remove(child);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn removing_child_leaves_parent_alive() {
        let mut h = Hierarchy::new();
        let root = h.insert(Coord::new(0, 0, 100, 100), Align::default(), None);
        let child = h.insert(Coord::new(0, 0, 10, 10), Align::default(), Some(root));
        assert_eq!(h.get(child).unwrap().parent(), Some(root));
        h.remove(child);
        assert!(h.contains(root));
        h.update_view();
    }

    #[test]
    fn hit_test_in_screen_space() {
        let mut h = Hierarchy::new();
        let root = h.insert(Coord::new(0, 0, 200, 200), Align::default(), None);
        let child = h.insert(Coord::new(50, 50, 100, 100), Align::default(), Some(root));
        h.update_view();

        assert!(h.hit_test(child, Point::new(50, 50)));
        assert!(h.hit_test(child, Point::new(150, 150)));
        assert!(!h.hit_test(child, Point::new(49, 50)));
        assert!(!h.hit_test(child, Point::new(151, 150)));
    }
}
