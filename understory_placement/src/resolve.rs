// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution: natural position, flip, shift, and arrow.
//!
//! ## Candidate order
//!
//! Candidates are visited side-major: the preferred side, then its opposite
//! (when [`SideAvoidance::Flip`]), then the perpendicular sides (when a
//! [`FallbackAxis`] is set). Within a side the preferred alignment comes first,
//! then its opposite, then the remaining one (unless [`AlignAvoidance::None`]).
//!
//! The first candidate that fits inside the padded boundary wins. If none fits,
//! the candidate with the least overflow area wins; ties go to the earlier
//! candidate, so the preferred side is kept whenever it is no worse.

use kurbo::{Insets, Point, Rect, Size};

use crate::types::{
    Align, AlignAvoidance, ArrowOptions, ArrowPosition, FallbackAxis, PlacementRequest,
    PlacementResult, Side, SideAvoidance, TextDirection,
};

const EPSILON: f64 = 1e-6;

/// Compute where a popup of size `popup` goes relative to `anchor`.
///
/// Pure and allocation-free; cheap enough to run on every frame.
///
/// Degenerate input (a non-finite or zero-area anchor or boundary) yields a
/// popup centered in the boundary at the preferred side and alignment. The
/// result never contains `NaN` or infinities.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_placement::{compute_placement, PlacementRequest, Side};
///
/// let request = PlacementRequest {
///     side: Side::Bottom,
///     side_offset: 4.0,
///     collision_boundary: Rect::new(0.0, 0.0, 800.0, 600.0),
///     ..Default::default()
/// };
/// // Anchor hugging the bottom edge: the popup flips above it.
/// let anchor = Rect::new(100.0, 560.0, 180.0, 590.0);
/// let placed = compute_placement(anchor, Size::new(120.0, 80.0), &request);
/// assert_eq!(placed.side, Side::Top);
/// assert_eq!(placed.y, 560.0 - 4.0 - 80.0);
/// ```
pub fn compute_placement(anchor: Rect, popup: Size, request: &PlacementRequest) -> PlacementResult {
    let size = sanitize_size(popup);
    let boundary = request.collision_boundary;
    if is_degenerate(anchor) || is_degenerate(boundary) {
        return centered_fallback(anchor, size, request);
    }

    let req = Sanitized::new(request);
    let bounds = shrink(boundary, req.padding);
    let shift = request.collision_avoidance.align == AlignAvoidance::Shift;

    let mut best: Option<(Rect, Side, Align, Score)> = None;
    for side in side_order(request).into_iter().flatten() {
        for align in align_order(request).into_iter().flatten() {
            let mut rect = natural_rect(anchor, size, side, align, &req, request.direction);
            if shift {
                rect = shift_cross(rect, anchor, bounds, side, request.sticky);
            }
            let score = Score::of(rect, bounds);
            if score.fits() {
                return finish(anchor, rect, side, align, bounds, boundary, &req);
            }
            if best.is_none_or(|(_, _, _, b)| score.better_than(b)) {
                best = Some((rect, side, align, score));
            }
        }
    }

    // The preferred side is always visited, so `best` is set here.
    let (rect, side, align, _) = best.unwrap_or_else(|| {
        let rect = natural_rect(
            anchor,
            size,
            request.side,
            request.align,
            &req,
            request.direction,
        );
        (rect, request.side, request.align, Score::of(rect, bounds))
    });
    finish(anchor, rect, side, align, bounds, boundary, &req)
}

/// Request scalars with non-finite values replaced by zero.
#[derive(Copy, Clone, Debug)]
struct Sanitized {
    side_offset: f64,
    align_offset: f64,
    padding: Insets,
    arrow: Option<ArrowOptions>,
}

impl Sanitized {
    fn new(request: &PlacementRequest) -> Self {
        let p = request.collision_padding;
        Self {
            side_offset: finite_or_zero(request.side_offset),
            align_offset: finite_or_zero(request.align_offset),
            padding: Insets::new(
                finite_or_zero(p.x0).max(0.0),
                finite_or_zero(p.y0).max(0.0),
                finite_or_zero(p.x1).max(0.0),
                finite_or_zero(p.y1).max(0.0),
            ),
            arrow: request.arrow.map(|a| ArrowOptions {
                size: finite_or_zero(a.size).max(0.0),
                padding: finite_or_zero(a.padding).max(0.0),
            }),
        }
    }
}

/// Overflow of a candidate relative to the padded bounds.
#[derive(Copy, Clone, Debug)]
struct Score {
    /// Popup area outside the bounds.
    area: f64,
    /// Sum of per-edge overflow distances; separates candidates with equal area
    /// (notably zero-size popups).
    distance: f64,
}

impl Score {
    fn of(rect: Rect, bounds: Rect) -> Self {
        let left = (bounds.x0 - rect.x0).max(0.0);
        let top = (bounds.y0 - rect.y0).max(0.0);
        let right = (rect.x1 - bounds.x1).max(0.0);
        let bottom = (rect.y1 - bounds.y1).max(0.0);
        let ix = (rect.x1.min(bounds.x1) - rect.x0.max(bounds.x0)).max(0.0);
        let iy = (rect.y1.min(bounds.y1) - rect.y0.max(bounds.y0)).max(0.0);
        let area = (rect.width() * rect.height() - ix * iy).max(0.0);
        Self {
            area,
            distance: left + top + right + bottom,
        }
    }

    fn fits(self) -> bool {
        self.area <= EPSILON && self.distance <= EPSILON
    }

    fn better_than(self, other: Self) -> bool {
        if self.area + EPSILON < other.area {
            return true;
        }
        self.area <= other.area + EPSILON && self.distance + EPSILON < other.distance
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

fn sanitize_size(size: Size) -> Size {
    Size::new(
        finite_or_zero(size.width).max(0.0),
        finite_or_zero(size.height).max(0.0),
    )
}

fn is_degenerate(rect: Rect) -> bool {
    !rect.is_finite() || rect.width() <= 0.0 || rect.height() <= 0.0
}

/// Clamp without the `min <= max` precondition of `f64::clamp`; `lo` wins.
fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi).max(lo)
}

fn shrink(boundary: Rect, padding: Insets) -> Rect {
    let x0 = boundary.x0 + padding.x0;
    let y0 = boundary.y0 + padding.y0;
    Rect::new(
        x0,
        y0,
        (boundary.x1 - padding.x1).max(x0),
        (boundary.y1 - padding.y1).max(y0),
    )
}

fn side_order(request: &PlacementRequest) -> [Option<Side>; 4] {
    let side = request.side;
    let avoidance = request.collision_avoidance;
    if avoidance.side == SideAvoidance::None {
        return [Some(side), None, None, None];
    }
    let (first, second) = match (side.is_vertical(), avoidance.fallback_axis) {
        (_, FallbackAxis::None) => {
            return [Some(side), Some(side.opposite()), None, None];
        }
        (true, axis) => {
            // Inline-end is the right edge in LTR.
            let end_is_right = request.direction == TextDirection::Ltr;
            let end = if end_is_right { Side::Right } else { Side::Left };
            match axis {
                FallbackAxis::End => (end, end.opposite()),
                _ => (end.opposite(), end),
            }
        }
        (false, FallbackAxis::End) => (Side::Bottom, Side::Top),
        (false, _) => (Side::Top, Side::Bottom),
    };
    [Some(side), Some(side.opposite()), Some(first), Some(second)]
}

fn align_order(request: &PlacementRequest) -> [Option<Align>; 3] {
    let align = request.align;
    if request.collision_avoidance.align == AlignAvoidance::None {
        return [Some(align), None, None];
    }
    match align {
        Align::Start => [Some(Align::Start), Some(Align::End), Some(Align::Center)],
        Align::End => [Some(Align::End), Some(Align::Start), Some(Align::Center)],
        Align::Center => [Some(Align::Center), Some(Align::Start), Some(Align::End)],
    }
}

fn natural_rect(
    anchor: Rect,
    size: Size,
    side: Side,
    align: Align,
    req: &Sanitized,
    direction: TextDirection,
) -> Rect {
    let (w, h) = (size.width, size.height);
    let mirrored = side.is_vertical() && direction == TextDirection::Rtl;
    let physical = if mirrored { align.opposite() } else { align };

    // Offsets push inward from the aligned edge, so they flip with `End` and with RTL.
    let mut cross_offset = req.align_offset;
    if align == Align::End {
        cross_offset = -cross_offset;
    }
    if mirrored {
        cross_offset = -cross_offset;
    }

    let (x, y) = if side.is_vertical() {
        let x = match physical {
            Align::Start => anchor.x0,
            Align::Center => anchor.center().x - w / 2.0,
            Align::End => anchor.x1 - w,
        } + cross_offset;
        let y = match side {
            Side::Top => anchor.y0 - req.side_offset - h,
            _ => anchor.y1 + req.side_offset,
        };
        (x, y)
    } else {
        let y = match physical {
            Align::Start => anchor.y0,
            Align::Center => anchor.center().y - h / 2.0,
            Align::End => anchor.y1 - h,
        } + cross_offset;
        let x = match side {
            Side::Left => anchor.x0 - req.side_offset - w,
            _ => anchor.x1 + req.side_offset,
        };
        (x, y)
    };
    Rect::new(x, y, x + w, y + h)
}

/// Slide `rect` along the cross axis of `side` into `bounds`.
///
/// A popup larger than the bounds is pinned to the start edge. Unless
/// `sticky`, the slide never detaches the popup from the anchor's cross range.
fn shift_cross(rect: Rect, anchor: Rect, bounds: Rect, side: Side, sticky: bool) -> Rect {
    if side.is_vertical() {
        let w = rect.width();
        let mut x = clamp(rect.x0, bounds.x0, bounds.x1 - w);
        if !sticky {
            x = clamp(x, anchor.x0 - w, anchor.x1);
        }
        Rect::new(x, rect.y0, x + w, rect.y1)
    } else {
        let h = rect.height();
        let mut y = clamp(rect.y0, bounds.y0, bounds.y1 - h);
        if !sticky {
            y = clamp(y, anchor.y0 - h, anchor.y1);
        }
        Rect::new(rect.x0, y, rect.x1, y + h)
    }
}

fn arrow_position(anchor: Rect, rect: Rect, side: Side, arrow: ArrowOptions) -> ArrowPosition {
    let center = anchor.center();
    let (raw, len) = if side.is_vertical() {
        (center.x - rect.x0 - arrow.size / 2.0, rect.width())
    } else {
        (center.y - rect.y0 - arrow.size / 2.0, rect.height())
    };
    let lo = arrow.padding;
    let hi = (len - arrow.padding - arrow.size).max(lo);
    let offset = clamp(raw, lo, hi);
    let centered = offset <= raw + EPSILON && raw <= offset + EPSILON;
    if side.is_vertical() {
        ArrowPosition {
            x: Some(offset),
            y: None,
            centered,
        }
    } else {
        ArrowPosition {
            x: None,
            y: Some(offset),
            centered,
        }
    }
}

fn anchor_hidden(anchor: Rect, boundary: Rect) -> bool {
    anchor.x1 <= boundary.x0
        || anchor.x0 >= boundary.x1
        || anchor.y1 <= boundary.y0
        || anchor.y0 >= boundary.y1
}

fn finish(
    anchor: Rect,
    rect: Rect,
    side: Side,
    align: Align,
    bounds: Rect,
    boundary: Rect,
    req: &Sanitized,
) -> PlacementResult {
    let (available_width, available_height) = match side {
        Side::Top => (bounds.width(), anchor.y0 - req.side_offset - bounds.y0),
        Side::Bottom => (bounds.width(), bounds.y1 - anchor.y1 - req.side_offset),
        Side::Left => (anchor.x0 - req.side_offset - bounds.x0, bounds.height()),
        Side::Right => (bounds.x1 - anchor.x1 - req.side_offset, bounds.height()),
    };
    PlacementResult {
        x: rect.x0,
        y: rect.y0,
        side,
        align,
        arrow: req.arrow.map(|a| arrow_position(anchor, rect, side, a)),
        available_width: available_width.max(0.0),
        available_height: available_height.max(0.0),
        anchor_hidden: anchor_hidden(anchor, boundary),
    }
}

fn centered_fallback(anchor: Rect, size: Size, request: &PlacementRequest) -> PlacementResult {
    let boundary = request.collision_boundary;
    let area = if boundary.is_finite() {
        boundary.abs()
    } else if anchor.is_finite() {
        anchor.abs()
    } else {
        Rect::ZERO
    };
    let center: Point = area.center();
    PlacementResult {
        x: center.x - size.width / 2.0,
        y: center.y - size.height / 2.0,
        side: request.side,
        align: request.align,
        arrow: None,
        available_width: area.width(),
        available_height: area.height(),
        anchor_hidden: !anchor.is_finite()
            || (boundary.is_finite() && anchor_hidden(anchor.abs(), boundary.abs())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CollisionAvoidance;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    fn request(side: Side, align: Align) -> PlacementRequest {
        PlacementRequest {
            side,
            align,
            collision_boundary: VIEWPORT,
            ..Default::default()
        }
    }

    fn placed_rect(anchor: Rect, size: Size, req: &PlacementRequest) -> (PlacementResult, Rect) {
        let r = compute_placement(anchor, size, req);
        (r, r.rect(size))
    }

    #[test]
    fn natural_bottom_center() {
        let anchor = Rect::new(400.0, 100.0, 500.0, 130.0);
        let req = PlacementRequest {
            side_offset: 8.0,
            ..request(Side::Bottom, Align::Center)
        };
        let r = compute_placement(anchor, Size::new(200.0, 50.0), &req);
        assert_eq!(r.side, Side::Bottom, "no collision keeps the side");
        assert_eq!(r.align, Align::Center, "no collision keeps the align");
        assert_eq!(r.x, 350.0, "centered on the anchor");
        assert_eq!(r.y, 138.0, "side offset applied below the anchor");
        assert!(!r.anchor_hidden, "anchor is inside the viewport");
    }

    #[test]
    fn flips_bottom_to_top_at_bottom_edge() {
        let anchor = Rect::new(400.0, 760.0, 500.0, 790.0);
        let r = compute_placement(
            anchor,
            Size::new(200.0, 100.0),
            &request(Side::Bottom, Align::Center),
        );
        assert_eq!(r.side, Side::Top, "bottom overflows so the popup flips");
        assert_eq!(r.y, 660.0, "popup bottom touches the anchor top");
    }

    #[test]
    fn flip_is_mirror_symmetric() {
        let size = Size::new(200.0, 100.0);
        let bottom_pinned = Rect::new(400.0, 760.0, 500.0, 790.0);
        let top_pinned = Rect::new(400.0, 10.0, 500.0, 40.0);
        let down = compute_placement(bottom_pinned, size, &request(Side::Bottom, Align::Center));
        let up = compute_placement(top_pinned, size, &request(Side::Top, Align::Center));
        assert_eq!(down.side, Side::Top, "bottom request flips up");
        assert_eq!(up.side, Side::Bottom, "top request flips down");
        assert_eq!(down.x, up.x, "cross axis is unaffected by the flip");
        // Mirror around the viewport's horizontal center line.
        assert_eq!(
            VIEWPORT.y1 - (down.y + size.height),
            up.y - VIEWPORT.y0,
            "flipped placements mirror each other"
        );
    }

    #[test]
    fn slides_away_from_right_edge() {
        // Anchor ends 4px from the right boundary edge.
        let anchor = Rect::new(900.0, 300.0, 996.0, 330.0);
        let req = request(Side::Bottom, Align::Center);
        let (r, rect) = placed_rect(anchor, Size::new(200.0, 40.0), &req);
        assert_eq!(r.side, Side::Bottom, "vertical room is fine");
        assert!(
            rect.x1 <= VIEWPORT.x1 - 5.0 + EPSILON,
            "popup stays inside the padded boundary"
        );
        assert_eq!(rect.x1, 995.0, "popup is clamped to the padded edge");
    }

    #[test]
    fn non_sticky_shift_keeps_anchor_contact() {
        // Anchor mostly scrolled past the left edge.
        let anchor = Rect::new(-80.0, 300.0, -40.0, 330.0);
        let req = request(Side::Bottom, Align::Start);
        let (r, rect) = placed_rect(anchor, Size::new(100.0, 40.0), &req);
        assert!(r.anchor_hidden, "anchor lies outside the boundary");
        assert!(rect.x0 <= anchor.x1, "popup still overlaps the anchor's range");

        let sticky = PlacementRequest {
            sticky: true,
            ..req
        };
        let (_, rect) = placed_rect(anchor, Size::new(100.0, 40.0), &sticky);
        assert_eq!(rect.x0, 5.0, "sticky popups slide all the way into view");
    }

    #[test]
    fn end_alignment_negates_align_offset() {
        let anchor = Rect::new(400.0, 100.0, 500.0, 130.0);
        let req = PlacementRequest {
            align_offset: 10.0,
            ..request(Side::Bottom, Align::End)
        };
        let r = compute_placement(anchor, Size::new(50.0, 20.0), &req);
        assert_eq!(r.x, 500.0 - 50.0 - 10.0, "offset moves inward from the end edge");

        let req = PlacementRequest {
            align_offset: 10.0,
            ..request(Side::Bottom, Align::Start)
        };
        let r = compute_placement(anchor, Size::new(50.0, 20.0), &req);
        assert_eq!(r.x, 410.0, "offset moves inward from the start edge");
    }

    #[test]
    fn rtl_mirrors_start_on_vertical_sides() {
        let anchor = Rect::new(400.0, 100.0, 500.0, 130.0);
        let req = PlacementRequest {
            direction: TextDirection::Rtl,
            ..request(Side::Bottom, Align::Start)
        };
        let r = compute_placement(anchor, Size::new(50.0, 20.0), &req);
        assert_eq!(r.x, 450.0, "start is the right edge in RTL");
        assert_eq!(r.align, Align::Start, "logical align is reported");

        let req = PlacementRequest {
            direction: TextDirection::Rtl,
            ..request(Side::Right, Align::Start)
        };
        let r = compute_placement(anchor, Size::new(50.0, 20.0), &req);
        assert_eq!(r.y, 100.0, "horizontal sides do not mirror");
    }

    #[test]
    fn falls_back_to_perpendicular_side() {
        // Tall popup next to a full-height anchor: neither top nor bottom fits.
        let anchor = Rect::new(100.0, 10.0, 150.0, 790.0);
        let r = compute_placement(
            anchor,
            Size::new(200.0, 100.0),
            &request(Side::Bottom, Align::Center),
        );
        assert_eq!(r.side, Side::Right, "inline-end fallback in LTR");

        let req = PlacementRequest {
            collision_avoidance: CollisionAvoidance {
                fallback_axis: FallbackAxis::None,
                ..Default::default()
            },
            ..request(Side::Bottom, Align::Center)
        };
        let r = compute_placement(anchor, Size::new(200.0, 100.0), &req);
        assert!(r.side.is_vertical(), "fallback axis disabled");
    }

    #[test]
    fn side_avoidance_none_keeps_side() {
        let anchor = Rect::new(400.0, 760.0, 500.0, 790.0);
        let req = PlacementRequest {
            collision_avoidance: CollisionAvoidance {
                side: SideAvoidance::None,
                ..Default::default()
            },
            ..request(Side::Bottom, Align::Center)
        };
        let r = compute_placement(anchor, Size::new(200.0, 100.0), &req);
        assert_eq!(r.side, Side::Bottom, "flip disabled");
    }

    #[test]
    fn align_flip_without_shift() {
        let anchor = Rect::new(900.0, 300.0, 960.0, 330.0);
        let req = PlacementRequest {
            collision_avoidance: CollisionAvoidance {
                align: AlignAvoidance::Flip,
                ..Default::default()
            },
            ..request(Side::Bottom, Align::Start)
        };
        let r = compute_placement(anchor, Size::new(150.0, 40.0), &req);
        assert_eq!(r.align, Align::End, "start overflows, end fits");
        assert_eq!(r.x, 960.0 - 150.0, "end edges line up");
    }

    #[test]
    fn oversized_popup_picks_least_overflow() {
        let anchor = Rect::new(450.0, 100.0, 550.0, 130.0);
        let size = Size::new(2000.0, 2000.0);
        let r = compute_placement(anchor, size, &request(Side::Top, Align::Center));
        assert!(r.x.is_finite() && r.y.is_finite(), "never NaN");
        // More room below the anchor than above.
        assert_eq!(r.side, Side::Bottom, "least overflow wins");
    }

    #[test]
    fn tie_keeps_preferred_side() {
        // Anchor centered vertically: top and bottom overflow equally.
        let anchor = Rect::new(450.0, 390.0, 550.0, 410.0);
        let size = Size::new(100.0, 700.0);
        let req = PlacementRequest {
            collision_avoidance: CollisionAvoidance {
                fallback_axis: FallbackAxis::None,
                ..Default::default()
            },
            ..request(Side::Top, Align::Center)
        };
        let r = compute_placement(anchor, size, &req);
        assert_eq!(r.side, Side::Top, "ties go to the preferred side");
    }

    #[test]
    fn zero_overflow_whenever_any_candidate_fits() {
        let sizes = [
            Size::new(40.0, 30.0),
            Size::new(300.0, 120.0),
            Size::new(120.0, 500.0),
            Size::new(900.0, 60.0),
        ];
        let sides = [Side::Top, Side::Right, Side::Bottom, Side::Left];
        let aligns = [Align::Start, Align::Center, Align::End];
        let bounds = shrink(VIEWPORT, Insets::uniform(5.0));
        let mut checked = 0;
        for ax in (0..1000).step_by(97) {
            for ay in (0..800).step_by(83) {
                let anchor = Rect::from_origin_size((ax as f64, ay as f64), (60.0, 24.0));
                for size in sizes {
                    for side in sides {
                        for align in aligns {
                            let req = request(side, align);
                            let (_, rect) = placed_rect(anchor, size, &req);
                            let chosen = Score::of(rect, bounds);
                            let sanitized = Sanitized::new(&req);
                            for alt_side in sides {
                                for alt_align in aligns {
                                    let alt = natural_rect(
                                        anchor,
                                        size,
                                        alt_side,
                                        alt_align,
                                        &sanitized,
                                        TextDirection::Ltr,
                                    );
                                    let alt = Score::of(alt, bounds);
                                    if alt.fits() {
                                        assert!(chosen.fits(), "a fitting candidate exists");
                                    }
                                    assert!(
                                        chosen.area <= alt.area + EPSILON,
                                        "chosen overflow is minimal"
                                    );
                                    checked += 1;
                                }
                            }
                        }
                    }
                }
            }
        }
        assert!(checked > 0, "grid is not empty");
    }

    #[test]
    fn degenerate_anchor_centers_in_boundary() {
        let r = compute_placement(
            Rect::new(10.0, 10.0, 10.0, 10.0),
            Size::new(100.0, 50.0),
            &request(Side::Bottom, Align::Start),
        );
        assert_eq!((r.x, r.y), (450.0, 375.0), "centered fallback");
        assert_eq!(r.side, Side::Bottom, "preferred side reported");
        assert!(r.arrow.is_none(), "no arrow for the fallback");
    }

    #[test]
    fn non_finite_input_stays_finite() {
        let nan = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
        let r = compute_placement(
            nan,
            Size::new(f64::INFINITY, 20.0),
            &request(Side::Top, Align::Center),
        );
        assert!(r.x.is_finite() && r.y.is_finite(), "fallback is finite");
        assert!(r.anchor_hidden, "a NaN anchor counts as hidden");

        let req = PlacementRequest {
            collision_boundary: Rect::new(0.0, 0.0, f64::INFINITY, 100.0),
            side_offset: f64::NAN,
            ..request(Side::Top, Align::Center)
        };
        let r = compute_placement(Rect::new(0.0, 0.0, 10.0, 10.0), Size::new(5.0, 5.0), &req);
        assert!(r.x.is_finite() && r.y.is_finite(), "infinite boundary is degenerate");
    }

    #[test]
    fn arrow_tracks_anchor_center_and_clamps() {
        let anchor = Rect::new(400.0, 100.0, 500.0, 130.0);
        let req = PlacementRequest {
            arrow: Some(ArrowOptions {
                size: 10.0,
                padding: 8.0,
            }),
            ..request(Side::Bottom, Align::Center)
        };
        let r = compute_placement(anchor, Size::new(200.0, 40.0), &req);
        let arrow = r.arrow.unwrap();
        assert_eq!(arrow.x, Some(95.0), "arrow under the anchor center");
        assert_eq!(arrow.y, None, "vertical sides only set x");
        assert!(arrow.centered, "no clamping needed");

        // Popup pushed left of a small anchor at the right edge.
        let anchor = Rect::new(985.0, 100.0, 995.0, 130.0);
        let r = compute_placement(anchor, Size::new(200.0, 40.0), &req);
        let arrow = r.arrow.unwrap();
        assert_eq!(arrow.x, Some(200.0 - 8.0 - 10.0), "clamped to the corner inset");
        assert!(!arrow.centered, "clamping is reported");
    }

    #[test]
    fn available_space_on_chosen_side() {
        let anchor = Rect::new(400.0, 100.0, 500.0, 130.0);
        let req = PlacementRequest {
            side_offset: 10.0,
            ..request(Side::Bottom, Align::Center)
        };
        let r = compute_placement(anchor, Size::new(100.0, 40.0), &req);
        assert_eq!(r.available_height, 795.0 - 130.0 - 10.0, "room below");
        assert_eq!(r.available_width, 990.0, "padded boundary width");
    }
}
