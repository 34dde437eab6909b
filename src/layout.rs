//! Layout relationship engine.
//!
//! Stateless, pure functions over pairs of content elements (plus one
//! document-scoped query). These feed layout-understanding consumers such
//! as key-value association, so their numeric contracts are exact: the
//! distance metrics work on top-left corners, the overlap ratio divides by
//! the *smaller* box's area (not union), and the alignment classifiers use
//! exact adjacency as a tie-break.

use serde::{Deserialize, Serialize};

use crate::model::{ContentElement, Document};

/// Horizontal position of one element relative to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    /// To the right of the other box
    Right,
    /// Same x origin
    Center,
    /// To the left of the other box
    Left,
}

/// Vertical position of one element relative to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    /// Above the other box
    Top,
    /// Same y origin
    Middle,
    /// Below the other box
    Bottom,
}

/// Vertical region of a document a bounding box falls into, by thirds of
/// the pixel height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentRelativePosition {
    /// Vertical center in the top third
    TopHeight,
    /// Vertical center in the central third
    CentralHeight,
    /// Vertical center in the bottom third
    BottomHeight,
}

/// Euclidean distance between the top-left corners of two elements.
pub fn euclidean_distance(a: &ContentElement, b: &ContentElement) -> f64 {
    let dx = a.bbox.x - b.bbox.x;
    let dy = a.bbox.y - b.bbox.y;
    (dx * dx + dy * dy).sqrt()
}

/// Manhattan distance between the top-left corners of two elements.
pub fn manhattan_distance(a: &ContentElement, b: &ContentElement) -> f64 {
    (a.bbox.x - b.bbox.x).abs() + (a.bbox.y - b.bbox.y).abs()
}

/// Chebyshev distance between the top-left corners of two elements.
pub fn chebyshev_distance(a: &ContentElement, b: &ContentElement) -> f64 {
    (a.bbox.x - b.bbox.x).abs().max((a.bbox.y - b.bbox.y).abs())
}

/// Overlap ratio of two elements: intersection area divided by the smaller
/// of the two box areas.
///
/// Returns `0.0` when the boxes are disjoint or either area is zero, and
/// `1.0` exactly when one box is fully contained in the other. Dividing by
/// the smaller area (instead of the union) keeps the ratio at `1.0` for
/// nested layout elements of very different sizes.
pub fn overlap_ratio(a: &ContentElement, b: &ContentElement) -> f64 {
    let min_area = a.bbox.area().min(b.bbox.area());
    if min_area == 0.0 {
        return 0.0;
    }
    let intersection = a.bbox.intersection_area(&b.bbox);
    if intersection == 0.0 {
        return 0.0;
    }
    intersection / min_area
}

/// Classify where `a` sits horizontally relative to `b`.
///
/// Equal x origins are `Center`. Otherwise the answer flips when the two
/// boxes abut exactly: with `a` starting left of `b`, the result is `Right`
/// iff `a`'s right edge lands exactly on `b`'s left edge, else `Left`; the
/// mirrored rule applies with `a` starting right of `b`. Not symmetric in
/// its arguments; downstream consumers depend on this exact table.
pub fn horizontal_alignment(a: &ContentElement, b: &ContentElement) -> HorizontalAlignment {
    if a.bbox.x == b.bbox.x {
        HorizontalAlignment::Center
    } else if a.bbox.x < b.bbox.x {
        if a.bbox.x + a.bbox.w == b.bbox.x {
            HorizontalAlignment::Right
        } else {
            HorizontalAlignment::Left
        }
    } else if b.bbox.x + b.bbox.w == a.bbox.x {
        HorizontalAlignment::Left
    } else {
        HorizontalAlignment::Right
    }
}

/// Classify where `a` sits vertically relative to `b`.
///
/// Same structure as [`horizontal_alignment`] on the y axis: equal y
/// origins are `Middle`, exact vertical adjacency flips the answer.
pub fn vertical_alignment(a: &ContentElement, b: &ContentElement) -> VerticalAlignment {
    if a.bbox.y == b.bbox.y {
        VerticalAlignment::Middle
    } else if a.bbox.y < b.bbox.y {
        if a.bbox.y + a.bbox.h == b.bbox.y {
            VerticalAlignment::Bottom
        } else {
            VerticalAlignment::Top
        }
    } else if b.bbox.y + b.bbox.h == a.bbox.y {
        VerticalAlignment::Top
    } else {
        VerticalAlignment::Bottom
    }
}

/// Angle in radians of the vector from `a`'s box center to `b`'s box
/// center, in screen coordinates (y grows downward). Range `(-pi, pi]`.
pub fn angle_between(a: &ContentElement, b: &ContentElement) -> f64 {
    let (ax, ay) = a.bbox.center();
    let (bx, by) = b.bbox.center();
    (by - ay).atan2(bx - ax)
}

/// Classify which vertical third of `document` the element's box center
/// falls into.
///
/// The pixel height is divided into three equal parts; a center exactly on
/// the first boundary belongs to the top third, exactly on the second
/// boundary to the central third.
pub fn relative_position(
    element: &ContentElement,
    document: &Document,
) -> ContentRelativePosition {
    let center_y = element.bbox.y + element.bbox.h / 2.0;
    let height = f64::from(document.height);
    let top_third_boundary = height / 3.0;
    let bottom_third_boundary = height * 2.0 / 3.0;

    if center_y <= top_third_boundary {
        ContentRelativePosition::TopHeight
    } else if center_y <= bottom_third_boundary {
        ContentRelativePosition::CentralHeight
    } else {
        ContentRelativePosition::BottomHeight
    }
}
