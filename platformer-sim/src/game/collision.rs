//! Collision Resolution
//!
//! Body-vs-platform tests. Only vertical landing is resolved: a body that
//! walks into the side of a platform passes through it.

use crate::core::rect::Rect;
use crate::game::body::KinematicBody;

/// Index of the first platform (in registration order) overlapping `rect`.
///
/// Ties are never broken by distance; the earliest platform wins.
pub fn first_overlap(rect: &Rect, platforms: &[Rect]) -> Option<usize> {
    platforms.iter().position(|platform| rect.overlaps(platform))
}

/// Check whether the body currently stands on (overlaps) any platform.
#[inline]
pub fn is_grounded(body: &KinematicBody, platforms: &[Rect]) -> bool {
    first_overlap(&body.bounding_box(), platforms).is_some()
}

/// Snap the body onto the first platform it overlaps.
///
/// On a hit the body rests one unit below the platform top with zero
/// vertical velocity, and the platform's index is returned. Horizontal
/// velocity and position are left alone.
pub fn resolve_grounding(body: &mut KinematicBody, platforms: &[Rect]) -> Option<usize> {
    let index = first_overlap(&body.bounding_box(), platforms)?;
    body.land_on(platforms[index].top());
    Some(index)
}
