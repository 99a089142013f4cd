#![warn(missing_docs)]
//! Physics primitives (AABB, ray clipping, etc.).

use glam::DVec3;

/// Axis-aligned bounding box used for collisions and entity picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Create a new AABB ensuring min <= max per axis.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// AABB centered on `center` with the given half extents.
    pub fn from_center(center: DVec3, half_width: f64, half_height: f64) -> Self {
        let half = DVec3::new(half_width, half_height, half_width);
        Self::new(center - half, center + half)
    }

    /// Center point of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Tests intersection with another AABB.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Tests whether a point lies inside (inclusive) the box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Grow the box outward by `amount` on every axis.
    pub fn inflate(&self, amount: f64) -> Self {
        Self {
            min: self.min - DVec3::splat(amount),
            max: self.max + DVec3::splat(amount),
        }
    }

    /// Extend the box directionally by `delta` (negative components extend
    /// the min corner, positive components the max corner).
    pub fn extend(&self, delta: DVec3) -> Self {
        let mut min = self.min;
        let mut max = self.max;
        if delta.x < 0.0 {
            min.x += delta.x;
        } else {
            max.x += delta.x;
        }
        if delta.y < 0.0 {
            min.y += delta.y;
        } else {
            max.y += delta.y;
        }
        if delta.z < 0.0 {
            min.z += delta.z;
        } else {
            max.z += delta.z;
        }
        Self { min, max }
    }

    /// Clip the segment `from -> to` against the box, returning the entry
    /// point nearest to `from`, or `None` if the segment misses.
    ///
    /// A `from` already inside the box yields `from` itself (entry at t = 0).
    pub fn clip_segment(&self, from: DVec3, to: DVec3) -> Option<DVec3> {
        let dir = to - from;
        let mut t_enter: f64 = 0.0;
        let mut t_exit: f64 = 1.0;

        for axis in 0..3 {
            let (d, f, lo, hi) = match axis {
                0 => (dir.x, from.x, self.min.x, self.max.x),
                1 => (dir.y, from.y, self.min.y, self.max.y),
                _ => (dir.z, from.z, self.min.z, self.max.z),
            };
            if d.abs() < f64::EPSILON {
                if f < lo || f > hi {
                    return None;
                }
                continue;
            }
            let mut t0 = (lo - f) / d;
            let mut t1 = (hi - f) / d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(from + dir * t_enter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(DVec3::ZERO, DVec3::ONE)
    }

    #[test]
    fn intersects_overlapping_boxes() {
        let a = unit_box();
        let b = Aabb::new(DVec3::splat(0.5), DVec3::splat(1.5));
        let c = Aabb::new(DVec3::splat(2.0), DVec3::splat(3.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn clip_segment_hits_entry_face() {
        let hit = unit_box()
            .clip_segment(DVec3::new(-1.0, 0.5, 0.5), DVec3::new(2.0, 0.5, 0.5))
            .expect("segment crosses box");
        assert!((hit.x - 0.0).abs() < 1e-9);
        assert!((hit.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn clip_segment_misses_off_axis() {
        let miss = unit_box().clip_segment(DVec3::new(-1.0, 2.5, 0.5), DVec3::new(2.0, 2.5, 0.5));
        assert!(miss.is_none());
    }

    #[test]
    fn clip_segment_from_inside_returns_origin() {
        let origin = DVec3::splat(0.5);
        let hit = unit_box()
            .clip_segment(origin, DVec3::new(5.0, 0.5, 0.5))
            .expect("origin inside");
        assert_eq!(hit, origin);
    }

    #[test]
    fn extend_is_directional() {
        let extended = unit_box().extend(DVec3::new(2.0, -1.0, 0.0));
        assert_eq!(extended.min, DVec3::new(0.0, -1.0, 0.0));
        assert_eq!(extended.max, DVec3::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn contains_is_inclusive() {
        assert!(unit_box().contains(DVec3::ONE));
        assert!(!unit_box().contains(DVec3::splat(1.0001)));
    }
}
