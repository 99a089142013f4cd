//! Voxel raycasting using DDA (Digital Differential Analyzer) traversal.

use glam::{DVec3, IVec3};

/// Result of a raycast against the voxel grid.
#[derive(Debug, Clone, Copy)]
pub struct RaycastHit {
    /// The position of the block that was hit (in block coordinates).
    pub block_pos: IVec3,
    /// The normal of the face that was entered (zero if the origin voxel
    /// itself was solid).
    pub face_normal: IVec3,
    /// The distance from the ray origin to the hit point.
    pub distance: f64,
    /// World-space position of the hit point.
    pub hit_pos: DVec3,
}

/// Performs a DDA raycast through the voxel grid.
///
/// `direction` should be normalized; `is_solid` decides which blocks stop
/// the ray (liquids are handled by the caller's closure).
pub fn raycast<F>(
    origin: DVec3,
    direction: DVec3,
    max_distance: f64,
    mut is_solid: F,
) -> Option<RaycastHit>
where
    F: FnMut(IVec3) -> bool,
{
    // Current voxel position
    let mut voxel = IVec3::new(
        origin.x.floor() as i32,
        origin.y.floor() as i32,
        origin.z.floor() as i32,
    );

    // Direction to step in each axis (-1 or 1)
    let step = IVec3::new(
        if direction.x > 0.0 { 1 } else { -1 },
        if direction.y > 0.0 { 1 } else { -1 },
        if direction.z > 0.0 { 1 } else { -1 },
    );

    // Distance along the ray to cross one voxel boundary per axis
    let delta = DVec3::new(
        if direction.x != 0.0 {
            (1.0 / direction.x).abs()
        } else {
            f64::MAX
        },
        if direction.y != 0.0 {
            (1.0 / direction.y).abs()
        } else {
            f64::MAX
        },
        if direction.z != 0.0 {
            (1.0 / direction.z).abs()
        } else {
            f64::MAX
        },
    );

    // Distance from origin to the next voxel boundary per axis
    let boundary = |v: i32, o: f64, d: f64| -> f64 {
        if d != 0.0 {
            if d > 0.0 {
                ((v + 1) as f64 - o) / d
            } else {
                (v as f64 - o) / d
            }
        } else {
            f64::MAX
        }
    };
    let mut t_max = DVec3::new(
        boundary(voxel.x, origin.x, direction.x),
        boundary(voxel.y, origin.y, direction.y),
        boundary(voxel.z, origin.z, direction.z),
    );

    // Which face we entered the current voxel through, and at what distance.
    let mut face_normal = IVec3::ZERO;
    let mut t_entry = 0.0_f64;

    loop {
        if is_solid(voxel) {
            return Some(RaycastHit {
                block_pos: voxel,
                face_normal,
                distance: t_entry,
                hit_pos: origin + direction * t_entry,
            });
        }

        // Step to the next voxel across the nearest boundary
        if t_max.x < t_max.y && t_max.x < t_max.z {
            t_entry = t_max.x;
            voxel.x += step.x;
            t_max.x += delta.x;
            face_normal = IVec3::new(-step.x, 0, 0);
        } else if t_max.y < t_max.z {
            t_entry = t_max.y;
            voxel.y += step.y;
            t_max.y += delta.y;
            face_normal = IVec3::new(0, -step.y, 0);
        } else {
            t_entry = t_max.z;
            voxel.z += step.z;
            t_max.z += delta.z;
            face_normal = IVec3::new(0, 0, -step.z);
        }

        if t_entry > max_distance {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_block_on_entry_face() {
        let origin = DVec3::new(0.5, 0.5, 0.5);
        let direction = DVec3::new(1.0, 0.0, 0.0);

        let hit = raycast(origin, direction, 10.0, |pos| pos == IVec3::new(5, 0, 0))
            .expect("block in range");
        assert_eq!(hit.block_pos, IVec3::new(5, 0, 0));
        assert_eq!(hit.face_normal, IVec3::new(-1, 0, 0)); // Hit from -X side
        assert!((hit.distance - 4.5).abs() < 1e-9);
        assert!((hit.hit_pos.x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn misses_when_nothing_solid() {
        let hit = raycast(
            DVec3::new(0.5, 0.5, 0.5),
            DVec3::new(1.0, 0.0, 0.0),
            10.0,
            |_| false,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn respects_max_distance() {
        let hit = raycast(
            DVec3::new(0.5, 0.5, 0.5),
            DVec3::new(1.0, 0.0, 0.0),
            3.0,
            |pos| pos == IVec3::new(5, 0, 0),
        );
        assert!(hit.is_none()); // Block at x=5 is beyond max_distance=3
    }

    #[test]
    fn diagonal_ray_walks_both_axes() {
        let origin = DVec3::new(0.5, 0.5, 0.5);
        let direction = DVec3::new(1.0, 0.0, 1.0).normalize();

        let hit = raycast(origin, direction, 10.0, |pos| pos == IVec3::new(3, 0, 3))
            .expect("diagonal block in range");
        assert_eq!(hit.block_pos, IVec3::new(3, 0, 3));
        assert!(hit.distance > 0.0);
    }

    #[test]
    fn solid_origin_voxel_hits_at_zero() {
        let hit = raycast(
            DVec3::new(0.5, 0.5, 0.5),
            DVec3::new(1.0, 0.0, 0.0),
            10.0,
            |_| true,
        )
        .expect("origin voxel solid");
        assert_eq!(hit.distance, 0.0);
        assert_eq!(hit.face_normal, IVec3::ZERO);
    }
}
