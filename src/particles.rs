// Wave-shaped point cloud behind the hero, plus the per-frame rotation and
// the pinhole projection used to draw it.

pub const HALF_EXTENT: f64 = 5.0;
pub const WAVE_AMPLITUDE: f64 = 2.0;
pub const WAVE_FREQUENCY: f64 = 0.5;
pub const JITTER: f64 = 0.25;

/// Camera sits on +z looking at the origin.
pub const CAMERA_DISTANCE: f64 = 5.0;
pub const FIELD_OF_VIEW_DEG: f64 = 75.0;
const NEAR_PLANE: f64 = 0.1;

/// World-space point size before perspective attenuation.
pub const POINT_SIZE: f64 = 0.05;
/// Dots never shrink below one pixel.
const MIN_DOT_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

pub fn wave_height(x: f64) -> f64 {
    (x * WAVE_FREQUENCY).sin() * WAVE_AMPLITUDE
}

/// `uniform` must yield values in [0, 1), like `Math.random()`.
pub fn generate_point_cloud(count: usize, mut uniform: impl FnMut() -> f64) -> Vec<ParticlePoint> {
    let mut spread = move |half: f64| (uniform() - 0.5) * 2.0 * half;
    (0..count)
        .map(|_| {
            let x = spread(HALF_EXTENT);
            let y = wave_height(x) + spread(JITTER);
            let z = spread(HALF_EXTENT);
            ParticlePoint { x, y, z }
        })
        .collect()
}

/// Euler angles (radians) of the whole cloud at `t` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub tilt_x: f64,
    pub spin_y: f64,
}

impl Rotation {
    pub fn at(t: f64) -> Self {
        Self {
            tilt_x: (t * 0.3).sin() * 0.1,
            spin_y: t * 0.1,
        }
    }

    /// Y rotation first, then X (XYZ Euler order).
    pub fn apply(&self, p: ParticlePoint) -> ParticlePoint {
        let (sy, cy) = self.spin_y.sin_cos();
        let x1 = p.x * cy + p.z * sy;
        let z1 = -p.x * sy + p.z * cy;

        let (sx, cx) = self.tilt_x.sin_cos();
        ParticlePoint {
            x: x1,
            y: p.y * cx - z1 * sx,
            z: p.y * sx + z1 * cx,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Perspective projection onto a `width` x `height` pixel surface.
/// Returns `None` for points at or behind the near plane.
pub fn project(p: ParticlePoint, width: f64, height: f64) -> Option<ScreenPoint> {
    let depth = CAMERA_DISTANCE - p.z;
    if depth <= NEAR_PLANE || width <= 0.0 || height <= 0.0 {
        return None;
    }

    let focal = 1.0 / (FIELD_OF_VIEW_DEG.to_radians() / 2.0).tan();
    let aspect = width / height;
    let ndc_x = focal / aspect * p.x / depth;
    let ndc_y = focal * p.y / depth;

    Some(ScreenPoint {
        x: (ndc_x + 1.0) * 0.5 * width,
        y: (1.0 - ndc_y) * 0.5 * height,
        // Same attenuation as a sized point material: half the surface height
        // over depth, independent of the field of view.
        size: (POINT_SIZE * height * 0.5 / depth).max(MIN_DOT_PX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small deterministic xorshift so tests never touch `Math.random`.
    fn seeded(mut state: u64) -> impl FnMut() -> f64 {
        move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn cloud_has_requested_size_and_bounds() {
        let cloud = generate_point_cloud(2000, seeded(0x9E37_79B9_7F4A_7C15));
        assert_eq!(cloud.len(), 2000);

        for p in &cloud {
            assert!((-5.0..=5.0).contains(&p.x), "x out of range: {p:?}");
            assert!((-5.0..=5.0).contains(&p.z), "z out of range: {p:?}");
            let wave = wave_height(p.x);
            assert!(
                p.y >= wave - 0.25 - 1e-12 && p.y <= wave + 0.25 + 1e-12,
                "y off the wave: {p:?}"
            );
        }
    }

    #[test]
    fn extreme_random_values_stay_in_range() {
        let lo = generate_point_cloud(1, || 0.0);
        assert_eq!(lo[0].x, -5.0);
        assert_eq!(lo[0].z, -5.0);
        assert!((lo[0].y - (wave_height(-5.0) - 0.25)).abs() < 1e-12);

        let almost_one = 1.0 - f64::EPSILON;
        let hi = generate_point_cloud(1, move || almost_one);
        assert!(hi[0].x < 5.0 && hi[0].x > 4.99);
        assert!(hi[0].z < 5.0 && hi[0].z > 4.99);
    }

    #[test]
    fn empty_cloud_is_allowed() {
        assert!(generate_point_cloud(0, seeded(1)).is_empty());
    }

    #[test]
    fn rotation_schedule() {
        let r0 = Rotation::at(0.0);
        assert_eq!(r0.tilt_x, 0.0);
        assert_eq!(r0.spin_y, 0.0);

        let r = Rotation::at(10.0);
        assert!((r.spin_y - 1.0).abs() < 1e-12);
        assert!((r.tilt_x - (3.0f64).sin() * 0.1).abs() < 1e-12);

        // Tilt never exceeds 0.1 rad.
        for i in 0..1000 {
            assert!(Rotation::at(i as f64 * 0.37).tilt_x.abs() <= 0.1);
        }
    }

    #[test]
    fn zero_rotation_is_identity() {
        let p = ParticlePoint { x: 1.5, y: -0.7, z: 3.2 };
        assert_eq!(Rotation::at(0.0).apply(p), p);
    }

    #[test]
    fn quarter_spin_maps_x_onto_minus_z() {
        let r = Rotation { tilt_x: 0.0, spin_y: std::f64::consts::FRAC_PI_2 };
        let p = r.apply(ParticlePoint { x: 1.0, y: 0.0, z: 0.0 });
        assert!(p.x.abs() < 1e-12);
        assert!((p.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_distance_from_origin() {
        let r = Rotation::at(7.3);
        let p = ParticlePoint { x: 2.0, y: 1.0, z: -3.0 };
        let q = r.apply(p);
        let len = |p: ParticlePoint| (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
        assert!((len(p) - len(q)).abs() < 1e-9);
    }

    #[test]
    fn origin_projects_to_centre() {
        let s = project(ParticlePoint { x: 0.0, y: 0.0, z: 0.0 }, 800.0, 600.0).unwrap();
        assert!((s.x - 400.0).abs() < 1e-9);
        assert!((s.y - 300.0).abs() < 1e-9);
        assert!(s.size >= 1.0);
    }

    #[test]
    fn up_is_up_on_screen() {
        let s = project(ParticlePoint { x: 0.0, y: 1.0, z: 0.0 }, 800.0, 600.0).unwrap();
        assert!(s.y < 300.0);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        assert!(project(ParticlePoint { x: 0.0, y: 0.0, z: 5.0 }, 800.0, 600.0).is_none());
        assert!(project(ParticlePoint { x: 0.0, y: 0.0, z: 9.0 }, 800.0, 600.0).is_none());
        assert!(project(ParticlePoint { x: 0.0, y: 0.0, z: 0.0 }, 0.0, 600.0).is_none());
    }

    #[test]
    fn nearer_points_draw_larger() {
        let near = project(ParticlePoint { x: 0.0, y: 0.0, z: 4.0 }, 800.0, 600.0).unwrap();
        let far = project(ParticlePoint { x: 0.0, y: 0.0, z: -4.0 }, 800.0, 600.0).unwrap();
        assert!(near.size > far.size);
    }

    #[test]
    fn dot_size_follows_height_over_depth() {
        let at_origin = project(ParticlePoint { x: 0.0, y: 0.0, z: 0.0 }, 800.0, 600.0).unwrap();
        assert!((at_origin.size - 3.0).abs() < 1e-9);

        let halfway = project(ParticlePoint { x: 0.0, y: 0.0, z: 2.5 }, 800.0, 600.0).unwrap();
        assert!((halfway.size - 6.0).abs() < 1e-9);

        // Width plays no part.
        let wide = project(ParticlePoint { x: 0.0, y: 0.0, z: 0.0 }, 1600.0, 600.0).unwrap();
        assert_eq!(wide.size, at_origin.size);

        let tiny = project(ParticlePoint { x: 0.0, y: 0.0, z: 0.0 }, 100.0, 100.0).unwrap();
        assert_eq!(tiny.size, 1.0);
    }
}
