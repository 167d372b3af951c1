//! Icon cloud geometry.
//!
//! Icons sit on a unit sphere laid out with the golden-angle (Fibonacci)
//! distribution. Every frame the sphere rotates, either at a slow constant
//! speed or steered by the pointer, and each icon is projected to a 2D offset
//! from the cloud center with a depth-dependent scale and opacity.

use glam::{Mat3, Vec3};
use std::f32::consts::PI;

/// Tuning of one cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudConfig {
    /// Sphere radius in pixels
    pub radius: f32,
    /// Radians per frame around the Y axis while idle
    pub idle_speed: f32,
    /// Radians per frame per unit of pointer offset
    pub pointer_gain: f32,
    pub min_opacity: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            radius: crate::config::CLOUD_RADIUS,
            idle_speed: crate::config::CLOUD_IDLE_SPEED,
            pointer_gain: crate::config::CLOUD_POINTER_GAIN,
            min_opacity: 0.2,
        }
    }
}

/// `n` points on the unit sphere, evenly spread by the golden angle.
pub fn fibonacci_sphere(n: usize) -> Vec<Vec3> {
    let golden_angle = PI * (3.0 - 5f32.sqrt());
    (0..n)
        .map(|i| {
            let y = 1.0 - (2.0 * i as f32 + 1.0) / n as f32;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f32;
            Vec3::new(theta.cos() * r, y, theta.sin() * r)
        })
        .collect()
}

/// What moves the sphere this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drive {
    Idle,
    /// Pointer offset from the center, each axis normalized to `[-1, 1]`
    Pointer { dx: f32, dy: f32 },
}

/// Current rotation angles (radians).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// Advance by one frame.
    pub fn step(&mut self, drive: Drive, config: &CloudConfig) {
        match drive {
            Drive::Idle => {
                self.y += config.idle_speed;
            }
            Drive::Pointer { dx, dy } => {
                self.y += dx.clamp(-1.0, 1.0) * config.pointer_gain;
                self.x += dy.clamp(-1.0, 1.0) * config.pointer_gain;
            }
        }
        self.x = wrap(self.x);
        self.y = wrap(self.y);
    }

    pub fn matrix(&self) -> Mat3 {
        Mat3::from_rotation_y(self.y) * Mat3::from_rotation_x(self.x)
    }
}

fn wrap(angle: f32) -> f32 {
    angle.rem_euclid(2.0 * PI)
}

/// Screen placement of one icon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Pixel offset from the cloud center
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Rotated depth in `[-1, 1]`, larger is closer to the viewer
    pub depth: f32,
}

impl Projection {
    /// Inline style placing an icon relative to the cloud center.
    pub fn css(&self) -> String {
        format!(
            "transform: translate(-50%, -50%) translate({:.1}px, {:.1}px) scale({:.3}); opacity: {:.3}; z-index: {};",
            self.x,
            self.y,
            self.scale,
            self.opacity,
            (self.depth * 100.0).round() as i32 + 100
        )
    }
}

/// Project a unit-sphere point under a rotation matrix.
pub fn project(point: Vec3, rotation: &Mat3, config: &CloudConfig) -> Projection {
    let p = *rotation * point;
    Projection {
        x: p.x * config.radius,
        y: p.y * config.radius,
        scale: (p.z + 2.0) / 3.0,
        opacity: ((p.z + 1.5) / 2.0).clamp(config.min_opacity, 1.0),
        depth: p.z,
    }
}

/// A rotating cloud of `n` icons.
#[derive(Clone, Debug)]
pub struct IconCloud {
    points: Vec<Vec3>,
    rotation: Rotation,
    config: CloudConfig,
}

impl IconCloud {
    pub fn new(n: usize, config: CloudConfig) -> Self {
        Self {
            points: fibonacci_sphere(n),
            rotation: Rotation::default(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Projections for the current rotation, in icon order.
    pub fn projections(&self) -> Vec<Projection> {
        let m = self.rotation.matrix();
        self.points
            .iter()
            .map(|&p| project(p, &m, &self.config))
            .collect()
    }

    /// Advance one frame and return the new projections.
    pub fn tick(&mut self, drive: Drive) -> Vec<Projection> {
        self.rotation.step(drive, &self.config);
        self.projections()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_points_are_on_unit_sphere() {
        let points = fibonacci_sphere(40);
        assert_eq!(points.len(), 40);
        for p in &points {
            assert!((p.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_points_span_pole_to_pole() {
        let points = fibonacci_sphere(20);
        assert!(points.first().unwrap().y > 0.9);
        assert!(points.last().unwrap().y < -0.9);
        assert!(points.windows(2).all(|w| w[0].y > w[1].y));
    }

    #[test]
    fn test_degenerate_counts() {
        assert!(fibonacci_sphere(0).is_empty());
        let single = fibonacci_sphere(1);
        assert!((single[0] - Vec3::X).length() < EPS);
    }

    #[test]
    fn test_front_and_back_projection() {
        let config = CloudConfig::default();
        let identity = Mat3::IDENTITY;

        let front = project(Vec3::Z, &identity, &config);
        assert!((front.scale - 1.0).abs() < EPS);
        assert!((front.opacity - 1.0).abs() < EPS);
        assert!(front.x.abs() < EPS && front.y.abs() < EPS);

        let back = project(-Vec3::Z, &identity, &config);
        assert!((back.scale - 1.0 / 3.0).abs() < EPS);
        assert!((back.opacity - 0.25).abs() < EPS);

        let side = project(Vec3::X, &identity, &config);
        assert!((side.x - config.radius).abs() < EPS);
    }

    #[test]
    fn test_css_puts_front_icons_on_top() {
        let config = CloudConfig::default();
        let front = project(Vec3::Z, &Mat3::IDENTITY, &config);
        let back = project(-Vec3::Z, &Mat3::IDENTITY, &config);
        assert!(front.css().contains("z-index: 200;"));
        assert!(back.css().contains("z-index: 0;"));
        assert!(front.css().contains("scale(1.000)"));
    }

    #[test]
    fn test_half_turn_swaps_front_and_back() {
        let config = CloudConfig::default();
        let rotation = Rotation { x: 0.0, y: PI };
        let p = project(Vec3::Z, &rotation.matrix(), &config);
        assert!((p.depth + 1.0).abs() < EPS);
    }

    #[test]
    fn test_idle_rotates_around_y_only() {
        let config = CloudConfig::default();
        let mut rotation = Rotation::default();
        for _ in 0..10 {
            rotation.step(Drive::Idle, &config);
        }
        assert!((rotation.y - 10.0 * config.idle_speed).abs() < EPS);
        assert_eq!(rotation.x, 0.0);
    }

    #[test]
    fn test_pointer_drive_is_clamped() {
        let config = CloudConfig::default();
        let mut rotation = Rotation::default();
        rotation.step(Drive::Pointer { dx: 5.0, dy: 0.5 }, &config);
        assert!((rotation.y - config.pointer_gain).abs() < EPS);
        assert!((rotation.x - 0.5 * config.pointer_gain).abs() < EPS);
    }

    #[test]
    fn test_tick_is_deterministic() {
        let mut a = IconCloud::new(12, CloudConfig::default());
        let mut b = IconCloud::new(12, CloudConfig::default());
        for _ in 0..30 {
            a.tick(Drive::Idle);
            b.tick(Drive::Idle);
        }
        assert_eq!(a.projections(), b.projections());
        assert_eq!(a.len(), 12);
    }
}
