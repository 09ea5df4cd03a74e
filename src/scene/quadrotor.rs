//! Quadrotor frame: a cross skeleton plus four rotor disks, moving as
//! one rigid body.

use cgmath::{Matrix3, Vector3, Zero};

use crate::canvas::{Artist, ArtistCategory, ArtistHandle, ArtistKind, Canvas, Color, Style};
use crate::scene::geometry::disk_outline;
use crate::scene::pose::Pose;
use crate::scene::primitive::RigidPrimitive;

/// Arm length from the body center to each rotor, in meters
pub const DEFAULT_BODY_DIAMETER: f32 = 0.315;
/// Rotor disk radius, in meters
pub const DEFAULT_ROTOR_RADIUS: f32 = 0.15;

const ROTOR_OUTLINE_SEGMENTS: u32 = 32;

/// The +x arm marks the heading and is highlighted
const HEADING_COLOR: Color = [1.0, 0.0, 0.0, 1.0];
const ARM_COLOR: Color = [0.0, 0.0, 1.0, 1.0];

/// A quadrotor frame: four arm segments from the body center to the
/// cardinal offsets, and a rotor disk at the tip of each arm.
///
/// All five artists share a single pose. [`set`](Self::set) rotates
/// every skeleton vertex and every disk point about the body origin,
/// then translates; disk centers are ordinary geometry points and go
/// through the same transform as the outlines.
pub struct Quadrotor {
    skeleton: ArtistHandle,
    rotors: [ArtistHandle; 4],
}

impl Quadrotor {
    /// Build a quadrotor with the default dimensions and register its
    /// artists on `canvas`
    pub fn new(canvas: &mut Canvas) -> Self {
        Self::with_dimensions(canvas, DEFAULT_BODY_DIAMETER, DEFAULT_ROTOR_RADIUS)
    }

    /// Build a quadrotor with explicit dimensions
    ///
    /// # Arguments
    /// * `body_diameter` - Arm length from center to rotor
    /// * `rotor_radius` - Radius of each rotor disk
    pub fn with_dimensions(canvas: &mut Canvas, body_diameter: f32, rotor_radius: f32) -> Self {
        let d = body_diameter;

        // Arm segments run tip -> center; the +x (heading) arm is red,
        // the rest blue
        let arm_tips = [
            Vector3::new(d, 0.0, 0.0),
            Vector3::new(-d, 0.0, 0.0),
            Vector3::new(0.0, d, 0.0),
            Vector3::new(0.0, -d, 0.0),
        ];
        let mut skeleton_points = Vec::with_capacity(arm_tips.len() * 2);
        for tip in arm_tips {
            skeleton_points.push(tip);
            skeleton_points.push(Vector3::zero());
        }

        let skeleton_style = Style {
            line_width: 2.0,
            segment_colors: Some(vec![HEADING_COLOR, ARM_COLOR, ARM_COLOR, ARM_COLOR]),
            ..Style::default()
        };
        let skeleton = Artist::handle(
            ArtistKind::Segments,
            RigidPrimitive::from_points(&skeleton_points),
            skeleton_style,
        );
        canvas.add(ArtistCategory::Collections, &skeleton);

        let rotor_style = Style {
            edge_color: [0.0, 0.0, 0.0, 1.0],
            face_color: Some([0.0, 0.0, 0.0, 0.3]),
            ..Style::default()
        };
        let rotor_centers = [
            Vector3::new(d, 0.0, 0.0),
            Vector3::new(0.0, d, 0.0),
            Vector3::new(-d, 0.0, 0.0),
            Vector3::new(0.0, -d, 0.0),
        ];
        let rotors = rotor_centers.map(|center| {
            // Disk plane normal is the body's local z axis; the center
            // leads the point list so it is transformed with the outline
            let mut points = vec![center];
            points.extend(disk_outline(center, rotor_radius, ROTOR_OUTLINE_SEGMENTS));

            let rotor = Artist::handle(
                ArtistKind::Patch,
                RigidPrimitive::from_points(&points),
                rotor_style.clone(),
            );
            canvas.add(ArtistCategory::Surfaces, &rotor);
            rotor
        });

        Self { skeleton, rotors }
    }

    /// Pose the whole frame: rotate every point about the body origin by
    /// `orientation`, then translate by `position`
    pub fn set(&mut self, position: Vector3<f32>, orientation: Matrix3<f32>) {
        let pose = Pose::new(position, orientation);
        self.skeleton.borrow_mut().primitive.set_pose(&pose);
        for rotor in &self.rotors {
            rotor.borrow_mut().primitive.set_pose(&pose);
        }
    }

    /// [`set`](Self::set) with identity orientation
    pub fn set_position(&mut self, position: Vector3<f32>) {
        let pose = Pose::from_position(position);
        self.skeleton.borrow_mut().primitive.set_pose(&pose);
        for rotor in &self.rotors {
            rotor.borrow_mut().primitive.set_pose(&pose);
        }
    }

    /// Skeleton artist (the four arm segments)
    pub fn skeleton(&self) -> ArtistHandle {
        self.skeleton.clone()
    }

    /// The four rotor disk artists, in +x, +y, -x, -y order
    pub fn rotors(&self) -> [ArtistHandle; 4] {
        self.rotors.clone()
    }

    /// All five drawable handles, skeleton first
    pub fn artists(&self) -> Vec<ArtistHandle> {
        let mut artists = vec![self.skeleton.clone()];
        artists.extend(self.rotors.iter().cloned());
        artists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::{Deg, SquareMatrix};

    #[test]
    fn skeleton_carries_four_colored_arms() {
        let mut canvas = Canvas::new();
        let quad = Quadrotor::new(&mut canvas);

        let skeleton = quad.skeleton();
        let skeleton = skeleton.borrow();
        assert_eq!(skeleton.primitive.point_count(), 8);

        let colors = skeleton.style.segment_colors.as_ref().unwrap();
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0], HEADING_COLOR);
        assert!(colors[1..].iter().all(|&c| c == ARM_COLOR));
    }

    #[test]
    fn identity_set_leaves_local_geometry_in_place() {
        let mut canvas = Canvas::new();
        let mut quad = Quadrotor::new(&mut canvas);

        quad.set(Vector3::zero(), Matrix3::identity());

        for artist in quad.artists() {
            let artist = artist.borrow();
            assert_eq!(artist.primitive.world(), artist.primitive.base());
        }
    }

    #[test]
    fn yaw_carries_rotor_centers_around_the_body_origin() {
        let mut canvas = Canvas::new();
        let mut quad = Quadrotor::new(&mut canvas);
        let position = Vector3::new(1.0, 2.0, 3.0);

        quad.set(position, Matrix3::from_angle_z(Deg(90.0)));

        // The +x rotor center ends up on the +y axis, plus the translation
        let rotors = quad.rotors();
        let center = rotors[0].borrow().primitive.world_points().next().unwrap();
        let expected = Vector3::new(0.0, DEFAULT_BODY_DIAMETER, 0.0) + position;
        assert_relative_eq!(center, expected, epsilon = 1e-6);
    }

    #[test]
    fn whole_frame_transforms_as_each_part_independently() {
        let mut canvas = Canvas::new();
        let mut quad = Quadrotor::with_dimensions(&mut canvas, 0.4, 0.1);
        let position = Vector3::new(-2.0, 0.5, 4.0);
        let orientation = Matrix3::from_angle_x(Deg(30.0)) * Matrix3::from_angle_z(Deg(45.0));

        quad.set(position, orientation);

        for artist in quad.artists() {
            let artist = artist.borrow();
            let base: Vec<_> = artist
                .primitive
                .base()
                .iter()
                .filter_map(|e| e.as_point())
                .collect();
            for (world, local) in artist.primitive.world_points().zip(base) {
                assert_relative_eq!(world, orientation * local + position, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn registers_skeleton_and_rotors_on_the_canvas() {
        let mut canvas = Canvas::new();
        let quad = Quadrotor::new(&mut canvas);

        assert_eq!(canvas.container(ArtistCategory::Collections).len(), 1);
        assert_eq!(canvas.container(ArtistCategory::Surfaces).len(), 4);
        assert!(Artist::same(
            &canvas.container(ArtistCategory::Collections)[0],
            &quad.skeleton()
        ));
    }
}
