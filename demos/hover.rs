//! Quadrotor with a slung load flying a slow circle.
//!
//! Run with `RUST_LOG=info cargo run --example hover`. The backend here
//! is a stub that logs what it is handed; a real backend would blit the
//! drawables onto a canvas and encode the saved frames.

use std::path::Path;

use anyhow::Result;
use cgmath::{Deg, Matrix3, Vector3};
use log::info;

use skyrig::animation::{Animate, Frame, RenderBackend};
use skyrig::canvas::{ArtistHandle, Canvas};
use skyrig::scene::{Link, Load, Quadrotor};

struct SceneObjects {
    drone: Quadrotor,
    load: Load,
    left_tether: Link,
    right_tether: Link,
}

#[derive(Default)]
struct HoverScene {
    objects: Option<SceneObjects>,
}

impl Animate for HoverScene {
    fn setup(&mut self, canvas: &mut Canvas) -> Option<Vec<ArtistHandle>> {
        let drone = Quadrotor::new(canvas);
        let load = Load::new(
            canvas,
            &[
                Vector3::new(0.1, 0.0, -0.1),
                Vector3::new(-0.05, 0.087, -0.1),
                Vector3::new(-0.05, -0.087, -0.1),
            ],
        );
        let left_tether = Link::new(canvas);
        let right_tether = Link::new(canvas);

        self.objects = Some(SceneObjects {
            drone,
            load,
            left_tether,
            right_tether,
        });

        // Everything is discovered through the canvas scan
        None
    }

    fn frame(&mut self, frame: Frame) -> Result<()> {
        let objects = self.objects.as_mut().expect("setup runs before frames");
        let t = match frame {
            Frame::Index(i) => i as f32 / 60.0,
            Frame::Value(v) => v,
        };

        let position = Vector3::new(t.cos(), t.sin(), 2.0);
        let yaw = Matrix3::from_angle_z(Deg(60.0 * t));
        objects.drone.set(position, yaw);

        let load_position = position - Vector3::new(0.0, 0.0, 1.0);
        objects.load.set(load_position, yaw);

        let left_arm = position + yaw * Vector3::new(0.315, 0.0, 0.0);
        let right_arm = position + yaw * Vector3::new(-0.315, 0.0, 0.0);
        objects.left_tether.set(left_arm, load_position);
        objects.right_tether.set(right_arm, load_position);

        Ok(())
    }
}

/// Backend stub that logs instead of drawing
struct ConsoleBackend;

impl RenderBackend for ConsoleBackend {
    fn blit(&mut self, drawables: &[ArtistHandle]) -> Result<()> {
        info!("blit: {} artists", drawables.len());
        Ok(())
    }

    fn save(&mut self, path: &Path, writer: &str, drawables: &[ArtistHandle]) -> Result<()> {
        info!(
            "save: {} artists to {} via {}",
            drawables.len(),
            path.display(),
            writer
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut driver = skyrig::animate(HoverScene::default());
    let mut backend = ConsoleBackend;

    driver.run((0..240).map(Frame::Index), &mut backend)?;
    driver.save(Path::new("hover.mp4"), &mut backend)?;

    Ok(())
}
