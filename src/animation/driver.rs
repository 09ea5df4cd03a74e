//! Animation driver: session state machine and per-frame dispatch.

use std::path::Path;

use log::{debug, info, trace};
use thiserror::Error;

use super::registry::DrawableSet;
use super::traits::{Animate, Frame, RenderBackend};
use crate::canvas::{ArtistHandle, Canvas};

/// Session lifecycle of an [`AnimationDriver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Created, drawable set not built yet
    Uninitialized,
    /// Drawable set built, no frame advanced yet
    Initialized,
    /// Frames are being advanced
    Running,
    /// Session over; further frames are refused
    Stopped,
}

/// Driver misuse and frame failures
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("animation driver is not initialized")]
    Uninitialized,
    #[error("animation driver is already initialized")]
    AlreadyInitialized,
    #[error("animation driver is stopped")]
    Stopped,
    #[error("frame callback failed: {0}")]
    Frame(anyhow::Error),
    #[error("render backend failed: {0}")]
    Backend(anyhow::Error),
}

/// Drives an [`Animate`] implementation through an animation session.
///
/// The driver owns the canvas and the cached drawable set. At
/// initialization it reconciles two sources into one authoritative
/// redraw list: the handles the animation returns explicitly, and
/// everything scene objects registered on the canvas themselves. Per
/// frame it invokes the animation's callback and then yields the full
/// cached set to the rendering layer; correctness never depends on
/// knowing which subset actually moved.
pub struct AnimationDriver {
    canvas: Canvas,
    animator: Box<dyn Animate>,
    drawables: DrawableSet,
    state: DriverState,
    writer: String,
}

impl AnimationDriver {
    /// Encoder name handed to [`RenderBackend::save`] when none is given
    /// explicitly
    pub const DEFAULT_WRITER: &'static str = "ffmpeg";

    /// Create a driver for `animator` with an empty canvas
    pub fn new(animator: Box<dyn Animate>) -> Self {
        Self {
            canvas: Canvas::new(),
            animator,
            drawables: DrawableSet::new(),
            state: DriverState::Uninitialized,
            writer: Self::DEFAULT_WRITER.to_string(),
        }
    }

    /// Build the drawable set.
    ///
    /// Runs the scene-construction callback, inserts its explicitly
    /// returned handles first (in order, identity-deduplicated), then
    /// scans every canvas container and appends whatever was registered
    /// there directly. Happens exactly once per session; every later
    /// frame reuses the cached set.
    pub fn init(&mut self) -> Result<&[ArtistHandle], AnimationError> {
        if self.state != DriverState::Uninitialized {
            return Err(AnimationError::AlreadyInitialized);
        }

        let explicit = self.animator.setup(&mut self.canvas).unwrap_or_default();
        for artist in &explicit {
            self.drawables.insert(artist);
        }
        let discovered = self.drawables.extend_from_canvas(&self.canvas);

        self.state = DriverState::Initialized;
        info!(
            "drawable set built: {} artists ({} explicit, {} discovered on canvas)",
            self.drawables.len(),
            explicit.len(),
            discovered
        );
        Ok(self.drawables.as_slice())
    }

    /// Advance one frame and yield the full cached drawable set.
    ///
    /// The per-frame callback only needs to touch objects that moved;
    /// the set handed back always covers every drawable. If the callback
    /// fails, nothing is yielded and the frame must not be blitted.
    pub fn advance(&mut self, frame: Frame) -> Result<&[ArtistHandle], AnimationError> {
        match self.state {
            DriverState::Uninitialized => return Err(AnimationError::Uninitialized),
            DriverState::Stopped => return Err(AnimationError::Stopped),
            DriverState::Initialized => {
                debug!("animation running");
                self.state = DriverState::Running;
            }
            DriverState::Running => {}
        }

        self.animator.frame(frame).map_err(AnimationError::Frame)?;
        trace!("advanced to {:?}", frame);
        Ok(self.drawables.as_slice())
    }

    /// Stop the session; further [`advance`](Self::advance) calls fail
    pub fn stop(&mut self) {
        debug!("animation stopped from state {:?}", self.state);
        self.state = DriverState::Stopped;
    }

    /// Append artists added to the canvas after initialization.
    ///
    /// Everything already cached keeps its first-discovery position.
    /// Returns the number of newly discovered drawables.
    pub fn rescan(&mut self) -> Result<usize, AnimationError> {
        if self.state == DriverState::Uninitialized {
            return Err(AnimationError::Uninitialized);
        }
        let added = self.drawables.extend_from_canvas(&self.canvas);
        if added > 0 {
            debug!("rescan discovered {} new artists", added);
        }
        Ok(added)
    }

    /// Run a whole session: initialize if needed, advance and blit every
    /// frame in order, then stop.
    pub fn run(
        &mut self,
        frames: impl IntoIterator<Item = Frame>,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), AnimationError> {
        if self.state == DriverState::Uninitialized {
            self.init()?;
        }
        for frame in frames {
            self.advance(frame)?;
            backend
                .blit(self.drawables.as_slice())
                .map_err(AnimationError::Backend)?;
        }
        self.stop();
        Ok(())
    }

    /// Hand the cached drawable set to the backend for encoding at
    /// `path`, using the configured writer. Pure pass-through: the core
    /// does no encoding of its own.
    pub fn save(
        &mut self,
        path: &Path,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), AnimationError> {
        let writer = self.writer.clone();
        self.save_with(path, &writer, backend)
    }

    /// [`save`](Self::save) with an explicit writer name
    pub fn save_with(
        &mut self,
        path: &Path,
        writer: &str,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), AnimationError> {
        if self.state == DriverState::Uninitialized {
            return Err(AnimationError::Uninitialized);
        }
        info!("saving animation to {} via {}", path.display(), writer);
        backend
            .save(path, writer, self.drawables.as_slice())
            .map_err(AnimationError::Backend)
    }

    /// Current session state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The host canvas
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable access to the host canvas, e.g. for artists added after
    /// setup (follow with [`rescan`](Self::rescan))
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Cached drawable set, empty before [`init`](Self::init)
    pub fn drawables(&self) -> &[ArtistHandle] {
        self.drawables.as_slice()
    }

    /// Encoder name used by [`save`](Self::save)
    pub fn writer(&self) -> &str {
        &self.writer
    }

    /// Override the default encoder name
    pub fn set_writer(&mut self, writer: impl Into<String>) {
        self.writer = writer.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Artist, ArtistCategory, ArtistKind, Style};
    use crate::scene::primitive::RigidPrimitive;
    use anyhow::bail;
    use cgmath::Vector3;
    use std::path::PathBuf;

    fn dot() -> ArtistHandle {
        Artist::handle(
            ArtistKind::Line,
            RigidPrimitive::from_points(&[Vector3::new(0.0, 0.0, 0.0)]),
            Style::default(),
        )
    }

    /// Scripted scene: registers and returns fixed handles, optionally
    /// failing on one frame index.
    struct StubScene {
        explicit: Vec<ArtistHandle>,
        canvas_only: Vec<(ArtistCategory, ArtistHandle)>,
        fail_on: Option<usize>,
    }

    impl StubScene {
        fn new() -> Self {
            Self {
                explicit: Vec::new(),
                canvas_only: Vec::new(),
                fail_on: None,
            }
        }
    }

    impl Animate for StubScene {
        fn setup(&mut self, canvas: &mut Canvas) -> Option<Vec<ArtistHandle>> {
            for (category, artist) in &self.canvas_only {
                canvas.add(*category, artist);
            }
            Some(self.explicit.clone())
        }

        fn frame(&mut self, frame: Frame) -> anyhow::Result<()> {
            if let (Frame::Index(i), Some(fail_on)) = (frame, self.fail_on) {
                if i == fail_on {
                    bail!("scripted failure at frame {i}");
                }
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingBackend {
        blits: usize,
        saved: Vec<(PathBuf, String, usize)>,
    }

    impl RenderBackend for RecordingBackend {
        fn blit(&mut self, _drawables: &[ArtistHandle]) -> anyhow::Result<()> {
            self.blits += 1;
            Ok(())
        }

        fn save(
            &mut self,
            path: &Path,
            writer: &str,
            drawables: &[ArtistHandle],
        ) -> anyhow::Result<()> {
            self.saved
                .push((path.to_path_buf(), writer.to_string(), drawables.len()));
            Ok(())
        }
    }

    #[test]
    fn init_reconciles_explicit_and_canvas_drawables() {
        let shared = dot();
        let explicit_only = dot();
        let canvas_only = dot();

        let mut scene = StubScene::new();
        scene.explicit = vec![shared.clone(), explicit_only.clone()];
        scene.canvas_only = vec![
            (ArtistCategory::Lines, shared.clone()),
            (ArtistCategory::Artists, canvas_only.clone()),
        ];

        let mut driver = AnimationDriver::new(Box::new(scene));
        let drawables: Vec<_> = driver.init().unwrap().to_vec();

        // The shared artist appears exactly once, at its explicit
        // (first-discovery) position
        assert_eq!(drawables.len(), 3);
        assert!(Artist::same(&drawables[0], &shared));
        assert!(Artist::same(&drawables[1], &explicit_only));
        assert!(Artist::same(&drawables[2], &canvas_only));
    }

    #[test]
    fn advance_yields_the_cached_set_every_frame() {
        let artist = dot();
        let mut scene = StubScene::new();
        scene.canvas_only = vec![(ArtistCategory::Lines, artist.clone())];

        let mut driver = AnimationDriver::new(Box::new(scene));
        driver.init().unwrap();

        for i in 0..3 {
            let drawables = driver.advance(Frame::Index(i)).unwrap();
            assert_eq!(drawables.len(), 1);
            assert!(Artist::same(&drawables[0], &artist));
        }
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn advance_requires_initialization() {
        let mut driver = AnimationDriver::new(Box::new(StubScene::new()));
        assert!(matches!(
            driver.advance(Frame::Index(0)),
            Err(AnimationError::Uninitialized)
        ));
    }

    #[test]
    fn init_refuses_to_run_twice() {
        let mut driver = AnimationDriver::new(Box::new(StubScene::new()));
        driver.init().unwrap();
        assert!(matches!(
            driver.init(),
            Err(AnimationError::AlreadyInitialized)
        ));
    }

    #[test]
    fn stopped_driver_refuses_frames() {
        let mut driver = AnimationDriver::new(Box::new(StubScene::new()));
        driver.init().unwrap();
        driver.stop();
        assert!(matches!(
            driver.advance(Frame::Index(0)),
            Err(AnimationError::Stopped)
        ));
    }

    #[test]
    fn failed_frame_yields_nothing() {
        let mut scene = StubScene::new();
        scene.canvas_only = vec![(ArtistCategory::Lines, dot())];
        scene.fail_on = Some(1);

        let mut driver = AnimationDriver::new(Box::new(scene));
        driver.init().unwrap();

        assert!(driver.advance(Frame::Index(0)).is_ok());
        assert!(matches!(
            driver.advance(Frame::Index(1)),
            Err(AnimationError::Frame(_))
        ));
    }

    #[test]
    fn rescan_picks_up_artists_added_after_init() {
        let mut driver = AnimationDriver::new(Box::new(StubScene::new()));
        driver.init().unwrap();
        assert!(driver.drawables().is_empty());

        let late = dot();
        driver.canvas_mut().add(ArtistCategory::Artists, &late);
        assert_eq!(driver.rescan().unwrap(), 1);
        assert!(Artist::same(&driver.drawables()[0], &late));
    }

    #[test]
    fn run_blits_every_frame_then_stops() {
        let mut scene = StubScene::new();
        scene.canvas_only = vec![(ArtistCategory::Lines, dot())];

        let mut driver = AnimationDriver::new(Box::new(scene));
        let mut backend = RecordingBackend::default();
        driver
            .run((0..4).map(Frame::Index), &mut backend)
            .unwrap();

        assert_eq!(backend.blits, 4);
        assert_eq!(driver.state(), DriverState::Stopped);
    }

    #[test]
    fn save_passes_the_configured_writer_through() {
        let mut scene = StubScene::new();
        scene.canvas_only = vec![(ArtistCategory::Lines, dot())];

        let mut driver = AnimationDriver::new(Box::new(scene));
        driver.init().unwrap();

        let mut backend = RecordingBackend::default();
        driver
            .save(Path::new("out/hover.mp4"), &mut backend)
            .unwrap();
        driver.set_writer("imagemagick");
        driver
            .save(Path::new("out/hover.gif"), &mut backend)
            .unwrap();

        assert_eq!(
            backend.saved[0],
            (PathBuf::from("out/hover.mp4"), "ffmpeg".to_string(), 1)
        );
        assert_eq!(
            backend.saved[1],
            (PathBuf::from("out/hover.gif"), "imagemagick".to_string(), 1)
        );
    }
}
