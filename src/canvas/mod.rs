//! # Canvas Model
//!
//! The host canvas that scene objects register their drawables on,
//! organized as one ordered container per artist category.
//!
//! Scene objects add their artists here at construction time, the same
//! way they would attach to a plotting backend's axes. The animation
//! driver's drawable registry then scans every container exactly once at
//! initialization through the [`Canvas::containers`] capability query,
//! rather than introspecting the backend by attribute name.

mod artist;

pub use artist::{Artist, ArtistHandle, ArtistKind, Color, Style};

/// Containers a canvas exposes, in canonical scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistCategory {
    /// Filled surfaces and patches
    Surfaces,
    /// Segment and patch collections
    Collections,
    /// Individual lines
    Lines,
    /// Text labels
    Texts,
    /// Generic artists that fit no other container
    Artists,
    /// Raster images
    Images,
}

impl ArtistCategory {
    /// Every container, in the canonical scan order
    pub const ALL: [ArtistCategory; 6] = [
        ArtistCategory::Surfaces,
        ArtistCategory::Collections,
        ArtistCategory::Lines,
        ArtistCategory::Texts,
        ArtistCategory::Artists,
        ArtistCategory::Images,
    ];
}

/// The host canvas: ordered drawable containers, one per category.
///
/// The canvas itself allows duplicate handles; deduplication is the
/// drawable registry's job and uses handle identity.
#[derive(Debug, Default)]
pub struct Canvas {
    surfaces: Vec<ArtistHandle>,
    collections: Vec<ArtistHandle>,
    lines: Vec<ArtistHandle>,
    texts: Vec<ArtistHandle>,
    artists: Vec<ArtistHandle>,
    images: Vec<ArtistHandle>,
}

impl Canvas {
    /// Creates a new empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an artist to a container, keeping a shared handle
    pub fn add(&mut self, category: ArtistCategory, artist: &ArtistHandle) {
        self.container_mut(category).push(artist.clone());
    }

    /// Drawables in one container, in insertion order
    pub fn container(&self, category: ArtistCategory) -> &[ArtistHandle] {
        match category {
            ArtistCategory::Surfaces => &self.surfaces,
            ArtistCategory::Collections => &self.collections,
            ArtistCategory::Lines => &self.lines,
            ArtistCategory::Texts => &self.texts,
            ArtistCategory::Artists => &self.artists,
            ArtistCategory::Images => &self.images,
        }
    }

    /// Every `(category, drawables)` pair, in canonical scan order
    pub fn containers(&self) -> impl Iterator<Item = (ArtistCategory, &[ArtistHandle])> {
        ArtistCategory::ALL
            .iter()
            .map(move |&category| (category, self.container(category)))
    }

    /// Total number of handles across all containers
    pub fn artist_count(&self) -> usize {
        self.containers().map(|(_, drawables)| drawables.len()).sum()
    }

    fn container_mut(&mut self, category: ArtistCategory) -> &mut Vec<ArtistHandle> {
        match category {
            ArtistCategory::Surfaces => &mut self.surfaces,
            ArtistCategory::Collections => &mut self.collections,
            ArtistCategory::Lines => &mut self.lines,
            ArtistCategory::Texts => &mut self.texts,
            ArtistCategory::Artists => &mut self.artists,
            ArtistCategory::Images => &mut self.images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::primitive::RigidPrimitive;
    use cgmath::Vector3;

    fn dot() -> ArtistHandle {
        Artist::handle(
            ArtistKind::Line,
            RigidPrimitive::from_points(&[Vector3::new(0.0, 0.0, 0.0)]),
            Style::default(),
        )
    }

    #[test]
    fn containers_keep_insertion_order() {
        let mut canvas = Canvas::new();
        let first = dot();
        let second = dot();
        canvas.add(ArtistCategory::Lines, &first);
        canvas.add(ArtistCategory::Lines, &second);

        let lines = canvas.container(ArtistCategory::Lines);
        assert_eq!(lines.len(), 2);
        assert!(Artist::same(&lines[0], &first));
        assert!(Artist::same(&lines[1], &second));
    }

    #[test]
    fn scan_order_follows_canonical_category_order() {
        let mut canvas = Canvas::new();
        canvas.add(ArtistCategory::Images, &dot());
        canvas.add(ArtistCategory::Surfaces, &dot());

        let categories: Vec<_> = canvas.containers().map(|(c, _)| c).collect();
        assert_eq!(categories.as_slice(), ArtistCategory::ALL.as_slice());
        assert_eq!(canvas.artist_count(), 2);
    }
}
