//! Drawable registry: the canonical ordered redraw set.

use crate::canvas::{Artist, ArtistHandle, Canvas};

/// Ordered, identity-deduplicated set of drawables.
///
/// Built once per animation session and referenced on every subsequent
/// frame. A drawable keeps its first-discovery position no matter how
/// many containers it also appears in, so the redraw order is
/// reproducible.
#[derive(Debug, Default)]
pub struct DrawableSet {
    entries: Vec<ArtistHandle>,
}

impl DrawableSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `artist` unless an identical handle is already present.
    ///
    /// Returns `true` if the artist was appended.
    pub fn insert(&mut self, artist: &ArtistHandle) -> bool {
        if self.contains(artist) {
            return false;
        }
        self.entries.push(artist.clone());
        true
    }

    /// Identity membership test (never value equality)
    pub fn contains(&self, artist: &ArtistHandle) -> bool {
        self.entries.iter().any(|entry| Artist::same(entry, artist))
    }

    /// Scan every canvas container in canonical order, appending any
    /// drawable not seen before.
    ///
    /// Returns the number of drawables appended.
    pub fn extend_from_canvas(&mut self, canvas: &Canvas) -> usize {
        let mut added = 0;
        for (_, drawables) in canvas.containers() {
            for artist in drawables {
                if self.insert(artist) {
                    added += 1;
                }
            }
        }
        added
    }

    /// The set contents, in first-discovery order
    pub fn as_slice(&self) -> &[ArtistHandle] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
