//! Stable lane-to-color assignment.

use std::collections::HashMap;

/// Palette used when the configuration does not provide one.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Session-scoped color cache.
///
/// The first lane seen gets `palette[0]`, the second `palette[1]`, and so on,
/// wrapping around the palette. Once assigned, a lane keeps its color for
/// the lifetime of the registry.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    palette: Vec<String>,
    assigned: HashMap<u64, String>,
}

impl ColorRegistry {
    /// Creates a registry over `palette`; an empty palette falls back to
    /// [`DEFAULT_PALETTE`].
    pub fn new(palette: Vec<String>) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect()
        } else {
            palette
        };
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    /// Color of `lane_id`, assigning the next palette entry on first sight.
    pub fn color_for(&mut self, lane_id: u64) -> &str {
        let seen = self.assigned.len();
        let palette = &self.palette;
        self.assigned
            .entry(lane_id)
            .or_insert_with(|| palette[seen % palette.len()].clone())
    }

    /// Number of lanes that already have a color.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
