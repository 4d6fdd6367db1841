//! Draw layer selection
//!
//! Which parts of the scene a renderer should draw each frame. Only the
//! slice-derived layers need the slicing pipeline to run.

use bitflags::bitflags;

use crate::config::RenderingConfig;

bitflags! {
    /// Layers a frame can draw
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DrawLayers: u8 {
        /// Shaded bounding cube
        const CUBE = 1 << 0;
        /// Cube edges as lines
        const EDGES = 1 << 1;
        /// Slice polygon corners as points
        const POINTS = 1 << 2;
        /// Slice triangles as wireframe geometry
        const GEOMETRY = 1 << 3;
        /// Textured, blended slice stack
        const VOLUME = 1 << 4;
        /// Every layer fed by the slicer
        const SLICED = Self::POINTS.bits() | Self::GEOMETRY.bits() | Self::VOLUME.bits();
    }
}

impl Default for DrawLayers {
    fn default() -> Self {
        DrawLayers::EDGES | DrawLayers::VOLUME
    }
}

impl DrawLayers {
    /// Layers enabled by the rendering config's `draw_*` switches
    pub fn from_config(config: &RenderingConfig) -> Self {
        let mut layers = DrawLayers::empty();
        layers.set(DrawLayers::CUBE, config.draw_cube);
        layers.set(DrawLayers::EDGES, config.draw_edges);
        layers.set(DrawLayers::POINTS, config.draw_points);
        layers.set(DrawLayers::GEOMETRY, config.draw_geometry);
        layers.set(DrawLayers::VOLUME, config.draw_volume);
        layers
    }

    /// True when any enabled layer draws slice geometry
    #[inline]
    pub fn needs_slices(self) -> bool {
        self.intersects(DrawLayers::SLICED)
    }
}
