// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_imaging::Surface;
use easel_view2d::Viewport;

use crate::drawable::{Drawable, DrawableFactory, DrawingParameters, Shape, ShapeModel};

/// Counters describing one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Shapes drawn successfully.
    pub drawn: usize,
    /// Shapes whose drawable reported an error.
    pub skipped: usize,
    /// Whether a selection outline was drawn.
    pub outline_drawn: bool,
}

/// Draws a shape model through a viewport.
///
/// Shapes are painted back to front. The selected shape, if any, is painted
/// in its normal position and its outline is painted once more at the very
/// end, so handles always sit on top of every other shape. A shape whose
/// drawable fails is logged and skipped; the rest of the frame still renders.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderPipeline;

impl RenderPipeline {
    /// Renders `model` into `surface`.
    pub fn render<M, F>(
        model: &M,
        factory: &F,
        viewport: &Viewport,
        surface: &mut dyn Surface,
    ) -> FrameStats
    where
        M: ShapeModel + ?Sized,
        F: DrawableFactory<M::Shape> + ?Sized,
    {
        let params = DrawingParameters::from_viewport(viewport);
        let mut stats = FrameStats::default();
        let mut selected = None;

        for shape in model.shapes_reversed() {
            let drawable = factory.create_drawable(shape);
            surface.set_transform(params.world_to_view);
            match drawable.draw(surface, &params) {
                Ok(()) => stats.drawn += 1,
                Err(err) => {
                    log::warn!("skipping shape: {err}");
                    stats.skipped += 1;
                    continue;
                }
            }
            if shape.is_selected() {
                selected = Some(drawable);
            }
        }

        if let Some(drawable) = selected {
            surface.set_transform(params.world_to_view);
            match drawable.draw_outline(surface, &params) {
                Ok(()) => stats.outline_drawn = true,
                Err(err) => log::warn!("skipping selection outline: {err}"),
            }
        }

        log::trace!(
            "frame: {} drawn, {} skipped, outline {}",
            stats.drawn,
            stats.skipped,
            stats.outline_drawn
        );
        stats
    }
}
