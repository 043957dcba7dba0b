// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_view2d::ZoomUpdate;

/// Callbacks into the UI shell hosting a [`crate::DrawingView`].
///
/// The shell owns the widgets (zoom label, scrollbars, canvas); the view
/// tells it what to show and when to repaint. A repaint request is expected
/// to come back as a call to [`crate::DrawingView::refresh_view`].
pub trait ViewShell {
    /// Shows the current scaling factor.
    fn set_zoom_text(&mut self, scaling_factor: f64);

    /// Sets the horizontal scrollbar knob size.
    fn set_h_scroll_knob(&mut self, size: i32);

    /// Moves the horizontal scrollbar.
    fn set_h_scroll_position(&mut self, position: i32);

    /// Sets the vertical scrollbar knob size.
    fn set_v_scroll_knob(&mut self, size: i32);

    /// Moves the vertical scrollbar.
    fn set_v_scroll_position(&mut self, position: i32);

    /// Requests a repaint.
    fn refresh(&mut self);

    /// Pushes every field of a [`ZoomUpdate`] to the widgets.
    fn apply_zoom(&mut self, update: ZoomUpdate) {
        self.set_zoom_text(update.scaling_factor);
        self.set_h_scroll_knob(update.knob_size);
        self.set_h_scroll_position(update.h_position);
        self.set_v_scroll_knob(update.knob_size);
        self.set_v_scroll_position(update.v_position);
    }
}

impl<H: ViewShell + ?Sized> ViewShell for &mut H {
    fn set_zoom_text(&mut self, scaling_factor: f64) {
        (**self).set_zoom_text(scaling_factor);
    }

    fn set_h_scroll_knob(&mut self, size: i32) {
        (**self).set_h_scroll_knob(size);
    }

    fn set_h_scroll_position(&mut self, position: i32) {
        (**self).set_h_scroll_position(position);
    }

    fn set_v_scroll_knob(&mut self, size: i32) {
        (**self).set_v_scroll_knob(size);
    }

    fn set_v_scroll_position(&mut self, position: i32) {
        (**self).set_v_scroll_position(position);
    }

    fn refresh(&mut self) {
        (**self).refresh();
    }
}
