// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_camera::{CameraConfig, CameraKey, VirtualCamera, WireScene};
use easel_imaging::Surface;
use easel_render::{DrawableFactory, FrameStats, RenderPipeline, ShapeModel, render_wireframe};
use easel_view2d::{Viewport, ViewportConfig, ZoomUpdate};

use crate::change::{ChangeQueue, ChangeSet, ChangeSource, ModelChange};
use crate::shell::ViewShell;

/// One editor session: a shape model seen through a viewport, with an
/// optional 3D wireframe overlay seen through a virtual camera.
///
/// The view owns all session state and is driven entirely by calls from
/// the shell. It never paints on its own; it asks the shell to
/// [`refresh`](ViewShell::refresh) and the shell answers with
/// [`DrawingView::refresh_view`].
#[derive(Debug)]
pub struct DrawingView<M, F, H> {
    model: M,
    factory: F,
    shell: H,
    viewport: Viewport,
    camera: VirtualCamera,
    scene: WireScene,
    changes: ChangeQueue,
}

impl<M, F, H> DrawingView<M, F, H>
where
    M: ShapeModel + ChangeSource,
    F: DrawableFactory<M::Shape>,
    H: ViewShell,
{
    /// Creates a view with the default viewport and camera.
    pub fn new(model: M, factory: F, shell: H) -> Self {
        Self::with_config(
            model,
            factory,
            shell,
            ViewportConfig::default(),
            CameraConfig::default(),
        )
    }

    /// Creates a view with explicit viewport and camera configuration.
    pub fn with_config(
        model: M,
        factory: F,
        shell: H,
        viewport: ViewportConfig,
        camera: CameraConfig,
    ) -> Self {
        Self {
            model,
            factory,
            shell,
            viewport: Viewport::new(viewport),
            camera: VirtualCamera::new(camera),
            scene: WireScene::new(),
            changes: ChangeQueue::new(),
        }
    }

    /// The shape model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the shape model.
    ///
    /// Mutations become visible at the next [`DrawingView::pump_changes`].
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// The shell.
    pub fn shell(&self) -> &H {
        &self.shell
    }

    /// Mutable access to the shell.
    pub fn shell_mut(&mut self) -> &mut H {
        &mut self.shell
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The virtual camera.
    pub fn camera(&self) -> &VirtualCamera {
        &self.camera
    }

    /// The 3D scene.
    pub fn scene(&self) -> &WireScene {
        &self.scene
    }

    /// Edits the 3D scene and records a [`ModelChange::SceneChanged`].
    pub fn edit_scene<R>(&mut self, edit: impl FnOnce(&mut WireScene) -> R) -> R {
        let result = edit(&mut self.scene);
        self.changes.push(ModelChange::SceneChanged);
        result
    }

    /// Whether the 3D wireframe is shown and camera keys are live.
    pub fn is_3d_model_displayed(&self) -> bool {
        self.camera.is_movement_enabled()
    }

    /// Zoom-in button handler.
    pub fn zoom_in_button_hit(&mut self) {
        if let Some(update) = self.viewport.zoom_in() {
            self.zoom_changed(update);
        }
    }

    /// Zoom-out button handler.
    pub fn zoom_out_button_hit(&mut self) {
        if let Some(update) = self.viewport.zoom_out() {
            self.zoom_changed(update);
        }
    }

    /// Horizontal scrollbar handler.
    pub fn h_scrollbar_changed(&mut self, value: i32) {
        self.viewport.set_horizontal_scroll(value);
        self.shell.refresh();
    }

    /// Vertical scrollbar handler.
    pub fn v_scrollbar_changed(&mut self, value: i32) {
        self.viewport.set_vertical_scroll(value);
        self.shell.refresh();
    }

    /// Key handler for the keys currently held, as toolkit key codes.
    ///
    /// While the 3D model is hidden this does nothing. Otherwise each code
    /// that names a [`CameraKey`] is queued, the camera is updated once and
    /// the shell is asked to refresh.
    pub fn key_pressed(&mut self, keys: impl IntoIterator<Item = u32>) {
        if !self.camera.is_movement_enabled() {
            return;
        }
        for code in keys {
            match CameraKey::from_key_code(code) {
                Some(key) => {
                    self.camera.queue_key(key);
                }
                None => log::trace!("ignoring key code {code}"),
            }
        }
        if self.camera.update_scene(&mut self.scene) {
            self.shell.refresh();
        }
    }

    /// Shows or hides the 3D wireframe and returns whether it is now shown.
    ///
    /// Camera movement is enabled exactly while the wireframe is shown.
    pub fn toggle_3d_model_display(&mut self) -> bool {
        let shown = self.camera.toggle_movement_enabled();
        if shown {
            self.camera.update_scene(&mut self.scene);
        }
        log::debug!("3D model display {}", if shown { "on" } else { "off" });
        self.shell.refresh();
        shown
    }

    /// Paints one frame into `surface`.
    ///
    /// The 2D drawing is painted first, then the wireframe if it is shown.
    pub fn refresh_view(&self, surface: &mut dyn Surface) -> FrameStats {
        let stats = RenderPipeline::render(&self.model, &self.factory, &self.viewport, surface);
        if self.is_3d_model_displayed() {
            render_wireframe(&self.scene, &self.viewport, surface);
        }
        stats
    }

    /// Records a change made outside the view.
    ///
    /// Nothing is repainted until [`DrawingView::pump_changes`].
    pub fn notify(&mut self, change: ModelChange) {
        self.changes.push(change);
    }

    /// Collects pending changes from the model and from
    /// [`DrawingView::notify`], and requests a single refresh if there were
    /// any.
    ///
    /// Returns the categories of the changes handled.
    pub fn pump_changes(&mut self) -> ChangeSet {
        self.model.drain_changes(&mut self.changes);
        let handled = self.changes.drain_summary();
        if !handled.is_empty() {
            log::debug!(
                "model changed ({handled:?}), revision {}",
                self.changes.revision()
            );
            self.shell.refresh();
        }
        handled
    }

    fn zoom_changed(&mut self, update: ZoomUpdate) {
        log::debug!("zoom {}", update.scaling_factor);
        self.shell.apply_zoom(update);
        self.shell.refresh();
    }
}
