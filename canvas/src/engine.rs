use std::time::Duration;

use tracing::{debug, info, trace};

use crate::color::Rgba;
use crate::config::CanvasConfig;
use crate::consts::STAGED_SIDE;
use crate::doc::{WidgetId, WidgetStore};
use crate::geom::{Point, Rect, Size};
use crate::input::{GestureSession, InputState};
use crate::palette::ColorPalette;
use crate::shape::{self, Shape};
use crate::widget::{RectangleWidget, SelectionChange};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to apply.
///
/// Geometry, selection and color changes are meant to be applied immediately,
/// without implicit animation. Only [`Action::PaletteFade`] is animated; a new
/// fade replaces whatever fade is still running.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A widget joined the canvas on top of all other widgets.
    WidgetInserted { id: WidgetId },
    /// A widget moved to the top of the stack.
    WidgetRaised { id: WidgetId },
    /// A widget's frame changed.
    FrameChanged { id: WidgetId, frame: Rect },
    /// A widget was selected or deselected.
    SelectionChanged { id: WidgetId, selected: bool },
    /// A widget took a new color.
    Recolored { id: WidgetId, color: Rgba },
    /// The palette reported a color under the finger.
    ColorPicked(Rgba),
    /// Fade the palette to fully visible or fully invisible.
    PaletteFade { visible: bool, duration: Duration },
    /// Keep the palette drawn above every widget.
    PaletteRaised,
    /// A single widget left the canvas.
    WidgetRemoved { id: WidgetId },
    /// Every widget was removed.
    Cleared,
}

/// The interactive rectangle editor.
///
/// Owns the widget collection, routes touches to the palette, to an existing
/// widget or to a new one, keeps selection exclusive, and shows the palette
/// exactly while something is selected.
pub struct CanvasEngine {
    pub config: CanvasConfig,
    pub widgets: WidgetStore,
    pub palette: ColorPalette,
    pub input: InputState,
    bounds: Rect,
    content_size: Option<Size>,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasEngine {
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            widgets: WidgetStore::new(),
            palette: ColorPalette::new(config.palette_width, config.swatch_spacing),
            input: InputState::Idle,
            bounds: Rect::default(),
            content_size: None,
        }
    }

    /// An engine sized to a `size` canvas.
    #[must_use]
    pub fn with_size(config: CanvasConfig, size: Size) -> Self {
        let mut engine = Self::new(config);
        engine.bounds = Rect::from_size(size);
        engine.palette.dock(engine.bounds);
        engine
    }

    // --- Geometry ---

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content_size
    }

    /// The letterboxed content area that normalized shapes are relative to.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        shape::content_bounds(self.bounds, self.content_size)
    }

    /// Resize the canvas. Widgets keep their normalized placement.
    pub fn set_bounds(&mut self, size: Size) -> Vec<Action> {
        let before = self.content_bounds();
        self.bounds = Rect::from_size(size);
        self.palette.dock(self.bounds);
        info!(width = size.width, height = size.height, "canvas resized");
        self.reproject(before)
    }

    /// Set or clear the fixed content size used for letterboxing. Widgets keep
    /// their normalized placement.
    pub fn set_content_size(&mut self, content_size: Option<Size>) -> Vec<Action> {
        let before = self.content_bounds();
        self.content_size = content_size;
        debug!(?content_size, "content size changed");
        self.reproject(before)
    }

    fn reproject(&mut self, before: Rect) -> Vec<Action> {
        let after = self.content_bounds();
        if !before.size().is_usable() || before == after {
            return Vec::new();
        }
        self.widgets
            .iter_mut()
            .map(|w| {
                let normalized = shape::to_normalized(w.frame, w.color, before);
                w.frame = shape::to_pixel_frame(&normalized, after);
                Action::FrameChanged { id: w.id(), frame: w.frame }
            })
            .collect()
    }

    // --- Touch input ---

    /// A touch went down at `pt`.
    pub fn touch_begin(&mut self, pt: Point) -> Vec<Action> {
        if self.palette.accepts(pt) {
            self.input = InputState::Picking;
            return self.pick(pt);
        }

        if self.content_size.is_some_and(Size::is_usable) && !self.content_bounds().contains(pt) {
            debug!(x = pt.x, y = pt.y, "touch outside content bounds ignored");
            self.input = InputState::Ignored;
            return Vec::new();
        }

        if let Some(id) = self.widgets.topmost_at(pt, self.config.handle_margin()) {
            return self.begin_on_widget(id, pt);
        }

        let color = self.palette.current_color().unwrap_or(self.config.default_color);
        let widget = RectangleWidget::new(Rect::new(pt.x, pt.y, STAGED_SIDE, STAGED_SIDE), color);
        debug!(id = %widget.id(), x = pt.x, y = pt.y, "staged new widget");
        self.input = InputState::Staged { widget, touch: pt };
        self.deselect_all()
    }

    fn begin_on_widget(&mut self, id: WidgetId, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        self.widgets.bring_to_front(&id);
        actions.push(Action::WidgetRaised { id });

        let Some(widget) = self.widgets.get(&id) else {
            return actions;
        };
        let session = widget.begin_gesture(pt, self.config.touch_target);
        debug!(%id, resize = session.is_resize(), "gesture began");
        if session.is_resize() {
            actions.extend(self.select_only(&id));
        }
        self.input = InputState::Tracking { session, moved: false };
        actions
    }

    /// The active touch moved to `pt`.
    pub fn touch_move(&mut self, pt: Point) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Staged { widget, touch } => {
                let id = widget.id();
                self.widgets.insert(widget);
                info!(%id, "widget created");
                let session = GestureSession::create(id, touch);
                let mut actions = vec![Action::WidgetInserted { id }, Action::PaletteRaised];
                actions.extend(self.track(session, pt));
                actions
            }
            InputState::Tracking { session, .. } => self.track(session, pt),
            InputState::Picking => {
                self.input = InputState::Picking;
                self.pick(pt)
            }
            state @ (InputState::Idle | InputState::Ignored) => {
                self.input = state;
                Vec::new()
            }
        }
    }

    fn track(&mut self, session: GestureSession, pt: Point) -> Vec<Action> {
        let minimum_size = self.config.minimum_size();
        let Some(widget) = self.widgets.get_mut(&session.widget) else {
            // The widget went away mid-gesture (shake or set_shapes).
            self.input = InputState::Ignored;
            return Vec::new();
        };
        let frame = widget.update_gesture(&session, pt, minimum_size);
        trace!(id = %session.widget, ?frame, "gesture moved");
        self.input = InputState::Tracking { session, moved: true };
        vec![Action::FrameChanged { id: session.widget, frame }]
    }

    /// The active touch lifted. Always returns the engine to idle.
    pub fn touch_end(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Staged { widget, .. } => {
                debug!(id = %widget.id(), "tap on empty canvas; staged widget discarded");
                Vec::new()
            }
            InputState::Tracking { session, moved } => {
                let Some(widget) = self.widgets.get_mut(&session.widget) else {
                    return Vec::new();
                };
                debug!(id = %session.widget, moved, "gesture ended");
                match widget.end_gesture(moved) {
                    Some(change) if change.selected => {
                        let mut actions = self.notify(vec![change]);
                        actions.extend(self.select_only(&change.id));
                        actions
                    }
                    Some(change) => self.notify(vec![change]),
                    None => Vec::new(),
                }
            }
            InputState::Picking | InputState::Idle | InputState::Ignored => Vec::new(),
        }
    }

    /// Remove one widget. The palette fades out if it held the last selection.
    pub fn remove_widget(&mut self, id: &WidgetId) -> Vec<Action> {
        let Some(widget) = self.widgets.remove(id) else {
            return Vec::new();
        };
        info!(id = %widget.id(), "widget removed");
        let mut actions = vec![Action::WidgetRemoved { id: widget.id() }];
        actions.extend(self.sync_palette());
        actions
    }

    /// Device shake: remove every widget, whatever gesture is in progress.
    pub fn shake(&mut self) -> Vec<Action> {
        let removed = self.widgets.clear();
        info!(removed, "canvas cleared by shake");
        let mut actions = vec![Action::Cleared];
        actions.extend(self.sync_palette());
        actions
    }

    // --- Selection ---

    /// Select `id` and deselect every other widget.
    pub fn select_only(&mut self, id: &WidgetId) -> Vec<Action> {
        let id = *id;
        let changes = self.set_selection(|w| w == id);
        self.notify(changes)
    }

    /// Deselect every widget.
    pub fn deselect_all(&mut self) -> Vec<Action> {
        let changes = self.set_selection(|_| false);
        self.notify(changes)
    }

    #[must_use]
    pub fn selection(&self) -> Vec<WidgetId> {
        self.widgets.selected_ids()
    }

    fn set_selection<F>(&mut self, wanted: F) -> Vec<SelectionChange>
    where
        F: Fn(WidgetId) -> bool,
    {
        self.widgets
            .iter_mut()
            .filter_map(|w| {
                let selected = wanted(w.id());
                w.set_selected(selected)
            })
            .collect()
    }

    /// Turn selection transitions into actions, fading the palette in on a
    /// selection and out once nothing is left selected.
    fn notify(&mut self, changes: Vec<SelectionChange>) -> Vec<Action> {
        let mut actions = Vec::new();
        for change in changes {
            debug!(id = %change.id, selected = change.selected, "selection changed");
            actions.push(Action::SelectionChanged { id: change.id, selected: change.selected });
            let show = if change.selected {
                true
            } else {
                self.widgets.selected_count() > 0
            };
            actions.extend(self.fade_palette(show));
        }
        actions
    }

    fn sync_palette(&mut self) -> Option<Action> {
        let show = self.widgets.selected_count() > 0;
        self.fade_palette(show)
    }

    fn fade_palette(&mut self, visible: bool) -> Option<Action> {
        if !self.palette.set_visible(visible) {
            return None;
        }
        debug!(visible, "palette fade");
        Some(Action::PaletteFade { visible, duration: self.config.fade_duration })
    }

    // --- Color ---

    fn pick(&mut self, pt: Point) -> Vec<Action> {
        let Some(color) = self.palette.touch(pt) else {
            return Vec::new();
        };
        trace!(%color, "color picked");
        let mut actions = vec![Action::ColorPicked(color)];
        actions.extend(self.recolor_selection(color));
        actions
    }

    /// Recolor every selected widget.
    pub fn recolor_selection(&mut self, color: Rgba) -> Vec<Action> {
        self.widgets
            .iter_mut()
            .filter(|w| w.is_selected())
            .map(|w| {
                w.color = color;
                Action::Recolored { id: w.id(), color }
            })
            .collect()
    }

    // --- Shapes ---

    /// Every widget as a normalized shape, back to front.
    #[must_use]
    pub fn shapes(&self) -> Vec<Shape> {
        let content = self.content_bounds();
        self.widgets.iter().map(|w| shape::to_normalized(w.frame, w.color, content)).collect()
    }

    /// Replace every widget with one widget per shape.
    pub fn set_shapes(&mut self, shapes: &[Shape]) -> Vec<Action> {
        self.widgets.clear();
        let mut actions = vec![Action::Cleared];
        let content = self.content_bounds();
        for s in shapes {
            let widget = RectangleWidget::new(shape::to_pixel_frame(s, content), s.color);
            actions.push(Action::WidgetInserted { id: widget.id() });
            self.widgets.insert(widget);
        }
        actions.push(Action::PaletteRaised);
        actions.extend(self.sync_palette());
        info!(count = shapes.len(), "shapes loaded");
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn widget(&self, id: &WidgetId) -> Option<&RectangleWidget> {
        self.widgets.get(id)
    }
}
