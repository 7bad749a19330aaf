use crate::core::data::complex::Complex;
use crate::core::data::grid_dims::GridDims;
use crate::core::data::root_set::RootSet;
use crate::core::data::viewport::Viewport;
use crate::core::util::complex_plane_coords::complex_to_pixel_coords;

pub const DEFAULT_ITERATION_COUNT: u32 = 20;

/// Half-extent of a root marker in pixels; a pointer press within this
/// distance of a marker grabs the root.
pub const ROOT_MARKER_HIT_RADIUS: f64 = 5.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RootId {
    A,
    B,
    C,
}

fn default_roots() -> RootSet {
    RootSet {
        a: Complex {
            real: -2.0,
            imag: 1.0,
        },
        b: Complex {
            real: 2.0,
            imag: 2.0,
        },
        c: Complex {
            real: -1.0,
            imag: -2.0,
        },
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(-5.0, 4.0, 10.0).expect("default viewport is valid")
}

/// The interactive state the presentation collaborator owns: current
/// roots, viewport, and iteration count, plus the dirty flag that gates
/// re-rendering and the bookkeeping for an in-progress root drag.
///
/// Every mutating operation marks the state changed; the collaborator
/// polls `take_changed` and issues a render only when something actually
/// moved, so renders never overlap.
#[derive(Debug)]
pub struct ExplorerState {
    roots: RootSet,
    viewport: Viewport,
    iteration_count: u32,
    changed: bool,
    dragged: Option<RootId>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            viewport: default_viewport(),
            iteration_count: DEFAULT_ITERATION_COUNT,
            changed: true,
            dragged: None,
        }
    }
}

impl ExplorerState {
    #[must_use]
    pub fn roots(&self) -> RootSet {
        self.roots
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    /// Dirty-flag pattern: reports whether anything changed since the last
    /// call and clears the flag, so a successful render marks the state
    /// clean.
    pub fn take_changed(&mut self) -> bool {
        std::mem::replace(&mut self.changed, false)
    }

    /// Pixel positions of the three root markers, in `a`, `b`, `c` order.
    #[must_use]
    pub fn root_markers(&self, dims: GridDims) -> [(f64, f64); 3] {
        [self.roots.a, self.roots.b, self.roots.c]
            .map(|root| complex_to_pixel_coords(root, self.viewport, dims))
    }

    /// Hit-tests the root markers at a pointer position and starts
    /// dragging the first hit, if any.
    pub fn begin_drag(&mut self, x: f64, y: f64, dims: GridDims) -> Option<RootId> {
        let markers = self.root_markers(dims);
        let ids = [RootId::A, RootId::B, RootId::C];

        for (id, (marker_x, marker_y)) in ids.into_iter().zip(markers) {
            if (marker_x - x).abs() < ROOT_MARKER_HIT_RADIUS
                && (marker_y - y).abs() < ROOT_MARKER_HIT_RADIUS
            {
                self.dragged = Some(id);
                return Some(id);
            }
        }

        None
    }

    /// Moves the dragged root to the plane coordinate under the pointer.
    /// Does nothing when no drag is in progress.
    pub fn drag_to(&mut self, x: f64, y: f64, dims: GridDims) {
        let Some(id) = self.dragged else {
            return;
        };

        let moved = Complex {
            real: self.viewport.left()
                + x / f64::from(dims.width()) * self.viewport.unit_width(),
            imag: self.viewport.top()
                - y / f64::from(dims.height()) * self.viewport.unit_height(dims),
        };

        match id {
            RootId::A => self.roots.a = moved,
            RootId::B => self.roots.b = moved,
            RootId::C => self.roots.c = moved,
        }

        self.changed = true;
    }

    pub fn end_drag(&mut self) {
        self.dragged = None;
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, dims: GridDims) {
        self.viewport.pan_by_pixels(dx, dy, dims);
        self.changed = true;
    }

    pub fn zoom(&mut self, steps: f64, dims: GridDims) {
        self.viewport.zoom(steps, dims);
        self.changed = true;
    }

    pub fn increment_iterations(&mut self) {
        self.iteration_count += 1;
        self.changed = true;
    }

    /// Decrementing at zero is a no-op: the count stays at zero and the
    /// frame is not dirtied.
    pub fn decrement_iterations(&mut self) {
        if self.iteration_count == 0 {
            return;
        }

        self.iteration_count -= 1;
        self.changed = true;
    }

    /// Restores the default scene and marks the frame for re-render.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> GridDims {
        GridDims::new(1024, 768).unwrap()
    }

    #[test]
    fn test_default_scene() {
        let state = ExplorerState::default();

        assert_eq!(state.roots(), super::default_roots());
        assert_eq!(state.viewport(), super::default_viewport());
        assert_eq!(state.iteration_count(), 20);
    }

    #[test]
    fn test_initial_state_is_dirty_exactly_once() {
        let mut state = ExplorerState::default();

        assert!(state.take_changed());
        assert!(!state.take_changed());
    }

    #[test]
    fn test_root_markers_for_default_scene() {
        let state = ExplorerState::default();

        let [(ax, ay), (bx, by), (cx, cy)] = state.root_markers(dims());

        assert!((ax - 307.2).abs() < 1e-9);
        assert!((ay - 307.2).abs() < 1e-9);
        assert!((bx - 716.8).abs() < 1e-9);
        assert!((by - 204.8).abs() < 1e-9);
        assert!((cx - 409.6).abs() < 1e-9);
        assert!((cy - 614.4).abs() < 1e-9);
    }

    #[test]
    fn test_begin_drag_hits_a_marker() {
        let mut state = ExplorerState::default();

        let grabbed = state.begin_drag(309.0, 305.0, dims());

        assert_eq!(grabbed, Some(RootId::A));
    }

    #[test]
    fn test_begin_drag_misses_everything() {
        let mut state = ExplorerState::default();

        let grabbed = state.begin_drag(10.0, 10.0, dims());

        assert_eq!(grabbed, None);
    }

    #[test]
    fn test_drag_moves_only_the_grabbed_root() {
        let mut state = ExplorerState::default();
        state.take_changed();
        let before = state.roots();

        state.begin_drag(716.0, 205.0, dims()); // root b's marker
        state.drag_to(512.0, 384.0, dims()); // canvas centre
        state.end_drag();

        let after = state.roots();
        assert_eq!(after.a, before.a);
        assert_eq!(after.c, before.c);
        // Centre of the default viewport: -5 + 5 = 0, 4 - 3.75 = 0.25.
        assert!((after.b.real - 0.0).abs() < 1e-12);
        assert!((after.b.imag - 0.25).abs() < 1e-12);
        assert!(state.take_changed());
    }

    #[test]
    fn test_drag_without_grab_is_inert() {
        let mut state = ExplorerState::default();
        state.take_changed();
        let before = state.roots();

        state.drag_to(100.0, 100.0, dims());

        assert_eq!(state.roots(), before);
        assert!(!state.take_changed());
    }

    #[test]
    fn test_pan_dirties_the_frame() {
        let mut state = ExplorerState::default();
        state.take_changed();

        state.pan_by_pixels(100.0, -50.0, dims());

        assert!(state.take_changed());
        assert!(state.viewport().left() < -5.0);
    }

    #[test]
    fn test_zoom_dirties_the_frame() {
        let mut state = ExplorerState::default();
        state.take_changed();

        state.zoom(2.0, dims());

        assert!(state.take_changed());
        assert!(state.viewport().unit_width() < 10.0);
    }

    #[test]
    fn test_iteration_count_increments() {
        let mut state = ExplorerState::default();

        state.increment_iterations();

        assert_eq!(state.iteration_count(), 21);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut state = ExplorerState::default();

        for _ in 0..100 {
            state.decrement_iterations();
        }

        assert_eq!(state.iteration_count(), 0);
    }

    #[test]
    fn test_decrement_at_zero_does_not_dirty() {
        let mut state = ExplorerState::default();
        for _ in 0..20 {
            state.decrement_iterations();
        }
        state.take_changed();

        state.decrement_iterations();

        assert_eq!(state.iteration_count(), 0);
        assert!(!state.take_changed());
    }

    #[test]
    fn test_reset_restores_the_default_scene() {
        let mut state = ExplorerState::default();
        state.zoom(5.0, dims());
        state.increment_iterations();
        state.begin_drag(309.0, 305.0, dims());
        state.drag_to(0.0, 0.0, dims());
        state.take_changed();

        state.reset();

        assert_eq!(state.roots(), super::default_roots());
        assert_eq!(state.viewport(), super::default_viewport());
        assert_eq!(state.iteration_count(), 20);
        assert!(state.take_changed());
    }
}
