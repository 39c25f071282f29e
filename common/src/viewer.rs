//! Document viewer state machine.
//!
//! `Unloaded -> Loading -> Ready | Error`. Loads and renders are tagged with
//! monotonic tickets; a completion whose ticket is no longer current is
//! dropped, so overlapping page or zoom changes settle on the last request.

pub const MIN_FIT_SCALE: f64 = 0.5;
pub const MAX_FIT_SCALE: f64 = 2.0;
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;

/// Scale at which a page of `page_width` fills `container_width`, clamped to
/// `[MIN_FIT_SCALE, MAX_FIT_SCALE]`.
pub fn fit_to_width(container_width: f64, page_width: f64) -> f64 {
    if !(page_width > 0.0) || !container_width.is_finite() {
        return 1.0;
    }
    (container_width / page_width).clamp(MIN_FIT_SCALE, MAX_FIT_SCALE)
}

/// Snaps `factor` to the nearest `ZOOM_STEP` inside `[MIN_ZOOM, MAX_ZOOM]`.
pub fn clamp_zoom(factor: f64) -> f64 {
    if !factor.is_finite() {
        return 1.0;
    }
    ((factor / ZOOM_STEP).round() * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerPosition {
    pub page: u32,
    pub total_pages: u32,
    /// Fit-to-width scale computed once per load.
    pub base_scale: f64,
    pub zoom: f64,
}

impl ViewerPosition {
    pub fn effective_scale(&self) -> f64 {
        self.base_scale * self.zoom
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerPhase {
    Unloaded,
    Loading,
    Ready(ViewerPosition),
    Error(String),
}

/// Page and scale to rasterise, tagged with the ticket that must still be
/// current when the render completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub ticket: u64,
    pub page: u32,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    phase: ViewerPhase,
    load_ticket: u64,
    render_ticket: u64,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            phase: ViewerPhase::Unloaded,
            load_ticket: 0,
            render_ticket: 0,
        }
    }
}

impl ViewerState {
    pub fn phase(&self) -> &ViewerPhase {
        &self.phase
    }

    pub fn position(&self) -> Option<&ViewerPosition> {
        match &self.phase {
            ViewerPhase::Ready(position) => Some(position),
            _ => None,
        }
    }

    /// Enters `Loading` from `Unloaded` or `Error`. Returns the load ticket,
    /// or `None` when a document is already loading or loaded.
    pub fn begin_load(&mut self) -> Option<u64> {
        match self.phase {
            ViewerPhase::Unloaded | ViewerPhase::Error(_) => {
                self.load_ticket += 1;
                self.phase = ViewerPhase::Loading;
                Some(self.load_ticket)
            }
            ViewerPhase::Loading | ViewerPhase::Ready(_) => None,
        }
    }

    /// Completes a load on page 1 at zoom 1.0. Returns `false` for a stale
    /// ticket, leaving the state untouched.
    pub fn finish_load(&mut self, ticket: u64, total_pages: u32, base_scale: f64) -> bool {
        if ticket != self.load_ticket || self.phase != ViewerPhase::Loading {
            return false;
        }
        if total_pages == 0 {
            self.phase = ViewerPhase::Error("The document has no pages.".to_string());
            return true;
        }
        self.phase = ViewerPhase::Ready(ViewerPosition {
            page: 1,
            total_pages,
            base_scale: base_scale.clamp(MIN_FIT_SCALE, MAX_FIT_SCALE),
            zoom: 1.0,
        });
        true
    }

    /// Records a load failure. Stale tickets are ignored.
    pub fn fail_load(&mut self, ticket: u64, message: impl Into<String>) -> bool {
        if ticket != self.load_ticket || self.phase != ViewerPhase::Loading {
            return false;
        }
        self.phase = ViewerPhase::Error(message.into());
        true
    }

    /// Back to `Unloaded`. Outstanding loads and renders become stale.
    pub fn reset(&mut self) {
        self.load_ticket += 1;
        self.render_ticket += 1;
        self.phase = ViewerPhase::Unloaded;
    }

    /// Issues a render of the current page at the current effective scale.
    pub fn request_render(&mut self) -> Option<RenderRequest> {
        let position = *self.position()?;
        self.render_ticket += 1;
        Some(RenderRequest {
            ticket: self.render_ticket,
            page: position.page,
            scale: position.effective_scale(),
        })
    }

    /// True when `ticket` belongs to the newest render request.
    pub fn is_current_render(&self, ticket: u64) -> bool {
        ticket == self.render_ticket && self.position().is_some()
    }

    /// Records a render failure for the current request. Stale tickets are
    /// ignored.
    pub fn fail_render(&mut self, ticket: u64, message: impl Into<String>) -> bool {
        if !self.is_current_render(ticket) {
            return false;
        }
        self.phase = ViewerPhase::Error(message.into());
        true
    }

    /// Moves `delta` pages, clamped to the document. Returns a render
    /// request only when the page changed.
    pub fn go_to_page(&mut self, delta: i32) -> Option<RenderRequest> {
        let ViewerPhase::Ready(position) = &mut self.phase else {
            return None;
        };
        let target = (i64::from(position.page) + i64::from(delta))
            .clamp(1, i64::from(position.total_pages)) as u32;
        if target == position.page {
            return None;
        }
        position.page = target;
        self.request_render()
    }

    /// Sets the zoom factor, snapped and clamped. Returns a render request
    /// only when the zoom changed.
    pub fn set_zoom(&mut self, factor: f64) -> Option<RenderRequest> {
        let ViewerPhase::Ready(position) = &mut self.phase else {
            return None;
        };
        let zoom = clamp_zoom(factor);
        if zoom == position.zoom {
            return None;
        }
        position.zoom = zoom;
        self.request_render()
    }

    pub fn zoom_in(&mut self) -> Option<RenderRequest> {
        let zoom = self.position()?.zoom;
        self.set_zoom(zoom + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> Option<RenderRequest> {
        let zoom = self.position()?.zoom;
        self.set_zoom(zoom - ZOOM_STEP)
    }

    /// Returns the zoom factor to 1.0. The base scale computed at load time
    /// is kept, so the page renders at exactly that base.
    pub fn reset_zoom(&mut self) -> Option<RenderRequest> {
        self.set_zoom(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ready(total_pages: u32) -> ViewerState {
        let mut state = ViewerState::default();
        let ticket = state.begin_load().unwrap();
        assert!(state.finish_load(ticket, total_pages, 1.2));
        state
    }

    #[test]
    fn fit_scale_is_clamped() {
        assert_eq!(fit_to_width(600.0, 600.0), 1.0);
        assert_eq!(fit_to_width(100.0, 600.0), MIN_FIT_SCALE);
        assert_eq!(fit_to_width(5000.0, 600.0), MAX_FIT_SCALE);
        assert_eq!(fit_to_width(600.0, 0.0), 1.0);
    }

    #[test]
    fn load_lands_on_first_page_at_unit_zoom() {
        let state = ready(4);
        let position = state.position().unwrap();
        assert_eq!(position.page, 1);
        assert_eq!(position.total_pages, 4);
        assert_eq!(position.zoom, 1.0);
        assert_eq!(position.effective_scale(), 1.2);
    }

    #[test]
    fn load_only_starts_from_unloaded_or_error() {
        let mut state = ready(2);
        assert_eq!(state.begin_load(), None);

        let mut state2 = ViewerState::default();
        let ticket = state2.begin_load().unwrap();
        assert_eq!(state2.begin_load(), None);
        assert!(state2.fail_load(ticket, "404"));
        assert_eq!(state2.phase(), &ViewerPhase::Error("404".to_string()));
        assert!(state2.begin_load().is_some());

        state.reset();
        assert_eq!(state.phase(), &ViewerPhase::Unloaded);
    }

    #[test]
    fn stale_load_after_reset_is_dropped() {
        let mut state = ViewerState::default();
        let ticket = state.begin_load().unwrap();
        state.reset();
        assert!(!state.finish_load(ticket, 3, 1.0));
        assert_eq!(state.phase(), &ViewerPhase::Unloaded);
    }

    #[test]
    fn empty_document_is_an_error() {
        let mut state = ViewerState::default();
        let ticket = state.begin_load().unwrap();
        state.finish_load(ticket, 0, 1.0);
        assert!(matches!(state.phase(), ViewerPhase::Error(_)));
    }

    #[test]
    fn page_navigation_is_a_no_op_at_boundaries() {
        let mut state = ready(3);
        assert_eq!(state.go_to_page(-1), None);
        let request = state.go_to_page(1).unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(state.go_to_page(5).unwrap().page, 3);
        assert_eq!(state.go_to_page(1), None);
        assert!(!state.position().unwrap().has_next());
    }

    #[test]
    fn reset_zoom_keeps_fit_base_scale() {
        let mut state = ready(2);
        state.zoom_in();
        let request = state.reset_zoom().unwrap();
        let position = state.position().unwrap();
        assert_eq!(position.base_scale, 1.2);
        assert_eq!(request.scale, 1.2);
    }

    #[test]
    fn zoom_steps_and_resets_to_one() {
        let mut state = ready(1);
        let request = state.zoom_in().unwrap();
        assert_eq!(state.position().unwrap().zoom, 1.25);
        assert_eq!(request.scale, 1.2 * 1.25);

        for _ in 0..20 {
            state.zoom_in();
        }
        assert_eq!(state.position().unwrap().zoom, MAX_ZOOM);
        assert_eq!(state.zoom_in(), None);

        assert!(state.reset_zoom().is_some());
        assert_eq!(state.position().unwrap().zoom, 1.0);
        assert_eq!(state.reset_zoom(), None);

        state.set_zoom(0.1);
        assert_eq!(state.position().unwrap().zoom, MIN_ZOOM);
    }

    #[test]
    fn only_newest_render_is_accepted() {
        let mut state = ready(5);
        let first = state.go_to_page(1).unwrap();
        let second = state.zoom_in().unwrap();
        assert!(!state.is_current_render(first.ticket));
        assert!(state.is_current_render(second.ticket));

        assert!(!state.fail_render(first.ticket, "cancelled"));
        assert!(state.position().is_some());
        assert!(state.fail_render(second.ticket, "canvas lost"));
        assert!(matches!(state.phase(), ViewerPhase::Error(_)));
    }

    #[test]
    fn no_render_without_a_document() {
        let mut state = ViewerState::default();
        assert_eq!(state.request_render(), None);
        assert_eq!(state.go_to_page(1), None);
        assert_eq!(state.zoom_in(), None);
    }

    proptest! {
        #[test]
        fn zoom_is_always_a_step_within_bounds(factor in -10.0f64..10.0) {
            let zoom = clamp_zoom(factor);
            prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom));
            prop_assert_eq!((zoom / ZOOM_STEP).fract(), 0.0);
        }

        #[test]
        fn page_stays_in_document(total in 1u32..50, moves in proptest::collection::vec(-7i32..7, 0..20)) {
            let mut state = ready(total);
            for delta in moves {
                state.go_to_page(delta);
                let page = state.position().unwrap().page;
                prop_assert!(page >= 1 && page <= total);
            }
        }
    }
}
