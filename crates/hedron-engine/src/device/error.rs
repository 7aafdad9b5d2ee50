/// High-level response chosen after a surface acquisition error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; the next frame should succeed.
    Reconfigured,
    /// Transient failure; drop the current frame and continue.
    SkipFrame,
    /// Unrecoverable (commonly out of memory); shut down cleanly.
    Fatal,
}

impl SurfaceErrorAction {
    /// Whether a fresh redraw should be requested for the dropped frame.
    ///
    /// A wait-driven loop schedules redraws only on damage or resize, so
    /// without an explicit request the window would stay stale until the
    /// next external event.
    pub fn wants_redraw(self) -> bool {
        matches!(self, Self::Reconfigured | Self::SkipFrame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── frame retry ───────────────────────────────────────────────────────

    #[test]
    fn non_fatal_actions_ask_for_a_fresh_frame() {
        assert!(SurfaceErrorAction::Reconfigured.wants_redraw());
        assert!(SurfaceErrorAction::SkipFrame.wants_redraw());
        assert!(!SurfaceErrorAction::Fatal.wants_redraw());
    }
}
