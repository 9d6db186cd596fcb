//! Loading-screen progress coordination.
//!
//! Independent page sections report readiness into a [`LoadGate`], which
//! derives a single smoothed 0-100 progress value and an `is_loading` flag.
//! The gate guarantees the loading screen stays visible for a minimum wall
//! clock duration so fast loads do not flicker, and that shown progress
//! never moves backward.
//!
//! All methods take `elapsed_ms` (milliseconds since the gate was created)
//! as a parameter instead of reading a clock, so the UI layer decides the
//! time source and tests are deterministic.

/// Minimum time the loading screen stays visible.
pub const MIN_LOAD_TIME_MS: u64 = 2000;

/// Cosmetic delay between reaching 100% and hiding the screen, covering
/// the slide-away transition.
pub const EXIT_DELAY_MS: u64 = 600;

/// Progress ceiling while waiting out the minimum display time.
pub const HOLD_PROGRESS: u8 = 95;

/// The fixed set of independently-loading page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Contact => 3,
        }
    }
}

/// Loaded flags for every section. All start false; a section flips true
/// when its owning component reports ready and back to false on unmount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    loaded: [bool; Section::ALL.len()],
}

impl SectionRegistry {
    pub fn set(&mut self, section: Section, loaded: bool) {
        self.loaded[section.index()] = loaded;
    }

    pub fn is_loaded(&self, section: Section) -> bool {
        self.loaded[section.index()]
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded.iter().filter(|l| **l).count()
    }

    pub fn all_loaded(&self) -> bool {
        self.loaded.iter().all(|l| *l)
    }

    /// Raw completion percentage, 0-100.
    pub fn percent(&self) -> f32 {
        self.loaded_count() as f32 * 100.0 / Section::ALL.len() as f32
    }
}

/// Banded compression of the raw completion percentage.
///
/// Piecewise linear through (0,0), (30,40), (70,75), (100,95): each band is
/// flatter than the last, so the bar starts quickly and eases toward the
/// [`HOLD_PROGRESS`] ceiling. Purely cosmetic; the final 100 is granted by
/// the gate, not the curve.
pub fn shape_progress(raw: f32) -> u8 {
    let raw = raw.clamp(0.0, 100.0);
    let shown = if raw < 30.0 {
        raw * (40.0 / 30.0)
    } else if raw < 70.0 {
        40.0 + (raw - 30.0) * (35.0 / 40.0)
    } else {
        75.0 + (raw - 70.0) * (20.0 / 30.0)
    };
    shown.round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Sections still reporting in.
    Loading,
    /// All sections ready, waiting out the minimum display time.
    Holding,
    /// Progress at 100, waiting out the exit transition.
    Finishing,
    /// Screen hidden.
    Done,
}

/// The loading-screen state machine.
#[derive(Debug)]
pub struct LoadGate {
    registry: SectionRegistry,
    min_total_ms: u64,
    shown: u8,
    phase: Phase,
    finish_started_at: Option<u64>,
}

impl Default for LoadGate {
    fn default() -> Self {
        Self::new(MIN_LOAD_TIME_MS)
    }
}

impl LoadGate {
    pub fn new(min_total_ms: u64) -> Self {
        Self {
            registry: SectionRegistry::default(),
            min_total_ms,
            shown: 0,
            phase: Phase::Loading,
            finish_started_at: None,
        }
    }

    /// Record a section readiness change and advance the machine.
    pub fn set_section(&mut self, section: Section, loaded: bool, elapsed_ms: u64) {
        if self.phase == Phase::Finishing || self.phase == Phase::Done {
            // Too late to matter; unmount flickers after completion are ignored.
            return;
        }
        self.registry.set(section, loaded);
        self.advance(elapsed_ms);
    }

    /// Advance the machine on a timer tick.
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.advance(elapsed_ms);
    }

    /// Shown progress, 0-100. Monotonically non-decreasing until done.
    pub fn progress(&self) -> u8 {
        self.shown
    }

    pub fn is_loading(&self) -> bool {
        self.phase != Phase::Done
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.registry
    }

    fn advance(&mut self, elapsed_ms: u64) {
        match self.phase {
            Phase::Loading => {
                // max() guards against the shown value going backward if a
                // section's flag flickers off and on.
                self.shown = self.shown.max(shape_progress(self.registry.percent()));
                if self.registry.all_loaded() {
                    if elapsed_ms >= self.min_total_ms {
                        self.start_finish(elapsed_ms);
                    } else {
                        self.phase = Phase::Holding;
                        self.shown = self.shown.max(HOLD_PROGRESS);
                    }
                }
            }
            Phase::Holding => {
                if !self.registry.all_loaded() {
                    self.phase = Phase::Loading;
                } else if elapsed_ms >= self.min_total_ms {
                    self.start_finish(elapsed_ms);
                }
            }
            Phase::Finishing => {
                let started = self.finish_started_at.unwrap_or(elapsed_ms);
                if elapsed_ms >= started + EXIT_DELAY_MS {
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
    }

    fn start_finish(&mut self, elapsed_ms: u64) {
        self.shown = 100;
        self.phase = Phase::Finishing;
        self.finish_started_at = Some(elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_all(gate: &mut LoadGate, elapsed_ms: u64) {
        for section in Section::ALL {
            gate.set_section(section, true, elapsed_ms);
        }
    }

    #[test]
    fn test_shape_endpoints_and_bands() {
        assert_eq!(shape_progress(0.0), 0);
        assert_eq!(shape_progress(30.0), 40);
        assert_eq!(shape_progress(70.0), 75);
        assert_eq!(shape_progress(100.0), 95);

        // Each band is flatter than the previous one.
        let early = shape_progress(30.0) - shape_progress(0.0);
        let mid = shape_progress(70.0) - shape_progress(30.0);
        let late = shape_progress(100.0) - shape_progress(70.0);
        assert!(early > mid);
        assert!(mid > late);
    }

    #[test]
    fn test_shape_clamps_out_of_range_input() {
        assert_eq!(shape_progress(-5.0), 0);
        assert_eq!(shape_progress(140.0), 95);
    }

    #[test]
    fn test_registry_percent() {
        let mut registry = SectionRegistry::default();
        assert_eq!(registry.percent(), 0.0);

        registry.set(Section::Hero, true);
        registry.set(Section::About, true);
        assert_eq!(registry.percent(), 50.0);
        assert!(!registry.all_loaded());

        registry.set(Section::Projects, true);
        registry.set(Section::Contact, true);
        assert!(registry.all_loaded());
    }

    #[test]
    fn test_fast_load_holds_until_minimum_time() {
        let mut gate = LoadGate::new(2000);

        // All sections ready at t=500ms.
        mark_all(&mut gate, 500);

        assert!(gate.is_loading());
        assert_eq!(gate.progress(), HOLD_PROGRESS);

        gate.tick(1999);
        assert!(gate.is_loading());
        assert!(gate.progress() <= HOLD_PROGRESS);

        // Minimum elapsed: jump to 100, still visible for the exit delay.
        gate.tick(2000);
        assert_eq!(gate.progress(), 100);
        assert!(gate.is_loading());

        gate.tick(2599);
        assert!(gate.is_loading());

        gate.tick(2600);
        assert!(!gate.is_loading());
        assert_eq!(gate.progress(), 100);
    }

    #[test]
    fn test_slow_load_finishes_immediately_after_exit_delay() {
        let mut gate = LoadGate::new(2000);

        gate.set_section(Section::Hero, true, 1000);
        gate.set_section(Section::About, true, 2500);
        gate.set_section(Section::Projects, true, 3000);
        assert!(gate.is_loading());
        assert!(gate.progress() < 100);

        // Last section lands after the minimum: straight to 100.
        gate.set_section(Section::Contact, true, 3200);
        assert_eq!(gate.progress(), 100);
        assert!(gate.is_loading());

        gate.tick(3799);
        assert!(gate.is_loading());
        gate.tick(3800);
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_progress_is_monotonic_under_flicker() {
        let mut gate = LoadGate::new(2000);

        gate.set_section(Section::Hero, true, 100);
        gate.set_section(Section::About, true, 200);
        let before = gate.progress();

        // A section unmounts and remounts; shown progress must not drop.
        gate.set_section(Section::About, false, 300);
        assert!(gate.progress() >= before);

        gate.set_section(Section::About, true, 400);
        assert!(gate.progress() >= before);
    }

    #[test]
    fn test_hold_survives_section_flicker() {
        let mut gate = LoadGate::new(2000);
        mark_all(&mut gate, 500);
        assert_eq!(gate.progress(), HOLD_PROGRESS);

        // Flicker while holding: stays visible, never goes backward, and
        // completion still requires all sections plus the minimum time.
        gate.set_section(Section::Projects, false, 600);
        assert_eq!(gate.progress(), HOLD_PROGRESS);
        gate.tick(2100);
        assert!(gate.is_loading());
        assert!(gate.progress() < 100);

        gate.set_section(Section::Projects, true, 2200);
        assert_eq!(gate.progress(), 100);
        gate.tick(2800);
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_never_completes_if_a_section_never_reports() {
        let mut gate = LoadGate::new(2000);

        gate.set_section(Section::Hero, true, 100);
        gate.set_section(Section::About, true, 200);
        gate.set_section(Section::Projects, true, 300);

        // No timeout fallback: waits indefinitely on the missing section.
        gate.tick(60_000);
        assert!(gate.is_loading());
        assert!(gate.progress() < 100);
    }

    #[test]
    fn test_late_flicker_after_finish_is_ignored() {
        let mut gate = LoadGate::new(2000);
        mark_all(&mut gate, 2500);
        assert_eq!(gate.progress(), 100);

        gate.set_section(Section::Hero, false, 2550);
        assert_eq!(gate.progress(), 100);

        gate.tick(3100);
        assert!(!gate.is_loading());
    }
}
