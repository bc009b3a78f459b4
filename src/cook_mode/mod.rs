pub mod alerts;
pub mod speech;

pub use alerts::{AlertSink, ConsoleAlert, NoopAlert};
pub use speech::{select_voice, ConsoleNarrator, Narrator, NoopNarrator, VoiceInfo};

use std::collections::BTreeSet;

use crate::model::Recipe;

/// Delay between a timer reaching zero and the auto-advance to the next
/// step, in ticks (seconds).
pub const AUTO_ADVANCE_DELAY_SECS: u32 = 1;

/// What one `tick()` did, so the driving loop can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No active timer and nothing pending.
    Idle,
    /// Timer decremented; seconds remaining.
    Running(u32),
    /// Timer just hit zero this tick.
    Finished,
    /// A pending auto-advance fired and moved to the next step.
    AutoAdvanced,
}

/// Ephemeral guided-cooking state for one recipe: step navigation plus a
/// per-step countdown. Created when cook mode opens, discarded when it
/// closes, never persisted.
///
/// The engine owns no platform timer. The driver calls `tick()` once per
/// second; dropping the session therefore cancels everything structurally,
/// and a superseded state can never be mutated by a stale callback.
pub struct CookSession {
    recipe: Recipe,
    step: usize,
    completed: BTreeSet<usize>,
    timer_remaining: u32,
    timer_total: u32,
    timer_running: bool,
    pending_advance: Option<u32>,
    auto_advance: bool,
    voice_enabled: bool,
    narrator: Box<dyn Narrator>,
    alerts: Box<dyn AlertSink>,
}

impl CookSession {
    /// `None` when the recipe has no instructions; the step machine needs
    /// at least one.
    pub fn new(recipe: Recipe) -> Option<Self> {
        Self::with_ports(recipe, Box::new(NoopNarrator), Box::new(NoopAlert))
    }

    pub fn with_ports(
        recipe: Recipe,
        narrator: Box<dyn Narrator>,
        alerts: Box<dyn AlertSink>,
    ) -> Option<Self> {
        if recipe.instructions.is_empty() {
            return None;
        }
        Some(Self {
            recipe,
            step: 0,
            completed: BTreeSet::new(),
            timer_remaining: 0,
            timer_total: 0,
            timer_running: false,
            pending_advance: None,
            auto_advance: true,
            voice_enabled: false,
            narrator,
            alerts,
        })
    }

    fn narrate(&mut self, text: String) {
        if self.voice_enabled {
            self.narrator.speak(&text);
        }
    }

    fn cancel_timer(&mut self) {
        self.timer_remaining = 0;
        self.timer_total = 0;
        self.timer_running = false;
        self.pending_advance = None;
    }

    /// Marks the current step completed and moves forward. No-op on the
    /// last step. Any active timer or pending auto-advance is cancelled.
    pub fn next(&mut self) {
        if self.step + 1 >= self.instruction_count() {
            return;
        }
        self.completed.insert(self.step);
        self.step += 1;
        self.cancel_timer();
        self.narrate(format!(
            "Step {}. {}",
            self.step + 1,
            self.recipe.instructions[self.step]
        ));
    }

    /// Moves back one step. No-op on step 0. Cancels any active timer.
    pub fn prev(&mut self) {
        if self.step == 0 {
            return;
        }
        self.step -= 1;
        self.cancel_timer();
        self.narrate(format!(
            "Going back to step {}. {}",
            self.step + 1,
            self.recipe.instructions[self.step]
        ));
    }

    /// Direct jump to any valid step, without completion marking. Cancels
    /// the timer for consistency with next/prev. Out-of-range is a no-op.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.instruction_count() {
            return;
        }
        self.step = index;
        self.cancel_timer();
    }

    pub fn start_timer(&mut self, minutes: u32) {
        self.timer_remaining = minutes * 60;
        self.timer_total = self.timer_remaining;
        self.timer_running = true;
        self.pending_advance = None;
        self.narrate(format!(
            "Timer started for {} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }

    /// One second of engine time. Consumes a pending auto-advance first;
    /// otherwise counts the timer down. At zero the completion cue fires
    /// and, when auto-advance is on and steps remain, the move to the next
    /// step is scheduled one tick out.
    pub fn tick(&mut self) -> TickOutcome {
        if let Some(delay) = self.pending_advance.take() {
            if delay > 1 {
                self.pending_advance = Some(delay - 1);
                return TickOutcome::Idle;
            }
            self.next();
            return TickOutcome::AutoAdvanced;
        }

        if !self.timer_running || self.timer_remaining == 0 {
            return TickOutcome::Idle;
        }

        self.timer_remaining -= 1;
        if self.timer_remaining > 0 {
            return TickOutcome::Running(self.timer_remaining);
        }

        self.timer_running = false;
        self.alerts.timer_finished(self.step);
        if self.auto_advance && self.step + 1 < self.instruction_count() {
            self.pending_advance = Some(AUTO_ADVANCE_DELAY_SECS);
        }
        TickOutcome::Finished
    }

    /// Pause/resume. No-op when nothing is on the clock.
    pub fn toggle_timer(&mut self) {
        if self.timer_remaining > 0 {
            self.timer_running = !self.timer_running;
        }
    }

    pub fn reset_timer(&mut self) {
        self.cancel_timer();
    }

    /// Turning voice on narrates the current step immediately; turning it
    /// off cancels any in-flight narration.
    pub fn toggle_voice(&mut self) {
        self.voice_enabled = !self.voice_enabled;
        if self.voice_enabled {
            self.narrate(format!(
                "Voice assistant enabled. Currently on step {}. {}",
                self.step + 1,
                self.recipe.instructions[self.step]
            ));
        } else {
            self.narrator.cancel();
        }
    }

    /// Explicit "read this step" request; only audible while voice is on.
    pub fn read_current_step(&mut self) {
        self.narrate(format!(
            "Step {}. {}",
            self.step + 1,
            self.recipe.instructions[self.step]
        ));
    }

    pub fn toggle_auto_advance(&mut self) {
        self.auto_advance = !self.auto_advance;
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn instruction_count(&self) -> usize {
        self.recipe.instructions.len()
    }

    pub fn current_instruction(&self) -> &str {
        &self.recipe.instructions[self.step]
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == self.instruction_count()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn progress_percent(&self) -> f32 {
        (self.step + 1) as f32 / self.instruction_count() as f32 * 100.0
    }

    pub fn timer_remaining(&self) -> u32 {
        self.timer_remaining
    }

    pub fn timer_total(&self) -> u32 {
        self.timer_total
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }
}

/// Canned per-step advisories, recomputed for whichever step is showing.
pub fn cooking_tips(instruction: &str) -> Vec<&'static str> {
    let text = instruction.to_lowercase();
    let mut tips = Vec::new();
    if text.contains("heat") || text.contains("temperature") {
        tips.push("Use a thermometer for precise temperature control");
    }
    if text.contains("mix") || text.contains("stir") {
        tips.push("Stir gently to avoid overmixing");
    }
    if text.contains("season") || text.contains("salt") {
        tips.push("Taste as you go and adjust seasoning gradually");
    }
    tips
}

/// Renders seconds as "M:SS" for timer displays.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
