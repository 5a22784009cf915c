//! Scripted synthesis pipeline.
//!
//! Everything the dashboard "does" after an intent is submitted is theater: a
//! fixed script of timed steps, branched once on keywords in the intent text,
//! followed by a validation loop that walks a progress bar to 100% and then
//! triggers the deployment steps. The [`Sequencer`] owns the script and turns
//! elapsed wall time into [`Effect`]s; the host applies those effects to the
//! console, the status cards, and the progress bar.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::console::Severity;
use crate::entropy::RandomSource;

/// Progress advances once per this many elapsed milliseconds.
pub const VALIDATION_TICK_MS: u64 = 50;
/// Progress gained per validation tick.
pub const VALIDATION_STEP: u8 = 2;
/// Draws above this emit a test-suite line during validation.
pub const SUITE_LOG_CUTOFF: f64 = 0.9;
/// Pause between validation passing and the deployed status.
pub const DEPLOY_DELAY_MS: u64 = 1000;

/// What the operator asked for, as far as the script cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    BugFix,
    Feature,
}

impl Intent {
    /// Keyword scan over the lowercased trigger text. Anything that is not
    /// recognizably a bug report is treated as a feature request.
    pub fn classify(trigger: &str) -> Self {
        let lowered = trigger.to_lowercase();
        if lowered.contains("error") || lowered.contains("fix") {
            Intent::BugFix
        } else {
            Intent::Feature
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intent::BugFix => "BUG_FIX",
            Intent::Feature => "FEATURE_REQUEST",
        }
    }
}

/// The three status-card rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageUnit {
    Synthesis,
    Validation,
    Deployment,
}

/// Display state of a status-card row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagePhase {
    Standby,
    Processing,
    Complete,
    Running,
    Passed,
    Deployed,
}

impl StagePhase {
    pub fn label(&self) -> &'static str {
        match self {
            StagePhase::Standby => "STANDBY",
            StagePhase::Processing => "PROCESSING",
            StagePhase::Complete => "COMPLETE",
            StagePhase::Running => "RUNNING",
            StagePhase::Passed => "PASSED",
            StagePhase::Deployed => "DEPLOYED",
        }
    }
}

/// One host-visible side effect emitted by the sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a line to the console.
    Log { text: String, severity: Severity },
    /// Append an entry to the agent-thoughts card.
    Thought(String),
    /// Move a status-card row to a new phase.
    Status { unit: StageUnit, phase: StagePhase },
    /// Set the validation progress bar.
    Progress(u8),
    /// Reset the progress bar; the sequencer enters its validation loop.
    BeginValidation,
}

/// One scripted step: wait `delay_ms` after the previous step, then emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub delay_ms: u64,
    pub effect: Effect,
}

impl Step {
    pub fn new(delay_ms: u64, effect: Effect) -> Self {
        Self { delay_ms, effect }
    }

    pub fn log(delay_ms: u64, text: impl Into<String>, severity: Severity) -> Self {
        Self::new(
            delay_ms,
            Effect::Log {
                text: text.into(),
                severity,
            },
        )
    }

    pub fn thought(delay_ms: u64, text: impl Into<String>) -> Self {
        Self::new(delay_ms, Effect::Thought(text.into()))
    }

    pub fn status(delay_ms: u64, unit: StageUnit, phase: StagePhase) -> Self {
        Self::new(delay_ms, Effect::Status { unit, phase })
    }
}

#[derive(Debug, Clone)]
struct ValidationRun {
    progress: u8,
    waited_ms: u64,
}

/// Drives a script of [`Step`]s against elapsed time.
///
/// Feed it frame deltas through [`advance`](Sequencer::advance) and apply the
/// effects it returns. Once the step queue runs dry and no validation loop is
/// pending, [`is_finished`](Sequencer::is_finished) turns true and the host
/// can drop the sequencer.
#[derive(Debug, Clone)]
pub struct Sequencer {
    id: Uuid,
    steps: VecDeque<Step>,
    waited_ms: u64,
    validation: Option<ValidationRun>,
}

impl Sequencer {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            id: Uuid::new_v4(),
            steps: steps.into(),
            waited_ms: 0,
            validation: None,
        }
    }

    /// Identifies this run in the session log.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_finished(&self) -> bool {
        self.steps.is_empty() && self.validation.is_none()
    }

    /// Advances the script by `dt_ms` and returns the effects that fired, in
    /// order. Dispatches to the validation loop when one is active, otherwise
    /// to the step clock.
    pub fn advance(&mut self, dt_ms: u64, rng: &mut dyn RandomSource) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.validation.is_some() {
            self.advance_validation(dt_ms, rng, &mut effects);
        } else {
            self.advance_steps(dt_ms, &mut effects);
        }
        effects
    }

    fn advance_steps(&mut self, dt_ms: u64, effects: &mut Vec<Effect>) {
        self.waited_ms += dt_ms;
        while self
            .steps
            .front()
            .is_some_and(|step| step.delay_ms <= self.waited_ms)
        {
            // front() was Some, so pop cannot fail.
            let Some(step) = self.steps.pop_front() else {
                break;
            };
            self.waited_ms -= step.delay_ms;
            let begin_validation = matches!(step.effect, Effect::BeginValidation);
            effects.push(step.effect);
            if begin_validation {
                self.validation = Some(ValidationRun {
                    progress: 0,
                    waited_ms: 0,
                });
                self.waited_ms = 0;
                break;
            }
        }
    }

    fn advance_validation(
        &mut self,
        dt_ms: u64,
        rng: &mut dyn RandomSource,
        effects: &mut Vec<Effect>,
    ) {
        let Some(run) = self.validation.as_mut() else {
            return;
        };
        run.waited_ms += dt_ms;

        let mut completed = false;
        while run.waited_ms >= VALIDATION_TICK_MS {
            run.waited_ms -= VALIDATION_TICK_MS;
            if run.progress >= 100 {
                // The tick after the bar fills ends the loop.
                completed = true;
                break;
            }
            run.progress += VALIDATION_STEP;
            effects.push(Effect::Progress(run.progress));
            if rng.next_f64() > SUITE_LOG_CUTOFF {
                effects.push(Effect::Log {
                    text: format!("Running Test Suite {}... OK", run.progress / 10),
                    severity: Severity::Info,
                });
            }
        }

        if completed {
            self.validation = None;
            self.waited_ms = 0;
            effects.push(Effect::Status {
                unit: StageUnit::Validation,
                phase: StagePhase::Passed,
            });
            effects.push(Effect::Log {
                text: "VALIDATION SUCCESSFUL. TESTS PASSED (12/12).".to_string(),
                severity: Severity::Success,
            });
            effects.push(Effect::Log {
                text: "DEPLOYMENT PIPELINE TRIGGERED.".to_string(),
                severity: Severity::Info,
            });
            self.steps.push_back(Step::status(
                DEPLOY_DELAY_MS,
                StageUnit::Deployment,
                StagePhase::Deployed,
            ));
            self.steps.push_back(Step::log(
                0,
                "PATCH APPLIED SUCCESSFULLY.",
                Severity::Success,
            ));
        }
    }
}

/// Steps played once at startup.
pub fn boot_script() -> Vec<Step> {
    vec![
        Step::log(0, "AETHER V2.0 KERNEL INITIALIZED...", Severity::Info),
        Step::log(500, "LOADING QUANTUM TELEMETRY DRIVERS...", Severity::Info),
        Step::log(700, "CONNECTING TO NEURAL FABRIC...", Severity::Info),
        Step::log(800, "SYSTEM ONLINE. WAITING FOR INPUT.", Severity::Success),
    ]
}

/// Error line queued when a blank trigger is submitted.
pub const EMPTY_INPUT_LINE: &str = "ERROR: INPUT BUFFER EMPTY. ABORTING.";
/// Characters of the trigger echoed back in the receipt line.
pub const ECHO_PREFIX_LEN: usize = 40;

/// Screens a submitted trigger before anything runs.
///
/// Blank (empty or whitespace-only) input is rejected with `None`; the
/// caller queues [`EMPTY_INPUT_LINE`] as a single error line and starts no
/// stages. Accepted input yields the receipt line to echo, the classified
/// intent, and the script for its branch.
pub fn submit(trigger: &str) -> Option<(String, Intent, Vec<Step>)> {
    let trimmed = trigger.trim();
    if trimmed.is_empty() {
        return None;
    }
    let echo: String = trimmed.chars().take(ECHO_PREFIX_LEN).collect();
    let intent = Intent::classify(trimmed);
    Some((
        format!("INTENT RECEIVED: \"{echo}...\""),
        intent,
        intent_script(intent),
    ))
}

/// Steps played for a submitted intent, through synthesis and into the
/// validation loop.
pub fn intent_script(intent: Intent) -> Vec<Step> {
    let (classified, agent_line) = match intent {
        Intent::BugFix => (
            "Intent classified: BUG_FIX",
            "DIAGNOSIS AGENT: ROOT CAUSE ANALYSIS STARTED",
        ),
        Intent::Feature => (
            "Intent classified: FEATURE_REQUEST",
            "GENERATIVE FIX AGENT: DRAFTING MODULES",
        ),
    };

    vec![
        Step::status(0, StageUnit::Synthesis, StagePhase::Processing),
        Step::log(0, "COGNITIVE INTENT PARSER: ACTIVATED", Severity::Warn),
        Step::thought(400, "Parsing natural language input..."),
        Step::thought(800, "Extracting semantic intent vectors..."),
        Step::thought(600, "Mapping to system architecture..."),
        Step::thought(500, classified),
        Step::log(0, agent_line, Severity::Info),
        Step::thought(1000, "Synthesizing code structure..."),
        Step::status(0, StageUnit::Synthesis, StagePhase::Complete),
        Step::log(
            0,
            "CODE SYNTHESIS COMPLETE. INITIATING SANDBOX VALIDATION.",
            Severity::Success,
        ),
        Step::status(0, StageUnit::Validation, StagePhase::Running),
        Step::new(0, Effect::BeginValidation),
    ]
}
