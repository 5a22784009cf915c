//! Integration tests for full pipeline runs

use aether_core::pipeline::EMPTY_INPUT_LINE;
use aether_core::{
    Console, Effect, Intent, ScriptedSource, Sequencer, Severity, StagePhase, StageUnit,
    boot_script, intent_script, submit,
};

/// Pumps the sequencer in fixed frame deltas until it finishes.
fn run_to_completion(sequencer: &mut Sequencer, dt_ms: u64, rng: &mut ScriptedSource) -> Vec<Effect> {
    let mut effects = Vec::new();
    for _ in 0..100_000 {
        effects.extend(sequencer.advance(dt_ms, rng));
        if sequencer.is_finished() {
            return effects;
        }
    }
    panic!("sequencer did not finish");
}

#[test]
fn test_boot_then_idle() {
    let mut rng = ScriptedSource::new(vec![0.0]);
    let mut sequencer = Sequencer::new(boot_script());
    let effects = run_to_completion(&mut sequencer, 16, &mut rng);

    assert_eq!(effects.len(), 4);
    assert!(sequencer.is_finished());
    assert!(sequencer.advance(10_000, &mut rng).is_empty());
}

#[test]
fn test_blank_trigger_queues_single_error_and_no_stages() {
    // The host queues exactly one error line when the screen rejects the
    // trigger; no sequencer is ever constructed.
    for trigger in ["", "   ", "\t \n"] {
        assert!(submit(trigger).is_none(), "accepted blank trigger {trigger:?}");

        let mut console = Console::new(0);
        if submit(trigger).is_none() {
            console.enqueue(EMPTY_INPUT_LINE, Severity::Error);
        }
        for _ in 0..1_000 {
            console.tick();
        }

        assert_eq!(console.lines().len(), 1);
        assert_eq!(console.lines()[0].severity, Severity::Error);
        assert_eq!(console.lines()[0].text, EMPTY_INPUT_LINE);
    }
}

#[test]
fn test_full_bug_fix_run_reaches_deployment() {
    let mut rng = ScriptedSource::new(vec![0.0]);
    let (receipt, intent, script) = submit("fix the auth timeout error").unwrap();
    assert_eq!(receipt, "INTENT RECEIVED: \"fix the auth timeout error...\"");
    assert_eq!(intent, Intent::BugFix);

    let mut sequencer = Sequencer::new(script);
    let effects = run_to_completion(&mut sequencer, 16, &mut rng);

    // Synthesis card walks PROCESSING then COMPLETE.
    let synthesis_phases: Vec<StagePhase> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Status {
                unit: StageUnit::Synthesis,
                phase,
            } => Some(*phase),
            _ => None,
        })
        .collect();
    assert_eq!(
        synthesis_phases,
        vec![StagePhase::Processing, StagePhase::Complete]
    );

    // Validation card walks RUNNING then PASSED.
    let validation_phases: Vec<StagePhase> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Status {
                unit: StageUnit::Validation,
                phase,
            } => Some(*phase),
            _ => None,
        })
        .collect();
    assert_eq!(
        validation_phases,
        vec![StagePhase::Running, StagePhase::Passed]
    );

    // Progress covers every even value up to 100, in order.
    let progress: Vec<u8> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Progress(value) => Some(*value),
            _ => None,
        })
        .collect();
    let expected: Vec<u8> = (1..=50).map(|step| step * 2).collect();
    assert_eq!(progress, expected);

    // The run ends with the deployed status and the patch line.
    let tail = &effects[effects.len() - 2..];
    assert_eq!(
        tail[0],
        Effect::Status {
            unit: StageUnit::Deployment,
            phase: StagePhase::Deployed,
        }
    );
    assert_eq!(
        tail[1],
        Effect::Log {
            text: "PATCH APPLIED SUCCESSFULLY.".to_string(),
            severity: Severity::Success,
        }
    );
}

#[test]
fn test_feature_run_skips_diagnosis_agent() {
    let mut rng = ScriptedSource::new(vec![0.0]);
    let mut sequencer = Sequencer::new(intent_script(Intent::Feature));
    let effects = run_to_completion(&mut sequencer, 16, &mut rng);

    let logs: Vec<&str> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Log { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(logs.contains(&"GENERATIVE FIX AGENT: DRAFTING MODULES"));
    assert!(!logs.contains(&"DIAGNOSIS AGENT: ROOT CAUSE ANALYSIS STARTED"));
}

#[test]
fn test_chatty_rng_interleaves_suite_lines_with_progress() {
    // Every draw crosses the cutoff, so every progress tick logs a suite line.
    let mut rng = ScriptedSource::new(vec![0.99]);
    let mut sequencer = Sequencer::new(intent_script(Intent::Feature));
    let effects = run_to_completion(&mut sequencer, 16, &mut rng);

    let suite_lines: Vec<&str> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Log { text, .. } if text.starts_with("Running Test Suite") => {
                Some(text.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(suite_lines.len(), 50);
    assert_eq!(suite_lines[0], "Running Test Suite 0... OK");
    assert_eq!(suite_lines[4], "Running Test Suite 1... OK");
    assert_eq!(suite_lines[49], "Running Test Suite 10... OK");
}

#[test]
fn test_effect_counts_are_stable_for_a_quiet_run() {
    let mut rng = ScriptedSource::new(vec![0.0]);
    let mut sequencer = Sequencer::new(intent_script(Intent::BugFix));
    let effects = run_to_completion(&mut sequencer, 16, &mut rng);

    let thoughts = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Thought(_)))
        .count();
    let statuses = effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Status { .. }))
        .count();
    assert_eq!(thoughts, 5);
    assert_eq!(statuses, 5);
}
