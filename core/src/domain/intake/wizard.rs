//! Linear step navigation for the intake questionnaire.
//!
//! States are the 1-based cursor positions `1..=N` of a [`WizardMode`].
//! Step 1 is the single initial state and step `N` the single terminal
//! state, which hands over to submission instead of moving on.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    intake::{
        entities::{AnswerRecord, WizardMode},
        questionnaire::step_copy,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    Back,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Move(u8),
    Stay,
    Submit,
}

/// Transition table keyed by `(cursor, action)`, before answer guards.
pub fn transition(mode: WizardMode, cursor: u8, action: NavAction) -> Transition {
    let last = mode.total_steps();

    match action {
        NavAction::Back if cursor <= 1 => Transition::Stay,
        NavAction::Back => Transition::Move(cursor.min(last) - 1),
        NavAction::Next if cursor >= last => Transition::Submit,
        NavAction::Next => Transition::Move(cursor.max(1) + 1),
    }
}

/// Applies `action` to `cursor`, refusing `Next` while the current step's
/// required answer is missing.
pub fn advance(
    mode: WizardMode,
    cursor: u8,
    action: NavAction,
    answers: &AnswerRecord,
) -> Result<u8, CoreError> {
    match transition(mode, cursor, action) {
        Transition::Stay => Ok(cursor),
        Transition::Submit => Err(CoreError::FinalStepReached),
        Transition::Move(next) => {
            if action == NavAction::Next {
                let step = mode
                    .step_at(cursor)
                    .ok_or(CoreError::StepMismatch { current: cursor })?;
                if !answers.is_step_answered(step) {
                    return Err(CoreError::AnswerRequired(step_copy(step).header.to_string()));
                }
            }
            Ok(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::entities::{Answer, WizardStep};

    fn complete_answers() -> AnswerRecord {
        let mut record = AnswerRecord::default();
        for answer in [
            Answer::SkinGoals(vec!["Reduce blemishes".to_string()]),
            Answer::SkinType("My skin doesn't feel noticeably oily or dry".to_string()),
            Answer::ReactionFrequency("Rarely".to_string()),
            Answer::SkinTone("Olive".to_string()),
            Answer::SkinSymptoms(vec!["None".to_string()]),
            Answer::SkinConditions(vec!["History of acne".to_string()]),
        ] {
            record.apply(answer).unwrap();
        }
        record
    }

    #[test]
    fn test_back_moves_one_step_down() {
        let answers = AnswerRecord::default();
        for mode in [WizardMode::Standalone, WizardMode::WithScreening] {
            for cursor in 2..=mode.total_steps() {
                assert_eq!(
                    advance(mode, cursor, NavAction::Back, &answers).unwrap(),
                    cursor - 1
                );
            }
        }
    }

    #[test]
    fn test_back_on_first_step_is_noop() {
        let answers = AnswerRecord::default();
        assert_eq!(
            advance(WizardMode::Standalone, 1, NavAction::Back, &answers).unwrap(),
            1
        );
        assert_eq!(
            transition(WizardMode::Standalone, 1, NavAction::Back),
            Transition::Stay
        );
    }

    #[test]
    fn test_get_started_needs_no_answer() {
        let answers = AnswerRecord::default();
        assert_eq!(
            advance(WizardMode::Standalone, 1, NavAction::Next, &answers).unwrap(),
            2
        );
    }

    #[test]
    fn test_next_rejected_without_goals() {
        let answers = AnswerRecord::default();
        let err = advance(WizardMode::Standalone, 2, NavAction::Next, &answers).unwrap_err();
        assert!(matches!(err, CoreError::AnswerRequired(_)));
    }

    #[test]
    fn test_birthdate_and_screening_steps_always_advance() {
        let answers = AnswerRecord::default();
        assert_eq!(
            advance(WizardMode::WithScreening, 8, NavAction::Next, &answers).unwrap(),
            9
        );
        assert_eq!(
            advance(WizardMode::WithScreening, 9, NavAction::Next, &answers).unwrap(),
            10
        );
    }

    #[test]
    fn test_terminal_step_does_not_advance() {
        let answers = complete_answers();
        assert_eq!(
            transition(WizardMode::Standalone, 9, NavAction::Next),
            Transition::Submit
        );
        assert_eq!(
            advance(WizardMode::Standalone, 9, NavAction::Next, &answers).unwrap_err(),
            CoreError::FinalStepReached
        );
        assert_eq!(
            advance(WizardMode::WithScreening, 10, NavAction::Next, &answers).unwrap_err(),
            CoreError::FinalStepReached
        );
    }

    #[test]
    fn test_eight_nexts_reach_terminal_step() {
        let answers = complete_answers();
        let mode = WizardMode::Standalone;
        let mut cursor = 1;
        for _ in 0..8 {
            cursor = advance(mode, cursor, NavAction::Next, &answers).unwrap();
        }
        assert_eq!(cursor, mode.total_steps());
        assert_eq!(mode.step_at(cursor), Some(WizardStep::Submission));
    }
}
