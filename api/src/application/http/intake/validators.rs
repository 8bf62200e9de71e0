use serde::{Deserialize, Serialize};
use sfie_core::domain::intake::{
    entities::{Answer, WizardMode},
    questionnaire::{BIRTH_DAY_RANGE, BIRTH_YEAR_RANGE},
    wizard::NavAction,
};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct StartSessionValidator {
    pub mode: WizardMode,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordAnswerValidator {
    #[validate(custom(function = "validate_answer"))]
    pub answer: Answer,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NavigateValidator {
    pub action: NavAction,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitSessionValidator {
    /// Falls back to the `Authorization: Bearer` header when absent.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn invalid(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Range checks on the birthdate and non-empty single choices. Option
/// membership is checked by the core.
fn validate_answer(answer: &Answer) -> Result<(), ValidationError> {
    match answer {
        Answer::Birthdate(birthdate) => {
            let (min_day, max_day) = BIRTH_DAY_RANGE;
            if !(min_day..=max_day).contains(&birthdate.day) {
                return Err(invalid(
                    "birth_day",
                    format!("day must be between {min_day} and {max_day}"),
                ));
            }

            let (min_year, max_year) = BIRTH_YEAR_RANGE;
            if !(min_year..=max_year).contains(&birthdate.year) {
                return Err(invalid(
                    "birth_year",
                    format!("year must be between {min_year} and {max_year}"),
                ));
            }

            Ok(())
        }
        Answer::SkinType(value) | Answer::ReactionFrequency(value) | Answer::SkinTone(value)
            if value.trim().is_empty() =>
        {
            Err(invalid("required", "a choice is required".to_string()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfie_core::domain::intake::entities::{BirthMonth, Birthdate};

    fn birthdate(day: u8, year: u16) -> RecordAnswerValidator {
        RecordAnswerValidator {
            answer: Answer::Birthdate(Birthdate {
                day,
                month: BirthMonth::May,
                year,
            }),
        }
    }

    #[test]
    fn test_birthdate_bounds() {
        assert!(birthdate(1, 1900).validate().is_ok());
        assert!(birthdate(31, 2024).validate().is_ok());
        assert!(birthdate(0, 2000).validate().is_err());
        assert!(birthdate(32, 2000).validate().is_err());
        assert!(birthdate(10, 1899).validate().is_err());
        assert!(birthdate(10, 2025).validate().is_err());
    }

    #[test]
    fn test_empty_single_choice_is_rejected() {
        let payload = RecordAnswerValidator {
            answer: Answer::SkinTone(" ".to_string()),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_answer_body_shape() {
        let payload: RecordAnswerValidator = serde_json::from_value(serde_json::json!({
            "answer": { "step": "skin_goals", "value": ["Reduce redness"] }
        }))
        .unwrap();

        assert_eq!(
            payload.answer,
            Answer::SkinGoals(vec!["Reduce redness".to_string()])
        );
    }
}
