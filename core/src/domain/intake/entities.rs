use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    intake::{
        questionnaire::{
            BIRTH_DAY_RANGE, BIRTH_YEAR_RANGE, REACTION_FREQUENCIES, SKIN_CONDITIONS, SKIN_GOALS,
            SKIN_SYMPTOMS, SKIN_TONES, SKIN_TYPES,
        },
        wizard::{NavAction, advance},
    },
    screening::entities::ImageScreening,
};

/// Entry mode of the wizard. The screening mode inserts the optional
/// re-screening step before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardMode {
    Standalone,
    WithScreening,
}

const STANDALONE_STEPS: [WizardStep; 9] = [
    WizardStep::Welcome,
    WizardStep::SkinGoals,
    WizardStep::SkinType,
    WizardStep::ReactionFrequency,
    WizardStep::SkinTone,
    WizardStep::SkinSymptoms,
    WizardStep::SkinConditions,
    WizardStep::Birthdate,
    WizardStep::Submission,
];

const SCREENING_STEPS: [WizardStep; 10] = [
    WizardStep::Welcome,
    WizardStep::SkinGoals,
    WizardStep::SkinType,
    WizardStep::ReactionFrequency,
    WizardStep::SkinTone,
    WizardStep::SkinSymptoms,
    WizardStep::SkinConditions,
    WizardStep::Birthdate,
    WizardStep::Screening,
    WizardStep::Submission,
];

impl WizardMode {
    pub fn steps(&self) -> &'static [WizardStep] {
        match self {
            WizardMode::Standalone => &STANDALONE_STEPS,
            WizardMode::WithScreening => &SCREENING_STEPS,
        }
    }

    pub fn total_steps(&self) -> u8 {
        self.steps().len() as u8
    }

    /// Step shown at a 1-based cursor position.
    pub fn step_at(&self, cursor: u8) -> Option<WizardStep> {
        let index = usize::from(cursor).checked_sub(1)?;
        self.steps().get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    SkinGoals,
    SkinType,
    ReactionFrequency,
    SkinTone,
    SkinSymptoms,
    SkinConditions,
    Birthdate,
    Screening,
    Submission,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BirthMonth {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl BirthMonth {
    pub fn name(&self) -> &'static str {
        match self {
            BirthMonth::January => "January",
            BirthMonth::February => "February",
            BirthMonth::March => "March",
            BirthMonth::April => "April",
            BirthMonth::May => "May",
            BirthMonth::June => "June",
            BirthMonth::July => "July",
            BirthMonth::August => "August",
            BirthMonth::September => "September",
            BirthMonth::October => "October",
            BirthMonth::November => "November",
            BirthMonth::December => "December",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Birthdate {
    pub day: u8,
    pub month: BirthMonth,
    pub year: u16,
}

impl Default for Birthdate {
    fn default() -> Self {
        Self {
            day: 1,
            month: BirthMonth::January,
            year: 2000,
        }
    }
}

impl Birthdate {
    pub fn validate(&self) -> Result<(), CoreError> {
        let (min_day, max_day) = BIRTH_DAY_RANGE;
        if !(min_day..=max_day).contains(&self.day) {
            return Err(CoreError::InvalidAnswer(format!(
                "day must be between {min_day} and {max_day}"
            )));
        }

        let (min_year, max_year) = BIRTH_YEAR_RANGE;
        if !(min_year..=max_year).contains(&self.year) {
            return Err(CoreError::InvalidAnswer(format!(
                "year must be between {min_year} and {max_year}"
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for Birthdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month.name(), self.year)
    }
}

/// Answer to a single wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "step", content = "value", rename_all = "snake_case")]
pub enum Answer {
    SkinGoals(Vec<String>),
    SkinType(String),
    ReactionFrequency(String),
    SkinTone(String),
    SkinSymptoms(Vec<String>),
    SkinConditions(Vec<String>),
    Birthdate(Birthdate),
}

impl Answer {
    pub fn step(&self) -> WizardStep {
        match self {
            Answer::SkinGoals(_) => WizardStep::SkinGoals,
            Answer::SkinType(_) => WizardStep::SkinType,
            Answer::ReactionFrequency(_) => WizardStep::ReactionFrequency,
            Answer::SkinTone(_) => WizardStep::SkinTone,
            Answer::SkinSymptoms(_) => WizardStep::SkinSymptoms,
            Answer::SkinConditions(_) => WizardStep::SkinConditions,
            Answer::Birthdate(_) => WizardStep::Birthdate,
        }
    }
}

/// Answers accumulated over one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnswerRecord {
    pub skin_goals: Vec<String>,
    pub skin_type: Option<String>,
    pub reaction_frequency: Option<String>,
    pub skin_tone: Option<String>,
    pub skin_symptoms: Vec<String>,
    pub skin_conditions: Vec<String>,
    pub birthdate: Birthdate,
}

fn single_choice(value: String, options: &[&str], field: &str) -> Result<String, CoreError> {
    if options.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(CoreError::InvalidAnswer(format!(
            "`{value}` is not a valid {field}"
        )))
    }
}

fn multi_choice(values: Vec<String>, options: &[&str], field: &str) -> Result<Vec<String>, CoreError> {
    let mut selected: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = single_choice(value, options, field)?;
        if !selected.contains(&value) {
            selected.push(value);
        }
    }
    Ok(selected)
}

impl AnswerRecord {
    /// Writes the field owned by the answer's step. Values must come from
    /// the step's option list; multi-selects drop duplicates.
    pub fn apply(&mut self, answer: Answer) -> Result<(), CoreError> {
        match answer {
            Answer::SkinGoals(goals) => {
                self.skin_goals = multi_choice(goals, &SKIN_GOALS, "skin goal")?;
            }
            Answer::SkinType(skin_type) => {
                self.skin_type = Some(single_choice(skin_type, &SKIN_TYPES, "skin type")?);
            }
            Answer::ReactionFrequency(frequency) => {
                self.reaction_frequency = Some(single_choice(
                    frequency,
                    &REACTION_FREQUENCIES,
                    "reaction frequency",
                )?);
            }
            Answer::SkinTone(tone) => {
                self.skin_tone = Some(single_choice(tone, &SKIN_TONES, "skin tone")?);
            }
            Answer::SkinSymptoms(symptoms) => {
                self.skin_symptoms = multi_choice(symptoms, &SKIN_SYMPTOMS, "symptom")?;
            }
            Answer::SkinConditions(conditions) => {
                self.skin_conditions = multi_choice(conditions, &SKIN_CONDITIONS, "skin condition")?;
            }
            Answer::Birthdate(birthdate) => {
                birthdate.validate()?;
                self.birthdate = birthdate;
            }
        }

        Ok(())
    }

    /// Whether `step` has what it needs for `Next`. Steps without an input,
    /// the birthdate (always defaulted) and the optional re-screening are
    /// always satisfied.
    pub fn is_step_answered(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::SkinGoals => !self.skin_goals.is_empty(),
            WizardStep::SkinType => self.skin_type.is_some(),
            WizardStep::ReactionFrequency => self.reaction_frequency.is_some(),
            WizardStep::SkinTone => self.skin_tone.is_some(),
            WizardStep::SkinSymptoms => !self.skin_symptoms.is_empty(),
            WizardStep::SkinConditions => !self.skin_conditions.is_empty(),
            WizardStep::Welcome
            | WizardStep::Birthdate
            | WizardStep::Screening
            | WizardStep::Submission => true,
        }
    }
}

/// Per-user wizard context. Every step handler works on one of these; no
/// wizard state is shared between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IntakeSession {
    pub id: Uuid,
    pub mode: WizardMode,
    pub cursor: u8,
    pub answers: AnswerRecord,
    pub screenings: Vec<ImageScreening>,
    pub started_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl IntakeSession {
    pub fn new(mode: WizardMode) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            mode,
            cursor: 1,
            answers: AnswerRecord::default(),
            screenings: Vec::new(),
            started_at: now,
            last_activity_at: now,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.mode
            .step_at(self.cursor)
            .unwrap_or(WizardStep::Submission)
    }

    pub fn total_steps(&self) -> u8 {
        self.mode.total_steps()
    }

    pub fn is_terminal(&self) -> bool {
        self.cursor >= self.total_steps()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_terminal() && self.answers.is_step_answered(self.current_step())
    }

    /// Records an answer for the step currently displayed.
    pub fn record_answer(&mut self, answer: Answer) -> Result<(), CoreError> {
        if answer.step() != self.current_step() {
            return Err(CoreError::StepMismatch {
                current: self.cursor,
            });
        }

        self.answers.apply(answer)?;
        self.touch();
        Ok(())
    }

    pub fn navigate(&mut self, action: NavAction) -> Result<u8, CoreError> {
        self.cursor = advance(self.mode, self.cursor, action, &self.answers)?;
        self.touch();
        Ok(self.cursor)
    }

    pub fn record_screenings(&mut self, screenings: Vec<ImageScreening>) -> Result<(), CoreError> {
        if self.current_step() != WizardStep::Screening {
            return Err(CoreError::StepMismatch {
                current: self.cursor,
            });
        }

        self.screenings = screenings;
        self.touch();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }
}
