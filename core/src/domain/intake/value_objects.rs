use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    intake::{
        entities::{AnswerRecord, IntakeSession, WizardMode, WizardStep},
        questionnaire::{SelectionKind, step_copy},
    },
    screening::entities::ImageScreening,
};

/// What the client renders for the current step of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WizardView {
    pub session_id: Uuid,
    pub mode: WizardMode,
    pub step: u8,
    pub total_steps: u8,
    pub kind: WizardStep,
    pub header: String,
    pub description: String,
    pub selection: SelectionKind,
    pub options: Vec<String>,
    pub answers: AnswerRecord,
    pub screenings: Vec<ImageScreening>,
    pub can_go_back: bool,
    pub can_go_next: bool,
    pub is_terminal: bool,
    pub started_at: DateTime<Utc>,
}

impl From<&IntakeSession> for WizardView {
    fn from(session: &IntakeSession) -> Self {
        let kind = session.current_step();
        let copy = step_copy(kind);

        Self {
            session_id: session.id,
            mode: session.mode,
            step: session.cursor,
            total_steps: session.total_steps(),
            kind,
            header: copy.header.to_string(),
            description: copy.description.to_string(),
            selection: copy.selection,
            options: copy.options.iter().map(|o| o.to_string()).collect(),
            answers: session.answers.clone(),
            screenings: session.screenings.clone(),
            can_go_back: session.can_go_back(),
            can_go_next: session.can_go_next(),
            is_terminal: session.is_terminal(),
            started_at: session.started_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitIntakeInput {
    pub session_id: Uuid,
    pub api_key: Option<String>,
}
