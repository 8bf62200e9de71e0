use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    intake::{
        entities::{Answer, IntakeSession, WizardMode},
        value_objects::SubmitIntakeInput,
        wizard::NavAction,
    },
    llm::value_objects::LLMAnswer,
    screening::value_objects::UploadedImage,
};

pub type SessionUpdate = Box<dyn FnOnce(&mut IntakeSession) -> Result<(), CoreError> + Send>;

pub fn session_update<F>(change: F) -> SessionUpdate
where
    F: FnOnce(&mut IntakeSession) -> Result<(), CoreError> + Send + 'static,
{
    Box::new(change)
}

/// In-memory store of live wizard sessions.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create(
        &self,
        session: IntakeSession,
    ) -> impl Future<Output = Result<IntakeSession, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<IntakeSession>, CoreError>> + Send;

    /// Applies `change` to the stored session while holding it exclusively
    /// and returns the result. A failed change leaves the session as it was.
    fn update(
        &self,
        session_id: Uuid,
        change: SessionUpdate,
    ) -> impl Future<Output = Result<IntakeSession, CoreError>> + Send;

    fn delete(&self, session_id: Uuid) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Drops sessions idle for longer than the configured lifetime and
    /// returns how many were removed.
    fn purge_expired(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

pub trait IntakeService: Send + Sync {
    fn start_session(
        &self,
        mode: WizardMode,
    ) -> impl Future<Output = Result<IntakeSession, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<IntakeSession, CoreError>> + Send;

    fn record_answer(
        &self,
        session_id: Uuid,
        answer: Answer,
    ) -> impl Future<Output = Result<IntakeSession, CoreError>> + Send;

    fn navigate(
        &self,
        session_id: Uuid,
        action: NavAction,
    ) -> impl Future<Output = Result<IntakeSession, CoreError>> + Send;

    /// Optional re-screening step: classify uploaded photos inside the wizard.
    fn screen_session_images(
        &self,
        session_id: Uuid,
        images: Vec<UploadedImage>,
    ) -> impl Future<Output = Result<IntakeSession, CoreError>> + Send;

    /// Builds the prompt from the session's answers and forwards it to the
    /// LLM gateway. Only allowed on the terminal step.
    fn submit(
        &self,
        input: SubmitIntakeInput,
    ) -> impl Future<Output = Result<LLMAnswer, CoreError>> + Send;

    fn end_session(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
