use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    intake::{
        entities::{Answer, IntakeSession, WizardMode, WizardStep},
        ports::{IntakeService, SessionRepository, session_update},
        prompt::build_prompt,
        value_objects::SubmitIntakeInput,
        wizard::NavAction,
    },
    llm::{ports::LLMClient, services::require_api_key, value_objects::LLMAnswer},
    screening::{
        ports::{ImageClassifier, RecommendationRepository},
        value_objects::UploadedImage,
    },
};

impl<L, C, RR, S> Service<L, C, RR, S>
where
    L: LLMClient,
    C: ImageClassifier,
    RR: RecommendationRepository,
    S: SessionRepository,
{
    async fn load_session(&self, session_id: Uuid) -> Result<IntakeSession, CoreError> {
        self.session_repository
            .get_by_id(session_id)
            .await?
            .ok_or(CoreError::SessionNotFound)
    }
}

impl<L, C, RR, S> IntakeService for Service<L, C, RR, S>
where
    L: LLMClient,
    C: ImageClassifier,
    RR: RecommendationRepository,
    S: SessionRepository,
{
    async fn start_session(&self, mode: WizardMode) -> Result<IntakeSession, CoreError> {
        let purged = self.session_repository.purge_expired().await?;
        if purged > 0 {
            tracing::debug!(purged, "expired intake sessions removed");
        }

        let session = self
            .session_repository
            .create(IntakeSession::new(mode))
            .await?;

        tracing::info!(session_id = %session.id, ?mode, "intake session started");
        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<IntakeSession, CoreError> {
        self.load_session(session_id).await
    }

    async fn record_answer(
        &self,
        session_id: Uuid,
        answer: Answer,
    ) -> Result<IntakeSession, CoreError> {
        self.session_repository
            .update(
                session_id,
                session_update(move |session| session.record_answer(answer)),
            )
            .await
    }

    async fn navigate(
        &self,
        session_id: Uuid,
        action: NavAction,
    ) -> Result<IntakeSession, CoreError> {
        let session = self
            .session_repository
            .update(
                session_id,
                session_update(move |session| session.navigate(action).map(|_| ())),
            )
            .await?;

        tracing::debug!(%session_id, to = session.cursor, ?action, "wizard transition");
        Ok(session)
    }

    async fn screen_session_images(
        &self,
        session_id: Uuid,
        images: Vec<UploadedImage>,
    ) -> Result<IntakeSession, CoreError> {
        let session = self.load_session(session_id).await?;
        if session.current_step() != WizardStep::Screening {
            return Err(CoreError::StepMismatch {
                current: session.cursor,
            });
        }

        let screenings = self.classify_all(images).await?;

        // The step is checked again under the store's lock.
        self.session_repository
            .update(
                session_id,
                session_update(move |session| session.record_screenings(screenings)),
            )
            .await
    }

    async fn submit(&self, input: SubmitIntakeInput) -> Result<LLMAnswer, CoreError> {
        let session = self.load_session(input.session_id).await?;
        if !session.is_terminal() {
            return Err(CoreError::NotAtFinalStep);
        }

        let api_key = require_api_key(input.api_key)?;
        let prompt = build_prompt(&session.answers);

        let response = self
            .llm_client
            .get_response(prompt.clone(), api_key, self.request_options)
            .await?;

        // Only the activity time is written back; changes made while the
        // request was in flight are kept.
        let touched = self
            .session_repository
            .update(
                input.session_id,
                session_update(|session| {
                    session.touch();
                    Ok(())
                }),
            )
            .await;
        if let Err(e) = touched {
            tracing::debug!(session_id = %input.session_id, "session not touched after submit: {}", e);
        }

        tracing::info!(session_id = %input.session_id, "intake questionnaire submitted");
        Ok(LLMAnswer { prompt, response })
    }

    async fn end_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        if !self.session_repository.delete(session_id).await? {
            return Err(CoreError::SessionNotFound);
        }

        tracing::info!(%session_id, "intake session ended");
        Ok(())
    }
}
