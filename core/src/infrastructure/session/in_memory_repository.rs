use std::{collections::HashMap, time::Duration};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    intake::{
        entities::IntakeSession,
        ports::{SessionRepository, SessionUpdate},
    },
};

/// Process-local session store. Sessions are isolated by id and disappear
/// on restart.
#[derive(Debug)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, IntakeSession>>,
    ttl: chrono::Duration,
}

impl InMemorySessionRepository {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    fn is_expired(&self, session: &IntakeSession) -> bool {
        Utc::now() - session.last_activity_at > self.ttl
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: IntakeSession) -> Result<IntakeSession, CoreError> {
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        Ok(session)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<IntakeSession>, CoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(&session_id)
            .filter(|session| !self.is_expired(session))
            .cloned())
    }

    async fn update(
        &self,
        session_id: Uuid,
        change: SessionUpdate,
    ) -> Result<IntakeSession, CoreError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions
            .get_mut(&session_id)
            .filter(|session| !self.is_expired(session))
            .ok_or(CoreError::SessionNotFound)?;

        let mut updated = stored.clone();
        change(&mut updated)?;
        *stored = updated.clone();

        Ok(updated)
    }

    async fn delete(&self, session_id: Uuid) -> Result<bool, CoreError> {
        Ok(self.sessions.write().await.remove(&session_id).is_some())
    }

    async fn purge_expired(&self) -> Result<usize, CoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session));
        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::{entities::WizardMode, ports::session_update};

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let repository = InMemorySessionRepository::new(Duration::from_secs(60));
        let first = repository
            .create(IntakeSession::new(WizardMode::Standalone))
            .await
            .unwrap();
        let mut second = repository
            .create(IntakeSession::new(WizardMode::Standalone))
            .await
            .unwrap();

        second = repository
            .update(second.id, session_update(|session| {
                session.cursor = 4;
                Ok(())
            }))
            .await
            .unwrap();

        let first = repository.get_by_id(first.id).await.unwrap().unwrap();
        let second = repository.get_by_id(second.id).await.unwrap().unwrap();
        assert_eq!(first.cursor, 1);
        assert_eq!(second.cursor, 4);
    }

    #[tokio::test]
    async fn test_update_unknown_session_fails() {
        let repository = InMemorySessionRepository::new(Duration::from_secs(60));
        let err = repository
            .update(Uuid::new_v4(), session_update(|_| Ok(())))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::SessionNotFound);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_session_unchanged() {
        let repository = InMemorySessionRepository::new(Duration::from_secs(60));
        let session = repository
            .create(IntakeSession::new(WizardMode::Standalone))
            .await
            .unwrap();

        let err = repository
            .update(session.id, session_update(|session| {
                session.cursor = 5;
                Err(CoreError::FinalStepReached)
            }))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::FinalStepReached);
        assert_eq!(
            repository.get_by_id(session.id).await.unwrap().unwrap().cursor,
            1
        );
    }

    #[tokio::test]
    async fn test_delete_discards_session() {
        let repository = InMemorySessionRepository::new(Duration::from_secs(60));
        let session = repository
            .create(IntakeSession::new(WizardMode::WithScreening))
            .await
            .unwrap();

        assert!(repository.delete(session.id).await.unwrap());
        assert!(!repository.delete(session.id).await.unwrap());
        assert!(repository.get_by_id(session.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_idle_sessions_expire() {
        let repository = InMemorySessionRepository::new(Duration::from_secs(60));
        let mut stale = IntakeSession::new(WizardMode::Standalone);
        stale.last_activity_at = Utc::now() - chrono::Duration::minutes(5);
        let stale = repository.create(stale).await.unwrap();
        let fresh = repository
            .create(IntakeSession::new(WizardMode::Standalone))
            .await
            .unwrap();

        assert!(repository.get_by_id(stale.id).await.unwrap().is_none());
        assert_eq!(repository.purge_expired().await.unwrap(), 1);
        assert!(repository.get_by_id(fresh.id).await.unwrap().is_some());
    }
}
