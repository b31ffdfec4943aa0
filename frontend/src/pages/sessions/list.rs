use std::rc::Rc;

use crate::{
    api::{ApiError, Session, SessionGateway, SessionIdentity},
    components::error::error_message,
    state::session::SessionStore,
};

/// Session overview. Admins additionally get create and edit actions.
pub struct SessionListViewModel {
    pub sessions: Vec<Session>,
    pub on_error: bool,
    gateway: Rc<dyn SessionGateway>,
    session: SessionStore,
}

impl SessionListViewModel {
    pub fn new(gateway: Rc<dyn SessionGateway>, session: SessionStore) -> Self {
        Self {
            sessions: Vec::new(),
            on_error: false,
            gateway,
            session,
        }
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self.gateway.all().await {
            Ok(sessions) => {
                log::debug!("loaded {} sessions", sessions.len());
                self.sessions = sessions;
                self.on_error = false;
                Ok(())
            }
            Err(error) => {
                log::warn!("failed to load sessions: {}", error);
                self.on_error = true;
                Err(error)
            }
        }
    }

    pub fn user(&self) -> Option<Rc<SessionIdentity>> {
        self.session.identity()
    }

    pub fn can_manage(&self) -> bool {
        self.user().is_some_and(|identity| identity.is_admin)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        error_message(self.on_error)
    }
}
