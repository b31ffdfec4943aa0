use std::rc::Rc;

use crate::{
    api::{ApiError, Session, SessionGateway, Teacher, TeacherGateway},
    components::{
        error::{error_message, ViewError},
        snackbar::{notify, Notifier},
    },
    router::{Navigator, Route},
    state::session::SessionStore,
};

pub const SESSION_DELETED_MESSAGE: &str = "Session deleted !";

pub struct SessionDetailViewModel {
    pub session_id: u64,
    pub is_admin: bool,
    pub user_id: Option<u64>,
    pub session: Option<Session>,
    pub teacher: Option<Teacher>,
    pub is_participate: bool,
    pub on_error: bool,
    sessions: Rc<dyn SessionGateway>,
    teachers: Rc<dyn TeacherGateway>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl SessionDetailViewModel {
    pub fn new(
        session_id: u64,
        store: &SessionStore,
        sessions: Rc<dyn SessionGateway>,
        teachers: Rc<dyn TeacherGateway>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let identity = store.identity();
        Self {
            session_id,
            is_admin: identity.as_ref().is_some_and(|identity| identity.is_admin),
            user_id: identity.map(|identity| identity.id),
            session: None,
            teacher: None,
            is_participate: false,
            on_error: false,
            sessions,
            teachers,
            navigator,
            notifier,
        }
    }

    pub async fn init(&mut self) -> Result<(), ViewError> {
        self.fetch_session().await
    }

    /// Loads the session, then the teacher leading it.
    pub async fn fetch_session(&mut self) -> Result<(), ViewError> {
        let result = self.sessions.detail(self.session_id).await;
        let session = self.guarded(result)?;
        self.is_participate = self
            .user_id
            .is_some_and(|user_id| session.has_participant(user_id));
        let teacher_id = session.teacher_id;
        self.session = Some(session);

        let result = self.teachers.detail(teacher_id).await;
        self.teacher = Some(self.guarded(result)?);
        self.on_error = false;
        Ok(())
    }

    pub async fn participate(&mut self) -> Result<(), ViewError> {
        let user_id = self.user_id.ok_or(ViewError::NotLoggedIn)?;
        let result = self.sessions.participate(self.session_id, user_id).await;
        self.guarded(result)?;
        self.fetch_session().await
    }

    pub async fn un_participate(&mut self) -> Result<(), ViewError> {
        let user_id = self.user_id.ok_or(ViewError::NotLoggedIn)?;
        let result = self.sessions.un_participate(self.session_id, user_id).await;
        self.guarded(result)?;
        self.fetch_session().await
    }

    pub async fn delete(&mut self) -> Result<(), ViewError> {
        let result = self.sessions.delete(self.session_id).await;
        self.guarded(result)?;
        self.on_error = false;
        notify(self.notifier.as_ref(), SESSION_DELETED_MESSAGE);
        self.navigator.navigate(&Route::Sessions);
        Ok(())
    }

    pub fn back(&self) {
        self.navigator.back();
    }

    pub fn error_message(&self) -> Option<&'static str> {
        error_message(self.on_error)
    }

    fn guarded<T>(&mut self, result: Result<T, ApiError>) -> Result<T, ViewError> {
        result.map_err(|error| {
            log::warn!("session {}: {}", self.session_id, error);
            self.on_error = true;
            ViewError::from(error)
        })
    }
}
