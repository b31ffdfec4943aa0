use std::rc::Rc;

use crate::{
    api::{ApiError, Session, SessionGateway, Teacher, TeacherGateway},
    components::{
        error::{error_message, ViewError},
        forms::FormState,
        snackbar::{notify, Notifier},
    },
    router::{Navigator, Route},
    state::session::SessionStore,
};

use super::utils::SessionForm;

pub const SESSION_CREATED_MESSAGE: &str = "Session created !";
pub const SESSION_UPDATED_MESSAGE: &str = "Session updated !";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(u64),
}

impl FormMode {
    /// Only the create and update routes open the form.
    pub fn from_route(route: &Route) -> Option<FormMode> {
        match route {
            Route::SessionCreate => Some(FormMode::Create),
            Route::SessionUpdate(id) => Some(FormMode::Update(*id)),
            _ => None,
        }
    }
}

pub struct SessionFormViewModel {
    pub mode: FormMode,
    pub form: SessionForm,
    pub teachers: Vec<Teacher>,
    pub on_error: bool,
    editing: Option<Session>,
    store: SessionStore,
    sessions: Rc<dyn SessionGateway>,
    teacher_gateway: Rc<dyn TeacherGateway>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl SessionFormViewModel {
    pub fn new(
        mode: FormMode,
        store: SessionStore,
        sessions: Rc<dyn SessionGateway>,
        teacher_gateway: Rc<dyn TeacherGateway>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            mode,
            form: SessionForm::default(),
            teachers: Vec::new(),
            on_error: false,
            editing: None,
            store,
            sessions,
            teacher_gateway,
            navigator,
            notifier,
        }
    }

    pub fn on_update(&self) -> bool {
        matches!(self.mode, FormMode::Update(_))
    }

    /// Sends non-admins back to the list; otherwise loads the teachers and,
    /// when editing, pre-fills the form from the stored session.
    pub async fn init(&mut self) -> Result<(), ViewError> {
        let is_admin = self
            .store
            .identity()
            .is_some_and(|identity| identity.is_admin);
        if !is_admin {
            log::debug!("session form is admin-only, redirecting");
            self.navigator.navigate(&Route::Sessions);
            return Ok(());
        }

        if let FormMode::Update(id) = self.mode {
            let result = self.sessions.detail(id).await;
            let session = self.guarded(result)?;
            self.form = SessionForm::from_session(&session);
            self.editing = Some(session);
        }

        let result = self.teacher_gateway.all().await;
        self.teachers = self.guarded(result)?;
        self.on_error = false;
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        error_message(self.on_error)
    }

    pub async fn submit(&mut self) -> Result<(), ViewError> {
        let session = self.form.to_session(self.editing.as_ref())?;

        let message = match self.mode {
            FormMode::Create => {
                let result = self.sessions.create(&session).await;
                self.guarded(result)?;
                SESSION_CREATED_MESSAGE
            }
            FormMode::Update(id) => {
                let result = self.sessions.update(id, &session).await;
                self.guarded(result)?;
                SESSION_UPDATED_MESSAGE
            }
        };
        self.on_error = false;
        notify(self.notifier.as_ref(), message);
        self.navigator.navigate(&Route::Sessions);
        Ok(())
    }

    fn guarded<T>(&mut self, result: Result<T, ApiError>) -> Result<T, ViewError> {
        result.map_err(|error| {
            log::warn!("session form: {}", error);
            self.on_error = true;
            ViewError::from(error)
        })
    }
}
