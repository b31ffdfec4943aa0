use std::rc::Rc;

use validator::Validate;

use super::utils::LoginForm;
use crate::{
    api::AuthGateway,
    components::{
        error::{error_message, ViewError},
        forms::FormState,
    },
    router::{Navigator, Route},
    state::session::SessionStore,
};

pub struct LoginViewModel {
    pub form: LoginForm,
    /// Password input is masked while set.
    pub hide: bool,
    pub on_error: bool,
    auth: Rc<dyn AuthGateway>,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl LoginViewModel {
    pub fn new(
        auth: Rc<dyn AuthGateway>,
        session: SessionStore,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            form: LoginForm::default(),
            hide: true,
            on_error: false,
            auth,
            session,
            navigator,
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
    }

    pub fn toggle_hide(&mut self) {
        self.hide = !self.hide;
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        error_message(self.on_error)
    }

    /// Logs in, records the identity and opens the session list. Failures
    /// leave the store untouched and only raise the error flag.
    pub async fn submit(&mut self) -> Result<(), ViewError> {
        self.form.validate()?;
        let request = self.form.to_request();

        match self.auth.login(&request).await {
            Ok(identity) => {
                self.on_error = false;
                self.session.log_in(identity);
                self.navigator.navigate(&Route::Sessions);
                Ok(())
            }
            Err(error) => {
                log::warn!("login failed: {}", error);
                self.on_error = true;
                Err(error.into())
            }
        }
    }
}
