use std::rc::Rc;

use validator::Validate;

use super::utils::RegisterForm;
use crate::{
    api::AuthGateway,
    components::{
        error::{error_message, ViewError},
        forms::FormState,
    },
    router::{Navigator, Route},
};

pub struct RegisterViewModel {
    pub form: RegisterForm,
    pub on_error: bool,
    auth: Rc<dyn AuthGateway>,
    navigator: Rc<dyn Navigator>,
}

impl RegisterViewModel {
    pub fn new(auth: Rc<dyn AuthGateway>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            form: RegisterForm::default(),
            on_error: false,
            auth,
            navigator,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        error_message(self.on_error)
    }

    /// Creates the account and sends the user to the login page.
    pub async fn submit(&mut self) -> Result<(), ViewError> {
        self.form.validate()?;

        if let Err(error) = self.auth.register(&self.form.to_request()).await {
            log::warn!("registration failed: {}", error);
            self.on_error = true;
            return Err(error.into());
        }
        self.on_error = false;
        self.navigator.navigate(&Route::Login);
        Ok(())
    }
}
