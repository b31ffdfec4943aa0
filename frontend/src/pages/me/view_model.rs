use std::rc::Rc;

use crate::{
    api::{User, UserGateway},
    components::{
        error::{error_message, ViewError},
        snackbar::{notify, Notifier},
    },
    router::{Navigator, Route},
    state::session::SessionStore,
};

pub const ACCOUNT_DELETED_MESSAGE: &str = "Your account has been deleted !";

/// Profile page of the logged-in user.
pub struct MeViewModel {
    pub user: Option<User>,
    pub on_error: bool,
    store: SessionStore,
    users: Rc<dyn UserGateway>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl MeViewModel {
    pub fn new(
        store: SessionStore,
        users: Rc<dyn UserGateway>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            user: None,
            on_error: false,
            store,
            users,
            navigator,
            notifier,
        }
    }

    fn user_id(&self) -> Result<u64, ViewError> {
        self.store
            .identity()
            .map(|identity| identity.id)
            .ok_or(ViewError::NotLoggedIn)
    }

    pub async fn init(&mut self) -> Result<(), ViewError> {
        let id = self.user_id()?;
        match self.users.get_by_id(id).await {
            Ok(user) => {
                self.user = Some(user);
                self.on_error = false;
                Ok(())
            }
            Err(error) => {
                log::warn!("failed to load user {}: {}", id, error);
                self.on_error = true;
                Err(error.into())
            }
        }
    }

    /// Deletes the account, then logs out and returns home.
    pub async fn delete(&mut self) -> Result<(), ViewError> {
        let id = self.user_id()?;
        if let Err(error) = self.users.delete(id).await {
            log::warn!("failed to delete user {}: {}", id, error);
            self.on_error = true;
            return Err(error.into());
        }
        self.on_error = false;
        notify(self.notifier.as_ref(), ACCOUNT_DELETED_MESSAGE);
        self.store.log_out();
        self.navigator.navigate(&Route::Home);
        Ok(())
    }

    pub fn back(&self) {
        self.navigator.back();
    }

    pub fn error_message(&self) -> Option<&'static str> {
        error_message(self.on_error)
    }
}
