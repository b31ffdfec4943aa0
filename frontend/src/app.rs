//! Composition root: one `SessionStore`, one API client and one router,
//! shared by every view model the application builds.

use std::rc::Rc;

use crate::{
    api::ApiClient,
    components::snackbar::{LogNotifier, Notifier},
    config::ClientConfig,
    pages::{
        FormMode, LoginViewModel, MeViewModel, RegisterViewModel, SessionDetailViewModel,
        SessionFormViewModel, SessionListViewModel,
    },
    router::{MemoryRouter, Navigator, Route},
    state::session::{LoggedInStream, SessionStore},
};

/// Toolbar state: which links to show and the logout action.
pub struct AppViewModel {
    store: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl AppViewModel {
    pub fn new(store: SessionStore, navigator: Rc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    pub fn is_logged(&self) -> LoggedInStream {
        self.store.logged_in_stream()
    }

    pub fn logout(&self) {
        self.store.log_out();
        self.navigator.navigate(&Route::Home);
    }
}

pub struct App {
    store: SessionStore,
    client: Rc<ApiClient>,
    router: MemoryRouter,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

impl App {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(ApiClient::new_with_base_url(config.api_base_url.clone()))
    }

    /// Wires `client` to a fresh store; requests carry its token once a user
    /// logs in.
    pub fn with_client(client: ApiClient) -> Self {
        let store = SessionStore::new();
        let router = MemoryRouter::new(store.clone());
        Self {
            client: Rc::new(client.with_session(store.clone())),
            navigator: Rc::new(router.clone()),
            notifier: Rc::new(LogNotifier),
            router,
            store,
        }
    }

    pub fn with_notifier(mut self, notifier: Rc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn router(&self) -> &MemoryRouter {
        &self.router
    }

    pub fn shell(&self) -> AppViewModel {
        AppViewModel::new(self.store.clone(), self.navigator.clone())
    }

    pub fn login(&self) -> LoginViewModel {
        LoginViewModel::new(self.client.clone(), self.store.clone(), self.navigator.clone())
    }

    pub fn register(&self) -> RegisterViewModel {
        RegisterViewModel::new(self.client.clone(), self.navigator.clone())
    }

    pub fn session_list(&self) -> SessionListViewModel {
        SessionListViewModel::new(self.client.clone(), self.store.clone())
    }

    pub fn session_detail(&self, session_id: u64) -> SessionDetailViewModel {
        SessionDetailViewModel::new(
            session_id,
            &self.store,
            self.client.clone(),
            self.client.clone(),
            self.navigator.clone(),
            self.notifier.clone(),
        )
    }

    pub fn session_form(&self, mode: FormMode) -> SessionFormViewModel {
        SessionFormViewModel::new(
            mode,
            self.store.clone(),
            self.client.clone(),
            self.client.clone(),
            self.navigator.clone(),
            self.notifier.clone(),
        )
    }

    pub fn me(&self) -> MeViewModel {
        MeViewModel::new(
            self.store.clone(),
            self.client.clone(),
            self.navigator.clone(),
            self.notifier.clone(),
        )
    }
}
