use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::state::session::SessionStore;

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/sessions",
    "/sessions/create",
    "/sessions/detail/:id",
    "/sessions/update/:id",
    "/me",
    "/404",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/sessions",
    "/sessions/create",
    "/sessions/detail/:id",
    "/sessions/update/:id",
    "/me",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register", "/404"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Sessions,
    SessionCreate,
    SessionDetail(u64),
    SessionUpdate(u64),
    Me,
    NotFound,
}

impl Route {
    /// Unknown paths resolve to `NotFound`. Query strings and trailing
    /// slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["sessions"] => Route::Sessions,
            ["sessions", "create"] => Route::SessionCreate,
            ["sessions", "detail", id] => id.parse().map_or(Route::NotFound, Route::SessionDetail),
            ["sessions", "update", id] => id.parse().map_or(Route::NotFound, Route::SessionUpdate),
            ["me"] => Route::Me,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Login => "/login".into(),
            Route::Register => "/register".into(),
            Route::Sessions => "/sessions".into(),
            Route::SessionCreate => "/sessions/create".into(),
            Route::SessionDetail(id) => format!("/sessions/detail/{}", id),
            Route::SessionUpdate(id) => format!("/sessions/update/{}", id),
            Route::Me => "/me".into(),
            Route::NotFound => "/404".into(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Sessions
                | Route::SessionCreate
                | Route::SessionDetail(_)
                | Route::SessionUpdate(_)
                | Route::Me
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Route actually shown for `requested`: protected routes send logged-out
/// users to the login page.
pub fn guard(requested: Route, session: &SessionStore) -> Route {
    if requested.requires_auth() && !session.is_logged_in() {
        log::debug!("{} requires login, redirecting", requested);
        Route::Login
    } else {
        requested
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&self, route: &Route);

    fn back(&self);
}

/// In-memory navigation history with the authentication guard applied.
#[derive(Clone)]
pub struct MemoryRouter {
    session: SessionStore,
    history: Rc<RefCell<Vec<Route>>>,
}

impl MemoryRouter {
    pub fn new(session: SessionStore) -> Self {
        Self {
            session,
            history: Rc::new(RefCell::new(vec![Route::Home])),
        }
    }

    pub fn current(&self) -> Route {
        self.history
            .borrow()
            .last()
            .copied()
            .unwrap_or(Route::Home)
    }

    pub fn visit(&self, path: &str) -> Route {
        self.navigate(&Route::parse(path));
        self.current()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.borrow().clone()
    }
}

impl Navigator for MemoryRouter {
    fn navigate(&self, route: &Route) {
        let target = guard(*route, &self.session);
        log::debug!("navigate to {}", target);
        self.history.borrow_mut().push(target);
    }

    fn back(&self) {
        let mut history = self.history.borrow_mut();
        if history.len() > 1 {
            history.pop();
        }
    }
}
