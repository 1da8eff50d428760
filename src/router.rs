use log::debug;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Login => "/login",
        }
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

#[derive(Debug)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Router { current: start }
    }

    pub fn current(&self) -> Route {
        self.current
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        debug!("navigate {} -> {}", self.current.path(), route.path());
        self.current = route;
    }
}
