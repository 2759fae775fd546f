use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Search,
}

pub struct Router;

impl Router {
    pub fn resolve(path: &str) -> Option<AppRoute> {
        match path {
            global_constants::ROOT_ROUTE => Some(AppRoute::Search),
            _ => None,
        }
    }
}
