use leptos::prelude::Get;
use leptos_router::{location::Location, NavigateOptions};

use crate::{RouteError, RouteTable, RouterConfig};

/// Typed navigation on top of the closure returned by `use_navigate`.
pub trait NavigateExt: Fn(&str, NavigateOptions) {
    fn navigate_to<R: RouteTable>(&self, route: R) {
        self.navigate_to_with_options(route, NavigateOptions::default());
    }

    fn navigate_to_with_options<R: RouteTable>(&self, route: R, options: NavigateOptions) {
        (self)(route.path(), options);
    }

    /// Navigates by symbolic name instead of literal path.
    fn navigate_named<R: RouteTable>(&self, name: &str) -> Result<(), RouteError> {
        let route = R::from_name(name).ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        log::debug!("navigating to {} ({})", name, route.path());
        self.navigate_to(route);
        Ok(())
    }
}

impl<F> NavigateExt for F
where
    F: Fn(&str, NavigateOptions),
{}

pub trait LocationExt {
    fn current_path(&self) -> String;
    fn current_route<R: RouteTable>(&self, config: &RouterConfig) -> Option<R>;
}

impl LocationExt for Location {
    fn current_path(&self) -> String {
        self.pathname.get()
    }

    fn current_route<R: RouteTable>(&self, config: &RouterConfig) -> Option<R> {
        config.resolve(&self.current_path()).ok()
    }
}
