mod config;
mod error;
mod hook_extensions;
mod paths;

pub use config::{HistoryMode, RouterConfig};
pub use error::RouteError;
pub use paths::{combine_paths, normalize_base, normalize_path};
pub use weather_routes_macro::RouteTable;

/// One row of a route table: the URL path, the symbolic name and the variant that
/// stands for the mounted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry<R: 'static> {
    pub path: &'static str,
    pub name: &'static str,
    pub route: R,
}

/// A static, ordered table of routes, usually produced by `#[derive(RouteTable)]`.
///
/// Paths and names are unique across [`RouteTable::ENTRIES`]; the derive rejects
/// duplicates at compile time.
pub trait RouteTable: Sized + Copy + 'static {
    const ENTRIES: &'static [RouteEntry<Self>];

    fn path(&self) -> &'static str;

    fn name(&self) -> &'static str;

    /// Resolves a path to the first entry matching it exactly. Query strings,
    /// fragments and a single trailing `/` are ignored.
    fn from_path(path: &str) -> Option<Self>;

    fn from_name(name: &str) -> Option<Self>;

    fn routes() -> impl ::leptos::IntoView;

    fn flat_routes() -> impl ::leptos::IntoView;

    /// Absolute href of this route under the configured base.
    fn href(&self, config: &RouterConfig) -> String {
        combine_paths(config.base(), self.path())
    }
}

pub mod prelude {
    pub use weather_routes_macro::*;
    pub use crate::hook_extensions::{LocationExt, NavigateExt};
    pub use super::{RouteEntry, RouteTable};
    pub use crate::config::{HistoryMode, RouterConfig};
    pub use crate::error::RouteError;
}
