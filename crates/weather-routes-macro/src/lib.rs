#![allow(clippy::needless_return)]
extern crate proc_macro;
pub(crate) mod derive_route_table;
pub(crate) mod route_path;
pub(crate) mod utils;

/// Derives `weather_routes::RouteTable` for an enum of unit variants.
///
/// Every variant needs a `#[route(path = "...")]` attribute. `name` defaults to the
/// variant identifier and `view` to `{view_prefix}{Variant}{view_suffix}`.
#[proc_macro_derive(RouteTable, attributes(route, routes))]
pub fn derive_route_table(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    derive_route_table::derive_route_table_impl(input)
}
