/// Failures when turning a location or a symbolic name into a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches path: {0}")]
    NoMatch(String),
    #[error("no route named: {0}")]
    UnknownName(String),
    #[error("location {location} is outside the router base {base}")]
    OutsideBase { location: String, base: String },
}
