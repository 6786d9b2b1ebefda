use weather_routes::RouterConfig;

/// Base URL the dashboard is served under, fixed at build time through `BASE_URL`.
pub const BASE_URL: &str = match option_env!("BASE_URL") {
    Some(base) => base,
    None => "/",
};

pub fn router_config() -> RouterConfig {
    RouterConfig::new(BASE_URL)
}
