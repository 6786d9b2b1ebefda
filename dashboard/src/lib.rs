pub mod app;
pub mod config;
pub mod routes;
pub mod views;

pub use app::App;
pub use routes::WeatherRoute;
