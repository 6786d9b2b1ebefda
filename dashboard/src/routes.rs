use weather_routes::RouteTable;

use crate::views::{
    AirQualityView, CloudsView, HumidityView, RainView, SoilView, TempView, ThunderView, WindView,
};

/// Navigation table of the dashboard, one entry per weather panel.
#[derive(RouteTable, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[routes(view_suffix = "View", transition = false)]
pub enum WeatherRoute {
    #[route(path = "/wind")]
    Wind,
    #[route(path = "/rain")]
    Rain,
    #[route(path = "/air-quality")]
    AirQuality,
    #[route(path = "/soil")]
    Soil,
    #[route(path = "/temp")]
    Temp,
    #[route(path = "/humidity")]
    Humidity,
    #[route(path = "/clouds")]
    Clouds,
    #[route(path = "/thunder")]
    Thunder,
}
