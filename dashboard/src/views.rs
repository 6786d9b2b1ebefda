//! Placeholder panels mounted by [`crate::WeatherRoute`]. The charts and gauges
//! that fill them live outside this crate.

use leptos::prelude::*;

#[component]
fn Panel(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="weather-panel">
            <h1>{title}</h1>
            {children()}
        </section>
    }
}

#[component]
pub fn WindView() -> impl IntoView {
    view! {
        <Panel title="Wind">
            <p>"Wind speed and gust intervals."</p>
        </Panel>
    }
}

#[component]
pub fn RainView() -> impl IntoView {
    view! {
        <Panel title="Rain">
            <p>"Precipitation amounts."</p>
        </Panel>
    }
}

#[component]
pub fn AirQualityView() -> impl IntoView {
    view! {
        <Panel title="Air quality">
            <p>"Air quality index."</p>
        </Panel>
    }
}

#[component]
pub fn SoilView() -> impl IntoView {
    view! {
        <Panel title="Soil">
            <p>"Soil index."</p>
        </Panel>
    }
}

#[component]
pub fn TempView() -> impl IntoView {
    view! {
        <Panel title="Temperature">
            <p>"Temperature readings."</p>
        </Panel>
    }
}

#[component]
pub fn HumidityView() -> impl IntoView {
    view! {
        <Panel title="Humidity">
            <p>"Relative humidity."</p>
        </Panel>
    }
}

#[component]
pub fn CloudsView() -> impl IntoView {
    view! {
        <Panel title="Clouds">
            <p>"Cloud cover intervals."</p>
        </Panel>
    }
}

#[component]
pub fn ThunderView() -> impl IntoView {
    view! {
        <Panel title="Thunder">
            <p>"Thunderstorm probability."</p>
        </Panel>
    }
}
