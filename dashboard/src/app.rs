use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Router, A};
use leptos_router::hooks::{use_location, use_navigate};
use weather_routes::prelude::*;

use crate::config::router_config;
use crate::routes::WeatherRoute;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let config = router_config();
    log::info!(
        "mounting {} weather routes (base: {:?}, history: {:?})",
        WeatherRoute::ENTRIES.len(),
        config.base(),
        config.history()
    );
    let base = config.base().to_owned();
    provide_context(config);

    view! {
        <Title text="Weather Dashboard" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Router base=base>
            <NavBar />
            <main>
                {WeatherRoute::flat_routes()}
            </main>
        </Router>
    }
}

/// Links to every table entry plus a selector that navigates by route name.
#[component]
fn NavBar() -> impl IntoView {
    let config = use_context::<RouterConfig>().unwrap_or_default();
    let location = use_location();
    let current = Memo::new(move |_| location.current_route::<WeatherRoute>(&config));

    let navigate = use_navigate();
    let on_select = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        if let Err(err) = navigate.navigate_named::<WeatherRoute>(&name) {
            log::warn!("ignoring view selection: {}", err);
        }
    };

    view! {
        <nav class="weather-nav">
            <ul>
                {WeatherRoute::ENTRIES
                    .iter()
                    .map(|entry| view! { <li><A href=entry.path>{entry.name}</A></li> })
                    .collect_view()}
            </ul>
            // `selected` covers the first render, before the options exist for `value`.
            <select
                aria-label="Weather view"
                on:change=on_select
                prop:value=move || selected_name(current.get())
            >
                <option value="" selected=move || current.get().is_none()>"Choose a view"</option>
                {WeatherRoute::ENTRIES
                    .iter()
                    .map(|entry| {
                        let route = entry.route;
                        view! {
                            <option value=entry.name selected=move || current.get() == Some(route)>
                                {entry.name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </nav>
    }
}

/// Value of the view selector for the current route, `""` for the placeholder.
fn selected_name(route: Option<WeatherRoute>) -> &'static str {
    route.map(|route| route.name()).unwrap_or("")
}
