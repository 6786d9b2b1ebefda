use weather_dashboard::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("logger already initialized");
    }
    leptos::mount::mount_to_body(App);
}
