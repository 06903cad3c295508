use dioxus::desktop::Config;
use dioxus::desktop::WindowBuilder;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting block feed (desktop)");

    let window = WindowBuilder::new().with_title("Latest Blocks");
    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(ui::App);
}
