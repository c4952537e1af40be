//! Single-page application shell
//! Launches the routed Dioxus app in the browser, or in a native window with `--features desktop`

use dioxus::logger::tracing::Level;
use ui::App;

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialize logging: {err}");
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{LogicalSize, WindowBuilder};

        dioxus::LaunchBuilder::desktop()
            .with_cfg(
                dioxus::desktop::Config::new().with_window(
                    WindowBuilder::new()
                        .with_title("SPA Shell")
                        .with_inner_size(LogicalSize::new(1100.0, 700.0))
                        .with_resizable(true),
                ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}
