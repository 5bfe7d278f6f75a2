//! Cardstock - a mock banking card screen
//! Built with iced for a small, dark mode animation demo

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod palette;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size((420.0, 780.0))
        .antialiasing(true)
        .run()
}
