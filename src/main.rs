use emotion_docs::client::config::ClientConfig;
use emotion_docs::client::gui::app::DocsApp;
use iced::Application;

fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    let config = ClientConfig::from_env();
    config.apply_log_level();
    env_logger::init();

    // an invalid endpoint still opens the window; the form shows the error and stays disabled
    let mut settings = iced::Settings::with_flags(config);
    settings.window = iced::window::Settings {
        size: iced::Size::new(960.0, 900.0),
        // CloseRequested must reach the app so pending predictions get discarded
        exit_on_close_request: false,
        ..Default::default()
    };
    DocsApp::run(settings)
}
