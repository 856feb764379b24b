use iced::{event, window, Application, Command, Element, Event, Subscription, Theme};

use crate::client::config::ClientConfig;
use crate::client::gui::views::docs;
use crate::client::models::app_state::{DocsAppState, Effect};
use crate::client::models::code_snippet::acknowledgment_elapsed;
use crate::client::models::messages::Message;
use crate::client::services::clipboard_service::SystemClipboard;
use crate::client::services::prediction_service::PredictionService;

pub struct DocsApp {
    pub state: DocsAppState,
    pub prediction_service: PredictionService,
    clipboard: SystemClipboard,
}

impl Application for DocsApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ClientConfig;

    fn new(config: ClientConfig) -> (Self, Command<Message>) {
        log::info!("[APP_START] prediction endpoint: {}", config.predict_url());
        let app = DocsApp {
            state: DocsAppState::new(&config),
            prediction_service: PredictionService::new(&config),
            clipboard: SystemClipboard::new(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Emotion Detection API Documentation".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match self.state.update(message, &mut self.clipboard) {
            Effect::None => Command::none(),
            Effect::Predict(submission) => {
                let svc = self.prediction_service.clone();
                let generation = submission.generation;
                Command::perform(
                    async move { svc.predict(&submission.sentence).await },
                    move |outcome| Message::PredictionFinished { generation, outcome },
                )
            }
            Effect::ExpireAck(ticket) => {
                Command::perform(acknowledgment_elapsed(ticket), Message::CopyAckExpired)
            }
            Effect::Close => window::close(window::Id::MAIN),
        }
    }

    fn view(&self) -> Element<Message> {
        docs::view(&self.state)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        // needs exit_on_close_request = false, see main.rs
        event::listen_with(|event, _status| match event {
            Event::Window(_, window::Event::CloseRequested) => Some(Message::CloseRequested),
            _ => None,
        })
    }
}
