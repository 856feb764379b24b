use iced::widget::{Container, Row, Space, Text};
use iced::{Element, Font, Length};

use crate::client::models::messages::Message;
use crate::client::models::prediction::RequestState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Loading,
    Error,
}

impl StatusLevel {
    pub fn emoji(&self) -> &'static str {
        match self {
            StatusLevel::Loading => "⏳",
            StatusLevel::Error => "❌",
        }
    }
    pub fn color(&self) -> iced::Color {
        match self {
            StatusLevel::Loading => iced::Color::from_rgb(0.98, 0.8, 0.08), // yellow-400
            StatusLevel::Error => iced::Color::from_rgb(0.97, 0.44, 0.44),  // red-400
        }
    }
}

/// The line shown under the form, if any. Success is rendered as a code block instead.
pub fn status_line(state: &RequestState) -> Option<(StatusLevel, &str)> {
    match state {
        RequestState::Loading => Some((StatusLevel::Loading, "Loading...")),
        RequestState::Failed(message) => Some((StatusLevel::Error, message.as_str())),
        RequestState::Idle | RequestState::Success(_) => None,
    }
}

pub fn status_view(state: &RequestState) -> Element<'_, Message> {
    if let Some((level, message)) = status_line(state) {
        Container::new(
            Row::new()
                .spacing(8)
                .push(Text::new(level.emoji()).font(Font::with_name("Segoe UI Emoji")).size(16))
                .push(Text::new(message).size(16).style(level.color())),
        )
        .padding([12, 0, 0, 0])
        .width(Length::Fill)
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::services::prediction_service::GENERIC_FAILURE_MESSAGE;

    #[test]
    fn lines_per_state() {
        assert_eq!(status_line(&RequestState::Idle), None);
        assert_eq!(
            status_line(&RequestState::Loading),
            Some((StatusLevel::Loading, "Loading..."))
        );
        let failed = RequestState::Failed(GENERIC_FAILURE_MESSAGE.to_string());
        assert_eq!(status_line(&failed), Some((StatusLevel::Error, GENERIC_FAILURE_MESSAGE)));
        assert_eq!(status_line(&RequestState::Success(serde_json::json!({}))), None);
    }
}
