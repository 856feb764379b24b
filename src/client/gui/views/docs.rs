use iced::widget::{Button, Column, Container, Scrollable, Text, TextInput};
use iced::{Color, Element, Font, Length};

use crate::client::gui::views::status::status_view;
use crate::client::gui::widgets::code_block;
use crate::client::models::app_state::DocsAppState;
use crate::client::models::messages::Message;

// Palette of the published docs page (Tailwind grays)
const BG_MAIN: Color = Color::from_rgb(0.067, 0.094, 0.153); // gray-900
const CARD_BG: Color = Color::from_rgb(0.122, 0.161, 0.216); // gray-800
const CARD_BORDER: Color = Color::from_rgb(0.216, 0.255, 0.318); // gray-700
const TEXT_PRIMARY: Color = Color::from_rgb(0.953, 0.957, 0.965); // gray-100
const TEXT_SECONDARY: Color = Color::from_rgb(0.612, 0.639, 0.686); // gray-400
const TEXT_BODY: Color = Color::from_rgb(0.82, 0.835, 0.859); // gray-300

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

const OVERVIEW: &str = "This API allows users to detect human emotions from a given text input. \
It is built using Flask, PyTorch, and the DistilBERT model.";

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: CARD_BORDER,
            radius: 12.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn section_title(title: &str) -> Text<'_> {
    Text::new(title).size(24).font(BOLD_FONT).style(TEXT_PRIMARY)
}

fn sub_heading(title: &str) -> Text<'_> {
    Text::new(title).size(15).font(BOLD_FONT).style(TEXT_PRIMARY)
}

fn card<'a>(title: &'a str, description: &'a str, body: Column<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(12)
            .push(Text::new(title).size(20).font(BOLD_FONT).style(TEXT_PRIMARY))
            .push(Text::new(description).size(14).style(TEXT_SECONDARY))
            .push(body),
    )
    .padding(24)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

fn endpoint_card(state: &DocsAppState) -> Element<'_, Message> {
    let body = Column::new()
        .spacing(8)
        .push(sub_heading("Request Headers:"))
        .push(code_block::view(&state.request_headers))
        .push(sub_heading("Request Body:"))
        .push(code_block::view(&state.request_body))
        .push(sub_heading("Response:"))
        .push(code_block::view(&state.example_response));

    card(
        "POST /predict",
        "Analyzes a given sentence and predicts the associated emotions with their probabilities.",
        body,
    )
}

fn try_it_card(state: &DocsAppState) -> Element<'_, Message> {
    let form = &state.form;
    let loading = form.is_loading();
    let submit_enabled = form.submit_enabled();

    let mut input = TextInput::new("Enter a sentence", form.sentence())
        .on_input(Message::SentenceChanged)
        .padding(12)
        .size(16)
        .width(Length::Fill);
    if submit_enabled {
        input = input.on_submit(Message::Submit);
    }

    let label = if loading { "Detecting..." } else { "Detect Emotions" };
    let mut button = Button::new(
        Container::new(Text::new(label).size(16).font(BOLD_FONT))
            .width(Length::Fill)
            .center_x(),
    )
    .width(Length::Fill)
    .padding([12, 16])
    .style(iced::theme::Button::Primary);
    if submit_enabled {
        button = button.on_press(Message::Submit);
    }

    let mut body = Column::new()
        .spacing(16)
        .push(input)
        .push(button)
        .push(status_view(form.state()));

    if form.result().is_some() {
        body = body
            .push(sub_heading("Results:"))
            .push(code_block::view(&state.result));
    }

    card("Emotion Detection", "Enter a sentence to detect emotions", body)
}

pub fn view(state: &DocsAppState) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(32)
        .padding([40, 32])
        .max_width(896)
        .push(
            Text::new("Emotion Detection API Documentation")
                .size(36)
                .font(BOLD_FONT)
                .style(TEXT_PRIMARY),
        )
        .push(
            Column::new()
                .spacing(16)
                .push(section_title("Overview"))
                .push(Text::new(OVERVIEW).size(16).style(TEXT_BODY)),
        )
        .push(
            Column::new()
                .spacing(16)
                .push(section_title("Base URL"))
                .push(code_block::view(&state.base_url)),
        )
        .push(
            Column::new()
                .spacing(16)
                .push(section_title("Prediction Endpoint"))
                .push(endpoint_card(state)),
        )
        .push(
            Column::new()
                .spacing(16)
                .push(section_title("Try it out"))
                .push(try_it_card(state)),
        );

    Container::new(Scrollable::new(
        Container::new(page).width(Length::Fill).center_x(),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
    .into()
}
