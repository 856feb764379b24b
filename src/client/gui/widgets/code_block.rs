// Code block with a copy button, used for every snippet on the docs page
use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::code_snippet::CodeSnippet;
use crate::client::models::messages::Message;

const CODE_BG: Color = Color::from_rgb(0.12, 0.16, 0.22); // gray-800
const CODE_TEXT: Color = Color::from_rgb(0.95, 0.96, 0.96); // gray-100
const LABEL_TEXT: Color = Color::from_rgb(0.61, 0.64, 0.69);
const COPIED_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");

fn code_block_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CODE_BG)),
        text_color: Some(CODE_TEXT),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.22, 0.25, 0.32),
            radius: 8.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

pub fn view(snippet: &CodeSnippet) -> Element<'_, Message> {
    let (icon, label, label_color) = if snippet.is_copied() {
        ("✅", "Copied", COPIED_COLOR)
    } else {
        ("📋", "Copy", LABEL_TEXT)
    };

    let copy_button = Button::new(
        Row::new()
            .spacing(4)
            .align_items(Alignment::Center)
            .push(Text::new(icon).font(EMOJI_FONT).size(13))
            .push(Text::new(label).size(13).style(label_color)),
    )
    .on_press(Message::Copy(snippet.id()))
    .padding([4, 8])
    .style(iced::theme::Button::Secondary);

    let header = Row::new()
        .align_items(Alignment::Center)
        .push(
            Text::new(snippet.language())
                .size(11)
                .style(LABEL_TEXT)
                .width(Length::Fill),
        )
        .push(copy_button);

    let code = Text::new(snippet.code())
        .font(Font::MONOSPACE)
        .size(14)
        .style(CODE_TEXT);

    Container::new(Column::new().spacing(8).push(header).push(code))
        .padding(16)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(code_block_appearance)))
        .into()
}
