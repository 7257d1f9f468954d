// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One screen: controls on top, the circular preview in the middle, export
//! settings and the status line below.

use super::{App, Message, Status};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::pointer::PointerSurface;
use iced::widget::{button, container, image, radio, slider, text, Canvas, Column, Row, Stack};
use iced::{Alignment, Element, Length};

/// Renders the editor screen.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let loaded = app.editor.is_loaded();
    let busy = app.loading || app.exporting;

    let toolbar = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(text("DP Framer").size(typography::TITLE_MD))
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(button(text("Open image")).on_press_maybe((!busy).then_some(Message::OpenFileDialog)))
        .push(button(text("Reset view")).on_press_maybe(loaded.then_some(Message::ResetView)));

    let column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .align_x(Alignment::Center)
        .push(toolbar)
        .push(view_preview(app))
        .push(view_zoom(app))
        .push(view_qualities(app))
        .push(
            button(text(format!("Download {}", app.resolution.file_name())))
                .on_press_maybe((loaded && !app.exporting).then_some(Message::ExportRequested)),
        )
        .push(view_status(app.status.as_ref()));

    container(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn view_preview(app: &App) -> Element<'_, Message> {
    let side = Length::Fixed(app.editor.canvas_size() as f32);

    let mut stack = Stack::new().width(side).height(side);
    if let Some(handle) = &app.preview {
        stack = stack.push(image(handle.clone()).width(side).height(side));
    }

    let pointer: Element<'_, _> = Canvas::new(PointerSurface {
        enabled: app.editor.is_loaded(),
        dragging: app.editor.is_dragging(),
    })
    .width(side)
    .height(side)
    .into();

    stack.push(pointer.map(Message::Pointer)).into()
}

fn view_zoom(app: &App) -> Element<'_, Message> {
    let range = app.editor.zoom_range();
    let value = app.editor.user_scale();

    let control = slider(range.min()..=range.max(), value, Message::ZoomChanged).step(range.step());

    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .width(Length::Fixed(app.editor.canvas_size() as f32))
        .push(text("Zoom").size(typography::BODY))
        .push(control)
        .push(text(format!("{value:.2}×")).size(typography::CAPTION))
        .into()
}

fn view_qualities(app: &App) -> Element<'_, Message> {
    let selected = Some(app.resolution.pixels());
    app.presets
        .iter()
        .fold(
            Row::new().spacing(spacing::MD).align_y(Alignment::Center),
            |row, preset| {
                row.push(radio(
                    format!("{} ({} px)", preset.label, preset.size),
                    preset.size,
                    selected,
                    Message::QualitySelected,
                ))
            },
        )
        .into()
}

fn view_status(status: Option<&Status>) -> Element<'_, Message> {
    match status {
        Some(Status::Info(message)) => text(message.as_str())
            .size(typography::BODY)
            .color(palette::GRAY_200)
            .into(),
        Some(Status::Error(message)) => text(message.as_str())
            .size(typography::BODY)
            .color(palette::ERROR_500)
            .into(),
        None => text("").size(typography::BODY).into(),
    }
}
