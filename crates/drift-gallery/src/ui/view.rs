//! Gallery view

use iced::widget::{button, column, container, row, scrollable, text, toggler, Space};
use iced::{Alignment, Element, Length};

use drift_core::{Position, ThemePreference};
use drift_widgets::drawer::{self, DrawerStyle};
use drift_widgets::{muted_text, with_drawer};

use super::app::GalleryApp;
use super::message::Message;

/// Paragraphs behind the drawer, long enough to scroll
const FILLER: &str = "Scroll this page, then open a drawer: the page stops \
    reacting until the drawer closes again. Escape or a click outside the \
    panel dismisses it.";

pub fn view(app: &GalleryApp) -> Element<'_, Message> {
    let page = column![
        view_header(app),
        view_drawer_controls(app),
        view_body(),
        view_status(app),
    ]
    .spacing(16)
    .padding(20);

    let snapshot = app.controller.snapshot();
    let style = DrawerStyle::for_theme(app.store.resolved());
    let layer = drawer::view(
        snapshot,
        view_drawer_content(snapshot.position),
        Message::BackdropClicked,
        &style,
    );

    with_drawer(page.into(), layer, app.document.scroll_locked())
}

/// Title and theme selector
fn view_header(app: &GalleryApp) -> Element<'_, Message> {
    let title = text("Drift Gallery").size(24);

    let current = app.store.get();
    let mut selector = row![].spacing(6).align_y(Alignment::Center);
    for preference in ThemePreference::ALL {
        selector = selector.push(
            button(text(label(preference.name())))
                .on_press(Message::SetTheme(preference))
                .style(if preference == current {
                    button::primary
                } else {
                    button::secondary
                }),
        );
    }

    let toggle_btn = button(text("◐"))
        .on_press(Message::ToggleTheme)
        .style(button::secondary);
    let cycle_btn = button(text("Cycle"))
        .on_press(Message::CycleTheme)
        .style(button::secondary);

    row![
        title,
        Space::new().width(Length::Fill),
        selector,
        toggle_btn,
        cycle_btn
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// One button per side plus the unmount setting
fn view_drawer_controls(app: &GalleryApp) -> Element<'_, Message> {
    let mut sides = row![text("Open drawer:").size(14)]
        .spacing(8)
        .align_y(Alignment::Center);
    for position in Position::ALL {
        let active = app.drawer_open && app.position == position;
        sides = sides.push(
            button(text(label(position.name())))
                .on_press(Message::OpenDrawer(position))
                .style(if active {
                    button::primary
                } else {
                    button::secondary
                }),
        );
    }

    let remove_label = text("Unmount closed drawers").size(14);
    let remove_hint = text("Off keeps the panel rendered but inert after it closes")
        .size(12)
        .color(muted_text(app.store.resolved()));
    let remove_toggle =
        toggler(app.config.overlay.remove_when_closed).on_toggle(Message::SetRemoveWhenClosed);
    let remove_row = row![
        column![remove_label, remove_hint].spacing(4),
        Space::new().width(Length::Fill),
        remove_toggle,
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    column![sides, remove_row].spacing(12).into()
}

fn view_body<'a>() -> Element<'a, Message> {
    let paragraphs: Vec<Element<Message>> = (1..=40)
        .map(|i| text(format!("{}. {}", i, FILLER)).size(14).into())
        .collect();

    scrollable(column(paragraphs).spacing(10))
        .height(Length::Fill)
        .width(Length::Fill)
        .into()
}

/// Phase, aria and document state, straight from the snapshot
fn view_status(app: &GalleryApp) -> Element<'_, Message> {
    let snapshot = app.controller.snapshot();
    let line = format!(
        "phase {:?} | aria {:?}{} | scroll lock {} | portal {} | key listeners {}",
        snapshot.phase,
        snapshot.aria.state,
        if snapshot.aria.modal { " modal" } else { "" },
        if app.document.scroll_locked() { "on" } else { "off" },
        match snapshot.portal_node {
            Some(node) => format!("attached ({})", node.0),
            None => "detached".to_string(),
        },
        app.document.key_up_listener_count(),
    );

    let muted = muted_text(app.store.resolved());
    let mut status = row![text(line).size(12).color(muted)].spacing(20);
    if !app.status.is_empty() {
        status = status.push(Space::new().width(Length::Fill));
        status = status.push(text(&app.status).size(12).color(muted));
    }
    container(status).width(Length::Fill).into()
}

fn view_drawer_content<'a>(position: Position) -> Element<'a, Message> {
    let title = text(format!("{} drawer", label(position.name()))).size(20);
    let hint = text("Press Escape or click outside to dismiss").size(12);
    let close_btn = button(text("Close"))
        .on_press(Message::CloseDrawer)
        .style(button::secondary);

    column![title, hint, close_btn].spacing(12).into()
}

/// "left" -> "Left"
fn label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(label("left"), "Left");
        assert_eq!(label("system"), "System");
        assert_eq!(label(""), "");
    }
}
