//! Side drawer rendering
//!
//! Turns an [`OverlaySnapshot`] into iced widgets. The snapshot decides
//! everything (whether anything is drawn, how far the panel has slid in,
//! whether it may take input); this module only draws it.
//!
//! ```ignore
//! let layer = drawer::view(
//!     controller.snapshot(),
//!     settings_panel(),
//!     Message::CloseDrawer,
//!     &DrawerStyle::for_theme(store.resolved()),
//! );
//! with_drawer(page, layer, document.scroll_locked())
//! ```

mod style;

pub use style::DrawerStyle;

use drift_core::{OverlaySnapshot, Position};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, opaque, Space, Stack};
use iced::{Border, Color, Element, Length};

/// Build the drawer layer for a snapshot
///
/// Returns `None` when the snapshot says nothing is rendered. While the
/// snapshot is inert the backdrop lets clicks through and the panel is
/// covered by an input shield.
pub fn view<'a, Message>(
    snapshot: &OverlaySnapshot,
    content: Element<'a, Message>,
    on_close: Message,
    style: &DrawerStyle,
) -> Option<Element<'a, Message>>
where
    Message: Clone + 'a,
{
    if !snapshot.rendered {
        return None;
    }

    let shown = ease_out_cubic(snapshot.visibility);
    let interactive = !snapshot.inert;

    let backdrop = build_backdrop(shown * style.backdrop_alpha, interactive.then_some(on_close));
    let panel = build_panel(snapshot.position, shown, content, style, interactive);

    let (align_x, align_y) = edge_alignment(snapshot.position);
    let placed = container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y);

    Some(Stack::with_children(vec![backdrop, placed.into()]).into())
}

/// Stack a drawer layer over the page
///
/// While `scroll_locked`, an opaque shield sits between the page and the
/// drawer so the page neither scrolls nor reacts to the pointer.
pub fn with_drawer<'a, Message: 'a>(
    base: Element<'a, Message>,
    layer: Option<Element<'a, Message>>,
    scroll_locked: bool,
) -> Element<'a, Message> {
    let mut children = vec![base];
    if scroll_locked {
        children.push(shield());
    }
    if let Some(layer) = layer {
        children.push(layer);
    }
    if children.len() == 1 {
        return children.remove(0);
    }
    Stack::with_children(children).into()
}

fn build_backdrop<'a, Message: Clone + 'a>(
    alpha: f32,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let tint = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, alpha).into()),
            ..Default::default()
        });

    let area = mouse_area(tint);
    match on_press {
        Some(message) => area.on_press(message).into(),
        // No handler: clicks fall through to the page
        None => area.into(),
    }
}

fn build_panel<'a, Message: 'a>(
    position: Position,
    shown: f32,
    content: Element<'a, Message>,
    style: &DrawerStyle,
    interactive: bool,
) -> Element<'a, Message> {
    let extent = Length::Fixed((style.size * shown).max(0.0));
    let (width, height) = if position.is_horizontal() {
        (extent, Length::Fill)
    } else {
        (Length::Fill, extent)
    };

    let background = style.background;
    let border = style.border;
    let panel = container(content)
        .padding(style.padding)
        .width(width)
        .height(height)
        .clip(true)
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            border: Border {
                color: border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        });

    if interactive {
        opaque(panel).into()
    } else {
        // Drawn but unreachable: cover it so nothing inside takes input
        Stack::with_children(vec![panel.into(), shield()]).into()
    }
}

fn shield<'a, Message: 'a>() -> Element<'a, Message> {
    opaque(Space::new().width(Length::Fill).height(Length::Fill))
}

/// Container alignment that pins the panel to its edge
fn edge_alignment(position: Position) -> (Horizontal, Vertical) {
    match position {
        Position::Left => (Horizontal::Left, Vertical::Top),
        Position::Right => (Horizontal::Right, Vertical::Top),
        Position::Top => (Horizontal::Left, Vertical::Top),
        Position::Bottom => (Horizontal::Left, Vertical::Bottom),
    }
}

/// Deceleration curve for the slide, clamps input to 0..=1
fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
