use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(20, 22, 33);
    pub const BG_SURFACE: Color = Color::Rgb(29, 32, 47);
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 172, 192);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 112, 134);
    pub const BORDER_DIM: Color = Color::Rgb(60, 66, 88);
    pub const ACCENT_BLUE: Color = Color::Rgb(37, 99, 235);
    pub const ACCENT_PURPLE: Color = Color::Rgb(147, 51, 234);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(175, 140, 220);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_LAVENDER)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn card_bg() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BORDER_DIM)
    }

    /// Blend `color` toward the page background; `opacity` 0 is invisible.
    pub fn fade(color: Color, opacity: f32) -> Color {
        mix(Self::BG_DARK, color, opacity)
    }

    /// Fade the foreground of `style`, leaving modifiers alone.
    pub fn faded(style: Style, opacity: f32) -> Style {
        match style.fg {
            Some(fg) => style.fg(Self::fade(fg, opacity)),
            None => style.fg(Self::fade(Self::TEXT_PRIMARY, opacity)),
        }
    }

    /// Blue-to-purple banner gradient at position `t` in `0.0..=1.0`.
    pub fn gradient(t: f32) -> Color {
        mix(Self::ACCENT_BLUE, Self::ACCENT_PURPLE, t)
    }
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        // Named colours cannot be blended; snap at the midpoint.
        _ if t < 0.5 => from,
        _ => to,
    }
}
