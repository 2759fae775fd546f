use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;
use crate::core::orchestrators::SearchStatus;

const DISABLED_BACKGROUND: Color = Color::from_rgb(0.3, 0.3, 0.3);
const DISABLED_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);
const DISABLED_BORDER: Color = Color::from_rgb(0.4, 0.4, 0.4);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.07, 0.09),
                text: Color::from_rgb(0.93, 0.93, 0.95),
                primary: Color::from_rgb(0.54, 0.71, 0.97),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(1.0, 1.0, 1.0),
                text: Color::from_rgb(0.13, 0.13, 0.14),
                primary: Color::from_rgb(0.1, 0.05, 0.67),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn filled_button_style(
    status: button::Status,
    active: Color,
    hovered: Color,
    pressed: Color,
) -> button::Style {
    let (background, text_color, border_color, snap) = match status {
        button::Status::Active => (active, Color::WHITE, active, false),
        button::Status::Hovered => (hovered, Color::WHITE, hovered, false),
        button::Status::Pressed => (pressed, Color::WHITE, pressed, true),
        button::Status::Disabled => (DISABLED_BACKGROUND, DISABLED_TEXT, DISABLED_BORDER, false),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(
        status,
        Color::from_rgb(0.259, 0.522, 0.957),
        Color::from_rgb(0.353, 0.600, 0.976),
        Color::from_rgb(0.196, 0.420, 0.808),
    )
}

pub fn export_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(
        status,
        Color::from_rgb(0.098, 0.529, 0.329),
        Color::from_rgb(0.122, 0.655, 0.408),
        Color::from_rgb(0.078, 0.420, 0.263),
    )
}

pub fn link_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.text,
        _ => palette.primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

pub fn status_text_color(theme: &Theme, status: &SearchStatus) -> Color {
    let palette = theme.palette();
    match status {
        SearchStatus::Failed(_) => palette.danger,
        SearchStatus::Completed(_) => palette.success,
        SearchStatus::Idle | SearchStatus::Searching => palette.text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::button;
    use iced::{Background, Color, Theme};

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.07, 0.07, 0.09));
        assert_eq!(palette.text, Color::from_rgb(0.93, 0.93, 0.95));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(1.0, 1.0, 1.0));
        assert_eq!(palette.primary, Color::from_rgb(0.1, 0.05, 0.67));
    }

    #[test]
    fn test_primary_button_style_active_is_blue() {
        let style = primary_button_style(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.259, 0.522, 0.957));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_export_button_style_pressed_snaps() {
        let style = export_button_style(&Theme::Dark, button::Status::Pressed);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.078, 0.420, 0.263));
        } else {
            panic!("Expected background color");
        }

        assert!(style.snap);
    }

    #[test]
    fn test_disabled_buttons_share_gray_style() {
        let primary = primary_button_style(&Theme::Dark, button::Status::Disabled);
        let export = export_button_style(&Theme::Dark, button::Status::Disabled);

        assert_eq!(primary.background, export.background);
        assert_eq!(primary.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_link_button_style_has_no_background() {
        let theme = get_theme(&ThemeMode::Dark);
        let style = link_button_style(&theme, button::Status::Active);

        assert!(style.background.is_none());
        assert_eq!(style.text_color, theme.palette().primary);
    }

    #[test]
    fn test_status_text_color_marks_failures_as_danger() {
        let theme = get_theme(&ThemeMode::Light);

        let color = status_text_color(&theme, &SearchStatus::Failed("boom".to_string()));

        assert_eq!(color, theme.palette().danger);
    }
}
