use ratatui::style::Color;

/// A colour theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub apple: Color,
    pub field_bg: Color,
    pub grid_dot: Color,
    pub border: Color,
    pub hud_text: Color,
    pub title: Color,
    pub muted: Color,
    pub highlight: Color,
}

/// Green snake on near-black.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::Rgb(0, 200, 0),
    snake_body: Color::Rgb(0, 150, 0),
    apple: Color::Rgb(255, 50, 50),
    field_bg: Color::Rgb(20, 20, 20),
    grid_dot: Color::Rgb(40, 40, 40),
    border: Color::Rgb(80, 80, 80),
    hud_text: Color::Rgb(220, 220, 220),
    title: Color::Rgb(100, 220, 100),
    muted: Color::DarkGray,
    highlight: Color::Rgb(110, 110, 110),
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    apple: Color::Yellow,
    field_bg: Color::Black,
    grid_dot: Color::Rgb(20, 40, 50),
    border: Color::Cyan,
    hud_text: Color::Cyan,
    title: Color::Cyan,
    muted: Color::DarkGray,
    highlight: Color::Blue,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    apple: Color::Yellow,
    field_bg: Color::Black,
    grid_dot: Color::Rgb(45, 20, 45),
    border: Color::Magenta,
    hud_text: Color::Magenta,
    title: Color::Magenta,
    muted: Color::DarkGray,
    highlight: Color::Rgb(90, 30, 90),
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Returns the theme at `index`, wrapping out-of-range values.
#[must_use]
pub fn theme_at(index: usize) -> &'static Theme {
    &THEMES[index % THEMES.len()]
}

#[cfg(test)]
mod tests {
    use super::{theme_at, THEMES};

    #[test]
    fn theme_lookup_wraps() {
        assert_eq!(theme_at(0).name, "Classic");
        assert_eq!(theme_at(THEMES.len() + 1).name, THEMES[1].name);
    }
}
