use ratatui::style::Color;

/// Theme color palette defining all colors used on the timer screen.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Arc and button colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub alert: ColorSpec,
    pub track: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Disabled button gradient
    pub disabled_start: ColorSpec,
    pub disabled_end: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// An RGB color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Linear blend toward `other`; `t` is clamped to `[0, 1]`.
    ///
    pub fn lerp(&self, other: &ColorSpec, t: f64) -> ColorSpec {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        rgb(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    /// Dark charcoal with indigo arcs and a red alert.
    ///
    pub fn midnight() -> Self {
        Theme {
            name: "midnight".to_string(),
            primary: rgb(77, 95, 222),   // Indigo
            secondary: rgb(58, 123, 213), // Blue
            alert: rgb(238, 70, 65),      // Red
            track: rgb(211, 211, 211),    // Light grey
            text: rgb(255, 255, 255),
            text_muted: rgb(150, 150, 150),
            background: rgb(32, 32, 32),
            surface: rgb(47, 49, 51),
            disabled_start: rgb(130, 154, 191),
            disabled_end: rgb(174, 187, 207),
            border_active: rgb(77, 95, 222),
            border_normal: rgb(90, 90, 90),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(125, 207, 255),  // Blue
            secondary: rgb(187, 154, 247), // Purple
            alert: rgb(247, 118, 142),     // Red
            track: rgb(86, 95, 137),       // Comment
            text: rgb(192, 202, 245),
            text_muted: rgb(117, 121, 148),
            background: rgb(26, 27, 38),
            surface: rgb(36, 40, 59),
            disabled_start: rgb(65, 72, 104),
            disabled_end: rgb(86, 95, 137),
            border_active: rgb(125, 207, 255),
            border_normal: rgb(65, 72, 104),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: rgb(189, 147, 249),  // Purple
            secondary: rgb(255, 121, 198), // Pink
            alert: rgb(255, 85, 85),       // Red
            track: rgb(98, 114, 164),      // Comment
            text: rgb(248, 248, 242),
            text_muted: rgb(98, 114, 164),
            background: rgb(40, 42, 54),
            surface: rgb(68, 71, 90),
            disabled_start: rgb(68, 71, 90),
            disabled_end: rgb(98, 114, 164),
            border_active: rgb(189, 147, 249),
            border_normal: rgb(68, 71, 90),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(40, 105, 131),   // Pine
            secondary: rgb(86, 148, 159),  // Foam
            alert: rgb(180, 99, 122),      // Love
            track: rgb(152, 147, 165),     // Muted
            text: rgb(87, 82, 121),
            text_muted: rgb(152, 147, 165),
            background: rgb(250, 244, 237),
            surface: rgb(242, 233, 222),
            disabled_start: rgb(206, 202, 205),
            disabled_end: rgb(223, 218, 217),
            border_active: rgb(40, 105, 131),
            border_normal: rgb(206, 202, 205),
        }
    }

    /// Return every built-in theme in cycling order.
    ///
    pub fn all() -> Vec<Theme> {
        vec![
            Theme::midnight(),
            Theme::tokyo_night(),
            Theme::dracula(),
            Theme::rose_pine_dawn(),
        ]
    }

    /// Return the names of the built-in themes.
    ///
    pub fn names() -> Vec<String> {
        Theme::all().into_iter().map(|theme| theme.name).collect()
    }

    /// Get a theme by name.
    ///
    pub fn by_name(name: &str) -> Option<Self> {
        Theme::all().into_iter().find(|theme| theme.name == name)
    }

    /// Return the theme following `name`, wrapping around. Unknown names
    /// yield the first theme.
    ///
    pub fn next_after(name: &str) -> Self {
        let themes = Theme::all();
        let next = themes
            .iter()
            .position(|theme| theme.name == name)
            .map_or(0, |index| (index + 1) % themes.len());
        themes[next].clone()
    }
}
