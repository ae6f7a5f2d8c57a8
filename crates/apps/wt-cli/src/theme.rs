use crossterm::style::Color;

/// Colors used by the time table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub border: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Vibrant cyan
            primary: Color::Rgb {
                r: 139,
                g: 233,
                b: 253,
            },
            border: Color::Rgb {
                r: 98,
                g: 114,
                b: 164,
            },
            error: Color::Rgb {
                r: 255,
                g: 85,
                b: 85,
            },
        }
    }
}
