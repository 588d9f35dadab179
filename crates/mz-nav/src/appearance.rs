//! Display attributes carried for the render sink.  Never drawn here.

/// 8-bit RGB color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE:  Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const RED:    Color = Color::rgb(255, 0, 0);
    pub const PINK:   Color = Color::rgb(255, 100, 150);
    pub const TEAL:   Color = Color::rgb(100, 255, 255);
    pub const ORANGE: Color = Color::rgb(230, 190, 40);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// What a render sink needs besides the position: a circle of `radius` in
/// `color`, drawn only while `visible`.  `collide_radius` drives contact
/// checks and is usually smaller than the drawn radius.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Appearance {
    pub radius: f32,
    pub collide_radius: f32,
    pub color: Color,
    pub visible: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            radius:         10.0,
            collide_radius: 5.0,
            color:          Color::WHITE,
            visible:        true,
        }
    }
}
