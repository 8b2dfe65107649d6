//! Built-in placeholder asset catalog.
//!
//! Temporary stand-ins for real design assets: a flat background, one
//! contrasting shape, the app label centered on top. Replace the generated
//! PNGs with real artwork before release.

pub type Rgb = [u8; 3];

/// App accent color #2563EB.
pub const BLUE: Rgb = [37, 99, 235];
pub const WHITE: Rgb = [255, 255, 255];

/// Canvas fill behind the shape. `Transparent` selects an alpha-capable
/// output format; `Solid` outputs stay opaque RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Solid(Rgb),
    Transparent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    None,
}

/// One output image: canvas, optional inset shape, centered label.
/// Consumed once by the renderer; no state survives the render.
#[derive(Clone, Debug)]
pub struct IconSpec {
    pub width: u32,
    pub height: u32,
    pub background: Background,
    pub shape: ShapeKind,
    pub shape_fill: Rgb,
    /// Horizontal inset of the shape from the left/right canvas edges.
    pub margin_x: u32,
    /// Vertical inset from the top/bottom edges.
    pub margin_y: u32,
    pub text: String,
    pub text_color: Rgb,
    pub font_px: u32,
    /// File name within the chosen output directory.
    pub file_name: &'static str,
}

/// The three placeholder assets, in generation order: app icon, splash
/// screen, notification icon. Sizes and colors match the shipped mobile
/// app config.
pub fn placeholder_catalog() -> Vec<IconSpec> {
    vec![
        IconSpec {
            width: 1024,
            height: 1024,
            background: Background::Solid(BLUE),
            shape: ShapeKind::Circle,
            shape_fill: WHITE,
            margin_x: 200,
            margin_y: 200,
            text: "P2M".into(),
            text_color: BLUE,
            font_px: 200,
            file_name: "icon.png",
        },
        IconSpec {
            width: 1284,
            height: 2778,
            background: Background::Solid(BLUE),
            shape: ShapeKind::Rectangle,
            shape_fill: WHITE,
            margin_x: 200,
            margin_y: 800,
            text: "P2M".into(),
            text_color: BLUE,
            font_px: 150,
            file_name: "splash.png",
        },
        // Notification icons should be simple; a plain disc with the label.
        IconSpec {
            width: 96,
            height: 96,
            background: Background::Transparent,
            shape: ShapeKind::Circle,
            shape_fill: WHITE,
            margin_x: 10,
            margin_y: 10,
            text: "P2M".into(),
            text_color: BLUE,
            font_px: 24,
            file_name: "notification-icon.png",
        },
    ]
}
