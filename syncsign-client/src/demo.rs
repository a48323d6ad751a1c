//! Built-in demo layouts used by the CLI.

use syncsign_core::{
    Block, Circle, Color, LayoutResult, Line, QrCode, Rectangle, SymbolSet, Symbolbox, Template,
    TextAlign, Textbox,
};

/// Boxed greeting with a QR code and a small face.
///
/// With `colour` set the greeting is drawn in red.
///
/// # Errors
///
/// Never fails for the built-in geometry; the result type mirrors the
/// widget constructors.
pub fn hello_world(colour: bool) -> LayoutResult<Template> {
    let mut greeting = Textbox::new(
        Block::new(16, 16, 192, 44),
        "roboto_slab",
        24,
        "Hello, World!",
    )?
    .with_align(TextAlign::Center);
    if colour {
        greeting.set_color(Color::Red);
    }

    Ok(Template::new()
        .with_widget(Rectangle::new(Block::new(8, 8, 208, 60))?.with_pen_width(2))
        .with_widget(greeting)
        .with_widget(QrCode::new(232, 72, "Hello, World!").with_scale(2)?)
        .with_widget(Line::new(72, 90, 96, 90))
        .with_widget(Circle::new(56, 96, 16).with_pen_width(2))
        .with_widget(Circle::new(112, 96, 16).with_pen_width(2)))
}

/// Second line of text for a partial update on top of [`hello_world`].
///
/// # Errors
///
/// As [`hello_world`].
pub fn hello_again() -> LayoutResult<Template> {
    Ok(Template::new().with_widget(
        Textbox::new(
            Block::new(16, 72, 192, 44),
            "roboto_slab",
            24,
            "Hello, again!",
        )?
        .with_align(TextAlign::Center),
    ))
}

/// One box from each icon set.
///
/// # Errors
///
/// As [`hello_world`].
pub fn symbols() -> LayoutResult<Template> {
    Ok(Template::new()
        .with_widget(Symbolbox::new(
            Block::new(16, 24, 120, 100),
            SymbolSet::Weather,
            ["day_sleet_storm", "day_sunny"],
        )?)
        .with_widget(Symbolbox::new(
            Block::new(176, 24, 120, 100),
            SymbolSet::Brands,
            ["github", "linux"],
        )?)
        .with_widget(Symbolbox::new(
            Block::new(176, 72, 72, 64),
            SymbolSet::Solid,
            ["wifi", "venus_double"],
        )?))
}
