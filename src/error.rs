use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font collections can't be embedded, found {0} faces; extract a single .ttf face")]
    /// The font data is a collection (.ttc) rather than a single face
    FontCollection(u32),

    #[error("text was drawn before a font was selected")]
    /// [Canvas::draw_string](crate::Canvas::draw_string) was called without a font
    NoFontSelected,

    #[error("PDF object reference for {0} was never generated")]
    /// An object was written before the object it refers to had an id
    UnresolvedReference(String),

    #[error(transparent)]
    /// The grid does not fit on the page
    Geometry(#[from] GeometryError),
}

/// Reasons a grid specification can't be laid out
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("a {margin}mm margin leaves no room on a {width}x{height}mm page")]
    MarginTooLarge { margin: f32, width: f32, height: f32 },

    #[error("major spacing {major}mm is not a whole number of {minor}mm minor intervals")]
    MajorNotMultipleOfMinor { major: f32, minor: f32 },

    #[error("the {axis} span of {span}mm is not a whole number of {minor}mm minor intervals")]
    SpanNotMultipleOfMinor {
        axis: &'static str,
        span: f32,
        minor: f32,
    },
}
