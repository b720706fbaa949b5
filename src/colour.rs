use pdf_writer::Content;

/// A colour, expressed in RGB, CMYK or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    pub(crate) fn set_stroke(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_stroke_gray(g),
        };
    }

    pub(crate) fn set_fill(self, content: &mut Content) {
        match self {
            Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
            Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
            Colour::Grey { g } => content.set_fill_gray(g),
        };
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    /// The mid grey used for printed rulings, RGB (128, 128, 128)
    pub const GREY: Colour = Colour::RGB {
        r: 128.0 / 255.0,
        g: 128.0 / 255.0,
        b: 128.0 / 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke_ops(colour: Colour) -> String {
        let mut content = Content::new();
        colour.set_stroke(&mut content);
        String::from_utf8(content.finish()).unwrap().trim().to_string()
    }

    #[test]
    fn each_colour_space_has_its_own_operator() {
        assert_eq!(stroke_ops(colours::BLACK), "0 G");
        assert!(stroke_ops(Colour::new_rgb(1.0, 0.0, 0.0)).ends_with("RG"));
        assert!(stroke_ops(Colour::new_cmyk(1.0, 0.0, 0.0, 0.0)).ends_with("K"));
    }

    #[test]
    fn byte_colours_scale_to_unit_range() {
        assert_eq!(Colour::new_rgb_bytes(128, 128, 128), colours::GREY);
        assert_eq!(Colour::new_rgb_bytes(255, 0, 0), Colour::new_rgb(1.0, 0.0, 0.0));
    }
}
