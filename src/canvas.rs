//! A drawing surface that speaks [`Coordinate`]s.
//!
//! [`Canvas`] wraps a [`pdf_writer::Content`] stream. Every position it accepts is
//! a [`Coordinate`] in millimetres and is converted to points at the call boundary,
//! so drawing code never handles raw PDF user-space numbers.
//!
//! ```
//! use graph_paper::{colours, Canvas, Coordinate, Mm, Page, pagesize};
//!
//! let mut canvas = Canvas::new();
//! canvas.set_stroke_colour(colours::GREY);
//! canvas.set_line_width(Mm(0.3));
//! canvas.line(Coordinate::new(10.0, 10.0), Coordinate::new(200.0, 10.0));
//!
//! let mut page = Page::new(pagesize::A4, None);
//! page.add_content(canvas.finish());
//! ```

use crate::colour::Colour;
use crate::coordinate::Coordinate;
use crate::font::Font;
use crate::transform::Transform;
use crate::units::*;
use crate::PDFError;
use id_arena::Id;
use pdf_writer::{Content, Name, Str};

#[derive(Copy, Clone)]
struct ActiveFont<'f> {
    id: Id<Font>,
    font: &'f Font,
    size: Pt,
}

/// The parts of the PDF graphics state the canvas mirrors so it can answer
/// questions about them and restore them along with `Q`
#[derive(Copy, Clone)]
struct CanvasState<'f> {
    font: Option<ActiveFont<'f>>,
    line_width: Pt,
    transform: Transform,
}

impl Default for CanvasState<'_> {
    fn default() -> Self {
        CanvasState {
            font: None,
            // the PDF default line width
            line_width: Pt(1.0),
            transform: Transform::identity(),
        }
    }
}

pub struct Canvas<'f> {
    content: Content,
    state: CanvasState<'f>,
    saved: Vec<CanvasState<'f>>,
}

impl Default for Canvas<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f> Canvas<'f> {
    pub fn new() -> Canvas<'f> {
        Canvas {
            content: Content::new(),
            state: CanvasState::default(),
            saved: Vec::new(),
        }
    }

    /// Push the graphics state (line width, colours, font, transformation)
    pub fn save_state(&mut self) {
        self.content.save_state();
        self.saved.push(self.state);
    }

    /// Pop the graphics state pushed by the matching [Canvas::save_state].
    /// An unmatched restore would corrupt the content stream, so it is skipped.
    pub fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(state) => {
                self.content.restore_state();
                self.state = state;
            }
            None => log::warn!("ignoring restore_state without a matching save_state"),
        }
    }

    pub fn set_line_width<L: Into<Pt>>(&mut self, width: L) {
        let width: Pt = width.into();
        self.content.set_line_width(*width);
        self.state.line_width = width;
    }

    pub fn line_width(&self) -> Pt {
        self.state.line_width
    }

    pub fn set_stroke_colour(&mut self, colour: Colour) {
        colour.set_stroke(&mut self.content);
    }

    /// Text is painted with the fill colour
    pub fn set_fill_colour(&mut self, colour: Colour) {
        colour.set_fill(&mut self.content);
    }

    /// Select the font used by [Canvas::draw_string]. `id` must be the id
    /// `font` was given when it was added to the document.
    pub fn set_font(&mut self, id: Id<Font>, font: &'f Font, size: Pt) {
        self.state.font = Some(ActiveFont { id, font, size });
    }

    /// The transformation currently applied to drawing, relative to the page
    pub fn current_transform(&self) -> Transform {
        self.state.transform
    }

    fn concat(&mut self, transform: Transform) {
        transform.write_to_content(&mut self.content);
        self.state.transform = transform.then(self.state.transform);
    }

    /// Move the origin by `delta`
    pub fn translate(&mut self, delta: Coordinate) {
        let (x, y) = delta.to_points();
        self.concat(Transform::translate(x, y));
    }

    /// Rotate the coordinate system counter-clockwise about the current origin
    pub fn rotate(&mut self, degrees: f32) {
        self.concat(Transform::rotate_degrees(degrees));
    }

    /// Stroke a straight line from `from` to `to`
    pub fn line(&mut self, from: Coordinate, to: Coordinate) {
        let (x1, y1) = from.to_points();
        let (x2, y2) = to.to_points();
        self.content
            .move_to(*x1, *y1)
            .line_to(*x2, *y2)
            .stroke();
    }

    /// Stroke a polyline through `points`. With `closed`, the last point is
    /// joined back to the first. Fewer than two points draw nothing.
    pub fn lines(&mut self, points: &[Coordinate], closed: bool) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let (x, y) = first.to_points();
        self.content.move_to(*x, *y);
        for point in rest {
            let (x, y) = point.to_points();
            self.content.line_to(*x, *y);
        }
        if closed {
            self.content.close_path();
        }
        self.content.stroke();
    }

    /// Draw `text` with its baseline starting at `position`
    pub fn draw_string(&mut self, position: Coordinate, text: &str) -> Result<(), PDFError> {
        let active = self.state.font.ok_or(PDFError::NoFontSelected)?;
        let (x, y) = position.to_points();
        let name = format!("F{}", active.id.index());
        let glyphs = active.font.encode(text);

        self.content.begin_text();
        self.content.set_font(Name(name.as_bytes()), *active.size);
        self.content.next_line(*x, *y);
        self.content.show(Str(&glyphs));
        self.content.end_text();
        Ok(())
    }

    /// Finish drawing, returning the content stream for [`Page::add_content`](crate::Page::add_content).
    /// Any states still saved are restored first.
    pub fn finish(mut self) -> Vec<u8> {
        if !self.saved.is_empty() {
            log::debug!("closing {} unrestored graphics state(s)", self.saved.len());
        }
        while !self.saved.is_empty() {
            self.restore_state();
        }
        self.content.finish()
    }
}
