//! Graph-paper geometry and drawing.
//!
//! The grid is the page inset by the margin on every side. Its outline is the
//! frame; inside it, one line is ruled every minor interval, and every major
//! interval the line is drawn bold and labelled with its distance in millimetres.
//!
//! ```
//! use graph_paper::{GridGeometry, GridSpec};
//!
//! let geometry = GridGeometry::new(&GridSpec::default()).unwrap();
//! assert_eq!(geometry.bottom_left.x, 10.0);
//! assert_eq!(geometry.top_right.x, 200.0);
//! assert_eq!(geometry.columns(), 190);
//! ```

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::config;
use crate::coordinate::Coordinate;
use crate::document::Document;
use crate::error::GeometryError;
use crate::font::Font;
use crate::info::Info;
use crate::margins::Margins;
use crate::page::Page;
use crate::pagesize::PageSize;
use crate::units::*;
use crate::PDFError;

/// Vertical labels sit just right of their line, clear of the stroke
const VERTICAL_LABEL_NUDGE: f32 = 0.2;
/// Gap between the bottom of the frame and the end of a vertical label
const VERTICAL_LABEL_GAP: f32 = 1.0;
/// Horizontal labels start this far right of the frame
const HORIZONTAL_LABEL_GAP: f32 = 3.0;
/// Horizontal labels start this far below their line
const HORIZONTAL_LABEL_DROP: f32 = 0.8;
/// Labels read bottom to top
const LABEL_ROTATION: f32 = 90.0;

/// Everything that determines what the sheet looks like
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub paper: PageSize,
    pub margin: Mm,
    pub minor: Mm,
    pub major: Mm,
    pub bold_line: Mm,
    pub regular_line: Mm,
    pub line_colour: Colour,
    pub label_size: Pt,
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec {
            paper: config::PAPER,
            margin: config::MARGIN,
            minor: config::MINOR_SPACING,
            major: config::MAJOR_SPACING,
            bold_line: config::BOLD_LINE,
            regular_line: config::REGULAR_LINE,
            line_colour: config::LINE_COLOUR,
            label_size: config::LABEL_SIZE,
        }
    }
}

impl GridSpec {
    pub fn stroke_width(&self, weight: LineWeight) -> Mm {
        match weight {
            LineWeight::Major => self.bold_line,
            LineWeight::Minor => self.regular_line,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineWeight {
    /// Every major interval: bold and labelled
    Major,
    Minor,
}

/// Text drawn rotated a quarter turn, starting at `anchor`
#[derive(Debug, Clone, PartialEq)]
pub struct GridLabel {
    pub text: String,
    pub anchor: Coordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub start: Coordinate,
    pub end: Coordinate,
    pub weight: LineWeight,
    pub label: Option<GridLabel>,
}

/// The number of whole `unit`s in `value`, if `value` is (nearly) an exact multiple
fn whole_multiple(value: f32, unit: f32) -> Option<usize> {
    let count = (value / unit).round();
    let tolerance = 1e-4 * value.abs().max(1.0);
    (count >= 1.0 && (count * unit - value).abs() <= tolerance).then_some(count as usize)
}

fn ensure_positive(name: &'static str, value: Mm) -> Result<(), GeometryError> {
    if *value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NotPositive {
            name,
            value: *value,
        })
    }
}

/// Whole millimetres print without a fractional part
fn label_text(value: f32) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-4 {
        format!("{}", rounded as i64)
    } else {
        format!("{value}")
    }
}

/// Where everything on the sheet goes, in millimetres from the bottom-left of the page
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub bottom_left: Coordinate,
    pub bottom_right: Coordinate,
    pub top_right: Coordinate,
    pub top_left: Coordinate,
    minor: f32,
    major_every: usize,
    columns: usize,
    rows: usize,
}

impl GridGeometry {
    pub fn new(spec: &GridSpec) -> Result<GridGeometry, GeometryError> {
        ensure_positive("paper width", spec.paper.0)?;
        ensure_positive("paper height", spec.paper.1)?;
        ensure_positive("margin", spec.margin)?;
        ensure_positive("minor spacing", spec.minor)?;
        ensure_positive("major spacing", spec.major)?;
        ensure_positive("bold line width", spec.bold_line)?;
        ensure_positive("regular line width", spec.regular_line)?;

        let page_top_right = Coordinate::from(spec.paper);
        let inset = Coordinate::new(*spec.margin, *spec.margin);
        let bottom_left = Coordinate::ORIGIN + inset;
        let top_right = page_top_right - inset;
        let span = top_right - bottom_left;
        if span.x <= 0.0 || span.y <= 0.0 {
            return Err(GeometryError::MarginTooLarge {
                margin: *spec.margin,
                width: page_top_right.x,
                height: page_top_right.y,
            });
        }

        let minor = *spec.minor;
        let major_every =
            whole_multiple(*spec.major, minor).ok_or(GeometryError::MajorNotMultipleOfMinor {
                major: *spec.major,
                minor,
            })?;
        let columns = whole_multiple(span.x, minor).ok_or(GeometryError::SpanNotMultipleOfMinor {
            axis: "horizontal",
            span: span.x,
            minor,
        })?;
        let rows = whole_multiple(span.y, minor).ok_or(GeometryError::SpanNotMultipleOfMinor {
            axis: "vertical",
            span: span.y,
            minor,
        })?;

        Ok(GridGeometry {
            bottom_left,
            bottom_right: bottom_left + Coordinate::new(span.x, 0.0),
            top_right,
            top_left: bottom_left + Coordinate::new(0.0, span.y),
            minor,
            major_every,
            columns,
            rows,
        })
    }

    /// The corners of the frame, anticlockwise from the bottom-left
    pub fn frame(&self) -> [Coordinate; 4] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_right,
            self.top_left,
        ]
    }

    /// Width and height of the grid
    pub fn span(&self) -> Coordinate {
        self.top_right - self.bottom_left
    }

    /// Minor intervals across the grid
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Minor intervals up the grid
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn weight(&self, step: usize) -> LineWeight {
        if step % self.major_every == 0 {
            LineWeight::Major
        } else {
            LineWeight::Minor
        }
    }

    /// Interior vertical lines, left to right. Labels count down from the right edge.
    pub fn vertical_lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        let span = self.span();
        (1..self.columns).map(move |step| {
            let offset = step as f32 * self.minor;
            let x = self.bottom_left.x + offset;
            let weight = self.weight(step);
            let label = (weight == LineWeight::Major).then(|| {
                let text = label_text(span.x - offset);
                let anchor = Coordinate::new(
                    x + VERTICAL_LABEL_NUDGE,
                    self.bottom_left.y - VERTICAL_LABEL_GAP - text.chars().count() as f32,
                );
                GridLabel { text, anchor }
            });
            GridLine {
                start: Coordinate::new(x, self.bottom_left.y),
                end: Coordinate::new(x, self.top_right.y),
                weight,
                label,
            }
        })
    }

    /// Interior horizontal lines, bottom to top. Labels count up from the bottom edge.
    pub fn horizontal_lines(&self) -> impl Iterator<Item = GridLine> + '_ {
        (1..self.rows).map(move |step| {
            let offset = step as f32 * self.minor;
            let y = self.bottom_left.y + offset;
            let weight = self.weight(step);
            let label = (weight == LineWeight::Major).then(|| GridLabel {
                text: label_text(offset),
                anchor: Coordinate::new(
                    self.bottom_right.x + HORIZONTAL_LABEL_GAP,
                    y - HORIZONTAL_LABEL_DROP,
                ),
            });
            GridLine {
                start: Coordinate::new(self.bottom_left.x, y),
                end: Coordinate::new(self.top_right.x, y),
                weight,
                label,
            }
        })
    }
}

/// A validated [`GridSpec`] ready to be drawn
#[derive(Debug, Clone)]
pub struct GraphPaper {
    spec: GridSpec,
    geometry: GridGeometry,
}

impl GraphPaper {
    pub fn new(spec: GridSpec) -> Result<GraphPaper, GeometryError> {
        let geometry = GridGeometry::new(&spec)?;
        log::debug!(
            "grid of {}x{} minor intervals, frame {:?} to {:?}",
            geometry.columns(),
            geometry.rows(),
            geometry.bottom_left,
            geometry.top_right
        );
        Ok(GraphPaper { spec, geometry })
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Draw the frame, then the vertical lines, then the horizontal lines.
    /// Labels need a font to have been selected on the canvas.
    pub fn draw(&self, canvas: &mut Canvas<'_>) -> Result<(), PDFError> {
        canvas.set_stroke_colour(self.spec.line_colour);
        canvas.set_line_width(self.spec.bold_line);
        canvas.lines(&self.geometry.frame(), true);

        for line in self
            .geometry
            .vertical_lines()
            .chain(self.geometry.horizontal_lines())
        {
            self.draw_line(canvas, &line)?;
        }
        Ok(())
    }

    fn draw_line(&self, canvas: &mut Canvas<'_>, line: &GridLine) -> Result<(), PDFError> {
        canvas.set_line_width(self.spec.stroke_width(line.weight));
        if let Some(label) = &line.label {
            canvas.save_state();
            canvas.translate(label.anchor);
            canvas.rotate(LABEL_ROTATION);
            let drawn = canvas.draw_string(Coordinate::ORIGIN, &label.text);
            canvas.restore_state();
            drawn?;
        }
        canvas.line(line.start, line.end);
        Ok(())
    }

    /// A blank page the size of the paper, with the grid as its content box
    pub fn page(&self) -> Page {
        Page::new(self.spec.paper, Some(Margins::all(self.spec.margin)))
    }

    /// Lay the grid out on a single page of a new document, labelled in `font`
    pub fn into_document(self, font: Font) -> Result<Document, PDFError> {
        let mut doc = Document::default();
        let mut info = Info::new();
        info.title(config::TITLE)
            .subject(format!(
                "{}mm grid with {}mm major divisions",
                self.spec.minor, self.spec.major
            ))
            .keywords("graph paper, grid");
        doc.set_info(info);

        let font_id = doc.add_font(font);
        let mut page = self.page();
        let content = {
            let mut canvas = Canvas::new();
            canvas.set_font(font_id, &doc.fonts[font_id], self.spec.label_size);
            self.draw(&mut canvas)?;
            canvas.finish()
        };
        page.add_content(content);
        doc.add_page(page);

        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;

    fn a4() -> GridGeometry {
        GridGeometry::new(&GridSpec::default()).unwrap()
    }

    #[test]
    fn grid_spans_the_page_inside_the_margin() {
        let geometry = a4();
        assert_eq!(geometry.bottom_left, Coordinate::new(10.0, 10.0));
        assert_eq!(geometry.bottom_right, Coordinate::new(200.0, 10.0));
        assert_eq!(geometry.top_right, Coordinate::new(200.0, 287.0));
        assert_eq!(geometry.top_left, Coordinate::new(10.0, 287.0));
        assert_eq!(geometry.span(), Coordinate::new(190.0, 277.0));
    }

    #[test]
    fn minor_spacing_of_one_gives_190_columns() {
        let geometry = a4();
        assert_eq!(geometry.columns(), 190);
        assert_eq!(geometry.rows(), 277);
        // the frame draws the two outer edges
        assert_eq!(geometry.vertical_lines().count(), 189);
        assert_eq!(geometry.horizontal_lines().count(), 276);
    }

    #[test]
    fn lines_stay_strictly_inside_the_frame() {
        let geometry = a4();
        for line in geometry.vertical_lines() {
            assert!(line.start.x > 10.0 && line.start.x < 200.0);
            assert_eq!(line.start.y, 10.0);
            assert_eq!(line.end.y, 287.0);
        }
        let first = geometry.vertical_lines().next().unwrap();
        assert_eq!(first.start.x, 11.0);
    }

    #[test]
    fn every_tenth_line_is_major_and_wider() {
        let spec = GridSpec::default();
        let geometry = GridGeometry::new(&spec).unwrap();
        let lines: Vec<GridLine> = geometry.vertical_lines().collect();
        for (i, line) in lines.iter().enumerate() {
            let step = i + 1;
            let expected = if step % 10 == 0 {
                LineWeight::Major
            } else {
                LineWeight::Minor
            };
            assert_eq!(line.weight, expected, "line at x={}", line.start.x);
            assert_eq!(line.label.is_some(), expected == LineWeight::Major);
        }
        assert!(spec.stroke_width(LineWeight::Major) > spec.stroke_width(LineWeight::Minor));
        assert_eq!(
            lines.iter().filter(|l| l.weight == LineWeight::Major).count(),
            18
        );
    }

    #[test]
    fn vertical_labels_count_down_from_the_right() {
        let geometry = a4();
        let labels: Vec<GridLabel> = geometry.vertical_lines().filter_map(|l| l.label).collect();
        assert_eq!(labels.first().unwrap().text, "180");
        assert_eq!(labels.last().unwrap().text, "10");

        let first = labels.first().unwrap();
        assert!((first.anchor.x - 20.2).abs() < 1e-4);
        // three digits hang three millimetres plus the gap below the frame
        assert!((first.anchor.y - 6.0).abs() < 1e-4);
        assert!((labels.last().unwrap().anchor.y - 7.0).abs() < 1e-4);
    }

    #[test]
    fn horizontal_labels_count_up_from_the_bottom() {
        let geometry = a4();
        let labels: Vec<GridLabel> = geometry
            .horizontal_lines()
            .filter_map(|l| l.label)
            .collect();
        assert_eq!(labels.len(), 27);
        assert_eq!(labels[0].text, "10");
        assert_eq!(labels[26].text, "270");
        assert!((labels[0].anchor.x - 203.0).abs() < 1e-4);
        assert!((labels[0].anchor.y - 19.2).abs() < 1e-4);
    }

    #[test]
    fn fractional_labels_keep_their_fraction() {
        assert_eq!(label_text(20.0), "20");
        assert_eq!(label_text(2.5), "2.5");
    }

    #[test]
    fn margin_larger_than_page_is_rejected() {
        let spec = GridSpec {
            margin: Mm(105.0),
            ..GridSpec::default()
        };
        assert!(matches!(
            GridGeometry::new(&spec),
            Err(GeometryError::MarginTooLarge { .. })
        ));
    }

    #[test]
    fn spacing_must_divide_evenly() {
        let spec = GridSpec {
            major: Mm(2.5),
            minor: Mm(2.0),
            ..GridSpec::default()
        };
        assert!(matches!(
            GridGeometry::new(&spec),
            Err(GeometryError::MajorNotMultipleOfMinor { .. })
        ));

        let spec = GridSpec {
            paper: (Mm(210.5), Mm(297.0)),
            ..GridSpec::default()
        };
        assert!(matches!(
            GridGeometry::new(&spec),
            Err(GeometryError::SpanNotMultipleOfMinor { axis: "horizontal", .. })
        ));
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let spec = GridSpec {
            minor: Mm(0.0),
            ..GridSpec::default()
        };
        assert_eq!(
            GridGeometry::new(&spec),
            Err(GeometryError::NotPositive {
                name: "minor spacing",
                value: 0.0
            })
        );
    }

    #[test]
    fn half_millimetre_grid() {
        let spec = GridSpec {
            paper: A4,
            minor: Mm(0.5),
            major: Mm(5.0),
            ..GridSpec::default()
        };
        let geometry = GridGeometry::new(&spec).unwrap();
        assert_eq!(geometry.columns(), 380);
        let majors = geometry
            .vertical_lines()
            .filter(|l| l.weight == LineWeight::Major)
            .count();
        assert_eq!(majors, 37);
    }

    #[test]
    fn drawing_labels_without_a_font_fails() {
        let paper = GraphPaper::new(GridSpec::default()).unwrap();
        let mut canvas = Canvas::new();
        assert!(matches!(
            paper.draw(&mut canvas),
            Err(PDFError::NoFontSelected)
        ));
    }

    #[test]
    fn page_content_box_is_the_frame() {
        let paper = GraphPaper::new(GridSpec::default()).unwrap();
        let page = paper.page();
        let (x, y) = paper.geometry().top_right.to_points();
        assert!((*page.content_box.x2 - *x).abs() < 1e-3);
        assert!((*page.content_box.y2 - *y).abs() < 1e-3);
    }
}
