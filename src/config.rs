//! The printed sheet. Edit these and rebuild to change it.

use crate::colour::{colours, Colour};
use crate::pagesize::{self, PageSize};
use crate::units::*;

pub const PAPER: PageSize = pagesize::A4;
pub const MARGIN: Mm = Mm(10.0);
pub const MINOR_SPACING: Mm = Mm(1.0);
pub const MAJOR_SPACING: Mm = Mm(10.0);
pub const BOLD_LINE: Mm = Mm(0.3);
pub const REGULAR_LINE: Mm = Mm(0.1);
pub const LINE_COLOUR: Colour = colours::GREY;
pub const LABEL_SIZE: Pt = Pt(5.0);

/// Label font, relative to the working directory
pub const FONT_PATH: &str = "assets/DejaVuSans.ttf";
/// Where the finished page is written, relative to the working directory
pub const OUTPUT_PATH: &str = "graphpaper.pdf";

pub const TITLE: &str = "Graph paper";
