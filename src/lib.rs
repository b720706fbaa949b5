//! Millimetre graph paper, drawn onto a single PDF page.
//!
//! The crate carries a small PDF layer ([`Document`], [`Page`], [`Font`]) built on
//! [pdf_writer], a [`Canvas`] that draws with [`Coordinate`]s in millimetres, and the
//! grid itself ([`GraphPaper`]), whose every dimension is fixed in [`config`].
//!
//! ```no_run
//! use graph_paper::{config, Font, GraphPaper, GridSpec};
//!
//! let font = Font::from_file(config::FONT_PATH).expect("label font is present");
//! let document = GraphPaper::new(GridSpec::default())
//!     .expect("default grid fits on the page")
//!     .into_document(font)
//!     .expect("can lay out the page");
//! let out = std::fs::File::create(config::OUTPUT_PATH).unwrap();
//! document.write(out).unwrap();
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

pub mod config;

mod coordinate;
pub use coordinate::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod grid;
pub use grid::*;

mod info;
pub use info::*;

mod margins;
pub use margins::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
