//! ISO A-series page sizes, in portrait orientation.
//!
//! ```
//! use graph_paper::pagesize::A4;
//! use graph_paper::Mm;
//!
//! assert_eq!(A4, (Mm(210.0), Mm(297.0)));
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

pub const A4: PageSize = (Mm(210.0), Mm(297.0));
