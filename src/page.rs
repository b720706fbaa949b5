use crate::font::Font;
use crate::margins::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::PDFError;
use id_arena::Arena;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf};

/// A single page in a [`Document`](crate::Document)
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// Content streams, in painting order. Each one is isolated in its own
    /// graphics state so state changes can't leak between them.
    pub contents: Vec<Vec<u8>>,
}

impl Page {
    /// Create an empty page. Without margins the content box is the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height): (Pt, Pt) = (size.0.into(), size.1.into());
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    /// Add a finished content stream, such as the output of [`Canvas::finish`](crate::Canvas::finish)
    pub fn add_content(&mut self, content: Vec<u8>) {
        self.contents.push(content);
    }

    pub(crate) fn render(&self) -> Vec<u8> {
        let mut rendered: Vec<u8> = Vec::new();
        for content in self.contents.iter().filter(|c| !c.is_empty()) {
            rendered.extend_from_slice(b"q\n");
            rendered.extend_from_slice(content);
            if !content.ends_with(b"\n") {
                rendered.push(b'\n');
            }
            rendered.extend_from_slice(b"Q\n");
        }
        rendered
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let id = refs.require(RefType::Page(page_index))?;
        let parent = refs.require(RefType::PageTree)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            let font_index = font_id.index();
            resource_fonts.pair(
                Name(format!("F{font_index}").as_bytes()),
                refs.require(RefType::Font(font_index))?,
            );
        }
        resource_fonts.finish();
        resources.finish();
        page.finish();

        let compressed =
            compress_to_vec_zlib(&self.render(), CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, &compressed)
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
