use crate::{
    refs::{ObjectReferences, RefType},
    PDFError,
};
use id_arena::Id;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

/// A parsed TrueType font. The whole face is embedded in the generated PDF,
/// so large fonts make for large documents.
///
/// Fonts live in the [`Document`](crate::Document) and are referred to by the
/// [`Id`] returned from [`Document::add_font`](crate::Document::add_font).
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed. Font collections are rejected since a PDF embeds a single face.
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        if let Some(count) = owned_ttf_parser::fonts_in_collection(&bytes) {
            return Err(PDFError::FontCollection(count));
        }
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Font, PDFError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn find_name(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The PostScript name of the font, if it has one
    pub fn postscript_name(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::POST_SCRIPT_NAME)
    }

    /// The family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.find_name(owned_ttf_parser::name_id::FAMILY)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}')
    }

    /// Encode text as the big-endian glyph ids an Identity-H font expects.
    /// Characters the font can't draw become the replacement glyph, `?`, or `.notdef`
    /// in that order of preference.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let fallback = self
            .replacement_glyph_id()
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0);
        text.chars()
            .map(|ch| self.glyph_id(ch).unwrap_or(fallback))
            .flat_map(u16::to_be_bytes)
            .collect()
    }

    /// Scale factor from font units to the 1000-unit glyph space PDF uses
    fn pdf_scaling(&self) -> f32 {
        1000.0 / self.face().units_per_em() as f32
    }

    /// Every glyph reachable from a unicode cmap subtable, with the first character
    /// that maps to it
    fn glyph_chars(&self) -> BTreeMap<u16, char> {
        let mut map: BTreeMap<u16, char> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    fn advance(&self, glyph: u16) -> f32 {
        self.face()
            .glyph_hor_advance(GlyphId(glyph))
            .map(|advance| advance as f32 * self.pdf_scaling())
            .unwrap_or(0.0)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        id: Id<Font>,
        writer: &mut Pdf,
    ) -> Result<(), PDFError> {
        let font_index = id.index();
        let base_font = self
            .postscript_name()
            .unwrap_or_else(|| format!("F{font_index}"));
        let glyphs = self.glyph_chars();

        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, &base_font, &glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, &glyphs, writer)?;

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
        Ok(())
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        base_font: &str,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, base_font, glyphs, writer);
        let id = refs.gen(RefType::CidFont(font_index));

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(self.advance(0));

        // one run of widths per block of consecutive glyph ids
        let mut widths = cid_font.widths();
        let mut run: Vec<f32> = Vec::new();
        let mut run_start: u16 = 0;
        for &glyph in glyphs.keys() {
            if !run.is_empty() && glyph as usize != run_start as usize + run.len() {
                widths.consecutive(run_start, run.drain(..));
            }
            if run.is_empty() {
                run_start = glyph;
            }
            run.push(self.advance(glyph));
        }
        if !run.is_empty() {
            widths.consecutive(run_start, run);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        base_font: &str,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_id = self.write_font_data(refs, font_index, writer);
        let face = self.face();
        let scaling = self.pdf_scaling();

        let advances: Vec<f32> = glyphs.keys().map(|&glyph| self.advance(glyph)).collect();
        let max_width = advances.iter().copied().fold(0.0, f32::max);
        let avg_width = if advances.is_empty() {
            0.0
        } else {
            advances.iter().sum::<f32>() / advances.len() as f32
        };

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        if let Some(family) = self.family() {
            descriptor.family(Str(family.as_bytes()));
        }
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }
        descriptor.flags(flags);

        let bbox = face.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face.capital_height().unwrap_or(face.ascender());
        descriptor.cap_height(cap_height as f32 * scaling);
        descriptor.x_height(face.x_height().unwrap_or(cap_height) as f32 * scaling);
        // TrueType has no stem width; this is the customary estimate for regular weights
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width);
        descriptor.max_width(max_width);
        descriptor.missing_width(self.advance(0));
        descriptor.font_file2(font_data_id);

        id
    }

    fn write_font_data(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::FontData(font_index));
        let data = self.face.as_slice();
        let compressed = compress_to_vec_zlib(data, CompressionLevel::DefaultLevel as u8);

        let mut stream = writer.stream(id, &compressed);
        stream.filter(Filter::FlateDecode);
        stream.pair(Name(b"Length1"), data.len() as i32);

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Result<Ref, PDFError> {
        let id = refs.gen(RefType::ToUnicode(font_index));
        let cmap = to_unicode_cmap(glyphs)
            .map_err(|_| std::io::Error::other("failed to format ToUnicode cmap"))?;

        let compressed = compress_to_vec_zlib(cmap.as_bytes(), CompressionLevel::DefaultLevel as u8);
        let mut stream = writer.stream(id, &compressed);
        stream.filter(Filter::FlateDecode);

        Ok(id)
    }
}

/// Build a ToUnicode CMap. `bfchar` blocks hold at most 100 entries and never
/// straddle a change in the high byte of the glyph id.
fn to_unicode_cmap(glyphs: &BTreeMap<u16, char>) -> Result<String, std::fmt::Error> {
    let mut map = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo\n\
         << /Registry (Adobe)\n\
         /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    let entries: Vec<(u16, char)> = glyphs.iter().map(|(&id, &ch)| (id, ch)).collect();
    for block in entries.chunk_by(|a, b| a.0 >> 8 == b.0 >> 8) {
        for chunk in block.chunks(100) {
            writeln!(map, "{} beginbfchar", chunk.len())?;
            for &(id, ch) in chunk {
                let mut utf16 = [0u16; 2];
                write!(map, "<{id:04x}> <")?;
                for unit in ch.encode_utf16(&mut utf16) {
                    write!(map, "{unit:04x}")?;
                }
                writeln!(map, ">")?;
            }
            writeln!(map, "endbfchar")?;
        }
    }

    map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");
    Ok(map)
}
