use graph_paper::{Canvas, Document, Font, GraphPaper, GridSpec, PDFError};

fn dejavu() -> Font {
    let bytes = include_bytes!("../assets/DejaVuSans.ttf");
    Font::load(bytes.to_vec()).expect("can load font")
}

#[test]
fn writes_a_single_page_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graphpaper.pdf");

    let document = GraphPaper::new(GridSpec::default())
        .unwrap()
        .into_document(dejavu())
        .unwrap();
    document
        .write(std::fs::File::create(&path).unwrap())
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.starts_with("%PDF-"));
    assert!(text.trim_end().ends_with("%%EOF"));
    assert!(text.contains("startxref"));
    assert!(text.contains("/Type /Catalog"));
    assert!(text.contains("/Type /Page"));
    assert!(text.contains("/Count 1"));
    assert!(text.contains("/Identity-H"));
    assert!(text.contains("/FontFile2"));
    assert!(text.contains("(Graph paper)"));

    let pdf = lopdf::Document::load_mem(&bytes).expect("output parses as a PDF");
    let pages = pdf.get_pages();
    assert_eq!(pages.len(), 1);
    let (page_number, page_id) = pages.iter().next().map(|(n, id)| (*n, *id)).unwrap();

    let content =
        lopdf::content::Content::decode(&pdf.get_page_content(page_id).unwrap()).unwrap();
    let count = |operator: &str| {
        content
            .operations
            .iter()
            .filter(|op| op.operator == operator)
            .count()
    };
    assert_eq!(count("S"), 1 + 189 + 276);
    assert_eq!(count("BT"), 18 + 27);

    // vertical labels count down from the right, horizontal ones up from the bottom
    let expected: Vec<String> = (1..=18)
        .rev()
        .chain(1..=27)
        .map(|k: u32| (k * 10).to_string())
        .collect();
    let extracted = pdf.extract_text(&[page_number]).unwrap();
    let labels: Vec<&str> = extracted.split_whitespace().collect();
    assert_eq!(labels, expected);
}

#[test]
fn draws_one_stroke_per_line_and_one_label_per_major_line() {
    let paper = GraphPaper::new(GridSpec::default()).unwrap();
    let mut doc = Document::default();
    let font = doc.add_font(dejavu());

    let mut canvas = Canvas::new();
    canvas.set_font(font, &doc.fonts[font], paper.spec().label_size);
    paper.draw(&mut canvas).unwrap();
    let content = String::from_utf8(canvas.finish()).unwrap();

    let strokes = content.lines().filter(|line| *line == "S").count();
    // frame + 189 vertical + 276 horizontal
    assert_eq!(strokes, 1 + 189 + 276);

    let labels = content.lines().filter(|line| *line == "BT").count();
    assert_eq!(labels, 18 + 27);

    // every label is drawn in its own state, so saves and restores pair up
    let saves = content.lines().filter(|line| *line == "q").count();
    let restores = content.lines().filter(|line| *line == "Q").count();
    assert_eq!(saves, labels);
    assert_eq!(restores, labels);
}

#[test]
fn bundled_font_draws_digits() {
    let font = dejavu();
    assert_eq!(font.postscript_name().as_deref(), Some("DejaVuSans"));
    for digit in '0'..='9' {
        assert!(font.glyph_id(digit).is_some(), "no glyph for {digit}");
    }
    assert_eq!(font.encode("270").len(), 6);
}

#[test]
fn missing_font_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = Font::from_file(dir.path().join("missing.ttf")).err().unwrap();
    assert!(matches!(err, PDFError::Io(_)));
}
