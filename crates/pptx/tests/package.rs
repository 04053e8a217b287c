use quick_xml::events::Event;
use quick_xml::Reader;
use slides_core::LayoutConfig;
use slides_html::HtmlParser;
use slides_pptx::{write_pptx, PptxWriter, TimelineRenderer};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../html/tests/fixtures/timeline.html")
}

fn read_part(path: &Path, name: &str) -> String {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut content = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut content).unwrap();
    content
}

/// Text of every `a:t` element, in document order.
fn slide_texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut texts = Vec::new();
    let mut in_text = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"a:t" => {
                in_text = true;
                texts.push(String::new());
            }
            Ok(Event::Text(ref e)) if in_text => {
                if let Some(last) = texts.last_mut() {
                    last.push_str(&e.unescape().unwrap());
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"a:t" => in_text = false,
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid slide XML: {}", e),
            _ => {}
        }
    }
    texts
}

#[test]
fn writes_complete_package() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("presentation.pptx");
    let content = HtmlParser::new().parse_file(&fixture()).unwrap();

    write_pptx(&content, &LayoutConfig::default(), &output).unwrap();

    let archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/presProps.xml",
            "ppt/presentation.xml",
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slides/slide1.xml",
            "ppt/tableStyles.xml",
            "ppt/theme/theme1.xml",
            "ppt/viewProps.xml",
        ]
    );

    let presentation = read_part(&output, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
}

#[test]
fn slide_carries_extracted_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("presentation.pptx");
    let content = HtmlParser::new().parse_file(&fixture()).unwrap();

    write_pptx(&content, &LayoutConfig::default(), &output).unwrap();
    let texts = slide_texts(&read_part(&output, "ppt/slides/slide1.xml"));

    assert_eq!(texts[0], "Background");
    assert_eq!(texts[1], "Timeline, Current Role & UAV Gear");
    assert!(texts.contains(&"Research Fellow \u{2014} ISTC CNR".to_string()));
    assert!(texts.contains(&"RESPONSIBILITIES".to_string()));
    assert!(texts.contains(&"\u{2022} Writing project deliverables".to_string()));
    assert!(texts.contains(&"Goal: ".to_string()));

    let bullets: Vec<&String> = texts.iter().filter(|t| t.starts_with('\u{2022}')).collect();
    assert_eq!(bullets.len(), 4);
    assert!(texts.iter().all(|t| !t.contains("DJI") && !t.contains("UviFy")));
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("presentation.pptx");
    std::fs::write(&output, b"stale").unwrap();

    let content = HtmlParser::new().parse_file(&fixture()).unwrap();
    write_pptx(&content, &LayoutConfig::default(), &output).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK\x03\x04"));
}

#[test]
fn same_input_gives_identical_bytes() {
    let content = HtmlParser::new().parse_file(&fixture()).unwrap();
    let renderer = TimelineRenderer::default();
    let writer = PptxWriter::new();

    let first = writer.to_bytes(&renderer.render(&content)).unwrap();
    let second = writer.to_bytes(&renderer.render(&content)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn control_characters_in_markup_stay_valid_xml() {
    let html = r#"<div class="timeline-item left"><div class="card">
        <div class="timeline-title">Lab&#1;Work &#27;[0m</div>
    </div></div>"#;
    let content = HtmlParser::new().parse(html);
    assert_eq!(content.entries[0].title, "Lab\u{1}Work \u{1b}[0m");

    let deck = TimelineRenderer::default().render(&content);
    let xml = PptxWriter::new().slide_xml(&deck).unwrap();

    assert!(xml
        .chars()
        .all(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r')));
    assert!(slide_texts(&xml).contains(&"Lab_x0001_Work _x001B_[0m".to_string()));
}
