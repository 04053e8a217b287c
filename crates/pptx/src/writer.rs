//! PPTX package writer.
//!
//! Serializes a [`Deck`] as a minimal PresentationML package: one master,
//! one blank layout, one theme and the slide itself.

use crate::deck::{Deck, Paragraph, Run, Shape, TextFrame};
use crate::template;
use crate::xml::{XmlSink, NS_A, NS_P, NS_R};
use slides_core::geometry::points;
use slides_core::{Error, Result, Rgb};
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// First id PowerPoint accepts in `p:sldIdLst`.
const FIRST_SLIDE_ID: &str = "256";

/// Notes page size (portrait letter), required by `presentation.xml`.
const NOTES_WIDTH: &str = "6858000";
const NOTES_HEIGHT: &str = "9144000";

/// Drop shadow: 6pt blur, 2pt distance, straight down, 15% opacity.
const SHADOW_BLUR_PT: f64 = 6.0;
const SHADOW_DISTANCE_PT: f64 = 2.0;
const SHADOW_DIRECTION: &str = "5400000";
const SHADOW_ALPHA: &str = "15000";

/// Writer for PPTX packages.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize the deck to `.pptx` bytes.
    ///
    /// Entries carry a fixed timestamp, so the same deck always yields the
    /// same bytes.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let parts: Vec<(&str, String)> = vec![
            ("[Content_Types].xml", template::CONTENT_TYPES.to_string()),
            ("_rels/.rels", template::ROOT_RELS.to_string()),
            ("docProps/app.xml", template::APP_PROPS.to_string()),
            ("ppt/presentation.xml", self.presentation_xml(deck)?),
            ("ppt/_rels/presentation.xml.rels", template::PRESENTATION_RELS.to_string()),
            ("ppt/slides/slide1.xml", self.slide_xml(deck)?),
            ("ppt/slides/_rels/slide1.xml.rels", template::SLIDE_RELS.to_string()),
            ("ppt/slideLayouts/slideLayout1.xml", template::SLIDE_LAYOUT.to_string()),
            (
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
                template::SLIDE_LAYOUT_RELS.to_string(),
            ),
            ("ppt/slideMasters/slideMaster1.xml", template::SLIDE_MASTER.to_string()),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels",
                template::SLIDE_MASTER_RELS.to_string(),
            ),
            ("ppt/theme/theme1.xml", template::THEME.to_string()),
            ("ppt/presProps.xml", template::PRES_PROPS.to_string()),
            ("ppt/viewProps.xml", template::VIEW_PROPS.to_string()),
            ("ppt/tableStyles.xml", template::TABLE_STYLES.to_string()),
        ];

        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in &parts {
            archive
                .start_file(*name, options)
                .map_err(|e| Error::ZipError(format!("Failed to add '{}': {}", name, e)))?;
            archive.write_all(content.as_bytes())?;
        }

        let cursor = archive
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))?;

        Ok(cursor.into_inner())
    }

    /// Write the deck to `path`, replacing any existing file.
    pub fn write_to_path(&self, deck: &Deck, path: &Path) -> Result<()> {
        let bytes = self.to_bytes(deck)?;
        if path.exists() {
            log::debug!("Overwriting {}", path.display());
        }
        std::fs::write(path, &bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Generate `ppt/presentation.xml` with the deck's slide size.
    pub fn presentation_xml(&self, deck: &Deck) -> Result<String> {
        let width = deck.width.to_string();
        let height = deck.height.to_string();

        let mut xml = XmlSink::new()?;
        xml.start(
            "p:presentation",
            &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P), ("saveSubsetFonts", "1")],
        )?;
        xml.start("p:sldMasterIdLst", &[])?;
        xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", template::MASTER_REL_ID)])?;
        xml.end("p:sldMasterIdLst")?;
        xml.start("p:sldIdLst", &[])?;
        xml.empty("p:sldId", &[("id", FIRST_SLIDE_ID), ("r:id", template::SLIDE_REL_ID)])?;
        xml.end("p:sldIdLst")?;
        xml.empty("p:sldSz", &[("cx", width.as_str()), ("cy", height.as_str())])?;
        xml.empty("p:notesSz", &[("cx", NOTES_WIDTH), ("cy", NOTES_HEIGHT)])?;
        xml.end("p:presentation")?;
        xml.finish()
    }

    /// Generate `ppt/slides/slide1.xml`.
    pub fn slide_xml(&self, deck: &Deck) -> Result<String> {
        let mut xml = XmlSink::new()?;
        xml.start("p:sld", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;
        xml.start("p:cSld", &[])?;
        xml.start("p:spTree", &[])?;

        xml.start("p:nvGrpSpPr", &[])?;
        xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
        xml.empty("p:cNvGrpSpPr", &[])?;
        xml.empty("p:nvPr", &[])?;
        xml.end("p:nvGrpSpPr")?;

        xml.start("p:grpSpPr", &[])?;
        xml.start("a:xfrm", &[])?;
        xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
        xml.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
        xml.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
        xml.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
        xml.end("a:xfrm")?;
        xml.end("p:grpSpPr")?;

        for shape in &deck.shapes {
            write_shape(&mut xml, shape)?;
        }

        xml.end("p:spTree")?;
        xml.end("p:cSld")?;
        xml.start("p:clrMapOvr", &[])?;
        xml.empty("a:masterClrMapping", &[])?;
        xml.end("p:clrMapOvr")?;
        xml.end("p:sld")?;
        xml.finish()
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one `p:sp` auto shape.
fn write_shape(xml: &mut XmlSink, shape: &Shape) -> Result<()> {
    let id = shape.id.to_string();
    let (x, y, cx, cy) = shape.frame.to_emu();
    let (x, y, cx, cy) = (x.to_string(), y.to_string(), cx.to_string(), cy.to_string());

    xml.start("p:sp", &[])?;

    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", id.as_str()), ("name", shape.name.as_str())])?;
    xml.empty("p:cNvSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvSpPr")?;

    xml.start("p:spPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    xml.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.end("a:xfrm")?;
    xml.start("a:prstGeom", &[("prst", shape.geometry.preset())])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;

    match shape.fill {
        Some(color) => solid_fill(xml, color)?,
        None => xml.empty("a:noFill", &[])?,
    }

    match shape.outline {
        Some(outline) => {
            let width = (points(outline.width_pt) as i64).to_string();
            xml.start("a:ln", &[("w", width.as_str())])?;
            solid_fill(xml, outline.color)?;
            xml.end("a:ln")?;
        }
        None => {
            xml.start("a:ln", &[])?;
            xml.empty("a:noFill", &[])?;
            xml.end("a:ln")?;
        }
    }

    if shape.shadow {
        write_shadow(xml)?;
    }
    xml.end("p:spPr")?;

    if let Some(frame) = &shape.text {
        write_text_frame(xml, frame)?;
    }

    xml.end("p:sp")
}

fn solid_fill(xml: &mut XmlSink, color: Rgb) -> Result<()> {
    xml.start("a:solidFill", &[])?;
    let hex = color.hex();
    xml.empty("a:srgbClr", &[("val", hex.as_str())])?;
    xml.end("a:solidFill")
}

fn write_shadow(xml: &mut XmlSink) -> Result<()> {
    let blur = (points(SHADOW_BLUR_PT) as i64).to_string();
    let distance = (points(SHADOW_DISTANCE_PT) as i64).to_string();

    xml.start("a:effectLst", &[])?;
    xml.start(
        "a:outerShdw",
        &[
            ("blurRad", blur.as_str()),
            ("dist", distance.as_str()),
            ("dir", SHADOW_DIRECTION),
            ("algn", "t"),
            ("rotWithShape", "0"),
        ],
    )?;
    xml.start("a:srgbClr", &[("val", "000000")])?;
    xml.empty("a:alpha", &[("val", SHADOW_ALPHA)])?;
    xml.end("a:srgbClr")?;
    xml.end("a:outerShdw")?;
    xml.end("a:effectLst")
}

fn write_text_frame(xml: &mut XmlSink, frame: &TextFrame) -> Result<()> {
    let insets = frame.insets;
    let left = (insets.left as i64).to_string();
    let top = (insets.top as i64).to_string();
    let right = (insets.right as i64).to_string();
    let bottom = (insets.bottom as i64).to_string();

    xml.start("p:txBody", &[])?;
    xml.start(
        "a:bodyPr",
        &[
            ("wrap", "square"),
            ("lIns", left.as_str()),
            ("tIns", top.as_str()),
            ("rIns", right.as_str()),
            ("bIns", bottom.as_str()),
            ("rtlCol", "0"),
            ("anchor", frame.anchor.as_str()),
        ],
    )?;
    xml.empty("a:noAutofit", &[])?;
    xml.end("a:bodyPr")?;
    xml.empty("a:lstStyle", &[])?;

    if frame.paragraphs.is_empty() {
        xml.empty("a:p", &[])?;
    }
    for paragraph in &frame.paragraphs {
        write_paragraph(xml, paragraph)?;
    }

    xml.end("p:txBody")
}

fn write_paragraph(xml: &mut XmlSink, paragraph: &Paragraph) -> Result<()> {
    xml.start("a:p", &[])?;
    xml.start("a:pPr", &[("algn", paragraph.align.as_str())])?;
    spacing(xml, "a:spcBef", paragraph.space_before_pt)?;
    spacing(xml, "a:spcAft", paragraph.space_after_pt)?;
    xml.end("a:pPr")?;

    for run in &paragraph.runs {
        write_run(xml, run)?;
    }

    xml.end("a:p")
}

/// Paragraph spacing in hundredths of a point.
fn spacing(xml: &mut XmlSink, name: &str, pt: f64) -> Result<()> {
    let value = hundredths(pt);
    xml.start(name, &[])?;
    xml.empty("a:spcPts", &[("val", value.as_str())])?;
    xml.end(name)
}

fn write_run(xml: &mut XmlSink, run: &Run) -> Result<()> {
    let size = hundredths(run.size_pt);
    let bold = if run.bold { "1" } else { "0" };
    let italic = if run.italic { "1" } else { "0" };

    xml.start("a:r", &[])?;
    xml.start(
        "a:rPr",
        &[("lang", "en-US"), ("sz", size.as_str()), ("b", bold), ("i", italic), ("dirty", "0")],
    )?;
    solid_fill(xml, run.color)?;
    xml.end("a:rPr")?;
    xml.text_element("a:t", &[], &run.text)?;
    xml.end("a:r")
}

fn hundredths(pt: f64) -> String {
    ((pt * 100.0).round() as i64).to_string()
}
