//! In-memory description of the slide before it is serialized.
//!
//! The renderer only builds these values; turning them into PresentationML
//! is the job of [`crate::PptxWriter`].

use slides_core::{geometry, Rect, Rgb};

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeGeometry {
    Rectangle,
    RoundedRectangle,
    Oval,
}

impl ShapeGeometry {
    /// Value of `a:prstGeom/@prst`.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Oval => "ellipse",
        }
    }
}

/// Shape outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgb,
    pub width_pt: f64,
}

/// Vertical placement of text inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Middle,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Text frame insets in EMU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Insets {
    /// PowerPoint's defaults: 0.1" left/right, 0.05" top/bottom.
    fn default() -> Self {
        Self {
            left: geometry::inches(0.1),
            top: geometry::inches(0.05),
            right: geometry::inches(0.1),
            bottom: geometry::inches(0.05),
        }
    }
}

impl Insets {
    /// Insets given in points.
    pub fn points(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: geometry::points(left),
            top: geometry::points(top),
            right: geometry::points(right),
            bottom: geometry::points(bottom),
        }
    }
}

/// A run of uniformly formatted text.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub size_pt: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Rgb,
}

impl Run {
    pub fn new(text: impl Into<String>, size_pt: f64, color: Rgb) -> Self {
        Self {
            text: text.into(),
            size_pt,
            bold: false,
            italic: false,
            color,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// A paragraph of one or more runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub align: Align,
    pub space_before_pt: f64,
    pub space_after_pt: f64,
}

impl Paragraph {
    /// A left-aligned paragraph holding a single run.
    pub fn new(run: Run) -> Self {
        Self::with_runs(vec![run])
    }

    pub fn with_runs(runs: Vec<Run>) -> Self {
        Self {
            runs,
            align: Align::Left,
            space_before_pt: 0.0,
            space_after_pt: 0.0,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn space_before(mut self, pt: f64) -> Self {
        self.space_before_pt = pt;
        self
    }

    pub fn space_after(mut self, pt: f64) -> Self {
        self.space_after_pt = pt;
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Word-wrapped text inside a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub insets: Insets,
    pub anchor: Anchor,
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    pub fn new(insets: Insets, anchor: Anchor) -> Self {
        Self {
            insets,
            anchor,
            paragraphs: Vec::new(),
        }
    }

    pub fn push(&mut self, paragraph: Paragraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }
}

/// One auto shape on the slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Drawing id, unique within the slide (the group root uses 1).
    pub id: u32,
    pub name: String,
    pub geometry: ShapeGeometry,
    pub frame: Rect,
    pub fill: Option<Rgb>,

    /// `None` means no line at all.
    pub outline: Option<Outline>,
    pub shadow: bool,
    pub text: Option<TextFrame>,
}

impl Shape {
    pub fn fill(&mut self, color: Rgb) -> &mut Self {
        self.fill = Some(color);
        self
    }

    pub fn outline(&mut self, color: Rgb, width_pt: f64) -> &mut Self {
        self.outline = Some(Outline { color, width_pt });
        self
    }

    pub fn shadow(&mut self, shadow: bool) -> &mut Self {
        self.shadow = shadow;
        self
    }

    pub fn text(&mut self, frame: TextFrame) -> &mut Self {
        self.text = Some(frame);
        self
    }

    /// All paragraph texts of the shape, in order.
    pub fn paragraph_texts(&self) -> Vec<String> {
        self.text
            .as_ref()
            .map(|tf| tf.paragraphs.iter().map(Paragraph::text).collect())
            .unwrap_or_default()
    }
}

/// A single-slide deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Slide width in EMU.
    pub width: i64,

    /// Slide height in EMU.
    pub height: i64,

    /// Shapes in z-order (first is at the back).
    pub shapes: Vec<Shape>,
}

impl Deck {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    /// Append a shape with no fill, outline, shadow or text.
    pub fn add_shape(
        &mut self,
        name: impl Into<String>,
        geometry: ShapeGeometry,
        frame: Rect,
    ) -> &mut Shape {
        // Id 1 belongs to the slide's group shape.
        let id = self.shapes.len() as u32 + 2;
        self.shapes.push(Shape {
            id,
            name: name.into(),
            geometry,
            frame,
            fill: None,
            outline: None,
            shadow: false,
            text: None,
        });
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// First shape with the given name.
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.name == name)
    }

    /// Shapes whose name starts with `prefix`, in z-order.
    pub fn shapes_named<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Shape> + 'a {
        self.shapes.iter().filter(move |s| s.name.starts_with(prefix))
    }
}
