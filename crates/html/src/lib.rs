//! HTML field extractor for timeline slides.
//!
//! Reads the fixed timeline/role-card markup and produces a
//! [`slides_core::SlideContent`]; nothing else in the document is looked at.

pub mod parser;

pub use parser::HtmlParser;
