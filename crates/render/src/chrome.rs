//! Chrome DevTools Protocol renderer (uses the `headless_chrome` crate).

use crate::{RenderError, RenderOptions, Result, SlideRenderer};
use headless_chrome::protocol::cdp::Page;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use url::Url;

/// Renders slides in a single headless Chrome tab.
///
/// Each slide is loaded from a `file://` URL, given a fixed settle delay,
/// and only exported once the ready marker is present.
pub struct ChromeRenderer {
    // Keeps the Chrome process alive for as long as the tab is used.
    _browser: Browser,
    tab: Arc<Tab>,
    options: RenderOptions,
}

impl ChromeRenderer {
    /// Start headless Chrome with the configured window size.
    pub fn launch(options: RenderOptions) -> Result<Self> {
        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .window_size(Some((options.viewport.width, options.viewport.height)))
            .args(vec![
                OsStr::new("--disable-gpu"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--hide-scrollbars"),
                OsStr::new("--force-device-scale-factor=1"),
            ])
            .build()
            .map_err(|e| RenderError::Launch(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| RenderError::Launch(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| RenderError::Launch(format!("Failed to create tab: {}", e)))?;

        log::debug!(
            "Launched headless Chrome at {}x{}",
            options.viewport.width,
            options.viewport.height
        );

        Ok(Self {
            _browser: browser,
            tab,
            options,
        })
    }

    /// Navigate to the slide and wait until it is ready to export.
    fn load(&self, page: &Path) -> Result<()> {
        let absolute = page.canonicalize()?;
        let url = file_url(&absolute)?;

        self.tab
            .navigate_to(&url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| render_error(page, "Navigation failed", e))?;

        std::thread::sleep(self.options.settle);

        self.tab
            .wait_for_element_with_custom_timeout(
                &self.options.ready_selector,
                self.options.ready_timeout,
            )
            .map_err(|_| RenderError::Timeout {
                path: page.to_path_buf(),
                selector: self.options.ready_selector.clone(),
                waited: self.options.ready_timeout,
            })?;

        Ok(())
    }
}

impl SlideRenderer for ChromeRenderer {
    fn render_pdf(&mut self, page: &Path) -> Result<Vec<u8>> {
        self.load(page)?;

        let pdf = &self.options.pdf;
        let print_options = PrintToPdfOptions {
            landscape: Some(pdf.landscape),
            display_header_footer: Some(false),
            print_background: Some(pdf.print_background),
            prefer_css_page_size: Some(pdf.prefer_css_page_size),
            paper_width: pdf.paper_width,
            paper_height: pdf.paper_height,
            margin_top: Some(0.0),
            margin_bottom: Some(0.0),
            margin_left: Some(0.0),
            margin_right: Some(0.0),
            scale: Some(pdf.scale),
            ..Default::default()
        };

        self.tab
            .print_to_pdf(Some(print_options))
            .map_err(|e| render_error(page, "Printing to PDF failed", e))
    }

    fn render_png(&mut self, page: &Path) -> Result<Vec<u8>> {
        self.load(page)?;

        self.tab
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| render_error(page, "Screenshot failed", e))
    }
}

/// Percent-encoded `file://` URL, so names with `#`, `?` or spaces load
/// the file itself.
fn file_url(absolute: &Path) -> Result<String> {
    Url::from_file_path(absolute)
        .map(String::from)
        .map_err(|()| render_error(absolute, "Invalid file path", "not an absolute path"))
}

fn render_error(page: &Path, what: &str, error: impl std::fmt::Display) -> RenderError {
    RenderError::Render {
        path: page.to_path_buf(),
        message: format!("{}: {}", what, error),
    }
}
