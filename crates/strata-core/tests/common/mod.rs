//! Shared host for integration tests.

use std::cell::Cell;
use std::rc::Rc;

use strata_core::{
    Browser, ChromeHost, Config, RenderSurface, StripItem, StripMetrics, SurfaceError,
    WindowControls,
};

pub const TAB_WIDTH: f64 = 150.0;

struct QuietSurface;

impl RenderSurface for QuietSurface {
    fn load(&mut self, _url: &str) {}

    fn document_title(&self) -> Result<Option<String>, SurfaceError> {
        Ok(None)
    }
}

#[derive(Default)]
struct QuietWindow {
    maximized: bool,
}

impl WindowControls for QuietWindow {
    fn close(&mut self) {}

    fn minimize(&mut self) {}

    fn maximize(&mut self) {
        self.maximized = true;
    }

    fn unmaximize(&mut self) {
        self.maximized = false;
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }
}

/// Host whose strip width can be changed from the test.
pub struct FixedHost {
    strip_width: Rc<Cell<f64>>,
    window: QuietWindow,
}

impl ChromeHost for FixedHost {
    fn create_surface(&mut self) -> Box<dyn RenderSurface> {
        Box::new(QuietSurface)
    }

    fn measure_strip(&self, tabs: &[StripItem]) -> StripMetrics {
        StripMetrics::uniform(self.strip_width.get(), tabs.len(), TAB_WIDTH)
    }

    fn window(&mut self) -> &mut dyn WindowControls {
        &mut self.window
    }
}

/// An initialized browser plus the handle controlling its strip width.
pub fn browser(strip_width: f64) -> (Browser, Rc<Cell<f64>>) {
    let width = Rc::new(Cell::new(strip_width));
    let host = FixedHost {
        strip_width: Rc::clone(&width),
        window: QuietWindow::default(),
    };

    let mut browser = Browser::new(Config::default(), Box::new(host)).expect("default config");
    browser.initialize().expect("first tab");
    (browser, width)
}
