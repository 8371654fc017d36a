//! Headless platform implementation
//!
//! Surfaces don't render anything; they record the address they were asked
//! to load. The strip is measured from configured widths.

use std::cell::Cell;
use std::rc::Rc;

use strata_core::{
    ChromeHost, Config, RenderSurface, StripItem, StripMetrics, SurfaceError, WindowControls,
};

/// Content view with no engine behind it.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    url: Option<String>,
}

impl RenderSurface for HeadlessSurface {
    fn load(&mut self, url: &str) {
        tracing::debug!(url = %url, "Surface load");
        self.url = Some(url.to_string());
    }

    /// Only internal pages expose their document; everything else is
    /// treated as a foreign origin.
    fn document_title(&self) -> Result<Option<String>, SurfaceError> {
        match self.url.as_deref() {
            None => Ok(None),
            Some(url) if url.starts_with("about:") => Ok(None),
            Some(url) => Err(SurfaceError::CrossOrigin(url.to_string())),
        }
    }

    fn release(&mut self) {
        tracing::debug!(url = ?self.url, "Surface released");
        self.url = None;
    }
}

/// Window state shared with the event loop so it can stop once closed.
#[derive(Debug, Clone, Default)]
pub struct HeadlessWindow {
    maximized: Rc<Cell<bool>>,
    minimized: Rc<Cell<bool>>,
    closed: Rc<Cell<bool>>,
}

impl HeadlessWindow {
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized.get()
    }
}

impl WindowControls for HeadlessWindow {
    fn close(&mut self) {
        tracing::info!("Window closed");
        self.closed.set(true);
    }

    fn minimize(&mut self) {
        self.minimized.set(true);
    }

    fn maximize(&mut self) {
        self.maximized.set(true);
        self.minimized.set(false);
    }

    fn unmaximize(&mut self) {
        self.maximized.set(false);
    }

    fn is_maximized(&self) -> bool {
        self.maximized.get()
    }
}

pub struct HeadlessHost {
    strip_width: Rc<Cell<f64>>,
    tab_width: f64,
    window: HeadlessWindow,
}

impl HeadlessHost {
    pub fn new(config: &Config) -> Self {
        Self {
            strip_width: Rc::new(Cell::new(config.strip_width)),
            tab_width: config.tab_width,
            window: HeadlessWindow::default(),
        }
    }

    /// Handle for resizing the strip after the host moves into the browser.
    pub fn strip_width(&self) -> Rc<Cell<f64>> {
        Rc::clone(&self.strip_width)
    }

    /// Handle observing the window after the host moves into the browser.
    pub fn window_handle(&self) -> HeadlessWindow {
        self.window.clone()
    }
}

impl ChromeHost for HeadlessHost {
    fn create_surface(&mut self) -> Box<dyn RenderSurface> {
        Box::new(HeadlessSurface::default())
    }

    fn measure_strip(&self, tabs: &[StripItem]) -> StripMetrics {
        StripMetrics::uniform(self.strip_width.get(), tabs.len(), self.tab_width)
    }

    fn window(&mut self) -> &mut dyn WindowControls {
        &mut self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_titles() {
        let mut surface = HeadlessSurface::default();
        assert_eq!(surface.document_title(), Ok(None));

        surface.load("about:blank");
        assert_eq!(surface.document_title(), Ok(None));

        surface.load("https://example.com/");
        assert!(matches!(
            surface.document_title(),
            Err(SurfaceError::CrossOrigin(_))
        ));
    }

    #[test]
    fn test_measure_uses_config_widths() {
        let config = Config {
            strip_width: 600.0,
            tab_width: 100.0,
            ..Config::default()
        };
        let host = HeadlessHost::new(&config);
        let items = vec![
            StripItem {
                tab_id: "a".to_string(),
                label: "New Tab".to_string(),
                active: true,
            };
            3
        ];

        let metrics = host.measure_strip(&items);
        assert_eq!(metrics, StripMetrics::uniform(600.0, 3, 100.0));

        host.strip_width().set(200.0);
        assert_eq!(host.measure_strip(&items).strip_width, 200.0);
    }

    #[test]
    fn test_window_handle_shares_state() {
        let mut host = HeadlessHost::new(&Config::default());
        let handle = host.window_handle();

        host.window().minimize();
        assert!(handle.is_minimized());

        host.window().maximize();
        assert!(handle.is_maximized());
        assert!(!handle.is_minimized());

        host.window().close();
        assert!(handle.is_closed());
    }
}
