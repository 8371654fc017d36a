//! Input resolution for the address bar
//!
//! Anything without both a `.` and a `/` is treated as a search query.
//! Everything else is an address, with `https://` prepended when no scheme
//! is present.

use url::Url;

use crate::error::NavigationError;
use crate::Result;

/// Search engine used when no template is configured.
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q=%s";

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Navigate to a URL
    Navigate(String),
    /// Perform a search (the search URL is already built)
    Search(String),
}

impl InputResolution {
    /// The address the render surface should load.
    pub fn url(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, InputResolution::Search(_))
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Result<Self> {
        let mut resolver = Self::new();
        resolver.set_search_engine(template)?;
        Ok(resolver)
    }

    /// Replace the search template. It must contain `%s` and produce an
    /// absolute URL once the placeholder is filled.
    pub fn set_search_engine(&mut self, template: String) -> Result<()> {
        if !template.contains("%s") || Url::parse(&template.replace("%s", "q")).is_err() {
            return Err(NavigationError::InvalidSearchTemplate(template));
        }

        self.search_template = template;
        Ok(())
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into an address
    pub fn resolve(&self, input: &str) -> InputResolution {
        let input = input.trim();

        if !input.contains('.') || !input.contains('/') {
            return InputResolution::Search(self.build_search_url(input));
        }

        if has_scheme(input) {
            InputResolution::Navigate(input.to_string())
        } else {
            InputResolution::Navigate(format!("https://{input}"))
        }
    }

    /// Build search URL from query
    fn build_search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        self.search_template.replace("%s", &encoded)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// `<scheme>://` with an RFC 3986 scheme name, or an `about:`/`data:`
/// prefix. Only consulted for input with both a `.` and a `/`, so a bare
/// `about:blank` never gets here and resolves as a search.
fn has_scheme(input: &str) -> bool {
    if input.starts_with("about:") || input.starts_with("data:") {
        return true;
    }

    match input.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Host component of `url`, used as a tab label when the page title can't
/// be read. Falls back to the whole string for host-less addresses.
pub fn host_label(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
