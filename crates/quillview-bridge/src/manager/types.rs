/// How the editor WebView is created.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Bootstrap document rendered as the initial page. Takes precedence
    /// over `url`.
    pub html: Option<String>,
    /// Page to load when no document is supplied, typically
    /// `quillview://localhost/editor/index.html`.
    pub url: Option<String>,
    pub transparent: bool,
    /// Always on in debug builds.
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            html: None,
            url: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Quillview/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
        }
    }
}

impl WebViewConfig {
    /// Render a loaded bootstrap document.
    pub fn with_document(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// The URL recorded for the initial page.
    pub(super) fn initial_url(&self) -> String {
        match (&self.html, &self.url) {
            (None, Some(url)) => url.clone(),
            _ => "about:blank".to_string(),
        }
    }
}
