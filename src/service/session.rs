use tracing::info;

/// Redirect-path memory that the browser client kept in session storage.
/// Injected so pages never touch ambient global state.
pub trait Session: Send + Sync {
    fn redirect_path(&self) -> Option<String>;
    fn remember_redirect(&mut self, path: &str);
    fn clear_redirect(&mut self);
}

#[derive(Debug, Default)]
pub struct InMemorySession {
    redirect: Option<String>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Session for InMemorySession {
    fn redirect_path(&self) -> Option<String> {
        self.redirect.clone()
    }

    fn remember_redirect(&mut self, path: &str) {
        self.redirect = Some(path.to_string());
    }

    fn clear_redirect(&mut self) {
        self.redirect = None;
    }
}

/// Route changes requested by the pages. The browser client pushed onto the
/// history stack; other front ends decide what "navigate" means.
pub trait Navigator: Send + Sync {
    fn push(&mut self, path: &str);
}

/// Navigator for the CLI: remembers the destination and logs it.
#[derive(Debug, Default)]
pub struct LoggingNavigator {
    last: Option<String>,
}

impl LoggingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl Navigator for LoggingNavigator {
    fn push(&mut self, path: &str) {
        info!(path, "navigate");
        self.last = Some(path.to_string());
    }
}
