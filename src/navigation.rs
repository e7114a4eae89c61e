use tracing::info;

/// Console routes the wizard navigates to
pub mod paths {
    pub const OVERVIEW: &str = "/overview";
    pub const STATIONS: &str = "/stations";

    pub fn station(name: &str) -> String {
        format!("{STATIONS}/{name}")
    }
}

/// Imperative route change. The return value is never consulted.
pub trait Navigator: Send {
    fn push(&mut self, path: &str);
}

/// Records the last pushed path so the binary can print the console URL once
/// the terminal has been restored.
#[derive(Debug, Clone)]
pub struct ConsoleNavigator {
    base_url: String,
    target: Option<String>,
}

impl ConsoleNavigator {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            target: None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn target_url(&self) -> Option<String> {
        self.target
            .as_ref()
            .map(|path| format!("{}{}", self.base_url, path))
    }
}

impl Navigator for ConsoleNavigator {
    fn push(&mut self, path: &str) {
        info!("Navigating to {}", path);
        self.target = Some(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_url_joins_base_and_path() {
        let mut nav = ConsoleNavigator::new("http://localhost:9000/");
        assert_eq!(nav.target_url(), None);
        nav.push(&paths::station("orders"));
        assert_eq!(nav.target(), Some("/stations/orders"));
        assert_eq!(
            nav.target_url().as_deref(),
            Some("http://localhost:9000/stations/orders")
        );
    }

    #[test]
    fn last_push_wins() {
        let mut nav = ConsoleNavigator::new("http://console");
        nav.push(paths::OVERVIEW);
        nav.push(&paths::station("a"));
        assert_eq!(nav.target(), Some("/stations/a"));
    }
}
