//! SDK example presenter: per-language producer/consumer samples with the
//! broker host and station name filled in. Pure string templating.

mod templates;
pub mod ui;
mod viewer;

pub use templates::{CodeExample, example_for};
pub use viewer::SdkViewer;

use crate::flags::{Flag, FlagStore};

const HOST_PLACEHOLDER: &str = "<memphis-host>";
const STATION_PLACEHOLDER: &str = "<station_name>";

pub const SANDBOX_HOST: &str = "broker.sandbox.memphis.dev";
pub const DOCKER_HOST: &str = "localhost";
pub const DEFAULT_NAMESPACE: &str = "memphis";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Go,
    NodeJs,
    Typescript,
    Python,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Go,
        Language::NodeJs,
        Language::Typescript,
        Language::Python,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::Go => "Go",
            Language::NodeJs => "Node.js",
            Language::Typescript => "Typescript",
            Language::Python => "Python",
        }
    }

    /// Syntax identifier for the sample, as an editor would name it
    pub fn lang_code(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::NodeJs => "javascript",
            Language::Typescript => "typescript",
            Language::Python => "python",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "go" | "golang" => Some(Language::Go),
            "node.js" | "nodejs" | "node" | "js" | "javascript" => Some(Language::NodeJs),
            "typescript" | "ts" => Some(Language::Typescript),
            "python" | "py" => Some(Language::Python),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }
}

/// Where SDK clients should connect. Signals are checked in a fixed order and
/// the first match wins: sandbox, then a docker deployment, then the
/// in-cluster service name for the namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokerHost {
    Sandbox,
    Docker,
    Cluster { namespace: String },
}

impl BrokerHost {
    pub fn resolve(sandbox: bool, env: Option<&str>, namespace: Option<&str>) -> Self {
        if sandbox {
            BrokerHost::Sandbox
        } else if env == Some("docker") {
            BrokerHost::Docker
        } else {
            let namespace = namespace
                .filter(|ns| !ns.is_empty())
                .unwrap_or(DEFAULT_NAMESPACE);
            BrokerHost::Cluster {
                namespace: namespace.to_string(),
            }
        }
    }

    pub fn from_flags(sandbox: bool, flags: &FlagStore) -> Self {
        Self::resolve(sandbox, flags.get(Flag::Env), flags.get(Flag::Namespace))
    }

    pub fn hostname(&self) -> String {
        match self {
            BrokerHost::Sandbox => SANDBOX_HOST.to_string(),
            BrokerHost::Docker => DOCKER_HOST.to_string(),
            BrokerHost::Cluster { namespace } => {
                format!("memphis-cluster.{namespace}.svc.cluster.local")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeTab {
    #[default]
    Producer,
    Consumer,
}

impl CodeTab {
    pub fn label(&self) -> &'static str {
        match self {
            CodeTab::Producer => "Producer",
            CodeTab::Consumer => "Consumer",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            CodeTab::Producer => CodeTab::Consumer,
            CodeTab::Consumer => CodeTab::Producer,
        }
    }
}

/// A sample with placeholders substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExample {
    pub language: Language,
    pub installation: String,
    pub producer: String,
    pub consumer: String,
}

impl RenderedExample {
    pub fn code(&self, tab: CodeTab) -> &str {
        match tab {
            CodeTab::Producer => &self.producer,
            CodeTab::Consumer => &self.consumer,
        }
    }
}

pub fn render_example(language: Language, host: &str, station: &str) -> RenderedExample {
    let example = example_for(language);
    let fill = |template: &str| {
        template
            .replace(HOST_PLACEHOLDER, host)
            .replace(STATION_PLACEHOLDER, station)
    };

    RenderedExample {
        language,
        installation: example.installation.to_string(),
        producer: fill(example.producer),
        consumer: fill(example.consumer),
    }
}

/// Station name from a console location such as
/// `https://console/stations/orders?tab=sdk`.
pub fn station_from_location(location: &str) -> Option<String> {
    let (_, rest) = location.split_once("stations/")?;
    let name = rest.split(['/', '?', '#']).next().unwrap_or("");
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sandbox_wins_over_everything() {
        let host = BrokerHost::resolve(true, Some("docker"), Some("prod"));
        assert_eq!(host, BrokerHost::Sandbox);
        assert_eq!(host.hostname(), "broker.sandbox.memphis.dev");
    }

    #[test]
    fn docker_wins_over_namespace() {
        let host = BrokerHost::resolve(false, Some("docker"), Some("prod"));
        assert_eq!(host.hostname(), "localhost");
    }

    #[test]
    fn namespace_builds_cluster_dns() {
        let host = BrokerHost::resolve(false, Some("k8s"), Some("prod"));
        assert_eq!(host.hostname(), "memphis-cluster.prod.svc.cluster.local");
    }

    #[test]
    fn missing_namespace_uses_default() {
        let host = BrokerHost::resolve(false, None, None);
        assert_eq!(host.hostname(), "memphis-cluster.memphis.svc.cluster.local");
    }

    #[test]
    fn render_replaces_every_placeholder() {
        for language in Language::ALL {
            let rendered = render_example(language, "localhost", "orders");
            for code in [&rendered.producer, &rendered.consumer] {
                assert!(!code.contains(HOST_PLACEHOLDER), "{language:?}");
                assert!(!code.contains(STATION_PLACEHOLDER), "{language:?}");
                assert!(code.contains("localhost"));
                assert!(code.contains("orders"));
            }
        }
    }

    #[test]
    fn render_leaves_credential_placeholders() {
        let rendered = render_example(Language::Python, "localhost", "orders");
        assert!(rendered.producer.contains("<broker-token>"));
        assert_eq!(rendered.installation, "pip3 install memphis-py");
    }

    #[test]
    fn station_is_taken_after_stations_segment() {
        assert_eq!(
            station_from_location("http://localhost:9000/stations/orders"),
            Some("orders".to_string())
        );
        assert_eq!(
            station_from_location("http://localhost:9000/stations/orders/sdk?tab=1"),
            Some("orders".to_string())
        );
        assert_eq!(station_from_location("http://localhost:9000/overview"), None);
        assert_eq!(station_from_location("http://localhost:9000/stations/"), None);
    }

    #[test]
    fn language_names_round_trip_through_labels() {
        for language in Language::ALL {
            assert_eq!(Language::from_name(language.label()), Some(language));
        }
        assert_eq!(Language::from_name("ts"), Some(Language::Typescript));
        assert_eq!(Language::from_name("rust"), None);
    }
}
