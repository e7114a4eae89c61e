use clap::Parser;
use memphis_console::config::ConsoleConfig;
use memphis_console::error::Result;
use memphis_console::event::{Event, EventHandler};
use memphis_console::flags::{Flag, FlagStore};
use memphis_console::sdk::{self, BrokerHost, CodeTab, Language, SdkViewer};
use memphis_console::terminal::{self, ConsoleTerminal};
use std::time::Duration;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "memphis-sdk-example")]
#[command(author, version, about = "Producer and consumer code samples for a Memphis station")]
struct Args {
    /// Station to show code for
    #[arg(long, conflicts_with = "location")]
    station: Option<String>,

    /// Console location to take the station from, e.g. http://localhost:9000/stations/orders
    #[arg(long)]
    location: Option<String>,

    /// go, nodejs, typescript or python
    #[arg(long, default_value = "go")]
    language: String,

    /// Start on the consumer tab
    #[arg(long)]
    consumer: bool,

    /// Hide the Producer/Consumer tabs and show only the starting one
    #[arg(long)]
    no_tabs: bool,

    /// Print the sample to stdout instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Deployment kind; stored in the flag file ("docker", "k8s")
    #[arg(long)]
    env: Option<String>,

    /// Kubernetes namespace; stored in the flag file
    #[arg(long)]
    namespace: Option<String>,

    /// Path to console config file (default: ~/.config/memphis-console/console.toml)
    #[arg(long)]
    config: Option<String>,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if terminal::init_logging(args.log_file.as_deref()) {
        info!("Starting memphis-sdk-example");
    }

    let config = match args.config.as_deref() {
        Some(path) => ConsoleConfig::load_from(path).unwrap_or_default(),
        None => ConsoleConfig::load().unwrap_or_default(),
    };

    let mut flags = FlagStore::open(config.flags_path())?;
    if let Some(ref env) = args.env {
        flags.set(Flag::Env, env)?;
    }
    if let Some(ref namespace) = args.namespace {
        flags.set(Flag::Namespace, namespace)?;
    }

    let station = args
        .station
        .clone()
        .or_else(|| args.location.as_deref().and_then(sdk::station_from_location))
        .unwrap_or_else(|| {
            warn!("No station given, leaving the placeholder name");
            "<station_name>".to_string()
        });

    let language = Language::from_name(&args.language).unwrap_or_else(|| {
        warn!("Unknown language {}, using Go", args.language);
        Language::Go
    });
    let tab = if args.consumer {
        CodeTab::Consumer
    } else {
        CodeTab::Producer
    };

    let host = BrokerHost::from_flags(config.is_sandbox(), &flags).hostname();
    info!("Rendering {} sample for {} on {}", language.label(), station, host);

    if args.print {
        let example = sdk::render_example(language, &host, &station);
        println!("$ {}\n", example.installation);
        println!("{}", example.code(tab));
        return Ok(());
    }

    let mut term = terminal::setup()?;
    let viewer = SdkViewer::new(host, station, language, tab).with_tabs(!args.no_tabs);
    let result = run_viewer(&mut term, viewer).await;
    terminal::restore()?;

    if let Err(ref e) = result {
        error!("SDK example error: {}", e);
    }

    result
}

async fn run_viewer(
    term: &mut ConsoleTerminal,
    mut viewer: SdkViewer,
) -> Result<()> {
    let mut events = EventHandler::new(Duration::from_millis(250));

    loop {
        term.draw(|frame| sdk::ui::draw(frame, &viewer))
            .map_err(terminal::terminal_error)?;

        match events.next().await {
            Some(Event::Key(key)) => viewer.handle_key(key),
            Some(Event::Resize) | Some(Event::Tick) => {}
            None => break,
        }

        if viewer.should_exit {
            break;
        }
    }

    Ok(())
}
