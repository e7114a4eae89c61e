use clap::Parser;
use memphis_console::api;
use memphis_console::config::ConsoleConfig;
use memphis_console::error::Result;
use memphis_console::event::{Event, EventHandler};
use memphis_console::flags::{Flag, FlagStore};
use memphis_console::getstarted::{self, GetStartedApp};
use memphis_console::navigation::ConsoleNavigator;
use memphis_console::terminal::{self, ConsoleTerminal};
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "memphis-get-started")]
#[command(author, version, about = "Get-started wizard for the Memphis broker console")]
struct Args {
    /// Path to console config file (default: ~/.config/memphis-console/console.toml)
    #[arg(long)]
    config: Option<String>,

    /// Answer every broker call with canned data instead of the network
    #[arg(long)]
    dryrun: bool,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    log_file: Option<String>,

    /// Show the wizard even if it was finished or skipped before
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if terminal::init_logging(args.log_file.as_deref()) {
        info!("Starting memphis-get-started");
    }

    let mut config = match args.config.as_deref() {
        Some(path) => ConsoleConfig::load_from(path).unwrap_or_default(),
        None => ConsoleConfig::load().unwrap_or_default(),
    };
    if args.dryrun {
        config.general.dryrun = true;
    }

    let flags = FlagStore::open(config.flags_path())?;
    if flags.get_bool(Flag::SkipGetStarted) && !args.force {
        info!("Get started already finished or skipped");
        println!("Get started was already completed. Run with --force to show it again.");
        return Ok(());
    }

    let mut term = terminal::setup()?;
    let result = run_get_started(&mut term, &config, flags).await;
    terminal::restore()?;

    match result {
        Ok(Some(url)) => {
            println!("Continue in the console: {url}");
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            error!("Get started error: {}", e);
            Err(e)
        }
    }
}

/// Run the wizard until it exits. Returns the console URL it navigated to.
async fn run_get_started(
    term: &mut ConsoleTerminal,
    config: &ConsoleConfig,
    flags: FlagStore,
) -> Result<Option<String>> {
    let mut events = EventHandler::new(Duration::from_millis(250));

    let broker = api::create_api(&config.api, config.general.dryrun)?;
    let navigator = ConsoleNavigator::new(&config.console.url);

    let mut app = GetStartedApp::new(config, broker, flags, navigator);
    app.mount();

    loop {
        term.draw(|frame| getstarted::ui::draw(frame, &app))
            .map_err(terminal::terminal_error)?;

        // Terminal input and broker completions both drive the wizard
        tokio::select! {
            Some(event) = events.next() => match event {
                Event::Key(key) => {
                    if let Some(action) = app.handle_key(key) {
                        app.perform(action).await;
                    }
                }
                Event::Resize => {}
                Event::Tick => app.tick(),
            },
            Some(envelope) = app.next_message() => app.handle_task_message(envelope),
        }

        if app.should_exit {
            break;
        }
    }

    Ok(app.navigator().target_url())
}
