use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use folio::app::App;
use folio::config::{self, ConfigResult};
use folio::contact::ContactClient;
use folio::content;
use folio::notification::NotificationVariant;

/// Browse the studio's site and send a project enquiry from the terminal
#[derive(Parser, Debug)]
#[command(version, about = "Terminal storefront for a small web design studio")]
struct Args {
    /// Site content file (TOML); the built-in studio content is used if omitted
    #[arg(long)]
    content: Option<PathBuf>,

    /// Contact form endpoint, overrides `contact.endpoint` in the config file
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/folio-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Content errors abort before the terminal is touched
    let site = content::load_content(args.content.as_deref())?;

    let endpoint = args
        .endpoint
        .or_else(|| config_result.config.contact.endpoint.clone());
    let contact_client = endpoint.map(ContactClient::spawn);

    let app = App::new(site, contact_client);

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== FOLIO DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/folio-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== FOLIO DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notifications
            .notify("Config", &warning, NotificationVariant::Destructive);
    }

    if app.contact_client.is_none() {
        log::debug!("No contact endpoint configured, form submissions disabled");
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
