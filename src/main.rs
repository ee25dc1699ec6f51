//! Presenter Picker CLI
//!
//! Edits the stored roster and runs draws in the terminal.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use presenter_picker::adapters::terminal::{render_roster, render_snapshot};
use presenter_picker::adapters::{FileRosterStore, TracingEventPublisher, TransientNotifier};
use presenter_picker::application::{
    ClearRosterCommand, ClearRosterHandler, ClearRosterResult, LoadRosterHandler,
    LoadRosterQuery, SaveRosterCommand, SaveRosterHandler, SelectionConfig, SelectionController,
    SortRosterCommand, SortRosterHandler,
};
use presenter_picker::config::{AppConfig, LoggingConfig};
use presenter_picker::domain::roster::RosterError;
use presenter_picker::domain::selection::SelectionPhase;
use presenter_picker::ports::{EventPublisher, RosterStore};

#[derive(Parser, Debug)]
#[command(name = "presenter-picker")]
#[command(about = "Draw this week's presenters from the team roster")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the stored roster
    List,

    /// Replace the roster; reads one name per line from stdin when no names are given
    Save { names: Vec<String> },

    /// Sort the stored roster A-Z
    Sort,

    /// Remove every name from the roster
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Run a draw over the stored roster (Ctrl-C cancels)
    Draw,
}

struct App {
    store: Arc<dyn RosterStore>,
    notifier: Arc<TransientNotifier>,
    publisher: Arc<dyn EventPublisher>,
    selection: Arc<SelectionController>,
}

impl App {
    fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn RosterStore> = Arc::new(FileRosterStore::new(
            &config.storage.data_dir,
            config.storage.key.clone(),
        ));
        let notifier = Arc::new(TransientNotifier::new(config.notifications.display()));
        let publisher: Arc<dyn EventPublisher> = Arc::new(TracingEventPublisher::new());
        let selection = Arc::new(SelectionController::with_config(
            store.clone(),
            notifier.clone(),
            publisher.clone(),
            SelectionConfig::from(&config.draw),
        ));

        Self {
            store,
            notifier,
            publisher,
            selection,
        }
    }

    async fn stored_text(&self) -> String {
        LoadRosterHandler::new(self.store.clone())
            .handle(LoadRosterQuery)
            .await
            .to_text()
    }

    /// Prints the notification on screen, if one is still visible.
    fn show_notification(&self) {
        if let Some(message) = self.notifier.current() {
            eprintln!("{}", message);
        }
    }

    async fn list(&self) -> Result<()> {
        let roster = LoadRosterHandler::new(self.store.clone())
            .handle(LoadRosterQuery)
            .await;
        print!("{}", render_roster(&roster));
        Ok(())
    }

    async fn save(&self, names: Vec<String>) -> Result<()> {
        let text = if names.is_empty() {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read names from stdin")?;
            text
        } else {
            names.join("\n")
        };

        let result = SaveRosterHandler::new(
            self.store.clone(),
            self.notifier.clone(),
            self.publisher.clone(),
        )
        .handle(SaveRosterCommand { text })
        .await?;

        self.show_notification();
        println!("({})", result.roster.count_label());
        Ok(())
    }

    async fn sort(&self) -> Result<()> {
        let text = self.stored_text().await;
        let sorted = SortRosterHandler::new(
            self.store.clone(),
            self.notifier.clone(),
            self.publisher.clone(),
        )
        .handle(SortRosterCommand { text })
        .await?;

        match sorted {
            Some(result) => {
                self.show_notification();
                print!("{}", render_roster(&result.roster));
            }
            None => println!("Roster is empty, nothing to sort."),
        }
        Ok(())
    }

    async fn clear(&self, yes: bool) -> Result<()> {
        let handler = ClearRosterHandler::new(
            self.store.clone(),
            self.notifier.clone(),
            self.publisher.clone(),
            self.selection.clone(),
        );
        let text = self.stored_text().await;

        let result = match handler
            .handle(ClearRosterCommand {
                text: text.clone(),
                confirmed: yes,
            })
            .await
        {
            Err(RosterError::ConfirmationRequired) => {
                if !confirm("Clear all names? [y/N] ").await? {
                    println!("Nothing cleared.");
                    return Ok(());
                }
                handler
                    .handle(ClearRosterCommand {
                        text,
                        confirmed: true,
                    })
                    .await?
            }
            other => other?,
        };

        match result {
            ClearRosterResult::NothingToClear => println!("Roster is already empty."),
            ClearRosterResult::Cleared(_) => self.show_notification(),
        }
        Ok(())
    }

    async fn draw(&self) -> Result<()> {
        let roster = LoadRosterHandler::new(self.store.clone())
            .handle(LoadRosterQuery)
            .await;

        let mut snapshots = self.selection.subscribe();
        if let Err(e) = self.selection.start(roster.names()).await {
            self.show_notification();
            return Err(e.into());
        }

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    print!("{}", render_snapshot(&snapshot));
                    if snapshot.phase != SelectionPhase::Selecting {
                        break;
                    }
                }
                _ = &mut ctrl_c => {
                    self.selection.cancel().await;
                    println!("Draw cancelled.");
                    break;
                }
            }
        }
        Ok(())
    }
}

async fn confirm(prompt: &str) -> Result<bool> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await
        .context("failed to read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Logs go to stderr so stdout stays clean for the roster and draw output.
    let json_layer = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json)
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config.logging);

    let cli = Cli::parse();
    info!(command = ?cli.command, data_dir = %config.storage.data_dir.display(), "Starting");

    let app = App::new(&config);
    match cli.command {
        Command::List => app.list().await,
        Command::Save { names } => app.save(names).await,
        Command::Sort => app.sort().await,
        Command::Clear { yes } => app.clear(yes).await,
        Command::Draw => app.draw().await,
    }
}
