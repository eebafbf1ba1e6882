//! Oakmont Power contact CLI

use clap::{Parser, Subcommand};
use oakmont_contact::{
    ContactConfig, FieldId, FormState, HttpTransport, StatusBoard, SubmissionController,
    SubmissionStatus, TokioScheduler,
};
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "oakmont-contact")]
#[command(about = "Send an inquiry to the Oakmont Power contact endpoint")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Contact endpoint (defaults to OAKMONT_CONTACT_ENDPOINT or the built-in URL)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// How long the status stays visible, in milliseconds
    #[arg(long, global = true)]
    hide_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one inquiry
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", e);
    }

    let mut config = ContactConfig::default();
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(hide_ms) = cli.hide_ms {
        config = config.with_hide_delay_ms(hide_ms);
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        std::process::exit(2);
    }

    match cli.command {
        Commands::Send {
            name,
            email,
            message,
        } => cmd_send(config, name, email, message).await,
        Commands::Config => cmd_config(&config),
    }
}

async fn cmd_send(config: ContactConfig, name: String, email: String, message: String) {
    let scheduler = match TokioScheduler::current() {
        Ok(scheduler) => scheduler,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let form = FormState::new();
    form.update_field(FieldId::Name, name);
    form.update_field(FieldId::Email, email);
    form.update_field(FieldId::Message, message);

    let controller = SubmissionController::new(
        HttpTransport::new(&config),
        scheduler,
        form,
        StatusBoard::new(),
        config.hide_delay(),
    );

    info!("Sending inquiry to {}", config.endpoint);

    let submission = controller.submit_current();
    print_status(&controller.status().current());

    let outcome = submission.await;
    print_status(&controller.status().current());

    tokio::time::sleep(config.hide_delay() + Duration::from_millis(50)).await;
    print_status(&controller.status().current());

    if !outcome.is_delivered() {
        error!("Inquiry not delivered: {:?}", outcome);
        std::process::exit(1);
    }
}

fn cmd_config(config: &ContactConfig) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to render configuration: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_status(status: &SubmissionStatus) {
    let visibility = if status.visible { "shown" } else { "hidden" };
    let tone = if status.is_success { "ok" } else { "error" };
    println!("[{:>6}] [{:<5}] {}", visibility, tone, status.message);
}
