use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::watch;

use growthhelper::commands::{
    create_all_handlers, CommandContext, CommandRegistry, MessageDispatcher,
};
use growthhelper::core::Config;
use growthhelper::features::dialogue::ScheduleDialog;
use growthhelper::features::reminders::{JobRegistry, ReminderScheduler};
use growthhelper::features::tips::TipLibrary;
use growthhelper::transport::console::{spawn_stdin_reader, ConsoleNotifier};
use growthhelper::transport::Notifier;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting GrowthHelper bot...");

    // Load the tip list from config file, fall back to the built-in ideas
    let tips = match TipLibrary::load(&config.tips_path) {
        Ok(library) => {
            info!("📄 Loaded {} tips from {}", library.tips.len(), config.tips_path);
            library
        }
        Err(e) => {
            if std::path::Path::new(&config.tips_path).exists() {
                error!("❌ Failed to load tips from {}: {e}", config.tips_path);
            } else {
                info!(
                    "📄 No tip file found at {} - using the built-in list",
                    config.tips_path
                );
            }
            TipLibrary::default()
        }
    };

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let jobs = Arc::new(JobRegistry::new());
    let scheduler = Arc::new(
        ReminderScheduler::new(jobs, notifier.clone())
            .with_tick(Duration::from_secs(config.tick_seconds)),
    );
    let dialog = Arc::new(ScheduleDialog::new(scheduler.clone()));

    let ctx = Arc::new(CommandContext::new(
        dialog,
        scheduler.clone(),
        tips,
        notifier,
    ));

    let mut registry = CommandRegistry::new();
    for handler in create_all_handlers() {
        registry.register(handler);
    }
    let mut commands: Vec<&str> = registry.command_names().copied().collect();
    commands.sort_unstable();
    info!("Registered {} commands: /{}", registry.len(), commands.join(", /"));
    let dispatcher = MessageDispatcher::new(registry, ctx);

    // Start the reminder clock
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let clock = scheduler.clone();
    let clock_handle = tokio::spawn(async move {
        clock.run(shutdown_rx).await;
    });

    info!("🤖 Console transport ready - type `<user-id> <text>` (e.g. `alice /schedule`)");

    let mut inbound = spawn_stdin_reader();
    loop {
        tokio::select! {
            maybe_msg = inbound.recv() => {
                match maybe_msg {
                    Some(msg) => {
                        let dispatcher = dispatcher.clone();
                        tokio::spawn(async move {
                            if let Err(e) = dispatcher.dispatch(&msg).await {
                                error!("Error handling message from user {}: {e:#}", msg.user_id);
                            }
                        });
                    }
                    None => {
                        info!("Input stream closed, shutting down");
                        break;
                    }
                }
            }
            _ = signal::ctrl_c() => {
                info!("Ctrl+C received, shutting down");
                break;
            }
        }
    }

    // Stop the clock before exiting so no pending tick fires on the way out
    let _ = shutdown_tx.send(true);
    let _ = clock_handle.await;

    info!("Goodbye");
    Ok(())
}
