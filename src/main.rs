use std::process::exit;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use clap::Parser;
use crossbeam::channel::{Receiver, Sender};
use log::{error, info, warn};
use parking_lot::deadlock;
use peer_directory::common::common::setup_logging;
use peer_directory::config::structs::configuration::Configuration;
use peer_directory::registry::structs::registry::Registry;
use peer_directory::server::server::directory_service;
use peer_directory::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file("config.toml") {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let bind_address = match config.server.socket_address(args.port) {
        Ok(address) => address,
        Err(error) => {
            error!("[BOOT] {error}");
            exit(101);
        }
    };

    let (shutdown_sender, shutdown) = crossbeam::channel::bounded::<()>(0);
    let registry = Arc::new(Registry::new());

    spawn_signal_thread(shutdown_sender)?;

    if config.deadlock_check_interval > 0 {
        spawn_deadlock_thread(Duration::from_secs(config.deadlock_check_interval), shutdown.clone())?;
    }

    if config.log_console_interval > 0 {
        spawn_stats_thread(registry.clone(), Duration::from_secs(config.log_console_interval), shutdown.clone())?;
    }

    info!("[BOOT] init server {}:{}", bind_address.ip(), bind_address.port());
    let (_, acceptor) = match directory_service(registry.clone(), bind_address, &config.server, shutdown) {
        Ok(service) => service,
        Err(error) => {
            error!("[BOOT] Unable to bind to {bind_address}: {error}");
            exit(1);
        }
    };

    match acceptor.join() {
        Ok(Ok(true)) => info!("[SERVER] All sessions finished"),
        Ok(Ok(false)) => warn!("[SERVER] Exiting with sessions still running"),
        Ok(Err(error)) => {
            error!("[SERVER] Acceptor failed: {error}");
            exit(1);
        }
        Err(_) => {
            error!("[SERVER] Acceptor thread panicked");
            exit(1);
        }
    }

    let stats = registry.get_stats();
    info!("[STATS] Final - Users: {} - Connected: {} - Files: {} | Conn: {} - Rejected: {}",
        stats.users, stats.users_connected, stats.files, stats.connections_handled, stats.connections_rejected);
    info!("Server shutting down completed");
    Ok(())
}

/// Waits for SIGINT, or SIGTERM on Unix, then drops the shutdown sender.
fn spawn_signal_thread(shutdown_sender: Sender<()>) -> std::io::Result<()>
{
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    thread::Builder::new()
        .name(String::from("signals"))
        .spawn(move || {
            runtime.block_on(wait_for_signal());
            info!("Shutdown request received, shutting down...");
            drop(shutdown_sender);
        })?;
    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal()
{
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(error) => {
            warn!("[BOOT] Unable to listen for SIGTERM: {error}");
            let _ = tokio::signal::ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal()
{
    let _ = tokio::signal::ctrl_c().await;
}

fn spawn_deadlock_thread(interval: Duration, shutdown: Receiver<()>) -> std::io::Result<()>
{
    info!("[BOOT] Starting thread for deadlocks...");
    thread::Builder::new()
        .name(String::from("deadlocks"))
        .spawn(move || {
            let ticker = crossbeam::channel::tick(interval);
            loop {
                crossbeam::channel::select! {
                    recv(ticker) -> _ => {
                        let deadlocks = deadlock::check_deadlock();
                        if !deadlocks.is_empty() {
                            error!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                            for (i, threads) in deadlocks.iter().enumerate() {
                                error!("[DEADLOCK] #{i}");
                                for t in threads {
                                    error!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                    error!("[DEADLOCK] {:#?}", t.backtrace());
                                }
                            }
                        }
                    }
                    recv(shutdown) -> _ => {
                        info!("[BOOT] Shutting down thread for deadlocks...");
                        return;
                    }
                }
            }
        })?;
    Ok(())
}

fn spawn_stats_thread(registry: Arc<Registry>, interval: Duration, shutdown: Receiver<()>) -> std::io::Result<()>
{
    info!("[BOOT] Starting thread for console updates with {} seconds delay...", interval.as_secs());
    thread::Builder::new()
        .name(String::from("stats"))
        .spawn(move || {
            let ticker = crossbeam::channel::tick(interval);
            loop {
                crossbeam::channel::select! {
                    recv(ticker) -> _ => {
                        let stats = registry.get_stats();
                        info!(
                            "[STATS] Users: {} - Connected: {} - Files: {} | Conn: {} - Rejected: {} | OK: {} - Failed: {} - Framing: {} - Unknown: {}",
                            stats.users, stats.users_connected, stats.files,
                            stats.connections_handled, stats.connections_rejected,
                            stats.requests_ok, stats.requests_failed, stats.framing_errors, stats.unknown_operations
                        );
                    }
                    recv(shutdown) -> _ => {
                        info!("[BOOT] Shutting down thread for console updates...");
                        return;
                    }
                }
            }
        })?;
    Ok(())
}
