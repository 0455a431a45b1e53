//! Runs the task list as an interactive console or an HTTP service.
//!
//! Usage:
//!
//! ```text
//! tasklist [--log <filter>] [--reject-past-deadlines] [console]
//! tasklist [--log <filter>] [--reject-past-deadlines] serve [--bind <addr>]
//! ```
//!
//! Every run starts with an empty in-memory store.

use clap::Parser;
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use tasklist::config::{Cli, Mode};
use tasklist::console::ConsoleSession;
use tasklist::task::{
    adapters::memory::InMemoryTaskStore,
    domain::DeadlinePolicy,
    services::{CommandDispatcher, TaskService},
};
use tasklist::{telemetry, web};
use thiserror::Error;
use tokio::io::{BufReader, stdin, stdout};
use tokio::net::TcpListener;
use tokio::runtime::Builder;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Dispatcher = CommandDispatcher<InMemoryTaskStore, DefaultClock>;

#[derive(Debug, Error)]
enum AppError {
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("console i/o failed: {0}")]
    Console(#[source] std::io::Error),
    #[error("http server failed: {0}")]
    Server(#[source] std::io::Error),
}

fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_filter)?;

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::RuntimeInit)?;
    let dispatcher = build_dispatcher(cli.deadline_policy());

    runtime.block_on(async {
        match cli.mode() {
            Mode::Console => run_console(dispatcher).await,
            Mode::Serve { bind } => run_server(dispatcher, bind).await,
        }
    })?;
    Ok(())
}

fn build_dispatcher(policy: DeadlinePolicy) -> Dispatcher {
    let service = TaskService::new(
        Arc::new(InMemoryTaskStore::new()),
        Arc::new(DefaultClock),
    )
    .with_deadline_policy(policy);
    CommandDispatcher::new(service)
}

async fn run_console(dispatcher: Dispatcher) -> Result<(), AppError> {
    let session = ConsoleSession::new(dispatcher);
    session
        .run(BufReader::new(stdin()), stdout())
        .await
        .map_err(AppError::Console)
}

async fn run_server(dispatcher: Dispatcher, address: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| AppError::Bind { address, source })?;
    web::serve(listener, web::router(dispatcher), shutdown_signal())
        .await
        .map_err(AppError::Server)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => warn!(error = %err, "failed to listen for shutdown signal"),
    }
}
