//! JSON-over-HTTP front end built on `axum`.
//!
//! Not-found failures map to `404`, validation and duplicate-name failures
//! to `400`, and creations to `201`.

mod dto;
mod error;
mod routes;

pub use dto::{
    CheckQuery, CreateProjectRequest, CreateTaskRequest, DeadlineGroupDto, DeadlineQuery,
    ProjectDto, ProjectGroupDto, TaskDto, TasksQuery, parse_deadline,
};
pub use error::{ApiError, ApiResult, status_for};
pub use routes::router;

use axum::Router;
use std::future::Future;
use tokio::{io, net::TcpListener};
use tracing::info;

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns any I/O error raised by the listener.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!(address = %listener.local_addr()?, "http server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("http server stopped");
    Ok(())
}
