use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_warn;

use crate::client::{ClientSettings, JobsApi, ReqwestJobsApi};
use crate::types::{ApiError, ClientEvent, FailureKind, Generation};

enum ClientCommand {
    FetchJobs { generation: Generation, url: String },
    SendReport { email: String, job_ids: Vec<u64> },
}

/// Drives the backend API from a dedicated thread hosting a tokio runtime.
///
/// Commands go in over a channel; completions come back as [`ClientEvent`]s on
/// the receiver returned from [`ClientHandle::new`]. Overlapping requests are
/// allowed; the caller orders them by generation.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_warn!("client runtime failed to start: {err}");
                    return;
                }
            };
            let api: Arc<dyn JobsApi> = match ReqwestJobsApi::new(settings) {
                Ok(api) => Arc::new(api),
                Err(err) => {
                    // Surface construction failure through the event channel so
                    // in-flight state never sticks.
                    drain_commands_with_error(cmd_rx, event_tx, err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn fetch_jobs(&self, generation: Generation, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::FetchJobs {
            generation,
            url: url.into(),
        });
    }

    pub fn send_report(&self, email: impl Into<String>, job_ids: Vec<u64>) {
        let _ = self.cmd_tx.send(ClientCommand::SendReport {
            email: email.into(),
            job_ids,
        });
    }
}

async fn handle_command(
    api: &dyn JobsApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::FetchJobs { generation, url } => {
            let result = api.submit_url_for_jobs(&url).await;
            let _ = event_tx.send(ClientEvent::SearchCompleted { generation, result });
        }
        ClientCommand::SendReport { email, job_ids } => {
            let result = api.submit_email_report(&email, &job_ids).await;
            let _ = event_tx.send(ClientEvent::ReportCompleted { result });
        }
    }
}

fn drain_commands_with_error(
    cmd_rx: mpsc::Receiver<ClientCommand>,
    event_tx: mpsc::Sender<ClientEvent>,
    err: ApiError,
) {
    client_warn!("jobs api unavailable: {err}");
    while let Ok(command) = cmd_rx.recv() {
        let error = ApiError {
            kind: FailureKind::Network,
            message: err.message.clone(),
        };
        let event = match command {
            ClientCommand::FetchJobs { generation, .. } => ClientEvent::SearchCompleted {
                generation,
                result: Err(error),
            },
            ClientCommand::SendReport { .. } => ClientEvent::ReportCompleted {
                result: Err(error),
            },
        };
        let _ = event_tx.send(event);
    }
}
