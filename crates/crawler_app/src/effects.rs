use std::sync::mpsc;
use std::thread;

use client_logging::{client_info, client_warn};
use crawler_api::{ClientEvent, ClientHandle, ClientSettings, JobRecord};
use crawler_core::{Effect, JobPosting, Msg, ReportOutcome, SearchOutcome};

/// Bridges the pure core to the background API client: effects go out as
/// client commands, completions come back as core messages.
pub struct EffectRunner {
    handle: ClientHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: ClientSettings) -> Self {
        let (handle, event_rx) = ClientHandle::new(settings);
        spawn_event_loop(event_rx, msg_tx);
        Self { handle }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs { generation, url } => {
                    client_info!("FetchJobs generation={} url={}", generation, url);
                    self.handle.fetch_jobs(generation, url);
                }
                Effect::SendReport { email, job_ids } => {
                    client_info!("SendReport recipient={} jobs={}", email, job_ids.len());
                    self.handle.send_report(email, job_ids);
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        // Ends when the client handle is dropped and the event channel closes.
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                ClientEvent::SearchCompleted { generation, result } => {
                    let outcome = match result {
                        Ok(records) => {
                            SearchOutcome::Loaded(records.into_iter().map(to_posting).collect())
                        }
                        Err(err) => {
                            client_warn!("search failed: {err}");
                            SearchOutcome::Failed
                        }
                    };
                    Msg::SearchFinished {
                        generation,
                        outcome,
                    }
                }
                ClientEvent::ReportCompleted { result } => {
                    let outcome = match result {
                        Ok(()) => ReportOutcome::Accepted,
                        Err(err) => {
                            client_warn!("email report failed: {err}");
                            ReportOutcome::Failed
                        }
                    };
                    Msg::ReportFinished { outcome }
                }
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn to_posting(record: JobRecord) -> JobPosting {
    JobPosting {
        id: record.id,
        job_name: record.job_name,
        company: record.company,
        description: record.description,
        salary: record.salary,
        work_type: record.type_of_work,
        location: record.location,
        link: record.link,
    }
}
