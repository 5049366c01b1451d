//! Command execution against the host collaborators
//!
//! The runtime owns the model and is driven from the host's event loop:
//! `dispatch` for user events, `process_async_messages` once per tick to
//! apply finished renders. Renders run on one background worker and come
//! back as `Msg::Render` over an mpsc channel.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::csv::CodecError;
use crate::host::{DocumentHost, FormattedTextRenderer, LinkNavigator};
use crate::messages::{DocumentMsg, Msg, RenderMsg};
use crate::model::{CellRef, GridModel};
use crate::update::update;

struct RenderJob {
    cell: CellRef,
    generation: u64,
    raw: String,
    source_path: PathBuf,
}

pub struct GridRuntime {
    model: GridModel,
    navigator: Box<dyn LinkNavigator>,
    host: Box<dyn DocumentHost>,
    job_tx: Option<Sender<RenderJob>>,
    worker: Option<JoinHandle<()>>,
    msg_rx: Receiver<Msg>,
    in_flight: usize,
}

impl GridRuntime {
    pub fn new(
        model: GridModel,
        renderer: Arc<dyn FormattedTextRenderer>,
        navigator: Box<dyn LinkNavigator>,
        host: Box<dyn DocumentHost>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let (job_tx, job_rx) = mpsc::channel::<RenderJob>();

        let worker = std::thread::Builder::new()
            .name("tablet-render".to_string())
            .spawn(move || render_worker(renderer, job_rx, msg_tx));
        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!("Failed to start render worker: {}", e);
                None
            }
        };

        Self {
            model,
            navigator,
            host,
            job_tx: Some(job_tx),
            worker,
            msg_rx,
            in_flight: 0,
        }
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    /// Renders requested but not yet applied
    pub fn pending_renders(&self) -> usize {
        self.in_flight
    }

    /// Run one message through update and execute the resulting command.
    /// Returns true if a redraw is needed.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                redraw
            }
            None => false,
        }
    }

    /// Host pushes document text (load or external reload)
    pub fn set_view_data(&mut self, text: impl Into<String>, source_path: impl Into<PathBuf>) -> bool {
        self.dispatch(Msg::Document(DocumentMsg::Load {
            text: text.into(),
            source_path: source_path.into(),
            delimiter: None,
        }))
    }

    /// Host pulls serialized text
    pub fn get_view_data(&self) -> Result<String, CodecError> {
        self.model.get_view_data()
    }

    /// Host empties the view
    pub fn clear(&mut self) -> bool {
        self.dispatch(Msg::Document(DocumentMsg::Clear))
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::RenderCell {
                cell,
                generation,
                raw,
                source_path,
            } => {
                let job = RenderJob {
                    cell,
                    generation,
                    raw,
                    source_path,
                };
                let sent = self
                    .job_tx
                    .as_ref()
                    .is_some_and(|tx| tx.send(job).is_ok());
                if sent {
                    self.in_flight += 1;
                } else {
                    tracing::warn!("Render worker unavailable, {:?} not rendered", cell);
                }
            }
            Cmd::MarkModified => {
                self.model.table.take_dirty();
                self.host.mark_modified();
            }
            Cmd::OpenLink {
                target,
                source_path,
                new_pane,
            } => {
                tracing::debug!("Opening link {:?} (new pane: {})", target, new_pane);
                self.navigator.open(&target, &source_path, new_pane);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Apply every finished render without blocking.
    /// Returns true if a redraw is needed.
    pub fn process_async_messages(&mut self) -> bool {
        let mut needs_redraw = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            needs_redraw |= self.apply_completion(msg);
        }
        needs_redraw
    }

    /// Only messages drained from the worker channel settle a pending render
    fn apply_completion(&mut self, msg: Msg) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.dispatch(msg)
    }

    /// Block until every requested render has been applied, or `timeout`
    /// passes. Returns true if nothing is left pending.
    pub fn wait_for_renders(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.apply_completion(msg);
                }
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::warn!("Render worker gone with {} pending", self.in_flight);
                    self.in_flight = 0;
                    return false;
                }
            }
        }
        true
    }
}

impl Drop for GridRuntime {
    fn drop(&mut self) {
        // Closing the job channel stops the worker
        self.job_tx.take();
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                tracing::error!("Render worker panicked");
            }
        }
    }
}

fn render_worker(
    renderer: Arc<dyn FormattedTextRenderer>,
    jobs: Receiver<RenderJob>,
    results: Sender<Msg>,
) {
    for job in jobs {
        let result = renderer.render(&job.raw, &job.source_path);
        let msg = Msg::Render(RenderMsg::Completed {
            cell: job.cell,
            generation: job.generation,
            result,
        });
        if results.send(msg).is_err() {
            break;
        }
    }
}
