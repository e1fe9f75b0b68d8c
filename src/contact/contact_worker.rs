//! Contact submission worker
//!
//! Runs form submissions on a background thread so the UI never waits on
//! the network. The thread owns a current-thread tokio runtime; every
//! submission is spawned as its own task, so several can be in flight and
//! each answers independently.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use reqwest::{Client, Method};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::contact_state::ContactMessage;
use crate::network;

/// Requests sent from the UI thread to the worker
#[derive(Debug, Clone)]
pub enum ContactRequest {
    Submit {
        request_id: u64,
        message: ContactMessage,
    },
}

/// Responses sent from the worker back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactResponse {
    Sent { request_id: u64 },
    Failed { request_id: u64 },
}

/// UI-side handle to the worker
#[derive(Debug)]
pub struct ContactClient {
    request_tx: UnboundedSender<ContactRequest>,
    response_rx: Receiver<ContactResponse>,
    next_request_id: u64,
    worker_gone: bool,
}

impl ContactClient {
    pub fn new(
        request_tx: UnboundedSender<ContactRequest>,
        response_rx: Receiver<ContactResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            next_request_id: 1,
            worker_gone: false,
        }
    }

    /// Spawn a worker posting to `endpoint` and return its handle
    pub fn spawn(endpoint: String) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = std::sync::mpsc::channel();
        spawn_worker(endpoint, request_rx, response_tx);
        Self::new(request_tx, response_rx)
    }

    /// Queue a submission. Returns None if the worker has gone away.
    pub fn submit(&mut self, message: ContactMessage) -> Option<u64> {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        self.request_tx
            .send(ContactRequest::Submit {
                request_id,
                message,
            })
            .ok()
            .map(|_| request_id)
    }

    /// Drain every response that has arrived
    pub fn poll(&mut self) -> Vec<ContactResponse> {
        let mut responses = Vec::new();
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.worker_gone {
                        log::error!("Contact worker disconnected");
                    }
                    self.worker_gone = true;
                    break;
                }
            }
        }
        responses
    }

    /// True once the worker has exited; no further responses will arrive
    pub fn worker_gone(&self) -> bool {
        self.worker_gone
    }
}

/// Spawn the worker thread
///
/// Exits once every `ContactRequest` sender is dropped.
pub fn spawn_worker(
    endpoint: String,
    request_rx: UnboundedReceiver<ContactRequest>,
    response_tx: Sender<ContactResponse>,
) {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create contact worker runtime: {}", e);
                return;
            }
        };

        rt.block_on(worker_loop(Client::new(), endpoint, request_rx, response_tx));
    });
}

async fn worker_loop(
    client: Client,
    endpoint: String,
    mut request_rx: UnboundedReceiver<ContactRequest>,
    response_tx: Sender<ContactResponse>,
) {
    let mut in_flight = tokio::task::JoinSet::new();

    loop {
        tokio::select! {
            request = request_rx.recv() => match request {
                Some(ContactRequest::Submit { request_id, message }) => {
                    log::debug!("Submitting contact request {}", request_id);
                    in_flight.spawn(submit(
                        client.clone(),
                        endpoint.clone(),
                        request_id,
                        message,
                        response_tx.clone(),
                    ));
                }
                None => break,
            },
            Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
        }
    }

    // Let submissions already on the wire finish
    while in_flight.join_next().await.is_some() {}
}

async fn submit(
    client: Client,
    endpoint: String,
    request_id: u64,
    message: ContactMessage,
    response_tx: Sender<ContactResponse>,
) {
    let result: Result<serde_json::Value, _> =
        network::request(&client, Method::POST, &endpoint, Some(&message)).await;

    let response = match result {
        Ok(_) => ContactResponse::Sent { request_id },
        Err(e) => {
            log::debug!("Contact request {} failed: {}", request_id, e);
            ContactResponse::Failed { request_id }
        }
    };

    // UI gone - nothing to report to
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "contact_worker_tests.rs"]
mod contact_worker_tests;
