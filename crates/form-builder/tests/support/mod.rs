#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use form_builder::{FormSender, SendError};
use form_spec::OutboundPayload;
use tokio::sync::Notify;

/// Records every payload and answers with a fixed result.
pub struct RecordingSender {
    payloads: Mutex<Vec<OutboundPayload>>,
    reject_with: Option<u16>,
}

impl RecordingSender {
    pub fn accepting() -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            reject_with: None,
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            payloads: Mutex::new(Vec::new()),
            reject_with: Some(status),
        }
    }

    pub fn payloads(&self) -> Vec<OutboundPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormSender for RecordingSender {
    async fn send(&self, payload: &OutboundPayload) -> Result<(), SendError> {
        self.payloads.lock().unwrap().push(payload.clone());
        match self.reject_with {
            Some(status) => Err(SendError::Rejected { status }),
            None => Ok(()),
        }
    }
}

/// Holds every request until the gate is opened.
pub struct GatedSender {
    pub gate: Notify,
    calls: AtomicUsize,
}

impl GatedSender {
    pub fn new() -> Self {
        Self {
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormSender for GatedSender {
    async fn send(&self, _payload: &OutboundPayload) -> Result<(), SendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(())
    }
}
