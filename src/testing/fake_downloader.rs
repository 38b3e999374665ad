use crate::domain::AppError;
use crate::ports::BinaryDownloader;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use url::Url;

/// Writes a fixed payload instead of touching the network.
#[derive(Clone)]
pub struct FakeDownloader {
    pub requested_urls: Arc<Mutex<Vec<Url>>>,
    pub payload: Vec<u8>,
    pub fail_with_status: Option<u16>,
}

impl FakeDownloader {
    pub fn new() -> Self {
        Self {
            requested_urls: Arc::new(Mutex::new(vec![])),
            payload: b"#!/bin/sh\nexit 0\n".to_vec(),
            fail_with_status: None,
        }
    }

    pub fn failing(status: u16) -> Self {
        Self { fail_with_status: Some(status), ..Self::new() }
    }

    pub fn get_requested_urls(&self) -> Vec<Url> {
        self.requested_urls.lock().unwrap().clone()
    }
}

impl BinaryDownloader for FakeDownloader {
    fn download(&self, url: &Url, destination: &Path) -> Result<(), AppError> {
        self.requested_urls.lock().unwrap().push(url.clone());
        if let Some(status) = self.fail_with_status {
            return Err(AppError::Download {
                url: url.to_string(),
                details: format!("server responded with status {}", status),
            });
        }
        fs::write(destination, &self.payload)?;
        Ok(())
    }
}
