//! In-memory transport for exercising the client without a browser

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::json;

use super::client::ApiClient;
use super::transport::{HttpTransport, TransportError, TransportResponse};

pub const TEST_BASE_URL: &str = "http://api.test";

enum Route {
    Reply(TransportResponse),
    Fail(String),
}

#[derive(Default)]
struct Inner {
    routes: HashMap<String, Route>,
    gates: HashMap<String, oneshot::Receiver<()>>,
    requests: Vec<String>,
}

/// Canned responses keyed by full URL. Keys starting with `/` are relative to
/// [`TEST_BASE_URL`]. Unknown URLs answer 404.
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Rc<RefCell<Inner>>,
}

impl FakeTransport {
    fn key(url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{}", TEST_BASE_URL, url)
        } else {
            url.to_string()
        }
    }

    pub fn respond(&self, url: &str, status: u16, body: impl Into<String>) {
        let response = TransportResponse {
            status,
            body: body.into(),
        };
        self.inner
            .borrow_mut()
            .routes
            .insert(Self::key(url), Route::Reply(response));
    }

    pub fn respond_json(&self, url: &str, status: u16, body: &serde_json::Value) {
        self.respond(url, status, body.to_string());
    }

    pub fn fail(&self, url: &str, message: &str) {
        self.inner
            .borrow_mut()
            .routes
            .insert(Self::key(url), Route::Fail(message.to_string()));
    }

    /// Holds the next request to `url` until the returned sender fires or is dropped
    pub fn gate(&self, url: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.inner.borrow_mut().gates.insert(Self::key(url), rx);
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let gate = {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(url.to_string());
            inner.gates.remove(url)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let inner = self.inner.borrow();
        match inner.routes.get(url) {
            Some(Route::Reply(response)) => Ok(response.clone()),
            Some(Route::Fail(message)) => Err(TransportError(message.clone())),
            None => Ok(TransportResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

pub fn client_for(transport: &FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(transport.clone(), || TEST_BASE_URL.to_string())
}

const SUMMARY: &str = r#"{"totalProjects":1,"activeInvestigations":0,"completedInvestigations":1,"activeWorkOrders":1,"completedWorkOrders":0}"#;

/// One project, investigation and work order plus a matching summary
pub fn dashboard_transport() -> FakeTransport {
    let transport = FakeTransport::default();
    transport.respond_json(
        "/projects",
        200,
        &json!([{
            "id": "1",
            "name": "Smith Residence Solar",
            "address": "123 Oak Street, Sacramento, CA",
            "customer": "John Smith",
            "status": "completed",
            "createdAt": "2025-06-08",
            "type": "residential"
        }]),
    );
    transport.respond_json(
        "/investigations",
        200,
        &json!([{
            "id": "inv-1",
            "projectId": "1",
            "title": "Roof Assessment",
            "summary": "Roof is fine",
            "findings": [],
            "recommendations": [],
            "status": "completed",
            "createdAt": "2025-06-08",
            "processedEvents": [],
            "aiResponse": null
        }]),
    );
    transport.respond_json(
        "/workorders",
        200,
        &json!([{
            "id": "wo-1",
            "projectId": "1",
            "title": "Install",
            "description": "Install panels",
            "tasks": ["Mount"],
            "timeline": "2 weeks",
            "status": "approved",
            "createdAt": "2025-06-09"
        }]),
    );
    transport.respond("/dashboard/summary", 200, SUMMARY);
    transport
}
