use crate::domain::HttpMethod;
use crate::ports::{HttpProber, HttpReply, ProbeRequest, TransportFailure};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Prober returning scripted replies keyed by method and URL.
#[derive(Clone, Default)]
pub struct FakeProber {
    pub replies: HashMap<(HttpMethod, String), Result<HttpReply, TransportFailure>>,
    pub sent_requests: Arc<Mutex<Vec<ProbeRequest>>>,
}

impl FakeProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, method: HttpMethod, url: &str, reply: HttpReply) -> Self {
        self.replies.insert((method, url.to_string()), Ok(reply));
        self
    }

    pub fn status(self, method: HttpMethod, url: &str, status: u16) -> Self {
        self.reply(method, url, HttpReply::new(status))
    }

    pub fn fail(mut self, method: HttpMethod, url: &str, failure: TransportFailure) -> Self {
        self.replies.insert((method, url.to_string()), Err(failure));
        self
    }

    pub fn get_sent_requests(&self) -> Vec<ProbeRequest> {
        self.sent_requests.lock().unwrap().clone()
    }
}

impl HttpProber for FakeProber {
    fn send(&self, request: &ProbeRequest) -> Result<HttpReply, TransportFailure> {
        self.sent_requests.lock().unwrap().push(request.clone());
        self.replies
            .get(&(request.method, request.url.as_str().to_string()))
            .cloned()
            .unwrap_or_else(|| Err(TransportFailure::Other("no scripted reply".to_string())))
    }
}
