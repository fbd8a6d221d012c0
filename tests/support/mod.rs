#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use fractic_household_finance::{
    entities::{ApiRequest, Family, Member, OriginKind, UnifiedRecord},
    errors::TransportFailed,
    transport::ApiTransport,
};
use fractic_server_error::ServerError;

/// Answers GETs from a fixed url → body table and remembers what was asked.
#[derive(Default)]
pub struct FakeTransport {
    bodies: HashMap<String, String>,
    seen: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn get(&self, request: &ApiRequest) -> Result<String, ServerError> {
        let url = request.url();
        self.seen.lock().expect("lock").push(url.clone());
        self.bodies
            .get(&url)
            .cloned()
            .ok_or_else(|| TransportFailed::new(&url))
    }
}

pub const FAMILIES_JSON: &str = r#"[
    {"id": "f1", "name": "Casa", "members": [
        {"id": "p1", "name": "Ana"},
        {"id": "p2", "name": "Bruno"}
    ]},
    {"id": "f2", "name": "Praia", "members": [{"id": "p3", "name": "Caio"}]}
]"#;

pub fn families() -> Vec<Family> {
    vec![Family {
        id: "f1".into(),
        name: "Casa".into(),
        members: vec![
            Member {
                id: "p1".into(),
                name: "Ana".into(),
            },
            Member {
                id: "p2".into(),
                name: "Bruno".into(),
            },
        ],
    }]
}

pub fn record(origin: OriginKind, id: &str, description: &str, date: &str) -> UnifiedRecord {
    let mut r = UnifiedRecord::new(origin, id);
    r.description = description.to_string();
    r.date = date.to_string();
    r.value = 10.0;
    r
}
