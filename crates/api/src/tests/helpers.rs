// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A scripted agent and client fixtures.

use crate::{Agent, BookitClient, FileUpload, Method};
use bookit::{ClientConfig, RequestError};
use bookit_domain::{RoleState, UploadedFile, UserRole};
use bookit_persistence::ClientStores;
use futures::future::ready;
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Mutex;

/// One request seen by the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Value,
}

#[derive(Debug, Default)]
struct Script {
    routes: HashMap<(Method, String), VecDeque<Result<Value, RequestError>>>,
    calls: Vec<Call>,
    uploads: Vec<FileUpload>,
    token: Option<String>,
}

/// Answers each route from a queue. The last queued answer repeats; an
/// unscripted route answers 404.
#[derive(Debug, Default)]
pub struct FakeAgent {
    script: Mutex<Script>,
}

impl FakeAgent {
    /// Replaces every answer for a route with `value`.
    pub fn respond(&self, method: Method, path: &str, value: Value) {
        self.set(method, path, Ok(value));
    }

    /// Replaces every answer for a route with `error`.
    pub fn fail(&self, method: Method, path: &str, error: RequestError) {
        self.set(method, path, Err(error));
    }

    /// Appends an answer for a route.
    pub fn queue(&self, method: Method, path: &str, answer: Result<Value, RequestError>) {
        self.script
            .lock()
            .unwrap()
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(answer);
    }

    fn set(&self, method: Method, path: &str, answer: Result<Value, RequestError>) {
        self.script
            .lock()
            .unwrap()
            .routes
            .insert((method, path.to_string()), VecDeque::from([answer]));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn calls_to(&self, method: Method, path: &str) -> usize {
        self.script
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }

    pub fn uploads(&self) -> Vec<FileUpload> {
        self.script.lock().unwrap().uploads.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.script.lock().unwrap().token.clone()
    }

    fn answer(&self, method: Method, path: &str, body: Value) -> Result<Value, RequestError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(Call {
            method,
            path: path.to_string(),
            body,
        });
        match script.routes.get_mut(&(method, path.to_string())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Err(RequestError::new(404, format!("No route for {method} {path}"))),
        }
    }
}

impl Agent for FakeAgent {
    fn get(&self, path: &str) -> impl Future<Output = Result<Value, RequestError>> + Send {
        ready(self.answer(Method::Get, path, Value::Null))
    }

    fn post(
        &self,
        path: &str,
        body: Value,
    ) -> impl Future<Output = Result<Value, RequestError>> + Send {
        ready(self.answer(Method::Post, path, body))
    }

    fn put(
        &self,
        path: &str,
        body: Value,
    ) -> impl Future<Output = Result<Value, RequestError>> + Send {
        ready(self.answer(Method::Put, path, body))
    }

    fn delete(&self, path: &str) -> impl Future<Output = Result<Value, RequestError>> + Send {
        ready(self.answer(Method::Delete, path, Value::Null))
    }

    fn upload(
        &self,
        file: FileUpload,
    ) -> impl Future<Output = Result<UploadedFile, RequestError>> + Send {
        let count: usize = {
            let mut script = self.script.lock().unwrap();
            script.uploads.push(file.clone());
            script.uploads.len()
        };
        ready(Ok(UploadedFile {
            id: format!("file-{count}"),
            url: format!("https://cdn.test/{}", file.file_name),
        }))
    }

    fn authorize(&self, token: Option<&str>) {
        self.script.lock().unwrap().token = token.map(str::to_string);
    }
}

/// A guest client over in-memory stores.
pub fn guest_client() -> BookitClient<FakeAgent> {
    BookitClient::new(
        FakeAgent::default(),
        ClientConfig::default(),
        ClientStores::in_memory().unwrap(),
    )
}

/// A client restored from a persisted session.
pub fn signed_in_client(role: UserRole, has_brand: bool) -> BookitClient<FakeAgent> {
    let stores: ClientStores = ClientStores::in_memory().unwrap();
    stores
        .session
        .sign_in("token-1", RoleState::new(role, has_brand, false))
        .unwrap();
    BookitClient::new(FakeAgent::default(), ClientConfig::default(), stores)
}

pub fn profile_json(role: &str, has_brand: bool) -> Value {
    json!({
        "id": "u1",
        "phone": "+998901234567",
        "fullName": "Dilnoza",
        "role": role,
        "hasBrand": has_brand
    })
}

pub fn brand_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "ownerUserId": "u1",
        "name": name,
        "category": "barber"
    })
}

pub fn schedule_json(start_time: &str) -> Value {
    json!({
        "id": "s1",
        "ownerBrandId": "b1",
        "workingDays": [
            { "dayOfWeek": 1, "startTime": start_time, "endTime": "18:00" }
        ]
    })
}
