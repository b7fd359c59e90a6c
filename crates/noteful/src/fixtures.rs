//! Test fixtures and request helpers shared by the endpoint tests.
//!
//! Fixture rows carry the ids a fresh store assigns when they are seeded in
//! order, so responses can be compared against them directly.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use noteful_core::notes::{Folder, NewFolder, NewNote, Note};

use crate::{app::create_app, state::AppState};

pub fn make_folders_array() -> Vec<Folder> {
    (1..=4)
        .map(|id| Folder {
            id,
            folder_name: format!("folder{id}"),
        })
        .collect()
}

/// One note per folder from [`make_folders_array`].
pub fn make_notes_array() -> Vec<Note> {
    (1..=4)
        .map(|id| Note {
            id,
            note_name: format!("note{id}"),
            note_content: format!("content{id}"),
            folder_id: id,
            modified: Utc
                .with_ymd_and_hms(2024, 1, id as u32, 9, 30, 0)
                .unwrap(),
        })
        .collect()
}

/// Returns a folder carrying a script tag and the folder the API must return.
pub fn make_malicious_folder() -> (Folder, Folder) {
    let malicious = Folder {
        id: 1,
        folder_name: r#"Naughty naughty very naughty <script>alert("xss");</script>"#.to_string(),
    };
    let expected = Folder {
        folder_name: r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
            .to_string(),
        ..malicious.clone()
    };
    (malicious, expected)
}

/// Returns a note with XSS in both text fields and the note the API must
/// return. It belongs to the first folder of [`make_folders_array`].
pub fn make_malicious_note() -> (Note, Note) {
    let malicious = Note {
        id: 1,
        note_name: r#"Naughty naughty very naughty <script>alert("xss");</script>"#.to_string(),
        note_content: r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#.to_string(),
        folder_id: 1,
        modified: Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
    };
    let expected = Note {
        note_name: r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
            .to_string(),
        note_content: r#"Bad image <img src="https://url.to.file.which/does-not.exist">. But not <strong>all</strong> bad."#.to_string(),
        ..malicious.clone()
    };
    (malicious, expected)
}

/// Inserts folders straight through the repository, bypassing sanitization.
pub async fn seed_folders(state: &AppState, folders: &[Folder]) {
    for folder in folders {
        let created = state
            .folder_repo
            .create_folder(&NewFolder::new(folder.folder_name.clone()))
            .await
            .unwrap();
        assert_eq!(created.id, folder.id, "fixtures must be seeded into a fresh store");
    }
}

/// Inserts notes straight through the repository, bypassing sanitization.
pub async fn seed_notes(state: &AppState, notes: &[Note]) {
    for note in notes {
        let new_note = NewNote::new(
            note.note_name.clone(),
            note.note_content.clone(),
            note.folder_id,
        )
        .with_modified(note.modified);
        let created = state.note_repo.create_note(&new_note).await.unwrap();
        assert_eq!(created.id, note.id, "fixtures must be seeded into a fresh store");
    }
}

/// The router plus direct access to its state for seeding.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let state = AppState::for_tests().await;
        let router = create_app(state.clone(), Duration::from_secs(10));
        Self { state, router }
    }

    pub async fn raw(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.raw(request).await;
        let status = response.status();
        (status, read_json(response).await)
    }
}

/// Reads a JSON body; an empty body reads as `null`.
pub async fn read_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    json_request("POST", uri, body)
}

pub fn patch_json(uri: &str, body: Value) -> Request<Body> {
    json_request("PATCH", uri, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
