//! In-memory catalog for controller tests.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, ProtocolError, TransportError};
use crate::page::{Page, PageRequest, SortDirection};
use crate::record::{Book, Checkout, Resource, ResourceKind};
use crate::traits::CatalogClient;
use crate::Result;

pub fn book(id: &str, title: &str, year: i32) -> Book {
    Book {
        id: id.to_string(),
        title: Some(title.to_string()),
        author: Some("Unknown".to_string()),
        genre: Some("Fiction".to_string()),
        year: Some(year),
        added: Some("2023-01-01".to_string()),
        check_out_count: Some(0),
        status: Some("AVAILABLE".to_string()),
        due_date: None,
        comment: None,
    }
}

pub fn checkout(id: &str, borrower: &str, book: Book) -> Checkout {
    Checkout {
        id: id.to_string(),
        borrower_first_name: Some(borrower.to_string()),
        borrower_last_name: Some("Doe".to_string()),
        borrowed_book: book,
        checked_out_date: Some("2024-01-01".to_string()),
        due_date: Some("2024-02-01".to_string()),
        returned_date: None,
    }
}

#[derive(Default)]
struct MockState {
    records: HashMap<ResourceKind, Vec<Value>>,
    requests: Vec<(ResourceKind, PageRequest)>,
    saves: Vec<Value>,
    deletes: Vec<(ResourceKind, String)>,
    fetch_delays: HashMap<u32, Duration>,
    fail_fetches: bool,
    fail_saves: bool,
    fail_deletes: bool,
}

/// A catalog held in memory that records every call it receives.
#[derive(Default)]
pub struct MockCatalog {
    state: Mutex<MockState>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records<R: Resource>(self, records: &[R]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.records.insert(
                R::KIND,
                records
                    .iter()
                    .map(|r| serde_json::to_value(r).unwrap())
                    .collect(),
            );
        }
        self
    }

    /// Delay responses for the given page index.
    pub fn delay_page(&self, page_index: u32, delay: Duration) {
        self.state
            .lock()
            .unwrap()
            .fetch_delays
            .insert(page_index, delay);
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.state.lock().unwrap().fail_fetches = fail;
    }

    pub fn fail_saves(&self, fail: bool) {
        self.state.lock().unwrap().fail_saves = fail;
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.state.lock().unwrap().fail_deletes = fail;
    }

    pub fn requests(&self) -> Vec<(ResourceKind, PageRequest)> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn saves(&self) -> Vec<Value> {
        self.state.lock().unwrap().saves.clone()
    }

    pub fn deletes(&self) -> Vec<(ResourceKind, String)> {
        self.state.lock().unwrap().deletes.clone()
    }

    fn unavailable() -> Error {
        TransportError::Connection {
            message: "backend unavailable".to_string(),
        }
        .into()
    }
}

fn lookup<'a>(value: &'a Value, path: &str) -> &'a Value {
    path.split('.').fold(value, |v, key| v.get(key).unwrap_or(&Value::Null))
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

#[async_trait]
impl CatalogClient for MockCatalog {
    async fn fetch_page<R: Resource>(&self, request: &PageRequest) -> Result<Page<R>> {
        let (delay, fail) = {
            let mut state = self.state.lock().unwrap();
            state.requests.push((R::KIND, request.clone()));
            (
                state.fetch_delays.get(&request.page_index()).copied(),
                state.fail_fetches,
            )
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if fail {
            return Err(Self::unavailable());
        }

        let mut all = self
            .state
            .lock()
            .unwrap()
            .records
            .get(&R::KIND)
            .cloned()
            .unwrap_or_default();

        if let Some(sort) = request.sort() {
            all.sort_by(|a, b| {
                let ordering = compare(lookup(a, &sort.column), lookup(b, &sort.column));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let size = request.page_size() as usize;
        let content = all
            .iter()
            .skip(request.page_index() as usize * size)
            .take(size)
            .map(|v| serde_json::from_value(v.clone()).unwrap())
            .collect();

        Ok(Page {
            content,
            total_elements: all.len() as u64,
            page_index: request.page_index(),
            page_size: request.page_size(),
        })
    }

    async fn get<R: Resource>(&self, id: &str) -> Result<R> {
        let state = self.state.lock().unwrap();
        if state.fail_fetches {
            return Err(Self::unavailable());
        }
        state
            .records
            .get(&R::KIND)
            .and_then(|records| records.iter().find(|r| r["id"] == id))
            .map(|r| serde_json::from_value(r.clone()).unwrap())
            .ok_or_else(|| ProtocolError::new(404, None, Some("not found".to_string())).into())
    }

    async fn save<R: Resource>(&self, record: &R) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let value = serde_json::to_value(record).unwrap();
        state.saves.push(value.clone());
        if state.fail_saves {
            return Err(Self::unavailable());
        }
        if let Some(records) = state.records.get_mut(&R::KIND) {
            if let Some(slot) = records.iter_mut().find(|r| r["id"] == record.id()) {
                *slot = value;
            }
        }
        Ok(())
    }

    async fn delete<R: Resource>(&self, id: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.deletes.push((R::KIND, id.to_string()));
        if state.fail_deletes {
            return Err(Self::unavailable());
        }
        if let Some(records) = state.records.get_mut(&R::KIND) {
            records.retain(|r| r["id"] != id);
        }
        Ok(())
    }
}
