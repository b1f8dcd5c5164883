use std::sync::{Arc, RwLock};

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;

use crate::contacts::model::Record;
use crate::fetch::error::FetchError;
use crate::fetch::fetcher::Fetcher;
use crate::search::controller::SearchController;
use crate::search::interface::ContactsView;
use crate::search::model::SearchOutcome;

#[derive(Serialize)]
pub struct ErrorS {
    pub error: String,
}

/// Отображаемый список: единственный разделяемый ресурс, заменяется только целиком
pub struct DisplayedList {
    rows: RwLock<Vec<Record>>,
}

impl DisplayedList {
    pub fn new() -> Self {
        DisplayedList {
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn snapshot(&self) -> Vec<Record> {
        self.rows.read().unwrap().clone()
    }
}

impl ContactsView for DisplayedList {
    fn set_data(&self, contacts: Vec<Record>) {
        *self.rows.write().unwrap() = contacts;
    }
}

pub struct Directory {
    controller: SearchController,
    view: Arc<DisplayedList>,
}

impl Directory {
    pub fn new(url: &str) -> Self {
        let view = Arc::new(DisplayedList::new());
        let controller = SearchController::new(Fetcher::new(url), view.clone());
        Directory { controller, view }
    }

    pub async fn load_all(&self) -> Result<SearchOutcome, FetchError> {
        self.controller.load_all().await
    }

    pub async fn search(&self, query: &str) -> HttpResponse {
        match self.controller.search(query).await {
            Ok(SearchOutcome::Applied(rows)) => HttpResponse::Ok().json(rows),
            // запрос обогнали более новым: отвечаем тем, что уже на экране
            Ok(SearchOutcome::Superseded) => HttpResponse::Ok().json(self.view.snapshot()),
            Err(e) => {
                error!("search failed: {e}");
                let err = ErrorS {
                    error: format!("{e}"),
                };
                HttpResponse::InternalServerError().json(err)
            }
        }
    }

    pub fn current(&self) -> Vec<Record> {
        self.view.snapshot()
    }
}
