use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::contacts::model::Record;
use crate::fetch::error::FetchError;
use crate::fetch::fetcher::Fetcher;
use crate::search::filter::filter_contacts;
use crate::search::interface::ContactsView;
use crate::search::model::{ControllerState, SearchOutcome};

pub struct SearchController {
    fetcher: Fetcher,
    view: Arc<dyn ContactsView>,
    /// Номер последнего выпущенного запроса
    issued: AtomicU64,
    /// Номер последнего завершившегося запроса, успешного или нет
    completed: AtomicU64,
    /// Публикации строго последовательны: токен сверяется под замком
    publish_lock: Mutex<()>,
}

impl SearchController {
    pub fn new(fetcher: Fetcher, view: Arc<dyn ContactsView>) -> Self {
        SearchController {
            fetcher,
            view,
            issued: AtomicU64::new(0),
            completed: AtomicU64::new(0),
            publish_lock: Mutex::new(()),
        }
    }

    pub fn state(&self) -> ControllerState {
        if self.completed.load(Ordering::SeqCst) < self.issued.load(Ordering::SeqCst) {
            ControllerState::Loading
        } else {
            ControllerState::Idle
        }
    }

    pub async fn load_all(&self) -> Result<SearchOutcome, FetchError> {
        self.search("").await
    }

    /// Поиск по справочнику. Пустой после trim запрос показывает весь список.
    /// Каждый вызов заново выгружает справочник из источника.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, FetchError> {
        let query = query.trim();
        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let contacts = match self.fetcher.get_all().await {
            Ok(contacts) => contacts,
            Err(e) => {
                // отображаемый список не трогаем
                self.completed.fetch_max(token, Ordering::SeqCst);
                return Err(e);
            }
        };

        let contacts = if query.is_empty() {
            contacts
        } else {
            filter_contacts(contacts, query)
        };

        let applied = self.publish(token, contacts.clone());
        self.completed.fetch_max(token, Ordering::SeqCst);

        if applied {
            Ok(SearchOutcome::Applied(contacts))
        } else {
            debug!(token, "stale result discarded");
            Ok(SearchOutcome::Superseded)
        }
    }

    /// Публикация проходит только если запрос все еще самый свежий
    fn publish(&self, token: u64, contacts: Vec<Record>) -> bool {
        let _guard = self.publish_lock.lock().unwrap();
        if token != self.issued.load(Ordering::SeqCst) {
            return false;
        }
        self.view.set_data(contacts);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    struct CapturingView {
        rows: RwLock<Vec<Record>>,
    }

    impl ContactsView for CapturingView {
        fn set_data(&self, contacts: Vec<Record>) {
            *self.rows.write().unwrap() = contacts;
        }
    }

    fn record(name: &str) -> Record {
        Record {
            name: name.to_string(),
            phone: "555-0000".to_string(),
            contact_type: "mobile".to_string(),
        }
    }

    fn controller_with_view() -> (SearchController, Arc<CapturingView>) {
        let view = Arc::new(CapturingView {
            rows: RwLock::new(Vec::new()),
        });
        let controller = SearchController::new(Fetcher::new("http://127.0.0.1:9/"), view.clone());
        (controller, view)
    }

    #[test]
    fn stale_token_is_not_published() {
        let (controller, view) = controller_with_view();

        controller.issued.store(2, Ordering::SeqCst);
        assert!(!controller.publish(1, vec![record("stale")]));
        assert!(view.rows.read().unwrap().is_empty());

        assert!(controller.publish(2, vec![record("current")]));
        assert_eq!(view.rows.read().unwrap()[0].name, "current");
    }

    #[test]
    fn state_follows_issued_and_completed() {
        let (controller, _view) = controller_with_view();

        assert_eq!(controller.state(), ControllerState::Idle);
        controller.issued.store(1, Ordering::SeqCst);
        assert_eq!(controller.state(), ControllerState::Loading);
        controller.completed.store(1, Ordering::SeqCst);
        assert_eq!(controller.state(), ControllerState::Idle);
    }
}
