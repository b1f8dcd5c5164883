use crate::contacts::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Loading,
}

#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    /// Результат запроса опубликован на экран
    Applied(Vec<Record>),
    /// Пока запрос выполнялся, был выпущен более новый; результат отброшен
    Superseded,
}
