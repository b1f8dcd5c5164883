use crate::contacts::parse::ParseError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Соединение не установлено, оборвано или истек таймаут
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Сервер ответил не-2xx статусом, тело не разбирается
    #[error("server returned status {0}")]
    HttpStatus(StatusCode),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
