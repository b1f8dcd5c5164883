use crate::contacts::model::Record;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("malformed contacts payload: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Разбор тела ответа: JSON-массив объектов с полями name, phone, type.
/// Ошибка в любом элементе отбрасывает весь результат целиком.
pub fn parse_contacts(body: &str) -> Result<Vec<Record>, ParseError> {
    Ok(serde_json::from_str::<Vec<Record>>(body)?)
}
