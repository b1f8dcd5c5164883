use std::time::Duration;

use crate::contacts::model::Record;
use crate::contacts::parse::parse_contacts;
use crate::fetch::error::FetchError;

/// Источник справочника: без параметров, заголовков и авторизации
pub const CONTACTS_URL: &str =
    "https://drive.google.com/u/0/uc?id=1-KO-9GA3NzSgIc1dkAsNm8Dqw0fuPxcR&export=download";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Fetcher {
    client: reqwest::Client,
    url: String,
}

impl Fetcher {
    pub fn new(url: &str) -> Self {
        Fetcher {
            client: reqwest::Client::new(),
            url: url.to_string(),
        }
    }

    /// Полная выгрузка справочника: GET, чтение тела целиком, разбор JSON
    pub async fn get_all(&self) -> Result<Vec<Record>, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body = resp.text().await?;
        Ok(parse_contacts(&body)?)
    }
}
