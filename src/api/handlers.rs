use crate::api::server_api::Directory;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

pub async fn search_handler(
    directory: web::Data<Directory>,
    params: web::Query<SearchParams>,
) -> HttpResponse {
    directory.search(&params.query).await
}

pub async fn contacts_handler(directory: web::Data<Directory>) -> HttpResponse {
    HttpResponse::Ok().json(directory.current())
}
