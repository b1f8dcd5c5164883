use actix_web::{web, App, HttpServer};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use contacts_directory::api::handlers::{contacts_handler, search_handler};
use contacts_directory::api::server_api::Directory;
use contacts_directory::fetch::fetcher::CONTACTS_URL;

const BIND_ADDR: (&str, u16) = ("0.0.0.0", 8080);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let directory = web::Data::new(Directory::new(CONTACTS_URL));

    // Первичная загрузка справочника; при ошибке стартуем с пустым списком
    if let Err(e) = directory.load_all().await {
        warn!("initial load failed: {e}");
    }

    info!("contacts directory listening on {}:{}", BIND_ADDR.0, BIND_ADDR.1);

    HttpServer::new({
        let directory = directory.clone();
        move || {
            App::new()
                .app_data(directory.clone())
                .route("/contacts", web::get().to(contacts_handler))
                .route("/search", web::get().to(search_handler))
        }
    })
    .bind(BIND_ADDR)?
    .run()
    .await?;

    Ok(())
}
