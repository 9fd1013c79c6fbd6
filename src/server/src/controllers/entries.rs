use crate::errors::FormdropHttpError;
use crate::params::{app_data, parse_entry, path_param, read_body};

use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};

use libformdrop::constants::MAX_ENTRY_BODY_SIZE;
use libformdrop::view::{EntriesClearedResponse, EntrySavedResponse, ListEntriesResponse};

/// List every stored entry with its parsed data
pub async fn index(req: HttpRequest) -> actix_web::Result<HttpResponse, FormdropHttpError> {
    let app_data = app_data(&req)?;

    let records = app_data.store.list().await?;
    log::debug!(
        "{} found {} entries",
        libformdrop::current_function!(),
        records.len()
    );

    Ok(HttpResponse::Ok().json(ListEntriesResponse::new(records)))
}

/// Save the request body as a new entry, JSON or url encoded form
pub async fn create(
    req: HttpRequest,
    body: web::Payload,
) -> actix_web::Result<HttpResponse, FormdropHttpError> {
    let app_data = app_data(&req)?;
    let body = read_body(body, MAX_ENTRY_BODY_SIZE).await?;
    let entry = parse_entry(&req, &body)?;

    let filename = app_data
        .store
        .save(entry)
        .await
        .inspect_err(|err| log::error!("Error saving entry: {}", err))?;

    Ok(HttpResponse::Ok().json(EntrySavedResponse::new(filename)))
}

/// Download a stored file as an attachment with the same name
pub async fn download(req: HttpRequest) -> actix_web::Result<HttpResponse, FormdropHttpError> {
    let app_data = app_data(&req)?;
    let filename = path_param(&req, "filename")?;
    log::debug!("{} {:?}", libformdrop::current_function!(), filename);

    let path = app_data.store.get(&filename).await?;
    let file = NamedFile::open_async(&path)
        .await?
        .set_content_disposition(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        });

    Ok(file.into_response(&req))
}

/// Remove every file in the data directory
pub async fn clear_all(req: HttpRequest) -> actix_web::Result<HttpResponse, FormdropHttpError> {
    let app_data = app_data(&req)?;

    let removed = app_data.store.delete_all().await?;
    log::info!("All entries removed ({} files)", removed);

    Ok(HttpResponse::Ok().json(EntriesClearedResponse::new(removed)))
}

#[cfg(test)]
mod tests {

    use actix_web::body::to_bytes;
    use actix_web::http::{self, header};

    use chrono::{DateTime, Utc};

    use libformdrop::constants::MAX_ENTRY_BODY_SIZE;
    use libformdrop::error::FormdropError;
    use libformdrop::model::Entry;
    use libformdrop::storage::{EntryStore, LocalEntryStore};
    use libformdrop::test as lib_test;
    use libformdrop::view::{EntriesClearedResponse, EntrySavedResponse, ListEntriesResponse};

    use crate::controllers;
    use crate::test;

    #[actix_web::test]
    async fn test_controllers_entries_index_empty() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let req = test::request(&data_dir, "/api/data");

            let resp = controllers::entries::index(req).await.unwrap();
            assert_eq!(resp.status(), http::StatusCode::OK);
            let list: ListEntriesResponse = test::response_json(resp).await;
            assert!(list.success);
            assert!(list.data.is_empty());

            Ok(data_dir)
        })
        .await
    }

    #[actix_web::test]
    async fn test_controllers_entries_create_json() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let before = Utc::now();
            let (req, body) = test::request_with_body(
                &data_dir,
                "/api/save",
                Some("application/json"),
                br#"{"name":"Ann","age":30}"#.as_slice(),
            )
            .await;

            let resp = controllers::entries::create(req, body).await.unwrap();
            assert_eq!(resp.status(), http::StatusCode::OK);
            let saved: EntrySavedResponse = test::response_json(resp).await;
            assert!(saved.success);
            assert!(saved.filename.starts_with("entry_"));
            assert!(saved.filename.ends_with(".json"));
            assert!(!saved.message.is_empty());

            let req = test::request(&data_dir, "/api/data");
            let resp = controllers::entries::index(req).await.unwrap();
            let list: ListEntriesResponse = test::response_json(resp).await;
            assert_eq!(list.data.len(), 1);
            let record = &list.data[0];
            assert_eq!(record.filename, saved.filename);
            assert_eq!(record.data["name"], "Ann");
            assert_eq!(record.data["age"], 30);
            let timestamp = record.data["timestamp"].as_str().unwrap();
            let timestamp = DateTime::parse_from_rfc3339(timestamp).unwrap();
            assert!(timestamp.timestamp_millis() >= before.timestamp_millis());

            Ok(data_dir)
        })
        .await
    }

    #[actix_web::test]
    async fn test_controllers_entries_create_without_content_type() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let (req, body) = test::request_with_body(
                &data_dir,
                "/api/save",
                None,
                br#"{"comment":"hi"}"#.as_slice(),
            )
            .await;

            let resp = controllers::entries::create(req, body).await.unwrap();
            assert_eq!(resp.status(), http::StatusCode::OK);

            let store = LocalEntryStore::new(&data_dir);
            let records = store.list().await?;
            assert_eq!(records[0].data["comment"], "hi");

            Ok(data_dir)
        })
        .await
    }

    #[actix_web::test]
    async fn test_controllers_entries_create_form() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let (req, body) = test::request_with_body(
                &data_dir,
                "/api/save",
                Some("application/x-www-form-urlencoded"),
                b"name=Ann&age=30".as_slice(),
            )
            .await;

            let resp = controllers::entries::create(req, body).await.unwrap();
            assert_eq!(resp.status(), http::StatusCode::OK);

            let store = LocalEntryStore::new(&data_dir);
            let records = store.list().await?;
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].data["name"], "Ann");
            assert_eq!(records[0].data["age"], "30");
            assert!(records[0].data["timestamp"].is_string());

            Ok(data_dir)
        })
        .await
    }

    #[actix_web::test]
    async fn test_controllers_entries_create_body_too_large() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let (req, body) = test::request_with_body(
                &data_dir,
                "/api/save",
                Some("application/json"),
                vec![b' '; MAX_ENTRY_BODY_SIZE + 1],
            )
            .await;

            let resp = test::error_response(controllers::entries::create(req, body).await);
            assert_eq!(resp.status(), http::StatusCode::PAYLOAD_TOO_LARGE);
            let body: libformdrop::view::ErrorResponse = test::response_json(resp).await;
            assert!(!body.success);

            let store = LocalEntryStore::new(&data_dir);
            assert!(store.list().await?.is_empty());

            Ok(data_dir)
        })
        .await
    }

    #[actix_web::test]
    async fn test_controllers_entries_download() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let store = LocalEntryStore::new(&data_dir);
            let entry = Entry::from_json_slice(br#"{"name":"Ann"}"#)?;
            let filename = store.save(entry).await?;
            let written = tokio::fs::read(data_dir.join(filename.as_str())).await?;

            let uri = format!("/api/download/{filename}");
            let req = test::request_with_param(&data_dir, &uri, "filename", filename.to_string());

            let resp = controllers::entries::download(req).await.unwrap();
            assert_eq!(resp.status(), http::StatusCode::OK);
            let disposition = resp
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .unwrap()
                .to_str()
                .unwrap()
                .to_string();
            assert!(disposition.starts_with("attachment"));
            assert!(disposition.contains(filename.as_str()));

            let body = to_bytes(resp.into_body()).await.unwrap();
            assert_eq!(body.as_ref(), written.as_slice());

            Ok(data_dir)
        })
        .await
    }

    #[actix_web::test]
    async fn test_controllers_entries_download_missing() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let filename = "entry_2024-01-01T12-00-00-000Z.json";
            let uri = format!("/api/download/{filename}");
            let req = test::request_with_param(&data_dir, &uri, "filename", filename);

            let resp = test::error_response(controllers::entries::download(req).await);
            assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
            let body: libformdrop::view::ErrorResponse = test::response_json(resp).await;
            assert!(!body.success);
            assert_eq!(body.error, "file not found");

            Ok(data_dir)
        })
        .await
    }

    #[actix_web::test]
    async fn test_controllers_entries_download_traversal() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let store_dir = data_dir.join("data");
            lib_test::write_txt_file_to_path(data_dir.join("secret.json"), "{}")?;

            let req = test::request_with_param(
                &store_dir,
                "/api/download/..%2Fsecret.json",
                "filename",
                "../secret.json",
            );

            let resp = test::error_response(controllers::entries::download(req).await);
            assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

            Ok(data_dir)
        })
        .await
    }

    #[actix_web::test]
    async fn test_controllers_entries_clear_all() -> Result<(), FormdropError> {
        lib_test::run_empty_dir_test_async(|data_dir| async move {
            let store = LocalEntryStore::new(&data_dir);
            store.save(Entry::from_json_slice(br#"{"n":1}"#)?).await?;
            lib_test::write_txt_file_to_path(data_dir.join("notes.txt"), "hello")?;

            let req = test::request(&data_dir, "/api/clear-all");
            let resp = controllers::entries::clear_all(req).await.unwrap();
            assert_eq!(resp.status(), http::StatusCode::OK);
            let cleared: EntriesClearedResponse = test::response_json(resp).await;
            assert!(cleared.success);
            assert_eq!(cleared.removed, 2);

            let req = test::request(&data_dir, "/api/data");
            let resp = controllers::entries::index(req).await.unwrap();
            let list: ListEntriesResponse = test::response_json(resp).await;
            assert!(list.data.is_empty());
            assert!(!data_dir.join("notes.txt").exists());

            Ok(data_dir)
        })
        .await
    }
}
