use actix_web::{HttpRequest, HttpResponse};
use libformdrop::view::ErrorResponse;

pub async fn index(_req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::resource_not_found())
}
