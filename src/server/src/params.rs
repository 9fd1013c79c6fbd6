use actix_web::{web, HttpMessage, HttpRequest};
use futures_util::stream::StreamExt as _;

use libformdrop::model::Entry;

use crate::app_data::FormdropAppData;
use crate::errors::FormdropHttpError;

pub fn app_data(req: &HttpRequest) -> Result<&FormdropAppData, FormdropHttpError> {
    req.app_data::<FormdropAppData>()
        .ok_or(FormdropHttpError::AppDataDoesNotExist)
}

pub fn path_param(req: &HttpRequest, param: &str) -> Result<String, FormdropHttpError> {
    Ok(req
        .match_info()
        .get(param)
        .ok_or(FormdropHttpError::PathParamDoesNotExist(param.into()))?
        .to_string())
}

/// Collect the request body, giving up as soon as it grows past `limit` bytes
pub async fn read_body(
    mut body: web::Payload,
    limit: usize,
) -> Result<web::Bytes, FormdropHttpError> {
    let mut bytes = web::BytesMut::new();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|err| {
            FormdropHttpError::BadRequest(format!("Could not read request body: {err}").into())
        })?;
        if bytes.len() + chunk.len() > limit {
            return Err(FormdropHttpError::PayloadTooLarge(
                format!("Request body is larger than {limit} bytes").into(),
            ));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes.freeze())
}

/// Decode the submitted entry according to the request content type.
/// No content type is read as JSON.
pub fn parse_entry(req: &HttpRequest, body: &[u8]) -> Result<Entry, FormdropHttpError> {
    let mime_type = req
        .mime_type()
        .map_err(|err| FormdropHttpError::BadRequest(format!("{err}").into()))?;

    match mime_type {
        None => Ok(Entry::from_json_slice(body)?),
        Some(mime_type) if is_json(&mime_type) => Ok(Entry::from_json_slice(body)?),
        Some(mime_type)
            if mime_type.type_() == mime::APPLICATION
                && mime_type.subtype() == mime::WWW_FORM_URLENCODED =>
        {
            Ok(Entry::from_form_urlencoded(body))
        }
        Some(mime_type) => Err(FormdropHttpError::BadRequest(
            format!("Unsupported content type: {mime_type}").into(),
        )),
    }
}

fn is_json(mime_type: &mime::Mime) -> bool {
    mime_type.type_() == mime::APPLICATION
        && (mime_type.subtype() == mime::JSON || mime_type.suffix() == Some(mime::JSON))
}
