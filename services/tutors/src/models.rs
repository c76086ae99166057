//! API models for request and response payloads

use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub mod tutor;

/// Request for login
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<Value>,
}

impl LoginRequest {
    /// The claimed email, rejecting missing, empty or non-string values
    pub fn email(self) -> ApiResult<String> {
        match self.email {
            Some(Value::String(email)) if !email.is_empty() => Ok(email),
            None | Some(Value::Null) | Some(Value::String(_)) => Err(ApiError::InvalidArgument(
                "Email is required".to_string(),
            )),
            Some(_) => Err(ApiError::InvalidArgument(
                "Email must be a string".to_string(),
            )),
        }
    }
}

/// Response for login and logout
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
}

/// `?email=` query used by lookups
#[derive(Debug, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// The email value, treating an empty parameter as absent
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// Acknowledgement of an insert
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: Value,
}

impl InsertAck {
    pub fn new(inserted_id: Bson) -> Self {
        Self {
            acknowledged: true,
            inserted_id: bson_to_json(inserted_id),
        }
    }
}

/// Acknowledgement of an update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Value>,
    pub upserted_count: u64,
}

/// Response for a successful update
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub result: UpdateAck,
}

/// Response for a successful delete
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted_count: u64,
}

/// Convert a JSON request body into a document, accepting objects only
pub fn json_to_document(value: Value) -> ApiResult<Document> {
    if !value.is_object() {
        return Err(ApiError::InvalidArgument(
            "Request body must be a JSON object".to_string(),
        ));
    }

    bson::to_document(&value).map_err(|e| ApiError::InvalidArgument(e.to_string()))
}

/// Render a stored document as JSON
///
/// ObjectIds become plain hex strings; everything else uses relaxed
/// extended JSON.
pub fn document_to_json(document: Document) -> Value {
    bson_to_json(Bson::Document(document))
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(document) => Value::Object(
            document
                .into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(values) => Value::Array(values.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
