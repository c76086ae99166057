//! Tutor models for the tutors service

use mongodb::bson::{self, Bson, Document};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Fields a tutor update may replace
///
/// Any other field in the request body is ignored, so identity fields such
/// as `email` stay as they were at creation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorUpdate {
    pub image: Option<Value>,
    pub language: Option<Value>,
    pub price: Option<Value>,
    pub description: Option<Value>,
    pub review_count: Option<Value>,
}

impl TutorUpdate {
    /// Build the field set to apply
    ///
    /// All five fields are always written: an omitted field is stored as
    /// `null`, and `reviewCount` falls back to 0 when omitted or falsy.
    pub fn into_fields(self) -> ApiResult<Document> {
        let mut fields = Document::new();

        for (key, value) in [
            ("image", self.image),
            ("language", self.language),
            ("price", self.price),
            ("description", self.description),
        ] {
            let value = match value {
                Some(value) => to_bson(&value)?,
                None => Bson::Null,
            };
            fields.insert(key, value);
        }

        let review_count = match self.review_count {
            Some(value) if is_truthy(&value) => to_bson(&value)?,
            _ => Bson::Int32(0),
        };
        fields.insert("reviewCount", review_count);

        Ok(fields)
    }
}

fn to_bson(value: &Value) -> ApiResult<Bson> {
    bson::to_bson(value).map_err(|e| ApiError::InvalidArgument(e.to_string()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
