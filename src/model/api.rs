use std::collections::BTreeMap;

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// List envelope: `{"status": "success", "results": <count>, "<key>": [...]}`.
#[derive(Debug)]
pub struct ListResponse<T> {
    pub key: &'static str,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(key: &'static str, items: Vec<T>) -> Self {
        Self { key, items }
    }
}

impl<T: Serialize> Serialize for ListResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("status", STATUS_SUCCESS)?;
        map.serialize_entry("results", &self.items.len())?;
        map.serialize_entry(self.key, &self.items)?;
        map.end()
    }
}

/// Single-record envelope: `{"status": "success", "data": {"<key>": {...}}}`.
#[derive(Debug)]
pub struct DataResponse<T> {
    pub key: &'static str,
    pub item: T,
}

impl<T> DataResponse<T> {
    pub fn new(key: &'static str, item: T) -> Self {
        Self { key, item }
    }
}

impl<T: Serialize> Serialize for DataResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("status", STATUS_SUCCESS)?;
        map.serialize_entry("data", &BTreeMap::from([(self.key, &self.item)]))?;
        map.end()
    }
}
