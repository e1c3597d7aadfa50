use crate::error::{BookgraphError, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::fmt;

/// The named collections a gateway stores documents in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Authors,
    Books,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Authors => "authors",
            Collection::Books => "books",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A schemaless stored record: an assigned id plus arbitrary JSON fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Builds a document, dropping any `id` field so the assigned one wins.
    pub fn new(id: String, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Serializes a record into the field map a gateway expects on insert.
    pub fn fields_of<T: Serialize>(record: &T) -> Result<Map<String, Value>> {
        match serde_json::to_value(record)? {
            Value::Object(mut fields) => {
                fields.remove("id");
                Ok(fields)
            }
            other => Err(BookgraphError::Storage(format!(
                "Record must serialize to an object, got {}",
                other
            ))),
        }
    }

    /// Decodes this document into a typed record.
    pub fn into_record<T: DeserializeOwned>(self) -> Result<T> {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

/// Field-equality predicate used for collection scans.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    value: Value,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, document: &Document) -> bool {
        if self.field == "id" {
            return self.value.as_str() == Some(document.id.as_str());
        }
        document.get(&self.field) == Some(&self.value)
    }
}

/// Generates random lowercase alphanumeric ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    length: usize,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(12)
    }
}

impl IdGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn generate(&self) -> String {
        const ALPHABET: [char; 36] = [
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
            'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x',
            'y', 'z',
        ];
        nanoid::format(nanoid::rngs::default, &ALPHABET, self.length)
    }

    /// Generates an id for which `taken` returns false.
    pub fn generate_unique(&self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = self.generate();
            if !taken(&id) {
                return id;
            }
        }
    }
}
