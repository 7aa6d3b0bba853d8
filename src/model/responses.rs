/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use serde_json::{Map, Value};

/// An opaque record returned by a search endpoint
pub type Record = Map<String, Value>;

/// One page of records extracted from a search response
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    /// Records in server order
    pub records: Vec<Record>,
}

impl SearchPage {
    /// Extracts the named array from a search response
    ///
    /// A missing or `null` array yields an empty page.
    ///
    /// # Errors
    /// Returns a description of the problem when the field is not an array
    /// or one of its items is not a JSON object.
    pub fn from_response(response: Value, collection: &str) -> Result<Self, String> {
        let items = match response {
            Value::Object(mut fields) => fields.remove(collection),
            Value::Null => None,
            other => {
                return Err(format!(
                    "expected a JSON object holding '{collection}', got {}",
                    kind(&other)
                ));
            }
        };

        let items = match items {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(format!(
                    "expected '{collection}' to be an array, got {}",
                    kind(&other)
                ));
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(format!(
                    "item {index} of '{collection}' is {}, expected an object",
                    kind(&other)
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    /// Number of records on the page
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the page holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether this is the last page for the given page size
    #[must_use]
    pub fn is_last(&self, page_size: u32) -> bool {
        self.records.len() < page_size as usize
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
