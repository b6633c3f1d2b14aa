use serde_json::{Map, Value};
use std::fmt;

/// A student record as found in the array output: arbitrary attributes
/// plus a `name` field.
pub type Record = Map<String, Value>;

#[derive(Debug)]
pub struct Student {
    pub name: String,
    pub attributes: Map<String, Value>,
}

impl Student {
    pub fn new(name: String, attributes: Map<String, Value>) -> Self {
        Self { name, attributes }
    }

    /// The `name` attribute already present in the record, if any.
    pub fn previous_name(&self) -> Option<&Value> {
        self.attributes.get("name")
    }

    /// Turn the student into a record carrying its name. An existing `name`
    /// attribute is replaced in place, otherwise it goes last.
    pub fn into_record(self) -> Record {
        let mut record = self.attributes;
        record.insert(String::from("name"), Value::String(self.name));
        record
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
