use crate::error::{Error, json_type};
use crate::model::{Record, Student};
use serde_json::{Map, Value};
use tracing::{debug, instrument, trace};

/// Build the array of records from an object mapping student names to
/// their attributes. Records come out in the key order of `students`.
///
/// Every value must be an object: the first one that is not makes the
/// whole conversion fail with [`Error::TypeMismatch`].
#[instrument(skip_all, fields(students = students.len()))]
pub fn convert(students: Map<String, Value>) -> Result<Vec<Record>, Error> {
    students
        .into_iter()
        .map(|(name, value)| {
            let student = match value {
                Value::Object(attributes) => Student::new(name, attributes),
                other => {
                    return Err(Error::TypeMismatch {
                        found: json_type(&other),
                        student: name,
                    });
                }
            };
            if let Some(previous) = student.previous_name() {
                if previous.as_str() != Some(student.name.as_str()) {
                    debug!(
                        student = %student,
                        previous = %previous,
                        "overwriting existing name attribute",
                    );
                }
            }
            trace!(student = %student, attributes = student.attributes.len(), "converted");
            Ok(student.into_record())
        })
        .collect()
}
