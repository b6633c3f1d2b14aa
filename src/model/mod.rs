pub use self::student::{Record, Student};

mod student;
