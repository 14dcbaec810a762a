/// A single course in the catalog
///
/// Courses are compared only by `number`, and only inside a
/// [`CourseIndex`](crate::CourseIndex), so no ordering is defined on the record itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique identifier of the course, e.g. `CSCI300`
    pub number: String,
    /// Display title, may be empty
    pub name: String,
    /// Course numbers that must be taken first, in the order they were listed
    ///
    /// These are not checked against the catalog and may name courses that do not exist.
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new<N, T, P>(number: N, name: T, prerequisites: P) -> Self
        where N: Into<String>,
              T: Into<String>,
              P: IntoIterator,
              P::Item: Into<String>,
    {
        Self {
            number: number.into(),
            name: name.into(),
            prerequisites: prerequisites.into_iter().map(Into::into).collect(),
        }
    }
}

/// Normalizes a course number so that lookups are case-insensitive
///
/// The catalog loader applies this to every course and prerequisite number it reads, and the
/// session applies it to every query, so the index only ever compares normalized keys.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}
