//! Loads a catalog of courses into a binary search tree keyed by course number, and answers
//! listing and lookup queries over it from an interactive menu.

pub mod course;
pub mod index;
pub mod catalog;
pub mod palette;
pub mod session;
pub mod config;

pub use course::Course;
pub use index::CourseIndex;
pub use catalog::{Catalog, LoadError};
pub use palette::Palette;
pub use session::{AppState, Session};
pub use config::Config;

/// Builds a [`CourseIndex`] from `(number, name, [prerequisites])` tuples
///
/// Courses are inserted in the order given, so a repeated number keeps its first entry.
///
/// ```
/// use course_planner::courses;
///
/// let index = courses! {
///     ("CSCI200", "Data Structures", ["CSCI101"]),
///     ("CSCI101", "Introduction to Programming in C++", []),
/// };
/// assert_eq!(index.search("CSCI200").unwrap().prerequisites, ["CSCI101"]);
/// ```
#[macro_export]
macro_rules! courses {
    // trailing comma case
    ($(($number:expr, $name:expr, [$($prereq:expr),*]),)+) => ($crate::courses!($(($number, $name, [$($prereq),*])),+));

    ( $(($number:expr, $name:expr, [$($prereq:expr),*])),* ) => {
        {
            let mut _index = $crate::CourseIndex::new();
            $(
                let _ = _index.insert($crate::Course {
                    number: ::std::string::String::from($number),
                    name: ::std::string::String::from($name),
                    prerequisites: ::std::vec![$(::std::string::String::from($prereq)),*],
                });
            )*
            _index
        }
    };
}

#[cfg(test)]
mod proptests;
