use std::iter::{FromIterator, FusedIterator};

use ordered_bst::{BSTMap, map::IterInorder};

use crate::course::Course;

/// The catalog of courses, ordered by course number
///
/// Backed by an unbalanced binary search tree, so a catalog file that is already sorted by course
/// number produces a tree that is effectively a linked list. Lookups are then linear, which is
/// acceptable for catalogs of a few hundred courses.
///
/// Course numbers are compared exactly as stored. The index never normalizes keys, callers are
/// expected to use [`normalize_key`](crate::course::normalize_key) consistently for both inserts
/// and searches.
#[derive(Debug, Default, PartialEq)]
pub struct CourseIndex {
    courses: BSTMap<String, Course>,
}

impl CourseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course to the index
    ///
    /// If a course with the same number was already inserted, the index is left unchanged and the
    /// given course is discarded. Returns `true` if the course was added.
    pub fn insert(&mut self, course: Course) -> bool {
        let key = course.number.clone();
        self.courses.insert(key, course).is_none()
    }

    /// Returns the course with exactly the given number, if any
    pub fn search(&self, number: &str) -> Option<&Course> {
        self.courses.get(number)
    }

    /// Iterates over every course in ascending order of course number
    pub fn iter_ascending(&self) -> Courses<'_> {
        Courses {inner: self.courses.iter_inorder()}
    }

    /// Returns the number of courses in the index
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Returns the height of the underlying tree
    pub fn height(&self) -> usize {
        self.courses.height()
    }
}

impl Extend<Course> for CourseIndex {
    fn extend<T: IntoIterator<Item = Course>>(&mut self, iter: T) {
        for course in iter {
            self.insert(course);
        }
    }
}

impl FromIterator<Course> for CourseIndex {
    fn from_iter<T: IntoIterator<Item = Course>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<'a> IntoIterator for &'a CourseIndex {
    type Item = &'a Course;
    type IntoIter = Courses<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_ascending()
    }
}

/// Iterator over the courses of a [`CourseIndex`] in ascending order of course number
#[derive(Debug, Clone)]
pub struct Courses<'a> {
    inner: IterInorder<'a, String, Course>,
}

impl<'a> Iterator for Courses<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, course)| course)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for Courses<'a> {}

impl<'a> FusedIterator for Courses<'a> {}
