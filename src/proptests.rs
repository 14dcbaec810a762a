use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;

fn number_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet so that duplicate course numbers are common
    "[A-C]{1,2}[0-3]{1,2}"
}

fn course_strategy() -> impl Strategy<Value = Course> {
    (
        number_strategy(),
        "[a-z ]{0,12}",
        prop::collection::vec(number_strategy(), 0..=3),
    ).prop_map(|(number, name, prerequisites)| Course {number, name, prerequisites})
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn ascending_keys_are_strictly_increasing(courses in prop::collection::vec(course_strategy(), 0..=200)) {
        let index: CourseIndex = courses.into_iter().collect();

        let numbers: Vec<_> = index.iter_ascending().map(|course| &course.number).collect();
        prop_assert_eq!(numbers.len(), index.len());
        for pair in numbers.windows(2) {
            prop_assert!(pair[0] < pair[1], "{:?} is not before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn first_insert_wins(courses in prop::collection::vec(course_strategy(), 0..=200)) {
        let mut index = CourseIndex::new();
        let mut expected: BTreeMap<String, Course> = BTreeMap::new();

        for course in courses {
            let is_new = !expected.contains_key(&course.number);
            expected.entry(course.number.clone()).or_insert_with(|| course.clone());
            prop_assert_eq!(index.insert(course), is_new);
        }

        prop_assert_eq!(index.len(), expected.len());
        for (number, course) in &expected {
            prop_assert_eq!(index.search(number), Some(course));
        }
        prop_assert!(index.iter_ascending().eq(expected.values()));
    }

    #[test]
    fn duplicate_in_either_order(first in course_strategy(), name in "[a-z]{1,8}") {
        let second = Course {name: format!("{}-second", name), ..first.clone()};

        let mut index = CourseIndex::new();
        index.insert(first.clone());
        index.insert(second.clone());
        prop_assert_eq!(&index.search(&first.number).unwrap().name, &first.name);

        let mut index = CourseIndex::new();
        index.insert(second.clone());
        index.insert(first.clone());
        prop_assert_eq!(&index.search(&first.number).unwrap().name, &second.name);
    }

    #[test]
    fn missing_keys_are_not_found(
        courses in prop::collection::vec(course_strategy(), 0..=50),
        query in number_strategy(),
    ) {
        let inserted = courses.iter().any(|course| course.number == query);
        let index: CourseIndex = courses.into_iter().collect();

        let found = index.search(&query);
        prop_assert_eq!(found.is_some(), inserted);
        // Idempotent
        prop_assert_eq!(found, index.search(&query));
    }
}
