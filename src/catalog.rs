//! Reading a course catalog from comma-delimited text
//!
//! Each non-blank line describes one course:
//!
//! ```text
//! CSCI300,Introduction to Algorithms,CSCI200,MATH201
//! ```
//!
//! The first field is the course number, the second is its title and any remaining fields are
//! the numbers of its prerequisites. Course and prerequisite numbers are normalized with
//! [`normalize_key`] before they are stored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::course::{Course, normalize_key};
use crate::index::CourseIndex;

/// Failure to read a catalog at all
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Reason a single line was left out of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected at least a course number and a name")]
    MissingName,
    #[error("course number is empty")]
    EmptyNumber,
}

/// A line that could not be turned into a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub reason: LineError,
}

/// The result of loading a catalog
#[derive(Debug, Default)]
pub struct Catalog {
    pub index: CourseIndex,
    pub skipped: Vec<SkippedLine>,
    /// Course numbers that appeared again after their first line, in file order
    pub duplicates: Vec<String>,
}

/// Splits one line of the catalog into a course
///
/// Fields are trimmed. Empty prerequisite fields (e.g. from a trailing comma) are dropped.
pub fn parse_line(line: &str) -> Result<Course, LineError> {
    let mut fields = line.split(',').map(str::trim);

    // `split` always yields at least one field
    let number = fields.next().unwrap_or_default();
    let name = fields.next().ok_or(LineError::MissingName)?;
    if number.is_empty() {
        return Err(LineError::EmptyNumber);
    }

    let prerequisites = fields
        .filter(|field| !field.is_empty())
        .map(normalize_key)
        .collect();

    Ok(Course {
        number: normalize_key(number),
        name: name.to_string(),
        prerequisites,
    })
}

/// Reads a catalog from any buffered reader
///
/// Blank lines are ignored. Malformed lines are collected in [`Catalog::skipped`] and do not stop
/// the load. Bytes that are not valid UTF-8 (e.g. a Latin-1 title) are replaced with
/// `U+FFFD` rather than rejecting the line. Only an I/O error while reading fails the whole load.
pub fn read_catalog<R: BufRead>(mut reader: R) -> Result<Catalog, LoadError> {
    let mut catalog = Catalog::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Read {line: line_number + 1, source})?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(course) => {
                let number = course.number.clone();
                if !catalog.index.insert(course) {
                    catalog.duplicates.push(number);
                }
            },

            Err(reason) => catalog.skipped.push(SkippedLine {
                line: line_number,
                text: line.to_string(),
                reason,
            }),
        }
    }

    Ok(catalog)
}

/// Opens and reads the catalog file at `path`
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    read_catalog(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::io::Cursor;
    use std::process;

    #[test]
    fn parse_full_line() {
        let course = parse_line("CSCI300,Introduction to Algorithms,CSCI200,MATH201").unwrap();
        assert_eq!(course, Course::new(
            "CSCI300",
            "Introduction to Algorithms",
            vec!["CSCI200", "MATH201"],
        ));
    }

    #[test]
    fn parse_without_prerequisites() {
        let course = parse_line("MATH201,Discrete Mathematics").unwrap();
        assert_eq!(course.number, "MATH201");
        assert_eq!(course.name, "Discrete Mathematics");
        assert!(course.prerequisites.is_empty());
    }

    #[test]
    fn parse_normalizes_and_trims() {
        let course = parse_line(" csci350 , Operating Systems , csci300,, \r").unwrap();
        assert_eq!(course.number, "CSCI350");
        assert_eq!(course.name, "Operating Systems");
        assert_eq!(course.prerequisites, ["CSCI300"]);
    }

    #[test]
    fn parse_empty_name() {
        let course = parse_line("CSCI100,").unwrap();
        assert_eq!(course.number, "CSCI100");
        assert_eq!(course.name, "");
    }

    #[test]
    fn parse_malformed() {
        assert_eq!(parse_line("CSCI100"), Err(LineError::MissingName));
        assert_eq!(parse_line(",No Number"), Err(LineError::EmptyNumber));
    }

    #[test]
    fn read_catalog_reports_skipped_and_duplicates() {
        let input = "\
CSCI200,Data Structures,CSCI101
CSCI101,Introduction to Programming in C++,CSCI100

garbage
CSCI100,Introduction to Computer Science
csci101,Second Definition
,Nameless Number
";
        let catalog = read_catalog(Cursor::new(input)).unwrap();

        let numbers: Vec<_> = catalog.index.iter_ascending()
            .map(|course| course.number.as_str())
            .collect();
        assert_eq!(numbers, ["CSCI100", "CSCI101", "CSCI200"]);
        assert_eq!(
            catalog.index.search("CSCI101").unwrap().name,
            "Introduction to Programming in C++",
        );

        assert_eq!(catalog.duplicates, ["CSCI101"]);
        assert_eq!(catalog.skipped, [
            SkippedLine {line: 4, text: "garbage".to_string(), reason: LineError::MissingName},
            SkippedLine {line: 7, text: ",Nameless Number".to_string(), reason: LineError::EmptyNumber},
        ]);
    }

    #[test]
    fn read_crlf_catalog() {
        let input = "CSCI100,Intro\r\nCSCI101,Programming,CSCI100\r\n";
        let catalog = read_catalog(Cursor::new(input)).unwrap();

        assert_eq!(catalog.index.len(), 2);
        assert_eq!(catalog.index.search("CSCI100").unwrap().name, "Intro");
        assert_eq!(catalog.index.search("CSCI101").unwrap().prerequisites, ["CSCI100"]);
        assert!(catalog.skipped.is_empty());
    }

    #[test]
    fn read_empty_catalog() {
        let catalog = read_catalog(Cursor::new("")).unwrap();
        assert!(catalog.index.is_empty());
        assert!(catalog.skipped.is_empty());
        assert!(catalog.duplicates.is_empty());
    }

    #[test]
    fn read_keeps_lines_around_invalid_utf8() {
        let input: &[u8] = b"CSCI100,Intro\nFREN101,Introduction \xe0 la langue\nCSCI200,Data Structures,CSCI100\n";
        let catalog = read_catalog(Cursor::new(input)).unwrap();

        let numbers: Vec<_> = catalog.index.iter_ascending()
            .map(|course| course.number.as_str())
            .collect();
        assert_eq!(numbers, ["CSCI100", "CSCI200", "FREN101"]);
        assert_eq!(catalog.index.search("FREN101").unwrap().name, "Introduction \u{FFFD} la langue");
        assert_eq!(catalog.index.search("CSCI200").unwrap().prerequisites, ["CSCI100"]);
        assert!(catalog.skipped.is_empty());
    }

    #[test]
    fn read_without_trailing_newline() {
        let catalog = read_catalog(Cursor::new("CSCI100,Intro\nbroken")).unwrap();

        assert_eq!(catalog.index.len(), 1);
        assert_eq!(catalog.skipped, [
            SkippedLine {line: 2, text: "broken".to_string(), reason: LineError::MissingName},
        ]);
    }

    #[test]
    fn read_error_fails_load() {
        struct FailingReader;

        impl io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }
        }

        match read_catalog(BufReader::new(FailingReader)) {
            Err(LoadError::Read {line, source}) => {
                assert_eq!(line, 1);
                assert_eq!(source.to_string(), "disk on fire");
            },
            other => panic!("expected a read error, got {:?}", other),
        }
    }

    #[test]
    fn load_missing_file() {
        let err = load_catalog("definitely/not/a/real/catalog.csv").unwrap_err();
        assert!(matches!(err, LoadError::Open {..}));
        assert_eq!(err.to_string(), "cannot open file definitely/not/a/real/catalog.csv");
    }

    #[test]
    fn load_file_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("course_planner_catalog_{}.csv", process::id()));
        fs::write(&path, "MATH201,Discrete Mathematics\nCSCI100,Introduction to Computer Science\n").unwrap();

        let catalog = load_catalog(&path);
        fs::remove_file(&path).unwrap();

        let catalog = catalog.unwrap();
        let numbers: Vec<_> = catalog.index.iter_ascending()
            .map(|course| course.number.as_str())
            .collect();
        assert_eq!(numbers, ["CSCI100", "MATH201"]);
    }
}
