//! The interactive menu
//!
//! A [`Session`] reads answers from any buffered reader and writes prompts and reports to any
//! writer, so the whole menu can be driven from memory in tests.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::catalog::{self, LoadError};
use crate::course::{Course, normalize_key};
use crate::index::CourseIndex;
use crate::palette::Palette;

/// Whether a catalog has been loaded yet
#[derive(Debug)]
pub enum AppState {
    Empty,
    Loaded(CourseIndex),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Empty
    }
}

impl AppState {
    /// Returns the loaded index, if any
    pub fn index(&self) -> Option<&CourseIndex> {
        match self {
            AppState::Empty => None,
            AppState::Loaded(index) => Some(index),
        }
    }
}

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    PrintList,
    PrintCourse,
    Exit,
    /// A number that is not on the menu
    Unknown(i64),
}

impl MenuChoice {
    /// Parses the user's answer, returning `None` if it is not a number
    pub fn parse(answer: &str) -> Option<Self> {
        let choice = match answer.trim().parse::<i64>().ok()? {
            1 => MenuChoice::Load,
            2 => MenuChoice::PrintList,
            3 => MenuChoice::PrintCourse,
            9 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        };

        Some(choice)
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    state: AppState,
    palette: Palette,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            state: AppState::Empty,
            palette,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Consumes the session, returning the writer it was printing to
    pub fn into_output(self) -> W {
        self.output
    }

    /// Greets the user and runs the menu until they exit or the input ends
    pub fn run(&mut self) -> io::Result<()> {
        self.greet()?;
        self.menu_loop()
    }

    pub fn greet(&mut self) -> io::Result<()> {
        write!(self.output, "Welcome to the course planner.\n\n")?;
        self.output.flush()
    }

    /// Shows the menu and handles choices until the user exits or the input ends
    pub fn menu_loop(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let answer = match self.read_answer()? {
                Some(answer) => answer,
                None => return Ok(()),
            };

            let choice = match MenuChoice::parse(&answer) {
                Some(choice) => choice,
                None => {
                    write!(self.output, "\nInvalid input. Please try again.\n\n")?;
                    continue;
                },
            };

            match choice {
                MenuChoice::Load => self.prompt_load()?,
                MenuChoice::PrintList => self.print_course_list()?,
                MenuChoice::PrintCourse => self.prompt_course()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Thank you for using the course planner!")?;
                    return self.output.flush();
                },
                MenuChoice::Unknown(number) => {
                    write!(self.output, "{} is not a valid option.\n\n", number)?;
                },
            }
        }
    }

    /// Loads the catalog at `path`, replacing the current one if that succeeds
    ///
    /// Problems with the catalog are reported to the user rather than returned. Returns `true` if
    /// the catalog was loaded.
    pub fn load(&mut self, path: &Path) -> io::Result<bool> {
        let catalog = match catalog::load_catalog(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                self.report_load_error(&err)?;
                return Ok(false);
            },
        };

        for skipped in &catalog.skipped {
            writeln!(
                self.output,
                "{} Invalid line format ({}), skipping line {}: {}",
                self.palette.warning("Warning:"),
                skipped.reason,
                skipped.line,
                skipped.text,
            )?;
        }
        for number in &catalog.duplicates {
            writeln!(
                self.output,
                "{} Course {} is listed more than once, keeping the first entry",
                self.palette.warning("Warning:"),
                number,
            )?;
        }

        write!(self.output, "\nData loaded successfully.\n{} courses loaded.\n\n", catalog.index.len())?;
        self.state = AppState::Loaded(catalog.index);
        Ok(true)
    }

    fn report_load_error(&mut self, err: &LoadError) -> io::Result<()> {
        let tag = self.palette.error("Error:");
        match err {
            LoadError::Open {path, ..} => {
                write!(self.output, "{} Cannot open file {}\n\n", tag, path.display())?;
            },

            LoadError::Read {..} => {
                write!(self.output, "{} {}", tag, err)?;
                if let Some(source) = err.source() {
                    write!(self.output, ": {}", source)?;
                }
                write!(self.output, "\n\n")?;
            },
        }

        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "1. Load Data Structure.")?;
        writeln!(self.output, "2. Print Course List.")?;
        writeln!(self.output, "3. Print Course.")?;
        write!(self.output, "9. Exit\n\n")?;
        write!(self.output, "What would you like to do? ")?;
        self.output.flush()
    }

    fn prompt_load(&mut self) -> io::Result<()> {
        write!(self.output, "\nEnter the file name to load the course data: ")?;
        self.output.flush()?;

        match self.read_answer()? {
            Some(path) => self.load(Path::new(&path)).map(|_| ()),
            None => Ok(()),
        }
    }

    fn print_course_list(&mut self) -> io::Result<()> {
        let index = match &self.state {
            AppState::Loaded(index) => index,
            AppState::Empty => return write!(self.output, "\nPlease load data first.\n\n"),
        };

        writeln!(self.output, "\nHere is a sample schedule:")?;
        for course in index.iter_ascending() {
            writeln!(self.output, "{}, {}", course.number, course.name)?;
        }
        writeln!(self.output)
    }

    fn prompt_course(&mut self) -> io::Result<()> {
        if let AppState::Empty = self.state {
            return write!(self.output, "\nPlease load data first.\n\n");
        }

        write!(self.output, "\nWhat course do you want to know about? ")?;
        self.output.flush()?;
        let number = match self.read_answer()? {
            Some(answer) => normalize_key(&answer),
            None => return Ok(()),
        };

        match self.state.index().and_then(|index| index.search(&number)) {
            Some(course) => write_course(&mut self.output, course),
            None => write!(self.output, "\nCourse not found.\n\n"),
        }
    }

    /// Reads the next non-blank line of input, or `None` once the input ends
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let answer = line.trim();
            if !answer.is_empty() {
                return Ok(Some(answer.to_string()));
            }
        }
    }
}

fn write_course<W: Write>(output: &mut W, course: &Course) -> io::Result<()> {
    writeln!(output, "\n{}, {}", course.number, course.name)?;
    if course.prerequisites.is_empty() {
        write!(output, "Prerequisites: None\n\n")
    } else {
        write!(output, "Prerequisites: {}\n\n", course.prerequisites.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_menu_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Load));
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::PrintList));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::PrintCourse));
        assert_eq!(MenuChoice::parse("9"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Unknown(4)));
        assert_eq!(MenuChoice::parse("-1"), Some(MenuChoice::Unknown(-1)));
        assert_eq!(MenuChoice::parse("load"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn course_report() {
        let mut output = Vec::new();
        let course = Course::new("CSCI300", "Introduction to Algorithms", vec!["CSCI200", "MATH201"]);
        write_course(&mut output, &course).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\nCSCI300, Introduction to Algorithms\nPrerequisites: CSCI200, MATH201\n\n",
        );

        let mut output = Vec::new();
        let course = Course::new("CSCI100", "Introduction to Computer Science", Vec::<String>::new());
        write_course(&mut output, &course).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\nCSCI100, Introduction to Computer Science\nPrerequisites: None\n\n",
        );
    }

    #[test]
    fn state_starts_empty() {
        let session = Session::new(io::empty(), io::sink(), Palette::plain());
        assert!(session.state().index().is_none());
        assert!(matches!(AppState::default(), AppState::Empty));
    }
}
