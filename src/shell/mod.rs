//! Interactive command loop and query printing.
//!
//! Each input line is either a command keyword with an optional argument or
//! a query pattern. The loop is generic over its input and output so it can
//! run against a terminal or an in-memory buffer.

use crate::data_structures::{DictionaryError, PrefixDictionary};
use crate::error::SlovnykResult;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::debug;

const MENU: &str = "\n- Enter some word or query with * for search
- add <word>
- del <word>
- has <word>
- count
- list
- help
- exit";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <word>`
    Add(String),
    /// `del <word>`
    Delete(String),
    /// `has <word>`
    Has(String),
    /// `count`
    Count,
    /// `list`, every word in collation order
    List,
    /// `help`
    Help,
    /// `exit` or `quit`
    Exit,
    /// A keyword that needs an argument was given none; holds the keyword
    MissingArgument(&'static str),
    /// Anything else is looked up as a query pattern
    Query(String),
}

impl Command {
    /// Parses one input line. Returns `None` for blank lines.
    ///
    /// Keywords are case-insensitive; the argument is the rest of the line
    /// after the first run of whitespace.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            return Some(Self::Exit);
        }

        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, Some(rest.trim_start().to_string())),
            None => (line, None),
        };

        let command = match (keyword.to_lowercase().as_str(), argument) {
            ("add", Some(word)) => Self::Add(word),
            ("del", Some(word)) => Self::Delete(word),
            ("has", Some(word)) => Self::Has(word),
            ("add", None) => Self::MissingArgument("add"),
            ("del", None) => Self::MissingArgument("del"),
            ("has", None) => Self::MissingArgument("has"),
            ("count", _) => Self::Count,
            ("list", _) => Self::List,
            ("help", _) => Self::Help,
            _ => Self::Query(line.to_string()),
        };
        Some(command)
    }
}

/// How batch query results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable blocks
    #[default]
    Text,
    /// One JSON object per query
    Json,
}

#[derive(Serialize)]
struct QueryOutput<'a> {
    query: &'a str,
    count: usize,
    results: &'a [String],
}

/// Interactive front end over a [`PrefixDictionary`].
#[derive(Debug)]
pub struct Shell<R, W> {
    dictionary: PrefixDictionary,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading commands from `input` and printing to `output`.
    pub fn new(dictionary: PrefixDictionary, input: R, output: W) -> Self {
        Self {
            dictionary,
            input,
            output,
        }
    }

    /// Returns the dictionary the shell operates on.
    pub fn dictionary(&self) -> &PrefixDictionary {
        &self.dictionary
    }

    /// Consumes the shell, returning the dictionary and the output sink.
    pub fn into_parts(self) -> (PrefixDictionary, W) {
        (self.dictionary, self.output)
    }

    /// Runs the prompt loop until `exit`, `quit` or end of input.
    pub fn run(&mut self) -> SlovnykResult<()> {
        writeln!(self.output, "{MENU}")?;

        let mut line = String::new();
        loop {
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            let Some(command) = Command::parse(&line) else {
                continue;
            };
            debug!(?command, "executing command");
            if !self.execute(command)? {
                break;
            }
        }
        Ok(())
    }

    /// Executes one command. Returns `false` once the shell should stop.
    pub fn execute(&mut self, command: Command) -> SlovnykResult<bool> {
        match command {
            Command::Add(word) => {
                let message = match self.dictionary.add(&word) {
                    Ok(()) => "The new word added into the dictionary",
                    Err(DictionaryError::DuplicateWord(_)) => "The word already exists",
                    Err(DictionaryError::InvalidWord) => "Invalid word",
                };
                writeln!(self.output, "{message}")?;
            }
            Command::Delete(word) => {
                let message = match self.dictionary.delete(&word) {
                    Some(_) => "The word deleted from the dictionary",
                    None => "The word not found in the dictionary",
                };
                writeln!(self.output, "{message}")?;
            }
            Command::Has(word) => {
                let message = if self.dictionary.contains(&word) {
                    "The word exists"
                } else {
                    "The word does not exist"
                };
                writeln!(self.output, "{message}")?;
            }
            Command::Count => {
                writeln!(self.output, "Number of words: {}", self.dictionary.count_words())?;
            }
            Command::List => {
                let words = self.dictionary.all_words_sorted();
                if words.is_empty() {
                    writeln!(self.output, "The dictionary is empty")?;
                }
                for word in words {
                    writeln!(self.output, "{word}")?;
                }
            }
            Command::Help => writeln!(self.output, "{MENU}")?,
            Command::MissingArgument(keyword) => {
                writeln!(self.output, "Usage: {keyword} <word>")?;
            }
            Command::Query(pattern) => self.print_query(&pattern, OutputFormat::Text)?,
            Command::Exit => {
                writeln!(self.output, "Program completed.")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Prints the results of each query in turn.
    pub fn run_queries<S: AsRef<str>>(
        &mut self,
        queries: &[S],
        format: OutputFormat,
    ) -> SlovnykResult<()> {
        for query in queries {
            self.print_query(query.as_ref(), format)?;
        }
        Ok(())
    }

    /// Runs one query and prints its results in collation order.
    pub fn print_query(&mut self, query: &str, format: OutputFormat) -> SlovnykResult<()> {
        let mut results = self.dictionary.query(query);
        self.dictionary.collation().sort(&mut results);

        match format {
            OutputFormat::Json => {
                let record = QueryOutput {
                    query,
                    count: results.len(),
                    results: &results,
                };
                serde_json::to_writer(&mut self.output, &record)?;
                writeln!(self.output)?;
            }
            OutputFormat::Text => {
                writeln!(self.output, "\n______ Query: {query}")?;
                if results.is_empty() {
                    writeln!(self.output, "No results found")?;
                } else {
                    writeln!(self.output, "Found {} result(s)\n", results.len())?;
                    for word in &results {
                        writeln!(self.output, "{word}")?;
                    }
                }
            }
        }
        Ok(())
    }
}
