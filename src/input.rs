use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::debug;

use crate::error::Error;
use crate::interval::{Domain, Interval};

/// Prompts for interval borders on `prompt` and reads them as whitespace-separated
/// reals from `reader`.
pub struct BorderReader<R, W> {
    reader: R,
    prompt: W,
    pending: VecDeque<String>,
}

impl<R, W> BorderReader<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, border: &'static str) -> Result<String, Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|source| Error::Read { border, source })?;
            if read == 0 {
                return Err(Error::EndOfInput { border });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    pub fn read_border(&mut self, border: &'static str) -> Result<f64, Error> {
        writeln!(self.prompt, "Enter interval's {border} border: ").map_err(Error::Prompt)?;
        self.prompt.flush().map_err(Error::Prompt)?;

        let token = self.next_token(border)?;
        match token.parse::<f64>() {
            Ok(value) => {
                debug!("{border} border = {value}");
                Ok(value)
            }
            Err(_) => Err(Error::Parse { border, token }),
        }
    }

    /// The left border is checked against `domain` before the right one is
    /// asked for.
    pub fn read_interval(&mut self, domain: &Domain) -> Result<Interval, Error> {
        let left = domain.check_left(self.read_border("left")?)?;
        let right = domain.check_right(self.read_border("right")?)?;
        domain.interval(left, right)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.prompt)
    }
}
