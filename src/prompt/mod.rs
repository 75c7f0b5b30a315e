use std::io::{BufRead, Write};

use log::debug;

use crate::error::{Error, Result};

/// Line-oriented interactive input over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed(label.trim_end_matches(&[':', ' '][..]).to_string()));
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a positive length until one is given.
    pub fn read_length(&mut self) -> Result<usize> {
        loop {
            let answer = self.ask("Sequence length: ")?;
            match answer.parse::<i64>() {
                Ok(n) if n <= 0 => writeln!(self.output, "Length must be greater than zero.")?,
                Ok(n) => match usize::try_from(n) {
                    Ok(n) => return Ok(n),
                    Err(_) => writeln!(self.output, "Please enter a valid integer.")?,
                },
                Err(_) => {
                    debug!("rejected length input {:?}", answer);
                    writeln!(self.output, "Please enter a valid integer.")?
                }
            }
        }
    }

    pub fn read_text(&mut self, label: &str) -> Result<String> {
        self.ask(&format!("{}: ", label))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
