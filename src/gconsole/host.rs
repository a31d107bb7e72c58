use std::io::{BufRead, Write};

use log::warn;

use crate::gconsole::{Action, Error, Event, Extension, Result};

pub fn decode(line: &str) -> Result<Event> {
    serde_json::from_str(line).map_err(|source| Error::Decode { line: line.into(), source })
}

pub fn write_action(mut output: impl Write, action: &Action) -> Result<()> {
    serde_json::to_writer(&mut output, action).map_err(Error::Encode)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}

/// Reads one event per line from the launcher and answers each event that
/// produced an action with exactly one line. Runs until the input is closed.
pub fn run(extension: &mut Extension, input: impl BufRead, mut output: impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let event = match decode(line) {
            Ok(event) => event,
            Err(err) => {
                warn!("{}", err);
                continue;
            }
        };

        if let Some(action) = extension.dispatch(&event) {
            write_action(&mut output, &action)?;
        }
    }

    Ok(())
}
