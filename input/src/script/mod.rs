
use crate::ParseError;
use crate::key::{Key, parse_key};
use anyhow::Result;

/// One line of a key script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Press(Key),
    /// Let time pass, in milliseconds
    Wait(u32),
}

/// Parse a whole script, one step per line
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            parse_step(line).map_err(|e| {
                anyhow::Error::from(ParseError::InvalidLine {
                    line: i + 1,
                    reason: e.to_string(),
                })
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()
}

/// Parse a single step: a key name, or `wait MS`
pub fn parse_step(line: &str) -> Result<ScriptStep> {
    let line = line.trim();
    let mut parts = line.split_whitespace();

    match parts.next() {
        None => Err(ParseError::EmptyInput.into()),
        Some(word) if word.eq_ignore_ascii_case("wait") => {
            let step = parse_wait(parts.next())?;
            let rest: Vec<&str> = parts.collect();
            if !rest.is_empty() {
                return Err(ParseError::TrailingInput(rest.join(" ")).into());
            }
            Ok(step)
        }
        Some(_) => Ok(ScriptStep::Press(parse_key(line)?)),
    }
}

fn parse_wait(arg: Option<&str>) -> Result<ScriptStep> {
    // wait MS
    let ms = arg.ok_or_else(|| ParseError::MissingField("wait duration".to_string()))?;
    let ms = ms
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidDuration(ms.to_string()))?;
    Ok(ScriptStep::Wait(ms))
}
