//! Interactive step commands read from stdin

use std::str::FromStr;

use anyhow::{anyhow, bail};

pub const HELP: &str = "\
Commands:
  n, next         next step
  p, prev         previous step
  r, reset        back to the first step
  e, end          jump to the last step
  g N, goto N     jump to step N
  space, play     start or pause autoplay
  v KEY           switch variant
  stage ID        jump to a pipeline or flow stage
  section ID      describe a memory area
  h, help         show this help
  q, quit         leave";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepCommand {
    Next,
    Prev,
    Reset,
    End,
    /// Zero-based frame index
    Goto(usize),
    TogglePlay,
    Variant(String),
    /// Jump to the frame where a stage is active
    Stage(String),
    /// Print the description of a memory section
    Section(String),
    Help,
    Quit,
}

impl StepCommand {
    /// Parse a raw input line; blank lines yield `None`
    pub fn parse_line(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        // A lone space is the play/pause key
        if line == " " {
            return Ok(Some(StepCommand::TogglePlay));
        }
        if line.trim().is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for StepCommand {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(word) = words.next() else {
            bail!("empty command");
        };
        let argument = words.next();

        let command = match word.to_ascii_lowercase().as_str() {
            "n" | "next" => StepCommand::Next,
            "p" | "prev" | "previous" => StepCommand::Prev,
            "r" | "reset" => StepCommand::Reset,
            "e" | "end" => StepCommand::End,
            "space" | "play" | "pause" => StepCommand::TogglePlay,
            "h" | "help" | "?" => StepCommand::Help,
            "q" | "quit" | "exit" => StepCommand::Quit,
            "g" | "goto" => {
                let argument = argument.ok_or_else(|| anyhow!("'{}' needs a step number", word))?;
                let step: usize = argument
                    .parse()
                    .map_err(|_| anyhow!("'{}' is not a step number", argument))?;
                if step == 0 {
                    bail!("step numbers start at 1");
                }
                StepCommand::Goto(step - 1)
            }
            "v" | "variant" => {
                let key = argument.ok_or_else(|| anyhow!("'{}' needs a variant key", word))?;
                StepCommand::Variant(key.to_string())
            }
            "stage" => {
                let id = argument.ok_or_else(|| anyhow!("'stage' needs a stage id"))?;
                StepCommand::Stage(id.to_string())
            }
            "section" => {
                let id = argument.ok_or_else(|| anyhow!("'section' needs a section id"))?;
                StepCommand::Section(id.to_string())
            }
            other => bail!("unknown command '{}', type 'help' for a list", other),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_forms() {
        for (input, expected) in [
            ("n", StepCommand::Next),
            ("next", StepCommand::Next),
            ("P", StepCommand::Prev),
            ("reset", StepCommand::Reset),
            ("e", StepCommand::End),
            ("play", StepCommand::TogglePlay),
            ("q", StepCommand::Quit),
        ] {
            assert_eq!(input.parse::<StepCommand>().unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn test_goto_is_one_based() {
        assert_eq!("g 3".parse::<StepCommand>().unwrap(), StepCommand::Goto(2));
        assert_eq!("goto 1".parse::<StepCommand>().unwrap(), StepCommand::Goto(0));
        assert!("g 0".parse::<StepCommand>().is_err());
        assert!("g".parse::<StepCommand>().is_err());
        assert!("g three".parse::<StepCommand>().is_err());
    }

    #[test]
    fn test_variant_needs_key() {
        assert_eq!(
            "v 2pc-error".parse::<StepCommand>().unwrap(),
            StepCommand::Variant("2pc-error".to_string())
        );
        assert!("variant".parse::<StepCommand>().is_err());
    }

    #[test]
    fn test_stage_and_section_keep_id_case() {
        assert_eq!(
            "stage dockerBuild".parse::<StepCommand>().unwrap(),
            StepCommand::Stage("dockerBuild".to_string())
        );
        assert_eq!(
            "Section pcRegister".parse::<StepCommand>().unwrap(),
            StepCommand::Section("pcRegister".to_string())
        );
        assert!("stage".parse::<StepCommand>().is_err());
        assert!("section".parse::<StepCommand>().is_err());
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(StepCommand::parse_line(" \n").unwrap(), Some(StepCommand::TogglePlay));
        assert_eq!(StepCommand::parse_line("\n").unwrap(), None);
        assert_eq!(StepCommand::parse_line("  next  \r\n").unwrap(), Some(StepCommand::Next));
        assert!(StepCommand::parse_line("jump").is_err());
    }
}
