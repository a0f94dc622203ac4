use scope_core::{Result, ScopeError};

/// The closed set of menu actions. Anything else is rejected at the parse
/// boundary with [`ScopeError::InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the immutable processor description.
    ShowInfo,
    /// Take and render one usage snapshot.
    ShowUsage,
    /// Real-time monitor with the default 60 samples at 1 s.
    MonitorDefault,
    /// Real-time monitor with prompted duration and interval.
    MonitorCustom,
    /// Render the retained history plus statistics.
    ShowHistory,
    /// Export static info, a fresh snapshot, and the history to JSON.
    Export,
    /// Leave the program.
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(Self::ShowInfo),
            "2" => Ok(Self::ShowUsage),
            "3" => Ok(Self::MonitorDefault),
            "4" => Ok(Self::MonitorCustom),
            "5" => Ok(Self::ShowHistory),
            "6" => Ok(Self::Export),
            "7" => Ok(Self::Quit),
            other => Err(ScopeError::InvalidInput(format!(
                "'{other}' is not a menu option, pick 1-7"
            ))),
        }
    }
}

pub fn menu_text() -> &'static str {
    "\nCPU USAGE MONITOR\n\
     1. Show processor information\n\
     2. Show current CPU usage\n\
     3. Real-time monitor (60 samples @ 1s)\n\
     4. Real-time monitor (custom duration)\n\
     5. Show usage history\n\
     6. Export data to file\n\
     7. Exit\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_number_maps_to_its_command() {
        let expected = [
            Command::ShowInfo,
            Command::ShowUsage,
            Command::MonitorDefault,
            Command::MonitorCustom,
            Command::ShowHistory,
            Command::Export,
            Command::Quit,
        ];
        for (i, command) in expected.iter().enumerate() {
            let input = (i + 1).to_string();
            assert_eq!(Command::parse(&input).unwrap(), *command);
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(Command::parse(" 3 \n").unwrap(), Command::MonitorDefault);
    }

    #[test]
    fn unrecognized_choices_are_rejected() {
        for input in ["0", "8", "42", "", "one", "1.0", "exit"] {
            assert!(matches!(
                Command::parse(input),
                Err(ScopeError::InvalidInput(_))
            ));
        }
    }
}
