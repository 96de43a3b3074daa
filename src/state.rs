// ---------------------------------------------------------------------------
// Menu state machine
// ---------------------------------------------------------------------------

/// Where the interactive loop currently is, independent of any I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MenuDisplayed,
    AwaitingChoice,
    Executing(Choice),
    Exited,
}

/// One entry of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Summary,
    FilterByYear,
    FilterByPrice,
    AddCamera,
    RetrieveDetails,
    UpdatePrice,
    Visualize,
    Exit,
}

impl Choice {
    /// Menu entries in display order; entry `i` is selected by typing `i + 1`.
    pub const ALL: [Choice; 8] = [
        Choice::Summary,
        Choice::FilterByYear,
        Choice::FilterByPrice,
        Choice::AddCamera,
        Choice::RetrieveDetails,
        Choice::UpdatePrice,
        Choice::Visualize,
        Choice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Choice::Summary => "View Dataset Summary",
            Choice::FilterByYear => "Filter by Release Year",
            Choice::FilterByPrice => "Filter by Price",
            Choice::AddCamera => "Add a New Camera",
            Choice::RetrieveDetails => "Retrieve Camera Details",
            Choice::UpdatePrice => "Update Camera Price",
            Choice::Visualize => "Visualize Data",
            Choice::Exit => "Exit",
        }
    }

    /// Parse the user's answer. Only the exact digits `1`..`8` are accepted.
    pub fn parse(input: &str) -> Option<Choice> {
        Self::ALL
            .iter()
            .enumerate()
            .find(|(i, _)| input == (i + 1).to_string())
            .map(|(_, c)| *c)
    }
}

/// One entry of the visualization sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartChoice {
    PriceDistribution,
    ResolutionVsPrice,
}

impl ChartChoice {
    pub fn parse(input: &str) -> Option<ChartChoice> {
        match input {
            "1" => Some(ChartChoice::PriceDistribution),
            "2" => Some(ChartChoice::ResolutionVsPrice),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_digit() {
        for (i, choice) in Choice::ALL.iter().enumerate() {
            assert_eq!(Choice::parse(&(i + 1).to_string()), Some(*choice));
        }
    }

    #[test]
    fn rejects_unknown_answers() {
        for input in ["", "0", "9", "01", "exit", "1.0"] {
            assert_eq!(Choice::parse(input), None, "{input:?}");
        }
        assert_eq!(ChartChoice::parse("3"), None);
        assert_eq!(ChartChoice::parse("2"), Some(ChartChoice::ResolutionVsPrice));
    }
}
