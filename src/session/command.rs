/// The commands offered at the main prompt, in the order they are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowPlanets,
    ConvertAu,
    CalculateDistance,
    Travel,
    CalculateDelay,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::ShowPlanets,
        Command::ConvertAu,
        Command::CalculateDistance,
        Command::Travel,
        Command::CalculateDelay,
    ];

    /// Label the user types to run the command.
    pub fn label(self) -> &'static str {
        match self {
            Command::ShowPlanets => "Show Planets",
            Command::ConvertAu => "Convert AU",
            Command::CalculateDistance => "Calculate Distance",
            Command::Travel => "Travel",
            Command::CalculateDelay => "Calculate Delay",
        }
    }

    /// Exact, case-sensitive match against the labels.
    pub fn from_label(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.label() == input)
    }
}
