/// Menu entries, bound to their handlers in `Shell::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    Quit,
}

impl Command {
    /// Display order of the menu.
    pub const MENU: [Command; 4] = [
        Command::Deposit,
        Command::Withdraw,
        Command::Statement,
        Command::Quit,
    ];

    pub fn key(&self) -> char {
        match self {
            Command::Deposit => 'd',
            Command::Withdraw => 's',
            Command::Statement => 'e',
            Command::Quit => 'q',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::Deposit => "Deposit",
            Command::Withdraw => "Withdraw",
            Command::Statement => "Statement",
            Command::Quit => "Quit",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Command::Deposit => "💰",
            Command::Withdraw => "💸",
            Command::Statement => "📄",
            Command::Quit => "🚪",
        }
    }

    /// Case-insensitive, surrounding whitespace ignored.
    pub fn parse(input: &str) -> Option<Command> {
        let mut chars = input.trim().chars();
        let key = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            return None;
        }
        Self::MENU.into_iter().find(|command| command.key() == key)
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.key().to_ascii_uppercase(),
            self.icon(),
            self.label()
        )
    }
}
