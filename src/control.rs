use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoiCommand {
    Next,
    Toggle,
    JumpTo(usize),
}

impl PoiCommand {
    /// Parses `next`, `toggle` or `jump <index>`.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let command = match parts.next()? {
            "next" | "n" => PoiCommand::Next,
            "toggle" | "t" => PoiCommand::Toggle,
            "jump" | "j" => PoiCommand::JumpTo(parts.next()?.parse().ok()?),
            _ => return None,
        };
        parts.next().is_none().then_some(command)
    }
}

pub struct CommandQueue {
    receiver: Receiver<PoiCommand>,
}

#[derive(Clone)]
pub struct CommandSender {
    sender: Sender<PoiCommand>,
}

impl CommandQueue {
    pub fn new() -> (Self, CommandSender) {
        let (sender, receiver) = channel();
        (Self { receiver }, CommandSender { sender })
    }

    pub fn try_recv(&self) -> Option<PoiCommand> {
        self.receiver.try_recv().ok()
    }
}

impl CommandSender {
    pub fn send(&self, cmd: PoiCommand) {
        let _ = self.sender.send(cmd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(PoiCommand::parse("next"), Some(PoiCommand::Next));
        assert_eq!(PoiCommand::parse(" t "), Some(PoiCommand::Toggle));
        assert_eq!(PoiCommand::parse("jump 3"), Some(PoiCommand::JumpTo(3)));
    }

    #[test]
    fn rejects_unknown_or_incomplete_commands() {
        assert_eq!(PoiCommand::parse("fly"), None);
        assert_eq!(PoiCommand::parse("jump"), None);
        assert_eq!(PoiCommand::parse("jump -1"), None);
        assert_eq!(PoiCommand::parse("next 2"), None);
        assert_eq!(PoiCommand::parse(""), None);
    }
}
