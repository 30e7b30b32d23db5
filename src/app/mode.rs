#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Command,
    Quit,
}
