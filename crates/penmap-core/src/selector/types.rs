use crate::windows::{GeometryString, Window};

/// How an interactive selection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user picked a window.
    Chosen(Window),
    /// The user entered `0` or closed standard input.
    Exit,
    /// No pen devices were detected; nothing was prompted.
    NoDevices,
    /// No window resolved to a geometry; nothing was prompted.
    NoWindows,
}

impl Selection {
    pub fn geometry(&self) -> Option<&GeometryString> {
        match self {
            Selection::Chosen(window) => Some(&window.geometry),
            _ => None,
        }
    }
}

/// One line of user input, interpreted against the window count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Exit,
    /// Zero-based index into the window list.
    Window(usize),
    OutOfRange,
    NotANumber,
}
