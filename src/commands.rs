//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Start the deferred clear timer.
    /// After delay_ms, sends `SlideInMsg::ClearElapsed { generation }`
    ScheduleClear { generation: u64, delay_ms: u64 },
    /// Cancel a deferred clear timer that has not fired yet
    CancelClear { generation: u64 },
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Closing or reopening changes what is drawn
            Cmd::ScheduleClear { .. } => true,
            Cmd::CancelClear { .. } => false,
            Cmd::Quit => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => vec![],
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_needs_redraw_if_any_child_does() {
        let cmd = Cmd::batch(vec![Cmd::CancelClear { generation: 1 }, Cmd::Redraw]);
        assert!(cmd.needs_redraw());

        let cmd = Cmd::batch(vec![Cmd::CancelClear { generation: 1 }]);
        assert!(!cmd.needs_redraw());
    }

    #[test]
    fn test_flatten_drops_none_and_nested_batches() {
        let cmd = Cmd::batch(vec![
            Cmd::None,
            Cmd::batch(vec![Cmd::CancelClear { generation: 3 }, Cmd::Redraw]),
            Cmd::Quit,
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![Cmd::CancelClear { generation: 3 }, Cmd::Redraw, Cmd::Quit]
        );
    }
}
