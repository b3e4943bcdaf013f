/// Fatal conditions of the memory game. Wrong keys are not errors; they are
/// ordinary game flow handled by the state machine.
#[derive(Debug, thiserror::Error)]
pub enum SimonError {
    #[error("memory chain exhausted: cannot grow past {capacity} links")]
    ChainExhausted { capacity: usize },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_exhausted_display() {
        let err = SimonError::ChainExhausted { capacity: 1024 };
        assert_eq!(
            err.to_string(),
            "memory chain exhausted: cannot grow past 1024 links"
        );
    }

    #[test]
    fn test_terminal_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "tty gone");
        let err: SimonError = io.into();
        assert_eq!(err.to_string(), "terminal error: tty gone");
    }
}
