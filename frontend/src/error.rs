use blackjack_shared::{ReportKind, Seat};
use thiserror::Error;

/// Client-side failure taxonomy.
///
/// A `SeatNotFound` is fatal to the render call that triggered it but must
/// never prevent the other seats from updating.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ClientError {
    #[error("no seat registered for position '{0}'")]
    SeatNotFound(Seat),
    #[error("report request timed out ({kind:?})")]
    RequestTimeout { kind: ReportKind },
    #[error("transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_not_found_names_the_seat() {
        let err = ClientError::SeatNotFound(Seat::Ai2);
        assert_eq!(err.to_string(), "no seat registered for position 'ai2'");
    }
}
