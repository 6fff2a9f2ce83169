//! Statistics report payloads and the request correlation identifier.

use serde::{Deserialize, Serialize};

/// Correlates a report request with its response over the fire-and-forget
/// transport. Allocated client-side, echoed back by the server.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RequestId(pub u64);

/// The three statistics reports the authority can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Wins,
    Decisions,
    Stands,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Wins, ReportKind::Decisions, ReportKind::Stands];

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Wins => "Wins per seat",
            ReportKind::Decisions => "Successful decisions",
            ReportKind::Stands => "Stand values per game",
        }
    }
}

/// Aggregate win percentages, ordered per `Seat::REPORT_ORDER`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinsReport {
    pub win_percentages: [f64; 4],
}

/// Aggregate decision-success percentages, same ordering as wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionsReport {
    pub success_percentages: [f64; 4],
}

/// Per-game stand-value series, one equal-length series per seat.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StandReport {
    pub croupier: Vec<f64>,
    pub ai1: Vec<f64>,
    pub ai2: Vec<f64>,
    pub human: Vec<f64>,
}

/// A resolved report of any kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReportData {
    Wins(WinsReport),
    Decisions(DecisionsReport),
    Stands(StandReport),
}

impl ReportData {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportData::Wins(_) => ReportKind::Wins,
            ReportData::Decisions(_) => ReportKind::Decisions,
            ReportData::Stands(_) => ReportKind::Stands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_data_reports_its_kind() {
        let wins = ReportData::Wins(WinsReport {
            win_percentages: [10.0, 20.0, 30.0, 40.0],
        });
        assert_eq!(wins.kind(), ReportKind::Wins);
        let stands = ReportData::Stands(StandReport::default());
        assert_eq!(stands.kind(), ReportKind::Stands);
    }

    #[test]
    fn request_id_is_transparent_on_the_wire() {
        let id = RequestId(7);
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(7));
    }
}
