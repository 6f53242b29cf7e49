//! CSV import acknowledgement and progress payloads.

use serde::{Deserialize, Serialize};

/// `POST /import` success payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Server-side phase of the running import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportPhase {
    Running,
    Completed,
    Error,
}

/// One tick of `GET /api/import/status`.
///
/// Polled until terminal, then discarded; nothing of it survives navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportStatus {
    pub current_row: u64,
    pub total_rows: u64,
    pub message: String,
    pub status: ImportPhase,
}

impl ImportStatus {
    /// No further polling is meaningful after a terminal tick.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, ImportPhase::Completed | ImportPhase::Error)
    }

    /// Progress indicator value, clamped to 0..=100.
    ///
    /// A completed import always reads 100 even if the server never reported
    /// the final row; an unknown total reads 0 while running.
    pub fn percent(&self) -> u32 {
        match self.status {
            ImportPhase::Completed => 100,
            _ if self.total_rows == 0 => 0,
            _ => ((self.current_row * 100 / self.total_rows) as u32).min(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(current_row: u64, total_rows: u64, status: ImportPhase) -> ImportStatus {
        ImportStatus {
            current_row,
            total_rows,
            message: String::new(),
            status,
        }
    }

    #[test]
    fn percent_follows_rows() {
        assert_eq!(tick(0, 10, ImportPhase::Running).percent(), 0);
        assert_eq!(tick(5, 10, ImportPhase::Running).percent(), 50);
        assert_eq!(tick(10, 10, ImportPhase::Running).percent(), 100);
    }

    #[test]
    fn percent_handles_degenerate_totals() {
        assert_eq!(tick(3, 0, ImportPhase::Running).percent(), 0);
        // Server over-ran its own estimate; stay clamped.
        assert_eq!(tick(15, 10, ImportPhase::Running).percent(), 100);
    }

    #[test]
    fn completed_reads_full_regardless_of_rows() {
        assert_eq!(tick(7, 10, ImportPhase::Completed).percent(), 100);
        assert_eq!(tick(0, 0, ImportPhase::Completed).percent(), 100);
    }

    #[test]
    fn terminal_states() {
        assert!(!tick(1, 10, ImportPhase::Running).is_terminal());
        assert!(tick(10, 10, ImportPhase::Completed).is_terminal());
        assert!(tick(4, 10, ImportPhase::Error).is_terminal());
    }

    #[test]
    fn progress_hits_full_exactly_once_across_a_run() {
        let sequence = [
            tick(0, 10, ImportPhase::Running),
            tick(4, 10, ImportPhase::Running),
            tick(9, 10, ImportPhase::Running),
            tick(10, 10, ImportPhase::Completed),
        ];
        let full_ticks = sequence.iter().filter(|s| s.percent() == 100).count();
        assert_eq!(full_ticks, 1);
        // Polling stops on the terminal tick, so the count cannot grow.
        assert!(sequence.last().unwrap().is_terminal());
    }

    #[test]
    fn phase_wire_names_are_lowercase() {
        let status: ImportStatus = serde_json::from_str(
            r#"{"current_row": 3, "total_rows": 12, "message": "Importing row 3", "status": "running"}"#,
        )
        .unwrap();
        assert_eq!(status.status, ImportPhase::Running);
        assert_eq!(
            serde_json::to_string(&ImportPhase::Completed).unwrap(),
            "\"completed\""
        );
    }
}
