//! Headless runs: tap a session N times and record what the screen shows.

use crate::assets::{AssetCatalog, AssetError};
use lemonade_core::{LemonadeStateMachine, RandomSqueeze, Session, Step};
use serde::Serialize;
use tracing::{info, instrument};

/// One line of a simulated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    /// Taps applied so far (0 is the initial screen).
    pub tap: u64,
    /// Step shown after the tap.
    pub step: Step,
    /// Squeeze count (stale outside Squeeze).
    pub count: u32,
    /// Squeeze target (stale outside Squeeze).
    pub target: u32,
    /// Resolved instruction text.
    pub instruction: String,
    /// Resolved squeeze readout, only while squeezing.
    pub readout: Option<String>,
}

impl std::fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:<4} {:<12} {}", self.tap, self.step, self.instruction)?;
        if let Some(readout) = &self.readout {
            write!(f, " [{}]", readout)?;
        }
        Ok(())
    }
}

/// Runs `taps` taps against a fresh session.
///
/// The transcript has `taps + 1` entries: the initial screen, then one per tap.
#[instrument(skip(catalog))]
pub fn simulate(
    taps: u64,
    seed: Option<u64>,
    catalog: &AssetCatalog,
) -> Result<Vec<TranscriptEntry>, AssetError> {
    let mut session = Session::new(LemonadeStateMachine::new(RandomSqueeze::new(seed)));
    let mut transcript = Vec::with_capacity(transcript_capacity(taps));

    transcript.push(entry(&session, catalog)?);
    for _ in 0..taps {
        session.tap();
        transcript.push(entry(&session, catalog)?);
    }

    let lemonades = transcript
        .iter()
        .filter(|e| e.tap > 0 && e.step == Step::Drink)
        .count();
    info!(taps, lemonades, "Simulation complete");
    Ok(transcript)
}

/// Up-front reserve for a transcript; larger runs grow as they go.
fn transcript_capacity(taps: u64) -> usize {
    const MAX_RESERVED_ENTRIES: usize = 4096;
    usize::try_from(taps)
        .unwrap_or(usize::MAX)
        .min(MAX_RESERVED_ENTRIES)
        .saturating_add(1)
}

fn entry(session: &Session, catalog: &AssetCatalog) -> Result<TranscriptEntry, AssetError> {
    let rendered = catalog.render(&session.view())?;
    let state = session.state();
    Ok(TranscriptEntry {
        tap: session.taps(),
        step: state.step(),
        count: state.progress().count(),
        target: state.progress().target(),
        instruction: rendered.instruction,
        readout: rendered.readout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_capacity_is_bounded() {
        assert_eq!(transcript_capacity(0), 1);
        assert_eq!(transcript_capacity(9), 10);
        assert_eq!(transcript_capacity(100_000_000_000), 4097);
        assert_eq!(transcript_capacity(u64::MAX), 4097);
    }

    #[test]
    fn test_huge_tap_count_reserves_without_panicking() {
        let transcript: Vec<TranscriptEntry> = Vec::with_capacity(transcript_capacity(u64::MAX));
        assert!(transcript.capacity() >= 4097);
    }
}
