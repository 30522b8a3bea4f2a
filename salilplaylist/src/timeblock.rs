//! Découpage de la journée en six blocs horaires fixes.
//!
//! Les six blocs partitionnent les 24 heures sans trou ni recouvrement ;
//! c'est le bloc résolu pour l'heure courante qui sélectionne la playlist
//! active. Un seul bloc peut passer minuit (`start_hour > end_hour`).

use crate::{Error, Result};

/// Un bloc horaire fixe de la journée
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBlock {
    pub id: &'static str,
    pub name: &'static str,
    pub start_hour: u8,
    /// Heure de fin exclusive. 24 est admis pour un bloc se terminant à minuit.
    pub end_hour: u8,
}

/// Les six blocs, dans l'ordre canonique de résolution
pub const TIME_BLOCKS: [TimeBlock; 6] = [
    TimeBlock {
        id: "early-morning",
        name: "Early Morning",
        start_hour: 4,
        end_hour: 8,
    },
    TimeBlock {
        id: "morning",
        name: "Morning",
        start_hour: 8,
        end_hour: 12,
    },
    TimeBlock {
        id: "afternoon",
        name: "Afternoon",
        start_hour: 12,
        end_hour: 16,
    },
    TimeBlock {
        id: "evening",
        name: "Evening",
        start_hour: 16,
        end_hour: 20,
    },
    TimeBlock {
        id: "night",
        name: "Night",
        start_hour: 20,
        end_hour: 24,
    },
    TimeBlock {
        id: "late-night",
        name: "Late Night",
        start_hour: 0,
        end_hour: 4,
    },
];

/// Bloc de repli si aucun bloc ne correspond (inatteignable tant que les
/// blocs partitionnent la journée)
pub const FALLBACK_BLOCK_ID: &str = "early-morning";

impl TimeBlock {
    /// Indique si `hour` tombe dans ce bloc
    pub fn contains(&self, hour: u32) -> bool {
        let (start, end) = (self.start_hour as u32, self.end_hour as u32);
        if start <= end {
            // Plage normale (ex: 8-12)
            hour >= start && hour < end
        } else {
            // Plage passant minuit (ex: 22-4)
            hour >= start || hour < end
        }
    }
}

/// Résout l'heure du jour vers son bloc horaire
///
/// Retourne `Error::InvalidHour` pour une heure hors de [0, 23].
pub fn resolve_hour(hour: u32) -> Result<&'static TimeBlock> {
    if hour > 23 {
        return Err(Error::InvalidHour(hour));
    }

    let block = TIME_BLOCKS
        .iter()
        .find(|block| block.contains(hour))
        .or_else(|| TIME_BLOCKS.iter().find(|b| b.id == FALLBACK_BLOCK_ID))
        .unwrap_or(&TIME_BLOCKS[0]);

    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hours() {
        assert_eq!(resolve_hour(2).unwrap().id, "late-night");
        assert_eq!(resolve_hour(4).unwrap().id, "early-morning");
        assert_eq!(resolve_hour(9).unwrap().id, "morning");
        assert_eq!(resolve_hour(12).unwrap().id, "afternoon");
        assert_eq!(resolve_hour(19).unwrap().id, "evening");
        assert_eq!(resolve_hour(23).unwrap().id, "night");
        assert_eq!(resolve_hour(0).unwrap().id, "late-night");
    }

    #[test]
    fn test_partition_covers_every_hour_once() {
        for hour in 0..24u32 {
            let matching: Vec<_> = TIME_BLOCKS.iter().filter(|b| b.contains(hour)).collect();
            assert_eq!(matching.len(), 1, "hour {} matched {:?}", hour, matching);
            assert_eq!(resolve_hour(hour).unwrap().id, matching[0].id);
        }
    }

    #[test]
    fn test_exactly_one_wrapping_block() {
        let wrapping: Vec<_> = TIME_BLOCKS
            .iter()
            .filter(|b| b.start_hour > b.end_hour)
            .collect();
        // `late-night` est encodé 0-4 et `night` 20-24 : aucune ligne de la
        // table ne porte start > end, mais la résolution doit savoir gérer
        // les deux encodages du passage de minuit.
        assert!(wrapping.len() <= 1);

        let midnight_span = TimeBlock {
            id: "wrap",
            name: "Wrap",
            start_hour: 20,
            end_hour: 4,
        };
        assert!(midnight_span.contains(23));
        assert!(midnight_span.contains(0));
        assert!(midnight_span.contains(3));
        assert!(!midnight_span.contains(4));
        assert!(!midnight_span.contains(12));
    }

    #[test]
    fn test_invalid_hour_rejected() {
        assert!(matches!(resolve_hour(24), Err(Error::InvalidHour(24))));
        assert!(matches!(resolve_hour(100), Err(Error::InvalidHour(100))));
    }
}
