//! Season reference data for the opponents we track closely.

use crate::model::{GameResult, Matchup, OpponentProfile, Scorer};

const HEADSHOTS: &str = "https://cdn.nba.com/headshots/nba/latest/1040x760";
const PLACEHOLDER_HEADSHOT: &str = "https://via.placeholder.com/150";

struct Entry {
    team: &'static str,
    record: &'static str,
    scorers: [(&'static str, f64, u32); 3],
    h2h: &'static [(&'static str, &'static str, GameResult)],
}

const ENTRIES: [Entry; 5] = [
    Entry {
        team: "Los Angeles Lakers",
        record: "10-5",
        scorers: [
            ("LeBron James", 25.4, 2544),
            ("Anthony Davis", 24.8, 203076),
            ("Austin Reaves", 16.2, 1630559),
        ],
        h2h: &[("Oct 20, 2025", "115-109", GameResult::Win)],
    },
    Entry {
        team: "San Antonio Spurs",
        record: "8-8",
        scorers: [
            ("Victor Wembanyama", 22.5, 1641705),
            ("Devin Vassell", 19.1, 1630170),
            ("Keldon Johnson", 17.4, 1629640),
        ],
        h2h: &[],
    },
    Entry {
        team: "Brooklyn Nets",
        record: "6-10",
        scorers: [
            ("Mikal Bridges", 21.2, 1628969),
            ("Cam Thomas", 20.5, 1630560),
            ("Nic Claxton", 12.8, 1629651),
        ],
        h2h: &[],
    },
    Entry {
        team: "Miami Heat",
        record: "9-7",
        scorers: [
            ("Jimmy Butler", 23.6, 202710),
            ("Bam Adebayo", 20.1, 1628389),
            ("Tyler Herro", 19.8, 1629639),
        ],
        h2h: &[],
    },
    Entry {
        team: "Denver Nuggets",
        record: "12-4",
        scorers: [
            ("Nikola Jokic", 28.9, 203999),
            ("Jamal Murray", 21.5, 1627750),
            ("Michael Porter Jr.", 17.2, 1629008),
        ],
        h2h: &[("Nov 5, 2025", "108-112", GameResult::Loss)],
    },
];

impl Entry {
    fn profile(&self) -> OpponentProfile {
        OpponentProfile {
            record: self.record.to_string(),
            scorers: self
                .scorers
                .iter()
                .map(|(name, ppg, player_id)| Scorer {
                    name: name.to_string(),
                    ppg: *ppg,
                    img: format!("{}/{}.png", HEADSHOTS, player_id),
                })
                .collect(),
            h2h: self
                .h2h
                .iter()
                .map(|(date, score, result)| Matchup {
                    date: date.to_string(),
                    score: score.to_string(),
                    result: *result,
                })
                .collect(),
        }
    }
}

pub fn default_profile() -> OpponentProfile {
    let scorers = [("Player One", 20.0), ("Player Two", 18.0), ("Player Three", 15.0)]
        .into_iter()
        .map(|(name, ppg)| Scorer {
            name: name.to_string(),
            ppg,
            img: PLACEHOLDER_HEADSHOT.to_string(),
        })
        .collect();
    OpponentProfile {
        record: "0-0".to_string(),
        scorers,
        h2h: Vec::new(),
    }
}

/// Profile for `opponent`, or the default profile for teams not listed.
pub fn opponent_profile(opponent: &str) -> OpponentProfile {
    ENTRIES
        .iter()
        .find(|e| e.team == opponent)
        .map(Entry::profile)
        .unwrap_or_else(default_profile)
}

pub fn is_listed(opponent: &str) -> bool {
    ENTRIES.iter().any(|e| e.team == opponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_opponent_has_its_own_profile() {
        let nuggets = opponent_profile("Denver Nuggets");
        assert_eq!(nuggets.record, "12-4");
        assert_eq!(nuggets.scorers[0].name, "Nikola Jokic");
        assert_eq!(
            nuggets.scorers[0].img,
            "https://cdn.nba.com/headshots/nba/latest/1040x760/203999.png"
        );
        assert_eq!(nuggets.h2h.len(), 1);
        assert_eq!(nuggets.h2h[0].result, GameResult::Loss);
    }

    #[test]
    fn unlisted_opponent_falls_back_to_default() {
        assert!(!is_listed("Toronto Raptors"));
        let profile = opponent_profile("Toronto Raptors");
        assert_eq!(profile, default_profile());
        assert_eq!(profile.record, "0-0");
        assert_eq!(profile.scorers.len(), 3);
        assert!(profile.scorers.iter().all(|s| s.img == PLACEHOLDER_HEADSHOT));
        assert!(profile.h2h.is_empty());
    }

    #[test]
    fn scorers_never_exceed_three() {
        for entry in &ENTRIES {
            assert!(entry.profile().scorers.len() <= 3, "{}", entry.team);
        }
    }
}
