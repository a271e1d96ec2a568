//! Unit tests for the demo generator

use super::*;

fn settings(sport: Sport) -> DemoSettings {
    DemoSettings {
        sport,
        seed: 7,
        teams: 4,
        buckets: 10,
        season: Season::new(2023),
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[test]
    fn test_same_seed_same_data() {
        let s = settings(Sport::Cfb);
        assert_eq!(generate(&s), generate(&s));

        let other = DemoSettings { seed: 8, ..s.clone() };
        assert_ne!(generate(&s), generate(&other));
    }

    #[test]
    fn test_shape_and_dates() {
        let obs = generate(&settings(Sport::Cfb));
        assert_eq!(obs.len(), 40);
        assert_eq!(obs[0].team, "Team A");
        assert_eq!(obs[0].label, "W1");
        assert_eq!(obs[0].date, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
        assert_eq!(obs[1].date, NaiveDate::from_ymd_opt(2023, 9, 8).unwrap());
        assert_eq!(obs[39].team, "Team D");
        assert_eq!(obs[39].bucket, 10);
    }

    #[test]
    fn test_cfb_values_in_range() {
        for o in generate(&DemoSettings {
            teams: 26,
            ..settings(Sport::Cfb)
        }) {
            assert_eq!(o.values.len(), 2);
            assert!((150.0..=550.0).contains(&o.values[0]));
            assert!((0.0..=56.0).contains(&o.values[1]));
        }
    }

    #[test]
    fn test_soccer_values_in_range() {
        let obs = generate(&settings(Sport::Soccer));
        assert_eq!(obs[0].label, "MD1");
        for o in obs {
            assert_eq!(o.values.len(), 1);
            assert!((0.0..=5.0).contains(&o.values[0]));
            assert_eq!(o.values[0].fract(), 0.0);
        }
    }

    #[test]
    fn test_validate_bounds() {
        assert!(settings(Sport::Cfb).validate().is_ok());
        assert!(DemoSettings {
            teams: 0,
            ..settings(Sport::Cfb)
        }
        .validate()
        .is_err());
        assert!(DemoSettings {
            buckets: MAX_WEEKS + 1,
            ..settings(Sport::Cfb)
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_team_names() {
        assert_eq!(team_names(3), vec!["Team A", "Team B", "Team C"]);
        assert_eq!(team_names(100).len(), 26);
    }
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_team_totals_match_manual_sums() {
        let obs = generate(&settings(Sport::Cfb));
        let totals = team_totals(&obs, 2);
        assert_eq!(totals.len(), 4);

        for t in &totals {
            let mine: Vec<&Observation> = obs.iter().filter(|o| o.team == t.team).collect();
            let yards: f64 = mine.iter().map(|o| o.values[0]).sum();
            let points: f64 = mine.iter().map(|o| o.values[1]).sum();
            assert_eq!(t.games, 10);
            assert_eq!(t.totals, vec![yards, points]);
            assert!((t.means[0].unwrap() - yards / 10.0).abs() < 1e-9);
            assert!((t.per_game(1).unwrap() - points / 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_team_totals_empty() {
        assert!(team_totals(&[], 1).is_empty());
    }

    #[test]
    fn test_team_series_ordered_by_bucket() {
        let mut obs = generate(&settings(Sport::Soccer));
        obs.reverse();
        let series = team_series(&obs, "team b");
        assert_eq!(series.len(), 10);
        assert!(series.windows(2).all(|w| w[0].bucket < w[1].bucket));
        assert!(team_series(&obs, "Team Z").is_empty());
    }
}
