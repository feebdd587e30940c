//! Unit tests for the scoring engine.

#[cfg(test)]
mod throughput {
    use h2f_core::{NetworkAssumptions, NetworkType};

    use crate::{ScoreEngine, ScoreError};

    #[test]
    fn in_unit_range_for_all_networks() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        for network in NetworkType::ALL {
            for factor in [0.0, 0.5, 1.0, 2.0, 100.0] {
                let score = engine.throughput_score(network, factor).unwrap();
                assert!(
                    (0.0..=1.0).contains(&score),
                    "{network} factor {factor}: got {score}"
                );
            }
        }
    }

    #[test]
    fn zero_factor_is_exactly_zero() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        for network in NetworkType::ALL {
            assert_eq!(engine.throughput_score(network, 0.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn log_compression_keeps_networks_comparable() {
        // Air's raw baseline is ~555x urban road's; after log2 compression
        // the scores must stay within one order of magnitude of each other.
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        let air = engine.throughput_score(NetworkType::Air, 1.0).unwrap();
        let urban = engine.throughput_score(NetworkType::RoadUrban, 1.0).unwrap();
        assert!(air > urban, "air should outscore urban road");
        assert!(air / urban < 10.0, "log compression lost: {air} vs {urban}");
    }

    #[test]
    fn large_factor_saturates_at_one() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        let score = engine
            .throughput_score(NetworkType::Air, 1_000_000.0)
            .unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn negative_factor_rejected() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        assert_eq!(
            engine.throughput_score(NetworkType::Rail, -1.0),
            Err(ScoreError::InvalidFactor {
                name: "tonne scaling factor",
                value: -1.0
            })
        );
        assert!(engine.throughput_score(NetworkType::Rail, f64::NAN).is_err());
    }
}

#[cfg(test)]
mod emission {
    use h2f_core::{NetworkAssumptions, NetworkType};

    use crate::{ScoreEngine, ScoreError};

    #[test]
    fn in_unit_range_for_all_networks() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        for network in NetworkType::ALL {
            for pct in [0u8, 25, 50, 75, 100] {
                for factor in [0.0, 0.5, 1.0, 3.0] {
                    let score = engine.emission_score(network, pct, factor).unwrap();
                    assert!(
                        (0.0..=1.0).contains(&score),
                        "{network} pct {pct} factor {factor}: got {score}"
                    );
                }
            }
        }
    }

    #[test]
    fn monotone_in_hydrogen_uptake() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        for network in NetworkType::ALL {
            let mut prev = -1.0;
            for pct in 0u8..=100 {
                let score = engine.emission_score(network, pct, 1.0).unwrap();
                assert!(
                    score >= prev,
                    "{network}: score fell from {prev} to {score} at {pct} %"
                );
                prev = score;
            }
        }
    }

    #[test]
    fn full_uptake_scores_one() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        for network in NetworkType::ALL {
            assert_eq!(engine.emission_score(network, 100, 1.0).unwrap(), 1.0);
        }
    }

    #[test]
    fn rail_baseline_at_zero_uptake() {
        // rail baseline 22 g/tonne.km, ceiling 100 → score 0.78.
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        let score = engine.emission_score(NetworkType::Rail, 0, 1.0).unwrap();
        assert!((score - 0.78).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn air_baseline_saturates_ceiling() {
        // The air baseline (602) exceeds the 100 g ceiling, so the score
        // floors at 0 until uptake brings the adjusted value under 100.
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        assert_eq!(engine.emission_score(NetworkType::Air, 0, 1.0).unwrap(), 0.0);
        assert_eq!(engine.emission_score(NetworkType::Air, 50, 1.0).unwrap(), 0.0);
        let near_full = engine.emission_score(NetworkType::Air, 90, 1.0).unwrap();
        assert!(near_full > 0.0, "90 % uptake should clear the ceiling");
    }

    #[test]
    fn out_of_range_uptake_rejected() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        assert_eq!(
            engine.emission_score(NetworkType::Rail, 101, 1.0),
            Err(ScoreError::UptakeOutOfRange(101))
        );
    }

    #[test]
    fn negative_factor_rejected() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        assert!(engine.emission_score(NetworkType::Rail, 50, -0.1).is_err());
    }
}

#[cfg(test)]
mod combine {
    use crate::{ScoreError, combine_scores};

    #[test]
    fn empty_input_rejected() {
        assert_eq!(combine_scores(&[]), Err(ScoreError::EmptyInput));
    }

    #[test]
    fn singleton_is_identity() {
        for x in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(combine_scores(&[x]).unwrap(), x);
        }
    }

    #[test]
    fn mean_of_extremes() {
        assert_eq!(combine_scores(&[0.0, 1.0]).unwrap(), 0.5);
    }

    #[test]
    fn three_way_mean() {
        let mean = combine_scores(&[0.0, 0.5, 1.0]).unwrap();
        assert!((mean - 0.5).abs() < 1e-12);
    }
}

#[cfg(test)]
mod color {
    use h2f_core::Rgb;

    use crate::score_to_color;

    #[test]
    fn endpoints() {
        assert_eq!(score_to_color(0.0), Rgb::new(255, 0, 0));
        assert_eq!(score_to_color(1.0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn midpoint_rounds_half_away_from_zero() {
        assert_eq!(score_to_color(0.5), Rgb::new(128, 128, 0));
    }

    #[test]
    fn blue_channel_always_zero() {
        for i in 0..=100 {
            assert_eq!(score_to_color(f64::from(i) / 100.0).b, 0);
        }
    }

    #[test]
    fn out_of_range_inputs_clamped() {
        assert_eq!(score_to_color(-3.0), Rgb::new(255, 0, 0));
        assert_eq!(score_to_color(42.0), Rgb::new(0, 255, 0));
        assert_eq!(score_to_color(f64::NAN), Rgb::new(255, 0, 0));
    }
}

#[cfg(test)]
mod end_to_end {
    use h2f_core::{NetworkAssumptions, NetworkType};

    use crate::{ScoreEngine, ScoreInput};

    #[test]
    fn full_uptake_is_strictly_greener() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);

        let zero = engine
            .network_color(ScoreInput::new(NetworkType::Rail, 0))
            .unwrap();
        let full = engine
            .network_color(ScoreInput::new(NetworkType::Rail, 100))
            .unwrap();

        assert!(full.g > zero.g, "expected greener: {zero} -> {full}");
        assert!(full.r < zero.r, "expected less red: {zero} -> {full}");
    }

    #[test]
    fn score_result_components_consistent() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);

        let result = engine.score(ScoreInput::new(NetworkType::Rail, 50)).unwrap();
        let mean = (result.throughput_score + result.emission_score) / 2.0;
        assert!((result.combined_score - mean).abs() < 1e-12);
        assert_eq!(result.color, crate::score_to_color(result.combined_score));
    }

    #[test]
    fn deterministic_across_calls() {
        let table = NetworkAssumptions::default();
        let engine = ScoreEngine::new(&table);
        let input = ScoreInput {
            network: NetworkType::RoadInterstate,
            hydrogen_uptake_percent: 37,
            gco2_scaling_factor: 1.2,
            tonne_scaling_factor: 0.8,
        };
        assert_eq!(engine.score(input).unwrap(), engine.score(input).unwrap());
    }
}
