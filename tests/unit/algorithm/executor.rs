//! Tests for region orchestration and counting

#[cfg(test)]
mod tests {
    use polypack::algorithm::executor::{
        EngineConfig, NotFitReason, PackingEngine, RegionVerdict, StrategyKind,
        count_fittable_regions,
    };
    use polypack::spatial::RegionSpec;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn blocks(shapes: &[&[&str]]) -> BTreeMap<usize, Vec<String>> {
        shapes
            .iter()
            .enumerate()
            .map(|(index, rows)| (index, rows.iter().map(ToString::to_string).collect()))
            .collect()
    }

    fn engine(shapes: &[&[&str]], config: EngineConfig) -> PackingEngine {
        PackingEngine::from_blocks(&blocks(shapes), config)
    }

    const fn fit(strategy: StrategyKind) -> RegionVerdict {
        RegionVerdict::Fit { strategy }
    }

    const fn not_fit(reason: NotFitReason) -> RegionVerdict {
        RegionVerdict::NotFit { reason }
    }

    // Tests the default engine parameters
    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.exact_piece_limit, 12);
        assert_eq!(config.region_timeout, Duration::from_millis(6_000));
        assert!(!config.parallel);
    }

    // Tests a square fits a larger region
    #[test]
    fn test_square_in_three_by_three_counts() {
        let shapes = blocks(&[&["##", "##"]]);
        assert_eq!(count_fittable_regions(&shapes, &["3x3: 1"]), 1);
    }

    // Tests the area pre-check rejects without searching
    #[test]
    fn test_area_exceeded() {
        let engine = engine(&[&["##", "##"]], EngineConfig::default());

        assert_eq!(
            engine.evaluate_line("2x2: 2"),
            not_fit(NotFitReason::AreaExceeded)
        );
        assert_eq!(engine.count_fittable(&["2x2: 2"]), 0);
    }

    // Tests thirteen single cells route to greedy and still fit
    #[test]
    fn test_many_pieces_use_greedy() {
        let engine = engine(&[&["#"]], EngineConfig::default());

        assert_eq!(engine.evaluate_line("4x4: 13"), fit(StrategyKind::Greedy));
        assert_eq!(engine.evaluate_line("4x4: 12"), fit(StrategyKind::Exact));
    }

    // Tests the piece limit decides the strategy
    #[test]
    fn test_exact_piece_limit_selects_strategy() {
        let l_shape: &[&str] = &["#.", "##"];
        let exact = engine(&[l_shape], EngineConfig::default());
        let greedy_only = engine(
            &[l_shape],
            EngineConfig {
                exact_piece_limit: 0,
                ..EngineConfig::default()
            },
        );

        assert_eq!(exact.evaluate_line("2x3: 2"), fit(StrategyKind::Exact));
        assert_eq!(
            greedy_only.evaluate_line("2x3: 2"),
            not_fit(NotFitReason::Exhausted)
        );
    }

    // Tests an exhaustive search that finds nothing
    #[test]
    fn test_exhausted_region() {
        let engine = engine(&[&["##", "##"]], EngineConfig::default());
        assert_eq!(
            engine.evaluate_line("3x3: 2"),
            not_fit(NotFitReason::Exhausted)
        );
    }

    // Tests regions needing no pieces fit trivially
    #[test]
    fn test_trivial_regions() {
        let engine = engine(&[&["##", "##"]], EngineConfig::default());

        assert_eq!(engine.evaluate_line("0x0:"), fit(StrategyKind::Trivial));
        assert_eq!(engine.evaluate_line("1x1: 0 0 0"), fit(StrategyKind::Trivial));
    }

    // Tests counts beyond the catalog are ignored
    #[test]
    fn test_extra_counts_ignored() {
        let engine = engine(&[&["#"]], EngineConfig::default());
        assert_eq!(engine.evaluate_line("1x1: 1 5 5"), fit(StrategyKind::Exact));
    }

    // Tests malformed lines count as not fitting
    #[test]
    fn test_malformed_lines() {
        let engine = engine(&[&["#"]], EngineConfig::default());

        for line in ["", "garbage", "3x: 1", "axb: 1", "3 3: 1"] {
            assert_eq!(
                engine.evaluate_line(line),
                not_fit(NotFitReason::Malformed),
                "{line:?}"
            );
        }
        assert_eq!(engine.count_fittable(&["garbage", "1x1: 1"]), 1);
    }

    // Tests an empty catalog never fits
    #[test]
    fn test_empty_catalog() {
        let engine = engine(&[], EngineConfig::default());

        assert_eq!(
            engine.evaluate_line("3x3:"),
            not_fit(NotFitReason::EmptyCatalog)
        );
    }

    // Tests a required shape without cells never fits
    #[test]
    fn test_empty_shape_required() {
        let engine = engine(&[&["#"], &["..", ".."]], EngineConfig::default());

        assert_eq!(
            engine.evaluate_line("3x3: 1 1"),
            not_fit(NotFitReason::EmptyShape)
        );
        assert_eq!(engine.evaluate_line("3x3: 1 0"), fit(StrategyKind::Exact));
    }

    // Tests huge counts are rejected by area without expanding them
    // Verified by building the piece list before the area check
    #[test]
    fn test_huge_counts_do_not_abort_the_batch() {
        let shapes = blocks(&[&["#"]]);
        let lines = ["3x3: 1", "3x3: 4611686018427387904", "3x3: 10000000000", "3x3: 2"];
        assert_eq!(count_fittable_regions(&shapes, &lines), 2);

        let engine = engine(&[&["#"], &["##"]], EngineConfig::default());
        assert_eq!(
            engine.evaluate_line(&format!("3x3: {} {}", usize::MAX, usize::MAX)),
            not_fit(NotFitReason::AreaExceeded)
        );
    }

    // Tests huge counts on an oversized region never build pieces
    #[test]
    fn test_huge_counts_on_oversized_region() {
        let engine = engine(&[&["#"]], EngineConfig::default());
        assert_eq!(
            engine.evaluate_line("99999999999x99999999999: 10000000000000"),
            not_fit(NotFitReason::Oversized)
        );
    }

    // Tests regions beyond the dimension cap are rejected
    #[test]
    fn test_oversized_region() {
        let engine = engine(&[&["#"]], EngineConfig::default());
        assert_eq!(
            engine.evaluate_line("20000x1: 1"),
            not_fit(NotFitReason::Oversized)
        );
    }

    // Tests an expired budget reports a timeout
    #[test]
    fn test_zero_timeout() {
        let engine = engine(
            &[&["##", "##"]],
            EngineConfig {
                region_timeout: Duration::ZERO,
                ..EngineConfig::default()
            },
        );
        assert_eq!(
            engine.evaluate_line("3x3: 1"),
            not_fit(NotFitReason::TimedOut)
        );
    }

    // Tests parallel evaluation gives the same verdicts in input order
    #[test]
    fn test_parallel_matches_serial() {
        let shapes: &[&[&str]] = &[&["##", "##"], &["#.", "##"], &["###"]];
        let lines = [
            "3x3: 1", "2x2: 2", "2x3: 0 2", "4x4: 2 0 0", "bad", "5x5: 1 1 1", "3x3: 0 0 3",
            "3x3: 0 3 0",
        ];
        let serial = engine(shapes, EngineConfig::default());
        let parallel = engine(
            shapes,
            EngineConfig {
                parallel: true,
                ..EngineConfig::default()
            },
        );

        let expected = serial.evaluate_all(&lines);
        assert_eq!(parallel.evaluate_all(&lines), expected);
        assert_eq!(expected.len(), lines.len());
        assert_eq!(serial.count_fittable(&lines), parallel.count_fittable(&lines));
    }

    // Tests the observer sees every verdict once
    #[test]
    fn test_observer_called_per_region() {
        let engine = engine(&[&["#"]], EngineConfig::default());
        let seen = AtomicUsize::new(0);
        let fits = AtomicUsize::new(0);

        let verdicts = engine.evaluate_all_with(&["1x1: 1", "1x1: 2", "oops"], |verdict| {
            seen.fetch_add(1, Ordering::Relaxed);
            if verdict.is_fit() {
                fits.fetch_add(1, Ordering::Relaxed);
            }
        });

        assert_eq!(verdicts.len(), 3);
        assert_eq!(seen.load(Ordering::Relaxed), 3);
        assert_eq!(fits.load(Ordering::Relaxed), 1);
    }

    // Tests repeated evaluation is deterministic
    #[test]
    fn test_repeatable_count() {
        let shapes = blocks(&[&["###", ".#."], &["##", "##"]]);
        let lines = ["4x4: 4 0", "4x4: 0 4", "4x4: 2 2", "5x3: 3 0", "6x6: 2 2"];

        let first = count_fittable_regions(&shapes, &lines);
        for _ in 0..3 {
            assert_eq!(count_fittable_regions(&shapes, &lines), first);
        }
    }

    // Tests evaluating a parsed region directly
    #[test]
    fn test_evaluate_parsed_spec() {
        let engine = engine(&[&["###", ".#."]], EngineConfig::default());
        let spec = RegionSpec::new(4, 4, vec![4]);

        assert_eq!(engine.evaluate(&spec), fit(StrategyKind::Exact));
    }

    // Tests verdict display text
    #[test]
    fn test_verdict_display() {
        assert_eq!(fit(StrategyKind::Greedy).to_string(), "fit (greedy)");
        assert_eq!(
            not_fit(NotFitReason::AreaExceeded).to_string(),
            "not fit (pieces exceed region area)"
        );
        assert!(!not_fit(NotFitReason::TimedOut).is_fit());
    }
}
