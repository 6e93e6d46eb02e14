#[cfg(test)]
mod tests {
    use super::super::rng::*;
    use super::super::selector::*;

    struct Stub {
        name: &'static str,
        eligible: bool,
        weight: i64,
        block: usize,
    }

    impl Stub {
        fn new(name: &'static str, weight: i64) -> Self {
            Stub {
                name,
                eligible: true,
                weight,
                block: 0,
            }
        }

        fn blocking(mut self, block: usize) -> Self {
            self.block = block;
            self
        }

        fn ineligible(mut self) -> Self {
            self.eligible = false;
            self
        }
    }

    impl Candidate<()> for Stub {
        fn name(&self) -> &str {
            self.name
        }

        fn is_eligible(&self, _state: &()) -> bool {
            self.eligible
        }

        fn weight(&self, _state: &()) -> i64 {
            self.weight
        }

        fn repeat_block(&self) -> usize {
            self.block
        }
    }

    #[test]
    fn test_non_positive_weights_never_chosen() {
        let candidates = vec![Stub::new("a", 10), Stub::new("b", 0), Stub::new("c", -5)];
        let mut selector = WeightedSelector::new(3);
        let mut rng = GameRng::seeded(11);

        for _ in 0..200 {
            let picked = selector.pick(&candidates, &(), &mut rng).map(|c| c.name);
            assert_eq!(picked, Some("a"));
        }
    }

    #[test]
    fn test_single_eligible_candidate_always_picked() {
        let candidates = vec![
            Stub::new("gone", 50).ineligible(),
            Stub::new("only", 1),
            Stub::new("also_gone", 50).ineligible(),
        ];
        let mut selector = WeightedSelector::new(3);
        let mut rng = GameRng::seeded(3);

        for _ in 0..50 {
            let picked = selector.pick(&candidates, &(), &mut rng).map(|c| c.name);
            assert_eq!(picked, Some("only"));
        }
    }

    #[test]
    fn test_repeat_block_keeps_candidate_out_of_window() {
        let candidates = vec![
            Stub::new("rare", 30).blocking(2),
            Stub::new("filler_a", 5),
            Stub::new("filler_b", 5),
        ];
        let mut selector = WeightedSelector::new(3);
        let mut rng = GameRng::seeded(2024);

        let picks: Vec<&str> = (0..300)
            .filter_map(|_| selector.pick(&candidates, &(), &mut rng).map(|c| c.name))
            .collect();

        assert_eq!(picks.len(), 300);
        assert!(picks.contains(&"rare"));
        for (i, name) in picks.iter().enumerate() {
            if *name == "rare" {
                for later in picks.iter().skip(i + 1).take(2) {
                    assert_ne!(*later, "rare", "rare repeated within its window");
                }
            }
        }
    }

    #[test]
    fn test_zero_window_never_blocks() {
        let mut selector = WeightedSelector::new(3);
        selector.record("x");
        assert!(!selector.is_blocked("x", 0));
        assert!(selector.is_blocked("x", 1));

        let candidates = vec![Stub::new("x", 1)];
        let mut rng = ScriptedRng::new();
        assert_eq!(
            selector.pick(&candidates, &(), &mut rng).map(|c| c.name),
            Some("x")
        );
    }

    #[test]
    fn test_empty_pool_consumes_no_draw() {
        let candidates = vec![Stub::new("a", 0), Stub::new("b", 4).ineligible()];
        let mut selector = WeightedSelector::new(3);
        let mut rng = ScriptedRng::new().with_floats([0.5]);

        assert!(selector.pick(&candidates, &(), &mut rng).is_none());
        assert_eq!(rng.remaining(), 1);
        assert_eq!(selector.history().count(), 0);

        let none: Vec<Stub> = Vec::new();
        assert!(selector.pick(&none, &(), &mut rng).is_none());
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_draw_on_boundary_goes_to_earlier_candidate() {
        let candidates = vec![Stub::new("first", 10), Stub::new("second", 10)];
        let mut selector = WeightedSelector::new(3);

        let mut rng = ScriptedRng::new().with_floats([10.0, 10.5, 0.0]);
        let names: Vec<&str> = (0..3)
            .filter_map(|_| selector.pick(&candidates, &(), &mut rng).map(|c| c.name))
            .collect();

        assert_eq!(names, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_weigh_keeps_declared_order() {
        let candidates = vec![
            Stub::new("a", 3),
            Stub::new("b", 0),
            Stub::new("c", 7).ineligible(),
            Stub::new("d", 2).blocking(1),
            Stub::new("e", 1),
        ];
        let mut selector = WeightedSelector::new(3);
        selector.record("d");

        let weighed: Vec<(&str, i64)> = selector
            .weigh(&candidates, &())
            .into_iter()
            .map(|(c, w)| (c.name, w))
            .collect();
        assert_eq!(weighed, vec![("a", 3), ("e", 1)]);
    }

    #[test]
    fn test_history_is_capped() {
        let mut selector = WeightedSelector::new(3);
        for name in ["a", "b", "c", "d", "e"] {
            selector.record(name);
        }
        let history: Vec<&str> = selector.history().collect();
        assert_eq!(history, vec!["c", "d", "e"]);

        selector.clear();
        assert_eq!(selector.history().count(), 0);
    }
}
