#[cfg(test)]
mod tests {
    use super::super::config::*;
    use super::super::economy::Cost;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_resources, Cost::new(150, 50, 0));
        assert_eq!(config.base_quests_per_day, 2);
        assert_eq!(config.recent_events_max, 3);
        assert_eq!(config.deity_milestone_day, 25);
        assert_eq!(config.max_success_chance, 95);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "name: hard\nhydra_hp: 1500\nstarting_resources:\n  gold: 80\n  food: 20\n  arcane: 0\n";
        let config: GameConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.name, "hard");
        assert_eq!(config.hydra_hp, 1500);
        assert_eq!(config.starting_resources, Cost::new(80, 20, 0));
        assert_eq!(config.hydra_damage, 75);
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn test_validation() {
        let mut config = GameConfig::default();
        config.hydra_damage = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.starting_resources.food = -1;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.deity_milestone_day = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let config = GameConfig {
            name: "seeded".to_string(),
            random_seed: Some(12345),
            ..GameConfig::default()
        };
        let path = std::env::temp_dir().join(format!("hydra_config_{}.json", std::process::id()));

        config.save_to_file(&path.to_string_lossy()).unwrap();
        let loaded = GameConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("hydra_config_{}.yaml", std::process::id()));
        std::fs::write(&path, "hydra_hp: -5\n").unwrap();

        let result = GameConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }
}
