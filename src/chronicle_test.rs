#[cfg(test)]
mod tests {
    use super::super::chronicle::*;
    use super::super::deity::Deity;
    use super::super::economy::{BuildingKind, Cost};
    use super::super::heroes::HeroClass;
    use super::super::quests::QuestKey;

    fn sample_chronicle() -> Chronicle {
        let mut chronicle = Chronicle::new();
        chronicle.log(
            1,
            EntryKind::BuildingUpgraded {
                building: BuildingKind::Farm,
                level: 1,
                cost: Cost::new(50, 0, 0),
            },
        );
        chronicle.log(
            1,
            EntryKind::QuestResolved {
                quest: QuestKey::GatherResources,
                hero: HeroClass::Knight,
                roll: 42,
                chance: 60,
                success: true,
            },
        );
        chronicle.log(2, EntryKind::FoodConsumed { amount: 5 });
        chronicle.log(25, EntryKind::DeityPledged { deity: Deity::Hunt });
        chronicle
    }

    #[test]
    fn test_entries_display() {
        let chronicle = sample_chronicle();
        let lines: Vec<String> = chronicle.entries().iter().map(|e| e.to_string()).collect();

        assert_eq!(lines[0], "[Day 1] Farm upgraded to Lv 1 for 50G, 0F, 0A");
        assert_eq!(
            lines[1],
            "[Day 1] Knight succeeded 'Gather Resources' (roll 42 vs 60)"
        );
        assert_eq!(lines[2], "[Day 2] Heroes ate 5 Food");
        assert_eq!(lines[3], "[Day 25] Pledged to the Deity of the Hunt");
    }

    #[test]
    fn test_entries_serialize_with_type_tag() {
        let chronicle = sample_chronicle();
        let json = serde_json::to_string(&chronicle.entries()[1]).unwrap();

        assert!(json.contains("\"type\":\"QuestResolved\""));
        assert!(json.contains("\"quest\":\"gather_resources\""));

        let back: ChronicleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, chronicle.entries()[1].kind);
        assert_eq!(back.day, 1);
    }

    #[test]
    fn test_save_and_load() {
        let chronicle = sample_chronicle();
        let path = std::env::temp_dir().join(format!("hydra_chronicle_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();

        chronicle.save_to_file(&path).unwrap();
        let loaded = Chronicle::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.entries().len(), 4);
        for (a, b) in loaded.entries().iter().zip(chronicle.entries()) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.timestamp, b.timestamp);
        }
    }

    #[test]
    fn test_clear() {
        let mut chronicle = sample_chronicle();
        chronicle.clear();
        assert!(chronicle.entries().is_empty());
    }
}
