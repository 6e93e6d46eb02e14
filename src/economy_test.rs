#[cfg(test)]
mod tests {
    use super::super::config::GameConfig;
    use super::super::controller::*;
    use super::super::economy::*;
    use super::super::error::GameError;
    use super::super::game::Game;
    use super::super::heroes::*;
    use super::super::rng::ScriptedRng;

    fn new_game() -> Game<ScriptedRng> {
        Game::with_rng(GameConfig::default(), ScriptedRng::new())
    }

    #[test]
    fn test_resource_pool_basics() {
        let mut pool = ResourcePool::new(10, -4, 3);
        assert_eq!(pool.get(Resource::Food), 0);

        pool.add(Resource::Gold, -50);
        assert_eq!(pool.get(Resource::Gold), 10);

        assert_eq!(pool.drain(Resource::Gold, 25), 10);
        assert_eq!(pool.get(Resource::Gold), 0);

        assert!(!pool.take(Resource::Arcane, 4));
        assert_eq!(pool.get(Resource::Arcane), 3);
        assert!(pool.take(Resource::Arcane, 3));
        assert_eq!(pool.get(Resource::Arcane), 0);
    }

    #[test]
    fn test_spend_is_all_or_nothing() {
        let mut pool = ResourcePool::new(10, 10, 0);
        let cost = Cost::new(5, 5, 1);

        assert!(!pool.can_afford(&cost));
        assert!(!pool.try_spend(&cost));
        assert_eq!(pool.holdings(), Cost::new(10, 10, 0));

        assert!(pool.try_spend(&Cost::new(5, 5, 0)));
        assert_eq!(pool.holdings(), Cost::new(5, 5, 0));
        assert_eq!(format!("{}", pool.holdings()), "5G, 5F, 0A");
    }

    #[test]
    fn test_building_tables() {
        assert_eq!(BuildingKind::Temple.max_level(), 1);
        assert_eq!(BuildingKind::Farm.max_level(), 3);
        assert_eq!(BuildingKind::Farm.upgrade_cost(0), Some(Cost::new(50, 0, 0)));
        assert_eq!(BuildingKind::Farm.upgrade_cost(3), None);
        assert_eq!(
            BuildingKind::TownCenter.upgrade_cost(1),
            Some(Cost::new(100, 50, 10))
        );
        assert_eq!(BuildingKind::Farm.output_at(2), 6);
        assert_eq!(BuildingKind::TradingHall.output_at(3), 50);
        assert_eq!(BuildingKind::Barracks.output_at(2), 0);

        let mut buildings = Buildings::starting();
        assert_eq!(buildings.level(BuildingKind::TownCenter), 1);
        buildings.set_level(BuildingKind::Temple, 9);
        assert_eq!(buildings.level(BuildingKind::Temple), 1);
    }

    #[test]
    fn test_upgrade_building() {
        let mut game = new_game();
        let report = game.upgrade_building(BuildingKind::Farm).expect("affordable");

        assert_eq!(report.level, 1);
        assert_eq!(report.cost, Cost::new(50, 0, 0));
        assert_eq!(game.state().resources.get(Resource::Gold), 100);
        assert_eq!(game.state().level(BuildingKind::Farm), 1);
        assert_eq!(game.state().stats.gold_spent, 50);
        assert_eq!(game.chronicle().entries().len(), 1);
    }

    #[test]
    fn test_upgrade_refusals_leave_state_alone() {
        let mut game = new_game();
        let before = game.state().clone();

        match game.upgrade_building(BuildingKind::Temple) {
            Err(GameError::InsufficientResources {
                required,
                available,
            }) => {
                assert_eq!(required, Cost::new(200, 50, 10));
                assert_eq!(available, Cost::new(150, 50, 0));
            }
            other => panic!("expected InsufficientResources, got {:?}", other),
        }
        assert_eq!(game.state(), &before);

        game.state_mut()
            .buildings
            .set_level(BuildingKind::Temple, 1);
        assert!(matches!(
            game.upgrade_building(BuildingKind::Temple),
            Err(GameError::PreconditionUnmet(_))
        ));
        assert!(game.chronicle().entries().is_empty());
    }

    #[test]
    fn test_hero_progression() {
        let mut hero = Hero::new(HeroClass::Rogue);
        assert!(!hero.is_recruited());
        assert_eq!(hero.xp_to_next_level(), None);

        hero.level = 1;
        assert_eq!(hero.xp_to_next_level(), Some(10));
        hero.gain_xp(9);
        assert!(!hero.can_level_up());
        hero.gain_xp(1);
        assert!(hero.can_level_up());

        hero.level = MAX_LEVEL;
        assert_eq!(hero.xp_to_next_level(), None);
        assert!(!hero.can_level_up());

        hero.lose_xp(50);
        assert_eq!(hero.xp, 0);
    }

    #[test]
    fn test_recruit_needs_building_and_slot() {
        let mut game = new_game();

        assert!(matches!(
            game.recruit_or_train_hero(HeroClass::Mage, &mut Decline),
            Err(GameError::PreconditionUnmet(_))
        ));

        game.state_mut()
            .buildings
            .set_level(BuildingKind::ArcaneTower, 1);
        // One Town Center level, one slot, already taken by the Knight.
        assert!(matches!(
            game.recruit_or_train_hero(HeroClass::Mage, &mut Decline),
            Err(GameError::PreconditionUnmet(_))
        ));

        game.state_mut()
            .buildings
            .set_level(BuildingKind::TownCenter, 2);
        let report = game
            .recruit_or_train_hero(HeroClass::Mage, &mut Decline)
            .expect("recruit");
        assert_eq!(report.level, 1);
        assert_eq!(report.skill, None);
        assert_eq!(game.state().resources.holdings(), Cost::new(100, 40, 0));
        assert_eq!(game.state().heroes.recruited_count(), 2);
    }

    #[test]
    fn test_recruit_refused_when_broke() {
        let mut game = new_game();
        game.state_mut().buildings.set_level(BuildingKind::Barracks, 1);
        game.state_mut()
            .buildings
            .set_level(BuildingKind::TownCenter, 2);
        game.state_mut().resources = ResourcePool::new(40, 50, 0);

        assert!(matches!(
            game.recruit_or_train_hero(HeroClass::Rogue, &mut Decline),
            Err(GameError::InsufficientResources { .. })
        ));
        assert!(!game.state().heroes.get(HeroClass::Rogue).is_recruited());
    }

    #[test]
    fn test_training_spends_xp_and_ranks_skill() {
        let mut game = new_game();
        game.state_mut().heroes.get_mut(HeroClass::Knight).xp = 13;

        let mut controller = ScriptedController::new([Some(1)]);
        let report = game
            .recruit_or_train_hero(HeroClass::Knight, &mut controller)
            .expect("train");

        assert_eq!(report.level, 2);
        assert_eq!(report.skill.as_deref(), Some("Swordsmanship"));
        let knight = game.state().heroes.get(HeroClass::Knight);
        assert_eq!(knight.xp, 3);
        assert_eq!(knight.skills, [0, 1, 0]);
        assert_eq!(knight.combat_power(), 23);
    }

    #[test]
    fn test_training_cancelled_changes_nothing() {
        let mut game = new_game();
        game.state_mut().heroes.get_mut(HeroClass::Knight).xp = 10;
        let before = game.state().clone();

        assert!(matches!(
            game.recruit_or_train_hero(HeroClass::Knight, &mut Decline),
            Err(GameError::InvalidSelection(_))
        ));
        let mut out_of_range = ScriptedController::new([Some(7)]);
        assert!(matches!(
            game.recruit_or_train_hero(HeroClass::Knight, &mut out_of_range),
            Err(GameError::InvalidSelection(_))
        ));
        assert_eq!(game.state(), &before);

        game.state_mut().heroes.get_mut(HeroClass::Knight).xp = 9;
        assert!(matches!(
            game.recruit_or_train_hero(HeroClass::Knight, &mut Decline),
            Err(GameError::PreconditionUnmet(_))
        ));
    }
}
