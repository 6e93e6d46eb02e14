#[cfg(test)]
mod tests {
    use super::super::controller::*;
    use super::super::economy::*;
    use super::super::events::*;
    use super::super::heroes::HeroClass;
    use super::super::rng::ScriptedRng;
    use super::super::selector::Candidate;
    use super::super::state::Kingdom;

    fn find(table: Vec<EventDescriptor>, name: &str) -> EventDescriptor {
        table
            .into_iter()
            .find(|e| e.name == name)
            .expect("descriptor exists")
    }

    fn fire(
        event: &EventDescriptor,
        state: &mut Kingdom,
        rng: &mut ScriptedRng,
        controller: &mut dyn Controller,
    ) -> Vec<String> {
        let mut ctx = EffectContext::new(rng, controller);
        (event.effect)(state, &mut ctx);
        ctx.messages
    }

    #[test]
    fn test_event_table_weights_and_conditions() {
        let mut state = Kingdom::default();
        let bumper = find(world_events(), "farm_bumper_crop");
        assert!(!bumper.is_eligible(&state));
        state.buildings.set_level(BuildingKind::Farm, 2);
        assert!(bumper.is_eligible(&state));
        assert_eq!(bumper.weight(&state), 13);

        let festival = find(world_events(), "local_festival");
        state.day = 12;
        assert_eq!(festival.weight(&state), 10);

        let investor = find(world_events(), "investor_visit");
        state.buildings.set_level(BuildingKind::TradingHall, 1);
        assert!(!investor.is_eligible(&state));
        state.buildings.set_level(BuildingKind::TradingHall, 2);
        assert!(investor.is_eligible(&state));

        assert!(citizen_requests().iter().all(|r| r.repeat_block() == 0));
    }

    #[test]
    fn test_surplus_food_offer() {
        let mut state = Kingdom::default();
        state.resources = ResourcePool::new(0, 150, 0);
        assert_eq!(surplus_food_offer(&state), None);

        state.buildings.set_level(BuildingKind::TradingHall, 1);
        assert_eq!(surplus_food_offer(&state), Some(20));

        state.resources = ResourcePool::new(0, 90, 0);
        assert_eq!(surplus_food_offer(&state), None);

        state.resources = ResourcePool::new(0, 500, 0);
        state.heroes.get_mut(HeroClass::Knight).level = 0;
        assert_eq!(surplus_food_offer(&state), None);
    }

    #[test]
    fn test_surplus_sale_approved() {
        let mut state = Kingdom::default();
        state.resources = ResourcePool::new(0, 150, 0);
        state.buildings.set_level(BuildingKind::TradingHall, 1);

        let request = find(citizen_requests(), "surplus_food");
        let mut controller = ScriptedController::new([Some(0)]);
        fire(&request, &mut state, &mut ScriptedRng::new(), &mut controller);

        assert_eq!(state.resources.get(Resource::Food), 130);
        assert_eq!(state.resources.get(Resource::Gold), 200);
    }

    #[test]
    fn test_inspector_fine_clamps_at_zero() {
        let mut state = Kingdom::default();
        state.resources = ResourcePool::new(5, 50, 0);

        let inspector = find(world_events(), "royal_inspector");
        // Index 1 is the unbuilt Farm.
        let mut rng = ScriptedRng::new().with_indices([1]);
        let messages = fire(&inspector, &mut state, &mut rng, &mut Decline);

        assert_eq!(state.resources.get(Resource::Gold), 0);
        assert!(messages.iter().any(|m| m.contains("fined you 5 Gold")));
    }

    #[test]
    fn test_inspector_rewards_developed_building() {
        let mut state = Kingdom::default();
        state.day = 4;
        state.buildings.set_level(BuildingKind::TownCenter, 2);

        let inspector = find(world_events(), "royal_inspector");
        let mut rng = ScriptedRng::new().with_indices([0]);
        fire(&inspector, &mut state, &mut rng, &mut Decline);

        assert_eq!(state.resources.get(Resource::Gold), 174);
    }

    #[test]
    fn test_merchant_trades() {
        let merchant = find(world_events(), "wandering_merchant");

        let mut state = Kingdom::default();
        let mut controller = ScriptedController::new([Some(0)]);
        fire(&merchant, &mut state, &mut ScriptedRng::new(), &mut controller);
        assert_eq!(state.resources.get(Resource::Food), 40);
        assert_eq!(state.resources.get(Resource::Gold), 180);

        let mut state = Kingdom::default();
        let mut controller = ScriptedController::new([Some(2)]);
        let messages = fire(&merchant, &mut state, &mut ScriptedRng::new(), &mut controller);
        assert_eq!(state.resources.holdings(), Cost::new(150, 50, 0));
        assert!(messages.iter().any(|m| m == "Not enough Arcane!"));

        let mut state = Kingdom::default();
        let mut controller = ScriptedController::new([Some(3)]);
        fire(&merchant, &mut state, &mut ScriptedRng::new(), &mut controller);
        assert_eq!(state.resources.holdings(), Cost::new(150, 50, 0));
    }

    #[test]
    fn test_arcane_experiment_backfire() {
        let mut state = Kingdom::default();
        state.buildings.set_level(BuildingKind::ArcaneTower, 1);
        let experiment = find(world_events(), "arcane_experiment");

        let mut rng = ScriptedRng::new().with_ints([71]);
        fire(&experiment, &mut state, &mut rng, &mut Decline);
        assert_eq!(state.resources.get(Resource::Food), 45);

        let mut rng = ScriptedRng::new().with_ints([70, 8]);
        fire(&experiment, &mut state, &mut rng, &mut Decline);
        assert_eq!(state.resources.get(Resource::Arcane), 9);
        assert_eq!(state.stats.arcane_made, 9);
    }

    #[test]
    fn test_arts_request_denied_keeps_gold() {
        let mut state = Kingdom::default();
        state.resources = ResourcePool::new(400, 0, 0);
        let request = find(citizen_requests(), "arts_district");

        fire(&request, &mut state, &mut ScriptedRng::new(), &mut Decline);
        assert_eq!(state.resources.get(Resource::Gold), 400);
        assert_eq!(state.stats.gold_spent, 0);
    }
}
