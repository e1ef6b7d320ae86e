#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use skirmish_core::commands::TickCommands;
    use skirmish_core::config::BrainConfig;
    use skirmish_core::enums::{Corner, Edge, MovementMode, PlannerState, Side};
    use skirmish_core::events::BotEvent;
    use skirmish_core::geometry::{heading_vector, normalize_absolute};
    use skirmish_core::state::{ArenaBounds, Breach, OpponentObservation, OwnState};
    use skirmish_core::types::Position;

    use crate::agent::Agent;
    use crate::fire_control::{self, FireInput};
    use crate::firing::{self, solve};
    use crate::movement::{
        nearest_corner, nearest_side, recovery_heading, Anchor, MovementPlanner,
    };
    use crate::tracker::{TargetTracker, TrackedTarget};

    fn bounds() -> ArenaBounds {
        ArenaBounds::from_arena(800.0, 600.0, 30.0).unwrap()
    }

    fn own_at(x: f64, y: f64) -> OwnState {
        OwnState {
            position: Position::new(x, y),
            energy: 100.0,
            ..Default::default()
        }
    }

    fn obs(id: u32, x: f64, y: f64, energy: f64) -> OpponentObservation {
        OpponentObservation {
            id,
            position: Position::new(x, y),
            heading: 0.0,
            speed: 0.0,
            energy,
            tick: 0,
        }
    }

    fn tracked(o: OpponentObservation) -> TrackedTarget {
        TrackedTarget { observation: o }
    }

    /// Idealized engine: every command completes within the tick.
    fn apply(own: &mut OwnState, cmds: &TickCommands) {
        if let Some(turn) = cmds.body_turn {
            own.heading = normalize_absolute(own.heading + turn);
        }
        if let Some(d) = cmds.travel {
            let (hx, hy) = heading_vector(own.heading);
            own.position.x += hx * d;
            own.position.y += hy * d;
        }
        if let Some(turn) = cmds.gun_turn {
            own.gun_heading = normalize_absolute(own.gun_heading + turn);
        }
        own.tick += 1;
    }

    // ---- Tracker ----

    #[test]
    fn test_tracker_adopts_first_observation() {
        let mut tracker = TargetTracker::new();
        assert!(tracker.target().is_none());
        assert!(tracker.observe(obs(1, 10.0, 10.0, 90.0)));
        assert_eq!(tracker.target().unwrap().id(), 1);
    }

    #[test]
    fn test_tracker_same_id_always_refreshes() {
        let mut tracker = TargetTracker::new();
        tracker.observe(obs(1, 10.0, 10.0, 50.0));
        assert!(tracker.observe(obs(1, 20.0, 10.0, 95.0)));
        let t = tracker.target().unwrap();
        assert_eq!(t.observation.energy, 95.0);
        assert_eq!(t.observation.position, Position::new(20.0, 10.0));
    }

    #[test]
    fn test_tracker_prefers_weaker_opponent() {
        let mut tracker = TargetTracker::new();
        tracker.observe(obs(1, 10.0, 10.0, 50.0));

        // Equal energy is not enough to switch.
        assert!(!tracker.observe(obs(2, 10.0, 10.0, 50.0)));
        assert!(!tracker.observe(obs(2, 10.0, 10.0, 70.0)));
        assert_eq!(tracker.target().unwrap().id(), 1);

        assert!(tracker.observe(obs(2, 10.0, 10.0, 49.9)));
        assert_eq!(tracker.target().unwrap().id(), 2);
    }

    #[test]
    fn test_tracker_age() {
        let mut tracker = TargetTracker::new();
        assert_eq!(tracker.age(10), None);
        let mut o = obs(1, 0.0, 0.0, 10.0);
        o.tick = 4;
        tracker.observe(o);
        assert_eq!(tracker.age(10), Some(6));
        assert_eq!(tracker.age(2), Some(0));
    }

    // ---- Firing solution ----

    #[test]
    fn test_stationary_target_is_not_led() {
        let own = own_at(100.0, 100.0);
        let target = tracked(obs(1, 300.0, 250.0, 80.0));
        let s = solve(&own, &target, 2.0, &BrainConfig::default());
        assert_eq!(s.predicted, target.observation.position);
        assert_abs_diff_eq!(s.distance, 250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.bullet_speed, 14.0, epsilon = 1e-9);
    }

    #[test]
    fn test_moving_target_is_led_along_heading() {
        let own = own_at(100.0, 100.0);
        let mut o = obs(1, 300.0, 100.0, 80.0);
        o.heading = 90.0;
        o.speed = 8.0;
        let s = solve(&own, &tracked(o), 2.0, &BrainConfig::default());

        let t = 200.0 / 14.0;
        assert_abs_diff_eq!(s.time_to_hit, t, epsilon = 1e-9);
        assert_abs_diff_eq!(s.predicted.x, 300.0, epsilon = 1e-9);
        assert_abs_diff_eq!(s.predicted.y, 100.0 + 8.0 * t, epsilon = 1e-9);
        // Gun at 0° must swing left toward the lead point.
        assert!(s.gun_bearing_error > 0.0);
    }

    #[test]
    fn test_point_blank_confidence_ignores_speed() {
        for speed in [0.0, 4.0, 8.0] {
            assert_eq!(firing::confidence(49.9, speed, 40.0, 50.0, true), 0.95);
        }
        // The jump at the point-blank distance is kept.
        assert!(firing::confidence(50.0, 8.0, 0.0, 50.0, true) < 0.5);
    }

    #[test]
    fn test_confidence_factors_and_clamp() {
        assert_abs_diff_eq!(
            firing::confidence(500.0, 8.0, 0.0, 50.0, true),
            0.5 * 0.5,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            firing::confidence(500.0, 0.0, 60.0, 50.0, true),
            0.5 * (1.0 - 45.0 / 120.0),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            firing::confidence(500.0, 0.0, 60.0, 50.0, false),
            0.5,
            epsilon = 1e-9
        );
        assert_eq!(firing::confidence(1500.0, 0.0, 0.0, 50.0, true), 0.0);
    }

    #[test]
    fn test_stale_target_has_zero_confidence() {
        let config = BrainConfig::default();
        let mut own = own_at(100.0, 100.0);
        let target = tracked(obs(1, 200.0, 100.0, 80.0));

        own.tick = config.stale_target_ticks;
        assert!(solve(&own, &target, 2.0, &config).confidence > 0.0);

        own.tick = config.stale_target_ticks + 1;
        let s = solve(&own, &target, 2.0, &config);
        assert_eq!(s.confidence, 0.0);
        // The gun keeps tracking.
        assert_abs_diff_eq!(s.gun_bearing_error, 0.0, epsilon = 1e-9);
    }

    // ---- Fire gate ----

    fn gate_input() -> FireInput {
        FireInput {
            distance: 200.0,
            confidence: 0.8,
            gun_bearing_error: 1.0,
            weapon_ready: true,
            own_energy: 100.0,
            target_energy: 90.0,
        }
    }

    #[test]
    fn test_base_power_brackets() {
        assert_eq!(fire_control::base_power(50.0), 3.0);
        assert_eq!(fire_control::base_power(150.0), 2.5);
        assert_eq!(fire_control::base_power(300.0), 2.0);
        assert_eq!(fire_control::base_power(450.0), 1.5);
        assert_eq!(fire_control::base_power(451.0), 1.0);
    }

    #[test]
    fn test_gate_fires_on_good_solution() {
        let d = fire_control::decide(&gate_input(), &BrainConfig::default());
        assert!(d.should_fire);
        assert_abs_diff_eq!(d.power, 2.0 * 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_gate_refuses_out_of_range() {
        let config = BrainConfig::default();
        let input = FireInput {
            distance: 500.1,
            confidence: 1.0,
            ..gate_input()
        };
        assert!(!fire_control::decide(&input, &config).should_fire);
    }

    #[test]
    fn test_gate_refuses_low_confidence() {
        let config = BrainConfig::default();
        let input = FireInput {
            confidence: 0.3,
            gun_bearing_error: 0.0,
            ..gate_input()
        };
        assert!(!fire_control::decide(&input, &config).should_fire);
    }

    #[test]
    fn test_gate_refuses_wide_error_or_hot_gun() {
        let config = BrainConfig::default();
        // Tolerance at 0.8 confidence is 12°.
        let wide = FireInput {
            gun_bearing_error: -12.5,
            ..gate_input()
        };
        assert!(!fire_control::decide(&wide, &config).should_fire);

        let hot = FireInput {
            weapon_ready: false,
            ..gate_input()
        };
        assert!(!fire_control::decide(&hot, &config).should_fire);
    }

    #[test]
    fn test_point_blank_tolerance_and_power() {
        let config = BrainConfig::default();
        let input = FireInput {
            distance: 40.0,
            confidence: 0.95,
            gun_bearing_error: 24.0,
            ..gate_input()
        };
        let d = fire_control::decide(&input, &config);
        assert!(d.should_fire);
        assert_eq!(d.power, 3.0);
    }

    #[test]
    fn test_power_never_exceeds_own_energy() {
        let config = BrainConfig::default();
        for own_energy in [0.0, 0.05, 0.5, 1.2, 2.9, 50.0] {
            let input = FireInput {
                own_energy,
                confidence: 1.0,
                ..gate_input()
            };
            let d = fire_control::decide(&input, &config);
            assert!(d.power <= own_energy.max(0.0) + 1e-12, "{own_energy} -> {}", d.power);
            if own_energy < 0.1 {
                assert!(!d.should_fire);
            }
        }
    }

    #[test]
    fn test_energy_modulation() {
        let config = BrainConfig::default();
        // Energy lead goes to maximum power.
        assert_eq!(fire_control::modulated_power(400.0, 100.0, 60.0, &config), 3.0);
        assert_eq!(fire_control::modulated_power(400.0, 100.0, 70.0, &config), 1.5);
        // Finishing shots override the lead rule.
        assert_eq!(fire_control::modulated_power(80.0, 100.0, 10.0, &config), 3.0);
        assert_eq!(fire_control::modulated_power(250.0, 100.0, 10.0, &config), 2.5);
        assert_eq!(fire_control::modulated_power(400.0, 20.0, 10.0, &config), 1.5);
    }

    // ---- Movement planner ----

    #[test]
    fn test_anchor_tie_breaks() {
        let b = bounds();
        assert_eq!(nearest_corner(&b, &b.center()), Corner::BottomLeft);
        assert_eq!(nearest_corner(&b, &Position::new(700.0, 500.0)), Corner::TopRight);
        assert_eq!(nearest_side(&b, &b.center()), Side::Bottom);

        let square = ArenaBounds::from_arena(600.0, 600.0, 30.0).unwrap();
        assert_eq!(nearest_side(&square, &square.center()), Side::Left);
    }

    #[test]
    fn test_recovery_heading_moves_inward() {
        let b = bounds();
        let outside = [
            Position::new(10.0, 10.0),
            Position::new(10.0, 590.0),
            Position::new(790.0, 10.0),
            Position::new(790.0, 590.0),
            Position::new(10.0, 300.0),
            Position::new(790.0, 300.0),
            Position::new(400.0, 10.0),
            Position::new(400.0, 590.0),
        ];
        for pos in outside {
            let breach = b.breach(&pos, 0.0);
            let heading = recovery_heading(&breach).unwrap();
            let next = pos.project(heading, 1.0);
            for edge in breach.edges() {
                assert!(
                    b.inset(&next, edge) > b.inset(&pos, edge),
                    "{pos:?} heading {heading} does not leave {edge:?}"
                );
            }
        }
        assert_eq!(recovery_heading(&Breach::default()), None);
    }

    #[test]
    fn test_strafe_closes_and_retreats() {
        let config = BrainConfig::default();
        let mut planner = MovementPlanner::new(config, bounds());
        let mut own = own_at(100.0, 300.0);
        own.heading = 90.0;

        let far = tracked(obs(1, 400.0, 300.0, 80.0));
        let cmds = planner.plan(&own, MovementMode::Offensive, Some(&far));
        assert_eq!(planner.state(), PlannerState::OffensiveStrafe);
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), -90.0, epsilon = 1e-9);
        assert_eq!(cmds.travel, Some(100.0));

        let near = tracked(obs(1, 200.0, 300.0, 80.0));
        let cmds = planner.plan(&own, MovementMode::Offensive, Some(&near));
        assert_eq!(cmds.travel, Some(-50.0));
    }

    #[test]
    fn test_strafe_orbits_and_flips_on_bullet() {
        let mut planner = MovementPlanner::new(BrainConfig::default(), bounds());
        let mut own = own_at(100.0, 300.0);
        own.heading = 90.0;
        let target = tracked(obs(1, 255.0, 300.0, 80.0));

        let cmds = planner.plan(&own, MovementMode::Offensive, Some(&target));
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), 0.0, epsilon = 1e-9);
        assert_eq!(cmds.travel, Some(70.0));

        planner.on_hit_by_bullet();
        assert_eq!(planner.strafe().direction, -1.0);
        let cmds = planner.plan(&own, MovementMode::Offensive, Some(&target));
        assert_abs_diff_eq!(cmds.body_turn.unwrap().abs(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_offensive_wall_hit_turns_right_and_flips() {
        let mut planner = MovementPlanner::new(BrainConfig::default(), bounds());
        let mut own = own_at(100.0, 300.0);
        own.heading = 90.0;
        let far = tracked(obs(1, 500.0, 300.0, 80.0));
        planner.plan(&own, MovementMode::Offensive, Some(&far));

        planner.on_hit_wall(&own);
        assert_eq!(planner.strafe().direction, -1.0);
        let cmds = planner.plan(&own, MovementMode::Offensive, Some(&far));
        assert_eq!(cmds.body_turn, Some(-90.0));

        // One-shot: the next tick faces the target again.
        let cmds = planner.plan(&own, MovementMode::Offensive, Some(&far));
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), -90.0, epsilon = 1e-9);
        assert_eq!(cmds.travel, Some(100.0));
    }

    #[test]
    fn test_patrol_approaches_corner_then_runs_clockwise() {
        let mut planner = MovementPlanner::new(BrainConfig::default(), bounds());
        let mut own = own_at(100.0, 100.0);

        let cmds = planner.plan(&own, MovementMode::Offensive, None);
        assert_eq!(planner.state(), PlannerState::ApproachAnchor);
        assert_eq!(planner.anchor(), Some(Anchor::Corner(Corner::BottomLeft)));
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), -135.0, epsilon = 1e-9);
        apply(&mut own, &cmds);

        let cmds = planner.plan(&own, MovementMode::Offensive, None);
        assert_abs_diff_eq!(cmds.travel.unwrap(), 70.0 * 2f64.sqrt(), epsilon = 1e-9);
        apply(&mut own, &cmds);
        assert_abs_diff_eq!(own.position.x, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(own.position.y, 30.0, epsilon = 1e-9);

        let cmds = planner.plan(&own, MovementMode::Offensive, None);
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), -135.0, epsilon = 1e-9);
        apply(&mut own, &cmds);
        assert_abs_diff_eq!(own.heading, 90.0, epsilon = 1e-9);

        // Corner reached: run up the left edge.
        let cmds = planner.plan(&own, MovementMode::Offensive, None);
        assert_eq!(planner.state(), PlannerState::EdgePatrol);
        assert_abs_diff_eq!(cmds.travel.unwrap(), 540.0, epsilon = 1e-9);
        apply(&mut own, &cmds);

        // Then turn right onto the top edge.
        let cmds = planner.plan(&own, MovementMode::Offensive, None);
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), -90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_patrol_squares_off_axis_heading() {
        let mut planner = MovementPlanner::new(BrainConfig::default(), bounds());
        let mut own = own_at(30.0, 30.0);
        own.heading = 90.0;
        // Already at the corner with the right heading: patrol starts at once.
        planner.plan(&own, MovementMode::Offensive, None);
        let cmds = planner.plan(&own, MovementMode::Offensive, None);
        assert_eq!(planner.state(), PlannerState::EdgePatrol);
        assert!(cmds.travel.is_some());

        // End of the leg: turn right onto the top edge.
        let cmds = planner.plan(&own, MovementMode::Offensive, None);
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), -90.0, epsilon = 1e-9);

        // Knocked off axis during the turn: the next leg squares to 0° first.
        own.heading = 7.0;
        let cmds = planner.plan(&own, MovementMode::Offensive, None);
        assert_eq!(planner.state(), PlannerState::EdgePatrol);
        assert_eq!(cmds.travel, None);
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), -7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_defensive_seeks_side_then_waves() {
        let mut planner = MovementPlanner::new(BrainConfig::default(), bounds());
        let mut own = own_at(30.0, 300.0);
        own.heading = 45.0;

        let cmds = planner.plan(&own, MovementMode::Defensive, None);
        assert!(cmds.is_idle());
        assert_eq!(planner.anchor(), Some(Anchor::Side(Side::Left)));

        let cmds = planner.plan(&own, MovementMode::Defensive, None);
        assert_eq!(planner.state(), PlannerState::DefensiveWave);
        assert_eq!(cmds.travel, Some(5.0));
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), 0.0, epsilon = 1e-9);
        assert_eq!(planner.wave().moves, 1);
    }

    #[test]
    fn test_wave_never_exceeds_step_cap() {
        let config = BrainConfig::default();
        let cap = config.wave_max_moves;
        let mut planner = MovementPlanner::new(config, bounds());
        let mut own = own_at(30.0, 300.0);
        own.heading = 45.0;

        let mut reached_cap = false;
        let mut restarted = false;
        for _ in 0..600 {
            let before = planner.state();
            let cmds = planner.plan(&own, MovementMode::Defensive, None);
            assert!(planner.wave().moves <= cap);
            reached_cap |= planner.wave().moves == cap;
            restarted |= before == PlannerState::DefensiveWave
                && planner.state() == PlannerState::ApproachAnchor;
            apply(&mut own, &cmds);
        }
        assert!(reached_cap);
        assert!(restarted);
    }

    #[test]
    fn test_wave_leaving_bounds_triggers_recovery() {
        let mut planner = MovementPlanner::new(BrainConfig::default(), bounds());
        let mut own = own_at(30.0, 300.0);
        own.heading = 45.0;
        planner.plan(&own, MovementMode::Defensive, None);
        planner.plan(&own, MovementMode::Defensive, None);
        assert_eq!(planner.state(), PlannerState::DefensiveWave);

        own.position = Position::new(10.0, 300.0);
        let cmds = planner.plan(&own, MovementMode::Defensive, None);
        assert_eq!(planner.state(), PlannerState::BoundaryRecovery);
        assert!(cmds.stop);
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), -45.0, epsilon = 1e-9);
        apply(&mut own, &cmds);

        let cmds = planner.plan(&own, MovementMode::Defensive, None);
        assert_eq!(cmds.travel, Some(40.0));
        apply(&mut own, &cmds);
        assert_abs_diff_eq!(own.position.x, 50.0, epsilon = 1e-9);

        // Recovery done: seek the nearest side again.
        planner.plan(&own, MovementMode::Defensive, None);
        assert_eq!(planner.state(), PlannerState::ApproachAnchor);
        assert_eq!(planner.anchor(), Some(Anchor::Side(Side::Left)));
    }

    #[test]
    fn test_defensive_wall_hit_retreats() {
        let mut planner = MovementPlanner::new(BrainConfig::default(), bounds());
        let mut own = own_at(400.0, 568.0);
        own.heading = 90.0;
        planner.plan(&own, MovementMode::Defensive, None);

        planner.on_hit_wall(&own);
        assert_eq!(planner.state(), PlannerState::BoundaryRecovery);
        let cmds = planner.plan(&own, MovementMode::Defensive, None);
        assert!(cmds.stop);
        assert_abs_diff_eq!(cmds.body_turn.unwrap(), 180.0, epsilon = 1e-9);
        apply(&mut own, &cmds);
        let cmds = planner.plan(&own, MovementMode::Defensive, None);
        assert_eq!(cmds.travel, Some(50.0));
        // Near the top edge, so the breach is reported as touching it.
        let breach = bounds().breach(&Position::new(400.0, 568.0), 5.0);
        assert_eq!(breach.vertical, Some(Edge::Top));
    }

    #[test]
    fn test_mode_switch_cancels_maneuver() {
        let mut planner = MovementPlanner::new(BrainConfig::default(), bounds());
        let own = own_at(100.0, 100.0);
        planner.plan(&own, MovementMode::Offensive, None);
        assert_eq!(planner.anchor(), Some(Anchor::Corner(Corner::BottomLeft)));

        planner.plan(&own, MovementMode::Defensive, None);
        assert_eq!(planner.mode(), MovementMode::Defensive);
        assert_eq!(planner.state(), PlannerState::ApproachAnchor);
        assert_eq!(planner.anchor(), Some(Anchor::Side(Side::Left)));
    }

    // ---- Agent ----

    #[test]
    fn test_scenario_adopt_and_fire() {
        let mut agent = Agent::new(BrainConfig::default(), 800.0, 600.0).unwrap();
        assert_eq!(
            *agent.bounds(),
            ArenaBounds {
                left: 30.0,
                right: 770.0,
                bottom: 30.0,
                top: 570.0
            }
        );

        let mut own = own_at(400.0, 400.0);
        let opponent = obs(7, 450.0, 420.0, 80.0);
        agent.on_event(&own, &BotEvent::Scanned(opponent));
        assert_eq!(agent.target().unwrap().id(), 7);

        // Gun starts at 0°: it slews first, the error is too wide to fire.
        let cmds = agent.tick(&own);
        let solution = *agent.last_solution().unwrap();
        assert_eq!(solution.predicted, opponent.position);
        assert_abs_diff_eq!(solution.distance, 2900f64.sqrt(), epsilon = 1e-9);
        assert_abs_diff_eq!(
            firing::confidence(solution.distance, 0.0, 0.0, 50.0, false),
            0.946,
            epsilon = 1e-3
        );
        assert_eq!(
            fire_control::aim_power(solution.distance, 100.0, 80.0, agent.config()),
            2.5
        );
        assert!(cmds.fire.is_none());
        let gun_turn = cmds.gun_turn.unwrap();
        assert_abs_diff_eq!(gun_turn, 20f64.atan2(50.0).to_degrees(), epsilon = 1e-9);

        // Gun on target: fires.
        own.gun_heading = gun_turn;
        let cmds = agent.tick(&own);
        let power = cmds.fire.unwrap();
        assert!((2.3..=2.5).contains(&power), "power {power}");
        assert_eq!(agent.mode(), MovementMode::Offensive);
    }

    #[test]
    fn test_agent_mode_boundary() {
        let mut agent = Agent::new(BrainConfig::default(), 800.0, 600.0).unwrap();
        let mut own = own_at(400.0, 300.0);
        own.energy = 30.0;
        agent.tick(&own);
        assert_eq!(agent.mode(), MovementMode::Offensive);

        own.energy = 29.99;
        agent.tick(&own);
        assert_eq!(agent.mode(), MovementMode::Defensive);
        assert_eq!(agent.planner().mode(), MovementMode::Defensive);
    }

    #[test]
    fn test_radar_sweeps_then_locks() {
        let mut agent = Agent::new(BrainConfig::default(), 800.0, 600.0).unwrap();
        let mut own = own_at(400.0, 300.0);
        assert_eq!(agent.tick(&own).radar_turn, Some(360.0));

        let mut o = obs(1, 400.0, 400.0, 50.0);
        o.tick = own.tick;
        agent.on_event(&own, &BotEvent::Scanned(o));
        own.radar_heading = 60.0;
        let cmds = agent.tick(&own);
        assert_abs_diff_eq!(cmds.radar_turn.unwrap(), 60.0, epsilon = 1e-9);

        // Lost for too long: back to sweeping, and no shots.
        own.tick = 100;
        let cmds = agent.tick(&own);
        assert_eq!(cmds.radar_turn, Some(360.0));
        assert!(cmds.fire.is_none());
    }

    #[test]
    fn test_ram_response_fires_at_collider() {
        let mut agent = Agent::new(BrainConfig::default(), 800.0, 600.0).unwrap();
        let own = own_at(400.0, 300.0);
        agent.on_event(
            &own,
            &BotEvent::HitBot {
                bot_id: 4,
                position: Position::new(430.0, 300.0),
                energy: 60.0,
                rammed: true,
            },
        );
        let cmds = agent.tick(&own);
        assert!(cmds.stop);
        assert_abs_diff_eq!(cmds.gun_turn.unwrap(), 0.0, epsilon = 1e-9);
        assert_eq!(cmds.fire, Some(3.0));

        // One shot only.
        assert!(agent.tick(&own).fire.is_none());
    }

    #[test]
    fn test_ram_response_waits_for_gun() {
        let mut agent = Agent::new(BrainConfig::default(), 800.0, 600.0).unwrap();
        let mut own = own_at(400.0, 300.0);
        own.gun_heading = 180.0;
        agent.on_event(
            &own,
            &BotEvent::HitBot {
                bot_id: 4,
                position: Position::new(430.0, 300.0),
                energy: 60.0,
                rammed: false,
            },
        );
        let cmds = agent.tick(&own);
        assert!(cmds.fire.is_none());
        assert_abs_diff_eq!(cmds.gun_turn.unwrap().abs(), 180.0, epsilon = 1e-9);

        own.gun_heading = 5.0;
        assert_eq!(agent.tick(&own).fire, Some(3.0));
    }

    #[test]
    fn test_agent_rejects_bad_setup() {
        assert!(Agent::new(BrainConfig::default(), 50.0, 600.0).is_err());
        let config = BrainConfig {
            wave_max_moves: 0,
            ..Default::default()
        };
        assert!(Agent::new(config, 800.0, 600.0).is_err());
    }
}
