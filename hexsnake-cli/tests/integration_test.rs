//! Integration tests for HEXSNAKE
//!
//! Tests the full stack: geometry, board presets, tick logic, input mapping,
//! scenes and autopilot runs

use hexsnake_core::{
    axial_to_pixel, hex_corners, hex_distance, neighbors, pixel_to_axial,
    Autopilot, Board, Collision, Direction, Fill, Flow, GameConfig, GameState, Hex, Key, Scene,
    Snake, Status, TickOutcome,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn cells(list: &[(i32, i32)]) -> Vec<Hex> {
    list.iter().map(|&(q, r)| Hex::new(q, r)).collect()
}

/// Bounded game with a hand-placed snake and no food in the way
fn bounded_game(body: &[(i32, i32)], direction: Direction) -> GameState {
    GameState::new(GameConfig::bounded(), Some(42))
        .unwrap()
        .with_snake(Snake::from_cells(cells(body)).unwrap(), direction)
        .unwrap()
}

fn random_hexes(rng: &mut ChaCha8Rng, n: usize) -> Vec<Hex> {
    (0..n)
        .map(|_| Hex::new(rng.gen_range(-30..=30), rng.gen_range(-30..=30)))
        .collect()
}

// ============================================================================
// GEOMETRY TESTS
// ============================================================================

#[test]
fn test_corners_at_hex_size() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for hex in random_hexes(&mut rng, 50) {
        let size = rng.gen_range(1.0f32..40.0);
        let center = axial_to_pixel(hex, size);
        let corners = hex_corners(center, size);
        assert_eq!(corners.len(), 6);
        for c in corners {
            let d = c.distance_to(center);
            assert!((d - size).abs() < 1e-3 * size.max(1.0), "corner {:?} off by {}", c, d - size);
        }
        assert_eq!(pixel_to_axial(center, size), hex);
    }
}

#[test]
fn test_distance_metric_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let hexes = random_hexes(&mut rng, 30);
    for &a in &hexes {
        assert_eq!(hex_distance(a, a), 0);
        for &b in &hexes {
            assert_eq!(hex_distance(a, b), hex_distance(b, a));
            for &c in &hexes {
                assert!(hex_distance(a, c) <= hex_distance(a, b) + hex_distance(b, c));
            }
        }
    }
}

#[test]
fn test_neighbors_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for hex in random_hexes(&mut rng, 30) {
        let ns = neighbors(hex);
        let mut unique = ns.to_vec();
        unique.sort_by_key(|h| (h.q, h.r));
        unique.dedup();
        assert_eq!(unique.len(), 6);
        assert!(!ns.contains(&hex));
    }
}

// ============================================================================
// GAME LOGIC TESTS
// ============================================================================

#[test]
fn test_starting_state() {
    for config in [GameConfig::bounded(), GameConfig::radial()] {
        let start = config.board.start_cell();
        let game = GameState::new(config, Some(1)).unwrap();
        assert_eq!(game.snake().cells(), vec![start]);
        assert_eq!(game.direction().offset(), (1, 0));
        assert_eq!(game.status(), Status::Running);
        assert_eq!(game.score(), 0);
    }
}

#[test]
fn test_single_step_from_origin() {
    let mut game = GameState::new(GameConfig::radial(), Some(2))
        .unwrap()
        .with_food(Some(Hex::new(0, 5)))
        .unwrap();
    game.tick();
    assert_eq!(game.snake().cells(), vec![Hex::new(1, 0)]);
    assert!(!game.is_over());
}

#[test]
fn test_eating_scenario() {
    let mut game = bounded_game(&[(2, 2), (1, 2)], Direction::SouthEast)
        .with_food(Some(Hex::new(3, 2)))
        .unwrap();
    let reward = game.config().reward;

    game.tick();
    assert_eq!(game.snake().cells(), cells(&[(3, 2), (2, 2), (1, 2)]));
    assert_eq!(game.score(), reward);
    let food = game.food().unwrap();
    assert!(!game.snake().contains(food));
    assert!(game.board().contains(food));
}

#[test]
fn test_walking_in_a_circle_bites() {
    // Four-cell snake turning back on itself
    let mut game = bounded_game(&[(5, 5), (4, 5), (4, 6), (5, 6)], Direction::SouthEast)
        .with_food(None)
        .unwrap();
    assert!(game.steer(Direction::South));
    game.tick(); // (5,6) is the tail
    assert!(game.is_over());
    assert_eq!(game.snake().cells(), cells(&[(5, 5), (4, 5), (4, 6), (5, 6)]));
}

#[test]
fn test_bounded_wall() {
    let mut game = bounded_game(&[(14, 0)], Direction::SouthEast).with_food(None).unwrap();
    assert_eq!(
        game.tick(),
        TickOutcome::Crashed { at: Hex::new(15, 0), collision: Collision::Boundary }
    );
}

#[test]
fn test_radial_wall() {
    let mut game = GameState::new(GameConfig::radial(), Some(3))
        .unwrap()
        .with_snake(Snake::new(Hex::new(0, -15)), Direction::North)
        .unwrap();
    let outcome = game.tick();
    assert!(hex_distance(Hex::ORIGIN, Hex::new(0, -16)) > 15);
    assert_eq!(outcome, TickOutcome::Crashed { at: Hex::new(0, -16), collision: Collision::Boundary });
}

#[test]
fn test_reverse_key_ignored() {
    let mut game = GameState::new(GameConfig::bounded(), Some(4)).unwrap();
    assert_eq!(game.press(Key::Left), Flow::Continue);
    assert_eq!(game.direction().offset(), (1, 0));
    game.press(Key::E);
    assert_eq!(game.direction().offset(), (1, -1));
}

#[test]
fn test_restart_restores_initial_state() {
    let mut game = bounded_game(&[(14, 5), (13, 5), (12, 5)], Direction::SouthEast);
    game.tick();
    assert!(game.is_over());

    game.press(Key::Up); // ignored while over
    assert_eq!(game.press(Key::R), Flow::Continue);

    assert_eq!(game.status(), Status::Running);
    assert_eq!(game.snake().cells(), vec![Board::rect(15, 15).start_cell()]);
    assert_eq!(game.direction(), Direction::SouthEast);
    assert_eq!(game.score(), 0);
    assert_eq!(game.ticks(), 0);
}

#[test]
fn test_radial_restart_while_running() {
    let mut game = GameState::new(GameConfig::radial(), Some(8))
        .unwrap()
        .with_snake(Snake::from_cells(cells(&[(3, 0), (2, 0), (1, 0)])).unwrap(), Direction::SouthEast)
        .unwrap();
    game.press(Key::Down);
    game.tick();
    assert!(!game.is_over());

    assert_eq!(game.press(Key::R), Flow::Continue);
    assert_eq!(game.snake().cells(), vec![Hex::ORIGIN]);
    assert_eq!(game.direction(), Direction::SouthEast);
    assert_eq!(game.ticks(), 0);
}

#[test]
fn test_quick_double_turn_bites_neck() {
    let mut game = bounded_game(&[(5, 5), (4, 5)], Direction::SouthEast).with_food(None).unwrap();
    game.press(Key::Down);
    game.press(Key::Left);
    assert_eq!(
        game.tick(),
        TickOutcome::Crashed { at: Hex::new(4, 5), collision: Collision::SelfBite }
    );
}

#[test]
fn test_realtime_loop() {
    let mut game = GameState::new(GameConfig::radial(), Some(5)).unwrap();
    let frame = Duration::from_millis(16);
    let mut moves = 0;
    // One second of 60 fps frames at 8 moves per second
    for _ in 0..62 {
        if game.update(frame) != TickOutcome::Idle {
            moves += 1;
        }
    }
    assert!((6..=8).contains(&moves), "moves = {}", moves);
}

// ============================================================================
// AUTOPILOT + SCENE TESTS
// ============================================================================

#[test]
fn test_autopilot_runs_keep_invariants() {
    for (i, config) in [GameConfig::bounded(), GameConfig::radial()].into_iter().enumerate() {
        let mut game = GameState::new(config, Some(100 + i as u64)).unwrap();
        let mut pilot = Autopilot::with_seed(i as u64);
        for _ in 0..3_000 {
            if game.is_over() {
                break;
            }
            if let Some(dir) = pilot.choose(&game) {
                game.steer(dir);
            }
            game.tick();

            let body = game.snake().cells();
            assert!(body.iter().all(|&c| game.board().contains(c)));
            if let Some(food) = game.food() {
                assert!(!game.snake().contains(food));
                assert!(game.board().contains(food));
            }
            assert_eq!(body.len() as u32, game.eaten() + 1);
        }
    }
}

#[test]
fn test_scene_matches_state() {
    let mut game = GameState::new(GameConfig::bounded(), Some(6)).unwrap();
    let mut pilot = Autopilot::with_seed(6);
    pilot.play_game(&mut game, 200);

    let layout = game.config().layout();
    let scene = Scene::build(&game, &layout);
    assert_eq!(scene.count(Fill::Body) + scene.count(Fill::Head), game.snake().len());
    assert_eq!(scene.count(Fill::Food), game.food().map_or(0, |_| 1));
    assert_eq!(scene.overlay, game.is_over());
}
