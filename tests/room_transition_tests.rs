//! Integration tests for door transitions and enemy contact.

use tilehop::{
    CompletionState, Enemy, GameEvent, GameSession, InputState, Player, Position, RoomId,
    RoomManager,
};

fn hold_right() -> InputState {
    InputState {
        right_held: true,
        ..InputState::idle()
    }
}

/// Walk right from the spawn: drop off two ledges and reach the door.
#[test]
fn test_walking_right_reaches_room_two() {
    let mut session = GameSession::new();
    let press = InputState {
        right_pressed: true,
        ..hold_right()
    };

    let mut transitions = Vec::new();
    let mut events = session.update(&press);
    for _ in 0..200 {
        for event in events.drain(..) {
            transitions.push((session.tick, event));
        }
        events = session.update(&hold_right());
    }

    assert_eq!(
        transitions,
        vec![(
            58,
            GameEvent::RoomChanged {
                from: RoomId::Room1,
                to: RoomId::Room2
            }
        )]
    );
    assert_eq!(session.current_room(), RoomId::Room2);
    assert!(session.is_running());

    // Room 2 walls off the way right at floor level
    assert_eq!(session.player.rect.right(), 352);
    assert!(session.player.on_ground);
}

#[test]
fn test_transition_ignores_pre_transition_position() {
    for start in [
        Position::new(0, 0),
        Position::new(672, 300),
        Position::new(-50, 900),
    ] {
        let mut player = Player::default();
        let mut manager = RoomManager::new(&mut player);
        player.set_position(start);

        let entered = manager.on_door_overlap(&mut player);

        assert_eq!(entered, Some(RoomId::Room2));
        assert_eq!(player.position(), Position::new(100, 280));
    }
}

#[test]
fn test_transition_rebuilds_room_entities() {
    let mut player = Player::default();
    let mut manager = RoomManager::new(&mut player);
    let room_one = manager.room().clone();

    manager.on_door_overlap(&mut player);

    let room_two = manager.room();
    assert_ne!(&room_one, room_two);
    assert_eq!(room_one.platforms().count(), 47);
    assert_eq!(room_two.platforms().count(), 61);
    assert_eq!(room_two.doors().count(), 0);
    assert_eq!(room_two.enemies().count(), 1);
}

#[test]
fn test_falling_onto_enemy_is_game_over() {
    let mut session = GameSession::new();
    session.rooms.enter(RoomId::Room2, &mut session.player);
    session.player.set_position(Position::new(640, 200));

    let mut ended_at = None;
    for _ in 0..40 {
        let events = session.update(&InputState::idle());
        if !session.is_running() {
            assert_eq!(events, vec![GameEvent::GameOver { room: RoomId::Room2 }]);
            ended_at = Some(session.tick);
            break;
        }
    }

    assert_eq!(ended_at, Some(11));
    assert_eq!(session.completion, CompletionState::GameOver);
}

#[test]
fn test_enemy_kills_in_room_one_too() {
    let mut session = GameSession::new();
    let spawn = session.player.position();
    session
        .rooms
        .room_mut()
        .entities
        .push(Enemy::spawn_at(spawn, 32).into());

    session.update(&InputState::idle());

    assert!(!session.is_running());
    assert_eq!(session.completion, CompletionState::GameOver);
    assert_eq!(session.current_room(), RoomId::Room1);
}

#[test]
fn test_quit_after_game_over_keeps_game_over() {
    let mut session = GameSession::new();
    let spawn = session.player.position();
    session
        .rooms
        .room_mut()
        .entities
        .push(Enemy::spawn_at(spawn, 32).into());
    session.update(&InputState::idle());

    let quit = InputState {
        quit: true,
        ..InputState::idle()
    };
    session.update(&quit);

    assert_eq!(session.completion, CompletionState::GameOver);
}
