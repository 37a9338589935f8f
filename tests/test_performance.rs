//! Performance tests for the per-tick update and draw list.

use std::time::Instant;
use tilehop::{build_draw_list, GameSession, InputState, RoomId};

#[test]
fn test_tick_performance() {
    let mut session = GameSession::new();
    session.rooms.enter(RoomId::Room2, &mut session.player);

    let start = Instant::now();
    let iterations = 1000;

    for _ in 0..iterations {
        session.update(&InputState::idle());
        let _commands = build_draw_list(&session);
    }

    let elapsed = start.elapsed();
    let avg_tick_time = elapsed / iterations;

    println!("Average tick + draw list time: {:?}", avg_tick_time);

    // A tick must comfortably fit in a 60 Hz frame
    assert!(
        avg_tick_time.as_millis() < 2,
        "Tick processing too slow: {:?}",
        avg_tick_time
    );
}

#[test]
fn test_room_rebuild_performance() {
    let mut session = GameSession::new();

    let start = Instant::now();
    let iterations = 200;

    for i in 0..iterations {
        let room = if i % 2 == 0 { RoomId::Room2 } else { RoomId::Room1 };
        session.rooms.enter(room, &mut session.player);
    }

    let elapsed = start.elapsed();
    let avg_rebuild_time = elapsed / iterations;

    println!("Average room rebuild time: {:?}", avg_rebuild_time);

    assert!(
        avg_rebuild_time.as_millis() < 5,
        "Room rebuilds too slow: {:?}",
        avg_rebuild_time
    );
}
