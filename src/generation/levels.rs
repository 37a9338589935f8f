//! # Level Data
//!
//! The two hand-authored rooms.
//!
//! `X` platform, `P` player spawn, `D` door, `E` enemy, anything else is air.

/// Starting room: a ledge with the player on it and a door on the right.
pub const LEVEL_1: &[&str] = &[
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "           P                ",
    "        XXXXXX              ",
    "                     D      ",
    "      XXXXXXXXXXXXX         ",
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];

/// Second room. It has no player marker; entry places the player explicitly.
pub const LEVEL_2: &[&str] = &[
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "                            ",
    "  X                 E       ",
    " XXXXXX    XXXXXXXXXXXXX    ",
    "XXXXXXXX   XXXXX            ",
    "XXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];
