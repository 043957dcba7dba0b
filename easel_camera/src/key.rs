// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A discrete camera command, one per key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraKey {
    /// `W`: step along the viewing direction.
    Forward,
    /// `S`: step against the viewing direction.
    Back,
    /// `A`: step to the left.
    Left,
    /// `D`: step to the right.
    Right,
    /// `Q`: turn left.
    TurnLeft,
    /// `E`: turn right.
    TurnRight,
    /// `R`: rise along world Y.
    Up,
    /// `F`: sink along world Y.
    Down,
    /// `H`: return to the home pose.
    Home,
    /// `O`: switch to orthographic projection.
    Orthographic,
    /// `P`: switch to perspective projection.
    Perspective,
}

impl CameraKey {
    /// Maps a letter key to its command, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c.to_ascii_uppercase() {
            'W' => Self::Forward,
            'S' => Self::Back,
            'A' => Self::Left,
            'D' => Self::Right,
            'Q' => Self::TurnLeft,
            'E' => Self::TurnRight,
            'R' => Self::Up,
            'F' => Self::Down,
            'H' => Self::Home,
            'O' => Self::Orthographic,
            'P' => Self::Perspective,
            _ => return None,
        })
    }

    /// Maps a toolkit key code to its command.
    ///
    /// Letter keys are expected to report the code point of their upper-case
    /// letter, as most virtual key code tables do.
    #[must_use]
    pub fn from_key_code(code: u32) -> Option<Self> {
        char::from_u32(code).and_then(Self::from_char)
    }
}
