//! Named colors used by the pattern generators

use crate::spatial::Rgb;

/// Pure black
pub const BLACK: Rgb = [0, 0, 0];
/// Pure white
pub const WHITE: Rgb = [255, 255, 255];
/// Pure red
pub const RED: Rgb = [255, 0, 0];
/// Orange
pub const ORANGE: Rgb = [255, 200, 0];
/// Pure yellow
pub const YELLOW: Rgb = [255, 255, 0];
/// Pure green
pub const GREEN: Rgb = [0, 255, 0];
/// Cyan
pub const CYAN: Rgb = [0, 255, 255];
/// Pure blue
pub const BLUE: Rgb = [0, 0, 255];
/// Violet closing the rainbow
pub const PURPLE: Rgb = [104, 49, 255];

/// Rainbow stripe colors, first stripe first
pub const RAINBOW: [Rgb; 7] = [RED, ORANGE, YELLOW, GREEN, CYAN, BLUE, PURPLE];
