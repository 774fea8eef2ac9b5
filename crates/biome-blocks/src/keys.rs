//! The fixed key ordering for material slot blocks.

/// Keys written for a block, in output order.
///
/// Any key not listed here is dropped when a block is written.
pub const KEY_ORDER: [&str; 15] = [
    "VerticalMask",
    "VerticalUVMult",
    "VerticalUVScaleMask",
    "HeightLowLimit",
    "Probability",
    "PresetEnabled",
    "HighLimitMask",
    "HorizontalMask",
    "SelectedHorizontalTexture",
    "SlopeThresholdMask",
    "SelectedVerticalTexture",
    "LowLimitMask",
    "SlopeThresholdAction",
    "SlopeThresholdIndex",
    "HeightHighLimit",
];

/// The last key of a block; its line closes the block in a session file.
pub const TERMINAL_KEY: &str = KEY_ORDER[KEY_ORDER.len() - 1];
