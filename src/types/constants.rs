pub const FREE: u8 = 0;
pub const BLOCKED: u8 = 1;

pub const DEFAULT_ALTITUDE: f32 = 150.0;
pub const DEFAULT_SAFETY_MARGIN: f32 = 3.0;
