use crate::Time;

// Default prediction horizon length
pub const DEFAULT_HORIZON: Time = 100.0;

// Default propagation step used by concrete predictors that discretize time
pub const DEFAULT_STEP: Time = 1.0;
