//! Small formatting helpers shared by the superperm tools.

use std::{
    fmt::{Display, Formatter},
    time::Duration,
};

use number_prefix::NumberPrefix;

/// Wrapper around [`usize`] whose [`Display`] impl shortens big numbers with an SI prefix -
/// e.g. `5040` displays as `5.0k` and `25401840` as `25.4M`.  Edge counts get silly very
/// quickly, so these show up a lot in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigNumInt(pub usize);

impl Display for BigNumInt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match NumberPrefix::decimal(self.0 as f64) {
            NumberPrefix::Standalone(n) => write!(f, "{}", n),
            NumberPrefix::Prefixed(prefix, n) => write!(f, "{:.1}{}", n, prefix),
        }
    }
}

/// Wrapper around [`Duration`] which displays with a sensible unit and precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyDuration(pub Duration);

impl Display for PrettyDuration {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let secs = self.0.as_secs_f64();
        if secs >= 1.0 {
            write!(f, "{:.2}s", secs)
        } else if secs >= 0.001 {
            write!(f, "{:.1}ms", secs * 1_000.0)
        } else {
            write!(f, "{:.1}us", secs * 1_000_000.0)
        }
    }
}
