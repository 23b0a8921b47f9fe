//! Kernel selector.

use std::fmt;
use std::str::FromStr;

use crate::backend::Backend;
use crate::error::Error;
use crate::kernels::{
    Kernel, MEDIUM_WIDTH, NARROW_WIDTH, WIDE_WIDTH, add_medium, add_narrow, add_wide,
};

/// Which kernel family drives a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// 4 lanes, 128-bit
    #[default]
    Narrow,
    /// 8 lanes, 256-bit
    Medium,
    /// 16 lanes, 512-bit
    Wide,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Narrow, Mode::Medium, Mode::Wide];

    /// Lanes processed per kernel call.
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            Mode::Narrow => NARROW_WIDTH,
            Mode::Medium => MEDIUM_WIDTH,
            Mode::Wide => WIDE_WIDTH,
        }
    }

    #[inline]
    pub fn kernel(self) -> Kernel {
        match self {
            Mode::Narrow => add_narrow,
            Mode::Medium => add_medium,
            Mode::Wide => add_wide,
        }
    }

    /// Instruction set compiled into this mode's kernel.
    pub const fn backend(self) -> Backend {
        match self {
            Mode::Narrow => Backend::narrow(),
            Mode::Medium => Backend::medium(),
            Mode::Wide => Backend::wide(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Narrow => "narrow",
            Mode::Medium => "medium",
            Mode::Wide => "wide",
        }
    }

    /// Instruction-set names also accepted on the command line.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Mode::Narrow => &["sse"],
            Mode::Medium => &["avx2"],
            Mode::Wide => &["avx512"],
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == token || mode.aliases().contains(&token.as_str()))
            .ok_or_else(|| Error::UnsupportedMode(s.to_string()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
