//! Logging shims: forward to the `log` crate only when the `log` feature is enabled.

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)*);
        }
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        {
            log::debug!($($arg)*);
        }
    };
}

pub(crate) use {debug, trace};
