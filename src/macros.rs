#[cfg(feature = "enable_logging")]
macro_rules! base1024_trace {
    ($($arg:tt)+) => {
        log::trace!($($arg)+);
    }
}

#[cfg(feature = "enable_logging")]
macro_rules! base1024_debug {
    ($($arg:tt)+) => {
        log::debug!($($arg)+);
    }
}

#[cfg(not(feature = "enable_logging"))]
macro_rules! base1024_trace {
    ($($arg:tt)+) => {};
}

#[cfg(not(feature = "enable_logging"))]
macro_rules! base1024_debug {
    ($($arg:tt)+) => {};
}
