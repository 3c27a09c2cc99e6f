//! Warnings, routed through the `log` facade.

/// Log a warning with the source location appended.
#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => {
        $crate::log::warn!("{} at {:?} line {}",
                   format_args!($formatstr $(,$arg)*), file!(), line!())
    }
}

/// Like `warn!` but at debug level, for tracing render passes.
#[macro_export]
macro_rules! trace_render {
    ($formatstr:expr $(,$arg:expr)*) => {
        $crate::log::debug!("{} at {:?} line {}",
                    format_args!($formatstr $(,$arg)*), file!(), line!())
    }
}
