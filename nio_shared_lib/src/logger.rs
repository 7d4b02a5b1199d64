/// # Arguments
/// * `kind` - "heap" or "direct"
/// * `capacity` - of type usize
#[macro_export]
macro_rules! log_store_allocated {
    ($kind:expr, $capacity:expr) => {
        log::debug!("allocated {} store of {} bytes", $kind, $capacity);
    };
}

/// # Arguments
/// * `operation` - name of the deriving operation, e.g. "slice"
/// * `view` - anything implementing std::fmt::Debug
#[macro_export]
macro_rules! log_view_derived {
    ($operation:expr, $view:expr) => {
        log::trace!("{}: {:?}", $operation, $view);
    };
}

/// # Arguments
/// * `moved` - number of bytes moved to the front
/// * `direct` - of type bool
#[macro_export]
macro_rules! log_compacted {
    ($moved:expr, $direct:expr) => {
        if $direct {
            log::trace!("compacted {} bytes with raw move", $moved);
        } else {
            log::trace!("compacted {} bytes with array copy", $moved);
        }
    };
}
