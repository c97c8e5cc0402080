#[cfg(feature = "tracing")]
macro_rules! otrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "anchor_overlay", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! otrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! odebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "anchor_overlay", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! odebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! owarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "anchor_overlay", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! owarn {
    ($($tt:tt)*) => {};
}
