/// Expands to the `*_with_values` call of a logger with the fields given as
/// `key = value` pairs, in source order
#[doc(hidden)]
#[macro_export]
macro_rules! __log_with_values {
    ($logger:expr, $method:ident, $($field:ident = $value:expr),+; $($rest:tt)*) => {
        $logger.$method(
            &::std::format!($($rest)*),
            [$((::core::stringify!($field), &$value as &dyn ::core::fmt::Display)),+],
        )
    };
}

/// Log at the debug level.
/// Supports an explicit logger, `key = value` fields and format arguments
///
/// ```ignore
/// debug!("loaded {} entries", n);
/// debug!(path = path.display(), size = len; "file read");
/// debug!(logger: &logger, "using a local logger");
/// ```
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::__log_with_values!($logger, debug_with_values, $($field = $value),+; $($rest)*)
    };
    (logger: $logger:expr, $($arg:tt)*) => {
        $logger.debug(&::std::format!($($arg)*))
    };
    ($($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::__log_with_values!($crate::global_logger(), debug_with_values, $($field = $value),+; $($rest)*)
    };
    ($($arg:tt)*) => {
        $crate::global_logger().debug(&::std::format!($($arg)*))
    };
}

/// Log at the info level, see [`debug!`]
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::__log_with_values!($logger, info_with_values, $($field = $value),+; $($rest)*)
    };
    (logger: $logger:expr, $($arg:tt)*) => {
        $logger.info(&::std::format!($($arg)*))
    };
    ($($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::__log_with_values!($crate::global_logger(), info_with_values, $($field = $value),+; $($rest)*)
    };
    ($($arg:tt)*) => {
        $crate::global_logger().info(&::std::format!($($arg)*))
    };
}

/// Log at the special level, see [`debug!`]
#[macro_export]
macro_rules! special {
    (logger: $logger:expr, $($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::__log_with_values!($logger, special_with_values, $($field = $value),+; $($rest)*)
    };
    (logger: $logger:expr, $($arg:tt)*) => {
        $logger.special(&::std::format!($($arg)*))
    };
    ($($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::__log_with_values!($crate::global_logger(), special_with_values, $($field = $value),+; $($rest)*)
    };
    ($($arg:tt)*) => {
        $crate::global_logger().special(&::std::format!($($arg)*))
    };
}

/// Log at the error level, see [`debug!`]
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::__log_with_values!($logger, error_with_values, $($field = $value),+; $($rest)*)
    };
    (logger: $logger:expr, $($arg:tt)*) => {
        $logger.error(&::std::format!($($arg)*))
    };
    ($($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::__log_with_values!($crate::global_logger(), error_with_values, $($field = $value),+; $($rest)*)
    };
    ($($arg:tt)*) => {
        $crate::global_logger().error(&::std::format!($($arg)*))
    };
}

/// Log at the fatal level then exit the process with the given code.
/// The expansion has type `!`.
///
/// ```ignore
/// fatal!(2, "cannot bind {}", addr);
/// fatal!(logger: &logger, 3, port = port; "cannot bind");
/// ```
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $code:expr, $($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $logger.fatal_with_values(
            $code,
            &::std::format!($($rest)*),
            [$((::core::stringify!($field), &$value as &dyn ::core::fmt::Display)),+],
        )
    };
    (logger: $logger:expr, $code:expr, $($arg:tt)*) => {
        $logger.fatal($code, &::std::format!($($arg)*))
    };
    ($code:expr, $($field:ident = $value:expr),+ $(,)?; $($rest:tt)*) => {
        $crate::global_logger().fatal_with_values(
            $code,
            &::std::format!($($rest)*),
            [$((::core::stringify!($field), &$value as &dyn ::core::fmt::Display)),+],
        )
    };
    ($code:expr, $($arg:tt)*) => {
        $crate::global_logger().fatal($code, &::std::format!($($arg)*))
    };
}
