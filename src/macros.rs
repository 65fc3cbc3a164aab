//! Logging macros that record the enclosing function.
//!
//! The plain methods on [`Logger`](crate::Logger) report the source file and
//! line of the call. These macros additionally capture the path of the
//! function they are expanded in, so console and file lines read
//! `app::net::connect [42]` instead of `src/net.rs [42]`.
//!
//! # Examples
//!
//! ```
//! use rust_dual_logger::prelude::*;
//! use rust_dual_logger::{debug, info, log_file};
//!
//! let logger = Logger::builder().console_writer(std::io::sink()).build();
//!
//! info!(logger, "Server started");
//! debug!(logger, "connecting", "host1", 8080);
//! # let dir = tempfile::tempdir().unwrap();
//! # let logger = Logger::builder().log_dir(dir.path()).build();
//! log_file!(logger, "request served", 200, "GET /");
//! ```

/// Path of the function the macro is expanded in.
///
/// ```
/// fn connect() -> &'static str {
///     rust_dual_logger::function_path!()
/// }
/// assert!(connect().ends_with("::connect"));
/// ```
#[macro_export]
macro_rules! function_path {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::caller::trim_function_path(__type_name_of(__here))
    }};
}

/// [`CallerInfo`](crate::CallerInfo) for the current line and function.
#[macro_export]
macro_rules! caller {
    () => {
        $crate::core::CallerInfo::new(
            ::std::option::Option::Some($crate::function_path!()),
            file!(),
            line!(),
        )
    };
}

/// Log a message and trailing values at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_dual_logger::prelude::*;
/// # let logger = Logger::builder().console_writer(std::io::sink()).build();
/// use rust_dual_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "request failed", 500, "GET /");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_with_caller(
            $level,
            $message,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
            $crate::caller!(),
        )
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($rest)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_dual_logger::prelude::*;
/// # let logger = Logger::builder().console_writer(std::io::sink()).build();
/// use rust_dual_logger::error;
/// error!(logger, "Connection failed");
/// error!(logger, "Failed to open file", "/etc/app.toml");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($rest)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($rest)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($rest)+)
    };
}

/// Log a plain text message (no timestamp, marker or location on the console).
#[macro_export]
macro_rules! text {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Text, $($rest)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_dual_logger::prelude::*;
/// # let logger = Logger::builder().console_writer(std::io::sink()).build();
/// use rust_dual_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($rest)+)
    };
}

/// Append a message and trailing values to today's log file.
#[macro_export]
macro_rules! log_file {
    ($logger:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $logger.file_with_caller(
            $message,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
            $crate::caller!(),
        )
    };
}

/// Log through the process-wide logger at an explicit level.
///
/// Same as [`log!`](crate::log) against [`global::logger`](crate::global::logger),
/// so facade lines also name the enclosing function.
///
/// ```
/// use rust_dual_logger::{global_log, LogLevel};
/// # rust_dual_logger::global::init(
/// #     rust_dual_logger::Logger::builder().console_writer(std::io::sink()).build(),
/// # ).unwrap();
/// global_log!(LogLevel::Warning, "disk almost full", "93%");
/// ```
#[macro_export]
macro_rules! global_log {
    ($level:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::logger().log_with_caller(
            $level,
            $message,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
            $crate::caller!(),
        )
    };
}

#[macro_export]
macro_rules! global_fatal {
    ($($rest:tt)+) => {
        $crate::global_log!($crate::LogLevel::Fatal, $($rest)+)
    };
}

#[macro_export]
macro_rules! global_error {
    ($($rest:tt)+) => {
        $crate::global_log!($crate::LogLevel::Error, $($rest)+)
    };
}

#[macro_export]
macro_rules! global_warning {
    ($($rest:tt)+) => {
        $crate::global_log!($crate::LogLevel::Warning, $($rest)+)
    };
}

#[macro_export]
macro_rules! global_info {
    ($($rest:tt)+) => {
        $crate::global_log!($crate::LogLevel::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! global_text {
    ($($rest:tt)+) => {
        $crate::global_log!($crate::LogLevel::Text, $($rest)+)
    };
}

#[macro_export]
macro_rules! global_debug {
    ($($rest:tt)+) => {
        $crate::global_log!($crate::LogLevel::Debug, $($rest)+)
    };
}

/// Render a console line through the process-wide logger without writing it.
#[macro_export]
macro_rules! global_get_text {
    ($level:expr, $message:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::logger().get_text_with_caller(
            $level,
            $message,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
            $crate::caller!(),
        )
    };
}

/// Append to today's log file through the process-wide logger.
#[macro_export]
macro_rules! global_log_file {
    ($message:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::logger().file_with_caller(
            $message,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
            $crate::caller!(),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (Logger, Captured) {
        let out = Captured::default();
        let logger = Logger::builder()
            .colors(false)
            .console_writer(out.clone())
            .build();
        (logger, out)
    }

    #[test]
    fn test_macros_record_enclosing_function() {
        let (logger, out) = capture();

        let line = line!() + 1;
        crate::debug!(logger, "connecting", "host1", 8080);

        let text = String::from_utf8(out.0.lock().clone()).unwrap();
        assert!(text.contains("DBG connecting   host1   8080"));
        assert!(text.contains(&format!(
            "rust_dual_logger::macros::tests::test_macros_record_enclosing_function [{}]",
            line
        )));
    }

    #[test]
    fn test_all_level_macros() {
        let (logger, out) = capture();

        crate::fatal!(logger, "f");
        crate::error!(logger, "e", 1);
        crate::warning!(logger, "w", 1, 2);
        crate::info!(logger, "i");
        crate::text!(logger, "t");
        crate::debug!(logger, "d",);

        let text = String::from_utf8(out.0.lock().clone()).unwrap();
        assert_eq!(text.lines().count(), 6);
        for marker in ["PAN", "ERR", "WRN", "INF", "DBG"] {
            assert!(text.contains(marker));
        }
    }

    #[test]
    fn test_macro_respects_ceiling() {
        let (logger, out) = capture();
        logger.set_level(LogLevel::Info);

        crate::debug!(logger, "hidden", 1);

        assert!(out.0.lock().is_empty());
        assert_eq!(logger.metrics().suppressed_count(), 1);
    }

    #[test]
    fn test_log_file_macro() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::builder()
            .console_writer(io::sink())
            .log_dir(dir.path())
            .build();

        crate::log_file!(logger, "served", 200);

        let path = logger.current_log_file().expect("file opened");
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("rust_dual_logger::macros::tests::test_log_file_macro["));
        assert!(content.contains("\tserved\t [200]\n"));
    }
}
