use tracing_appender::non_blocking::WorkerGuard;

/// Name of the log file written to the working directory.
pub const LOG_FILE_NAME: &str = "mazewalk.log";

/// Installs a global subscriber that writes to [`LOG_FILE_NAME`].
///
/// Logs go to a file so they never interleave with the maze printed on stdout.
/// The level is DEBUG when the `DEBUG` environment variable is `1`, INFO otherwise.
/// The returned guard flushes pending logs when dropped and must be kept alive
/// for as long as logging is needed.
pub fn init_tracing() -> WorkerGuard {
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}
