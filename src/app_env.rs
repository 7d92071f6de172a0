/// Address and port the HTTP server binds to, e.g. `0.0.0.0:3001`. Port 3001 on all
/// interfaces is used when unset.
pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
/// Path of the JSON file the to-do store persists to. `userdata.json` in the working
/// directory is used when unset; the file is created with an empty document on startup
/// if nothing exists at the path.
pub const DATA_FILE: &str = "DATA_FILE";
/// Log level configuration for the application. For formatting info, see [EnvFilter's documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// OpenTelemetry span export URL. Should be http://localhost:4317 by default, as the service should
/// have an OpenTelemetry collector sidecar which directs traces to the correct place. Telemetry
/// export stays disabled unless both export URLs are present.
pub const OTEL_SPAN_EXPORT_URL: &str = "OTEL_SPAN_EXPORT_URL";
/// OpenTelemetry metrics export URL. Should be http://localhost:4317 by default, as the service should
/// have an OpenTelemetry collector sidecar which directs metrics to the correct place. Telemetry
/// export stays disabled unless both export URLs are present.
pub const OTEL_METRIC_EXPORT_URL: &str = "OTEL_METRIC_EXPORT_URL";
