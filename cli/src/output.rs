/// Rendering format for structured command output.
#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text (OpenSSL-like)
    Text,
    /// JSON
    Json,
    /// YAML
    Yaml,
}
