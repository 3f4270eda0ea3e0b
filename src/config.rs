use std::path::PathBuf;

/// Environment variable naming the directory relative document paths are resolved against.
pub const BASE_DIR_VAR: &str = "TEXT_STATS_BASE_DIR";

/// Environment variable naming the sample CSV the export header is read from.
pub const SAMPLE_CSV_VAR: &str = "TEXT_STATS_SAMPLE_CSV";

/// File name of the sample CSV inside the base directory.
pub const SAMPLE_CSV_NAME: &str = "sample.csv";

/// Gets the base directory from the environment or falls back to the working directory.
pub fn base_dir() -> PathBuf {
    std::env::var(BASE_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Gets the sample CSV path from the environment or uses `<base dir>/sample.csv`.
pub fn sample_csv_path() -> PathBuf {
    std::env::var(SAMPLE_CSV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| base_dir().join(SAMPLE_CSV_NAME))
}
