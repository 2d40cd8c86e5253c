use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# hookgate configuration
# Flags and environment variables (PORT, HOOKGATE_HOST,
# HOOKGATE_MAX_BODY_BYTES, HOOKGATE_ENRICH) override these values.

[server]
host = "0.0.0.0"
port = 8080
max_body_bytes = 2097152

[hooks]
# Add intercepted_before / intercepted_after timestamps and result_count
enrich = true
"#;

/// Initialize a new config file
pub fn run_init(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Config already exists at {:?}", path);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    println!("Created config at {:?}", path);
    Ok(())
}
