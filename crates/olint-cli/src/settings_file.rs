use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use olint_core::Settings;

/// Read the settings document. A missing file yields the default (inactive)
/// settings.
pub fn read_settings(path: &Path) -> Result<Settings, String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no settings file at '{}', using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(format!("Failed to read '{}': {}", path.display(), e)),
    };

    Settings::from_json(&text).map_err(|e| format!("Failed to load '{}': {}", path.display(), e))
}

pub fn write_settings(path: &Path, settings: &Settings) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create '{}': {}", parent.display(), e))?;
    }
    let json = settings.to_json_pretty().map_err(|e| e.to_string())?;
    fs::write(path, json + "\n")
        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    Ok(())
}

/// Load, modify and save the settings document.
pub fn update_settings<F>(path: &Path, f: F) -> Result<Settings, String>
where
    F: FnOnce(&mut Settings) -> Result<(), String>,
{
    let mut settings = read_settings(path)?;
    f(&mut settings)?;
    write_settings(path, &settings)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("olint-cli-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = read_settings(&temp_path("missing.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_activate_then_deactivate_round_trip() {
        let path = temp_path("toggle.json");

        let settings = update_settings(&path, |s| {
            s.activate();
            s.site_host = "example.com".to_string();
            Ok(())
        })
        .unwrap();
        assert!(settings.is_active());
        assert!(read_settings(&path).unwrap().resolve().enabled);

        update_settings(&path, |s| {
            s.deactivate();
            Ok(())
        })
        .unwrap();
        let reloaded = read_settings(&path).unwrap();
        assert!(!reloaded.is_active());
        assert_eq!(reloaded.site_host, "example.com");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let path = temp_path("broken.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        let err = read_settings(&path).unwrap_err();
        assert!(err.contains("broken.json"));
        let _ = fs::remove_file(&path);
    }
}
