use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{ConfigError, Result, VhsError},
    params::VhsParameters,
};

/// Top-level configuration file
///
/// Every field falls back to its default, so a file only needs to list the
/// parameters it changes:
///
/// ```toml
/// [parameters]
/// grain_strength = 0.2
///
/// [parameters.glitch_parameters]
/// grid = [32.0, 16.0]
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// VHS effect parameters
    pub parameters: VhsParameters,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => VhsError::from(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }),
            _ => VhsError::Io(e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(|e| ConfigError::ParseFailed {
            path: "<inline>".to_string(),
            reason: e.message().to_string(),
        })?;
        Ok(config)
    }

    /// Resolve defaults, then an optional file, then `key=value` overrides
    pub fn resolve<P, I, S>(path: Option<P>, overrides: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides)?;
        Ok(config)
    }

    /// Render the configuration as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        let mut tree = toml::Value::try_from(self).map_err(|e| ConfigError::SerializeFailed {
            reason: e.to_string(),
        })?;
        shorten_floats(&mut tree);

        let content = toml::to_string_pretty(&tree).map_err(|e| ConfigError::SerializeFailed {
            reason: e.to_string(),
        })?;
        Ok(content)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path.as_ref(), content)?;
        debug!("Saved configuration to {}", path.as_ref().display());
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()
    }

    /// Override a single parameter by dotted path
    ///
    /// The path is relative to `[parameters]`, e.g. `grain_strength` or
    /// `glitch_parameters.frequency`. The glitch grid takes either
    /// `glitch_parameters.grid = "x,y"` or one component through
    /// `glitch_parameters.grid.x` / `glitch_parameters.grid.y`.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<()> {
        let mut tree = toml::Value::try_from(self.parameters).map_err(|e| {
            ConfigError::SerializeFailed { reason: e.to_string() }
        })?;

        let segments: Vec<&str> = key.split('.').map(str::trim).collect();
        let slot = lookup_mut(&mut tree, &segments)
            .ok_or_else(|| ConfigError::UnknownKey { key: key.to_string() })?;

        let replacement = match &*slot {
            toml::Value::Float(_) => toml::Value::Float(parse_number(key, value)?),
            toml::Value::Array(current) => {
                let components: Vec<&str> = value.split(',').collect();
                if components.len() != current.len() {
                    return Err(invalid_value(key, value));
                }
                let parsed = components
                    .iter()
                    .map(|component| parse_number(key, component).map(toml::Value::Float))
                    .collect::<Result<Vec<_>>>()?;
                toml::Value::Array(parsed)
            }
            // Section names are not assignable
            _ => return Err(ConfigError::UnknownKey { key: key.to_string() }.into()),
        };
        *slot = replacement;

        self.parameters = tree.try_into().map_err(|_| invalid_value(key, value))?;
        debug!("Override {} = {}", key, value);
        Ok(())
    }

    /// Apply a list of `key=value` overrides in order
    pub fn apply_overrides<I, S>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref();
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedOverride { entry: entry.to_string() })?;
            self.apply_override(key.trim(), value.trim())?;
        }
        Ok(())
    }
}

/// Walk a dotted path through tables; `x`/`y` index into two-element arrays.
fn lookup_mut<'a>(value: &'a mut toml::Value, segments: &[&str]) -> Option<&'a mut toml::Value> {
    let Some((head, rest)) = segments.split_first() else {
        return Some(value);
    };

    let child = match value {
        toml::Value::Table(table) => table.get_mut(*head)?,
        toml::Value::Array(items) if items.len() == 2 => match *head {
            "x" => &mut items[0],
            "y" => &mut items[1],
            _ => return None,
        },
        _ => return None,
    };

    lookup_mut(child, rest)
}

/// Fields are `f32`; print each as the shortest decimal that reads back to it.
fn shorten_floats(value: &mut toml::Value) {
    match value {
        toml::Value::Float(float) => {
            let narrow = *float as f32;
            if narrow.is_finite() {
                if let Ok(short) = narrow.to_string().parse::<f64>() {
                    *float = short;
                }
            }
        }
        toml::Value::Table(table) => table.iter_mut().for_each(|(_, v)| shorten_floats(v)),
        toml::Value::Array(items) => items.iter_mut().for_each(shorten_floats),
        _ => {}
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64> {
    // Parse at the storage precision so the override lands on the exact f32
    let parsed: f32 = value.trim().parse().map_err(|_| invalid_value(key, value))?;
    Ok(f64::from(parsed))
}

fn invalid_value(key: &str, value: &str) -> VhsError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}
