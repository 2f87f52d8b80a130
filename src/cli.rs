//! Command-line argument parsing
//!
//! Supports:
//! - Opening a panel as soon as the host is attached
//! - Passing JSON data to that panel
//! - Running with a detached host (no id)

use anyhow::{bail, Context, Result};
use clap::Parser;

use crate::model::HostOptions;
use crate::panels::{OpenOptions, PanelKind};

/// Element id used for the slide-in host unless overridden
pub const DEFAULT_HOST_ID: &str = "slide-in-form";

/// Storage console slide-in host
#[derive(Parser, Debug)]
#[command(name = "slidein", version, about = "Storage console slide-in host")]
pub struct CliArgs {
    /// Panel to open when the host is attached
    #[arg(long, value_enum, value_name = "KIND")]
    pub panel: Option<PanelKind>,

    /// Open the initial panel with the wide layout
    #[arg(long)]
    pub wide: bool,

    /// JSON data injected into the initial panel
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,

    /// Element id of the host
    #[arg(long, default_value = DEFAULT_HOST_ID)]
    pub id: String,

    /// Do not give the host an id; it never attaches to the page
    #[arg(long, conflicts_with = "id")]
    pub detached: bool,

    /// Override the delay before closed panel content is removed
    #[arg(long, value_name = "MS")]
    pub close_delay_ms: Option<u64>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub host: HostOptions,
    pub close_delay_ms: Option<u64>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig> {
        if self.panel.is_none() && (self.wide || self.data.is_some()) {
            bail!("--wide and --data require --panel");
        }

        let data = self
            .data
            .as_deref()
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()
            .context("Invalid --data JSON")?;

        let initial_panel = self.panel.map(|kind| {
            let mut options = OpenOptions::default().wide(self.wide);
            options.data = data;
            (kind, options)
        });

        let id = if self.detached { None } else { Some(self.id) };

        Ok(StartupConfig {
            host: HostOptions {
                id,
                index: 0,
                initial_panel,
            },
            close_delay_ms: self.close_delay_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StartupConfig> {
        let mut argv = vec!["slidein"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv)?.into_config()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.host.id.as_deref(), Some(DEFAULT_HOST_ID));
        assert!(config.host.initial_panel.is_none());
        assert!(config.close_delay_ms.is_none());
    }

    #[test]
    fn test_initial_panel_with_data() {
        let config = parse(&[
            "--panel",
            "snapshot-clone",
            "--wide",
            "--data",
            r#"{"snapshot":"tank@manual"}"#,
        ])
        .unwrap();

        let (kind, options) = config.host.initial_panel.unwrap();
        assert_eq!(kind, PanelKind::SnapshotClone);
        assert!(options.wide);
        assert_eq!(options.data.unwrap()["snapshot"], "tank@manual");
    }

    #[test]
    fn test_invalid_data_is_an_error() {
        let err = parse(&["--panel", "dataset-form", "--data", "{nope"]).unwrap_err();
        assert!(err.to_string().contains("Invalid --data JSON"));
    }

    #[test]
    fn test_data_without_panel_is_an_error() {
        assert!(parse(&["--data", "{}"]).is_err());
    }

    #[test]
    fn test_detached_has_no_id() {
        let config = parse(&["--detached"]).unwrap();
        assert!(config.host.id.is_none());
    }
}
