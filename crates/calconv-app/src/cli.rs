use std::io::Write;
use std::path::PathBuf;

use calconv_convert::convert::{DateTimeConverter, MailtoCodec, to_mailto};
use calconv_convert::model::DateTime;
use calconv_convert::timezone::{IcuTimezoneNormalizer, NormalizeTimezone};
use calconv_core::config::Settings;
use clap::{Parser, Subcommand};
use serde_json::json;

#[derive(Debug, Parser)]
#[command(name = "calconv")]
#[command(about = "Convert calendar date-times and mailto identities")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a timezone identifier
    Tz {
        /// Timezone identifier (IANA, Windows, vendor-prefixed or Outlook display name)
        tzid: String,
    },

    /// Convert a date-time to the host representation and back
    Datetime {
        /// `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or RFC 5545 basic form
        value: String,

        /// Timezone identifier for the value
        #[arg(long)]
        tz: Option<String>,

        /// Treat the value as UTC
        #[arg(long)]
        utc: bool,
    },

    /// Encode or decode mailto identities
    Mailto {
        #[command(subcommand)]
        action: MailtoAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum MailtoAction {
    /// Build a mailto URI from an address and display name
    Encode {
        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        name: String,
    },

    /// Split a mailto URI into address and display name
    Decode { uri: String },
}

/// ## Summary
/// Executes `cli` against `settings`, writing results to `out`.
///
/// ## Errors
/// Returns an error if the input cannot be parsed or writing to `out` fails.
/// Degraded conversions are not errors; they are logged.
pub fn run(cli: &Cli, settings: &Settings, out: &mut dyn Write) -> anyhow::Result<()> {
    let normalizer = IcuTimezoneNormalizer::from_settings(&settings.timezone);

    match &cli.command {
        Command::Tz { tzid } => {
            let canonical = normalizer.normalize(tzid);
            let spec = DateTimeConverter::new()
                .with_normalizer(normalizer)
                .time_spec(false, tzid);

            if cli.json {
                let value = json!({
                    "tzid": tzid,
                    "canonical": canonical,
                    "spec": spec.to_string(),
                });
                writeln!(out, "{value}")?;
            } else {
                match canonical {
                    Some(canonical) => writeln!(out, "{tzid} -> {canonical} [{spec}]")?,
                    None => writeln!(out, "{tzid} -> unrecognized [{spec}]")?,
                }
            }
        }
        Command::Datetime { value, tz, utc } => {
            let mut dt = DateTime::parse(value)?;
            if let Some(tz) = tz {
                dt.set_timezone(tz.as_str());
            }
            if *utc {
                dt.set_utc(true);
            }

            let converter = DateTimeConverter::new().with_normalizer(normalizer);
            let host = converter.to_host(&dt);
            let back = converter.from_host(&host);
            let instant = host.to_utc();

            if cli.json {
                let value = json!({
                    "input": dt,
                    "host": host.to_string(),
                    "utc": instant.map(|i| i.to_rfc3339()),
                    "output": back,
                });
                writeln!(out, "{value}")?;
            } else {
                writeln!(out, "input:  {dt}")?;
                writeln!(out, "host:   {host}")?;
                if let Some(instant) = instant {
                    writeln!(out, "utc:    {}", instant.to_rfc3339())?;
                }
                writeln!(out, "output: {back}")?;
            }
        }
        Command::Mailto { action } => match action {
            MailtoAction::Encode { email, name } => {
                let uri = to_mailto(email, name)?;
                if cli.json {
                    writeln!(out, "{}", json!({ "uri": uri.as_str() }))?;
                } else {
                    writeln!(out, "{uri}")?;
                }
            }
            MailtoAction::Decode { uri } => {
                let identity = MailtoCodec::new().from_mailto(uri);
                if cli.json {
                    writeln!(out, "{}", serde_json::to_string(&identity)?)?;
                } else {
                    writeln!(out, "email: {}", identity.email)?;
                    writeln!(out, "name:  {}", identity.name)?;
                }
            }
        },
    }

    Ok(())
}
