use clap::Parser;
use license_fulfill::application::dto::OutputFormat;
use std::path::PathBuf;

/// Match dependency licenses against an allow-list and report fulfillments
#[derive(Parser, Debug)]
#[command(name = "license-fulfill")]
#[command(version)]
#[command(
    about = "Match dependency licenses against an allow-list and report fulfillments",
    long_about = None
)]
pub struct Args {
    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Inventory to scan: a license-checker JSON file, or a directory
    /// containing licenses.json. Can be specified multiple times.
    #[arg(short, long = "path", value_name = "PATH")]
    pub path: Vec<PathBuf>,

    /// Only report production dependencies
    #[arg(long)]
    pub production: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to license-fulfill.config.yml in the
    /// current directory, when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any package violates the license policy
    #[arg(long)]
    pub check: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["license-fulfill"]).unwrap();
        assert!(args.format.is_none());
        assert!(args.path.is_empty());
        assert!(!args.production);
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(!args.check);
    }

    #[test]
    fn test_repeatable_path() {
        let args =
            Args::try_parse_from(["license-fulfill", "-p", "api", "--path", "web"]).unwrap();
        assert_eq!(args.path, vec![PathBuf::from("api"), PathBuf::from("web")]);
    }

    #[test]
    fn test_format_parsing() {
        let args = Args::try_parse_from(["license-fulfill", "-f", "md"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));

        let args = Args::try_parse_from(["license-fulfill", "--format", "JSON"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["license-fulfill", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "license-fulfill",
            "--production",
            "--check",
            "-o",
            "report.json",
            "-c",
            "custom.yml",
        ])
        .unwrap();
        assert!(args.production);
        assert!(args.check);
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
    }
}
