use clap::Parser;
use std::path::PathBuf;

/// Factory reset or provision a fleet of VoIP desk phones through their web UI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Action to perform on every phone in the inventory
    #[arg(value_parser = ["factory_reset", "provision"])]
    pub action: String,

    /// Only process the phone with this IP address
    #[arg(long)]
    pub ip: Option<String>,

    /// Username for the phones, overrides the credential file
    #[arg(long)]
    pub username: Option<String>,

    /// Password for the phones, overrides the credential file
    #[arg(long)]
    pub password: Option<String>,

    /// Path to the CSV file with phone details
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Path to the INI file with the phone credentials
    #[arg(long)]
    pub credentials: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_an_action_with_options() {
        let args = Args::try_parse_from(["phone-flipper", "provision", "--csv", "fleet.csv", "--ip", "192.168.1.10"]).unwrap();

        assert_eq!(args.action, "provision");
        assert_eq!(args.csv, Some(PathBuf::from("fleet.csv")));
        assert_eq!(args.ip.as_deref(), Some("192.168.1.10"));
        assert_eq!(args.credentials, None);
    }

    #[test]
    fn rejects_an_unknown_action() {
        assert!(Args::try_parse_from(["phone-flipper", "reboot"]).is_err());
    }
}
