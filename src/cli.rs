// Command-line argument structures (clap derive).
//
// Every flag can also come from an environment variable named after the
// upper-cased flag (e.g. `WORKTITLE`, `ADDRESSCOUNTRY`); a flag given on
// the command line wins over the environment.

use crate::builder::RecordInput;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "coa-nft",
    version,
    about = "Creates a Certificate of Authority for use in NFT"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take all certificate data from command line flags and dump the record
    RenderLocal(RenderLocalArgs),
    /// Ask the questions needed to build the certificate, then dump the record
    Wizard(WizardArgs),
}

/// Flags shared by both subcommands.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CommonArgs {
    /// Template file used to render the COA
    #[arg(short = 't', long = "template", env = "TEMPLATE", value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Skip address validation (uses https://chromium-i18n.appspot.com/ssl-address)
    #[arg(
        long = "skipValidateAddress",
        env = "SKIPVALIDATEADDRESS",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub skip_validate_address: bool,
}

#[derive(Args, Debug, Clone)]
pub struct WizardArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RenderLocalArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// The title of this artwork
    #[arg(long = "workTitle", env = "WORKTITLE")]
    pub work_title: String,

    /// Artist's email
    #[arg(long = "artistEmail", env = "ARTISTEMAIL")]
    pub artist_email: String,

    /// Artist's name
    #[arg(long = "artistName", env = "ARTISTNAME")]
    pub artist_name: String,

    /// Artist's ETH wallet
    #[arg(long = "artistWallet", env = "ARTISTWALLET")]
    pub artist_wallet: String,

    /// Artist's website
    #[arg(long = "artistWebsite", env = "ARTISTWEBSITE")]
    pub artist_website: String,

    /// Address - line 1
    #[arg(long = "addressLine1", env = "ADDRESSLINE1")]
    pub address_line1: String,

    /// Address - line 2
    #[arg(long = "addressLine2", env = "ADDRESSLINE2", default_value = "")]
    pub address_line2: String,

    /// Address - city
    #[arg(long = "addressCity", env = "ADDRESSCITY")]
    pub address_city: String,

    /// Address - state
    #[arg(long = "addressState", env = "ADDRESSSTATE")]
    pub address_state: String,

    /// Address - zip
    #[arg(long = "addressZip", env = "ADDRESSZIP")]
    pub address_zip: String,

    /// Address - country
    #[arg(long = "addressCountry", env = "ADDRESSCOUNTRY", default_value = "US")]
    pub address_country: String,
}

impl From<&RenderLocalArgs> for RecordInput {
    fn from(args: &RenderLocalArgs) -> Self {
        RecordInput {
            work_title: args.work_title.clone(),
            artist_name: args.artist_name.clone(),
            artist_email: args.artist_email.clone(),
            artist_wallet: args.artist_wallet.clone(),
            artist_website: args.artist_website.clone(),
            address_line1: args.address_line1.clone(),
            address_line2: args.address_line2.clone(),
            address_country: args.address_country.clone(),
            address_city: args.address_city.clone(),
            address_state: args.address_state.clone(),
            address_zip: args.address_zip.clone(),
        }
    }
}
