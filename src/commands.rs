// Subcommand handlers. Each one gathers a `RecordInput` its own way,
// hands it to the shared builder and dumps the result to stdout.

use crate::address::CountryFormatSource;
use crate::builder::{build_record, RecordInput};
use crate::cli::{Cli, Commands, CommonArgs, RenderLocalArgs, WizardArgs};
use crate::error::Result;
use crate::model::CertificateRecord;
use crate::output;
use crate::ui::{collect_input, Prompter};
use std::io::Write;

/// Runs the parsed command line, writing the dump to `out`.
pub fn run<S, P, W>(cli: &Cli, source: &S, prompter: &mut P, out: &mut W) -> Result<()>
where
    S: CountryFormatSource + ?Sized,
    P: Prompter + ?Sized,
    W: Write,
{
    let record = match &cli.command {
        Commands::RenderLocal(args) => render_local(args, source)?,
        Commands::Wizard(args) => wizard(args, source, prompter)?,
    };
    output::dump(&record, out)?;
    Ok(())
}

pub fn render_local<S: CountryFormatSource + ?Sized>(
    args: &RenderLocalArgs,
    source: &S,
) -> Result<CertificateRecord> {
    log::debug!("render-local: building record from flags");
    note_template(&args.common);
    build_record(&RecordInput::from(args), source, !args.common.skip_validate_address)
}

pub fn wizard<S, P>(args: &WizardArgs, source: &S, prompter: &mut P) -> Result<CertificateRecord>
where
    S: CountryFormatSource + ?Sized,
    P: Prompter + ?Sized,
{
    log::debug!("wizard: collecting answers interactively");
    note_template(&args.common);
    let input = collect_input(prompter)?;
    build_record(&input, source, !args.common.skip_validate_address)
}

fn note_template(common: &CommonArgs) {
    if let Some(path) = &common.template {
        // no renderer yet; the path is only recorded
        log::debug!("template {} accepted, rendering is not available", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::CountryFormat;
    use crate::error::CoaError;
    use clap::Parser;
    use std::collections::VecDeque;

    struct UsOnly;

    impl CountryFormatSource for UsOnly {
        fn country_format(&self, country: &str) -> Result<CountryFormat> {
            if country != "US" {
                return Ok(CountryFormat::default());
            }
            Ok(CountryFormat {
                key: Some("US".into()),
                fmt: Some("%N%n%O%n%A%n%C, %S %Z".into()),
                require: Some("ACSZ".into()),
                zip: Some(r"(\d{5})(?:[ \-](\d{4}))?".into()),
                sub_keys: Some("IL~NY".into()),
                sub_names: Some("Illinois~New York".into()),
                ..CountryFormat::default()
            })
        }
    }

    struct Answers(VecDeque<&'static str>);

    impl Prompter for Answers {
        fn read_line(&mut self, _question: &str, _default: Option<&str>) -> Result<String> {
            self.0.pop_front().map(str::to_string).ok_or_else(|| {
                CoaError::Io(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"))
            })
        }

        fn warn(&mut self, _message: &str) {}
    }

    fn no_answers() -> Answers {
        Answers(VecDeque::new())
    }

    fn render_local_cli(extra: &[&str]) -> Cli {
        let mut argv = vec![
            "coa-nft",
            "render-local",
            "--workTitle",
            "Untitled #1",
            "--artistName",
            "A. Artist",
            "--artistEmail",
            "a@example.com",
            "--artistWallet",
            "0xABC",
            "--artistWebsite",
            "https://a.example",
            "--addressLine1",
            "1 Main St",
            "--addressCity",
            "Springfield",
            "--addressState",
            "Illinois",
            "--addressZip",
            "62701",
        ];
        argv.extend_from_slice(extra);
        Cli::parse_from(argv)
    }

    #[test]
    fn render_local_validates_and_dumps() {
        let mut out = Vec::new();
        run(&render_local_cli(&[]), &UsOnly, &mut no_answers(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Untitled #1\""));
        // normalised by validation
        assert!(text.contains("administrative_area: \"IL\""));
    }

    #[test]
    fn render_local_unknown_country_fails_without_dump() {
        let mut out = Vec::new();
        let cli = render_local_cli(&["--addressCountry", "XX"]);
        let err = run(&cli, &UsOnly, &mut no_answers(), &mut out).unwrap_err();
        assert!(matches!(err, CoaError::AddressValidation(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn render_local_skip_keeps_address_verbatim() {
        let mut out = Vec::new();
        let cli = render_local_cli(&["--addressCountry", "XX", "--skipValidateAddress"]);
        run(&cli, &UsOnly, &mut no_answers(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("administrative_area: \"Illinois\""));
        assert!(text.contains("country: \"XX\""));
    }

    #[test]
    fn wizard_builds_from_answers() {
        let mut answers = Answers(VecDeque::from(vec![
            "Untitled #2",
            "B. Artist",
            "b@example.com",
            "0xDEF",
            "https://b.example",
            "2 Side St",
            "Unit 4",
            "",
            "Springfield",
            "IL",
            "62701",
        ]));
        let cli = Cli::parse_from(["coa-nft", "wizard"]);
        let mut out = Vec::new();
        run(&cli, &UsOnly, &mut answers, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Untitled #2\""));
        assert!(text.contains("\"https://b.example\""));
        assert!(text.contains("\"Unit 4\""));
    }
}
