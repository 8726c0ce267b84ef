// UI layer: the interactive wizard. Questions are asked one after another
// with `dialoguer`; the re-ask loop lives here rather than in the
// terminal code so it can be driven by a scripted `Prompter` in tests.

use crate::builder::RecordInput;
use crate::error::Result;
use crate::model::validate_email;
use crate::questions as q;
use dialoguer::Input;

/// Source of answers for the wizard.
pub trait Prompter {
    /// Reads one answer. An empty answer is replaced by `default` when
    /// one is given.
    fn read_line(&mut self, question: &str, default: Option<&str>) -> Result<String>;

    /// Tells the user why the last answer was refused.
    fn warn(&mut self, message: &str);
}

/// Prompts on the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new();
        input.with_prompt(question).allow_empty(true);
        if let Some(d) = default {
            input.default(d.to_string());
        }
        Ok(input.interact_text()?)
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

#[derive(Clone, Copy, Default)]
struct Ask {
    required: bool,
    default: Option<&'static str>,
    validate: Option<fn(&str) -> Result<()>>,
}

const REQUIRED: Ask = Ask {
    required: true,
    default: None,
    validate: None,
};

/// Asks `question` until the answer passes the checks in `ask`.
fn ask_until_valid<P: Prompter + ?Sized>(prompter: &mut P, question: &str, ask: Ask) -> Result<String> {
    loop {
        let mut answer = prompter.read_line(question, ask.default)?.trim().to_string();
        if answer.is_empty() {
            if let Some(d) = ask.default {
                answer = d.to_string();
            }
        }
        if ask.required && answer.is_empty() {
            prompter.warn("An answer is required.");
            continue;
        }
        if let Some(check) = ask.validate {
            if let Err(e) = check(&answer) {
                prompter.warn(&e.to_string());
                continue;
            }
        }
        return Ok(answer);
    }
}

/// Runs the full question sequence and returns the collected answers.
pub fn collect_input<P: Prompter + ?Sized>(prompter: &mut P) -> Result<RecordInput> {
    let work_title = ask_until_valid(prompter, q::WORK_TITLE, REQUIRED)?;
    let artist_name = ask_until_valid(prompter, q::ARTIST_NAME, REQUIRED)?;
    let artist_email = ask_until_valid(
        prompter,
        q::ARTIST_EMAIL,
        Ask {
            validate: Some(validate_email),
            ..REQUIRED
        },
    )?;
    let artist_wallet = ask_until_valid(prompter, q::ARTIST_WALLET, REQUIRED)?;
    let artist_website = ask_until_valid(prompter, q::ARTIST_WEBSITE, REQUIRED)?;

    let address_line1 = ask_until_valid(prompter, q::ADDRESS_LINE_1, REQUIRED)?;
    let address_line2 = ask_until_valid(prompter, q::ADDRESS_LINE_2, Ask::default())?;
    let address_country = ask_until_valid(
        prompter,
        q::COUNTRY,
        Ask {
            default: Some("US"),
            ..REQUIRED
        },
    )?;
    let address_city = ask_until_valid(prompter, q::CITY, REQUIRED)?;
    let address_state = ask_until_valid(prompter, q::STATE, REQUIRED)?;
    let address_zip = ask_until_valid(prompter, q::ZIP, REQUIRED)?;

    Ok(RecordInput {
        work_title,
        artist_name,
        artist_email,
        artist_wallet,
        artist_website,
        address_line1,
        address_line2,
        address_country,
        address_city,
        address_state,
        address_zip,
    })
}
