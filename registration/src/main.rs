mod terminal;

use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use formkit::{CriteriaMode, FormOptions, RevalidateMode, ValidationMode};
use registration::{AppAction, RegistrationApp, Result, Variant};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::terminal::Terminal;

#[derive(Parser, Debug)]
#[command(name = "registration")]
#[command(about = "Fill in and submit a registration form in the terminal")]
struct Args {
    /// Where the validation rules live
    #[arg(long, value_enum, default_value = "rules")]
    variant: VariantArg,

    /// When fields are validated before the first submit
    #[arg(long, value_enum, default_value = "on-submit")]
    mode: ModeArg,

    /// When fields are validated after the first submit
    #[arg(long, value_enum, default_value = "on-change")]
    revalidate: RevalidateArg,

    /// How many errors to collect per field
    #[arg(long, value_enum, default_value = "first-error")]
    criteria: CriteriaArg,

    /// Log file (the terminal is taken by the form)
    #[arg(long, default_value = "registration.log")]
    log_file: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Rules,
    Schema,
    Document,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    OnSubmit,
    OnChange,
    OnBlur,
    OnTouched,
    All,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RevalidateArg {
    OnChange,
    OnBlur,
    OnSubmit,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CriteriaArg {
    FirstError,
    All,
}

impl Args {
    fn variant(&self) -> Variant {
        match self.variant {
            VariantArg::Rules => Variant::Rules,
            VariantArg::Schema => Variant::Schema,
            VariantArg::Document => Variant::Document,
        }
    }

    fn options(&self) -> FormOptions {
        let mode = match self.mode {
            ModeArg::OnSubmit => ValidationMode::OnSubmit,
            ModeArg::OnChange => ValidationMode::OnChange,
            ModeArg::OnBlur => ValidationMode::OnBlur,
            ModeArg::OnTouched => ValidationMode::OnTouched,
            ModeArg::All => ValidationMode::All,
        };
        let revalidate = match self.revalidate {
            RevalidateArg::OnChange => RevalidateMode::OnChange,
            RevalidateArg::OnBlur => RevalidateMode::OnBlur,
            RevalidateArg::OnSubmit => RevalidateMode::OnSubmit,
        };
        let criteria = match self.criteria {
            CriteriaArg::FirstError => CriteriaMode::FirstError,
            CriteriaArg::All => CriteriaMode::All,
        };
        FormOptions::new()
            .mode(mode)
            .revalidate_mode(revalidate)
            .criteria_mode(criteria)
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let log_file = File::create(&args.log_file)?;
    WriteLogger::init(args.log_level, Config::default(), log_file)?;
    Ok(())
}

fn run(args: Args) -> Result<()> {
    init_logging(&args)?;

    let variant = args.variant();
    log::info!("Starting registration form ({} variant)", variant);
    let form = variant.build()?.into_controller(args.options())?;
    let mut app = RegistrationApp::new(form);

    let mut terminal = Terminal::new()?;
    loop {
        terminal.draw(&app.render())?;
        let key = terminal.next_key()?;
        match app.handle_key(key)? {
            AppAction::Quit => break,
            AppAction::Submitted(values) => {
                log::debug!(
                    "Submission #{} accepted for '{}'",
                    app.submissions().len(),
                    values.username
                );
            }
            AppAction::Continue => {}
        }
    }

    log::info!("Exiting after {} submission(s)", app.submissions().len());
    Ok(())
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
