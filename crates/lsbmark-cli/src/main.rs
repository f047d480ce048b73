mod cli;

use clap::Parser;
use lsbmark_core::{commands, LsbError};
use log::debug;

use crate::cli::{Action, CliArgs};

pub type CliResult<T> = std::result::Result<T, LsbError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    println!("{}", run(&args)?);

    Ok(())
}

/// Executes the selected action and returns the line to report
fn run(args: &CliArgs) -> CliResult<String> {
    let options = args.codec_options()?;
    debug!("running {:?} with {options:?}", args.action());

    match args.action() {
        Action::Encode => {
            commands::hide(
                &args.image_path,
                &args.output,
                Some(args.message.as_str()),
                options,
            )?;
            Ok(format!(
                "Message encoded and saved in '{}'",
                args.output.display()
            ))
        }
        Action::Decode => {
            let message = commands::unveil(&args.image_path, options)?;
            Ok(format!("Decoded Message: {message}"))
        }
        Action::Nothing => Ok("No action selected. Use --encode or --decode.".to_string()),
    }
}
