use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use wifi_errmap::{
    ErrorContext, StatusCode, WifiResult, check, completion_callback, config, parse_status,
    pending_completion,
};

/// Translate native Wi-Fi status codes into the errors applications see
#[derive(Parser, Debug)]
#[command(name = "wifi-errmap", version, about, long_about = None)]
struct Args {
    /// Log translation details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate the status returned by a synchronous native call
    Check {
        /// Status name, decimal, or 0x-prefixed hex value
        #[arg(allow_hyphen_values = true, value_parser = parse_status)]
        code: i32,

        /// Context message passed along with the status
        #[arg(short, long, default_value = "")]
        message: String,

        /// The first native handle was null
        #[arg(long)]
        handle1_absent: bool,

        /// The second native handle was null
        #[arg(long)]
        handle2_absent: bool,
    },

    /// Translate a status delivered to an asynchronous completion callback
    Callback {
        /// Status name, decimal, or 0x-prefixed hex value
        #[arg(allow_hyphen_values = true, value_parser = parse_status)]
        code: i32,

        /// Message prefixed to generic failures
        #[arg(short, long, default_value = "")]
        message: String,
    },

    /// List every known status code
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    init_tracing(args.verbose);

    match args.command {
        Command::Check {
            code,
            message,
            handle1_absent,
            handle2_absent,
        } => {
            let ctx = ErrorContext::absent(handle1_absent, handle2_absent).message(message);
            print_outcome(check(code, &ctx));
        }
        Command::Callback { code, message } => {
            let (pending, rx) = pending_completion(message);
            let user_data = pending.into_user_data();
            // SAFETY: user_data was just produced by into_user_data and is
            // handed to the callback exactly once
            unsafe { completion_callback(code, user_data) };
            print_outcome(rx.await?);
        }
        Command::List => {
            for status in StatusCode::ALL {
                let raw = status.raw();
                println!("{:<26} {:>12} {:#010X}", status.name(), raw, raw);
            }
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        config::VERBOSE_LOG_FILTER
    } else {
        config::DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome(result: WifiResult<()>) {
    match result {
        Ok(()) => println!("ok"),
        Err(e) => println!("{}: {}", e.kind(), e),
    }
}
