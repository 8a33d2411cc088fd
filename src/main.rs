use clap::{Parser, ValueEnum};
use mlog::{Flags, Output};
use std::fmt::Display;
use std::io;
use std::process::ExitCode;
use tokio::task;

/// Drive the default mlog logger from the command line.
#[derive(Parser, Debug)]
#[command(name = "mlog-demo", version)]
struct Args {
    /// Turn debug output on, whatever DEBUG says
    #[arg(long, conflicts_with = "no_debug")]
    debug: bool,

    /// Turn debug output off, whatever DEBUG says
    #[arg(long)]
    no_debug: bool,

    /// Text written at the start of every line
    #[arg(long)]
    prefix: Option<String>,

    /// Header annotations, comma separated (default: date,time)
    #[arg(long, value_enum, value_delimiter = ',')]
    flags: Vec<FlagArg>,

    /// Write to stdout instead of stderr
    #[arg(long)]
    stdout: bool,

    /// Print whether debug output is on, then carry on
    #[arg(long)]
    state: bool,

    /// Tasks emitting debug lines while debug mode is toggled
    #[arg(long, default_value_t = 0)]
    workers: usize,

    /// Number of toggles, and debug lines per worker
    #[arg(long, default_value_t = 100)]
    toggles: usize,

    /// Log this message and exit with status 1
    #[arg(long)]
    fatal: Option<String>,

    /// Logged once as a plain line and once as a debug line
    messages: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FlagArg {
    Date,
    Time,
    Microseconds,
    Longfile,
    Shortfile,
    Utc,
    Msgprefix,
    None,
}

impl FlagArg {
    fn flags(self) -> Flags {
        match self {
            FlagArg::Date => Flags::DATE,
            FlagArg::Time => Flags::TIME,
            FlagArg::Microseconds => Flags::MICROSECONDS,
            FlagArg::Longfile => Flags::LONG_FILE,
            FlagArg::Shortfile => Flags::SHORT_FILE,
            FlagArg::Utc => Flags::UTC,
            FlagArg::Msgprefix => Flags::MSG_PREFIX,
            FlagArg::None => Flags::empty(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    configure(&args);

    if args.state {
        let state = if mlog::is_debug_enabled() { "on" } else { "off" };
        println!("debug: {}", state);
    }

    if let Err(e) = run(&args).await {
        eprintln!("mlog-demo: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn configure(args: &Args) {
    if args.stdout {
        mlog::set_output(Output::Stdout);
    }
    if let Some(prefix) = &args.prefix {
        mlog::set_prefix(prefix.as_str());
    }
    if !args.flags.is_empty() {
        let flags = args
            .flags
            .iter()
            .fold(Flags::empty(), |acc, flag| acc | flag.flags());
        mlog::set_flags(flags);
    }

    // Command line wins over the DEBUG environment variable
    if args.debug {
        mlog::enable_debug();
    } else if args.no_debug {
        mlog::disable_debug();
    }
}

async fn run(args: &Args) -> io::Result<()> {
    if !args.messages.is_empty() {
        let values: Vec<&dyn Display> = args
            .messages
            .iter()
            .map(|message| message as &dyn Display)
            .collect();
        mlog::println(&values)?;
        mlog::debugln(&values)?;
    }

    if args.workers > 0 {
        toggle_storm(args.workers, args.toggles).await?;
    }

    if let Some(message) = &args.fatal {
        mlog::fatalln(&[message]);
    }

    Ok(())
}

// Workers log debug lines while one task flips debug mode back and forth.
async fn toggle_storm(workers: usize, toggles: usize) -> io::Result<()> {
    let initial = mlog::is_debug_enabled();

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        handles.push(task::spawn(async move {
            for round in 0..toggles {
                mlog::debugln(&[&"worker", &worker, &"round", &round])?;
                task::yield_now().await;
            }
            Ok::<(), io::Error>(())
        }));
    }

    let toggler = task::spawn(async move {
        for i in 0..toggles {
            if i % 2 == 0 {
                mlog::enable_debug();
            } else {
                mlog::disable_debug();
            }
            task::yield_now().await;
        }
    });

    for handle in handles {
        handle.await.map_err(io::Error::other)??;
    }
    toggler.await.map_err(io::Error::other)?;

    if initial {
        mlog::enable_debug();
    } else {
        mlog::disable_debug();
    }
    Ok(())
}
