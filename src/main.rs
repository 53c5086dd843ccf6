use clap::Parser;
use fuelgen::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Dataset(args) => fuelgen::cli::commands::dataset::run(args, &global),
        Commands::Failures(args) => fuelgen::cli::commands::failures::run(args, &global),
        Commands::Fleet(args) => fuelgen::cli::commands::fleet::run(args, &global),
        Commands::Metrics(args) => fuelgen::cli::commands::metrics::run(args, &global),
        Commands::Completions(args) => fuelgen::cli::commands::completions::run(args),
    }
}
