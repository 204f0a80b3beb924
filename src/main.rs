use clap::{CommandFactory, Parser};
use tagconv::application::ConvertService;
use tagconv::cli::{normalize_args, Cli};
use tagconv::error::ConvertError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // usage errors come with the full option list
            eprint!("{}", e.render());
            eprintln!();
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(2);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ConvertError>() {
            Some(err) => {
                eprintln!("{}", err.diagnostic());
                std::process::exit(err.exit_code());
            }
            None => {
                eprintln!("{:?}", e);
                std::process::exit(3);
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = cli.into_options()?;
    ConvertService.execute(&options)?;
    Ok(())
}
