use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TCP port to accept peer connections on.
    #[arg(short = 'p', value_name = "PORT")]
    pub port: u16,
}
