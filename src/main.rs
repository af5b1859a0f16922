use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use mixer::{cli, config, error, types::MixOptions};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// Mix source playlists into a destination playlist
    Mix(MixCommandOptions),

    /// Run the local web service for mix submissions
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Only show playlists whose name contains this text
    #[clap(long)]
    pub search: Option<String>,

    /// Only show playlists a mix can write to
    #[clap(long)]
    pub writable: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct MixCommandOptions {
    /// Source playlist ID; repeat for every source, order matters
    #[clap(long = "source", required = true, num_args = 1)]
    pub sources: Vec<String>,

    /// Destination playlist ID, its current contents are replaced
    #[clap(long)]
    pub dest: String,

    /// Drop tracks already taken by a shorter source
    #[clap(long)]
    pub dedup: bool,

    /// Shuffle every source independently
    #[clap(long)]
    pub shuffle: bool,

    /// Repeat shorter sources up to the length of the longest one
    #[clap(long)]
    pub pad: bool,

    /// Take one track from each source in turn instead of one source after another
    #[clap(long)]
    pub round_robin: bool,

    /// Seed for a reproducible shuffle (overrides MIXER_SEED)
    #[clap(long)]
    pub seed: Option<u64>,
}

impl MixCommandOptions {
    fn options(&self) -> MixOptions {
        MixOptions {
            round_robin: self.round_robin,
            shuffle: self.shuffle,
            dedup: self.dedup,
            pad: self.pad,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Playlists(opt) => cli::list_playlists(opt.search, opt.writable).await,
        Command::Mix(opt) => {
            let options = opt.options();
            cli::mix(opt.sources, opt.dest, options, opt.seed).await
        }
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
