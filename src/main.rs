use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use folder_gallery::clean::{self, CleanEvent};
use folder_gallery::error::{EXIT_USAGE, GalleryError};
use folder_gallery::walk::{self, Gallery, GalleryEvent};
use folder_gallery::{config, output, paths};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folder-gallery")]
#[command(version)]
#[command(about = "Generate static HTML pages for a directory tree of images")]
#[command(long_about = "\
Generate static HTML pages for a directory tree of images

Every directory under DIR gets an index.html linking to its subdirectories
and pictures. Every .png, .jpg and .jpeg file gets a <name>.html page with
Back / Next navigation through its directory. Pages are written next to the
images and use relative links only.

  photos/
  ├── gallery.toml        # Optional: title and labels (see --gen-config)
  ├── index.html          # generated
  ├── a.png
  ├── a.html              # generated
  └── 2024/
      ├── index.html      # generated
      ├── b.jpg
      └── b.html          # generated

Clean mode (-c) deletes every .html file under DIR and nothing else.

Exit codes:
  0  success          3  index page write failed     6  invalid gallery.toml
  1  usage error      4  picture page write failed
  2  DIR is invalid   5  directory listing failed")]
struct Cli {
    /// Gallery root directory
    #[arg(required_unless_present = "gen_config")]
    dir: Option<PathBuf>,

    /// Delete every .html file under DIR instead of generating pages
    #[arg(short, long)]
    clean: bool,

    /// Print a documented stock gallery.toml and exit
    #[arg(long, exclusive = true)]
    gen_config: bool,
}

fn main() -> ExitCode {
    let args = normalize_args(std::env::args_os());

    if args.len() <= 1 {
        let _ = Cli::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Accept `-help` as a spelling of `--help` in the first position.
fn normalize_args(args: impl Iterator<Item = OsString>) -> Vec<OsString> {
    args.enumerate()
        .map(|(idx, arg)| {
            if idx == 1 && arg == "-help" {
                OsString::from("--help")
            } else {
                arg
            }
        })
        .collect()
}

fn run(cli: Cli) -> Result<(), GalleryError> {
    let dir = match cli.dir {
        Some(dir) if !cli.gen_config => dir,
        _ => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
    };

    if cli.clean {
        let root = paths::resolve_root(&dir)?;
        println!("==> Removing HTML files in {}", root.display());
        let report = clean::clean(&root, &mut |event: CleanEvent| {
            output::print_clean_event(&event, &root)
        });
        println!("{}", output::format_clean_summary(&report));
    } else {
        let gallery = Gallery::open(&dir)?;
        let root = gallery.root();
        println!("==> Generating pages in {}", root.display());
        let summary = walk::walk(&gallery, &mut |event: GalleryEvent| {
            output::print_gallery_event(&event, root)
        })?;
        println!("{}", output::format_walk_summary(&summary));
    }

    Ok(())
}
