mod logging;
mod settings;

use std::{fs, path::PathBuf};

use clap::Parser;
use pmaze::{
    algorithms::{seeded, MazeGenerator as _, Prims},
    progress::ProgressHandle,
    ser::{self, SerializeError},
    Cell, Grid, MazeError,
};
use settings::Settings;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Maze error; {0}")]
    Maze(#[from] MazeError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings error; {0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("Save file error; {0}")]
    Save(#[from] SerializeError),
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "pmaze")]
struct Args {
    #[clap(long, help = "Maze height in cells")]
    height: Option<usize>,
    #[clap(long, help = "Maze width in cells")]
    width: Option<usize>,
    #[clap(short, long, help = "Seed for generation and solving")]
    seed: Option<u64>,
    #[clap(long, action, help = "Solve the maze and draw the path")]
    solve: bool,
    #[clap(long, help = "Start cell as `row,col`, defaults to the first open cell")]
    start: Option<Cell>,
    #[clap(long, help = "End cell as `row,col`, defaults to the last open cell")]
    end: Option<Cell>,
    #[clap(short, long, help = "Settings file, defaults to the user config directory")]
    config: Option<PathBuf>,
    #[clap(long, help = "Write the maze to a RON file")]
    save: Option<PathBuf>,
    #[clap(
        long,
        conflicts_with_all = ["height", "width"],
        help = "Read the maze from a RON file instead of generating one"
    )]
    load: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
    #[clap(long, action, help = "Show settings path and quit")]
    show_config_path: bool,
}

impl Args {
    /// Command line values win over the settings file.
    fn apply(&self, settings: &mut Settings) {
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.start.is_some() {
            settings.start = self.start;
        }
        if self.end.is_some() {
            settings.end = self.end;
        }
        settings.solve |= self.solve;
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(args.verbose);

    if args.show_config_path {
        let settings_path = Settings::default_path();
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let mut settings = match &args.config {
        Some(path) => Settings::load(path.clone(), true)?,
        None => Settings::load(Settings::default_path(), false)?,
    };
    args.apply(&mut settings);

    let (seed, mut rng) = seeded(settings.seed);
    let grid = match &args.load {
        Some(path) => {
            log::info!("Loading maze from {:?}", path);
            ser::from_ron(&fs::read_to_string(path)?)?
        }
        None => {
            log::info!(
                "Generating {}x{} maze, seed {}",
                settings.height,
                settings.width,
                seed
            );
            Prims.generate(settings.height, settings.width, &mut rng, ProgressHandle::new())?
        }
    };

    if let Some(path) = &args.save {
        fs::write(path, ser::to_ron(&grid)?)?;
        log::info!("Saved maze to {:?}", path);
    }

    let charset = &settings.charset;
    if !settings.solve {
        print!("{}", grid.render(charset.wall, charset.open, charset.path, &[]));
        return Ok(());
    }

    let (start, end) = endpoints(&grid, &settings)?;
    let path = pmaze::solve(&grid, start, end, Some(seed))?;

    print!("{}", grid.render(charset.wall, charset.open, charset.path, &path));
    println!("Path length: {}", path.len());

    Ok(())
}

fn endpoints(grid: &Grid, settings: &Settings) -> Result<(Cell, Cell), MazeError> {
    let no_cells = || MazeError::Malformed("maze has no open cells".into());

    let start = match settings.start {
        Some(start) => start,
        None => grid.open_cells().next().ok_or_else(no_cells)?,
    };
    let end = match settings.end {
        Some(end) => end,
        None => grid.open_cells().last().ok_or_else(no_cells)?,
    };

    Ok((start, end))
}
