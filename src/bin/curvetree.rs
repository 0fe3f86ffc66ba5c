use clap::*;
use rayon::prelude::*;

use curvetree::accelerators::curvetree::*;
use curvetree::core::error::*;
use curvetree::core::pbrt::*;
use curvetree::core::scene::*;
use std::env;
use std::path::Path;
use std::path::PathBuf;
use std::process;
use std::thread::available_parallelism;

use log::*;

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Use specified number of threads for building trees of independent
    /// assemblies.
    #[arg(short = 'j', long = "nthreads", value_name = "num")]
    pub nthreads: Option<usize>,

    /// Suppress all text output other than error messages.
    #[clap(long, default_value = "false")]
    pub quiet: bool,

    /// Log messages at or above this level (0 -> INFO,
    /// 1 -> WARNING, 2 -> ERROR, 3-> FATAL).
    #[arg(long, value_name = "num")]
    pub minloglevel: Option<i32>,

    #[arg(value_name = "scene.json", required = true)]
    pub scenefiles: Vec<PathBuf>,
}

fn init_logger(opts: &CommandOptions) {
    if let Some(minloglevel) = opts.minloglevel {
        const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        let log_level = LOG_LEVELS[(minloglevel + 2).clamp(0, 4) as usize];
        env::set_var("RUST_LOG", log_level);
    } else {
        //default log level : warn
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
        env::set_var("RUST_LOG", log_level);
    }

    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn build_curve_trees(scene: &Scene) -> Vec<(String, Result<Box<CurveTree>, CurveTreeError>)> {
    return scene
        .assemblies()
        .par_iter()
        .map(|assembly| {
            let bbox = assembly.compute_local_bbox();
            let arguments = CurveTreeArguments::new(scene, new_uid(), &bbox, assembly);
            let factory = CurveTreeFactory::new(arguments);
            (assembly.get_name().to_string(), factory.create())
        })
        .collect();
}

fn process_scene(path: &Path, opts: &CommandOptions) -> i32 {
    let scene = match load_scene(path) {
        Ok(scene) => scene,
        Err(e) => {
            error!("{}: {}", path.display(), e);
            return -1;
        }
    };

    let mut ret = 0;
    for (name, result) in build_curve_trees(&scene) {
        match result {
            Ok(tree) => {
                if !opts.quiet {
                    let title = format!("{}: assembly \"{}\"", path.display(), name);
                    println!("{}", tree.statistics().to_string_with_title(&title));
                }
            }
            Err(e) => {
                error!("{}: assembly \"{}\": {}", path.display(), name, e);
                ret = -1;
            }
        }
    }
    return ret;
}

pub fn main() {
    let opts = CommandOptions::parse();
    init_logger(&opts);

    let nthreads = opts
        .nthreads
        .filter(|&n| n > 0)
        .unwrap_or_else(|| available_parallelism().map(|n| n.get()).unwrap_or(1));
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(nthreads)
        .build_global()
    {
        warn!("{}", e);
    }

    if !opts.quiet {
        let version = env!("CARGO_PKG_VERSION");
        println!("curvetree version {} [Using {} threads]", version, nthreads);
        println!();
    }

    let mut ret = 0;
    for path in opts.scenefiles.iter() {
        if !path.exists() {
            error!("{}: no such file", path.display());
            ret = -1;
            continue;
        }
        if process_scene(path, &opts) != 0 {
            ret = -1;
        }
    }
    process::exit(ret);
}
