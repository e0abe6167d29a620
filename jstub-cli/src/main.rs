use clap::{Parser, Subcommand};
use jstub_model::{ByteSource, ClassModel};
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[cfg(target_env = "msvc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "jstub", about = "Fallback pseudo-source printer for JVM class files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print classes as pseudo-source with stub method bodies
    Print {
        /// .class files, or directories to search for them
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show class header and member summary
    Info {
        /// Path to the .class file
        input: PathBuf,
        /// Dump the whole class model as YAML
        #[arg(long)]
        yaml: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Print { inputs, output } => cmd_print(&inputs, output.as_deref()),
        Commands::Info { input, yaml } => cmd_info(&input, yaml),
    }
}

fn load_class(path: &Path) -> Result<ClassModel, jstub_model::Error> {
    jstub_model::read_class_from(&ByteSource::for_path(path))
}

fn cmd_info(path: &Path, yaml: bool) {
    let source = ByteSource::for_path(path);
    let loaded = source.map().and_then(|bytes| {
        let version = jstub_model::reader::read_version(&bytes)?;
        Ok((version, jstub_model::read_class(&bytes)?))
    });
    let (version, class) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if yaml {
        match serde_yaml::to_string(&class) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("=== Class Info ===");
    println!("Version:     {}.{}", version.major, version.minor);
    println!("Name:        {}", class.name);
    println!("Kind:        {}", jstub_printer::ClassKind::of(class.access));
    println!("Access:      {:#06x}", class.access);
    println!(
        "Super:       {}",
        class.super_name.as_deref().unwrap_or("(none)")
    );
    if !class.interfaces.is_empty() {
        println!("Interfaces:  {}", class.interfaces.join(", "));
    }
    println!("Fields:      {}", class.fields.len());
    for f in &class.fields {
        println!("    {:#06x}  {} {}", f.access, f.name, f.desc);
    }
    println!("Methods:     {}", class.methods.len());
    for m in &class.methods {
        println!("    {:#06x}  {}{}", m.access, m.name, m.desc);
    }
}

fn cmd_print(inputs: &[PathBuf], output_dir: Option<&Path>) {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            collect_class_files(input, &mut files);
        } else {
            files.push(input.clone());
        }
    }

    if files.is_empty() {
        eprintln!("Error: no .class files found");
        std::process::exit(1);
    }

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir).unwrap_or_else(|e| {
            eprintln!("Error creating output directory: {e}");
            std::process::exit(1);
        });
    }

    let single = files.len() == 1;
    let mut failures = 0usize;
    for path in &files {
        let (name, text) = match load_class(path) {
            Ok(class) => match jstub_printer::print_class(&class) {
                Ok(text) => (class.name, text),
                Err(e) => {
                    eprintln!("// Error printing {}: {e}", path.display());
                    failures += 1;
                    continue;
                }
            },
            Err(e) => {
                eprintln!("// Error reading {}: {e}", path.display());
                failures += 1;
                continue;
            }
        };

        match output_dir {
            Some(dir) => {
                let out_path = dir.join(class_name_to_path(&name));
                if let Some(parent) = out_path.parent() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        eprintln!("Error creating {}: {e}", parent.display());
                        failures += 1;
                        continue;
                    }
                }
                if let Err(e) = fs::write(&out_path, &text) {
                    eprintln!("Error writing {}: {e}", out_path.display());
                    failures += 1;
                    continue;
                }
                log::info!("Wrote {}", out_path.display());
            }
            None => {
                if !single {
                    println!("// ============================================");
                    println!("// {}", path.display());
                }
                print!("{text}");
                if !single {
                    println!();
                }
            }
        }
    }

    if failures > 0 {
        log::warn!("{failures} of {} classes could not be printed", files.len());
        if single {
            std::process::exit(1);
        }
    }
}

fn collect_class_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error reading directory {}: {e}", dir.display());
            return;
        }
    };
    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();
    for path in paths {
        if path.is_dir() {
            collect_class_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "class") {
            out.push(path);
        }
    }
}

fn sanitize_filename(name: &str) -> String {
    name.replace(['\\', ':', '*', '?', '"', '<', '>', '|', '\0'], "_")
}

/// Convert an internal name like `com/example/Outer$Inner` into the relative
/// path `com/example/Outer$Inner.java`. Empty, `.` and `..` segments are
/// dropped, so the result never has a root or climbs out of its base.
fn class_name_to_path(name: &str) -> PathBuf {
    let parts: Vec<String> = name
        .split('/')
        .filter(|seg| !matches!(*seg, "" | "." | ".."))
        .map(sanitize_filename)
        .collect();

    let Some((file, dirs)) = parts.split_last() else {
        return PathBuf::from("_.java");
    };
    let mut path: PathBuf = dirs.iter().collect();
    path.push(format!("{file}.java"));
    path
}
