use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{CommandFactory, Parser};

use dava::config::{init_default_config, resolve_config, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILENAME};
use dava::paths::PathRules;
use dava::pipeline::{translate_file, translate_to_stdout};
use dava::progress::ConsoleProgress;
use dava::{vocabulary, Mode, Translator};

#[derive(Parser, Debug)]
#[command(name = "dava")]
#[command(
    about = "A cross-compiler for Deutsches Java: rewrites German Java keywords into plain Java",
    long_about = None,
    after_help = "Do not use this for serious business."
)]
struct Args {
    /// Input .dava/.djava files
    #[arg(value_name = "DAVA")]
    inputs: Vec<PathBuf>,

    /// Output file (default: input name with .java; modul-info.dava -> module-info.java)
    #[arg(short, long, value_name = "JAVA")]
    output: Option<PathBuf>,

    /// Write the translation to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Force module-declaration vocabulary (default: only for module-info.java outputs)
    #[arg(long, conflicts_with = "no_module")]
    module: bool,

    /// Never apply the module-declaration vocabulary
    #[arg(long)]
    no_module: bool,

    /// Print both vocabulary tables as JSON, then exit
    #[arg(long)]
    dump_vocabulary: bool,

    /// Config file path (default: search for dava.toml upwards)
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Write a default dava.toml, then exit
    #[arg(long)]
    init_config: bool,

    /// Directory for --init-config (default: current directory)
    #[arg(long, value_name = "DIR")]
    init_config_dir: Option<PathBuf>,

    /// Overwrite an existing dava.toml when used with --init-config
    #[arg(long)]
    force: bool,

    /// No progress output on stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn forced_mode(&self) -> Option<Mode> {
        if self.module {
            Some(Mode::Module)
        } else if self.no_module {
            Some(Mode::Normal)
        } else {
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.init_config {
        let dir = args
            .init_config_dir
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
        let cfg_path = init_default_config(&dir, args.force).context("init default config")?;
        eprintln!("Wrote config: {}", cfg_path.display());
        return Ok(());
    }

    if args.dump_vocabulary {
        println!("{}", vocabulary::to_json_pretty().context("serialize vocabulary")?);
        return Ok(());
    }

    if args.inputs.is_empty() {
        let mut cmd = Args::command();
        cmd.print_help().context("print help")?;
        eprintln!(
            "\n\nUSAGE:\n  dava Haupt.dava\n  dava modul-info.dava -o out/module-info.java\n\nTIPS:\n  - Config search: --config, {CONFIG_ENV_VAR}, or {DEFAULT_CONFIG_FILENAME} (upwards).\n"
        );
        return Ok(());
    }
    if args.output.is_some() && args.inputs.len() > 1 {
        return Err(anyhow!("-o/--output requires exactly one input"));
    }

    let workdir = args.inputs[0]
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let (cfg_path, cfg) = resolve_config(args.config.clone(), &workdir).context("load config")?;
    let progress = ConsoleProgress::new(!(args.quiet || cfg.quiet()));
    match cfg_path.as_ref() {
        Some(p) => progress.info(format!("config: {}", p.display())),
        None => progress.info("config: built-in defaults"),
    }

    let rules = cfg.path_rules();
    let translator = Translator::standard();
    let total = args.inputs.len();
    for (i, input) in args.inputs.iter().enumerate() {
        if args.stdout {
            let mode = args
                .forced_mode()
                .unwrap_or_else(|| stdout_mode(&rules, input));
            progress.file_started(i, total, input, "<stdout>", mode);
            let stats = translate_to_stdout(input, &translator, mode)?;
            progress.file_done(&stats);
            continue;
        }

        let output = match args.output.clone() {
            Some(p) => p,
            None => rules.default_output_for(input)?,
        };
        let mode = args
            .forced_mode()
            .unwrap_or_else(|| Mode::from(rules.is_module_output(&output)));
        if mode == Mode::Normal && rules.is_module_output(&output) {
            progress.warn(format!(
                "{} is a module declaration but module keywords are disabled",
                output.display()
            ));
        }
        progress.file_started(i, total, input, &output.display().to_string(), mode);
        let stats = translate_file(input, &output, &translator, mode)?;
        progress.file_done(&stats);
    }
    Ok(())
}

fn stdout_mode(rules: &PathRules, input: &Path) -> Mode {
    rules
        .default_output_for(input)
        .map(|out| Mode::from(rules.is_module_output(&out)))
        .unwrap_or_default()
}
