use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};
use langsheet::{
    Error, ExportOptions, ImportOptions, export,
    formats::{read_grid, write_grid},
    import,
};
use langsheet_cli::{config, report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a translation spreadsheet into one strings.xml per language, checking placeholders.
    Export {
        /// Spreadsheet to read (.xlsx, .xls, .ods or .csv)
        #[arg(short, long, default_value = "strings.xlsx")]
        input: PathBuf,

        /// Directory receiving <language>/strings.xml
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// TOML file overriding the placeholder rules
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Fail on repeated keys instead of letting the last row win
        #[arg(long)]
        strict_keys: bool,

        /// Print the validation summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Collect res/values*/strings.xml into a translation spreadsheet.
    Import {
        /// Android res directory
        #[arg(short, long, default_value = "res")]
        res: PathBuf,

        /// Spreadsheet to write (.xlsx or .csv)
        #[arg(short, long, default_value = "strings.xlsx")]
        output: PathBuf,

        /// Fail on repeated keys instead of letting the last one win
        #[arg(long)]
        strict_keys: bool,
    },
}

fn run(args: Args) -> Result<(), Error> {
    match args.commands {
        Commands::Export {
            input,
            output,
            rules,
            strict_keys,
            json,
        } => {
            let options = ExportOptions {
                output_root: output,
                rules: config::load_rules(rules.as_deref())?,
                duplicate_policy: config::duplicate_policy(strict_keys),
                ..ExportOptions::default()
            };
            let grid = read_grid(&input)?;
            let summary = export(&grid, &options)?;
            if json {
                report::print_export_json(&summary)
                    .map_err(|e| Error::DataMismatch(e.to_string()))?;
            } else {
                report::print_export(&summary);
            }
        }
        Commands::Import {
            res,
            output,
            strict_keys,
        } => {
            let options = ImportOptions {
                res_dir: res,
                duplicate_policy: config::duplicate_policy(strict_keys),
                ..ImportOptions::default()
            };
            let summary = import(&options)?;
            report::print_import(&summary);
            write_grid(&summary.grid, &output)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
