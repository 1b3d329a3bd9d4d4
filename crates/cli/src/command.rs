use clap::{Arg, ArgAction, Command as ClapCommand, value_parser};
use std::path::PathBuf;

use crate::PROGRAM_NAME;

pub(crate) fn clap_command() -> ClapCommand {
    ClapCommand::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("List the files that belong to a project directory.")
        .arg(
            Arg::new("dir")
                .value_name("DIR")
                .help("Project root to walk.")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .short('p')
                .value_name("GLOB")
                .help("Only keep files whose relative path matches GLOB (repeatable).")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("ignore")
                .long("ignore")
                .short('i')
                .value_name("GLOB")
                .help("Ignore paths matching GLOB in addition to .gitignore.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("unignore")
                .long("unignore")
                .short('u')
                .value_name("GLOB")
                .help("Re-include paths matching GLOB even when ignored.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .short('e')
                .value_name("EXT")
                .help("Allowed file extension; replaces the default script extensions.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .value_name("DIR")
                .help("Report paths relative to DIR instead of the project root.")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("ignore-file")
                .long("ignore-file")
                .value_name("NAME")
                .help("Ignore file read from the project root.")
                .default_value(".gitignore"),
        )
        .arg(
            Arg::new("manifest")
                .long("manifest")
                .value_name("NAME")
                .help("Manifest read from the project root.")
                .default_value("package.json"),
        )
        .arg(
            Arg::new("skip-dir")
                .long("skip-dir")
                .value_name("NAME")
                .help("Never keep or descend into directories named NAME (repeatable).")
                .value_parser(value_parser!(std::ffi::OsString))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("dirs")
                .long("dirs")
                .help("Also list kept directories.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("absolute")
                .long("absolute")
                .help("Print absolute paths.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON array of { path, relative, kind } objects.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output on stderr (repeatable).")
                .action(ArgAction::Count),
        )
}
