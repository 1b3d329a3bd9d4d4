use std::ffi::OsString;
use std::path::PathBuf;

use logging::Verbosity;
use project::ProjectOptions;

use crate::command::clap_command;
use crate::output::OutputFormat;
use crate::PROGRAM_NAME;

#[derive(Debug)]
pub(crate) struct ParsedArgs {
    pub(crate) root: PathBuf,
    pub(crate) patterns: Vec<String>,
    pub(crate) ignore: Vec<String>,
    pub(crate) unignore: Vec<String>,
    pub(crate) exts: Option<Vec<String>>,
    pub(crate) cwd: Option<PathBuf>,
    pub(crate) ignore_file: String,
    pub(crate) manifest: String,
    pub(crate) skip_dirs: Vec<OsString>,
    pub(crate) include_dirs: bool,
    pub(crate) absolute: bool,
    pub(crate) format: OutputFormat,
    pub(crate) verbosity: Verbosity,
}

impl ParsedArgs {
    pub(crate) fn options(&self) -> ProjectOptions {
        let mut options = ProjectOptions::new()
            .with_patterns(self.patterns.iter().cloned())
            .with_ignore(self.ignore.iter().cloned())
            .with_unignore(self.unignore.iter().cloned())
            .with_ignore_file(self.ignore_file.clone())
            .with_manifest(self.manifest.clone())
            .include_dirs(self.include_dirs);
        if let Some(exts) = &self.exts {
            options = options.with_exts(exts);
        }
        if let Some(cwd) = &self.cwd {
            options = options.with_cwd(cwd.clone());
        }
        options
    }
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let strings = |values: Option<clap::parser::Values<String>>| -> Vec<String> {
        values.map(Iterator::collect).unwrap_or_default()
    };

    let patterns = strings(matches.remove_many::<String>("pattern"));
    let ignore = strings(matches.remove_many::<String>("ignore"));
    let unignore = strings(matches.remove_many::<String>("unignore"));
    let exts = matches
        .remove_many::<String>("ext")
        .map(Iterator::collect);
    let skip_dirs = matches
        .remove_many::<OsString>("skip-dir")
        .map(Iterator::collect)
        .unwrap_or_default();
    let format = if matches.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Lines
    };

    Ok(ParsedArgs {
        root: matches
            .remove_one::<PathBuf>("dir")
            .unwrap_or_else(|| PathBuf::from(".")),
        patterns,
        ignore,
        unignore,
        exts,
        cwd: matches.remove_one::<PathBuf>("cwd"),
        ignore_file: matches
            .remove_one::<String>("ignore-file")
            .unwrap_or_default(),
        manifest: matches.remove_one::<String>("manifest").unwrap_or_default(),
        skip_dirs,
        include_dirs: matches.get_flag("dirs"),
        absolute: matches.get_flag("absolute"),
        format,
        verbosity: Verbosity::from_count(matches.get_count("verbose")),
    })
}
