use crate::core::{apply_chain, verbs, Progress};
use crate::fs::AbsPath;
use error_stack::{Result, ResultExt};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use termcolor::Color;

mod config;
pub use config::*;

mod error;
pub use error::ExecuteError;
mod scan_dir;
use scan_dir::scan_dir;

/// Run resub with the given config
///
/// This is the main entry point for resub. It takes a [`Config`] and
/// replicates the source tree into the output tree with substitutions
/// applied. If an error occurs, it will be printed to stderr and the
/// function will return [`Err`].
///
/// If you want to retrieve the error object instead of printing it, use
/// [`Resub::run`].
pub fn resub(config: Config) -> std::result::Result<RunSummary, ()> {
    match Resub::run(config) {
        Ok(summary) => Ok(summary),
        Err(e) => {
            eprintln!("{:?}", e);
            Err(())
        }
    }
}

/// Outcome of a completed run.
///
/// Per-file read failures are recoverable: they are collected here while
/// the walk continues, instead of aborting the run or only being printed.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    /// Number of files written to the output tree
    pub files_written: usize,
    /// Number of directory levels scanned
    pub dirs_scanned: usize,
    /// Files that could not be read as text and were skipped
    pub skipped: Vec<FileFailure>,
}

/// One file skipped during the walk, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    /// The path that was being read when the failure occurred
    pub path: PathBuf,
    pub reason: String,
}

/// The runtime state when executing resub
#[derive(Debug)]
pub struct Resub {
    /// The Config
    config: Config,
    /// The Progress reporter
    progress: Progress,
    /// Directory pairs (source, output) still to process.
    ///
    /// Traversal is driven by this explicit worklist rather than by
    /// recursive calls, so tree depth never translates into stack depth.
    worklist: Vec<(AbsPath, PathBuf)>,
    /// The summary being accumulated
    summary: RunSummary,
}

impl Resub {
    /// Internal run function
    ///
    /// This is what [`resub`] calls internally. The difference is that this
    /// function returns the error instead of printing it.
    pub fn run(config: Config) -> Result<RunSummary, ExecuteError> {
        log::info!("creating resub");
        log::debug!("using config: {:?}", config);

        let progress = Progress::new(config.verbosity.clone());

        let runtime = Self {
            config,
            progress,
            worklist: Vec::new(),
            summary: RunSummary::default(),
        };

        runtime.run_internal()
    }

    fn run_internal(mut self) -> Result<RunSummary, ExecuteError> {
        let _ = self.progress.print_status(
            verbs::USING,
            &format!("{} rule(s)", self.config.rules.len()),
            Color::Yellow,
            false,
        );

        let source = AbsPath::try_from(self.config.source_dir.clone()).map_err(|e| {
            e.change_context(ExecuteError)
                .attach_printable("cannot resolve source directory")
        })?;

        self.worklist.push((source, self.config.output_dir.clone()));
        while let Some((src_dir, out_dir)) = self.worklist.pop() {
            self.process_dir(&src_dir, &out_dir)?;
        }

        let _ = self.progress.print_status(
            verbs::SCANNED,
            &format!("{} directory(s)", self.summary.dirs_scanned),
            Color::Yellow,
            false,
        );
        if !self.summary.skipped.is_empty() {
            let _ = self.progress.print_status(
                verbs::SKIPPED,
                &format!("{} file(s), see warnings above", self.summary.skipped.len()),
                Color::Yellow,
                false,
            );
        }
        let _ = self.progress.print_status(
            verbs::DONE,
            &format!("{} file(s)", self.summary.files_written),
            Color::Green,
            false,
        );

        Ok(self.summary)
    }

    /// Process one directory level: mirror it into the output tree and
    /// queue its subdirectories.
    fn process_dir(&mut self, src_dir: &AbsPath, out_dir: &Path) -> Result<(), ExecuteError> {
        let _ = self
            .progress
            .print_status(verbs::SCANNING, &src_dir.to_string(), Color::Yellow, true);
        log::info!("scanning directory: {src_dir}");

        fs::create_dir_all(out_dir)
            .change_context(ExecuteError)
            .attach_printable_lazy(|| {
                format!("cannot create output directory: {}", out_dir.display())
            })?;

        let directory = scan_dir(src_dir, &self.config.extensions).map_err(|e| {
            let _ = self
                .progress
                .print_status(verbs::FAILED, &src_dir.to_string(), Color::Red, false);
            e.change_context(ExecuteError)
                .attach_printable("cannot scan directory")
        })?;
        self.summary.dirs_scanned += 1;

        for file in directory.files {
            self.process_file(&file, out_dir)?;
        }

        // descend the source tree structure, so new or removed source
        // subdirectories are picked up on each run
        for subdir in directory.subdirs {
            let out_subdir = match subdir.as_path().file_name() {
                Some(name) => out_dir.join(name),
                None => continue,
            };
            self.worklist.push((subdir, out_subdir));
        }

        Ok(())
    }

    /// Apply the substitution queue to one file and write the result to
    /// the output tree.
    ///
    /// Incremental-edit policy: when the output file already exists from a
    /// prior run, it is used as the input baseline instead of the source
    /// file, so this run's substitutions compose with previously applied
    /// edits.
    ///
    /// Read failures (binary content, permissions) skip the file and are
    /// recorded in the summary; they never abort the walk. Rule errors
    /// (an invalid regex) do abort: they are a setup mistake.
    fn process_file(&mut self, file: &AbsPath, out_dir: &Path) -> Result<(), ExecuteError> {
        let file_name = match file.as_path().file_name() {
            Some(name) => name.to_os_string(),
            None => return Ok(()),
        };
        let out_path = out_dir.join(&file_name);

        let read_path: &Path = if out_path.exists() {
            log::debug!("output exists, using it as baseline: {}", out_path.display());
            &out_path
        } else {
            file.as_path()
        };

        let text = match fs::read_to_string(read_path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("file cannot be read: {}: {e}", read_path.display());
                let _ = self.progress.print_status(
                    verbs::SKIPPED,
                    &read_path.display().to_string(),
                    Color::Yellow,
                    false,
                );
                self.summary.skipped.push(FileFailure {
                    path: read_path.to_path_buf(),
                    reason: e.to_string(),
                });
                return Ok(());
            }
        };

        let _ = self.progress.print_status(
            verbs::REPLACING,
            &read_path.display().to_string(),
            Color::Green,
            true,
        );
        log::info!("processing file: {}", read_path.display());

        let result = apply_chain(&text, &self.config.rules).map_err(|e| {
            let _ = self.progress.print_status(
                verbs::FAILED,
                &read_path.display().to_string(),
                Color::Red,
                false,
            );
            e.change_context(ExecuteError).attach_printable(format!(
                "cannot apply substitutions to: {}",
                read_path.display()
            ))
        })?;

        fs::write(&out_path, result)
            .change_context(ExecuteError)
            .attach_printable_lazy(|| {
                format!("cannot write output file: {}", out_path.display())
            })?;
        self.summary.files_written += 1;

        Ok(())
    }
}
