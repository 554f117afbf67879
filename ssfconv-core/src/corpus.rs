//! Single-file and directory conversion

use crate::converter::{join_blocks, Converter};
use crate::error::{ConvertError, Result};
use crate::input::read_lines;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a directory conversion does when one file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole batch on the first error
    #[default]
    FailFast,
    /// Log the error, skip the file and carry on
    BestEffort,
}

/// Two inputs that mapped to the same output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Output path written by both inputs
    pub output: PathBuf,
    /// Input whose result was overwritten
    pub overwritten: PathBuf,
    /// Input whose result was kept
    pub winner: PathBuf,
}

/// Outcome of a directory conversion
#[derive(Debug, Default)]
pub struct DirectoryReport {
    /// Inputs converted successfully, in walk order
    pub converted: Vec<PathBuf>,
    /// Inputs that failed under [`FailurePolicy::BestEffort`]
    pub failed: Vec<(PathBuf, ConvertError)>,
    /// Base-name collisions among converted inputs
    pub collisions: Vec<Collision>,
}

impl DirectoryReport {
    /// Whether every input was converted
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert one tagged file into one SSF file, overwriting `output`
///
/// Returns the number of sentences written.
pub fn convert_single(input: &Path, output: &Path, converter: &Converter<'_>) -> Result<usize> {
    let lines = read_lines(input)?;
    let blocks = converter.convert_sentences(&lines)?;
    fs::write(output, join_blocks(&blocks)).map_err(|e| ConvertError::unwritable(output, e))?;

    log::debug!(
        "Converted {} -> {} ({} sentences)",
        input.display(),
        output.display(),
        blocks.len()
    );
    Ok(blocks.len())
}

/// List every non-directory entry under `dir`, sorted by file name within
/// each directory
///
/// Symlinks to directories are skipped and never descended. Any other
/// symlink is listed, including one whose target is missing, so that
/// converting it fails as an unreadable input.
pub fn collect_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| ConvertError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

/// Convert every file under `input_dir` into `output_dir`
///
/// Walks `input_dir` once with [`collect_input_files`] and hands the list
/// to [`convert_files`].
pub fn convert_directory<F>(
    input_dir: &Path,
    output_dir: &Path,
    converter: &Converter<'_>,
    policy: FailurePolicy,
    on_file: F,
) -> Result<DirectoryReport>
where
    F: FnMut(&Path),
{
    let files = collect_input_files(input_dir)?;
    log::info!("Found {} files under {}", files.len(), input_dir.display());
    convert_files(&files, output_dir, converter, policy, on_file)
}

/// Convert an already collected list of inputs into `output_dir`
///
/// Creates `output_dir` when missing. Outputs are named after each input's
/// base name directly under `output_dir`; subdirectories are flattened, and
/// a later input with the same base name overwrites an earlier one.
/// `on_file` is called after each input is attempted.
pub fn convert_files<F>(
    files: &[PathBuf],
    output_dir: &Path,
    converter: &Converter<'_>,
    policy: FailurePolicy,
    mut on_file: F,
) -> Result<DirectoryReport>
where
    F: FnMut(&Path),
{
    if !output_dir.is_dir() {
        fs::create_dir_all(output_dir).map_err(|e| ConvertError::unwritable(output_dir, e))?;
        log::info!("Created output directory {}", output_dir.display());
    }

    let mut report = DirectoryReport::default();
    let mut written: HashMap<PathBuf, PathBuf> = HashMap::new();

    for input in files {
        let Some(name) = input.file_name() else {
            continue;
        };
        let output = output_dir.join(name);

        match convert_single(input, &output, converter) {
            Ok(_) => {
                if let Some(previous) = written.insert(output.clone(), input.clone()) {
                    log::warn!(
                        "{} overwrote output of {} at {}",
                        input.display(),
                        previous.display(),
                        output.display()
                    );
                    report.collisions.push(Collision {
                        output,
                        overwritten: previous,
                        winner: input.clone(),
                    });
                }
                report.converted.push(input.clone());
            }
            Err(e) if policy == FailurePolicy::BestEffort => {
                log::warn!("Skipping {}: {}", input.display(), e);
                report.failed.push((input.clone(), e));
            }
            Err(e) => return Err(e),
        }

        on_file(input);
    }

    log::info!(
        "Converted {} files, {} failed",
        report.converted.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::MembershipSets;
    use tempfile::TempDir;

    fn sets() -> MembershipSets {
        MembershipSets::new(["$"], ["."])
    }

    #[test]
    fn test_convert_single_writes_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "a_DT b_NN ._.\n\nc_VB\n").unwrap();

        let sets = sets();
        let converter = Converter::new(&sets, "_").unwrap();
        let count = convert_single(&input, &output, &converter).unwrap();

        assert_eq!(count, 2);
        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "<Sentence id='1'>\n1\ta\tDT\n2\tb\tNN\n3\t.\tRD_PUNC\n</Sentence>\n\n\
             <Sentence id='2'>\n1\tc\tVB\n</Sentence>\n"
        );
    }

    #[test]
    fn test_convert_single_overwrites_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "\n  \n").unwrap();
        fs::write(&output, "stale content").unwrap();

        let sets = sets();
        let converter = Converter::new(&sets, "_").unwrap();
        assert_eq!(convert_single(&input, &output, &converter).unwrap(), 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_convert_single_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        fs::write(&input, "a_DT\n").unwrap();
        let output = temp_dir.path().join("missing").join("out.txt");

        let sets = sets();
        let converter = Converter::new(&sets, "_").unwrap();
        let err = convert_single(&input, &output, &converter).unwrap_err();
        assert!(matches!(err, ConvertError::OutputUnwritable { .. }));
    }

    #[test]
    fn test_collect_input_files_recurses() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(temp_dir.path().join("b.txt"), "").unwrap();
        fs::write(nested.join("a.tsv"), "").unwrap();

        let files = collect_input_files(temp_dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("nested/a.tsv")));
    }

    #[test]
    fn test_convert_directory_reports_collisions() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("in");
        fs::create_dir_all(input_dir.join("x")).unwrap();
        fs::create_dir_all(input_dir.join("y")).unwrap();
        fs::write(input_dir.join("x").join("same.txt"), "from_x\n").unwrap();
        fs::write(input_dir.join("y").join("same.txt"), "from_y\n").unwrap();
        let output_dir = temp_dir.path().join("out");

        let sets = sets();
        let converter = Converter::new(&sets, "_").unwrap();
        let report = convert_directory(
            &input_dir,
            &output_dir,
            &converter,
            FailurePolicy::FailFast,
            |_| {},
        )
        .unwrap();

        assert_eq!(report.converted.len(), 2);
        assert_eq!(report.collisions.len(), 1);
        assert!(report.collisions[0].winner.ends_with("y/same.txt"));
        let content = fs::read_to_string(output_dir.join("same.txt")).unwrap();
        assert!(content.contains("1\tfrom\ty\n"));
    }

    #[test]
    fn test_convert_directory_fail_fast() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("in");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("a.txt"), "broken\n").unwrap();
        fs::write(input_dir.join("b.txt"), "fine_JJ\n").unwrap();
        let output_dir = temp_dir.path().join("out");

        let sets = sets();
        let converter = Converter::new(&sets, "_").unwrap();
        let result = convert_directory(
            &input_dir,
            &output_dir,
            &converter,
            FailurePolicy::FailFast,
            |_| {},
        );

        assert!(matches!(result, Err(ConvertError::MalformedUnit { .. })));
        assert!(!output_dir.join("b.txt").exists());
    }

    #[test]
    fn test_convert_directory_best_effort() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("in");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("a.txt"), "broken\n").unwrap();
        fs::write(input_dir.join("b.txt"), "fine_JJ\n").unwrap();
        let output_dir = temp_dir.path().join("out");

        let sets = sets();
        let converter = Converter::new(&sets, "_").unwrap();
        let mut seen = Vec::new();
        let report = convert_directory(
            &input_dir,
            &output_dir,
            &converter,
            FailurePolicy::BestEffort,
            |path| seen.push(path.to_path_buf()),
        )
        .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].0.ends_with("a.txt"));
        assert_eq!(report.converted.len(), 1);
        assert_eq!(seen.len(), 2);
        assert!(output_dir.join("b.txt").exists());
    }

    #[test]
    fn test_convert_files_uses_given_list() {
        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("in");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("a.txt"), "x_NN\n").unwrap();
        fs::write(input_dir.join("b.txt"), "y_NN\n").unwrap();
        let output_dir = temp_dir.path().join("out");

        let files = collect_input_files(&input_dir).unwrap();
        assert_eq!(files.len(), 2);

        let sets = sets();
        let converter = Converter::new(&sets, "_").unwrap();
        let report = convert_files(
            &files[..1],
            &output_dir,
            &converter,
            FailurePolicy::FailFast,
            |_| {},
        )
        .unwrap();

        assert_eq!(report.converted, vec![files[0].clone()]);
        assert!(output_dir.join("a.txt").is_file());
        assert!(!output_dir.join("b.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_fails_fast() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let input_dir = temp_dir.path().join("in");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("a.txt"), "fine_JJ\n").unwrap();
        symlink(temp_dir.path().join("gone.txt"), input_dir.join("dangling.txt")).unwrap();
        let output_dir = temp_dir.path().join("out");

        let files = collect_input_files(&input_dir).unwrap();
        assert!(files.iter().any(|p| p.ends_with("dangling.txt")));

        let sets = sets();
        let converter = Converter::new(&sets, "_").unwrap();
        let result = convert_directory(
            &input_dir,
            &output_dir,
            &converter,
            FailurePolicy::FailFast,
            |_| {},
        );

        match result {
            Err(ConvertError::MissingResource { path, .. }) => {
                assert!(path.ends_with("dangling.txt"))
            }
            other => panic!("Expected MissingResource, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_descended() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let elsewhere = temp_dir.path().join("elsewhere");
        fs::create_dir(&elsewhere).unwrap();
        fs::write(elsewhere.join("hidden.txt"), "x_NN\n").unwrap();
        let input_dir = temp_dir.path().join("in");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("a.txt"), "y_NN\n").unwrap();
        symlink(&elsewhere, input_dir.join("linked")).unwrap();

        let files = collect_input_files(&input_dir).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.txt"));
    }
}
