use std::{
    fs::{self, File},
    io::{BufWriter, Seek, Write},
    path::{Path, PathBuf},
};

use crate::{
    archive::write_archive,
    arg_parsers::{Location, OutputEncoding},
    batch::{ensure_within_limit, Batch, BatchReport, Job, Processed, DEFAULT_MAX_TOTAL_BYTES},
    canvas::CanvasSpec,
    cf_err, cf_try,
    error::CanvasError,
};

/// Where the results of a run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One image, to a file or stdout.
    Single(Location),
    /// One file per image inside a directory, created if missing.
    Directory(PathBuf),
    /// All images inside one ZIP archive.
    Archive(Location),
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::Single(Location::Stdio)
    }
}

/// Plan for the whole run over multiple files
#[derive(Debug)]
pub struct ExecutionPlan {
    pub input_files: Vec<PathBuf>,
    pub output: OutputTarget,
    pub spec: CanvasSpec,
    pub max_total_bytes: u64,
}

impl Default for ExecutionPlan {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            output: OutputTarget::default(),
            spec: CanvasSpec::default(),
            max_total_bytes: DEFAULT_MAX_TOTAL_BYTES,
        }
    }
}

impl ExecutionPlan {
    /// Builds a plan from input paths, expanding directories into the files they contain.
    ///
    /// `explicit_encoding` is the encoding asked for by the user, if any;
    /// otherwise a single output file's extension decides, falling back to PNG.
    pub fn new(
        inputs: &[PathBuf],
        output: Location,
        explicit_encoding: Option<OutputEncoding>,
        spec: CanvasSpec,
        max_total_bytes: u64,
    ) -> Result<Self, CanvasError> {
        let mut input_files = Vec::new();
        let mut any_directory = false;
        for input in inputs {
            if input.is_dir() {
                any_directory = true;
                input_files.extend(list_directory(input)?);
            } else if input.is_file() {
                input_files.push(input.clone());
            } else {
                return Err(cf_err!(
                    "input path does not exist: {}",
                    input.display()
                ));
            }
        }
        if input_files.is_empty() {
            return Err(cf_err!("no images defined"));
        }

        let single_input = input_files.len() == 1 && !any_directory;
        let (output, encoding) = choose_output(output, single_input, explicit_encoding);
        if let OutputTarget::Directory(dir) = &output {
            if dir.exists() && !dir.is_dir() {
                return Err(cf_err!(
                    "output path must be a directory: {}",
                    dir.display()
                ));
            }
        }

        Ok(Self {
            input_files,
            output,
            spec: spec.with_encoding(encoding.unwrap_or(spec.output_encoding)),
            max_total_bytes,
        })
    }

    /// Reads every input, composes them and writes the results.
    /// Returns the report so the caller can decide on the exit status.
    pub fn execute(&self) -> Result<BatchReport, CanvasError> {
        // check the aggregate size before reading or decoding anything
        let mut total = 0u64;
        for path in &self.input_files {
            let metadata = fs::metadata(path)
                .map_err(|error| cf_err!("unable to open image '{}': {error}", path.display()))?;
            total += metadata.len();
        }
        ensure_within_limit(total, self.max_total_bytes)?;

        log::info!("Starting to process {} files", self.input_files.len());
        let mut batch = Batch::new(self.max_total_bytes);
        for path in &self.input_files {
            let bytes = fs::read(path)
                .map_err(|error| cf_err!("unable to open image '{}': {error}", path.display()))?;
            batch.push(Job {
                name: display_name(path),
                bytes,
            })?;
        }

        let report = batch.run(&self.spec);
        self.write_outputs(&report.processed)?;
        Ok(report)
    }

    fn write_outputs(&self, processed: &[Processed]) -> Result<(), CanvasError> {
        match &self.output {
            OutputTarget::Single(location) => {
                // a failed single image leaves nothing to write
                if let Some(entry) = processed.first() {
                    write_bytes(location, &entry.image.bytes)?;
                }
            }
            OutputTarget::Directory(dir) => {
                if processed.is_empty() {
                    return Ok(());
                }
                cf_try!(fs::create_dir_all(dir));
                for entry in processed {
                    let path = dir.join(&entry.file_name);
                    write_bytes(&Location::Path(path), &entry.image.bytes)?;
                }
            }
            OutputTarget::Archive(location) => {
                if processed.is_empty() {
                    return Ok(());
                }
                log::info!("Adding {} files to ZIP", processed.len());
                match location {
                    Location::Path(path) => {
                        let file = create_file(path)?;
                        let mut writer = write_archive(BufWriter::new(file), processed)?;
                        cf_try!(writer.flush());
                    }
                    Location::Stdio => {
                        // ZIP writing needs Seek, which Stdout doesn't implement.
                        // We write to a temporary file and then print out the content at the end.
                        let file = cf_try!(tempfile::tempfile());
                        let writer = write_archive(BufWriter::new(file), processed)?;
                        let mut file = cf_try!(writer.into_inner());
                        cf_try!(file.seek(std::io::SeekFrom::Start(0)));
                        let mut stdout = std::io::stdout().lock();
                        cf_try!(std::io::copy(&mut file, &mut stdout));
                        cf_try!(stdout.flush());
                    }
                }
            }
        }
        Ok(())
    }
}

/// Decides what shape the output takes and, for a single output file,
/// which encoding its extension asks for.
fn choose_output(
    output: Location,
    single_input: bool,
    explicit_encoding: Option<OutputEncoding>,
) -> (OutputTarget, Option<OutputEncoding>) {
    match output {
        Location::Stdio if single_input => (OutputTarget::Single(Location::Stdio), explicit_encoding),
        Location::Stdio => (OutputTarget::Archive(Location::Stdio), explicit_encoding),
        Location::Path(path) => {
            let is_zip = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
            if is_zip {
                (OutputTarget::Archive(Location::Path(path)), explicit_encoding)
            } else if path.is_dir() || !single_input {
                (OutputTarget::Directory(path), explicit_encoding)
            } else {
                let encoding = explicit_encoding
                    .or_else(|| OutputEncoding::from_path(&path))
                    .unwrap_or_default();
                // an extension the encoding cannot produce is replaced
                let path = if OutputEncoding::from_path(&path) == Some(encoding) {
                    path
                } else {
                    path.with_extension(encoding.extension())
                };
                (OutputTarget::Single(Location::Path(path)), Some(encoding))
            }
        }
    }
}

/// Regular files directly inside `dir`, sorted by name. Not recursive.
fn list_directory(dir: &Path) -> Result<Vec<PathBuf>, CanvasError> {
    let entries = fs::read_dir(dir)
        .map_err(|error| cf_err!("unable to read directory '{}': {error}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = cf_try!(entry).path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn create_file(path: &Path) -> Result<File, CanvasError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        cf_try!(fs::create_dir_all(parent));
    }
    // `File::create` automatically truncates (overwrites) the file if it exists.
    File::create(path)
        .map_err(|error| cf_err!("unable to open image '{}': {error}", path.display()))
}

fn write_bytes(location: &Location, bytes: &[u8]) -> Result<(), CanvasError> {
    match location {
        Location::Path(path) => {
            let mut writer = BufWriter::new(create_file(path)?);
            cf_try!(writer.write_all(bytes));
            // Dropping the writer would flush too, but would not report any errors.
            cf_try!(writer.flush());
        }
        Location::Stdio => {
            let mut stdout = std::io::stdout().lock();
            cf_try!(stdout.write_all(bytes));
            cf_try!(stdout.flush());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_output() {
        let single = |path: &str, explicit| {
            choose_output(Location::Path(PathBuf::from(path)), true, explicit)
        };

        assert_eq!(
            single("out.webp", None),
            (
                OutputTarget::Single(Location::Path(PathBuf::from("out.webp"))),
                Some(OutputEncoding::WebP)
            )
        );
        // extensions the encoders cannot produce fall back to .png
        assert_eq!(
            single("out.jpg", None),
            (
                OutputTarget::Single(Location::Path(PathBuf::from("out.png"))),
                Some(OutputEncoding::Png)
            )
        );
        assert_eq!(
            single("out.png", Some(OutputEncoding::WebP)),
            (
                OutputTarget::Single(Location::Path(PathBuf::from("out.webp"))),
                Some(OutputEncoding::WebP)
            )
        );
        assert_eq!(
            single("results.ZIP", None),
            (OutputTarget::Archive(Location::Path(PathBuf::from("results.ZIP"))), None)
        );
        assert_eq!(
            choose_output(Location::Path(PathBuf::from("outdir")), false, None),
            (OutputTarget::Directory(PathBuf::from("outdir")), None)
        );
        assert_eq!(
            choose_output(Location::Stdio, true, None),
            (OutputTarget::Single(Location::Stdio), None)
        );
        assert_eq!(
            choose_output(Location::Stdio, false, Some(OutputEncoding::WebP)),
            (OutputTarget::Archive(Location::Stdio), Some(OutputEncoding::WebP))
        );
    }

    #[test]
    fn missing_input_is_fatal() {
        let result = ExecutionPlan::new(
            &[PathBuf::from("/definitely/not/here.png")],
            Location::Stdio,
            None,
            CanvasSpec::default(),
            DEFAULT_MAX_TOTAL_BYTES,
        );
        assert!(result.unwrap_err().0.contains("input path does not exist"));
    }

    #[test]
    fn directory_inputs_are_listed_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.jpg", "c.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested")).unwrap();

        let out = dir.path().join("out");
        let plan = ExecutionPlan::new(
            &[dir.path().to_path_buf()],
            Location::Path(out.clone()),
            None,
            CanvasSpec::default(),
            DEFAULT_MAX_TOTAL_BYTES,
        )
        .unwrap();
        let names: Vec<_> = plan.input_files.iter().map(|p| display_name(p)).collect();
        // unsupported extensions are kept here so the batch can report them as skipped
        assert_eq!(names, ["a.jpg", "b.png", "c.txt"]);
        assert_eq!(plan.output, OutputTarget::Directory(out));
    }

    #[test]
    fn existing_file_cannot_hold_many_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = [dir.path().join("a.png"), dir.path().join("b.png")];
        for input in &inputs {
            fs::write(input, b"x").unwrap();
        }
        let occupied = dir.path().join("occupied");
        fs::write(&occupied, b"keep me").unwrap();

        let error = ExecutionPlan::new(
            &inputs,
            Location::Path(occupied.clone()),
            None,
            CanvasSpec::default(),
            DEFAULT_MAX_TOTAL_BYTES,
        )
        .unwrap_err();
        assert!(error.0.contains("output path must be a directory"));
        assert_eq!(fs::read(&occupied).unwrap(), b"keep me");
    }

    #[test]
    fn size_cap_is_checked_before_decoding() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("big.png");
        fs::write(&input, vec![0u8; 64]).unwrap();
        let plan = ExecutionPlan::new(
            &[input],
            Location::Path(dir.path().join("out.png")),
            None,
            CanvasSpec::default(),
            63,
        )
        .unwrap();
        let error = plan.execute().unwrap_err();
        assert!(error.0.contains("exceeds the limit of 63 bytes"));
        assert!(!dir.path().join("out.png").exists());
    }
}
